//! `commentize --inFile <path> --outFile <path>` – annotate a package list.

use anyhow::Result;
use commentize_core::annotate::{Annotator, OutputTarget};
use commentize_core::config::CommentizeConfig;
use std::path::Path;

pub async fn run_annotate(cfg: &CommentizeConfig, in_file: &Path, out_file: &str) -> Result<()> {
    let annotator = Annotator::from_config(cfg);
    let output = OutputTarget::from_arg(out_file);
    let report = annotator.annotate_file(in_file, &output).await?;
    tracing::info!(
        "annotated {} of {} package line(s); {} left unchanged",
        report.annotated,
        report.total_entries(),
        report.passthrough
    );
    Ok(())
}
