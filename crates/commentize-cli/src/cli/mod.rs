//! CLI for commentize.

mod annotate;

use anyhow::Result;
use clap::Parser;
use commentize_core::config::{self, CommentizeConfig, FallbackConfig};
use commentize_core::logging;
use std::path::PathBuf;

use annotate::run_annotate;

/// Annotate a package list with each package's homepage URL.
#[derive(Debug, Parser)]
#[command(name = "commentize")]
#[command(
    about = "Insert homepage comments above each `- <package>` line of a list",
    long_about = None
)]
pub struct Cli {
    /// Package list to annotate.
    #[arg(long = "inFile", visible_alias = "in-file", value_name = "PATH")]
    pub in_file: PathBuf,

    /// Where to write the annotated list ("-" for stdout). Overwritten if it exists.
    #[arg(long = "outFile", visible_alias = "out-file", value_name = "PATH")]
    pub out_file: String,

    /// Maximum lookups in flight at once (default from config, 8).
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Upper bound of the random delay before the cask fallback, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub max_jitter_ms: Option<u64>,

    /// Homebrew binary to query.
    #[arg(long, value_name = "PATH")]
    pub brew: Option<String>,

    /// Config file to use instead of ~/.config/commentize/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log to a file instead of stderr (default ~/.local/state/commentize/commentize.log).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<Option<PathBuf>>,
}

impl Cli {
    /// Log file requested on the command line, resolving the default location.
    pub fn log_file_path(&self) -> Option<Result<PathBuf>> {
        self.log_file.as_ref().map(|path| match path {
            Some(path) => Ok(path.clone()),
            None => logging::default_log_path(),
        })
    }

    /// Config file (or `--config`) with command-line overrides applied.
    fn effective_config(&self) -> Result<CommentizeConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_default()?,
        };
        self.apply_overrides(&mut cfg);
        Ok(cfg)
    }

    fn apply_overrides(&self, cfg: &mut CommentizeConfig) {
        if let Some(jobs) = self.jobs {
            cfg.max_concurrent_lookups = jobs;
        }
        if let Some(brew) = &self.brew {
            cfg.brew_path = brew.clone();
        }
        if let Some(max_jitter_ms) = self.max_jitter_ms {
            cfg.fallback = Some(FallbackConfig { max_jitter_ms });
        }
    }

    pub async fn run(self) -> Result<()> {
        let cfg = self.effective_config()?;
        tracing::debug!("effective config: {:?}", cfg);
        run_annotate(&cfg, &self.in_file, &self.out_file).await
    }
}

#[cfg(test)]
mod tests;
