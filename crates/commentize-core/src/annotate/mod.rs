//! Annotator: add a homepage comment above every package line of a list.
//!
//! Lookups fan out concurrently (bounded by `max_concurrent`), and results are
//! substituted by original line index once every lookup has settled, so the
//! output order never depends on completion order. A failed lookup leaves its
//! line unchanged; it never aborts the run.

mod fanout;

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::CommentizeConfig;
use crate::document::Document;
use crate::lookup::{BrewLookup, HomepageLookup};
use crate::retry::FallbackPolicy;

pub use fanout::Resolution;

/// Where the annotated document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `-` means stdout; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(arg))
        }
    }
}

/// Outcome of one annotation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateReport {
    /// The rendered output document.
    pub output: String,
    /// Package lines that received a homepage comment.
    pub annotated: usize,
    /// Package lines left unchanged because the lookup failed.
    pub passthrough: usize,
}

impl AnnotateReport {
    pub fn total_entries(&self) -> usize {
        self.annotated + self.passthrough
    }
}

pub struct Annotator {
    lookup: Arc<dyn HomepageLookup>,
    policy: FallbackPolicy,
    max_concurrent: usize,
}

impl Annotator {
    pub fn new(lookup: Arc<dyn HomepageLookup>) -> Self {
        Self {
            lookup,
            policy: FallbackPolicy::default(),
            max_concurrent: CommentizeConfig::default().max_concurrent_lookups,
        }
    }

    /// Annotator backed by the configured Homebrew binary.
    pub fn from_config(cfg: &CommentizeConfig) -> Self {
        Self::new(Arc::new(BrewLookup::new(&cfg.brew_path)))
            .with_fallback_policy(cfg.fallback_policy())
            .with_max_concurrent(cfg.max_concurrent_lookups)
    }

    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Cap on lookups in flight; values below 1 are treated as 1.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Annotate an in-memory document.
    pub async fn annotate_text(&self, text: &str) -> Result<AnnotateReport> {
        let doc = Document::parse(text);
        let entries = doc.package_entries();
        tracing::debug!(
            entries = entries.len(),
            max_concurrent = self.max_concurrent,
            "resolving homepages"
        );

        let resolved = fanout::resolve_all(
            entries,
            Arc::clone(&self.lookup),
            self.policy,
            self.max_concurrent,
        )
        .await?;

        let mut annotated = 0;
        let mut passthrough = 0;
        let mut replacements = BTreeMap::new();
        for (index, resolution) in resolved {
            match &resolution {
                Resolution::Annotated(_) => annotated += 1,
                Resolution::Passthrough(_) => passthrough += 1,
            }
            replacements.insert(index, resolution.into_text());
        }

        Ok(AnnotateReport {
            output: doc.render(&replacements),
            annotated,
            passthrough,
        })
    }

    /// Read `input`, annotate it and write the result to `output`.
    pub async fn annotate_file(&self, input: &Path, output: &OutputTarget) -> Result<AnnotateReport> {
        let bytes = tokio::fs::read(input)
            .await
            .with_context(|| format!("read {}", input.display()))?;
        // Invalid UTF-8 is replaced, not rejected.
        let text = String::from_utf8_lossy(&bytes);
        let report = self.annotate_text(&text).await?;
        match output {
            OutputTarget::File(path) => {
                tokio::fs::write(path, &report.output)
                    .await
                    .with_context(|| format!("write {}", path.display()))?;
                tracing::info!(
                    path = %path.display(),
                    annotated = report.annotated,
                    passthrough = report.passthrough,
                    "wrote annotated list"
                );
            }
            OutputTarget::Stdout => println!("{}", report.output),
        }
        Ok(report)
    }
}
