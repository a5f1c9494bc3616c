//! Bounded fan-out of per-entry lookups.
//!
//! Keeps up to `max_concurrent` lookups running at once; when one finishes,
//! the next pending entry is started until none are left.

use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::document::PackageEntry;
use crate::lookup::HomepageLookup;
use crate::retry::{lookup_with_fallback, FallbackPolicy};

/// What a package line becomes in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Comment line plus the original line.
    Annotated(String),
    /// The original line, unchanged.
    Passthrough(String),
}

impl Resolution {
    pub fn into_text(self) -> String {
        match self {
            Resolution::Annotated(s) | Resolution::Passthrough(s) => s,
        }
    }
}

async fn resolve_entry(
    lookup: &dyn HomepageLookup,
    policy: &FallbackPolicy,
    entry: PackageEntry,
) -> Resolution {
    let name = entry.query_name();
    if name.is_empty() {
        tracing::warn!(line = entry.index() + 1, "package line has no name; left unchanged");
        return Resolution::Passthrough(entry.raw_line().to_string());
    }

    match lookup_with_fallback(lookup, name, policy).await {
        Ok(homepage) => {
            tracing::debug!(package = name, kind = %homepage.kind, url = %homepage.url, "resolved");
            Resolution::Annotated(entry.annotate(&homepage.url))
        }
        Err(e) => {
            tracing::warn!(package = name, error = %e, "homepage lookup failed; line left unchanged");
            Resolution::Passthrough(entry.raw_line().to_string())
        }
    }
}

/// Resolve every entry, returning resolutions keyed by line index.
pub(super) async fn resolve_all(
    entries: Vec<PackageEntry>,
    lookup: Arc<dyn HomepageLookup>,
    policy: FallbackPolicy,
    max_concurrent: usize,
) -> Result<BTreeMap<usize, Resolution>> {
    let max_concurrent = max_concurrent.max(1);
    let mut pending = entries.into_iter();
    let mut join_set = JoinSet::new();
    let mut resolved = BTreeMap::new();

    loop {
        while join_set.len() < max_concurrent {
            let Some(entry) = pending.next() else {
                break;
            };
            let lookup = Arc::clone(&lookup);
            join_set.spawn(async move {
                let index = entry.index();
                let resolution = resolve_entry(lookup.as_ref(), &policy, entry).await;
                (index, resolution)
            });
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        let (index, resolution) = res.map_err(|e| anyhow::anyhow!("lookup task join: {}", e))?;
        resolved.insert(index, resolution);
    }

    Ok(resolved)
}
