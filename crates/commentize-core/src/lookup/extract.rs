//! Homepage extraction from `brew info` JSON.
//!
//! `brew info <name> --json` prints an array of formula objects;
//! `--json=v2` prints `{"formulae": [...], "casks": [...]}`. Only the
//! `homepage` field matters here.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct InfoEntry {
    #[serde(default)]
    homepage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfoV2 {
    #[serde(default)]
    casks: Vec<InfoEntry>,
}

fn first_homepage(entries: Vec<InfoEntry>) -> Option<String> {
    entries
        .into_iter()
        .filter_map(|e| e.homepage)
        .map(|h| h.trim().to_string())
        .find(|h| !h.is_empty())
}

/// First non-empty homepage from `brew info --json` output.
pub fn formula_homepage(stdout: &str) -> Result<Option<String>, serde_json::Error> {
    let entries: Vec<InfoEntry> = serde_json::from_str(stdout)?;
    Ok(first_homepage(entries))
}

/// First non-empty cask homepage from `brew info --json=v2` output.
pub fn cask_homepage(stdout: &str) -> Result<Option<String>, serde_json::Error> {
    let info: InfoV2 = serde_json::from_str(stdout)?;
    Ok(first_homepage(info.casks))
}
