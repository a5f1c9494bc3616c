//! Lookup error type, classified by the fallback policy.

use thiserror::Error;

use super::PackageKind;

/// Error returned by a single homepage query.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The query tool reported failure (output on stderr or non-zero exit).
    #[error("{kind} query for {package} failed: {message}")]
    Query {
        package: String,
        kind: PackageKind,
        message: String,
    },
    /// The query tool could not be run at all.
    #[error("failed to run {program}: {source}")]
    Invocation {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The tool's stdout was not the expected JSON.
    #[error("unreadable {kind} info for {package}: {source}")]
    Json {
        package: String,
        kind: PackageKind,
        #[source]
        source: serde_json::Error,
    },
    /// The JSON carried no usable homepage.
    #[error("no {kind} homepage for {package}")]
    MissingHomepage { package: String, kind: PackageKind },
}

impl LookupError {
    /// True when the tool itself could not be run (spawn/IO failure).
    pub fn is_invocation(&self) -> bool {
        matches!(self, LookupError::Invocation { .. })
    }
}
