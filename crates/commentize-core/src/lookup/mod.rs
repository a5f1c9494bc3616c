//! Homepage lookup capability.
//!
//! The annotator only talks to [`HomepageLookup`]; how the homepage is found
//! (Homebrew subprocess, fake table in tests) stays behind the trait.

mod brew;
mod error;
mod extract;

pub use brew::BrewLookup;
pub use error::LookupError;
pub use extract::{cask_homepage, formula_homepage};

use async_trait::async_trait;
use std::fmt;

/// Package category in Homebrew's taxonomy; each is queried differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Formula,
    Cask,
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageKind::Formula => write!(f, "formula"),
            PackageKind::Cask => write!(f, "cask"),
        }
    }
}

/// A resolved homepage and the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homepage {
    pub url: String,
    pub kind: PackageKind,
}

/// Looks up the homepage URL of a named package.
#[async_trait]
pub trait HomepageLookup: Send + Sync {
    async fn lookup_homepage(&self, name: &str, kind: PackageKind) -> Result<String, LookupError>;
}
