//! Homebrew-backed lookup: runs `brew info <name> --json[=v2]` without a shell.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use super::error::LookupError;
use super::extract::{cask_homepage, formula_homepage};
use super::{HomepageLookup, PackageKind};

/// Queries a Homebrew binary for package homepages.
#[derive(Debug, Clone)]
pub struct BrewLookup {
    program: PathBuf,
}

impl Default for BrewLookup {
    fn default() -> Self {
        Self::new("brew")
    }
}

impl BrewLookup {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn json_flag(kind: PackageKind) -> &'static str {
        match kind {
            PackageKind::Formula => "--json",
            PackageKind::Cask => "--json=v2",
        }
    }
}

#[async_trait]
impl HomepageLookup for BrewLookup {
    async fn lookup_homepage(&self, name: &str, kind: PackageKind) -> Result<String, LookupError> {
        tracing::debug!(package = name, %kind, program = %self.program.display(), "brew info");
        let output = Command::new(&self.program)
            .arg("info")
            .arg(name)
            .arg(Self::json_flag(kind))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| LookupError::Invocation {
                program: self.program.display().to_string(),
                source,
            })?;

        // Homebrew reports unknown names on stderr; any stderr output counts as failure.
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !stderr.is_empty() || !output.status.success() {
            let message = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(LookupError::Query {
                package: name.to_string(),
                kind,
                message,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let homepage = match kind {
            PackageKind::Formula => formula_homepage(&stdout),
            PackageKind::Cask => cask_homepage(&stdout),
        }
        .map_err(|source| LookupError::Json {
            package: name.to_string(),
            kind,
            source,
        })?;

        homepage.ok_or_else(|| LookupError::MissingHomepage {
            package: name.to_string(),
            kind,
        })
    }
}
