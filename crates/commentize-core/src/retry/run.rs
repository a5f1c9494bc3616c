//! Fallback loop: formula first, then at most one cask attempt.

use crate::lookup::{Homepage, HomepageLookup, LookupError, PackageKind};

use super::policy::{FallbackDecision, FallbackPolicy};

/// Look up `name` as a formula, falling back to a cask lookup per `policy`.
/// Returns the error of the last attempt made.
pub async fn lookup_with_fallback(
    lookup: &dyn HomepageLookup,
    name: &str,
    policy: &FallbackPolicy,
) -> Result<Homepage, LookupError> {
    let err = match lookup.lookup_homepage(name, PackageKind::Formula).await {
        Ok(url) => {
            return Ok(Homepage {
                url,
                kind: PackageKind::Formula,
            })
        }
        Err(e) => e,
    };

    match policy.decide(&err) {
        FallbackDecision::NoFallback => Err(err),
        FallbackDecision::FallbackAfter(delay) => {
            tracing::debug!(
                package = name,
                error = %err,
                delay_ms = delay.as_millis() as u64,
                "formula lookup failed; trying cask"
            );
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let url = lookup.lookup_homepage(name, PackageKind::Cask).await?;
            Ok(Homepage {
                url,
                kind: PackageKind::Cask,
            })
        }
    }
}
