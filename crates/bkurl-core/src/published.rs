//! Process-wide `BACKEND_URL`, written once by startup code.
//!
//! Prefer passing [`ResolvedBackend`] to consumers directly. The slot exists
//! for code that cannot be handed the value.

use crate::error::PublishError;
use crate::resolver::ResolvedBackend;
use std::sync::OnceLock;

static BACKEND_URL: OnceLock<String> = OnceLock::new();

/// Store the resolved URL. Publishing the same value again is a no-op;
/// a different value is rejected.
pub fn publish(resolved: &ResolvedBackend) -> Result<&'static str, PublishError> {
    publish_in(&BACKEND_URL, resolved.as_str())
}

/// The published URL, if startup has published one.
pub fn backend_url() -> Option<&'static str> {
    BACKEND_URL.get().map(String::as_str)
}

fn publish_in<'a>(slot: &'a OnceLock<String>, url: &str) -> Result<&'a str, PublishError> {
    let stored = slot.get_or_init(|| url.to_string());
    if stored != url {
        return Err(PublishError::AlreadyPublished {
            existing: stored.clone(),
            attempted: url.to_string(),
        });
    }
    tracing::debug!("BACKEND_URL = {}", stored);
    Ok(stored.as_str())
}
