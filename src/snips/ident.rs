use std::sync::atomic::{AtomicU64, Ordering};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::debug;
use uuid::Uuid;

use crate::model::Snippet;

/// Distinguishes ids generated within one clock tick.
static ASSIGN_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates an opaque, URL-safe snippet identifier.
///
/// The id is a SHA-256 digest over the capture timestamp, a
/// process-monotonic counter, and fresh UUID entropy, so rapid
/// sequential assignment cannot collide even when the clock stalls.
/// Callers must treat ids as stable once written to a file.
pub fn generate_id() -> String {
    let mut hasher = Sha256::new();
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    hasher.update(nanos.to_be_bytes());
    hasher.update(
        ASSIGN_COUNTER
            .fetch_add(1, Ordering::Relaxed)
            .to_be_bytes(),
    );
    hasher.update(Uuid::new_v4().as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Assigns a fresh id to every snippet whose `id` variable is missing or
/// empty. Returns whether anything was assigned, so the caller knows
/// whether the backing file needs rewriting.
pub fn assign_missing_ids(snippets: &mut [Snippet]) -> bool {
    let mut assigned = false;
    for snip in snippets.iter_mut() {
        if snip.id().is_none_or(str::is_empty) {
            debug!("found snippet without id");
            snip.set_var("id", generate_id());
            assigned = true;
        }
    }
    assigned
}
