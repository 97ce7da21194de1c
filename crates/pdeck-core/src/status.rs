//! Status string classification.
//!
//! The backend reports free-form status text ("queued", "starting",
//! "started (no debug info)", "error", ...). Every rule that looks inside that
//! text lives here so the matching can change without touching reconciliation.

use crate::types::{Badge, BadgeKind};

/// Derive the badge for a raw status string.
///
/// Rules, first match wins, on the lowercased text:
/// 1. contains `"error"` → `{error, "error"}`
/// 2. starts with `"start"` → `{ok, "started"}`
/// 3. contains `"queued"` → `{running, "queued"}`
/// 4. anything else → `{neutral, <raw status>}`
pub fn classify_status(raw: &str) -> Badge {
    let status = raw.to_lowercase();

    if status.contains("error") {
        Badge::new(BadgeKind::Error, "error")
    } else if status.starts_with("start") {
        Badge::new(BadgeKind::Ok, "started")
    } else if status.contains("queued") {
        Badge::new(BadgeKind::Running, "queued")
    } else {
        Badge::new(BadgeKind::Neutral, raw)
    }
}

/// Whether a status reports the profile as up (`started`, `started (no debug info)`, ...)
pub fn is_started(raw: &str) -> bool {
    raw.to_lowercase().starts_with("start")
}
