//! Process-wide set identifiers
//!
//! Two disjoint monotonic counters hand out set ids:
//!
//! - interactive ids (sets created in the editor) start at the current Unix
//!   time in milliseconds, so they never go below anything a previous session
//!   created and persisted;
//! - import ids (sets recovered by the importer) start at [`IMPORT_ID_BASE`]
//!   and stay below [`INTERACTIVE_ID_FLOOR`].
//!
//! Restored state must be reported through [`observe`] so both counters move
//! past every id already in use.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// First id handed out to imported sets.
pub const IMPORT_ID_BASE: u64 = 10_000;

/// Ids at or above this value belong to the interactive range.
pub const INTERACTIVE_ID_FLOOR: u64 = 1_000_000_000;

static IMPORT_NEXT: AtomicU64 = AtomicU64::new(IMPORT_ID_BASE);

fn interactive_counter() -> &'static AtomicU64 {
    static NEXT: OnceLock<AtomicU64> = OnceLock::new();
    NEXT.get_or_init(|| {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        AtomicU64::new(now.max(INTERACTIVE_ID_FLOOR))
    })
}

/// Next id for a set created in the editor.
pub fn next_set_id() -> u64 {
    interactive_counter().fetch_add(1, Ordering::Relaxed)
}

/// Next id for an imported set.
pub fn next_import_id() -> u64 {
    IMPORT_NEXT.fetch_add(1, Ordering::Relaxed)
}

/// Record an id that is already in use so neither counter hands it out again.
pub fn observe(id: u64) {
    if id >= INTERACTIVE_ID_FLOOR {
        interactive_counter().fetch_max(id.saturating_add(1), Ordering::Relaxed);
    } else {
        IMPORT_NEXT.fetch_max(id.saturating_add(1), Ordering::Relaxed);
    }
}
