//! Deduplicated warnings.
//!
//! Advisory findings (deprecated elements, colliding ids) tend to repeat
//! once per occurrence in a document. This module forwards each distinct
//! message to `tracing` only the first time it is seen.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Emit a warning for `component` unless the same message was already emitted.
///
/// Returns `true` when the warning was emitted by this call.
///
/// # Example
/// ```
/// use tagsmith_common::warning::warn_once;
///
/// let first = warn_once("lint", "element <center> is deprecated");
/// let second = warn_once("lint", "element <center> is deprecated");
/// assert!(first && !second);
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        tracing::warn!(component, "{message}");
    }
    should_emit
}

/// Forget every recorded warning (call before processing a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
