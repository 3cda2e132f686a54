//! Renderer warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the style and render components to report values that were
//! ignored in favour of a documented fallback.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning and report whether it has not been seen before.
///
/// This is the deduplication half of [`warn_once`], split out so callers
/// that route warnings elsewhere can still share the seen-set.
pub fn record_warning(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about an ignored or unsupported value (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unsupported length unit in font-size: 1.5em");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record_warning(component, message) {
        eprintln!("{}", format!("[Quire {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call when loading a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
