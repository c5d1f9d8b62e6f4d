//! Localization capability
//!
//! The only text this crate produces itself is the placeholder name of tasks
//! whose name cannot be resolved. The UI layer supplies a [`Localizer`] to
//! translate it.

use std::collections::HashMap;

/// Translates message keys into display text
pub trait Localizer: Send + Sync {
    /// Translate `key`; implementations fall back to the key itself when no
    /// translation exists
    fn translate(&self, key: &str) -> String;
}

/// Localizer that returns every key unchanged
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyLocalizer;

impl Localizer for KeyLocalizer {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

impl Localizer for HashMap<String, String> {
    fn translate(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}
