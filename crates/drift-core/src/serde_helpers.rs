//! Shared serde default helpers

/// Default to `true` for boolean fields that are opt-out
pub fn default_true() -> bool {
    true
}
