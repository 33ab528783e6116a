//! Internal helpers for input normalization.
//!
//! These utilities are **not** part of the public API. They centralize the
//! trimming and canonicalization rules so every write operation enforces the
//! same invariants.

use unicode_normalization::UnicodeNormalization;

use crate::{EngineError, ResultEngine};

/// Trims a required name and rejects empty input.
pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidAmount(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Canonical form used when comparing display names: trimmed, NFKC
/// normalized, lowercased. Display names keep their original spelling; only
/// uniqueness checks and name lookups go through this.
pub(crate) fn canonical_name(value: &str) -> String {
    value.trim().nfkc().collect::<String>().to_lowercase()
}

/// Trims optional free text, mapping whitespace-only input to `None`.
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
