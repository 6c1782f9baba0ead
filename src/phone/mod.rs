//! Phone-number normalization
//!
//! Rewrites phone-like values into a leading-`+` international form, biased
//! by a free-text geographic zone hint. Best effort only: anything that does
//! not look like a phone number after separator cleanup is returned
//! untouched. Never errors.

use std::sync::LazyLock;

use regex::Regex;

pub mod geo;

pub use geo::{lookup_calling_code, resolve_calling_code, DEFAULT_CALLING_CODE};

/// Whitespace and common separator characters stripped before inspection
static SEPARATORS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s\-.()]+").unwrap());

/// A bare national or international number: digits only
static BARE_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

/// Normalize a phone-like value using a zone hint to resolve the calling
/// code. See [`normalize_phone_with_code`] for the rewrite rules.
pub fn normalize_phone(raw: &str, zone_hint: Option<&str>) -> String {
    let code = zone_hint
        .map(resolve_calling_code)
        .unwrap_or(DEFAULT_CALLING_CODE);
    normalize_phone_with_code(raw, code)
}

/// Normalize a phone-like value against a known calling code.
///
/// Rules, applied to the separator-stripped value:
/// - empty → empty
/// - contains anything besides digits and `+` → returned raw, untouched
/// - already `+`-prefixed → unchanged
/// - `00`-prefixed → `00` replaced by `+` (literal two-character swap,
///   digit count deliberately not validated)
/// - `0`-prefixed → `0` replaced by the calling code
/// - bare digits → calling code prepended
/// - anything else (stray `+` mid-string) → the cleaned value as-is
pub fn normalize_phone_with_code(raw: &str, calling_code: &str) -> String {
    let cleaned = SEPARATORS_RE.replace_all(raw.trim(), "");

    if cleaned.is_empty() {
        return String::new();
    }

    if !cleaned.chars().all(|c| c.is_ascii_digit() || c == '+') {
        return raw.to_string();
    }

    if cleaned.starts_with('+') {
        return cleaned.into_owned();
    }

    if let Some(rest) = cleaned.strip_prefix("00") {
        return format!("+{rest}");
    }

    if let Some(rest) = cleaned.strip_prefix('0') {
        return format!("{calling_code}{rest}");
    }

    if BARE_DIGITS_RE.is_match(&cleaned) {
        return format!("{calling_code}{cleaned}");
    }

    cleaned.into_owned()
}
