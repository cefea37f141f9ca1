//! Per-field value validation.
//!
//! Pure functions, no state: the same `(classification, value)` pair always
//! produces the same answer. Invalid input is an ordinary `false` here -
//! turning that into a disabled submit button or an error message is the
//! caller's business.

use super::classify::Classification;

/// Decide whether a raw user-entered value satisfies a field's class.
///
/// - [`Classification::Text`]: valid iff non-empty after trimming
///   whitespace (whitespace-only counts as empty).
/// - [`Classification::Numeric`]: valid iff non-empty and every character
///   is an ASCII decimal digit. No sign, no decimal point, no surrounding
///   whitespace. Leading zeros are fine - the value is a URI path segment,
///   not an integer.
///
/// # Examples
///
/// ```
/// use linkfill::template::{is_valid, Classification};
///
/// assert!(is_valid(Classification::Numeric, "042"));
/// assert!(!is_valid(Classification::Numeric, "12a"));
/// assert!(!is_valid(Classification::Text, "   "));
/// ```
pub fn is_valid(classification: Classification, raw: &str) -> bool {
    match classification {
        Classification::Text => !raw.trim().is_empty(),
        Classification::Numeric => !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()),
    }
}
