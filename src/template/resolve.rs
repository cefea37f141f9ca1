//! Positional substitution of placeholder values into a template.
//!
//! Substitution is purely positional, never name-keyed: the first matched
//! `{…}` span takes the first value, the second span the second value, and
//! so on, which is what lets two placeholders with the same name carry
//! different values. The walker shares its span definition with the
//! scanner, so the positions consumed here are exactly the positions
//! [`crate::template::scan`] reported.
//!
//! Text outside matched spans, including any malformed `{` sequence, passes
//! through byte-for-byte.

use tracing::debug;

use super::scanner::placeholder_spans;

/// Replace every matched `{…}` span with the positionally aligned value.
///
/// `values` must come from a form session built on [`crate::template::scan`]
/// of this same template, and the caller submits only when the form is
/// valid; this function does not re-validate.
///
/// # Panics
///
/// Panics if `values.len()` differs from the number of matched spans. The
/// placeholder list and value vector must always have been produced from
/// the same scan; a mismatch means a collaborator dropped or reordered
/// slots, and silently producing a wrong URI would be worse than failing.
///
/// # Examples
///
/// ```
/// use linkfill::template::resolve;
///
/// let uri = resolve(
///     "app://user/{id#}/name/{label}",
///     &["7".to_string(), "alice".to_string()],
/// );
/// assert_eq!(uri, "app://user/7/name/alice");
///
/// // No placeholders: pass-through.
/// assert_eq!(resolve("app://settings", &[]), "app://settings");
/// ```
pub fn resolve(template: &str, values: &[String]) -> String {
    let spans = placeholder_spans(template);
    assert_eq!(
        spans.len(),
        values.len(),
        "placeholder/value mismatch: template has {} placeholder(s), got {} value(s)",
        spans.len(),
        values.len()
    );

    let mut resolved = String::with_capacity(template.len());
    let mut cursor = 0;
    for (span, value) in spans.iter().zip(values) {
        resolved.push_str(&template[cursor..span.start]);
        resolved.push_str(value);
        cursor = span.end;
    }
    resolved.push_str(&template[cursor..]);

    debug!(replaced = spans.len(), "resolved template");
    resolved
}
