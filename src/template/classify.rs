//! Parameter classification: numeric-constrained vs free-form text.
//!
//! Templates mark a numeric field by ending the placeholder name with a
//! reserved marker character (`{port#}`). That convention is a string
//! convention carried inside the name itself, so it is deliberately kept in
//! this one module: the scanner and the substitution walker never look at
//! it, and changing the marker means changing [`NUMERIC_MARKER`] and
//! nothing else.
//!
//! Classification is positional downstream: two placeholders with the same
//! stripped name at different positions are independent fields.

use serde::Serialize;

/// Marker suffix on a raw placeholder name that requests digit-only input.
pub const NUMERIC_MARKER: char = '#';

/// Validation class of a single placeholder position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Value must consist entirely of decimal digits.
    Numeric,
    /// Value must be non-blank.
    Text,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Numeric => write!(f, "numeric"),
            Classification::Text => write!(f, "text"),
        }
    }
}

/// Classify a raw placeholder name as scanned from the template.
///
/// # Examples
///
/// ```
/// use linkfill::template::{classify, Classification};
///
/// assert_eq!(classify("id#"), Classification::Numeric);
/// assert_eq!(classify("label"), Classification::Text);
/// ```
pub fn classify(name: &str) -> Classification {
    if name.ends_with(NUMERIC_MARKER) {
        Classification::Numeric
    } else {
        Classification::Text
    }
}

/// Display label for a raw placeholder name: one trailing marker stripped.
///
/// Only affects how the field is labeled; identity stays positional.
///
/// # Examples
///
/// ```
/// use linkfill::template::display_name;
///
/// assert_eq!(display_name("id#"), "id");
/// assert_eq!(display_name("label"), "label");
/// ```
pub fn display_name(name: &str) -> &str {
    name.strip_suffix(NUMERIC_MARKER).unwrap_or(name)
}
