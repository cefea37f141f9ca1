//! Structured errors for the checked resolution path.
//!
//! Invalid user input never panics: it surfaces either as
//! `is_form_valid() == false` or, on the checked path the CLI uses before
//! submitting, as one of these values. Contract violations between
//! collaborators (out-of-range index, placeholder/value arity drift) are a
//! different animal and panic instead - see [`crate::template::form`] and
//! [`crate::template::resolve`].

use thiserror::Error;

use super::classify::Classification;

/// Why a form session cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The collaborator supplied a value vector of the wrong length for the
    /// scanned placeholder list.
    #[error("template has {expected} placeholder(s) but {actual} value(s) were supplied")]
    ValueCountMismatch {
        expected: usize,
        actual: usize,
    },

    /// A field's current value fails its classification.
    #[error("field '{label}' (position {index}, {classification}) has an invalid value")]
    InvalidValue {
        /// Zero-based position in the scanned placeholder list.
        index: usize,
        /// Display label (numeric marker already stripped).
        label: String,
        classification: Classification,
    },
}
