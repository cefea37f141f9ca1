//! Mutable form session for one in-progress resolution.
//!
//! A [`FormState`] owns exactly one value slot per placeholder occurrence,
//! in scan order. Identity is positional throughout: two placeholders that
//! share a stripped name at different positions are independent fields with
//! independent values and independent validity.
//!
//! Aggregate validity is derived fresh from the current values on every
//! call rather than cached incrementally, so it can never drift from the
//! truth. Each position's [`Classification`] *is* cached - it is a pure
//! function of the immutable placeholder name, so it cannot go stale.
//!
//! A session is scoped to one dialog interaction. [`FormState::reset`]
//! clears every slot in place and is used on both cancel and successful
//! submit, so a reused session never leaks previous input.
//!
//! # Examples
//!
//! ```
//! use linkfill::template::{scan, FormState};
//!
//! let mut form = FormState::new(scan("app://user/{id#}/name/{label}"));
//! assert!(!form.is_form_valid());
//!
//! form.set_value(0, "7");
//! form.set_value(1, "alice");
//! assert!(form.is_form_valid());
//!
//! form.reset();
//! assert!(!form.is_form_valid());
//! ```

use tracing::trace;

use super::classify::{Classification, classify, display_name};
use super::error::FormError;
use super::validate::is_valid;

/// One failing slot, as reported by [`FormState::invalid_fields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidField {
    /// Zero-based position in the scanned placeholder list.
    pub index: usize,
    /// Display label for the position (marker stripped).
    pub label: String,
    pub classification: Classification,
}

/// Value slots and cached classifications for one resolution session.
#[derive(Debug, Clone)]
pub struct FormState {
    placeholders: Vec<String>,
    classifications: Vec<Classification>,
    values: Vec<String>,
}

impl FormState {
    /// Start a session for the given scanned placeholder list.
    ///
    /// Allocates one empty value slot per position and classifies each
    /// position once. An empty list is a perfectly good session: it is
    /// immediately valid and resolution is a pass-through.
    pub fn new(placeholders: Vec<String>) -> Self {
        let classifications = placeholders.iter().map(|name| classify(name)).collect();
        let values = vec![String::new(); placeholders.len()];
        Self {
            placeholders,
            classifications,
            values,
        }
    }

    /// Number of placeholder positions (and value slots) in the session.
    pub fn len(&self) -> usize {
        self.placeholders.len()
    }

    /// True when the template had no placeholders.
    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }

    /// Display label for a position (numeric marker stripped).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn label(&self, index: usize) -> &str {
        display_name(&self.placeholders[index])
    }

    /// Cached classification for a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn classification(&self, index: usize) -> Classification {
        self.classifications[index]
    }

    /// Current raw value at a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn value(&self, index: usize) -> &str {
        &self.values[index]
    }

    /// All current values, in placeholder order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Replace the value at `index`, leaving every other slot untouched.
    ///
    /// The session owns a pre-sized vector: edits mutate in place, they
    /// never grow or reallocate it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. That is a contract violation by
    /// the presentation collaborator (it only holds indices the scan gave
    /// it), not a user-facing condition, so it fails loudly instead of
    /// being ignored or growing the vector.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        assert!(
            index < self.values.len(),
            "set_value index {index} out of range for form with {} field(s)",
            self.values.len()
        );
        self.values[index] = value.into();
        trace!(index, valid = self.is_field_valid(index), "field edited");
    }

    /// Whether the value at one position satisfies its classification.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn is_field_valid(&self, index: usize) -> bool {
        is_valid(self.classifications[index], &self.values[index])
    }

    /// Aggregate validity: true iff every position is valid.
    ///
    /// Recomputed from the live values on every call. An empty form is
    /// trivially valid.
    pub fn is_form_valid(&self) -> bool {
        (0..self.values.len()).all(|i| self.is_field_valid(i))
    }

    /// Every failing position, in order, with its label and class.
    pub fn invalid_fields(&self) -> Vec<InvalidField> {
        (0..self.values.len())
            .filter(|&i| !self.is_field_valid(i))
            .map(|i| InvalidField {
                index: i,
                label: self.label(i).to_string(),
                classification: self.classifications[i],
            })
            .collect()
    }

    /// Checked submit gate: `Ok(())` iff the whole form is valid, otherwise
    /// the first failing field as a [`FormError`].
    pub fn ensure_valid(&self) -> Result<(), FormError> {
        match self.invalid_fields().into_iter().next() {
            None => Ok(()),
            Some(field) => Err(FormError::InvalidValue {
                index: field.index,
                label: field.label,
                classification: field.classification,
            }),
        }
    }

    /// Clear every value slot in place, keeping the placeholder list.
    ///
    /// Used on cancel and after a successful submit.
    pub fn reset(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        trace!(fields = self.values.len(), "form reset");
    }
}
