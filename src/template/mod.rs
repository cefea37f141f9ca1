//! URI template parameter engine.
//!
//! This module turns a template string with `{…}` placeholders plus one
//! user-supplied value per placeholder into a concrete URI, rejecting the
//! submission while any value fails its per-field rule.
//!
//! The pipeline, leaves first:
//!
//! - [`scan`] extracts the ordered raw placeholder names from a template.
//! - [`classify`] tags each name as numeric-constrained (trailing `#`) or
//!   free-form text; [`display_name`] strips the marker for labels.
//! - [`is_valid`] decides whether one raw value satisfies one class.
//! - [`FormState`] holds one value slot per placeholder occurrence and
//!   recomputes aggregate validity on every query.
//! - [`resolve`] substitutes the final values back into the template,
//!   strictly left to right by position.
//!
//! Everything is single-threaded and synchronous; a [`FormState`] belongs
//! to exactly one interactive session and sessions share nothing mutable.
//!
//! # Example
//!
//! ```
//! use linkfill::template::{FormState, resolve, scan};
//!
//! let template = "app://user/{id#}/name/{label}";
//! let mut form = FormState::new(scan(template));
//!
//! form.set_value(0, "7");
//! form.set_value(1, "alice");
//! assert!(form.is_form_valid());
//!
//! let uri = resolve(template, form.values());
//! assert_eq!(uri, "app://user/7/name/alice");
//! ```
//!
//! # Error model
//!
//! Malformed templates are not errors: an unmatched `{` degrades to literal
//! text in both [`scan`] and [`resolve`]. Invalid field values are not
//! errors either - they surface as `is_form_valid() == false` (or as a
//! [`FormError`] on the checked [`FormState::ensure_valid`] path). Only
//! contract violations between collaborators panic: an out-of-range index
//! in [`FormState::set_value`] or a placeholder/value arity mismatch in
//! [`resolve`].

mod classify;
mod error;
mod form;
mod resolve;
mod scanner;
mod validate;

pub use classify::{Classification, NUMERIC_MARKER, classify, display_name};
pub use error::FormError;
pub use form::{FormState, InvalidField};
pub use resolve::resolve;
pub use scanner::scan;
pub use validate::is_valid;
