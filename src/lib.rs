//! linkfill - resolve required parameters in URI templates.
//!
//! Deep-link style URIs often ship as templates with unfilled placeholders:
//! `app://user/{id#}/name/{label}`. Before such a URI can be navigated, a
//! user has to supply one value per placeholder, and each value has to pass
//! a per-field rule (a name ending in `#` takes decimal digits only,
//! anything else takes non-blank text). This crate is the engine that turns
//! `(template, values)` into either a concrete URI or a rejection.
//!
//! # Architecture
//!
//! - [`template`] - the core: scanning (`scan`), classification
//!   (`classify`/`display_name`), per-field validation (`is_valid`), the
//!   mutable form session (`FormState`), and positional substitution
//!   (`resolve`). All pure or single-owner mutable, all synchronous.
//! - [`cli`] - a thin presentation collaborator over the core: `scan` and
//!   `resolve` subcommands, with an interactive per-field prompt mode for
//!   filling a template one validated field at a time.
//!
//! Substitution is positional, not name-keyed: `{id}/{id}` filled with
//! `["1", "2"]` resolves to `1/2`. Malformed templates never fail - an
//! unmatched `{` is literal text in every operation.
//!
//! # Example
//!
//! ```
//! use linkfill::template::{FormState, resolve, scan};
//!
//! let template = "app://user/{id#}/name/{label}";
//! let mut form = FormState::new(scan(template));
//!
//! form.set_value(0, "7a");
//! form.set_value(1, "alice");
//! assert!(!form.is_form_valid()); // '7a' is not digits-only; submit blocked
//!
//! form.set_value(0, "7");
//! assert!(form.is_form_valid());
//! assert_eq!(resolve(template, form.values()), "app://user/7/name/alice");
//! ```
//!
//! What this crate deliberately does not do: validate URI schemes or hosts,
//! percent-encode values, perform navigation, or persist entered values
//! between sessions.

pub mod cli;
pub mod template;
