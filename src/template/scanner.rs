//! Placeholder extraction from URI templates.
//!
//! A template is plain text containing zero or more placeholder spans
//! delimited by `{` and `}`. The scanner walks the template left to right
//! and reports every matched span in order of appearance, duplicates
//! included. Scanning never fails: an unmatched `{` (no closing `}` before
//! the template ends, or another `{` opening first) is plain text and
//! produces no entry, and a bare `}` is likewise plain text.
//!
//! The scanner reports *raw* placeholder names, numeric marker included.
//! Stripping the marker for display is the classifier's job - see
//! [`crate::template::classify`].
//!
//! # Examples
//!
//! ```
//! use linkfill::template::scan;
//!
//! let names = scan("app://user/{id#}/name/{label}");
//! assert_eq!(names, vec!["id#", "label"]);
//!
//! // Malformed braces degrade to literal text.
//! assert!(scan("app://broken/{oops").is_empty());
//! ```

use tracing::debug;

/// A matched `{…}` span inside a template.
///
/// `start` is the byte offset of the opening `{`, `end` is one past the
/// closing `}`, so `&template[start..end]` is the whole span including
/// delimiters. Both offsets land on ASCII braces and are therefore always
/// valid char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// The text strictly between the braces.
    pub fn name<'t>(&self, template: &'t str) -> &'t str {
        &template[self.start + 1..self.end - 1]
    }
}

/// Find every matched `{…}` span, left to right.
///
/// An opening `{` is matched by the next `}` unless another `{` appears
/// first, in which case the earlier `{` is literal and the later one opens
/// the candidate span instead. This is the single definition of "what
/// counts as a placeholder"; both [`scan`] and the substitution walker in
/// [`crate::template::resolve`] go through it so they can never disagree.
pub(crate) fn placeholder_spans(template: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for (i, byte) in template.bytes().enumerate() {
        match byte {
            b'{' => open = Some(i),
            b'}' => {
                if let Some(start) = open.take() {
                    spans.push(Span {
                        start,
                        end: i + 1,
                    });
                }
            }
            _ => {}
        }
    }

    spans
}

/// Extract the ordered list of raw placeholder names from a template.
///
/// One entry per matched `{…}` span, in order of appearance. A name may
/// repeat; each occurrence is a distinct positional entry with its own
/// value slot downstream. A template with no matched spans yields an empty
/// list.
///
/// # Examples
///
/// ```
/// use linkfill::template::scan;
///
/// // Repeats stay distinct positions.
/// assert_eq!(scan("{id}/{id}"), vec!["id", "id"]);
///
/// // No placeholders at all.
/// assert!(scan("app://settings").is_empty());
/// ```
pub fn scan(template: &str) -> Vec<String> {
    let names: Vec<String> = placeholder_spans(template)
        .iter()
        .map(|span| span.name(template).to_string())
        .collect();

    debug!(placeholders = names.len(), "scanned template");
    names
}
