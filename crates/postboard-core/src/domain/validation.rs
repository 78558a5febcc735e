//! Form validation rules for post title and content.

use std::fmt;

use serde::Serialize;

/// Maximum title length, in UTF-16 code units.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum content length, in UTF-16 code units.
pub const CONTENT_MAX_CHARS: usize = 5000;

/// Values submitted by the form, trimmed of surrounding whitespace.
///
/// Only constructible through [`Draft::new`], so stored text is always trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    title: String,
    content: String,
}

impl Draft {
    pub fn new(title: impl AsRef<str>, content: impl AsRef<str>) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
            content: content.as_ref().trim().to_string(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn validate(&self) -> ValidationErrors {
        validate(&self.title, &self.content)
    }
}

/// A validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
}

impl Field {
    fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Content => "Content",
        }
    }

    fn max_chars(self) -> usize {
        match self {
            Field::Title => TITLE_MAX_CHARS,
            Field::Content => CONTENT_MAX_CHARS,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    TooLong { max: usize },
}

/// A single field failure with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn message(&self) -> String {
        match self.kind {
            FieldErrorKind::Required => format!("{} is required.", self.field),
            FieldErrorKind::TooLong { max } => {
                format!("{} must be {} characters or fewer.", self.field, max)
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for FieldError {}

/// The set of field errors for one submission. At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn push(&mut self, error: FieldError) {
        self.errors.retain(|e| e.field != error.field);
        self.errors.push(error);
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(FieldError::message).collect();
        f.write_str(&messages.join(" "))
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Check title and content independently.
///
/// A blank field (after trimming) is `Required`; a non-blank field over its
/// limit is `TooLong`. Lengths count UTF-16 code units, the unit browser
/// clients sharing the stored data measure in.
pub fn validate(title: &str, content: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for (field, value) in [(Field::Title, title), (Field::Content, content)] {
        if let Some(error) = check_field(field, value) {
            errors.push(error);
        }
    }
    errors
}

fn check_field(field: Field, value: &str) -> Option<FieldError> {
    let value = value.trim();
    let max = field.max_chars();

    if value.is_empty() {
        Some(FieldError {
            field,
            kind: FieldErrorKind::Required,
        })
    } else if value.encode_utf16().count() > max {
        Some(FieldError {
            field,
            kind: FieldErrorKind::TooLong { max },
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_report_both_fields() {
        let errors = validate("", "");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(Field::Title).map(FieldError::message).as_deref(),
            Some("Title is required.")
        );
        assert_eq!(
            errors.get(Field::Content).map(FieldError::message).as_deref(),
            Some("Content is required.")
        );
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate("ok", "ok").is_empty());
    }

    #[test]
    fn test_whitespace_only_title_is_required() {
        let errors = validate("   \t", "body");

        assert_eq!(
            errors.get(Field::Title).map(|e| e.kind),
            Some(FieldErrorKind::Required)
        );
        assert!(errors.get(Field::Content).is_none());
    }

    #[test]
    fn test_title_length_limit() {
        let at_limit = "a".repeat(TITLE_MAX_CHARS);
        assert!(validate(&at_limit, "ok").is_empty());

        let over = "a".repeat(TITLE_MAX_CHARS + 1);
        let errors = validate(&over, "ok");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Title).map(FieldError::message).as_deref(),
            Some("Title must be 200 characters or fewer.")
        );
    }

    #[test]
    fn test_content_length_limit() {
        let over = "x".repeat(CONTENT_MAX_CHARS + 1);
        let errors = validate("ok", &over);

        assert_eq!(
            errors.get(Field::Content).map(|e| e.kind),
            Some(FieldErrorKind::TooLong {
                max: CONTENT_MAX_CHARS
            })
        );
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        // 200 three-byte characters, one UTF-16 unit each
        let title = "語".repeat(TITLE_MAX_CHARS);
        assert!(validate(&title, "ok").is_empty());
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // 101 emoji are 202 UTF-16 units
        let title = "😀".repeat(TITLE_MAX_CHARS / 2 + 1);
        let errors = validate(&title, "ok");

        assert_eq!(
            errors.get(Field::Title).map(|e| e.kind),
            Some(FieldErrorKind::TooLong {
                max: TITLE_MAX_CHARS
            })
        );
        assert!(validate(&"😀".repeat(TITLE_MAX_CHARS / 2), "ok").is_empty());
    }

    #[test]
    fn test_both_length_errors_together() {
        let errors = validate(
            &"t".repeat(TITLE_MAX_CHARS + 1),
            &"c".repeat(CONTENT_MAX_CHARS + 1),
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.to_string(),
            "Title must be 200 characters or fewer. Content must be 5000 characters or fewer."
        );
    }

    #[test]
    fn test_draft_trims_values() {
        let draft = Draft::new("  Hello \n", "\tWorld  ");
        assert_eq!(draft.title(), "Hello");
        assert_eq!(draft.content(), "World");
        assert!(draft.validate().is_empty());
    }
}
