//! Client-side validation errors for the create-post form.
//!
//! A `ValidationError` never reaches the network layer. It carries one
//! message per failing field so the form can show them next to the inputs.

use std::fmt;

/// Fields of the create-post form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Title,
    Body,
    Tags,
    Image,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Body => "body",
            FormField::Tags => "tags",
            FormField::Image => "image",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failing field and its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

/// Collected per-field validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Only the first message per field is kept.
    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        if self.for_field(field).is_none() {
            self.errors.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message for `field`, if it failed.
    pub fn for_field(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(())` when nothing failed, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn user_message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn error_code(&self) -> &'static str {
        "E_VALIDATION"
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "Validation failed ({})", fields.join("; "))
    }
}

impl std::error::Error for ValidationError {}
