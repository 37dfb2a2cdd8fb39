//! Validation outcome types.

use thiserror::Error;

use crate::record::Field;

/// Why a field was rejected.
///
/// Messages are what the form shows; the reason is the stable,
/// match-friendly classification behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Required value missing or empty.
    Required,
    /// Below the minimum length.
    TooShort,
    /// Above the maximum length.
    TooLong,
    /// Malformed: failed a pattern check or could not be parsed.
    Pattern,
    /// Parsed fine but falls outside the allowed range.
    OutOfRange,
    /// Does not match the field it must equal.
    Mismatch,
}

/// A single field's validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub reason: Reason,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, reason: Reason, message: impl Into<String>) -> Self {
        Self {
            field,
            reason,
            message: message.into(),
        }
    }
}

/// Field-keyed errors from one validation pass.
///
/// Holds at most one error per field, the first applicable one, and
/// iterates in the form's display order. A field that is absent is
/// currently valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: Vec<FieldError>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a field's first applicable error.
    ///
    /// The validator visits each field once, so a duplicate insert is a
    /// caller bug.
    pub(crate) fn insert(&mut self, error: FieldError) {
        debug_assert!(!self.contains(error.field), "one error per field");
        self.errors.push(error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// The message for one field, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates errors in the form's display order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// The fields that failed, in display order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field)
    }
}

impl<'a> IntoIterator for &'a ErrorMap {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl std::fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}
