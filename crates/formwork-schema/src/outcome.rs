//! Validation outcomes: errors keyed by field path

use std::collections::btree_map::{self, BTreeMap};

use crate::path::FieldPath;
use crate::value::Value;

/// Category of a validation failure, mirroring the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty value where a non-empty one is required
    Required,
    /// Value does not match the expected shape (e.g. email)
    Format,
    /// A refinement predicate rejected the value
    Domain,
    /// Non-numeric input where a number is expected
    Coercion,
    /// Value or length outside the configured bounds
    Range,
    /// Collection element count outside the configured bounds
    Cardinality,
}

/// A single validation failure at one field path
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Errors keyed by field path, one per path.
///
/// The first failure recorded for a path wins; later rules for the same
/// path are not recorded. Iteration order is deterministic (path order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    by_path: BTreeMap<FieldPath, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the path already has one.
    pub fn record(&mut self, path: FieldPath, error: FieldError) {
        self.by_path.entry(path).or_insert(error);
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// Check if a path has an error
    pub fn has_error(&self, path: &FieldPath) -> bool {
        self.by_path.contains_key(path)
    }

    /// Get the error for a path
    pub fn get(&self, path: &FieldPath) -> Option<&FieldError> {
        self.by_path.get(path)
    }

    /// Get the message for a path
    pub fn message_for(&self, path: &FieldPath) -> Option<&str> {
        self.by_path.get(path).map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FieldPath, FieldError> {
        self.by_path.iter()
    }

    /// Paths that currently hold an error, in path order.
    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.by_path.keys()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a FieldPath, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, FieldPath, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_path.iter()
    }
}

/// Result of validating a value tree against a schema.
///
/// `Valid` carries the transformed tree; `Invalid` carries one message per
/// failing path. Both are ordinary data, never panics or Rust errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(Value),
    Invalid(FieldErrors),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    /// Extract the transformed tree if validation passed
    pub fn into_value(self) -> Option<Value> {
        match self {
            Validation::Valid(value) => Some(value),
            Validation::Invalid(_) => None,
        }
    }

    /// Extract the errors if validation failed
    pub fn into_errors(self) -> Option<FieldErrors> {
        match self {
            Validation::Valid(_) => None,
            Validation::Invalid(errors) => Some(errors),
        }
    }
}
