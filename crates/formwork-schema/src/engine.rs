//! Validation engine: walks a value tree against a schema
//!
//! The walk is depth-first, left-to-right across sibling fields. For any
//! single leaf the first failing check wins; sibling leaves are evaluated
//! independently, so a single pass can surface one error per path.
//! Transformed values are produced only on a leaf's success path.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::SchemaError;
use crate::outcome::{ErrorKind, FieldError, FieldErrors, Validation};
use crate::path::FieldPath;
use crate::schema::{
    CollectionSchema, NumberCheck, NumberSchema, ObjectSchema, Schema, StringCheck, StringSchema,
    StringStep,
};
use crate::value::Value;

// Email validation regex
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

impl Schema {
    /// Validate a candidate value tree.
    ///
    /// Returns `Ok(Validation)` for every conceivable input; `Err` only when
    /// the schema itself is misconfigured. Validation never mutates the
    /// input, so re-running it on unchanged values yields identical errors.
    pub fn validate(&self, value: &Value) -> Result<Validation, SchemaError> {
        self.ensure_well_formed()?;
        let mut errors = FieldErrors::new();
        let transformed = check_node(self, value, &FieldPath::root(), &mut errors);
        if errors.is_empty() {
            Ok(Validation::Valid(transformed.unwrap_or(Value::Null)))
        } else {
            Ok(Validation::Invalid(errors))
        }
    }
}

/// Validate one node. Returns the transformed value, or `None` when this
/// subtree contributed at least one error.
fn check_node(
    schema: &Schema,
    value: &Value,
    path: &FieldPath,
    errors: &mut FieldErrors,
) -> Option<Value> {
    match schema {
        Schema::String(s) => check_string(s, value, path, errors),
        Schema::Number(n) => check_number(n, value, path, errors),
        Schema::Object(o) => check_object(o, value, path, errors),
        Schema::Collection(c) => check_collection(c, value, path, errors),
    }
}

fn check_string(
    schema: &StringSchema,
    value: &Value,
    path: &FieldPath,
    errors: &mut FieldErrors,
) -> Option<Value> {
    // Absent values behave like the empty string; non-string leaves are
    // rendered the way the form would display them.
    let mut current = match value {
        Value::String(s) => s.clone(),
        other => other.display_string(),
    };

    for step in &schema.steps {
        match step {
            StringStep::Map(transform) => current = transform.apply(&current),
            StringStep::Check(check) => {
                if let Some(error) = run_string_check(check, &current) {
                    errors.record(path.clone(), error);
                    return None;
                }
            }
        }
    }

    Some(Value::String(current))
}

fn run_string_check(check: &StringCheck, value: &str) -> Option<FieldError> {
    match check {
        StringCheck::NonEmpty { message } => value
            .is_empty()
            .then(|| FieldError::new(ErrorKind::Required, message.as_str())),
        StringCheck::MinChars { min, message } => (value.chars().count() < *min)
            .then(|| FieldError::new(ErrorKind::Range, message.as_str())),
        StringCheck::MaxChars { max, message } => (value.chars().count() > *max)
            .then(|| FieldError::new(ErrorKind::Range, message.as_str())),
        StringCheck::Email { message } => (!EMAIL_REGEX.is_match(value))
            .then(|| FieldError::new(ErrorKind::Format, message.as_str())),
        StringCheck::Refine { predicate, message } => {
            (!predicate(value)).then(|| FieldError::new(ErrorKind::Domain, message.as_str()))
        }
    }
}

fn check_number(
    schema: &NumberSchema,
    value: &Value,
    path: &FieldPath,
    errors: &mut FieldErrors,
) -> Option<Value> {
    let number = match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                // Empty text inputs coerce to zero, as browser forms do.
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    // NaN compares false against both bounds, so non-finite values must
    // fail coercion rather than slip through the range checks.
    let number = number.filter(|n| n.is_finite());

    let Some(number) = number else {
        errors.record(
            path.clone(),
            FieldError::new(ErrorKind::Coercion, schema.coerce_message.as_str()),
        );
        return None;
    };

    for check in &schema.checks {
        let failed = match check {
            NumberCheck::Min { min, message } => {
                (number < *min).then(|| FieldError::new(ErrorKind::Range, message.as_str()))
            }
            NumberCheck::Max { max, message } => {
                (number > *max).then(|| FieldError::new(ErrorKind::Range, message.as_str()))
            }
        };
        if let Some(error) = failed {
            errors.record(path.clone(), error);
            return None;
        }
    }

    Some(Value::Number(number))
}

fn check_object(
    schema: &ObjectSchema,
    value: &Value,
    path: &FieldPath,
    errors: &mut FieldErrors,
) -> Option<Value> {
    let children = value.as_object();
    let mut transformed = std::collections::HashMap::new();
    let mut all_ok = true;

    // Every named child is validated; errors aggregate across children.
    for (name, child_schema) in &schema.fields {
        let child_value = children
            .and_then(|map| map.get(name))
            .unwrap_or(&Value::Null);
        match check_node(child_schema, child_value, &path.child(name), errors) {
            Some(value) => {
                transformed.insert(name.clone(), value);
            }
            None => all_ok = false,
        }
    }

    all_ok.then(|| Value::Object(transformed))
}

fn check_collection(
    schema: &CollectionSchema,
    value: &Value,
    path: &FieldPath,
    errors: &mut FieldErrors,
) -> Option<Value> {
    let empty = Vec::new();
    let items = value.as_array().unwrap_or(&empty);
    let mut all_ok = true;

    // Cardinality is the collection's own failure, reported at its path.
    if let Some((min, message)) = &schema.min_items {
        if items.len() < *min {
            errors.record(
                path.clone(),
                FieldError::new(ErrorKind::Cardinality, message.as_str()),
            );
            all_ok = false;
        }
    }
    if let Some((max, message)) = &schema.max_items {
        if items.len() > *max {
            errors.record(
                path.clone(),
                FieldError::new(ErrorKind::Cardinality, message.as_str()),
            );
            all_ok = false;
        }
    }

    // Elements are validated regardless, so their errors surface in the
    // same pass as the cardinality failure.
    let mut transformed = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match check_node(&schema.element, item, &path.index(i), errors) {
            Some(value) => transformed.push(value),
            None => all_ok = false,
        }
    }

    all_ok.then(|| Value::Array(transformed))
}
