//! Declarative schema trees
//!
//! A schema mirrors the shape of the expected input. Leaf schemas hold an
//! ordered pipeline of steps; each step either checks the current value
//! (first failing check wins for that leaf) or transforms it. Declaration
//! order is evaluation order, so a refinement declared after a `lowercase`
//! transform observes the lowercased value.

use std::fmt;
use std::sync::Arc;

use crate::error::SchemaError;

/// Declarative description of an expected value tree
#[derive(Debug, Clone)]
pub enum Schema {
    String(StringSchema),
    Number(NumberSchema),
    Object(ObjectSchema),
    Collection(CollectionSchema),
}

impl Schema {
    /// Verify the schema configuration itself is sane.
    ///
    /// Inverted bounds are a programming error, not a validation failure.
    pub fn ensure_well_formed(&self) -> Result<(), SchemaError> {
        match self {
            Schema::String(s) => s.ensure_well_formed(),
            Schema::Number(n) => n.ensure_well_formed(),
            Schema::Object(o) => {
                for (_, child) in &o.fields {
                    child.ensure_well_formed()?;
                }
                Ok(())
            }
            Schema::Collection(c) => {
                if let (Some((min, _)), Some((max, _))) = (&c.min_items, &c.max_items) {
                    if min > max {
                        return Err(SchemaError::InvertedCardinality {
                            min: *min,
                            max: *max,
                        });
                    }
                }
                c.element.ensure_well_formed()
            }
        }
    }
}

impl From<StringSchema> for Schema {
    fn from(s: StringSchema) -> Self {
        Schema::String(s)
    }
}

impl From<NumberSchema> for Schema {
    fn from(n: NumberSchema) -> Self {
        Schema::Number(n)
    }
}

impl From<ObjectSchema> for Schema {
    fn from(o: ObjectSchema) -> Self {
        Schema::Object(o)
    }
}

impl From<CollectionSchema> for Schema {
    fn from(c: CollectionSchema) -> Self {
        Schema::Collection(c)
    }
}

// ---------------------------------------------------------------------------
// String leaves
// ---------------------------------------------------------------------------

/// Pure normalization applied to a validated string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Trim surrounding whitespace
    Trim,
    Lowercase,
    Uppercase,
    /// Uppercase the first character of each whitespace-separated segment
    /// and rejoin with single spaces ("  ana  maria " becomes "Ana Maria")
    CapitalizeWords,
}

impl Transform {
    pub fn apply(&self, s: &str) -> String {
        match self {
            Transform::Trim => s.trim().to_string(),
            Transform::Lowercase => s.to_lowercase(),
            Transform::Uppercase => s.to_uppercase(),
            Transform::CapitalizeWords => s
                .split_whitespace()
                .map(capitalize_first)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// One rule in a string pipeline
#[derive(Clone)]
pub(crate) enum StringCheck {
    NonEmpty { message: String },
    MinChars { min: usize, message: String },
    MaxChars { max: usize, message: String },
    Email { message: String },
    Refine { predicate: Predicate, message: String },
}

impl fmt::Debug for StringCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StringCheck::NonEmpty { .. } => f.write_str("NonEmpty"),
            StringCheck::MinChars { min, .. } => write!(f, "MinChars({})", min),
            StringCheck::MaxChars { max, .. } => write!(f, "MaxChars({})", max),
            StringCheck::Email { .. } => f.write_str("Email"),
            StringCheck::Refine { .. } => f.write_str("Refine"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum StringStep {
    Check(StringCheck),
    Map(Transform),
}

/// Schema for a string leaf: an ordered pipeline of checks and transforms
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    pub(crate) steps: Vec<StringStep>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with the given message when the value is the empty string.
    pub fn non_empty(mut self, message: impl Into<String>) -> Self {
        self.steps.push(StringStep::Check(StringCheck::NonEmpty {
            message: message.into(),
        }));
        self
    }

    /// Fail when the value has fewer than `min` characters.
    pub fn min_chars(mut self, min: usize, message: impl Into<String>) -> Self {
        self.steps.push(StringStep::Check(StringCheck::MinChars {
            min,
            message: message.into(),
        }));
        self
    }

    /// Fail when the value has more than `max` characters.
    pub fn max_chars(mut self, max: usize, message: impl Into<String>) -> Self {
        self.steps.push(StringStep::Check(StringCheck::MaxChars {
            max,
            message: message.into(),
        }));
        self
    }

    /// Fail when the value does not look like an email address.
    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.steps.push(StringStep::Check(StringCheck::Email {
            message: message.into(),
        }));
        self
    }

    /// Fail with the given message when the predicate rejects the value.
    ///
    /// The predicate sees the value as produced by all earlier steps.
    pub fn refine(
        mut self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        self.steps.push(StringStep::Check(StringCheck::Refine {
            predicate: Arc::new(predicate),
            message: message.into(),
        }));
        self
    }

    pub fn trim(mut self) -> Self {
        self.steps.push(StringStep::Map(Transform::Trim));
        self
    }

    pub fn lowercase(mut self) -> Self {
        self.steps.push(StringStep::Map(Transform::Lowercase));
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.steps.push(StringStep::Map(Transform::Uppercase));
        self
    }

    pub fn capitalize_words(mut self) -> Self {
        self.steps.push(StringStep::Map(Transform::CapitalizeWords));
        self
    }

    fn ensure_well_formed(&self) -> Result<(), SchemaError> {
        let min = self.steps.iter().find_map(|step| match step {
            StringStep::Check(StringCheck::MinChars { min, .. }) => Some(*min),
            _ => None,
        });
        let max = self.steps.iter().find_map(|step| match step {
            StringStep::Check(StringCheck::MaxChars { max, .. }) => Some(*max),
            _ => None,
        });
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(SchemaError::InvertedLength { min, max });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Numeric leaves
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub(crate) enum NumberCheck {
    Min { min: f64, message: String },
    Max { max: f64, message: String },
}

/// Schema for a numeric leaf.
///
/// String-typed input is coerced first: empty or whitespace-only text
/// coerces to zero, anything non-numeric fails with the coercion message.
/// Bounds are inclusive.
#[derive(Debug, Clone)]
pub struct NumberSchema {
    pub(crate) coerce_message: String,
    pub(crate) checks: Vec<NumberCheck>,
}

impl NumberSchema {
    pub fn new() -> Self {
        Self {
            coerce_message: "Must be a number".to_string(),
            checks: Vec::new(),
        }
    }

    /// Override the message reported when coercion fails.
    pub fn coerce_message(mut self, message: impl Into<String>) -> Self {
        self.coerce_message = message.into();
        self
    }

    pub fn min(mut self, min: f64, message: impl Into<String>) -> Self {
        self.checks.push(NumberCheck::Min {
            min,
            message: message.into(),
        });
        self
    }

    pub fn max(mut self, max: f64, message: impl Into<String>) -> Self {
        self.checks.push(NumberCheck::Max {
            max,
            message: message.into(),
        });
        self
    }

    fn ensure_well_formed(&self) -> Result<(), SchemaError> {
        let min = self.checks.iter().find_map(|check| match check {
            NumberCheck::Min { min, .. } => Some(*min),
            _ => None,
        });
        let max = self.checks.iter().find_map(|check| match check {
            NumberCheck::Max { max, .. } => Some(*max),
            _ => None,
        });
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(SchemaError::InvertedBounds { min, max });
            }
        }
        Ok(())
    }
}

impl Default for NumberSchema {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Objects and collections
// ---------------------------------------------------------------------------

/// Schema for an object: named children validated in declaration order
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    pub(crate) fields: Vec<(String, Schema)>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, schema: impl Into<Schema>) -> Self {
        self.fields.push((name.into(), schema.into()));
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// Schema for a variable-length collection.
///
/// Cardinality failures are reported at the collection's own path, never at
/// an element path. Elements are validated against the element schema even
/// when the cardinality check fails.
#[derive(Debug, Clone)]
pub struct CollectionSchema {
    pub(crate) element: Box<Schema>,
    pub(crate) min_items: Option<(usize, String)>,
    pub(crate) max_items: Option<(usize, String)>,
}

impl CollectionSchema {
    /// A collection whose elements all validate against `element`.
    pub fn of(element: impl Into<Schema>) -> Self {
        Self {
            element: Box::new(element.into()),
            min_items: None,
            max_items: None,
        }
    }

    pub fn min_items(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min_items = Some((min, message.into()));
        self
    }

    pub fn max_items(mut self, max: usize, message: impl Into<String>) -> Self {
        self.max_items = Some((max, message.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Transform::Trim, "  hi  ", "hi")]
    #[case(Transform::Lowercase, "X@OTHER.com", "x@other.com")]
    #[case(Transform::Uppercase, "abc", "ABC")]
    #[case(Transform::CapitalizeWords, "  ana  maria ", "Ana Maria")]
    #[case(Transform::CapitalizeWords, "", "")]
    fn test_transforms(#[case] transform: Transform, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(transform.apply(input), expected);
    }

    #[test]
    fn test_inverted_numeric_bounds_are_schema_errors() {
        let schema = Schema::from(NumberSchema::new().min(10.0, "low").max(1.0, "high"));
        assert_eq!(
            schema.ensure_well_formed(),
            Err(SchemaError::InvertedBounds {
                min: 10.0,
                max: 1.0
            })
        );
    }

    #[test]
    fn test_inverted_cardinality_is_a_schema_error() {
        let schema = Schema::from(
            CollectionSchema::of(StringSchema::new())
                .min_items(5, "low")
                .max_items(2, "high"),
        );
        assert_eq!(
            schema.ensure_well_formed(),
            Err(SchemaError::InvertedCardinality { min: 5, max: 2 })
        );
    }

    #[test]
    fn test_malformed_nested_schema_is_detected() {
        let schema = Schema::from(
            ObjectSchema::new().field(
                "inner",
                CollectionSchema::of(NumberSchema::new().min(2.0, "a").max(1.0, "b")),
            ),
        );
        assert!(schema.ensure_well_formed().is_err());
    }

    #[test]
    fn test_well_formed_schema_passes() {
        let schema = Schema::from(
            ObjectSchema::new()
                .field("name", StringSchema::new().non_empty("required"))
                .field("score", NumberSchema::new().min(1.0, "low").max(100.0, "high")),
        );
        assert_eq!(schema.ensure_well_formed(), Ok(()));
    }
}
