//! # formwork
//!
//! Schema-validated form state with dynamic collections.
//!
//! A [`Schema`] declares the expected shape of a form's input: per-field
//! constraints, value transformations, refinement predicates, and
//! collection cardinality, each with a human-readable message. A
//! [`FormStore`] owns the live value tree, records edits, and runs the
//! schema at submit time: a valid submission hands the transformed tree to
//! a success handler, an invalid one stores one message per failing field
//! path for inline display.
//!
//! ## Quick start
//!
//! ```rust
//! use formwork::{FormStore, ObjectSchema, StringSchema};
//!
//! let schema = ObjectSchema::new()
//!     .field("email", StringSchema::new().non_empty("E-mail is required"));
//!
//! let mut store = FormStore::new(schema);
//! store.set_value("email", "ana@example.com");
//! let accepted = store.submit(|values| {
//!     println!("{}", formwork::render_submission(values));
//! }).unwrap();
//! assert!(accepted);
//! ```
//!
//! This crate is a convenience wrapper re-exporting two component crates:
//!
//! - **`formwork-schema`** - field paths, value trees, schemas, and the
//!   validation engine
//! - **`formwork-store`** - the form state store and dynamic list identity

pub use formwork_schema::{
    CollectionSchema, ErrorKind, FieldError, FieldErrors, FieldPath, NumberSchema, ObjectSchema,
    Schema, SchemaError, Segment, StringSchema, Transform, Validation, Value,
};
pub use formwork_store::{EntryId, FieldState, FormStore, ListRegistry};

pub mod signup;

/// Render a submitted value tree the way the demo page's debug area does:
/// pretty-printed JSON.
pub fn render_submission(values: &Value) -> String {
    serde_json::to_string_pretty(values).unwrap_or_default()
}
