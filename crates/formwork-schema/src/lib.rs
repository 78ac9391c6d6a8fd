//! Formwork Schema
//!
//! Declarative validation schemas for nested form value trees.
//!
//! A [`Schema`] mirrors the shape of the expected input: string and numeric
//! leaves carry an ordered pipeline of checks and transforms, objects carry
//! named children, collections carry an element schema plus cardinality
//! bounds. Validation walks the value tree depth-first and either yields the
//! transformed tree or a map of field paths to error messages. Malformed
//! user input is always represented as data; only a misconfigured schema
//! surfaces as a Rust error ([`SchemaError`]).

pub mod engine;
pub mod error;
pub mod outcome;
pub mod path;
pub mod schema;
pub mod value;

pub use error::SchemaError;
pub use outcome::{ErrorKind, FieldError, FieldErrors, Validation};
pub use path::{FieldPath, Segment};
pub use schema::{CollectionSchema, NumberSchema, ObjectSchema, Schema, StringSchema, Transform};
pub use value::Value;
