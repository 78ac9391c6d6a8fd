// Formwork Store - form state for schema-validated forms
// Owns the live value tree, per-field edit state, and dynamic list identity

pub mod list;
pub mod store;

pub use list::{EntryId, ListRegistry};
pub use store::{FieldState, FormStore};
