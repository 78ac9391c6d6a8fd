// File: src/store.rs
// Purpose: Form state store mediating edits, dynamic lists, and submission

use std::collections::HashMap;

use formwork_schema::{
    FieldErrors, FieldPath, Schema, SchemaError, Segment, Validation, Value,
};
use tracing::{debug, trace, warn};

use crate::list::{EntryId, ListRegistry};

/// Edit state of a single field path.
///
/// `Untouched -> Edited` on the first write; a failing submit marks the
/// offending paths `Erred`; the next write to an erred path returns it to
/// `Edited`. The stored error message itself persists until the next
/// submit recomputes the error set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Edited,
    Erred,
}

/// Owns a form's live value tree and orchestrates submission.
///
/// All operations run synchronously to completion; validation happens only
/// at submit time and never mutates the stored values.
#[derive(Debug, Clone)]
pub struct FormStore {
    schema: Schema,
    values: Value,
    states: HashMap<FieldPath, FieldState>,
    errors: FieldErrors,
    lists: ListRegistry,
}

impl FormStore {
    /// New store with an empty value tree.
    pub fn new(schema: impl Into<Schema>) -> Self {
        Self {
            schema: schema.into(),
            values: Value::empty_object(),
            states: HashMap::new(),
            errors: FieldErrors::new(),
            lists: ListRegistry::new(),
        }
    }

    /// The raw (untransformed) value tree.
    pub fn values(&self) -> &Value {
        &self.values
    }

    /// Raw value at a path, if present.
    pub fn value_at(&self, path: impl Into<FieldPath>) -> Option<&Value> {
        self.values.at(&path.into())
    }

    /// Errors stored by the most recent failing submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Stored error message for a path, if any.
    pub fn error_at(&self, path: impl Into<FieldPath>) -> Option<&str> {
        self.errors.message_for(&path.into())
    }

    pub fn field_state(&self, path: impl Into<FieldPath>) -> FieldState {
        self.states
            .get(&path.into())
            .copied()
            .unwrap_or(FieldState::Untouched)
    }

    /// Overwrite the raw value at a path.
    ///
    /// Missing intermediate objects are created for key segments; an index
    /// segment addressing a nonexistent element is a no-op, since list
    /// elements only come into being through [`FormStore::append_entry`].
    /// Never validates.
    pub fn set_value(&mut self, path: impl Into<FieldPath>, value: impl Into<Value>) {
        let path = path.into();
        if write_at(&mut self.values, path.segments(), value.into()) {
            trace!(path = %path, "field edited");
            self.states.insert(path, FieldState::Edited);
        } else {
            warn!(path = %path, "ignored write to nonexistent location");
        }
    }

    /// Append a dynamic list entry with the given default values, growing
    /// the collection by one. Returns the entry's synthetic identifier, or
    /// `None` when the path does not address a collection.
    pub fn append_entry(
        &mut self,
        collection: impl Into<FieldPath>,
        default_entry: impl Into<Value>,
    ) -> Option<EntryId> {
        let collection = collection.into();
        let node = node_at_mut(&mut self.values, collection.segments())?;
        if matches!(node, Value::Null) {
            *node = Value::Array(Vec::new());
        }
        let Value::Array(items) = node else {
            warn!(path = %collection, "append target is not a collection");
            return None;
        };
        items.push(default_entry.into());
        let id = self.lists.append(&collection);
        trace!(path = %collection, entry = %id, "entry appended");
        Some(id)
    }

    /// Remove the entry with the given identifier. Later entries shift
    /// down by one index; their identifiers are unchanged. Unknown
    /// identifiers or paths are a no-op.
    pub fn remove_entry(&mut self, collection: impl Into<FieldPath>, id: EntryId) {
        let collection = collection.into();
        let Some(position) = self.lists.remove(&collection, id) else {
            trace!(path = %collection, entry = %id, "remove of unknown entry ignored");
            return;
        };
        if let Some(Value::Array(items)) = node_at_mut(&mut self.values, collection.segments()) {
            if position < items.len() {
                items.remove(position);
            }
        }
        trace!(path = %collection, entry = %id, index = position, "entry removed");
    }

    /// Identifiers of a collection's entries, in current index order.
    pub fn entry_ids(&self, collection: impl Into<FieldPath>) -> &[EntryId] {
        self.lists.ids(&collection.into())
    }

    /// Validate the current values and either hand the transformed tree to
    /// the success handler or store the errors for display.
    ///
    /// Returns `Ok(true)` when the submission was accepted. This is the
    /// only operation that populates or clears the stored errors. `Err`
    /// means the schema itself is misconfigured.
    pub fn submit<F>(&mut self, on_success: F) -> Result<bool, SchemaError>
    where
        F: FnOnce(&Value),
    {
        match self.schema.validate(&self.values)? {
            Validation::Valid(transformed) => {
                debug!("submission accepted");
                self.errors = FieldErrors::new();
                // No path can remain erred once the whole tree passed.
                for state in self.states.values_mut() {
                    if *state == FieldState::Erred {
                        *state = FieldState::Edited;
                    }
                }
                on_success(&transformed);
                Ok(true)
            }
            Validation::Invalid(errors) => {
                debug!(error_count = errors.len(), "submission rejected");
                for path in errors.paths() {
                    self.states.insert(path.clone(), FieldState::Erred);
                }
                self.errors = errors;
                Ok(false)
            }
        }
    }
}

/// Write `value` at the location named by `segments`, creating missing
/// intermediate objects along key segments. Returns false when the
/// location cannot be addressed.
fn write_at(node: &mut Value, segments: &[Segment], value: Value) -> bool {
    let Some((segment, rest)) = segments.split_first() else {
        *node = value;
        return true;
    };
    match segment {
        Segment::Key(key) => {
            if matches!(node, Value::Null) {
                *node = Value::empty_object();
            }
            match node {
                Value::Object(map) => {
                    let child = map.entry(key.clone()).or_insert(Value::Null);
                    write_at(child, rest, value)
                }
                _ => false,
            }
        }
        Segment::Index(i) => match node {
            Value::Array(items) => match items.get_mut(*i) {
                Some(child) => write_at(child, rest, value),
                None => false,
            },
            _ => false,
        },
    }
}

/// Mutable access to the node at `segments`, creating missing intermediate
/// objects along key segments.
fn node_at_mut<'a>(node: &'a mut Value, segments: &[Segment]) -> Option<&'a mut Value> {
    let Some((segment, rest)) = segments.split_first() else {
        return Some(node);
    };
    match segment {
        Segment::Key(key) => {
            if matches!(node, Value::Null) {
                *node = Value::empty_object();
            }
            match node {
                Value::Object(map) => {
                    let child = map.entry(key.clone()).or_insert(Value::Null);
                    node_at_mut(child, rest)
                }
                _ => None,
            }
        }
        Segment::Index(i) => match node {
            Value::Array(items) => node_at_mut(items.get_mut(*i)?, rest),
            _ => None,
        },
    }
}
