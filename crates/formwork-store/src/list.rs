// File: src/list.rs
// Purpose: Stable identity for dynamic list entries, decoupled from position

use std::collections::HashMap;
use std::fmt;

use formwork_schema::FieldPath;
use uuid::Uuid;

/// Synthetic identifier for one dynamic list entry.
///
/// Identifies the entry for rendering across its whole lifetime; the
/// positional index used in validation paths shifts on removal, the
/// identifier never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier bookkeeping for every dynamic collection in a form.
///
/// Keeps the `identifier -> current index` lookup separate from the value
/// tree's `index -> leaf values` lookup so that removals cannot leave a
/// stale reference behind.
#[derive(Debug, Clone, Default)]
pub struct ListRegistry {
    entries: HashMap<FieldPath, Vec<EntryId>>,
}

impl ListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a freshly appended entry and return its identifier.
    pub fn append(&mut self, collection: &FieldPath) -> EntryId {
        let id = EntryId::fresh();
        self.entries.entry(collection.clone()).or_default().push(id);
        id
    }

    /// Current index of an entry, if it is still present.
    pub fn position(&self, collection: &FieldPath, id: EntryId) -> Option<usize> {
        self.entries
            .get(collection)?
            .iter()
            .position(|&candidate| candidate == id)
    }

    /// Drop an entry, returning the index it occupied. Unknown identifiers
    /// are a no-op.
    pub fn remove(&mut self, collection: &FieldPath, id: EntryId) -> Option<usize> {
        let ids = self.entries.get_mut(collection)?;
        let position = ids.iter().position(|&candidate| candidate == id)?;
        ids.remove(position);
        Some(position)
    }

    /// Identifiers of a collection's entries, in index order.
    pub fn ids(&self, collection: &FieldPath) -> &[EntryId] {
        self.entries
            .get(collection)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self, collection: &FieldPath) -> usize {
        self.ids(collection).len()
    }

    pub fn is_empty(&self, collection: &FieldPath) -> bool {
        self.ids(collection).is_empty()
    }
}
