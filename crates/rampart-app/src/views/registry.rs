//! # Record Registry
//!
//! An ordered collection that only supports append and remove-by-id.
//! Insertion order is display order. Records are never edited in place.
//!
//! ## Identifier assignment
//!
//! [`IdAssignment::RegistrySize`] numbers a new record `len + 1`. After a
//! removal that number can already be taken, so two live records may share an
//! id and a later remove drops both. [`IdAssignment::Monotonic`] keeps a
//! counter that never goes backwards and is the default.

use rampart_core::RecordId;
use serde::{Deserialize, Serialize};

/// A record stored in a [`Registry`].
pub trait RegistryRecord {
    /// Identifier used by `remove`.
    fn id(&self) -> &RecordId;
}

/// How new records are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdAssignment {
    /// Counter starting after the highest seeded id
    #[default]
    Monotonic,
    /// Current size plus one; ids may collide after removals
    RegistrySize,
}

/// Ordered append/remove-only collection.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
    assignment: IdAssignment,
    issued: u64,
}

impl<T: RegistryRecord> Registry<T> {
    /// Registry starting with `seed`, in order.
    pub fn seeded(seed: Vec<T>, assignment: IdAssignment) -> Self {
        let highest = seed.iter().filter_map(|r| r.id().seq()).max().unwrap_or(0);
        let issued = highest.max(seed.len() as u64);
        Self {
            items: seed,
            assignment,
            issued,
        }
    }

    /// Empty registry.
    pub fn new(assignment: IdAssignment) -> Self {
        Self::seeded(Vec::new(), assignment)
    }

    // ─── Queries ─────────────────────────────────────────────

    /// First record with this id.
    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Whether any record has this id.
    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identifier the next append will receive.
    pub fn next_id(&self) -> RecordId {
        match self.assignment {
            IdAssignment::Monotonic => RecordId::from_seq(self.issued + 1),
            IdAssignment::RegistrySize => RecordId::from_seq(self.items.len() as u64 + 1),
        }
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Assign the next id, build the record with it and append it.
    ///
    /// Callers validate before calling; the registry itself accepts anything.
    pub fn append_with(&mut self, build: impl FnOnce(RecordId) -> T) -> &T {
        let id = self.next_id();
        if let Some(seq) = id.seq() {
            self.issued = self.issued.max(seq);
        }
        let index = self.items.len();
        self.items.push(build(id));
        &self.items[index]
    }

    /// Remove every record with this id, returning them in order.
    ///
    /// A missing id is a no-op and returns an empty vector.
    pub fn remove(&mut self, id: &RecordId) -> Vec<T> {
        let (removed, kept): (Vec<T>, Vec<T>) =
            std::mem::take(&mut self.items).into_iter().partition(|r| r.id() == id);
        self.items = kept;
        removed
    }
}
