//! Ordered list of fields addressed by stable handles.
//!
//! The order of the list is the order fragments are concatenated in and
//! the order records are written to disk. Handles are handed out
//! sequentially from 1 and are never reused within a list, so a handle
//! held by the shell stays valid (or becomes unknown) across removals.

use std::fmt;

use crate::error::{Error, Result};
use crate::field::{Count, Field, FieldKind, FieldRecord};

/// Handle of a field inside a [`FieldList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u32);

impl FieldId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList {
    entries: Vec<(FieldId, Field)>,
    next_id: u32,
}

impl Default for FieldList {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldList {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// The list a fresh installation starts with: two word lists
    /// (adjectives, then nouns), one digit and one special character.
    pub fn standard() -> Self {
        let mut list = Self::new();
        list.push(Field::from_words(["Pink", "Big", "Small"]));
        list.push(Field::from_words(["House", "Apple", "Shoe"]));
        list.push(Field::Digits(Count::default()));
        list.push(Field::Characters(Count::default()));
        list
    }

    /// Rebuild a list from stored records, preserving their order.
    pub fn from_records(records: &[FieldRecord]) -> Result<Self> {
        let mut list = Self::new();
        for record in records {
            list.push(Field::from_record(record)?);
        }
        Ok(list)
    }

    pub fn to_records(&self) -> Vec<FieldRecord> {
        self.fields().map(Field::to_record).collect()
    }

    /// Append an unconfigured field of `kind`.
    pub fn add(&mut self, kind: FieldKind) -> FieldId {
        self.push(Field::empty(kind))
    }

    pub fn push(&mut self, field: Field) -> FieldId {
        let id = FieldId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, field));
        id
    }

    pub fn remove(&mut self, id: FieldId) -> Result<Field> {
        let index = self
            .entries
            .iter()
            .position(|(entry, _)| *entry == id)
            .ok_or(Error::UnknownField(id))?;
        Ok(self.entries.remove(index).1)
    }

    pub fn get(&self, id: FieldId) -> Option<&Field> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, field)| field)
    }

    pub fn get_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.entries
            .iter_mut()
            .find(|(entry, _)| *entry == id)
            .map(|(_, field)| field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        self.entries.iter().map(|(id, field)| (*id, field))
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.entries.iter().map(|(_, field)| field)
    }

    /// Words fields with nothing to pick from.
    pub fn blank(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.iter().filter(|(_, f)| f.is_blank()).map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
