//! Ordered in-memory collection keyed by entity id.

use haulbill_core::Entity;

/// A tiny insertion-ordered table.
///
/// Rows keep the position they were inserted at: replacing a row edits it in
/// place and listing returns rows oldest-first. Collections here stay small
/// (one user's working set), so lookups scan.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: Vec<T>,
}

impl<T: Entity> Table<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn insert(&mut self, entity: T) {
        self.rows.push(entity);
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.rows.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.rows.iter_mut().find(|e| e.id() == id)
    }

    /// Overwrite the row with the same id, keeping its position. Returns
    /// false (and stores nothing) when no such row exists.
    pub fn replace(&mut self, entity: T) -> bool {
        match self.rows.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.rows.iter().position(|e| e.id() == id)?;
        Some(self.rows.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }
}

impl<T: Entity + Clone> Table<T> {
    pub fn all(&self) -> Vec<T> {
        self.rows.to_vec()
    }
}

impl<T: Entity> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
