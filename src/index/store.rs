//! Identity-based value interning.
//!
//! Values are deduplicated by allocation, not by equality: two equal values in
//! separate `Arc`s get separate ids, while clones of one `Arc` share an id.

use crate::error::{Error, Result};
use ahash::AHashMap;
use std::sync::Arc;

/// Dense handle for a stored value, assigned in first-insertion order.
pub type ValueId = u32;

#[derive(Debug)]
pub struct ValueStore<V> {
    values: Vec<Arc<V>>,
    by_ptr: AHashMap<usize, ValueId>,
}

impl<V> Default for ValueStore<V> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            by_ptr: AHashMap::new(),
        }
    }
}

impl<V> ValueStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id already assigned to this allocation, if any.
    pub fn id_of(&self, value: &Arc<V>) -> Option<ValueId> {
        self.by_ptr.get(&identity(value)).copied()
    }

    /// Return the id for `value`, assigning a new one on first sight.
    ///
    /// Fails without touching the store once every id is taken.
    pub fn intern(&mut self, value: &Arc<V>) -> Result<ValueId> {
        if let Some(id) = self.id_of(value) {
            return Ok(id);
        }
        let id = next_id(self.values.len())?;
        self.values.push(Arc::clone(value));
        self.by_ptr.insert(identity(value), id);
        Ok(id)
    }

    pub fn get(&self, id: ValueId) -> Option<&Arc<V>> {
        self.values.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Stored values in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<V>> {
        self.values.iter()
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.by_ptr.clear();
    }
}

fn next_id(len: usize) -> Result<ValueId> {
    ValueId::try_from(len).map_err(|_| Error::Capacity { limit: len })
}

/// Address of the shared allocation. Stable while the store holds a clone.
#[inline]
fn identity<V>(value: &Arc<V>) -> usize {
    Arc::as_ptr(value) as *const () as usize
}
