use crate::types::{Index, VId};
use std::collections::HashMap;

/// Maps vertex ids to dense indices in order of first insertion.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IdMap {
    indices: HashMap<VId, Index>,
    ids: Vec<VId>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `id`, minting the next one if `id` is new.
    pub fn insert(&mut self, id: VId) -> Index {
        let next = self.ids.len();
        let index = *self.indices.entry(id).or_insert(next);
        if index == next {
            self.ids.push(id);
        }
        index
    }

    #[inline]
    pub fn get(&self, id: VId) -> Option<Index> {
        self.indices.get(&id).copied()
    }

    #[inline]
    pub fn contains(&self, id: VId) -> bool {
        self.indices.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in index order.
    pub fn ids(&self) -> &[VId] {
        &self.ids
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VId, Index)> + '_ {
        self.ids.iter().enumerate().map(|(index, &id)| (id, index))
    }
}
