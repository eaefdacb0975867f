use crate::{
    skg::EdgeList,
    tools::IdMap,
    types::{Category, Edge, Index, VId},
};
use log::debug;
use std::collections::HashSet;

/// Vertices of an edge list split into altruists and pairs, each remapped to
/// its own dense index space in order of discovery.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Classification {
    altruists: IdMap,
    pairs: IdMap,
    edges: Vec<Edge>,
    num_altruist_edges: usize,
    num_pair_edges: usize,
}

impl Classification {
    pub fn new(edges: &EdgeList) -> Self {
        let targets: HashSet<VId> = edges.targets().iter().copied().collect();
        debug!("{} distinct targets", targets.len());
        let mut classification = Self::default();
        for (source, target) in edges.iter() {
            classification.classify(source, &targets);
            classification.classify(target, &targets);
            classification.edges.push((source, target));
            match classification.category(source) {
                Some(Category::Altruist) => classification.num_altruist_edges += 1,
                _ => classification.num_pair_edges += 1,
            }
        }
        classification
    }

    fn classify(&mut self, id: VId, targets: &HashSet<VId>) {
        if self.altruists.contains(id) || self.pairs.contains(id) {
            return;
        }
        if targets.contains(&id) {
            self.pairs.insert(id);
        } else {
            self.altruists.insert(id);
        }
    }

    pub fn category(&self, id: VId) -> Option<Category> {
        if self.altruists.contains(id) {
            Some(Category::Altruist)
        } else if self.pairs.contains(id) {
            Some(Category::Pair)
        } else {
            None
        }
    }

    /// Returns the category of `id` and its index within that category.
    pub fn index(&self, id: VId) -> Option<(Category, Index)> {
        self.altruists
            .get(id)
            .map(|index| (Category::Altruist, index))
            .or_else(|| self.pairs.get(id).map(|index| (Category::Pair, index)))
    }

    pub fn altruists(&self) -> &IdMap {
        &self.altruists
    }

    pub fn pairs(&self) -> &IdMap {
        &self.pairs
    }

    /// The raw edges in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_vertices(&self, category: Category) -> usize {
        match category {
            Category::Altruist => self.altruists.len(),
            Category::Pair => self.pairs.len(),
        }
    }

    /// The number of edges leaving vertices of `category`.
    pub fn num_edges(&self, category: Category) -> usize {
        match category {
            Category::Altruist => self.num_altruist_edges,
            Category::Pair => self.num_pair_edges,
        }
    }

    /// Replaces the raw edges, keeping the classified vertices.
    ///
    /// The outgoing edge counts are recomputed; edges whose source was never
    /// classified count as pair edges.
    pub fn with_edges<I: IntoIterator<Item = Edge>>(mut self, edges: I) -> Self {
        self.edges = edges.into_iter().collect();
        self.num_altruist_edges = self
            .edges
            .iter()
            .filter(|&&(source, _)| self.altruists.contains(source))
            .count();
        self.num_pair_edges = self.edges.len() - self.num_altruist_edges;
        self
    }
}
