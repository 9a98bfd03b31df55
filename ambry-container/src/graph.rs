//! Dependency graph construction.
//!
//! A pure structural transform of the registry: node = component type,
//! out-edge = "depends on" pointing at the dependency's type. Duplicate
//! slots of the same type collapse into one edge. No cycle detection
//! happens here — that is the resolver's job during the instantiation
//! walk.

use std::collections::HashMap;

use tracing::debug;

use crate::key::ComponentKey;
use crate::registry::ComponentRegistry;

/// Directed dependency graph over the declared component types.
#[derive(Debug)]
pub struct DependencyGraph {
    edges: HashMap<ComponentKey, Vec<ComponentKey>>,
}

impl DependencyGraph {
    /// Derives the graph from a registry. Every declared type becomes a
    /// node; its out-edges are the distinct types among its slots.
    pub fn build(registry: &ComponentRegistry) -> Self {
        let mut edges = HashMap::with_capacity(registry.len());

        for declaration in registry.declarations() {
            edges.insert(declaration.key(), declaration.dependency_keys());
        }

        let edge_count: usize = edges.values().map(Vec::len).sum();
        debug!(
            node_count = edges.len(),
            edge_count, "Dependency graph built"
        );

        Self { edges }
    }

    /// Out-edges of `key`. Empty for leaf components and for types that
    /// are not nodes at all.
    pub fn dependencies_of(&self, key: &ComponentKey) -> &[ComponentKey] {
        self.edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All nodes. Order is unspecified.
    pub fn nodes(&self) -> impl Iterator<Item = &ComponentKey> {
        self.edges.keys()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
