//! The resolution pass — dependency-ordered, exactly-once instantiation.
//!
//! Walks the dependency graph depth-first, computing a topological order
//! lazily while constructing. Per-type [`VisitState`] lives only for the
//! duration of one pass and is discarded afterwards; completed beans are
//! memoized in the [`BeanStore`] and never reconstructed.
//!
//! Failure policy is fail-fast and all-or-nothing: a cycle, a missing
//! declaration, a name conflict, or a wiring failure aborts the whole
//! pass and no store is returned.

use std::collections::HashMap;

use tracing::{debug, instrument, trace, warn};

use crate::error::{
    AmbryError, CircularDependencyError, Result, UnresolvedDependencyError, WiringFailedError,
};
use crate::graph::DependencyGraph;
use crate::key::ComponentKey;
use crate::registry::{ComponentDeclaration, ComponentRegistry};
use crate::store::BeanStore;

/// Per-type status during one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Instantiates every declared component in dependency order.
pub struct Resolver<'a> {
    registry: &'a ComponentRegistry,
    graph: &'a DependencyGraph,
    state: HashMap<ComponentKey, VisitState>,
    store: BeanStore,
}

impl<'a> Resolver<'a> {
    /// Runs the full pass and returns the populated store.
    ///
    /// Visitation order across independent components is unspecified;
    /// the guarantee is only that no component is constructed before any
    /// of its dependencies.
    ///
    /// # Errors
    /// - [`AmbryError::CircularDependency`] — the walk revisited a type
    ///   still in progress
    /// - [`AmbryError::UnresolvedDependency`] — a slot requires a type
    ///   with no declaration
    /// - [`AmbryError::DuplicateBeanName`] — two components claimed one
    ///   name
    /// - [`AmbryError::WiringFailed`] — a slot rejected its bean
    #[instrument(skip_all, name = "resolution_pass")]
    pub fn resolve(registry: &ComponentRegistry, graph: &DependencyGraph) -> Result<BeanStore> {
        debug!(component_count = registry.len(), "Starting resolution pass");

        let mut resolver = Resolver {
            registry,
            graph,
            state: registry
                .keys()
                .map(|key| (*key, VisitState::Unvisited))
                .collect(),
            store: BeanStore::new(),
        };

        let declared: Vec<ComponentKey> = registry.keys().copied().collect();
        for key in declared {
            if !resolver.store.contains(&key) {
                let registry = resolver.registry;
                // Top-level keys come from the registry itself.
                if let Some(declaration) = registry.get(&key) {
                    resolver.visit(declaration)?;
                }
            }
        }

        debug!(bean_count = resolver.store.len(), "Resolution pass complete");
        Ok(resolver.store)
    }

    /// Recursive visit: resolve dependencies, then instantiate and wire.
    fn visit(&mut self, declaration: &'a ComponentDeclaration) -> Result<()> {
        let key = declaration.key();

        // Memoized: a completed bean is never reconstructed.
        if self.store.contains(&key) {
            return Ok(());
        }

        if self.state.get(&key) == Some(&VisitState::InProgress) {
            // Re-entry on an in-progress node; the edge is the node itself.
            warn!(key = %key, "Component depends on itself");
            return Err(AmbryError::CircularDependency(CircularDependencyError {
                from: key,
                to: key,
            }));
        }

        self.state.insert(key, VisitState::InProgress);
        trace!(key = %key, "Visiting");

        let dependencies: Vec<ComponentKey> = self.graph.dependencies_of(&key).to_vec();
        for dep in dependencies {
            if self.store.contains(&dep) {
                continue;
            }

            if self.state.get(&dep) == Some(&VisitState::InProgress) {
                warn!(from = %key, to = %dep, "Circular dependency detected");
                return Err(AmbryError::CircularDependency(CircularDependencyError {
                    from: key,
                    to: dep,
                }));
            }

            let registry = self.registry;
            let Some(dep_declaration) = registry.get(&dep) else {
                warn!(component = %key, missing = %dep, "Unresolved dependency");
                return Err(AmbryError::UnresolvedDependency(UnresolvedDependencyError {
                    component: key,
                    missing: dep,
                    suggestions: self.find_similar_keys(&dep),
                }));
            };

            self.visit(dep_declaration)?;
        }

        self.instantiate(declaration)?;
        self.state.insert(key, VisitState::Done);
        Ok(())
    }

    /// Default-constructs the component, assigns every slot from the
    /// now-present beans, and registers the result.
    fn instantiate(&mut self, declaration: &ComponentDeclaration) -> Result<()> {
        trace!(key = %declaration.key(), "Instantiating");

        let mut component = declaration.instantiate();
        for slot in declaration.slots() {
            let bean = self.store.bean(&slot.requires()).ok_or_else(|| {
                AmbryError::WiringFailed(WiringFailedError {
                    component: declaration.key(),
                    slot: slot.slot().to_string(),
                    detail: format!("no bean of type {} after resolution", slot.requires()),
                })
            })?;

            component.assign_slot(slot.slot(), &bean).map_err(|e| {
                AmbryError::WiringFailed(WiringFailedError {
                    component: declaration.key(),
                    slot: e.slot,
                    detail: e.detail,
                })
            })?;
        }

        self.store
            .register(declaration.key(), declaration.name(), component.into_bean())
    }

    /// Declared types with names similar to `target`, for "did you
    /// mean?" suggestions.
    fn find_similar_keys(&self, target: &ComponentKey) -> Vec<ComponentKey> {
        let target_name = target.type_name().to_lowercase();

        self.registry
            .keys()
            .filter(|k| {
                let name = k.type_name().to_lowercase();
                name.contains(&target_name)
                    || target_name.contains(&name)
                    || names_close(&target_name, &name)
            })
            .copied()
            .collect()
    }
}

/// Quick heuristic for "close enough" type names (not a full edit
/// distance): similar length and at least 60% positional overlap.
fn names_close(a: &str, b: &str) -> bool {
    if a.len().abs_diff(b.len()) > 3 {
        return false;
    }

    let common = a.chars().zip(b.chars()).filter(|(ca, cb)| ca == cb).count();
    let max_len = a.len().max(b.len());
    if max_len == 0 {
        return true;
    }

    common * 100 / max_len >= 60
}
