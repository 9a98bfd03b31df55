//! Component registry — stores discovered component declarations.
//!
//! Built once from a [`CandidateSource`] at container construction and
//! immutable thereafter. Pure data: no validation happens here — a slot
//! requiring an undeclared type is only an error once the resolver walks
//! the graph.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::component::{Component, ErasedComponent, SlotDescriptor, construct_erased};
use crate::discovery::CandidateSource;
use crate::key::ComponentKey;

/// The discovery-time record of a single component type.
///
/// Identifies the type, its optional unique name (empty = anonymous),
/// and its declared dependency slots. Created once, immutable.
#[derive(Debug, Clone)]
pub struct ComponentDeclaration {
    key: ComponentKey,
    name: &'static str,
    slots: Vec<SlotDescriptor>,
    constructor: fn() -> Box<dyn ErasedComponent>,
}

impl ComponentDeclaration {
    /// Builds the declaration of component type `T`.
    pub fn of<T: Component>() -> Self {
        Self {
            key: ComponentKey::of::<T>(),
            name: T::component_name(),
            slots: T::dependency_slots(),
            constructor: construct_erased::<T>,
        }
    }

    /// The component type this declaration describes.
    #[inline]
    pub fn key(&self) -> ComponentKey {
        self.key
    }

    /// The declared bean name. Empty string means anonymous.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this component registers under a name.
    #[inline]
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// The declared dependency slots, duplicates included.
    #[inline]
    pub fn slots(&self) -> &[SlotDescriptor] {
        &self.slots
    }

    /// The distinct dependency types among the slots, in declaration
    /// order. Two slots of the same type contribute one entry.
    pub fn dependency_keys(&self) -> Vec<ComponentKey> {
        let mut keys: Vec<ComponentKey> = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            if !keys.contains(&slot.requires()) {
                keys.push(slot.requires());
            }
        }
        keys
    }

    /// Default-constructs an unwired instance.
    pub(crate) fn instantiate(&self) -> Box<dyn ErasedComponent> {
        (self.constructor)()
    }
}

/// Stores all discovered component declarations, keyed by type.
///
/// Populated during the discovery phase and immutable once the container
/// is constructed.
#[derive(Debug)]
pub struct ComponentRegistry {
    declarations: HashMap<ComponentKey, ComponentDeclaration>,
}

impl ComponentRegistry {
    /// Probes every candidate of `source` and records the declarations of
    /// those marked as components.
    ///
    /// Re-discovering the same type is idempotent: a declaration is a
    /// pure function of the type.
    pub fn discover(source: &dyn CandidateSource) -> Self {
        let candidates = source.candidates();
        debug!(candidate_count = candidates.len(), "Discovering components");

        let mut declarations = HashMap::new();
        for candidate in candidates {
            let Some(declaration) = candidate.probe() else {
                trace!("Candidate is not a component, skipping");
                continue;
            };

            debug!(
                key = %declaration.key(),
                name = declaration.name(),
                slots = declaration.slots().len(),
                "Discovered component"
            );
            declarations.insert(declaration.key(), declaration);
        }

        debug!(component_count = declarations.len(), "Discovery complete");
        Self { declarations }
    }

    /// Looks up a declaration by type key.
    pub fn get(&self, key: &ComponentKey) -> Option<&ComponentDeclaration> {
        self.declarations.get(key)
    }

    /// Whether a declaration exists for `key`.
    pub fn contains(&self, key: &ComponentKey) -> bool {
        self.declarations.contains_key(key)
    }

    /// All declared type keys. Order is unspecified.
    pub fn keys(&self) -> impl Iterator<Item = &ComponentKey> {
        self.declarations.keys()
    }

    /// All declarations. Order is unspecified.
    pub fn declarations(&self) -> impl Iterator<Item = &ComponentDeclaration> {
        self.declarations.values()
    }

    /// Number of declared components.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if nothing was discovered.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Bean, take_dependency};
    use crate::discovery::{Candidate, ExplicitSource};
    use crate::error::WiringError;
    use std::sync::Arc;

    struct Database;

    impl Component for Database {
        fn component_name() -> &'static str {
            "database"
        }

        fn construct() -> Self {
            Database
        }
    }

    struct Repo {
        primary: Option<Arc<Database>>,
        audit: Option<Arc<Database>>,
    }

    impl Component for Repo {
        fn dependency_slots() -> Vec<SlotDescriptor> {
            vec![
                SlotDescriptor::of::<Database>("primary"),
                SlotDescriptor::of::<Database>("audit"),
            ]
        }

        fn construct() -> Self {
            Repo { primary: None, audit: None }
        }

        fn assign(&mut self, slot: &str, bean: &Bean) -> Result<(), WiringError> {
            match slot {
                "primary" => self.primary = Some(take_dependency(slot, bean)?),
                "audit" => self.audit = Some(take_dependency(slot, bean)?),
                other => return Err(WiringError::unknown_slot(other)),
            }
            Ok(())
        }
    }

    struct NotAComponent;

    #[test]
    fn discover_records_components_and_skips_inert() {
        let source = ExplicitSource::new()
            .with(Candidate::component::<Database>())
            .with(Candidate::inert::<NotAComponent>());

        let registry = ComponentRegistry::discover(&source);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&ComponentKey::of::<Database>()));
        assert!(!registry.contains(&ComponentKey::of::<NotAComponent>()));
    }

    #[test]
    fn discover_is_idempotent_per_type() {
        let source = ExplicitSource::new()
            .with(Candidate::component::<Database>())
            .with(Candidate::component::<Database>());

        let registry = ComponentRegistry::discover(&source);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_slots_are_both_recorded() {
        let decl = ComponentDeclaration::of::<Repo>();
        assert_eq!(decl.slots().len(), 2);
    }

    #[test]
    fn dependency_keys_are_distinct() {
        let decl = ComponentDeclaration::of::<Repo>();
        assert_eq!(decl.dependency_keys(), vec![ComponentKey::of::<Database>()]);
    }

    #[test]
    fn named_and_anonymous_declarations() {
        assert!(ComponentDeclaration::of::<Database>().is_named());
        assert!(!ComponentDeclaration::of::<Repo>().is_named());
    }

    #[test]
    fn empty_source_discovers_nothing() {
        let registry = ComponentRegistry::discover(&ExplicitSource::new());
        assert!(registry.is_empty());
    }
}
