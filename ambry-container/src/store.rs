//! The bean store — the long-lived registry of wired instances.
//!
//! Two lookup tables: by type and by name (only named components appear
//! in the second). Populated by the resolver during the one resolution
//! pass; read-only afterwards, so unsynchronized concurrent reads are
//! safe.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::component::Bean;
use crate::error::{AmbryError, DuplicateBeanNameError, Result};
use crate::key::ComponentKey;

#[derive(Debug)]
struct NamedBean {
    key: ComponentKey,
    bean: Bean,
}

/// Holds every instantiated bean for the container's lifetime.
///
/// Exactly one instance exists per component type (singleton invariant);
/// repeated lookups return clones of the same `Arc`.
#[derive(Debug, Default)]
pub struct BeanStore {
    by_type: HashMap<ComponentKey, Bean>,
    by_name: HashMap<&'static str, NamedBean>,
}

impl BeanStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers a freshly wired bean under its type, and under `name`
    /// if non-empty.
    ///
    /// # Errors
    /// [`AmbryError::DuplicateBeanName`] if the name is already taken by
    /// a different component. The existing entry is never overwritten.
    pub(crate) fn register(
        &mut self,
        key: ComponentKey,
        name: &'static str,
        bean: Bean,
    ) -> Result<()> {
        self.by_type.insert(key, Arc::clone(&bean));

        if !name.is_empty() {
            if let Some(existing) = self.by_name.get(name) {
                warn!(name, first = %existing.key, second = %key, "Duplicate bean name");
                return Err(AmbryError::DuplicateBeanName(DuplicateBeanNameError {
                    name,
                    first: existing.key,
                    second: key,
                }));
            }
            self.by_name.insert(name, NamedBean { key, bean });
        }

        debug!(key = %key, name, "Bean registered");
        Ok(())
    }

    /// Looks up the bean of type `T`.
    ///
    /// Repeated calls return the identical instance.
    pub fn get_by_type<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        self.by_type
            .get(&ComponentKey::of::<T>())
            .and_then(|bean| Arc::clone(bean).downcast::<T>().ok())
    }

    /// Looks up a bean by its declared name.
    pub fn get_by_name(&self, name: &str) -> Option<Bean> {
        self.by_name.get(name).map(|named| Arc::clone(&named.bean))
    }

    /// Type-erased lookup, used by the resolver for memoization and slot
    /// wiring.
    pub(crate) fn bean(&self, key: &ComponentKey) -> Option<Bean> {
        self.by_type.get(key).map(Arc::clone)
    }

    /// Whether a bean of this type has completed construction.
    pub(crate) fn contains(&self, key: &ComponentKey) -> bool {
        self.by_type.contains_key(key)
    }

    /// Number of beans held.
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Returns true if no beans are held.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
