//! # The Container — heart of Ambry
//!
//! Ties the pipeline together: discovery → graph → resolution, eagerly
//! and all-or-nothing, before any bean is handed out.
//!
//! # Architecture
//! ```text
//! CandidateSource ──discover──> ComponentRegistry
//!                                      │
//!                                    build
//!                                      ▼
//!                               DependencyGraph ──resolve──> BeanStore
//!                                                               │
//!                                                          Container
//! ```
//!
//! # Examples
//! ```rust
//! use ambry_container::prelude::*;
//! use std::sync::Arc;
//!
//! struct Database;
//!
//! impl Component for Database {
//!     fn construct() -> Self { Database }
//! }
//!
//! struct UserService {
//!     db: Option<Arc<Database>>,
//! }
//!
//! impl Component for UserService {
//!     fn component_name() -> &'static str { "userService" }
//!
//!     fn dependency_slots() -> Vec<SlotDescriptor> {
//!         vec![SlotDescriptor::of::<Database>("db")]
//!     }
//!
//!     fn construct() -> Self { UserService { db: None } }
//!
//!     fn assign(&mut self, slot: &str, bean: &Bean) -> std::result::Result<(), WiringError> {
//!         match slot {
//!             "db" => self.db = Some(take_dependency(slot, bean)?),
//!             other => return Err(WiringError::unknown_slot(other)),
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let source = ExplicitSource::new()
//!     .with(Candidate::component::<Database>())
//!     .with(Candidate::component::<UserService>());
//!
//! let container = Container::build(&source).expect("wiring failed");
//!
//! let service = container.get_by_type::<UserService>().expect("declared");
//! assert!(service.db.is_some());
//! assert!(container.get_by_name("userService").is_some());
//! ```

use std::fmt;

use once_cell::sync::OnceCell;
use tracing::{info, instrument};

use crate::component::Bean;
use crate::discovery::{CandidateSource, LinkedSource};
use crate::error::{AmbryError, Result};
use crate::graph::DependencyGraph;
use crate::registry::ComponentRegistry;
use crate::resolver::Resolver;
use crate::store::BeanStore;

/// Immutable, fully wired dependency-injection container.
///
/// Built eagerly in one pass; after construction the only operations are
/// reads, so sharing across threads needs no synchronization.
pub struct Container {
    store: BeanStore,
}

impl Container {
    /// Builds a container from a candidate source.
    ///
    /// Runs discovery, graph construction, and the resolution pass
    /// sequentially. Fails fast: any error leaves no container behind.
    #[instrument(skip_all, name = "container_build")]
    pub fn build(source: &dyn CandidateSource) -> Result<Self> {
        let registry = ComponentRegistry::discover(source);
        info!(component_count = registry.len(), "Building container");

        let graph = DependencyGraph::build(&registry);
        let store = Resolver::resolve(&registry, &graph)?;

        info!(bean_count = store.len(), "Container built successfully");
        Ok(Self { store })
    }

    /// Looks up the bean of type `T`. Absent if `T` was never declared.
    ///
    /// Repeated calls return the identical instance.
    pub fn get_by_type<T: Send + Sync + 'static>(&self) -> Option<std::sync::Arc<T>> {
        self.store.get_by_type::<T>()
    }

    /// Looks up a bean by its declared name. Absent for unknown names
    /// and for anonymous components.
    pub fn get_by_name(&self, name: &str) -> Option<Bean> {
        self.store.get_by_name(name)
    }

    /// The underlying bean store.
    pub fn store(&self) -> &BeanStore {
        &self.store
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("beans", &self.store.len())
            .finish()
    }
}

// ═══════════════════════════════════════════
// Process-wide singleton
// ═══════════════════════════════════════════

static GLOBAL: OnceCell<Result<Container>> = OnceCell::new();

/// Initializes the process-wide container from an explicit source.
///
/// Construction happens exactly once; concurrent and repeated calls all
/// observe the first outcome. A failed construction is cached and
/// re-raised on every later call — it is a hard startup failure, never
/// retried.
pub fn init_global(source: &dyn CandidateSource) -> Result<&'static Container> {
    let outcome = GLOBAL.get_or_init(|| Container::build(source));
    outcome.as_ref().map_err(AmbryError::clone)
}

/// The process-wide container, built on first access from the
/// [`LinkedSource`] if [`init_global`] was never called.
pub fn global() -> Result<&'static Container> {
    init_global(&LinkedSource)
}

// ═══════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════

pub mod prelude {
    pub use super::{Container, global, init_global};
    pub use crate::component::{Bean, Component, SlotDescriptor, take_dependency};
    pub use crate::discovery::{Candidate, CandidateSource, ExplicitSource, LinkedSource};
    pub use crate::error::{AmbryError, Result, WiringError};
    pub use crate::key::ComponentKey;
    pub use crate::store::BeanStore;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{Component, SlotDescriptor, take_dependency};
    use crate::discovery::{Candidate, ExplicitSource};
    use crate::error::WiringError;
    use std::sync::Arc;

    struct Config;

    impl Component for Config {
        fn component_name() -> &'static str {
            "config"
        }

        fn construct() -> Self {
            Config
        }
    }

    struct Api {
        config: Option<Arc<Config>>,
    }

    impl Component for Api {
        fn dependency_slots() -> Vec<SlotDescriptor> {
            vec![SlotDescriptor::of::<Config>("config")]
        }

        fn construct() -> Self {
            Api { config: None }
        }

        fn assign(&mut self, slot: &str, bean: &Bean) -> std::result::Result<(), WiringError> {
            match slot {
                "config" => self.config = Some(take_dependency(slot, bean)?),
                other => return Err(WiringError::unknown_slot(other)),
            }
            Ok(())
        }
    }

    #[test]
    fn build_and_query_by_type_and_name() {
        let source = ExplicitSource::new()
            .with(Candidate::component::<Config>())
            .with(Candidate::component::<Api>());

        let container = Container::build(&source).unwrap();

        let api = container.get_by_type::<Api>().unwrap();
        let config = container.get_by_type::<Config>().unwrap();
        assert!(Arc::ptr_eq(api.config.as_ref().unwrap(), &config));

        assert!(container.get_by_name("config").is_some());
        assert!(container.get_by_name("api").is_none());
    }

    #[test]
    fn empty_source_builds_empty_container() {
        let container = Container::build(&ExplicitSource::new()).unwrap();
        assert!(container.store().is_empty());
        assert!(container.get_by_type::<Config>().is_none());
    }

    #[test]
    fn debug_shows_bean_count() {
        let source = ExplicitSource::new().with(Candidate::component::<Config>());
        let container = Container::build(&source).unwrap();

        let debug = format!("{container:?}");
        assert!(debug.contains("Container"));
        assert!(debug.contains('1'));
    }

    #[test]
    fn container_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Container>();
    }
}
