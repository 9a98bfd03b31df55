//! The component model — setter-injection contract for container-managed
//! types.
//!
//! Instead of reflective field access, a type opts into the container by
//! implementing [`Component`]: it declares its dependency slots up front
//! and accepts resolved instances through [`Component::assign`] after
//! default construction. The container never inspects the type at
//! runtime beyond what the trait exposes.
//!
//! # Examples
//! ```
//! use ambry_container::component::{Bean, Component, SlotDescriptor, take_dependency};
//! use ambry_container::error::WiringError;
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
//!     fn dependency_slots() -> Vec<SlotDescriptor> {
//!         vec![SlotDescriptor::of::<Database>("db")]
//!     }
//!
//!     fn construct() -> Self {
//!         UserService { db: None }
//!     }
//!
//!     fn assign(&mut self, slot: &str, bean: &Bean) -> Result<(), WiringError> {
//!         match slot {
//!             "db" => self.db = Some(take_dependency(slot, bean)?),
//!             other => return Err(WiringError::unknown_slot(other)),
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use std::any::Any;
use std::sync::Arc;

use crate::error::WiringError;
use crate::key::ComponentKey;

/// A fully constructed, fully wired component instance.
///
/// Beans are type-erased and shared; [`BeanStore`](crate::store::BeanStore)
/// hands out clones of the same `Arc` for the container's lifetime.
pub type Bean = Arc<dyn Any + Send + Sync>;

/// A dependency slot: a named point on a component where another
/// component's instance must be injected.
///
/// Two slots of the same required type are distinct slots — both receive
/// the same resolved instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotDescriptor {
    slot: &'static str,
    requires: ComponentKey,
}

impl SlotDescriptor {
    /// Declares a slot named `slot` requiring a bean of type `T`.
    #[inline]
    pub fn of<T: 'static>(slot: &'static str) -> Self {
        Self {
            slot,
            requires: ComponentKey::of::<T>(),
        }
    }

    /// The slot identifier (a field-like handle).
    #[inline]
    pub fn slot(&self) -> &'static str {
        self.slot
    }

    /// The component type this slot must be filled with.
    #[inline]
    pub fn requires(&self) -> ComponentKey {
        self.requires
    }
}

/// A type eligible for container-managed instantiation and injection.
///
/// The three pieces mirror the declaration / construction / wiring phases
/// of the resolution pass:
/// - [`component_name`](Component::component_name) and
///   [`dependency_slots`](Component::dependency_slots) are the static
///   declaration, read once during discovery;
/// - [`construct`](Component::construct) is default construction, no
///   arguments, called exactly once;
/// - [`assign`](Component::assign) receives each resolved dependency.
pub trait Component: Send + Sync + Sized + 'static {
    /// Optional unique bean name. Empty string means anonymous: the bean
    /// is only reachable by type, never by name.
    fn component_name() -> &'static str {
        ""
    }

    /// The dependency slots this component declares.
    fn dependency_slots() -> Vec<SlotDescriptor> {
        Vec::new()
    }

    /// Default construction. Dependency slots are unfilled at this point;
    /// the container assigns them before the instance is ever handed out.
    fn construct() -> Self;

    /// Assigns a resolved dependency into the named slot.
    ///
    /// Called once per declared slot, after every dependency has been
    /// instantiated. The default body rejects any slot, which is correct
    /// for components with no dependencies.
    fn assign(&mut self, slot: &str, bean: &Bean) -> Result<(), WiringError> {
        let _ = bean;
        Err(WiringError::unknown_slot(slot))
    }
}

/// Downcasts a [`Bean`] to the concrete dependency type for `slot`.
///
/// The standard body of a [`Component::assign`] arm. A mismatch means the
/// declared slot type and the assign arm disagree; the resolver turns the
/// error into a fatal wiring failure.
pub fn take_dependency<T: Send + Sync + 'static>(
    slot: &str,
    bean: &Bean,
) -> Result<Arc<T>, WiringError> {
    Arc::clone(bean)
        .downcast::<T>()
        .map_err(|_| WiringError::type_mismatch::<T>(slot))
}

/// Object-safe view of a component under construction.
///
/// Lets the resolver wire slots without knowing the concrete type, then
/// seal the instance into a [`Bean`].
pub(crate) trait ErasedComponent: Send + Sync {
    fn assign_slot(&mut self, slot: &str, bean: &Bean) -> Result<(), WiringError>;

    fn into_bean(self: Box<Self>) -> Bean;
}

impl<T: Component> ErasedComponent for T {
    fn assign_slot(&mut self, slot: &str, bean: &Bean) -> Result<(), WiringError> {
        Component::assign(self, slot, bean)
    }

    fn into_bean(self: Box<Self>) -> Bean {
        Arc::new(*self)
    }
}

/// Erased constructor, stored in a declaration.
pub(crate) fn construct_erased<T: Component>() -> Box<dyn ErasedComponent> {
    Box::new(T::construct())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf;

    impl Component for Leaf {
        fn construct() -> Self {
            Leaf
        }
    }

    struct Holder {
        leaf: Option<Arc<Leaf>>,
    }

    impl Component for Holder {
        fn dependency_slots() -> Vec<SlotDescriptor> {
            vec![SlotDescriptor::of::<Leaf>("leaf")]
        }

        fn construct() -> Self {
            Holder { leaf: None }
        }

        fn assign(&mut self, slot: &str, bean: &Bean) -> Result<(), WiringError> {
            match slot {
                "leaf" => self.leaf = Some(take_dependency(slot, bean)?),
                other => return Err(WiringError::unknown_slot(other)),
            }
            Ok(())
        }
    }

    #[test]
    fn slot_descriptor_carries_type() {
        let slot = SlotDescriptor::of::<Leaf>("leaf");
        assert_eq!(slot.slot(), "leaf");
        assert_eq!(slot.requires(), ComponentKey::of::<Leaf>());
    }

    #[test]
    fn assign_fills_slot() {
        let mut holder = Holder::construct();
        let bean: Bean = Arc::new(Leaf);
        holder.assign("leaf", &bean).unwrap();
        assert!(holder.leaf.is_some());
    }

    #[test]
    fn assign_rejects_unknown_slot() {
        let mut holder = Holder::construct();
        let bean: Bean = Arc::new(Leaf);
        assert!(holder.assign("nope", &bean).is_err());
    }

    #[test]
    fn take_dependency_rejects_wrong_type() {
        let bean: Bean = Arc::new(42i32);
        let result = take_dependency::<Leaf>("leaf", &bean);
        assert!(result.is_err());
    }

    #[test]
    fn default_assign_rejects_everything() {
        let mut leaf = Leaf::construct();
        let bean: Bean = Arc::new(Leaf);
        assert!(leaf.assign("anything", &bean).is_err());
    }

    #[test]
    fn erased_roundtrip() {
        let mut erased = construct_erased::<Holder>();
        let bean: Bean = Arc::new(Leaf);
        erased.assign_slot("leaf", &bean).unwrap();

        let sealed = erased.into_bean();
        let holder = sealed.downcast::<Holder>().unwrap();
        assert!(holder.leaf.is_some());
    }
}
