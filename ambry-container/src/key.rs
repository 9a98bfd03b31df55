//! Component identification keys.
//!
//! [`ComponentKey`] uniquely identifies a component type within the
//! container. It pairs a [`TypeId`] with the human-readable type name
//! so error messages never show a bare hash.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Uniquely identifies a component type.
///
/// Used as the node identity in the dependency graph, the key of the
/// by-type bean table, and the subject of every error payload.
///
/// # Examples
/// ```
/// use ambry_container::key::ComponentKey;
///
/// struct UserService;
///
/// let key = ComponentKey::of::<UserService>();
/// assert!(key.type_name().contains("UserService"));
/// ```
#[derive(Clone, Copy)]
pub struct ComponentKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl ComponentKey {
    /// Creates a key for type `T`.
    #[inline]
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of this component type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full type name.
    ///
    /// Used in error messages for better developer experience.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the last path segment of the type name.
    ///
    /// `my_app::services::UserService` renders as `UserService`.
    #[inline]
    pub fn short_name(&self) -> &'static str {
        self.type_name
            .rsplit("::")
            .next()
            .unwrap_or(self.type_name)
    }
}

// Equality and hashing go through TypeId only; the name is carried
// purely for rendering.
impl PartialEq for ComponentKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ComponentKey {}

impl Hash for ComponentKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKey({})", self.type_name)
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MyStruct;

    #[test]
    fn key_of_type() {
        let key = ComponentKey::of::<MyStruct>();
        assert!(key.type_name().contains("MyStruct"));
    }

    #[test]
    fn key_equality_same_type() {
        assert_eq!(ComponentKey::of::<String>(), ComponentKey::of::<String>());
    }

    #[test]
    fn key_inequality_different_types() {
        assert_ne!(ComponentKey::of::<String>(), ComponentKey::of::<i32>());
    }

    #[test]
    fn short_name_strips_path() {
        let key = ComponentKey::of::<MyStruct>();
        assert_eq!(key.short_name(), "MyStruct");
    }

    #[test]
    fn key_in_hashmap() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(ComponentKey::of::<String>(), "string");
        map.insert(ComponentKey::of::<i32>(), "i32");
        assert_eq!(map.get(&ComponentKey::of::<String>()), Some(&"string"));
        assert_eq!(map.get(&ComponentKey::of::<bool>()), None);
    }
}
