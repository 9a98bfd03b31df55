//! Error types for Ambry container operations.
//!
//! Every error aborts container construction entirely — no partial bean
//! store is ever exposed. Errors are `Clone` because a failed global
//! initialization is cached and re-raised on every later access.

use std::fmt;

use ambry_support::rendering::{render_bullets, render_chain};

use crate::key::ComponentKey;

/// Main error type for all Ambry operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AmbryError {
    /// The dependency walk revisited a component still under
    /// construction.
    #[error("{}", .0)]
    CircularDependency(CircularDependencyError),

    /// Two components would register under the same declared name.
    #[error("{}", .0)]
    DuplicateBeanName(DuplicateBeanNameError),

    /// A dependency slot refers to a type with no declaration.
    #[error("{}", .0)]
    UnresolvedDependency(UnresolvedDependencyError),

    /// A resolved dependency could not be assigned into its slot.
    #[error("{}", .0)]
    WiringFailed(WiringFailedError),
}

/// Error when a dependency chain returns to a type still being
/// constructed.
///
/// Carries the edge that closed the cycle: `from` is the component under
/// construction, `to` the dependency that pointed back into the walk.
#[derive(Debug, Clone)]
pub struct CircularDependencyError {
    /// The component whose dependencies were being resolved.
    pub from: ComponentKey,
    /// The dependency that was still in progress.
    pub to: ComponentKey,
}

impl fmt::Display for CircularDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circular dependency detected:\n  {}",
            render_chain(&[self.from.type_name(), self.to.type_name(), self.from.type_name()]),
        )?;
        write!(
            f,
            "\n  Hint: break the cycle by removing one of the two dependency slots"
        )
    }
}

/// Error when two components declare the same bean name.
///
/// Creation order is graph-dependent, so the conflict is only detectable
/// at registration time. `first` is the component already holding the
/// name, `second` the one that tried to claim it.
#[derive(Debug, Clone)]
pub struct DuplicateBeanNameError {
    pub name: &'static str,
    pub first: ComponentKey,
    pub second: ComponentKey,
}

impl fmt::Display for DuplicateBeanNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicate bean name {:?} declared by both {} and {}",
            self.name, self.first, self.second,
        )?;
        write!(
            f,
            "\n  Hint: bean names must be unique; rename one component or leave it anonymous"
        )
    }
}

/// Error when a declared dependency has no component declaration.
///
/// Includes "did you mean?" suggestions drawn from the registered types.
#[derive(Debug, Clone)]
pub struct UnresolvedDependencyError {
    /// The component whose slot could not be satisfied.
    pub component: ComponentKey,
    /// The required type that was never declared.
    pub missing: ComponentKey,
    /// Registered types with similar names.
    pub suggestions: Vec<ComponentKey>,
}

impl fmt::Display for UnresolvedDependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unresolved dependency: {} requires {}, which is not declared as a component",
            self.component, self.missing,
        )?;

        if !self.suggestions.is_empty() {
            let names: Vec<&str> = self.suggestions.iter().map(|k| k.type_name()).collect();
            write!(f, "\n  Did you mean one of:\n{}", render_bullets(&names))?;
        }

        write!(
            f,
            "\n  Hint: implement Component for {} and add it to the candidate list",
            self.missing.short_name(),
        )
    }
}

/// Error when assigning a resolved dependency into a slot fails.
#[derive(Debug, Clone)]
pub struct WiringFailedError {
    /// The component being wired.
    pub component: ComponentKey,
    /// The slot that rejected the assignment.
    pub slot: String,
    pub detail: String,
}

impl fmt::Display for WiringFailedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to wire slot {:?} of {}: {}",
            self.slot, self.component, self.detail,
        )
    }
}

/// Component-side wiring failure, returned by
/// [`Component::assign`](crate::component::Component::assign).
///
/// The resolver wraps it into [`AmbryError::WiringFailed`] together with
/// the component key.
#[derive(Debug, Clone)]
pub struct WiringError {
    pub slot: String,
    pub detail: String,
}

impl WiringError {
    /// The component does not declare a slot with this identifier.
    pub fn unknown_slot(slot: &str) -> Self {
        Self {
            slot: slot.to_string(),
            detail: "no such dependency slot".to_string(),
        }
    }

    /// The bean offered for this slot is not of the expected type.
    pub fn type_mismatch<T>(slot: &str) -> Self {
        Self {
            slot: slot.to_string(),
            detail: format!("expected a bean of type {}", std::any::type_name::<T>()),
        }
    }
}

impl fmt::Display for WiringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {:?}: {}", self.slot, self.detail)
    }
}

impl std::error::Error for WiringError {}

/// Convenient Result type for Ambry operations.
pub type Result<T> = std::result::Result<T, AmbryError>;

#[cfg(test)]
mod tests {
    use super::*;

    struct ServiceOne;
    struct ServiceTwo;

    #[test]
    fn circular_dependency_display() {
        let err = AmbryError::CircularDependency(CircularDependencyError {
            from: ComponentKey::of::<ServiceOne>(),
            to: ComponentKey::of::<ServiceTwo>(),
        });

        let msg = format!("{err}");
        assert!(msg.contains("Circular"));
        assert!(msg.contains("ServiceOne"));
        assert!(msg.contains("ServiceTwo"));
        assert!(msg.contains("→"));
    }

    #[test]
    fn duplicate_bean_name_display() {
        let err = AmbryError::DuplicateBeanName(DuplicateBeanNameError {
            name: "svc",
            first: ComponentKey::of::<ServiceOne>(),
            second: ComponentKey::of::<ServiceTwo>(),
        });

        let msg = format!("{err}");
        assert!(msg.contains("svc"));
        assert!(msg.contains("ServiceOne"));
        assert!(msg.contains("ServiceTwo"));
    }

    #[test]
    fn unresolved_dependency_display_with_suggestions() {
        let err = AmbryError::UnresolvedDependency(UnresolvedDependencyError {
            component: ComponentKey::of::<ServiceOne>(),
            missing: ComponentKey::of::<ServiceTwo>(),
            suggestions: vec![ComponentKey::of::<ServiceOne>()],
        });

        let msg = format!("{err}");
        assert!(msg.contains("Unresolved"));
        assert!(msg.contains("Did you mean"));
    }

    #[test]
    fn wiring_error_constructors() {
        let unknown = WiringError::unknown_slot("db");
        assert_eq!(unknown.slot, "db");

        let mismatch = WiringError::type_mismatch::<String>("db");
        assert!(mismatch.detail.contains("String"));
    }

    #[test]
    fn errors_are_cloneable() {
        let err = AmbryError::WiringFailed(WiringFailedError {
            component: ComponentKey::of::<ServiceOne>(),
            slot: "db".into(),
            detail: "boom".into(),
        });
        let cloned = err.clone();
        assert_eq!(format!("{err}"), format!("{cloned}"));
    }
}
