//! Candidate discovery — how component declarations reach the container.
//!
//! The core never enumerates types itself. A [`CandidateSource`] supplies
//! [`Candidate`]s; each candidate probes to an optional
//! [`ComponentDeclaration`] (`None` means the type is not marked as a
//! component). Two sources ship with the crate:
//!
//! - [`ExplicitSource`] — a startup-time list, the usual choice for
//!   applications and tests;
//! - [`LinkedSource`] — every candidate submitted through
//!   [`inventory`] anywhere in the linked program, the analog of
//!   classpath scanning without any runtime introspection.

use crate::component::Component;
use crate::registry::ComponentDeclaration;

/// A candidate type offered to the container during discovery.
///
/// Probing is a pure function of the type: either it yields the type's
/// declaration, or `None` for a type that is not a component.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    probe: fn() -> Option<ComponentDeclaration>,
}

impl Candidate {
    /// A candidate that declares `T` as a component.
    pub const fn component<T: Component>() -> Self {
        Self {
            probe: probe_component::<T>,
        }
    }

    /// A candidate that is not a component. Probing yields `None` and
    /// discovery skips it without error.
    pub const fn inert<T: 'static>() -> Self {
        Self { probe: probe_inert::<T> }
    }

    /// Probes the candidate for a component declaration.
    pub fn probe(&self) -> Option<ComponentDeclaration> {
        (self.probe)()
    }
}

fn probe_component<T: Component>() -> Option<ComponentDeclaration> {
    Some(ComponentDeclaration::of::<T>())
}

fn probe_inert<T: 'static>() -> Option<ComponentDeclaration> {
    None
}

inventory::collect!(Candidate);

/// A source of candidate types.
///
/// The contract to the core is exactly: a list of candidates in, an
/// optional declaration out per candidate. How the list was produced is
/// the source's business.
pub trait CandidateSource {
    fn candidates(&self) -> Vec<Candidate>;
}

/// An explicit, startup-time candidate list.
///
/// # Examples
/// ```rust,ignore
/// let source = ExplicitSource::new()
///     .with(Candidate::component::<Database>())
///     .with(Candidate::component::<UserService>());
/// let container = Container::build(&source)?;
/// ```
#[derive(Debug, Default)]
pub struct ExplicitSource {
    candidates: Vec<Candidate>,
}

impl ExplicitSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate, builder-style.
    pub fn with(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Adds a candidate in place.
    pub fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }
}

impl CandidateSource for ExplicitSource {
    fn candidates(&self) -> Vec<Candidate> {
        self.candidates.clone()
    }
}

impl FromIterator<Candidate> for ExplicitSource {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

/// All candidates registered at link time via [`submit_component!`] or
/// `inventory::submit!`.
#[derive(Debug, Default)]
pub struct LinkedSource;

impl CandidateSource for LinkedSource {
    fn candidates(&self) -> Vec<Candidate> {
        inventory::iter::<Candidate>.into_iter().copied().collect()
    }
}

/// Registers a component type with the [`LinkedSource`].
///
/// # Examples
/// ```rust,ignore
/// struct Database;
/// impl Component for Database { /* ... */ }
///
/// ambry_container::submit_component!(Database);
/// ```
#[macro_export]
macro_rules! submit_component {
    ($ty:ty) => {
        $crate::inventory::submit! {
            $crate::discovery::Candidate::component::<$ty>()
        }
    };
}
