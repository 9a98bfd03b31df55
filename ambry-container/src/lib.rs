//! Core container implementation for Ambry DI.
//!
//! Components declare their dependency slots through the [`Component`]
//! trait, a [`CandidateSource`](discovery::CandidateSource) supplies the
//! candidate types, and [`Container::build`](container::Container::build)
//! wires everything eagerly: discovery, dependency-graph construction,
//! cycle detection, and dependency-ordered instantiation into a
//! process-lifetime bean store.

pub mod component;
pub mod container;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod key;
pub mod registry;
pub mod resolver;
pub mod store;

pub use component::{Bean, Component, SlotDescriptor, take_dependency};
pub use container::{Container, global, init_global, prelude};
pub use discovery::{Candidate, CandidateSource, ExplicitSource, LinkedSource};
pub use error::{AmbryError, Result, WiringError};
pub use key::ComponentKey;
pub use store::BeanStore;

// Re-exported so submit_component! works without a direct inventory
// dependency in the caller.
pub use inventory;
