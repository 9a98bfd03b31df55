//! # Ambry — Component Wiring & IoC Container for Rust
//!
//! A minimal dependency-injection container: components declare their
//! dependency slots, Ambry discovers them, builds the dependency graph,
//! rejects cycles, and instantiates every component exactly once in
//! dependency order — all before the first bean is handed out.
//!
//! See [`Container`] for the entry point and the `basic` example for a
//! full wiring walkthrough.

pub use ambry_container::*;
pub use ambry_container::submit_component;
pub use ambry_support::rendering;
