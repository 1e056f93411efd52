//! Test harness for scripting modeling sessions.
//!
//! Provides a fluent builder over the session registries, pre-made material
//! and surface fixtures, and assertion helpers that report expected vs
//! actual deck text on failure.
//!
//! # Key Components
//!
//! - [`SceneBuilder`] — Fluent API for building sessions and exporting decks
//! - [`helpers`] — material specs and surface fixtures
//! - [`assertions`] — deck text assertions with diagnostics

pub mod assertions;
pub mod helpers;
pub mod workflow;

pub use helpers::HarnessError;
pub use workflow::SceneBuilder;
