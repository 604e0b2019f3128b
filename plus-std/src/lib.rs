//! # plus-std
//!
//! Standard implementations for the Plus filter engine.
//!
//! This crate provides:
//! - **Registry**: [`HookRegistry`] and its [`RegistryBuilder`]
//! - **Rendering**: [`HookRegistry::render`] over [`Section`](plus_core::Section)s
//! - **Plugins**: the [`Plugin`] trait, bulk [`load`](HookRegistry::load) and
//!   sample git and badge plugins
//! - **Logging**: `TracingLogger` (feature `tracing`)
//! - **Collection**: `CollectedBinding` (feature `inventory`)

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use plus_core;

// Modules
#[cfg(feature = "inventory")]
pub mod collected;
#[cfg(feature = "tracing")]
pub mod logging;
pub mod names;
pub mod plugin;
pub mod plugins;
pub mod registry;
mod render;
pub mod testing;

pub use names::IntoNames;
pub use plugin::Plugin;
pub use registry::{HookRegistry, RegistryBuilder};

#[cfg(feature = "inventory")]
pub use inventory;
