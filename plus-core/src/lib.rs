//! # plus-core
//!
//! Core traits for the Plus filter engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins that only need to write filters, not run them.
//!
//! # Building Blocks
//!
//! ## [`Filter`]
//!
//! The primitive kernel: takes a value, returns the value for the next filter.
//! Async closures, [`filter_fn`] closures and plain structs can all be filters.
//!
//! ## [`Binding`]
//!
//! A filter registered under a hook name with a priority. Higher priorities run
//! first. Bindings are type-erased so one registry can hold filters over
//! strings, line lists and whole documents side by side.
//!
//! ## [`Logger`]
//!
//! The registry reports registrations and applications as [`FilterEvent`]s to
//! an injected logger instead of a process-wide one.
//!
//! ## Documents
//!
//! [`Section`] and [`Markdown`] are the values the renderer threads through the
//! `"<name>"`, `"<name>:title"` and `"<name>:lines"` hooks.
//!
//! # Error Types
//!
//! - [`FilterError`] - Registry, renderer and callback failures
//! - [`BoxError`] - What filter callbacks fail with

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod binding;
mod document;
mod error;
mod filter;
mod logger;

// Re-exports
pub use binding::{Binding, DEFAULT_PRIORITY};
pub use document::{Markdown, Section, trim_lines};
pub use error::{BoxError, FilterError, check_name};
pub use filter::{DynFilter, Filter, FilterFn, TryFilterFn, Value, filter_fn, try_filter_fn};
pub use logger::{FilterEvent, Logger, NoopLogger};
