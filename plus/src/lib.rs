//! # plus - Priority-Ordered Async Filters
//!
//! `plus` lets independent plugins register transformation callbacks against
//! named hooks, and lets a renderer run every callback for a hook in priority
//! order, feeding each one's output into the next.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plus::prelude::*;
//!
//! let mut filters = HookRegistry::new();
//! filters.add_with_priority("x", filter_fn(|v: i32| v + 1), 10);
//! filters.add_with_priority("x", filter_fn(|v: i32| v * 2), 5);
//! assert_eq!(filters.apply("x", 3).await?, 8);
//!
//! let intro = Section::new("intro", Markdown::parse("# Hi\n\nWelcome."));
//! let rendered = filters.render(&intro).await?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use plus_core::{
    // Bindings
    Binding,
    // Error types
    BoxError,
    DEFAULT_PRIORITY,
    // Filters
    DynFilter,
    Filter,
    FilterError,
    // Logging
    FilterEvent,
    FilterFn,
    Logger,
    // Documents
    Markdown,
    NoopLogger,
    Section,
    TryFilterFn,
    Value,
    filter_fn,
    trim_lines,
    try_filter_fn,
};

// Registry
pub use plus_std::{HookRegistry, IntoNames, Plugin, RegistryBuilder};

#[cfg(feature = "tracing")]
pub use plus_std::logging::TracingLogger;

#[cfg(feature = "inventory")]
pub use plus_std::collected::CollectedBinding;

/// Sample plugins.
pub mod plugins {
    pub use plus_std::plugins::{Badge, BadgePlugin, GitDir, GitInfo, GitPlugin, GitSource};

    /// Git hook names.
    pub mod git {
        pub use plus_std::plugins::git::{BRANCH, REPO, USER};
    }
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use plus_std::testing::*;
}

/// Prelude module - common imports for Plus.
///
/// # Usage
///
/// ```rust,ignore
/// use plus::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Filter, FilterError, HookRegistry, Markdown, Plugin, Section, filter_fn,
        try_filter_fn,
    };
}

#[cfg(feature = "inventory")]
pub use inventory;
