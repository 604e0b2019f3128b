//! Bindings collected at link time via `inventory`.
//!
//! Plugins can submit bindings from anywhere in the program; the host gathers
//! them with [`HookRegistry::load_collected`].
//!
//! ```rust,ignore
//! inventory::submit! {
//!     CollectedBinding::new(|| Binding::new("git:repo", filter_fn(|repo: String| repo), 0))
//! }
//! ```

use crate::registry::HookRegistry;
use plus_core::{Binding, FilterError};

/// A submitted binding factory.
pub struct CollectedBinding {
    factory: fn() -> Binding,
}

impl CollectedBinding {
    /// Create a collected binding from a factory.
    pub const fn new(factory: fn() -> Binding) -> Self {
        Self { factory }
    }

    /// Build the binding.
    pub fn build(&self) -> Binding {
        (self.factory)()
    }
}

inventory::collect!(CollectedBinding);

impl HookRegistry {
    /// Register every submitted [`CollectedBinding`] under its own name.
    ///
    /// Submission order across crates is unspecified, so collected bindings
    /// that share a name should use distinct priorities.
    pub fn load_collected(&mut self) -> Result<usize, FilterError> {
        self.load(inventory::iter::<CollectedBinding>.into_iter().map(CollectedBinding::build))
    }
}
