//! Bindings: a filter registered under a hook name with a priority.

use crate::{
    error::FilterError,
    filter::{DynFilter, Filter, Value},
};
use std::{
    any::{Any, type_name},
    fmt,
    sync::Arc,
};

/// Priority used when none is given. Higher priorities run first.
pub const DEFAULT_PRIORITY: i32 = 0;

/// An immutable `(name, callback, priority)` triple.
///
/// The callback is stored type-erased so bindings for different value types
/// can live in one registry. Cloning a binding shares the callback.
#[derive(Clone)]
pub struct Binding {
    name: String,
    priority: i32,
    value_type: &'static str,
    // Holds an `Arc<dyn DynFilter<T>>` for the value type named by `value_type`.
    callback: Arc<dyn Any + Send + Sync>,
}

impl Binding {
    /// Create a binding for a filter over values of type `T`.
    pub fn new<T, F>(name: impl Into<String>, filter: F, priority: i32) -> Self
    where
        T: Value,
        F: Filter<T>,
    {
        let callback: Arc<dyn DynFilter<T>> = Arc::new(filter);
        Self {
            name: name.into(),
            priority,
            value_type: type_name::<T>(),
            callback: Arc::new(callback),
        }
    }

    /// The hook name this binding is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The binding's priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The name of the value type the callback accepts.
    pub fn value_type(&self) -> &'static str {
        self.value_type
    }

    /// Returns `true` if the callback accepts values of type `T`.
    pub fn accepts<T: Value>(&self) -> bool {
        self.callback.is::<Arc<dyn DynFilter<T>>>()
    }

    /// Run the callback on `value`.
    ///
    /// Fails with [`FilterError::TypeMismatch`] if the binding was registered
    /// for another value type, or with [`FilterError::Callback`] carrying the
    /// callback's own error.
    pub async fn invoke<T: Value>(&self, value: T) -> Result<T, FilterError> {
        let filter = self
            .callback
            .downcast_ref::<Arc<dyn DynFilter<T>>>()
            .ok_or_else(|| FilterError::TypeMismatch {
                name: self.name.clone(),
                expected: self.value_type,
                found: type_name::<T>(),
            })?;
        filter.filter_dyn(value).await.map_err(FilterError::Callback)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}
