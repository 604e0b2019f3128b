//! # Primitive Kernel Layer (Filter)
//!
//! A filter receives a value and returns the value for the next filter in line.
//! Filters bound to the same hook name are folded over the value in priority
//! order by the registry, so every filter sees what the previous one produced.
//!
//! # Writing Filters
//!
//! 1. **Async closure**: `|title: String| async move { Ok::<_, BoxError>(title) }`
//! 2. **Sync closure**: `filter_fn(|n: i32| n + 1)` or [`try_filter_fn`] for fallible ones
//! 3. **Struct implementation**: `impl Filter<String> for RepoName`

use crate::error::BoxError;
use std::{future::Future, marker::PhantomData, pin::Pin};

/// A marker trait for values that can be threaded through filters.
///
/// Values must be `Send + 'static` so a filter chain can be awaited on any
/// executor. Every such type is a value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be passed through a filter chain",
    label = "must be `Send + 'static`",
    note = "Filtered values are moved between async stages and must be `Send + 'static`."
)]
pub trait Value: Send + 'static {}

impl<T: Send + 'static> Value for T {}

/// A transformation bound to a hook name.
///
/// This trait uses native `async fn` for static dispatch. The registry stores
/// filters through [`DynFilter`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Filter<{T}>`",
    label = "missing `Filter` implementation",
    note = "Use `filter_fn` for synchronous closures, or return `Result<{T}, BoxError>` from an async closure."
)]
pub trait Filter<T: Value>: Send + Sync + 'static {
    /// Transforms `value`, returning the input for the next filter.
    fn filter(&self, value: T) -> impl Future<Output = Result<T, BoxError>> + Send;
}

/// Dynamic object-safe version of [`Filter`].
pub trait DynFilter<T: Value>: Send + Sync + 'static {
    /// Transforms `value` (dynamic dispatch version).
    fn filter_dyn<'a>(
        &'a self,
        value: T,
    ) -> Pin<Box<dyn Future<Output = Result<T, BoxError>> + Send + 'a>>;
}

impl<T: Value, F: Filter<T>> DynFilter<T> for F {
    fn filter_dyn<'a>(
        &'a self,
        value: T,
    ) -> Pin<Box<dyn Future<Output = Result<T, BoxError>> + Send + 'a>> {
        Box::pin(self.filter(value))
    }
}

// Async closures are filters.
impl<T, F, Fut> Filter<T> for F
where
    T: Value,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, BoxError>> + Send,
{
    fn filter(&self, value: T) -> impl Future<Output = Result<T, BoxError>> + Send {
        (self)(value)
    }
}

/// A filter built from a synchronous, infallible closure.
pub struct FilterFn<T, F> {
    f: F,
    _value: PhantomData<fn(T) -> T>,
}

/// Wraps a synchronous `Fn(T) -> T` closure as a [`Filter`].
///
/// # Example
///
/// ```rust,ignore
/// registry.add_with_priority("x", filter_fn(|v: i32| v + 1), 10);
/// ```
pub fn filter_fn<T, F>(f: F) -> FilterFn<T, F>
where
    T: Value,
    F: Fn(T) -> T + Send + Sync + 'static,
{
    FilterFn {
        f,
        _value: PhantomData,
    }
}

impl<T, F> Filter<T> for FilterFn<T, F>
where
    T: Value,
    F: Fn(T) -> T + Send + Sync + 'static,
{
    async fn filter(&self, value: T) -> Result<T, BoxError> {
        Ok((self.f)(value))
    }
}

/// A filter built from a synchronous closure that can fail.
pub struct TryFilterFn<T, F> {
    f: F,
    _value: PhantomData<fn(T) -> T>,
}

/// Wraps a synchronous `Fn(T) -> Result<T, E>` closure as a [`Filter`].
pub fn try_filter_fn<T, E, F>(f: F) -> TryFilterFn<T, F>
where
    T: Value,
    E: Into<BoxError>,
    F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
{
    TryFilterFn {
        f,
        _value: PhantomData,
    }
}

impl<T, E, F> Filter<T> for TryFilterFn<T, F>
where
    T: Value,
    E: Into<BoxError>,
    F: Fn(T) -> Result<T, E> + Send + Sync + 'static,
{
    async fn filter(&self, value: T) -> Result<T, BoxError> {
        (self.f)(value).map_err(Into::into)
    }
}
