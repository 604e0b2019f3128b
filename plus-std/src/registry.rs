//! The filter registry.
//!
//! Filters are registered against string hook names and applied in priority
//! order, each one receiving the previous one's output.

use crate::{names::IntoNames, plugin::Plugin};
use futures::future::{self, BoxFuture, FutureExt};
use plus_core::{
    Binding, DEFAULT_PRIORITY, Filter, FilterError, FilterEvent, Logger, NoopLogger, Value,
    check_name,
};
use std::{collections::HashMap, fmt, sync::Arc};

/// A registry of filters keyed by hook name.
///
/// # Example
/// ```ignore
/// let mut filters = HookRegistry::new();
/// filters.add_with_priority("x", filter_fn(|v: i32| v + 1), 10);
/// filters.add_with_priority("x", filter_fn(|v: i32| v * 2), 5);
///
/// assert_eq!(filters.apply("x", 3).await?, 8);
/// ```
pub struct HookRegistry {
    items: HashMap<String, Vec<Binding>>,
    logger: Arc<dyn Logger>,
    default_priority: i32,
}

impl HookRegistry {
    /// Create an empty registry with a no-op logger.
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    /// Create an empty registry reporting to `logger`.
    pub fn with_logger<L: Logger>(logger: L) -> Self {
        RegistryBuilder::new().logger(logger).build()
    }

    /// Start configuring a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Total number of bindings across all names.
    pub fn count(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    /// Check if no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether any binding is registered under `name`.
    pub fn contains(&self, name: &str) -> Result<bool, FilterError> {
        let name = check_name(name)?;
        Ok(self.items.get(name).is_some_and(|b| !b.is_empty()))
    }

    /// Names that have at least one binding, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .items
            .iter()
            .filter(|(_, b)| !b.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Register a filter with the default priority.
    pub fn add<T, F>(&mut self, name: impl Into<String>, filter: F)
    where
        T: Value,
        F: Filter<T>,
    {
        let priority = self.default_priority;
        self.add_with_priority(name, filter, priority);
    }

    /// Register a filter with a priority. Higher priorities run first.
    ///
    /// Names are not unique: every call adds another binding.
    pub fn add_with_priority<T, F>(&mut self, name: impl Into<String>, filter: F, priority: i32)
    where
        T: Value,
        F: Filter<T>,
    {
        self.insert(Binding::new(name, filter, priority));
    }

    pub(crate) fn insert(&mut self, binding: Binding) {
        self.logger.log(&FilterEvent::Added {
            name: binding.name(),
            priority: binding.priority(),
        });
        self.items
            .entry(binding.name().to_string())
            .or_default()
            .push(binding);
    }

    /// Bindings under `name`, highest priority first.
    ///
    /// Bindings with equal priority stay in registration order.
    pub fn by_priority(&self, name: &str) -> Result<Vec<Binding>, FilterError> {
        let name = check_name(name)?;
        let mut bindings = self.items.get(name).cloned().unwrap_or_default();
        // `sort_by` is stable.
        bindings.sort_by(|a, b| b.priority().cmp(&a.priority()));
        Ok(bindings)
    }

    /// Fold `value` through every binding under `name`, in priority order.
    ///
    /// Bindings run one at a time. With no bindings the value comes back
    /// unchanged. The first failing binding stops the chain and its error is
    /// returned.
    ///
    /// An empty `name` fails on the first poll, before any binding runs.
    pub async fn apply<T: Value>(&self, name: &str, value: T) -> Result<T, FilterError> {
        let bindings = self.by_priority(name)?;
        self.logger.log(&FilterEvent::Applying {
            name,
            bindings: bindings.len(),
        });

        let mut value = value;
        for binding in &bindings {
            value = binding.invoke(value).await?;
        }
        Ok(value)
    }

    /// One pending result per name, in the order given.
    ///
    /// Registered names are applied to `T::default()`; unregistered names
    /// resolve to `None` without running anything.
    pub fn promises<T>(
        &self,
        names: impl IntoNames,
    ) -> Result<Vec<BoxFuture<'_, Result<Option<T>, FilterError>>>, FilterError>
    where
        T: Value + Default,
    {
        let mut promises = Vec::new();
        for name in names.into_names() {
            let promise = if self.contains(&name)? {
                async move { self.apply(&name, T::default()).await.map(Some) }.boxed()
            } else {
                future::ready(Ok(None)).boxed()
            };
            promises.push(promise);
        }
        Ok(promises)
    }

    /// Wait for every name's result, then hand them to `callback` in order.
    ///
    /// Fails as soon as any one name fails; `callback` is not called then.
    /// Empty names are reported on the first poll, before any binding runs.
    pub async fn resolve<T, R, F>(
        &self,
        names: impl IntoNames,
        callback: F,
    ) -> Result<R, FilterError>
    where
        T: Value + Default,
        F: FnOnce(Vec<Option<T>>) -> R,
    {
        let promises = self.promises::<T>(names)?;
        let values = future::try_join_all(promises).await?;
        Ok(callback(values))
    }

    pub(crate) fn logger(&self) -> &dyn Logger {
        &*self.logger
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("names", &self.names())
            .field("count", &self.count())
            .field("default_priority", &self.default_priority)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RegistryBuilder
// ============================================================================

/// Builder for configuring a [`HookRegistry`].
///
/// # Example
/// ```ignore
/// let filters = HookRegistry::builder()
///     .logger(TracingLogger)
///     .default_priority(10)
///     .plugin(GitPlugin::new(GitDir::new(".")))
///     .build();
/// ```
pub struct RegistryBuilder {
    logger: Arc<dyn Logger>,
    default_priority: i32,
    bindings: Vec<Binding>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl RegistryBuilder {
    /// Create a builder with a no-op logger and priority 0.
    pub fn new() -> Self {
        Self {
            logger: Arc::new(NoopLogger),
            default_priority: DEFAULT_PRIORITY,
            bindings: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Set the logger.
    pub fn logger<L: Logger>(mut self, logger: L) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Report registry events through `tracing`.
    #[cfg(feature = "tracing")]
    pub fn tracing(self) -> Self {
        self.logger(crate::logging::TracingLogger)
    }

    /// Set the priority used by [`HookRegistry::add`].
    pub fn default_priority(mut self, priority: i32) -> Self {
        self.default_priority = priority;
        self
    }

    /// Register a prepared binding.
    pub fn binding(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Install a plugin when the registry is built.
    pub fn plugin<P: Plugin + 'static>(mut self, plugin: P) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Build the registry.
    ///
    /// Bindings are registered first, then plugins, each in the order given.
    pub fn build(self) -> HookRegistry {
        let mut registry = HookRegistry {
            items: HashMap::new(),
            logger: self.logger,
            default_priority: self.default_priority,
        };
        for binding in self.bindings {
            registry.insert(binding);
        }
        for plugin in &self.plugins {
            registry.install(plugin.as_ref());
        }
        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingFilter, OrderLog, RecordingLogger};
    use plus_core::{BoxError, filter_fn};

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let registry = HookRegistry::new();
        assert!(matches!(registry.contains(""), Err(FilterError::InvalidName)));
        assert!(matches!(registry.by_priority(""), Err(FilterError::InvalidName)));
        assert!(matches!(
            registry.apply("", 1).await,
            Err(FilterError::InvalidName)
        ));
    }

    #[test]
    fn test_count_and_contains() {
        let mut registry = HookRegistry::new();
        assert_eq!(registry.count(), 0);
        assert!(!registry.contains("x").unwrap());

        registry.add("x", filter_fn(|v: i32| v));
        registry.add("x", filter_fn(|v: i32| v));
        registry.add("y", filter_fn(|s: String| s));

        assert_eq!(registry.count(), 3);
        assert!(registry.contains("x").unwrap());
        assert!(registry.contains("y").unwrap());
        assert!(!registry.contains("z").unwrap());
        assert_eq!(registry.names(), vec!["x", "y"]);
    }

    #[test]
    fn test_by_priority_is_descending_and_stable() {
        let mut registry = HookRegistry::new();
        registry.add_with_priority("x", filter_fn(|v: i32| v), 1);
        registry.add_with_priority("x", filter_fn(|v: i32| v), 10);
        registry.add_with_priority("x", filter_fn(|v: i32| v), 5);
        registry.add_with_priority("x", filter_fn(|v: i32| v), 10);

        let priorities: Vec<i32> = registry
            .by_priority("x")
            .unwrap()
            .iter()
            .map(Binding::priority)
            .collect();
        assert_eq!(priorities, vec![10, 10, 5, 1]);
        assert!(registry.by_priority("missing").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_equal_priorities_run_in_registration_order() {
        let log = OrderLog::new();
        let mut registry = HookRegistry::new();
        for id in 1..=3 {
            registry.add("x", log.filter::<()>(id));
        }

        registry.apply("x", ()).await.unwrap();
        assert_eq!(log.order(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_apply_folds_in_priority_order() {
        let mut registry = HookRegistry::new();
        registry.add_with_priority("x", filter_fn(|v: i32| v + 1), 10);
        registry.add_with_priority("x", filter_fn(|v: i32| v * 2), 5);

        assert_eq!(registry.apply("x", 3).await.unwrap(), 8);
    }

    #[tokio::test]
    async fn test_apply_without_bindings_is_identity() {
        let registry = HookRegistry::new();
        assert_eq!(registry.apply("nothing", 42).await.unwrap(), 42);
        assert_eq!(
            registry.apply("nothing", "same".to_string()).await.unwrap(),
            "same"
        );
    }

    #[tokio::test]
    async fn test_apply_awaits_async_filters() {
        let mut registry = HookRegistry::new();
        registry.add_with_priority(
            "title",
            |t: String| async move { Ok::<_, BoxError>(format!("{t}!")) },
            1,
        );
        registry.add_with_priority("title", filter_fn(|t: String| t.to_uppercase()), 2);

        assert_eq!(registry.apply("title", "hi".to_string()).await.unwrap(), "HI!");
    }

    #[tokio::test]
    async fn test_failure_stops_chain() {
        let log = OrderLog::new();
        let mut registry = HookRegistry::new();
        registry.add_with_priority("x", log.filter::<i32>(1), 3);
        registry.add_with_priority("x", FailingFilter::<i32>::new("broken filter"), 2);
        registry.add_with_priority("x", log.filter::<i32>(3), 1);

        let err = registry.apply("x", 0).await.unwrap_err();
        assert_eq!(err.to_string(), "broken filter");
        assert_eq!(log.order(), vec![1]);
    }

    #[tokio::test]
    async fn test_type_mismatch_surfaces_on_apply() {
        let mut registry = HookRegistry::new();
        registry.add("x", filter_fn(|v: i32| v));

        let err = registry.apply("x", "text".to_string()).await.unwrap_err();
        assert!(matches!(err, FilterError::TypeMismatch { .. }));
    }

    #[tokio::test]
    async fn test_promises_keep_input_order() {
        let mut registry = HookRegistry::new();
        registry.add("git:repo", filter_fn(|_: String| "plus".to_string()));

        let promises = registry
            .promises::<String>(["git:branch", "git:repo"])
            .unwrap();
        let values = future::join_all(promises).await;
        let values: Vec<Option<String>> = values.into_iter().map(Result::unwrap).collect();
        assert_eq!(values, vec![None, Some("plus".to_string())]);
    }

    #[test]
    fn test_promises_reject_empty_name() {
        let registry = HookRegistry::new();
        assert!(matches!(
            registry.promises::<String>(["ok", ""]),
            Err(FilterError::InvalidName)
        ));
    }

    #[tokio::test]
    async fn test_resolve_passes_values_in_name_order() {
        let mut registry = HookRegistry::new();
        registry.add("a", filter_fn(|_: String| "first".to_string()));
        registry.add("b", filter_fn(|_: String| "second".to_string()));

        let joined = registry
            .resolve(["b", "a", "c"], |values: Vec<Option<String>>| {
                values
                    .into_iter()
                    .map(|v| v.unwrap_or_else(|| "-".to_string()))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .await
            .unwrap();
        assert_eq!(joined, "second,first,-");
    }

    #[tokio::test]
    async fn test_resolve_fails_without_calling_back() {
        let mut registry = HookRegistry::new();
        registry.add("a", FailingFilter::<String>::new("no git"));
        registry.add("b", filter_fn(|s: String| s));

        let mut called = false;
        let result = registry
            .resolve("a", |_: Vec<Option<String>>| called = true)
            .await;
        assert_eq!(result.unwrap_err().to_string(), "no git");
        assert!(!called);
    }

    #[test]
    fn test_add_is_logged() {
        let logger = RecordingLogger::new();
        let mut registry = HookRegistry::with_logger(logger.clone());
        registry.add_with_priority("git:repo", filter_fn(|s: String| s), 7);

        assert_eq!(logger.lines(), vec!["Filters::add git:repo 7"]);
    }

    #[tokio::test]
    async fn test_apply_is_logged() {
        let logger = RecordingLogger::new();
        let mut registry = HookRegistry::with_logger(logger.clone());
        registry.add("x", filter_fn(|v: i32| v));
        logger.clear();

        registry.apply("x", 1).await.unwrap();
        assert_eq!(logger.lines(), vec!["Filters::apply x (1 bindings)"]);
    }

    #[test]
    fn test_builder_default_priority_and_bindings() {
        let registry = HookRegistry::builder()
            .default_priority(3)
            .binding(Binding::new("x", filter_fn(|v: i32| v), 9))
            .plugin(|filters: &mut HookRegistry| filters.add("x", filter_fn(|v: i32| v)))
            .build();

        let priorities: Vec<i32> = registry
            .by_priority("x")
            .unwrap()
            .iter()
            .map(Binding::priority)
            .collect();
        assert_eq!(priorities, vec![9, 3]);
    }
}
