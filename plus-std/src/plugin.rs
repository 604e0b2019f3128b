//! Plugins and bulk loading.
//!
//! A plugin contributes bindings to a registry during setup. Hosts list their
//! plugins explicitly; there is no discovery by file path.

use crate::registry::HookRegistry;
use plus_core::{Binding, FilterError, check_name};

/// Something that registers filters.
///
/// # Example
///
/// ```rust,ignore
/// struct Shout;
///
/// impl Plugin for Shout {
///     fn register(&self, filters: &mut HookRegistry) {
///         filters.add("intro:title", filter_fn(|t: String| t.to_uppercase()));
///     }
/// }
/// ```
pub trait Plugin {
    /// Register this plugin's filters.
    fn register(&self, filters: &mut HookRegistry);
}

// Closures are plugins.
impl<F> Plugin for F
where
    F: Fn(&mut HookRegistry),
{
    fn register(&self, filters: &mut HookRegistry) {
        (self)(filters)
    }
}

impl HookRegistry {
    /// Let `plugin` register its filters.
    pub fn install<P: Plugin + ?Sized>(&mut self, plugin: &P) -> &mut Self {
        plugin.register(self);
        self
    }

    /// Register prepared bindings, each under its own name.
    ///
    /// Every binding is checked first; if any has an empty name nothing is
    /// registered and [`FilterError::InvalidName`] is returned.
    pub fn load<I>(&mut self, bindings: I) -> Result<usize, FilterError>
    where
        I: IntoIterator<Item = Binding>,
    {
        let bindings: Vec<Binding> = bindings.into_iter().collect();
        for binding in &bindings {
            check_name(binding.name())?;
        }
        let loaded = bindings.len();
        for binding in bindings {
            self.insert(binding);
        }
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plus_core::filter_fn;

    struct Suffix(&'static str);

    impl Plugin for Suffix {
        fn register(&self, filters: &mut HookRegistry) {
            let suffix = self.0;
            filters.add("intro:title", filter_fn(move |t: String| format!("{t}{suffix}")));
        }
    }

    #[tokio::test]
    async fn test_install_plugins() {
        let mut registry = HookRegistry::new();
        registry.install(&Suffix("!")).install(&Suffix("?"));

        assert_eq!(registry.count(), 2);
        let title = registry.apply("intro:title", "Hi".to_string()).await.unwrap();
        assert_eq!(title, "Hi!?");
    }

    #[tokio::test]
    async fn test_load_registers_under_own_name() {
        let mut registry = HookRegistry::new();
        let loaded = registry
            .load([
                Binding::new("git:repo", filter_fn(|_: String| "plus".to_string()), 0),
                Binding::new("git:branch", filter_fn(|_: String| "main".to_string()), 0),
            ])
            .unwrap();

        assert_eq!(loaded, 2);
        assert!(registry.contains("git:repo").unwrap());
        assert!(registry.contains("git:branch").unwrap());
        assert_eq!(
            registry.apply("git:branch", String::new()).await.unwrap(),
            "main"
        );
    }

    #[test]
    fn test_load_rejects_unnamed_binding() {
        let mut registry = HookRegistry::new();
        let result = registry.load(vec![
            Binding::new("ok", filter_fn(|v: i32| v), 0),
            Binding::new("", filter_fn(|v: i32| v), 0),
        ]);

        assert!(matches!(result, Err(FilterError::InvalidName)));
        assert_eq!(registry.count(), 0);
    }
}
