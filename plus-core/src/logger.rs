//! Logging seam for the filter registry.
//!
//! The registry never reaches for a global logger. It reports what it does as
//! [`FilterEvent`]s to the [`Logger`] it was built with.

use std::fmt;

/// A diagnostic event emitted by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEvent<'a> {
    /// A binding was registered.
    Added {
        /// Hook name.
        name: &'a str,
        /// Binding priority.
        priority: i32,
    },
    /// A hook is about to be applied.
    Applying {
        /// Hook name.
        name: &'a str,
        /// Number of bindings that will run.
        bindings: usize,
    },
    /// A section is about to be rendered.
    Rendering {
        /// Section name.
        section: &'a str,
    },
}

impl fmt::Display for FilterEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterEvent::Added { name, priority } => write!(f, "Filters::add {name} {priority}"),
            FilterEvent::Applying { name, bindings } => {
                write!(f, "Filters::apply {name} ({bindings} bindings)")
            }
            FilterEvent::Rendering { section } => write!(f, "Filters::render {section}"),
        }
    }
}

/// Receives diagnostic events. Logging is fire-and-forget and never fails.
pub trait Logger: Send + Sync + 'static {
    /// Record an event.
    fn log(&self, event: &FilterEvent<'_>);
}

/// A logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _event: &FilterEvent<'_>) {}
}

// Closures are loggers.
impl<F> Logger for F
where
    F: Fn(&FilterEvent<'_>) + Send + Sync + 'static,
{
    fn log(&self, event: &FilterEvent<'_>) {
        (self)(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_display() {
        let added = FilterEvent::Added {
            name: "git:repo",
            priority: 10,
        };
        assert_eq!(added.to_string(), "Filters::add git:repo 10");
        let applying = FilterEvent::Applying {
            name: "intro",
            bindings: 2,
        };
        assert_eq!(applying.to_string(), "Filters::apply intro (2 bindings)");
    }

    #[test]
    fn test_closure_logger() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = lines.clone();
        let logger = move |event: &FilterEvent<'_>| sink.lock().unwrap().push(event.to_string());

        logger.log(&FilterEvent::Rendering { section: "intro" });
        NoopLogger.log(&FilterEvent::Rendering { section: "ignored" });

        assert_eq!(*lines.lock().unwrap(), vec!["Filters::render intro"]);
    }
}
