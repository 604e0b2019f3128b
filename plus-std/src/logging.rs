//! `tracing` integration.

use plus_core::{FilterEvent, Logger};

/// A logger that emits registry events as `tracing` debug events.
///
/// Events are recorded under the `plus::filters` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, event: &FilterEvent<'_>) {
        match *event {
            FilterEvent::Added { name, priority } => {
                tracing::debug!(target: "plus::filters", hook = name, priority, "Filter added");
            }
            FilterEvent::Applying { name, bindings } => {
                tracing::debug!(target: "plus::filters", hook = name, bindings, "Applying filters");
            }
            FilterEvent::Rendering { section } => {
                tracing::debug!(target: "plus::filters", section, "Rendering section");
            }
        }
    }
}
