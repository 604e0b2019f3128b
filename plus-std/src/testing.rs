//! Testing utilities for Plus.
//!
//! This module provides filters and loggers that make registry behaviour easy
//! to observe in tests.
//!
//! # Features
//!
//! - [`RecordingFilter`]: A filter that records every value it receives
//! - [`OrderLog`]: Filters that log their id when they run
//! - [`FailingFilter`]: A filter that always fails
//! - [`RecordingLogger`]: A logger that keeps every event as a line of text

use plus_core::{BoxError, Filter, FilterEvent, Logger, Value};
use std::{
    marker::PhantomData,
    sync::{Arc, Mutex},
};

// ============================================================================
// Recording Filter
// ============================================================================

/// A filter that records the values it receives and passes them through.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingFilter::<String>::new();
/// registry.add("intro:title", recorder.clone());
///
/// registry.apply("intro:title", "Hi".to_string()).await?;
/// assert_eq!(recorder.values(), vec!["Hi"]);
/// ```
pub struct RecordingFilter<T: Clone> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone> RecordingFilter<T> {
    /// Create a new recording filter.
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded values.
    pub fn values(&self) -> Vec<T> {
        self.values.lock().unwrap().clone()
    }

    /// Get the number of recorded values.
    pub fn count(&self) -> usize {
        self.values.lock().unwrap().len()
    }
}

impl<T: Clone> Default for RecordingFilter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for RecordingFilter<T> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
        }
    }
}

impl<T: Value + Clone> Filter<T> for RecordingFilter<T> {
    async fn filter(&self, value: T) -> Result<T, BoxError> {
        self.values.lock().unwrap().push(value.clone());
        Ok(value)
    }
}

// ============================================================================
// Order Log
// ============================================================================

/// A shared log of filter ids in the order the filters ran.
#[derive(Clone, Default)]
pub struct OrderLog {
    order: Arc<Mutex<Vec<usize>>>,
}

impl OrderLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pass-through filter over `T` that appends `id` when it runs.
    pub fn filter<T: Value>(&self, id: usize) -> OrderFilter<T> {
        OrderFilter {
            id,
            order: self.order.clone(),
            _value: PhantomData,
        }
    }

    /// Ids in the order they were logged.
    pub fn order(&self) -> Vec<usize> {
        self.order.lock().unwrap().clone()
    }
}

/// Filter created by [`OrderLog::filter`].
pub struct OrderFilter<T> {
    id: usize,
    order: Arc<Mutex<Vec<usize>>>,
    _value: PhantomData<fn(T) -> T>,
}

impl<T: Value> Filter<T> for OrderFilter<T> {
    async fn filter(&self, value: T) -> Result<T, BoxError> {
        self.order.lock().unwrap().push(self.id);
        Ok(value)
    }
}

// ============================================================================
// Failing Filter
// ============================================================================

/// A filter over `T` that always fails with the given message.
pub struct FailingFilter<T> {
    message: String,
    _value: PhantomData<fn(T) -> T>,
}

impl<T> FailingFilter<T> {
    /// Create a failing filter.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            _value: PhantomData,
        }
    }
}

impl<T: Value> Filter<T> for FailingFilter<T> {
    async fn filter(&self, _value: T) -> Result<T, BoxError> {
        Err(self.message.clone().into())
    }
}

// ============================================================================
// Recording Logger
// ============================================================================

/// A logger that records every event as its display string.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLogger {
    /// Create an empty recording logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Clear all recorded lines.
    pub fn clear(&self) {
        self.lines.lock().unwrap().clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, event: &FilterEvent<'_>) {
        self.lines.lock().unwrap().push(event.to_string());
    }
}
