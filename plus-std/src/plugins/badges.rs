//! Markdown badges.

use crate::{plugin::Plugin, registry::HookRegistry};
use plus_core::filter_fn;
use std::fmt;

/// A linked badge image: `[![title](img)](url)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Alt text.
    pub title: String,
    /// Image URL.
    pub img: String,
    /// Link target.
    pub url: String,
}

impl Badge {
    /// Create a badge.
    pub fn new(title: impl Into<String>, img: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            img: img.into(),
            url: url.into(),
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[![{}]({})]({})", self.title, self.img, self.url)
    }
}

/// Puts a line of badges at the top of a section.
///
/// Registers a filter on `"<section>:lines"` that prepends the badges, space
/// separated, followed by a blank line.
pub struct BadgePlugin {
    section: String,
    badges: Vec<Badge>,
    priority: i32,
}

impl BadgePlugin {
    /// Create a plugin for `section`.
    pub fn new(section: impl Into<String>, badges: Vec<Badge>) -> Self {
        Self {
            section: section.into(),
            badges,
            priority: 0,
        }
    }

    /// Set the priority of the lines filter.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Plugin for BadgePlugin {
    fn register(&self, filters: &mut HookRegistry) {
        if self.badges.is_empty() {
            return;
        }
        let row = self
            .badges
            .iter()
            .map(Badge::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        filters.add_with_priority(
            format!("{}:lines", self.section),
            filter_fn(move |lines: Vec<String>| {
                let mut out = Vec::with_capacity(lines.len() + 2);
                out.push(row.clone());
                out.push(String::new());
                out.extend(lines);
                out
            }),
            self.priority,
        );
    }
}
