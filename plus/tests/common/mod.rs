#![allow(dead_code)]

use plus::{BoxError, Filter, HookRegistry, Markdown, Plugin, Section, filter_fn};
use std::time::Duration;

// ============================================================================
// Test Documents
// ============================================================================

pub fn section(name: &str, source: &str) -> Section {
    Section::new(name, Markdown::parse(source))
}

// ============================================================================
// Test Filters and Plugins
// ============================================================================

/// Appends a tag after sleeping, so later filters only run once it finishes.
pub struct SlowTag {
    pub tag: &'static str,
    pub delay: Duration,
}

impl Filter<String> for SlowTag {
    async fn filter(&self, value: String) -> Result<String, BoxError> {
        tokio::time::sleep(self.delay).await;
        Ok(format!("{value}{}", self.tag))
    }
}

/// A plugin that numbers every non-blank line of a section.
pub struct Numbering {
    pub section: String,
}

impl Plugin for Numbering {
    fn register(&self, filters: &mut HookRegistry) {
        filters.add(
            format!("{}:lines", self.section),
            filter_fn(|lines: Vec<String>| {
                let mut n = 0;
                lines
                    .into_iter()
                    .map(|line| {
                        if line.trim().is_empty() {
                            line
                        } else {
                            n += 1;
                            format!("{n}. {line}")
                        }
                    })
                    .collect()
            }),
        );
    }
}
