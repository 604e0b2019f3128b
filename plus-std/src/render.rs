//! Rendering sections through their filters.

use crate::registry::HookRegistry;
use futures::future;
use plus_core::{FilterError, FilterEvent, Section, trim_lines};

impl HookRegistry {
    /// Fails with [`FilterError::NoFilters`] when nothing is registered.
    ///
    /// Drivers call this once before a rendering pass.
    pub fn before_render(&self) -> Result<(), FilterError> {
        if self.count() == 0 {
            return Err(FilterError::NoFilters);
        }
        Ok(())
    }

    /// Run a section through its filters.
    ///
    /// 1. `"<name>"` is applied to a copy of the whole markdown.
    /// 2. `"<name>:title"` and `"<name>:lines"` are applied to the result's
    ///    title and lines concurrently.
    /// 3. Once both finish, the title is trimmed, blank leading and trailing
    ///    lines are dropped, and a section holding the new markdown is returned.
    ///
    /// `section` itself is left untouched. An empty section name fails on the
    /// first poll, before any binding runs.
    pub async fn render(&self, section: &Section) -> Result<Section, FilterError> {
        if section.name.is_empty() {
            return Err(FilterError::InvalidArgument(
                "section name must not be empty".to_string(),
            ));
        }
        self.logger().log(&FilterEvent::Rendering {
            section: &section.name,
        });

        let mut markdown = self
            .apply(section.body_hook(), section.markdown.clone())
            .await?;

        let title_hook = section.title_hook();
        let lines_hook = section.lines_hook();
        let (title, lines) = future::try_join(
            self.apply(&title_hook, std::mem::take(&mut markdown.title)),
            self.apply(&lines_hook, std::mem::take(&mut markdown.lines)),
        )
        .await?;

        markdown.title = title.trim().to_string();
        markdown.lines = trim_lines(lines);
        Ok(Section::new(section.name.clone(), markdown))
    }

    /// Check [`before_render`](Self::before_render), then render every section.
    ///
    /// Sections render concurrently; the output keeps the input order. The
    /// first failure fails the whole pass.
    pub async fn render_all(&self, sections: &[Section]) -> Result<Vec<Section>, FilterError> {
        self.before_render()?;
        future::try_join_all(sections.iter().map(|section| self.render(section))).await
    }
}
