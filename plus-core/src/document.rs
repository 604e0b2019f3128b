//! Document model consumed by the renderer.
//!
//! A [`Section`] is a named piece of a README. Its [`Markdown`] content is what
//! filters transform: the whole body under the section's name, the title under
//! `"<name>:title"` and the lines under `"<name>:lines"`.

use std::fmt;

/// Markdown content: a title and the lines below it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markdown {
    /// The heading text, without the leading `#`.
    pub title: String,
    /// Body lines, in order.
    pub lines: Vec<String>,
}

impl Markdown {
    /// Create markdown content from a title and lines.
    pub fn new<I, S>(title: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse markdown text.
    ///
    /// A leading `# ` heading becomes the title; everything after it becomes
    /// the lines, with blank leading and trailing lines removed. A bare `#`
    /// heading gives an empty title.
    pub fn parse(source: &str) -> Self {
        let mut rest: Vec<&str> = source.lines().collect();
        let heading = rest.iter().position(|line| !line.trim().is_empty());

        let title = match heading {
            Some(idx) if is_heading(rest[idx]) => {
                let title = rest[idx].trim_start_matches('#').trim().to_string();
                rest.drain(..=idx);
                title
            }
            _ => String::new(),
        };

        Self {
            title,
            lines: trim_lines(rest.into_iter().map(str::to_string).collect()),
        }
    }
}

fn is_heading(line: &str) -> bool {
    line == "#" || line.starts_with("# ")
}

/// Writes the title as a `# ` heading followed by the lines.
///
/// Without a title, a bare `#` is written when the first non-blank line is
/// itself a heading, so [`Markdown::parse`] does not take it for the title.
impl fmt::Display for Markdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading_first = self
            .lines
            .iter()
            .find(|line| !line.trim().is_empty())
            .is_some_and(|line| is_heading(line));

        if !self.title.is_empty() {
            writeln!(f, "# {}", self.title)?;
        } else if heading_first {
            writeln!(f, "#")?;
        }
        if (!self.title.is_empty() || heading_first) && !self.lines.is_empty() {
            writeln!(f)?;
        }
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A named section of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Section name. Filters are keyed off it.
    pub name: String,
    /// The section's content.
    pub markdown: Markdown,
}

impl Section {
    /// Create a section.
    pub fn new(name: impl Into<String>, markdown: Markdown) -> Self {
        Self {
            name: name.into(),
            markdown,
        }
    }

    /// Hook name applied to the whole markdown body.
    pub fn body_hook(&self) -> &str {
        &self.name
    }

    /// Hook name applied to the title.
    pub fn title_hook(&self) -> String {
        format!("{}:title", self.name)
    }

    /// Hook name applied to the lines.
    pub fn lines_hook(&self) -> String {
        format!("{}:lines", self.name)
    }
}

/// Remove blank leading and trailing lines. Interior blank lines are kept.
pub fn trim_lines(mut lines: Vec<String>) -> Vec<String> {
    let blank = |line: &String| line.trim().is_empty();
    let end = lines.iter().rposition(|l| !blank(l)).map_or(0, |i| i + 1);
    lines.truncate(end);
    let start = lines.iter().position(|l| !blank(l)).unwrap_or(lines.len());
    lines.drain(..start);
    lines
}
