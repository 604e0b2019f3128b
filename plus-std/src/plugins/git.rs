//! Git plugin.
//!
//! Fills in repository details from the working copy's git metadata. It
//! registers the following filters, all over `String`:
//!
//! - `git:repo` - the repository name
//! - `git:branch` - the current branch
//! - `git:user` - the configured user name
//!
//! Each filter returns the git value when one is known and passes its input
//! through otherwise.

use crate::{plugin::Plugin, registry::HookRegistry};
use plus_core::filter_fn;
use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

/// Hook name for the repository name.
pub const REPO: &str = "git:repo";
/// Hook name for the current branch.
pub const BRANCH: &str = "git:branch";
/// Hook name for the configured user name.
pub const USER: &str = "git:user";

/// What is known about the working copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitInfo {
    /// Repository name, from the `origin` remote.
    pub repo: Option<String>,
    /// Checked-out branch; `None` when `HEAD` is detached.
    pub branch: Option<String>,
    /// `user.name` from the repository config.
    pub user: Option<String>,
}

/// A source of [`GitInfo`].
pub trait GitSource: Send + Sync + 'static {
    /// Current git details, or `None` if unavailable.
    fn info(&self) -> Option<GitInfo>;
}

// Fixed details, mostly for tests and hosts that already know them.
impl GitSource for GitInfo {
    fn info(&self) -> Option<GitInfo> {
        Some(self.clone())
    }
}

/// Reads git details from a working copy's `.git` directory.
#[derive(Debug, Clone)]
pub struct GitDir {
    root: PathBuf,
}

impl GitDir {
    /// Use the working copy rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read `HEAD` and `config`.
    pub fn read(&self) -> io::Result<GitInfo> {
        let git = self.root.join(".git");
        let head = fs::read_to_string(git.join("HEAD"))?;
        let config = read_optional(&git.join("config"))?;

        Ok(GitInfo {
            branch: parse_head(&head),
            repo: config_value(&config, "remote \"origin\"", "url").map(|url| repo_name(&url)),
            user: config_value(&config, "user", "name"),
        })
    }
}

impl GitSource for GitDir {
    fn info(&self) -> Option<GitInfo> {
        self.read().ok()
    }
}

fn read_optional(path: &Path) -> io::Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err),
    }
}

fn parse_head(head: &str) -> Option<String> {
    head.trim()
        .strip_prefix("ref: refs/heads/")
        .map(str::to_string)
}

/// Look up `key` inside `[section]` of a git config file.
fn config_value(config: &str, section: &str, key: &str) -> Option<String> {
    let mut in_section = false;
    for line in config.lines().map(str::trim) {
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            in_section = header.trim() == section;
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            if k.trim() == key {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

/// `git@github.com:me/plus.git` and `https://host/me/plus` both give `plus`.
fn repo_name(url: &str) -> String {
    let last = url
        .trim_end_matches('/')
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(url);
    last.strip_suffix(".git").unwrap_or(last).to_string()
}

/// Registers the `git:*` filters.
pub struct GitPlugin<S> {
    source: Arc<S>,
    priority: i32,
}

impl<S: GitSource> GitPlugin<S> {
    /// Create a plugin reading from `source`.
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            priority: 0,
        }
    }

    /// Set the priority of the registered filters.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl<S: GitSource> Plugin for GitPlugin<S> {
    fn register(&self, filters: &mut HookRegistry) {
        let fields: [(&str, fn(GitInfo) -> Option<String>); 3] = [
            (REPO, |info| info.repo),
            (BRANCH, |info| info.branch),
            (USER, |info| info.user),
        ];
        for (name, field) in fields {
            let source = self.source.clone();
            filters.add_with_priority(
                name,
                filter_fn(move |value: String| source.info().and_then(field).unwrap_or(value)),
                self.priority,
            );
        }
    }
}
