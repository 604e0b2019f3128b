//! Sample plugins.
//!
//! These show how hosts contribute filters; the registry itself does not
//! depend on them.

pub mod badges;
pub mod git;

pub use badges::{Badge, BadgePlugin};
pub use git::{GitDir, GitInfo, GitPlugin, GitSource};
