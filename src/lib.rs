//! famtree: build a family tree from `parent:child1,child2` lines and query
//! most recent common ancestors.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{DomainError, FamilyTree, TreeBuilder};
