//! Domain layer: family tree engine and line builder
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod display;
pub mod error;

pub use arena::{FamilyTree, Person, TreeIterator, TreeNode};
pub use builder::{parse_line, ParsedLine, TreeBuilder};
pub use display::TreeDisplay;
pub use error::{DomainError, TreeResult};
