//! Line parser and tree builder for `parent:child1,child2` declarations.

use tracing::{debug, instrument};

use crate::domain::arena::FamilyTree;
use crate::domain::error::{DomainError, TreeResult};

const SEPARATOR: char = ':';
const CHILD_DELIMITER: char = ',';

/// One declaration line split into its parts. Names are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub parent: &'a str,
    pub children: Vec<&'a str>,
}

/// Split a line at its first colon and the remainder at commas.
///
/// No whitespace is trimmed. Trailing empty names are dropped, while an empty
/// children part still yields one empty name.
#[instrument(level = "trace")]
pub fn parse_line(line: &str) -> TreeResult<ParsedLine<'_>> {
    let (parent, children_part) =
        line.split_once(SEPARATOR)
            .ok_or_else(|| DomainError::MissingSeparator {
                line: line.to_string(),
            })?;

    let children = if children_part.is_empty() {
        vec![children_part]
    } else {
        let mut names: Vec<&str> = children_part.split(CHILD_DELIMITER).collect();
        while names.last().is_some_and(|name| name.is_empty()) {
            names.pop();
        }
        names
    };

    Ok(ParsedLine { parent, children })
}

/// Builds a [`FamilyTree`] from declaration lines fed in file order.
///
/// The first processed line establishes the root; every later line must name
/// a parent already present in the tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    tree: FamilyTree,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one line and attach its children. On error the tree is unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn process_line(&mut self, line: &str) -> TreeResult<()> {
        let parsed = parse_line(line)?;

        let parent_idx = match self.tree.root() {
            None => self.tree.add_root(parsed.parent),
            Some(root) => self
                .tree
                .find_by_name(root, parsed.parent)
                .ok_or_else(|| DomainError::ParentNotFound(parsed.parent.to_string()))?,
        };

        for child in &parsed.children {
            self.tree.add_child(parent_idx, child);
        }
        debug!(
            "attached {} children to {:?}",
            parsed.children.len(),
            parsed.parent
        );
        Ok(())
    }

    /// Feed all lines in order, stopping at the first malformed one.
    ///
    /// Errors are wrapped with the 1-based line number.
    #[instrument(level = "debug", skip_all)]
    pub fn build_from_lines<I, S>(lines: I) -> TreeResult<FamilyTree>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::new();
        for (i, line) in lines.into_iter().enumerate() {
            builder
                .process_line(line.as_ref())
                .map_err(|e| DomainError::Line {
                    line_no: i + 1,
                    source: Box::new(e),
                })?;
        }
        Ok(builder.finish())
    }

    /// Tree built so far.
    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    pub fn finish(self) -> FamilyTree {
        self.tree
    }
}
