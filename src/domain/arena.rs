//! Arena-backed family tree: insertion, lookup, ancestor walks and MRCA.

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, TreeResult};

/// Indentation added per generation in the plain text dump.
pub const INDENT: &str = "  ";

/// Data payload for tree nodes: one named individual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Name as written in the input, used as the lookup key
    pub name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tree node in the arena-based family hierarchy.
#[derive(Debug)]
pub struct TreeNode {
    /// Individual held by this node
    pub data: Person,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in insertion order
    pub children: Vec<Index>,
}

/// Single-rooted family tree.
///
/// Nodes live in a generational arena; the parent link is a plain index so
/// upward walks never create ownership cycles. Names are not deduplicated:
/// lookups return the first pre-order match.
#[derive(Debug)]
pub struct FamilyTree {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for FamilyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FamilyTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    fn insert_node(&mut self, data: Person, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    /// Establishes the root of an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn add_root(&mut self, name: &str) -> Index {
        debug_assert!(self.is_empty(), "add_root on a tree that already has a root");
        debug!("new root: {:?}", name);
        self.insert_node(Person::new(name), None)
    }

    /// Appends a new node named `name` as the last child of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: Index, name: &str) -> Index {
        self.insert_node(Person::new(name), Some(parent))
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn name_of(&self, idx: Index) -> Option<&str> {
        self.get_node(idx).map(|node| node.data.name.as_str())
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Pre-order iterator over the whole tree.
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self, self.root)
    }

    /// Pre-order iterator over the subtree rooted at `start`.
    pub fn iter_from(&self, start: Index) -> TreeIterator<'_> {
        TreeIterator::new(self, Some(start))
    }

    /// Depth-first, pre-order search of the subtree at `start`.
    ///
    /// `start` itself is checked first, then its children in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_name(&self, start: Index, target: &str) -> Option<Index> {
        self.iter_from(start)
            .find(|(_, _, node)| node.data.name == target)
            .map(|(idx, _, _)| idx)
    }

    /// Searches the whole tree from the root.
    pub fn find(&self, target: &str) -> Option<Index> {
        self.root.and_then(|root| self.find_by_name(root, target))
    }

    /// Ancestors of `node`, nearest first and ending with the root.
    ///
    /// The node itself is not part of its chain; the root has an empty chain.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestor_chain(&self, node: Index) -> Vec<Index> {
        let mut ancestors = Vec::new();
        let mut current = self.get_node(node).and_then(|n| n.parent);
        while let Some(idx) = current {
            ancestors.push(idx);
            current = self.get_node(idx).and_then(|n| n.parent);
        }
        ancestors
    }

    /// Deepest node shared by the lineages of `name1` and `name2`.
    ///
    /// A lineage is the node followed by its ancestor chain, so when one name
    /// is an ancestor of the other, that ancestor is the result.
    #[instrument(level = "debug", skip(self))]
    pub fn most_recent_common_ancestor(&self, name1: &str, name2: &str) -> TreeResult<Index> {
        let node1 = self
            .find(name1)
            .ok_or_else(|| DomainError::NameNotFound(name1.to_string()))?;
        let node2 = self
            .find(name2)
            .ok_or_else(|| DomainError::NameNotFound(name2.to_string()))?;

        let lineage1 = self.lineage(node1);
        let lineage2 = self.lineage(node2);
        debug!(
            "lineage lengths: {} / {}",
            lineage1.len(),
            lineage2.len()
        );

        lineage1
            .into_iter()
            .find(|candidate| lineage2.contains(candidate))
            .ok_or_else(|| DomainError::NoCommonAncestor {
                first: name1.to_string(),
                second: name2.to_string(),
            })
    }

    fn lineage(&self, node: Index) -> Vec<Index> {
        let mut lineage = vec![node];
        lineage.extend(self.ancestor_chain(node));
        lineage
    }

    /// Number of generations, 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.iter().map(|(_, depth, _)| depth + 1).max().unwrap_or(0)
    }

    /// Distance from the root, 0 for the root itself.
    pub fn depth_of(&self, node: Index) -> usize {
        self.ancestor_chain(node).len()
    }

    /// Indented pre-order dump, one name per line.
    #[instrument(level = "debug", skip(self))]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (_, depth, node) in self.iter() {
            out.push_str(&INDENT.repeat(depth));
            out.push_str(&node.data.name);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for FamilyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Family Tree:\n\n{}", self.render())
    }
}

/// Explicit-stack pre-order traversal yielding `(index, depth, node)`.
pub struct TreeIterator<'a> {
    tree: &'a FamilyTree,
    stack: Vec<(Index, usize)>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a FamilyTree, start: Option<Index>) -> Self {
        let stack = start.map(|idx| vec![(idx, 0)]).unwrap_or_default();
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((current_idx, depth, node));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      A
    //     / \
    //    B   C
    //   / \
    //  D   E
    fn sample() -> (FamilyTree, [Index; 5]) {
        let mut tree = FamilyTree::new();
        let a = tree.add_root("A");
        let b = tree.add_child(a, "B");
        let c = tree.add_child(a, "C");
        let d = tree.add_child(b, "D");
        let e = tree.add_child(b, "E");
        (tree, [a, b, c, d, e])
    }

    #[test]
    fn test_add_child_sets_parent_and_order() {
        let (tree, [a, b, c, ..]) = sample();
        let root = tree.get_node(a).unwrap();
        assert_eq!(root.children, vec![b, c]);
        assert_eq!(tree.get_node(b).unwrap().parent, Some(a));
        assert!(root.parent.is_none());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_find_by_name_checks_start_first() {
        let (tree, [_, b, ..]) = sample();
        assert_eq!(tree.find_by_name(b, "B"), Some(b));
        assert_eq!(tree.find_by_name(b, "C"), None);
    }

    #[test]
    fn test_find_on_empty_tree() {
        let tree = FamilyTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.find("A"), None);
        assert_eq!(tree.render(), "");
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_ancestor_chain_of_root_is_empty() {
        let (tree, [a, _, _, d, _]) = sample();
        assert!(tree.ancestor_chain(a).is_empty());
        assert_eq!(tree.depth_of(d), 2);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first_preorder_match() {
        let (mut tree, [_, b, c, ..]) = sample();
        let dup_under_b = tree.add_child(b, "X");
        tree.add_child(c, "X");
        assert_eq!(tree.find("X"), Some(dup_under_b));
    }

    #[test]
    fn test_mrca_of_node_with_itself() {
        let (tree, [_, _, _, d, _]) = sample();
        assert_eq!(tree.most_recent_common_ancestor("D", "D").unwrap(), d);
    }

    #[test]
    fn test_mrca_reports_first_missing_name() {
        let (tree, _) = sample();
        let err = tree.most_recent_common_ancestor("Ghost", "Spook").unwrap_err();
        assert!(matches!(err, DomainError::NameNotFound(ref n) if n == "Ghost"));
    }

    #[test]
    fn test_depth_counts_generations() {
        let (tree, _) = sample();
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already has a root")]
    fn test_add_root_twice_panics() {
        let (mut tree, _) = sample();
        tree.add_root("Z");
    }

    #[test]
    fn test_display_has_header() {
        let (tree, _) = sample();
        assert_eq!(
            tree.to_string(),
            "Family Tree:\n\nA\n  B\n    D\n    E\n  C\n"
        );
    }
}
