use std::collections::HashMap;

use generational_arena::Index;
use termtree::Tree;

use crate::domain::arena::FamilyTree;

/// Deepest tree `to_tree_string` output is printed for.
///
/// termtree formats and drops its nodes recursively, so deeper trees fall
/// back to the indented dump.
pub const MAX_TREE_STYLE_DEPTH: usize = 1_000;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeDisplay for FamilyTree {
    fn to_tree_string(&self) -> Tree<String> {
        let Some(root_idx) = self.root() else {
            return Tree::new("Empty tree".to_string());
        };

        // Reverse pre-order visits every child before its parent
        let order: Vec<Index> = self.iter().map(|(idx, _, _)| idx).collect();
        let mut built: HashMap<Index, Tree<String>> = HashMap::with_capacity(order.len());
        for &idx in order.iter().rev() {
            let Some(node) = self.get_node(idx) else {
                continue;
            };
            let leaves: Vec<Tree<String>> = node
                .children
                .iter()
                .filter_map(|child| built.remove(child))
                .collect();
            built.insert(idx, Tree::new(node.data.name.clone()).with_leaves(leaves));
        }

        built
            .remove(&root_idx)
            .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
    }
}
