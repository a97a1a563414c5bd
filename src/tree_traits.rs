//! Conversion of the management hierarchy into a printable `termtree`.

use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Employee, Hierarchy};

pub trait HierarchyConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

fn label(employee: &Employee) -> String {
    format!("{} ({})", employee, employee.id)
}

impl HierarchyConvert for Hierarchy<'_> {
    /// Only the part reachable from the root is rendered.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build_tree(hierarchy: &Hierarchy<'_>, node_idx: Index, parent_tree: &mut Tree<String>) {
            for &child_idx in hierarchy.children(node_idx) {
                if let Some(child) = hierarchy.get(child_idx) {
                    let mut child_tree = Tree::new(label(child.employee));
                    build_tree(hierarchy, child_idx, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        let mut tree = Tree::new(label(self.root_node().employee));
        build_tree(self, self.root(), &mut tree);
        tree
    }
}
