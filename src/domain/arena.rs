//! Arena-based management hierarchy.

use std::collections::{HashMap, VecDeque};

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::Employee;

/// One employee in the hierarchy.
#[derive(Debug)]
pub struct HierarchyNode<'r> {
    /// Employee borrowed from the registry
    pub employee: &'r Employee,
    /// Index of the manager's node, None for the root and for dangling managers
    pub parent: Option<Index>,
    /// Indices of direct reports, in registry order
    pub children: Vec<Index>,
}

/// Management hierarchy built from an [`EmployeeRegistry`](crate::domain::EmployeeRegistry).
///
/// Holds one node per registered employee. Nodes whose manager id does not
/// resolve stay parentless and are not reachable from [`Hierarchy::root`].
/// The hierarchy is a read-only view: it is built once and dropped after
/// analysis.
#[derive(Debug)]
pub struct Hierarchy<'r> {
    arena: Arena<HierarchyNode<'r>>,
    by_id: HashMap<&'r str, Index>,
    root: Index,
}

impl<'r> Hierarchy<'r> {
    pub(crate) fn from_parts(
        arena: Arena<HierarchyNode<'r>>,
        by_id: HashMap<&'r str, Index>,
        root: Index,
    ) -> Self {
        Self { arena, by_id, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn root_node(&self) -> &HierarchyNode<'r> {
        &self.arena[self.root]
    }

    /// Number of nodes, reachable or not.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn get(&self, idx: Index) -> Option<&HierarchyNode<'r>> {
        self.arena.get(idx)
    }

    /// Look up a node by employee id.
    pub fn find(&self, id: &str) -> Option<Index> {
        self.by_id.get(id).copied()
    }

    pub fn parent(&self, idx: Index) -> Option<Index> {
        self.get(idx).and_then(|node| node.parent)
    }

    pub fn children(&self, idx: Index) -> &[Index] {
        self.get(idx).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Walks parent links upwards, nearest manager first.
    ///
    /// Stops after `node_count` steps, so manager cycles among unreachable
    /// nodes terminate.
    pub fn ancestors(&self, idx: Index) -> Ancestors<'_, 'r> {
        Ancestors {
            hierarchy: self,
            current: self.parent(idx),
            remaining: self.node_count(),
        }
    }

    /// Number of managers between this node and the top of its chain.
    pub fn managers_above(&self, idx: Index) -> usize {
        self.ancestors(idx).count()
    }

    /// True when the root can be reached by following parent links.
    pub fn is_reachable(&self, idx: Index) -> bool {
        idx == self.root || self.ancestors(idx).any(|ancestor| ancestor == self.root)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_breadth_first(&self) -> BreadthFirst<'_, 'r> {
        BreadthFirst::new(self)
    }

    /// Number of nodes reachable from the root, root included.
    #[instrument(level = "debug", skip(self))]
    pub fn reachable_count(&self) -> usize {
        self.iter_breadth_first().count()
    }

    /// Depth of the reachable tree, counting the root level as 1.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.iter_breadth_first()
            .map(|(_, _, managers_above)| managers_above + 1)
            .max()
            .unwrap_or(0)
    }
}

pub struct Ancestors<'h, 'r> {
    hierarchy: &'h Hierarchy<'r>,
    current: Option<Index>,
    remaining: usize,
}

impl Iterator for Ancestors<'_, '_> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.current?;
        self.remaining -= 1;
        self.current = self.hierarchy.parent(current);
        Some(current)
    }
}

/// Level-order traversal from the root.
///
/// Yields `(index, node, managers_above)`; the root has 0 managers above.
pub struct BreadthFirst<'h, 'r> {
    hierarchy: &'h Hierarchy<'r>,
    queue: VecDeque<(Index, usize)>,
}

impl<'h, 'r> BreadthFirst<'h, 'r> {
    fn new(hierarchy: &'h Hierarchy<'r>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((hierarchy.root(), 0));
        Self { hierarchy, queue }
    }
}

impl<'h, 'r> Iterator for BreadthFirst<'h, 'r> {
    type Item = (Index, &'h HierarchyNode<'r>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, managers_above)) = self.queue.pop_front() {
            if let Some(node) = self.hierarchy.get(idx) {
                for &child in &node.children {
                    self.queue.push_back((child, managers_above + 1));
                }
                return Some((idx, node, managers_above));
            }
        }
        None
    }
}
