//! Hierarchy builder: wires flat manager references into an arena tree.

use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, warn};

use crate::domain::arena::{Hierarchy, HierarchyNode};
use crate::domain::entities::EmployeeRegistry;
use crate::domain::error::{DomainError, DomainResult};

/// Constructs a [`Hierarchy`] from a registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct HierarchyBuilder;

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the hierarchy in two passes: create one node per employee, then
    /// link every employee to its manager.
    ///
    /// A manager id that matches no employee leaves the node parentless; it is
    /// kept in the arena but unreachable from the root.
    #[instrument(level = "debug", skip(self, registry), fields(employees = registry.len()))]
    pub fn build<'r>(&self, registry: &'r EmployeeRegistry) -> DomainResult<Hierarchy<'r>> {
        let mut arena = Arena::with_capacity(registry.len());
        let mut by_id: HashMap<&'r str, Index> = HashMap::with_capacity(registry.len());

        for employee in registry {
            let idx = arena.insert(HierarchyNode {
                employee,
                parent: None,
                children: Vec::new(),
            });
            by_id.insert(employee.id.as_str(), idx);
        }

        let mut root = None;
        for employee in registry {
            let idx = by_id[employee.id.as_str()];
            match employee.manager_id.as_deref() {
                None => {
                    if root.is_some() {
                        warn!(id = %employee.id, "additional employee without manager ignored as root");
                    } else {
                        root = Some(idx);
                    }
                }
                Some(manager_id) => match by_id.get(manager_id) {
                    Some(&manager_idx) => {
                        arena[idx].parent = Some(manager_idx);
                        arena[manager_idx].children.push(idx);
                    }
                    None => {
                        debug!(id = %employee.id, manager_id, "dangling manager reference, node left unreachable");
                    }
                },
            }
        }

        let root = root.ok_or(DomainError::NoRoot)?;
        debug!(nodes = arena.len(), "hierarchy built");
        Ok(Hierarchy::from_parts(arena, by_id, root))
    }
}
