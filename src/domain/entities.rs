//! Domain entities: core data structures

use std::collections::HashMap;
use std::fmt;

/// A single row of the organisation: one employee and a reference to its manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub salary: u32,
    /// Id of the direct manager, None for the CEO
    pub manager_id: Option<String>,
}

impl Employee {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: u32,
        manager_id: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id,
        }
    }

    /// True for the employee at the top of the hierarchy.
    pub fn is_root(&self) -> bool {
        self.manager_id.is_none()
    }

    /// "<first name> <last name>", as used in report lines.
    pub fn full_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Employees keyed by id.
///
/// Iterates in first-seen order of ids. Inserting an id that is already
/// present replaces the employee in place (last write wins). Only the record
/// parser inserts; everything downstream sees a read-only registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    positions: HashMap<String, usize>,
}

impl EmployeeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the replaced employee when the id was already registered.
    pub(crate) fn insert(&mut self, employee: Employee) -> Option<Employee> {
        match self.positions.get(&employee.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.employees[pos], employee)),
            None => {
                self.positions
                    .insert(employee.id.clone(), self.employees.len());
                self.employees.push(employee);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.positions.get(id).map(|&pos| &self.employees[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.employees.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl<'a> IntoIterator for &'a EmployeeRegistry {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
