//! Record parser: header + comma separated rows into a validated registry.
//!
//! Rows are split on `,` with no quoting or escaping support.

use tracing::{debug, instrument};

use crate::domain::entities::{Employee, EmployeeRegistry};
use crate::domain::error::{DomainError, DomainResult};

/// Maximum number of data rows accepted after the header.
pub const MAX_ROWS: usize = 1000;

pub const COL_ID: &str = "Id";
pub const COL_FIRST_NAME: &str = "firstName";
pub const COL_LAST_NAME: &str = "lastName";
pub const COL_SALARY: &str = "salary";
pub const COL_MANAGER_ID: &str = "managerId";

pub const REQUIRED_COLUMNS: [&str; 5] = [
    COL_ID,
    COL_FIRST_NAME,
    COL_LAST_NAME,
    COL_SALARY,
    COL_MANAGER_ID,
];

const DELIMITER: char = ',';

/// Positions of the required columns, resolved by header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub id: usize,
    pub first_name: usize,
    pub last_name: usize,
    pub salary: usize,
    pub manager_id: usize,
}

impl ColumnLayout {
    /// Resolve column positions from the header line.
    ///
    /// Extra and reordered columns are fine. A repeated name resolves to its
    /// last position.
    pub fn from_header(header: &str) -> DomainResult<Self> {
        let header = header.strip_prefix('\u{feff}').unwrap_or(header);
        let names: Vec<&str> = header.split(DELIMITER).collect();
        let position = |column: &str| names.iter().rposition(|name| *name == column);

        match (
            position(COL_ID),
            position(COL_FIRST_NAME),
            position(COL_LAST_NAME),
            position(COL_SALARY),
            position(COL_MANAGER_ID),
        ) {
            (Some(id), Some(first_name), Some(last_name), Some(salary), Some(manager_id)) => {
                Ok(Self {
                    id,
                    first_name,
                    last_name,
                    salary,
                    manager_id,
                })
            }
            _ => Err(DomainError::Schema {
                missing: REQUIRED_COLUMNS
                    .into_iter()
                    .filter(|&column| position(column).is_none())
                    .map(String::from)
                    .collect(),
            }),
        }
    }
}

/// Reads field `index` of a split row; missing trailing fields read as "".
fn field<'a>(fields: &[&'a str], index: usize) -> &'a str {
    fields.get(index).copied().unwrap_or("")
}

/// Parse the header and data rows into an [`EmployeeRegistry`].
///
/// Fails on the first offending row; no partial registry is returned.
#[instrument(level = "debug", skip(rows))]
pub fn parse_records<I, S>(header: &str, rows: I) -> DomainResult<EmployeeRegistry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let layout = ColumnLayout::from_header(header)?;
    debug!(?layout, "resolved column layout");

    let mut registry = EmployeeRegistry::new();
    let mut root_count = 0usize;

    for (offset, row) in rows.into_iter().enumerate() {
        let line = offset + 1;
        if line > MAX_ROWS {
            return Err(DomainError::InputTooLarge { limit: MAX_ROWS });
        }

        let fields: Vec<&str> = row.as_ref().split(DELIMITER).collect();
        let id = field(&fields, layout.id);
        let first_name = field(&fields, layout.first_name);
        let last_name = field(&fields, layout.last_name);
        let salary = field(&fields, layout.salary);
        let manager_id = field(&fields, layout.manager_id);

        if id.is_empty() || first_name.is_empty() || last_name.is_empty() || salary.is_empty() {
            return Err(DomainError::MissingField { line });
        }

        if manager_id.is_empty() {
            root_count += 1;
            if root_count > 1 {
                return Err(DomainError::MultipleRoots { line });
            }
        }

        let salary = salary
            .parse::<u32>()
            .map_err(|source| DomainError::SalaryFormat {
                line,
                value: salary.to_string(),
                source,
            })?;

        let employee = Employee::new(
            id,
            first_name,
            last_name,
            salary,
            (!manager_id.is_empty()).then(|| manager_id.to_string()),
        );
        if let Some(previous) = registry.insert(employee) {
            debug!(id = %previous.id, line, "duplicate employee id, keeping the later row");
        }
    }

    debug!(employees = registry.len(), "parsed records");
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_reordered_header_with_extras_when_resolving_then_maps_by_name() {
        let layout =
            ColumnLayout::from_header("managerId,dept,salary,lastName,firstName,Id").unwrap();

        assert_eq!(
            layout,
            ColumnLayout {
                id: 5,
                first_name: 4,
                last_name: 3,
                salary: 2,
                manager_id: 0,
            }
        );
    }

    #[test]
    fn given_header_with_bom_when_resolving_then_ignores_it() {
        let layout =
            ColumnLayout::from_header("\u{feff}Id,firstName,lastName,salary,managerId").unwrap();
        assert_eq!(layout.id, 0);
    }

    #[test]
    fn given_short_row_when_reading_field_then_returns_empty() {
        let fields = vec!["1", "Joe"];
        assert_eq!(field(&fields, 4), "");
    }
}
