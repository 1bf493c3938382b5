//! Department catalog.
//!
//! Departments are club sub-groups, each backed by a Discord role. The catalog is
//! built once from configuration and never changes while the bot runs.

use serenity::all::RoleId;

/// Most departments a member can hold at once.
pub const MAX_DEPARTMENTS: usize = 3;

/// A single selectable department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// Short code such as `cxsd`, also used to name its environment variable.
    pub code: String,
    /// Discord role granted to members of this department.
    pub role_id: RoleId,
    /// Label shown in the select menu.
    pub label: String,
    /// Unicode emoji shown next to the label.
    pub emoji: String,
}

/// Ordered list of departments offered by `/departments`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentCatalog {
    departments: Vec<Department>,
}

impl DepartmentCatalog {
    pub fn new(departments: Vec<Department>) -> Self {
        Self { departments }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Department> {
        self.departments.iter()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Departments whose role appears in `roles`, in catalog order.
    pub fn held_by(&self, roles: &[RoleId]) -> Vec<&Department> {
        self.departments
            .iter()
            .filter(|d| roles.contains(&d.role_id))
            .collect()
    }

    /// Departments named by select menu values (role IDs as strings), in catalog
    /// order. Values that match no department are dropped.
    pub fn resolve_values(&self, values: &[String]) -> Vec<&Department> {
        self.departments
            .iter()
            .filter(|d| values.iter().any(|v| *v == d.role_id.to_string()))
            .collect()
    }

    /// Upper bound for the select menu: never more than the catalog holds.
    pub fn max_selectable(&self) -> usize {
        MAX_DEPARTMENTS.min(self.departments.len())
    }
}
