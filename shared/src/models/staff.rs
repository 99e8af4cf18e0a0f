//! Staff Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task held by staff nobody has assigned work to yet
pub const DEFAULT_TASK: &str = "No task assigned";

/// Staff role
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    Cook,
    Waiter,
    Sweeper,
    /// Any role without a standing task
    Other(String),
}

impl StaffRole {
    /// Standing task for this role, `None` for unrecognized roles
    pub fn standing_task(&self) -> Option<&'static str> {
        match self {
            Self::Cook => Some("Prepare food orders"),
            Self::Waiter => Some("Serve tables to customers"),
            Self::Sweeper => Some("Clean tables and kitchen"),
            Self::Other(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.standing_task().is_some()
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cook => f.write_str("Cook"),
            Self::Waiter => f.write_str("Waiter"),
            Self::Sweeper => f.write_str("Sweeper"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

/// Staff member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Staff {
    pub name: String,
    pub role: StaffRole,
    task: String,
}

impl Staff {
    pub fn new(name: impl Into<String>, role: StaffRole) -> Self {
        Self {
            name: name.into(),
            role,
            task: DEFAULT_TASK.to_string(),
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn assign_task(&mut self, task: impl Into<String>) {
        self.task = task.into();
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} | Role: {} | Task: {}",
            self.name, self.role, self.task
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_staff_has_default_task() {
        let staff = Staff::new("Dana", StaffRole::Other("Cashier".into()));
        assert_eq!(staff.task(), DEFAULT_TASK);
        assert!(!staff.role.is_recognized());
        assert_eq!(
            staff.to_string(),
            "Name: Dana | Role: Cashier | Task: No task assigned"
        );
    }
}
