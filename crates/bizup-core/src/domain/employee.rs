// ============================================================================
// Bizup Core - Employee Entity
// File: crates/bizup-core/src/domain/employee.rs
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employment status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(EmployeeStatus::Active),
            "inactive" => Some(EmployeeStatus::Inactive),
            _ => None,
        }
    }
}

/// Employee entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub phone: String,
    pub status: EmployeeStatus,
    pub join_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Role must be between 1 and 50 characters"))]
    pub role: String,

    #[validate(length(min = 1, max = 30, message = "Phone must be between 1 and 30 characters"))]
    pub phone: String,

    /// Defaults to the hire day when omitted.
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmployeePatch {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Role must be between 1 and 50 characters"))]
    pub role: Option<String>,

    #[validate(length(min = 1, max = 30, message = "Phone must be between 1 and 30 characters"))]
    pub phone: Option<String>,

    pub status: Option<EmployeeStatus>,
}

impl EmployeePatch {
    pub fn apply(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(role) = self.role {
            employee.role = role;
        }
        if let Some(phone) = self.phone {
            employee.phone = phone;
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
        employee.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_strings() {
        assert_eq!(EmployeeStatus::parse("inactive"), Some(EmployeeStatus::Inactive));
        assert_eq!(EmployeeStatus::parse("fired"), None);
        assert_eq!(EmployeeStatus::default().as_str(), "active");
    }

    #[test]
    fn test_patch_deactivates() {
        let now = Utc::now();
        let mut employee = Employee {
            id: 1,
            name: "Kim".to_string(),
            role: "Barista".to_string(),
            phone: "010-0000-0000".to_string(),
            status: EmployeeStatus::Active,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            created_at: now,
            updated_at: now,
        };
        EmployeePatch {
            status: Some(EmployeeStatus::Inactive),
            ..EmployeePatch::default()
        }
        .apply(&mut employee);

        assert_eq!(employee.status, EmployeeStatus::Inactive);
        assert_eq!(employee.role, "Barista");
    }
}
