// ============================================================================
// Bizup Core - Employment Contract Entity
// File: crates/bizup-core/src/domain/contract.rs
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Shortest base64 payload accepted as a drawn signature.
pub const MIN_SIGNATURE_LENGTH: u64 = 100;

/// Employment contract, owned by an employee (deleted with them)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: i64,
    pub employee_id: i64,
    pub employer_name: String,
    pub working_conditions: Option<String>,
    pub wage: Option<String>,
    pub contract_date: NaiveDate,
    pub employee_name: String,
    pub employee_address: String,
    pub employee_phone: String,
    /// Base64-encoded signature image.
    pub employee_signature: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewContract {
    pub employee_id: i64,

    #[validate(length(min = 1, max = 25, message = "Employer name must be between 1 and 25 characters"))]
    pub employer_name: String,

    pub working_conditions: Option<String>,
    pub wage: Option<String>,
    pub contract_date: NaiveDate,

    #[validate(length(min = 1, max = 50, message = "Employee name must be between 1 and 50 characters"))]
    pub employee_name: String,

    #[validate(length(min = 1, max = 50, message = "Employee address must be between 1 and 50 characters"))]
    pub employee_address: String,

    #[validate(length(min = 1, max = 30, message = "Employee phone must be between 1 and 30 characters"))]
    pub employee_phone: String,

    pub employee_signature: String,
}

impl NewContract {
    pub fn has_valid_signature(&self) -> bool {
        self.employee_signature.len() as u64 >= MIN_SIGNATURE_LENGTH
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContractPatch {
    #[validate(length(min = 1, max = 25, message = "Employer name must be between 1 and 25 characters"))]
    pub employer_name: Option<String>,
    pub working_conditions: Option<String>,
    pub wage: Option<String>,
    pub contract_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 50, message = "Employee name must be between 1 and 50 characters"))]
    pub employee_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Employee address must be between 1 and 50 characters"))]
    pub employee_address: Option<String>,

    #[validate(length(min = 1, max = 30, message = "Employee phone must be between 1 and 30 characters"))]
    pub employee_phone: Option<String>,

    #[validate(length(min = 100, message = "Signature is not a valid image"))]
    pub employee_signature: Option<String>,
}

impl ContractPatch {
    pub fn apply(self, contract: &mut Contract) {
        if let Some(v) = self.employer_name {
            contract.employer_name = v;
        }
        if let Some(v) = self.working_conditions {
            contract.working_conditions = Some(v);
        }
        if let Some(v) = self.wage {
            contract.wage = Some(v);
        }
        if let Some(v) = self.contract_date {
            contract.contract_date = v;
        }
        if let Some(v) = self.employee_name {
            contract.employee_name = v;
        }
        if let Some(v) = self.employee_address {
            contract.employee_address = v;
        }
        if let Some(v) = self.employee_phone {
            contract.employee_phone = v;
        }
        if let Some(v) = self.employee_signature {
            contract.employee_signature = v;
        }
        contract.updated_at = Utc::now();
    }
}
