//! Request types for the payslip API.
//!
//! This module defines the JSON request body for the `/payslip` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::PayslipResult;
use crate::models::EmployeeInput;
use crate::validation::{validate_annual_salary, validate_super_rate};

/// Request body for the `/payslip` endpoint.
///
/// Salary and rate arrive as plain JSON integers and are range-checked
/// by [`PayslipRequest::into_employee`] with the same rules the console uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual salary in whole dollars.
    pub annual_salary: i64,
    /// Super rate as a whole percentage.
    pub super_rate: i64,
    /// Label for the first day of the pay period.
    pub period_start: String,
    /// Label for the last day of the pay period.
    pub period_end: String,
}

impl PayslipRequest {
    /// Validates the numeric fields and builds an [`EmployeeInput`].
    pub fn into_employee(self, max_super_rate: u8) -> PayslipResult<EmployeeInput> {
        let annual_salary = validate_annual_salary(self.annual_salary)?;
        let super_rate_percent = validate_super_rate(self.super_rate, max_super_rate)?;

        Ok(EmployeeInput {
            first_name: self.first_name,
            last_name: self.last_name,
            annual_salary,
            super_rate_percent,
            period_start: self.period_start,
            period_end: self.period_end,
        })
    }
}
