//! Employee input model.
//!
//! This module defines [`EmployeeInput`], the validated record the
//! calculation core consumes.

use serde::{Deserialize, Serialize};

/// Validated details for a single employee and pay period.
///
/// Salary and super rate have already been range-checked by the
/// validation layer when this struct is built. The period fields are
/// opaque labels and are never parsed as dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual salary in whole dollars, always greater than zero.
    pub annual_salary: u32,
    /// Superannuation rate as a whole percentage.
    pub super_rate_percent: u8,
    /// Label for the first day of the pay period (e.g. "01 March").
    pub period_start: String,
    /// Label for the last day of the pay period (e.g. "31 March").
    pub period_end: String,
}

impl EmployeeInput {
    /// Returns the first and last name joined by a single space.
    ///
    /// # Examples
    ///
    /// ```
    /// use payslip_generator::models::EmployeeInput;
    ///
    /// let employee = EmployeeInput {
    ///     first_name: "John".to_string(),
    ///     last_name: "Doe".to_string(),
    ///     annual_salary: 60050,
    ///     super_rate_percent: 9,
    ///     period_start: "01 March".to_string(),
    ///     period_end: "31 March".to_string(),
    /// };
    /// assert_eq!(employee.full_name(), "John Doe");
    /// assert_eq!(employee.period_label(), "01 March – 31 March");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the pay period as "start – end", echoing both labels as given.
    pub fn period_label(&self) -> String {
        format!("{} – {}", self.period_start, self.period_end)
    }
}
