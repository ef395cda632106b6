//! Core data models for the payslip generator.
//!
//! This module contains the validated employee input, the payslip figures
//! and the audited calculation result.

mod calculation_result;
mod employee;
mod payslip;

pub use calculation_result::{AuditStep, AuditTrace, CalculationResult};
pub use employee::EmployeeInput;
pub use payslip::Payslip;
