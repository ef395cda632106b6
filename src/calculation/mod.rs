//! Calculation logic for the payslip generator.
//!
//! This module contains the payroll rules: monthly gross income, the
//! progressive income tax table, whole-dollar rounding, net income and
//! superannuation, plus [`calculate_payslip`] which runs them together.

mod gross_income;
mod income_tax;
mod net_income;
mod payslip;
mod rounding;
mod superannuation;

pub use gross_income::{GrossIncomeResult, MONTHS_PER_YEAR, calculate_gross_income};
pub use income_tax::{
    IncomeTaxResult, TaxBracket, annual_income_tax, calculate_income_tax, find_tax_bracket,
    income_tax_brackets,
};
pub use net_income::{NetIncomeResult, calculate_net_income};
pub use payslip::{ENGINE_VERSION, calculate_payslip};
pub use rounding::round_to_whole_dollars;
pub use superannuation::{SuperContributionResult, calculate_super_contribution};
