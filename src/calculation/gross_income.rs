//! Gross income calculation.
//!
//! Monthly gross income is the annual salary divided by twelve with the
//! fractional dollars dropped. It is truncated, not rounded.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Number of pay periods in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// The result of a gross income calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct GrossIncomeResult {
    /// Monthly gross income in whole dollars.
    pub gross_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates monthly gross income from an annual salary.
///
/// # Arguments
///
/// * `annual_salary` - The annual salary in whole dollars
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payslip_generator::calculation::calculate_gross_income;
/// use rust_decimal::Decimal;
///
/// // 60050 / 12 = 5004.1666..., the fraction is dropped
/// let result = calculate_gross_income(60050, 1);
/// assert_eq!(result.gross_income, Decimal::from(5004));
/// ```
pub fn calculate_gross_income(annual_salary: u32, step_number: u32) -> GrossIncomeResult {
    let whole_dollars = annual_salary / MONTHS_PER_YEAR;
    let remainder = annual_salary % MONTHS_PER_YEAR;
    let gross_income = Decimal::from(whole_dollars);

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_income".to_string(),
        rule_name: "Gross Income".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary,
            "months": MONTHS_PER_YEAR
        }),
        output: serde_json::json!({
            "gross_income": gross_income.to_string(),
            "truncated": remainder != 0
        }),
        reasoning: if remainder == 0 {
            format!("{} / {} = {}", annual_salary, MONTHS_PER_YEAR, gross_income)
        } else {
            format!(
                "{} / {} = {} remainder {}, fractional dollars dropped",
                annual_salary, MONTHS_PER_YEAR, gross_income, remainder
            )
        },
    };

    GrossIncomeResult {
        gross_income,
        audit_step,
    }
}
