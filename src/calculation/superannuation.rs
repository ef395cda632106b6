//! Superannuation contribution calculation.
//!
//! Super is a whole-number percentage of monthly gross income, rounded
//! to whole dollars with 50 cents rounding up.

use rust_decimal::Decimal;

use super::rounding::round_to_whole_dollars;
use crate::models::AuditStep;

/// The result of a superannuation calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct SuperContributionResult {
    /// The contribution before rounding.
    pub unrounded: Decimal,
    /// The contribution in whole dollars.
    pub super_contribution: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the superannuation contribution on gross income.
///
/// # Arguments
///
/// * `gross_income` - Monthly gross income in whole dollars
/// * `super_rate_percent` - The super rate as a whole percentage
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payslip_generator::calculation::calculate_super_contribution;
/// use rust_decimal::Decimal;
///
/// // 5004 x 9% = 450.36
/// let result = calculate_super_contribution(Decimal::from(5004), 9, 4);
/// assert_eq!(result.super_contribution, Decimal::from(450));
/// ```
pub fn calculate_super_contribution(
    gross_income: Decimal,
    super_rate_percent: u8,
    step_number: u32,
) -> SuperContributionResult {
    let unrounded = gross_income * Decimal::from(super_rate_percent) / Decimal::ONE_HUNDRED;
    let super_contribution = round_to_whole_dollars(unrounded);

    let audit_step = AuditStep {
        step_number,
        rule_id: "super_contribution".to_string(),
        rule_name: "Superannuation".to_string(),
        input: serde_json::json!({
            "gross_income": gross_income.to_string(),
            "super_rate_percent": super_rate_percent
        }),
        output: serde_json::json!({
            "unrounded": unrounded.normalize().to_string(),
            "super_contribution": super_contribution.to_string()
        }),
        reasoning: format!(
            "{} x {}% = {}, rounded to {}",
            gross_income,
            super_rate_percent,
            unrounded.normalize(),
            super_contribution
        ),
    };

    SuperContributionResult {
        unrounded,
        super_contribution,
        audit_step,
    }
}
