//! Net income calculation.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// The result of a net income calculation, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct NetIncomeResult {
    /// Gross income less income tax.
    pub net_income: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Subtracts the rounded income tax from the truncated gross income.
///
/// Both inputs are already whole dollars. Subtracting the rounded figures
/// can land a dollar away from subtracting the unrounded ones, and the
/// rounded figures are the ones printed on the payslip.
///
/// # Examples
///
/// ```
/// use payslip_generator::calculation::calculate_net_income;
/// use rust_decimal::Decimal;
///
/// let result = calculate_net_income(Decimal::from(5004), Decimal::from(922), 3);
/// assert_eq!(result.net_income, Decimal::from(4082));
/// ```
pub fn calculate_net_income(
    gross_income: Decimal,
    income_tax: Decimal,
    step_number: u32,
) -> NetIncomeResult {
    let net_income = gross_income - income_tax;

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_income".to_string(),
        rule_name: "Net Income".to_string(),
        input: serde_json::json!({
            "gross_income": gross_income.to_string(),
            "income_tax": income_tax.to_string()
        }),
        output: serde_json::json!({
            "net_income": net_income.to_string()
        }),
        reasoning: format!("{} - {} = {}", gross_income, income_tax, net_income),
    };

    NetIncomeResult {
        net_income,
        audit_step,
    }
}
