//! Payslip calculation.
//!
//! Runs every rule in order for one employee and gathers the figures and
//! audit steps into a [`CalculationResult`].

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::gross_income::calculate_gross_income;
use super::income_tax::calculate_income_tax;
use super::net_income::calculate_net_income;
use super::superannuation::calculate_super_contribution;
use crate::models::{AuditTrace, CalculationResult, EmployeeInput, Payslip};

/// The version stamped on every calculation result.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Calculates a payslip for a validated employee.
///
/// All four figures are derived from the same salary and super rate
/// before anything is returned. The input must already have passed
/// validation; this function has no error path.
///
/// # Examples
///
/// ```
/// use payslip_generator::calculation::calculate_payslip;
/// use payslip_generator::models::EmployeeInput;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeInput {
///     first_name: "John".to_string(),
///     last_name: "Doe".to_string(),
///     annual_salary: 60050,
///     super_rate_percent: 9,
///     period_start: "01 March".to_string(),
///     period_end: "31 March".to_string(),
/// };
///
/// let result = calculate_payslip(&employee);
/// assert_eq!(result.payslip.gross_income, Decimal::from(5004));
/// assert_eq!(result.payslip.income_tax, Decimal::from(922));
/// assert_eq!(result.payslip.net_income, Decimal::from(4082));
/// assert_eq!(result.payslip.super_contribution, Decimal::from(450));
/// ```
pub fn calculate_payslip(employee: &EmployeeInput) -> CalculationResult {
    let start_time = Instant::now();

    let gross = calculate_gross_income(employee.annual_salary, 1);
    debug!(gross_income = %gross.gross_income, "Calculated gross income");

    let tax = calculate_income_tax(employee.annual_salary, 2);
    debug!(
        annual_tax = %tax.annual_tax,
        income_tax = %tax.income_tax,
        "Calculated income tax"
    );

    let net = calculate_net_income(gross.gross_income, tax.income_tax, 3);
    debug!(net_income = %net.net_income, "Calculated net income");

    let superannuation =
        calculate_super_contribution(gross.gross_income, employee.super_rate_percent, 4);
    debug!(
        super_contribution = %superannuation.super_contribution,
        "Calculated superannuation"
    );

    let payslip = Payslip {
        full_name: employee.full_name(),
        period_label: employee.period_label(),
        gross_income: gross.gross_income,
        income_tax: tax.income_tax,
        net_income: net.net_income,
        super_contribution: superannuation.super_contribution,
    };

    CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        payslip,
        audit_trace: AuditTrace {
            steps: vec![
                gross.audit_step,
                tax.audit_step,
                net.audit_step,
                superannuation.audit_step,
            ],
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn create_employee(annual_salary: u32, super_rate_percent: u8) -> EmployeeInput {
        EmployeeInput {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            annual_salary,
            super_rate_percent,
            period_start: "01 March".to_string(),
            period_end: "31 March".to_string(),
        }
    }

    #[test]
    fn test_worked_example_60050_at_9_percent() {
        let result = calculate_payslip(&create_employee(60_050, 9));
        let payslip = &result.payslip;

        assert_eq!(payslip.full_name, "John Doe");
        assert_eq!(payslip.period_label, "01 March – 31 March");
        assert_eq!(payslip.gross_income, Decimal::from(5004));
        assert_eq!(payslip.income_tax, Decimal::from(922));
        assert_eq!(payslip.net_income, Decimal::from(4082));
        assert_eq!(payslip.super_contribution, Decimal::from(450));
    }

    #[test]
    fn test_tax_free_threshold_at_0_percent() {
        let result = calculate_payslip(&create_employee(18_200, 0));
        let payslip = &result.payslip;

        assert_eq!(payslip.gross_income, Decimal::from(1516));
        assert_eq!(payslip.income_tax, Decimal::ZERO);
        assert_eq!(payslip.net_income, Decimal::from(1516));
        assert_eq!(payslip.super_contribution, Decimal::ZERO);
    }

    #[test]
    fn test_fourth_bracket_salary() {
        // 19822 + 33000 x 0.37 = 32032, / 12 = 2669.33
        let result = calculate_payslip(&create_employee(120_000, 9));
        let payslip = &result.payslip;

        assert_eq!(payslip.gross_income, Decimal::from(10000));
        assert_eq!(payslip.income_tax, Decimal::from(2669));
        assert_eq!(payslip.net_income, Decimal::from(7331));
        assert_eq!(payslip.super_contribution, Decimal::from(900));
    }

    #[test]
    fn test_top_bracket_salary() {
        let result = calculate_payslip(&create_employee(200_000, 10));
        let payslip = &result.payslip;

        assert_eq!(payslip.gross_income, Decimal::from(16666));
        assert_eq!(payslip.income_tax, Decimal::from(5269));
        assert_eq!(payslip.net_income, Decimal::from(11397));
        // 16666 x 10% = 1666.6
        assert_eq!(payslip.super_contribution, Decimal::from(1667));
    }

    #[test]
    fn test_audit_trace_has_one_step_per_figure_in_order() {
        let result = calculate_payslip(&create_employee(60_050, 9));
        let rule_ids: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|step| step.rule_id.as_str())
            .collect();
        let step_numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|step| step.step_number)
            .collect();

        assert_eq!(
            rule_ids,
            vec!["gross_income", "income_tax", "net_income", "super_contribution"]
        );
        assert_eq!(step_numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_result_is_stamped() {
        let first = calculate_payslip(&create_employee(60_050, 9));
        let second = calculate_payslip(&create_employee(60_050, 9));

        assert_eq!(first.engine_version, ENGINE_VERSION);
        assert_ne!(first.calculation_id, second.calculation_id);
        assert_eq!(first.payslip, second.payslip);
    }

    proptest! {
        #[test]
        fn prop_gross_income_is_floor_of_salary_over_twelve(salary in 1u32..=10_000_000) {
            let result = calculate_payslip(&create_employee(salary, 9));
            prop_assert_eq!(result.payslip.gross_income, Decimal::from(salary / 12));
        }

        #[test]
        fn prop_net_income_is_gross_minus_tax(salary in 1u32..=10_000_000, rate in 0u8..=100) {
            let payslip = calculate_payslip(&create_employee(salary, rate)).payslip;
            prop_assert_eq!(payslip.net_income, payslip.gross_income - payslip.income_tax);
        }

        #[test]
        fn prop_tax_never_exceeds_gross(salary in 1u32..=10_000_000) {
            let payslip = calculate_payslip(&create_employee(salary, 0)).payslip;
            prop_assert!(payslip.income_tax <= payslip.gross_income);
            prop_assert!(payslip.net_income >= Decimal::ZERO);
        }

        #[test]
        fn prop_super_bounds(salary in 1u32..=10_000_000) {
            let none = calculate_payslip(&create_employee(salary, 0)).payslip;
            let full = calculate_payslip(&create_employee(salary, 100)).payslip;

            prop_assert_eq!(none.super_contribution, Decimal::ZERO);
            prop_assert_eq!(full.super_contribution, full.gross_income);
        }

        #[test]
        fn prop_figures_are_whole_dollars(salary in 1u32..=10_000_000, rate in 0u8..=100) {
            let payslip = calculate_payslip(&create_employee(salary, rate)).payslip;

            prop_assert_eq!(payslip.income_tax.fract(), Decimal::ZERO);
            prop_assert_eq!(payslip.super_contribution.fract(), Decimal::ZERO);
        }
    }
}
