//! Income tax calculation.
//!
//! This module holds the 2017-18 resident tax table and the functions
//! that turn an annual salary into a monthly income tax figure. Tax is
//! computed on the annual salary, divided by twelve, then rounded to
//! whole dollars with 50 cents rounding up.

use rust_decimal::Decimal;

use super::gross_income::MONTHS_PER_YEAR;
use super::rounding::round_to_whole_dollars;
use crate::models::AuditStep;

/// One row of the progressive tax table.
///
/// Income above `lower_threshold`, up to and including `upper_bound`,
/// is taxed at `marginal_rate` on top of `base_tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Income at or below this amount is covered by earlier brackets.
    pub lower_threshold: u32,
    /// Inclusive upper bound, or `None` for the top bracket.
    pub upper_bound: Option<u32>,
    /// Fixed tax on all income up to `lower_threshold`.
    pub base_tax: Decimal,
    /// Tax per dollar over `lower_threshold`.
    pub marginal_rate: Decimal,
}

impl TaxBracket {
    /// Returns true if the salary falls at or below this bracket's upper bound.
    pub fn covers(&self, annual_salary: u32) -> bool {
        self.upper_bound.is_none_or(|upper| annual_salary <= upper)
    }

    /// Returns the annual tax for a salary within this bracket.
    pub fn tax_for(&self, annual_salary: u32) -> Decimal {
        let taxable_excess = annual_salary.saturating_sub(self.lower_threshold);
        self.base_tax + Decimal::from(taxable_excess) * self.marginal_rate
    }
}

/// Returns the resident income tax table for 2017-18, lowest bracket first.
///
/// | Taxable income     | Tax on this income                 |
/// |--------------------|------------------------------------|
/// | $0 - $18,200       | Nil                                |
/// | $18,201 - $37,000  | 19c for each $1 over $18,200       |
/// | $37,001 - $87,000  | $3,572 plus 32.5c over $37,000     |
/// | $87,001 - $180,000 | $19,822 plus 37c over $87,000      |
/// | $180,001 and over  | $54,232 plus 45c over $180,000     |
pub fn income_tax_brackets() -> [TaxBracket; 5] {
    [
        TaxBracket {
            lower_threshold: 0,
            upper_bound: Some(18_200),
            base_tax: Decimal::ZERO,
            marginal_rate: Decimal::ZERO,
        },
        TaxBracket {
            lower_threshold: 18_200,
            upper_bound: Some(37_000),
            base_tax: Decimal::ZERO,
            marginal_rate: Decimal::new(19, 2),
        },
        TaxBracket {
            lower_threshold: 37_000,
            upper_bound: Some(87_000),
            base_tax: Decimal::from(3_572),
            marginal_rate: Decimal::new(325, 3),
        },
        TaxBracket {
            lower_threshold: 87_000,
            upper_bound: Some(180_000),
            base_tax: Decimal::from(19_822),
            marginal_rate: Decimal::new(37, 2),
        },
        TaxBracket {
            lower_threshold: 180_000,
            upper_bound: None,
            base_tax: Decimal::from(54_232),
            marginal_rate: Decimal::new(45, 2),
        },
    ]
}

/// Finds the bracket an annual salary falls into.
///
/// Upper bounds are inclusive, so a salary of exactly $37,000 is taxed
/// in the 19c bracket.
pub fn find_tax_bracket(annual_salary: u32) -> TaxBracket {
    let brackets = income_tax_brackets();
    let top = brackets[brackets.len() - 1];

    brackets
        .into_iter()
        .find(|bracket| bracket.covers(annual_salary))
        .unwrap_or(top)
}

/// Returns the unrounded annual income tax for a salary.
///
/// # Examples
///
/// ```
/// use payslip_generator::calculation::annual_income_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 3572 + (60050 - 37000) x 0.325
/// assert_eq!(annual_income_tax(60050), Decimal::from_str("11063.25").unwrap());
/// assert_eq!(annual_income_tax(18200), Decimal::ZERO);
/// ```
pub fn annual_income_tax(annual_salary: u32) -> Decimal {
    find_tax_bracket(annual_salary).tax_for(annual_salary)
}

/// The result of an income tax calculation, including the amounts and audit step.
#[derive(Debug, Clone)]
pub struct IncomeTaxResult {
    /// The bracket the salary fell into.
    pub bracket: TaxBracket,
    /// Unrounded tax for the whole year.
    pub annual_tax: Decimal,
    /// Unrounded tax for one month.
    pub monthly_tax: Decimal,
    /// Monthly tax rounded to whole dollars.
    pub income_tax: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the monthly income tax for an annual salary.
///
/// The annual tax from the bracket table is divided by twelve and the
/// result rounded half-up to whole dollars.
///
/// # Arguments
///
/// * `annual_salary` - The annual salary in whole dollars
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payslip_generator::calculation::calculate_income_tax;
/// use rust_decimal::Decimal;
///
/// // (3572 + (60050 - 37000) x 0.325) / 12 = 921.9375
/// let result = calculate_income_tax(60050, 2);
/// assert_eq!(result.income_tax, Decimal::from(922));
/// ```
pub fn calculate_income_tax(annual_salary: u32, step_number: u32) -> IncomeTaxResult {
    let bracket = find_tax_bracket(annual_salary);
    let annual_tax = bracket.tax_for(annual_salary);
    let monthly_tax = annual_tax / Decimal::from(MONTHS_PER_YEAR);
    let income_tax = round_to_whole_dollars(monthly_tax);

    let reasoning = if bracket.marginal_rate.is_zero() {
        format!(
            "Annual salary ${} is within the ${} tax-free threshold, no income tax",
            annual_salary,
            bracket.upper_bound.unwrap_or_default()
        )
    } else {
        format!(
            "({} + ({} - {}) x {}) / {} = {}, rounded to {}",
            bracket.base_tax,
            annual_salary,
            bracket.lower_threshold,
            bracket.marginal_rate.normalize(),
            MONTHS_PER_YEAR,
            monthly_tax.normalize(),
            income_tax
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "income_tax".to_string(),
        rule_name: "Income Tax".to_string(),
        input: serde_json::json!({
            "annual_salary": annual_salary,
            "bracket_lower_threshold": bracket.lower_threshold,
            "bracket_upper_bound": bracket.upper_bound,
            "base_tax": bracket.base_tax.to_string(),
            "marginal_rate": bracket.marginal_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_tax": annual_tax.normalize().to_string(),
            "monthly_tax": monthly_tax.normalize().to_string(),
            "income_tax": income_tax.to_string()
        }),
        reasoning,
    };

    IncomeTaxResult {
        bracket,
        annual_tax,
        monthly_tax,
        income_tax,
        audit_step,
    }
}
