//! Payslip model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four monthly figures for one employee, plus the labels to print.
///
/// All amounts are whole dollars. `net_income` is always
/// `gross_income - income_tax` using the already-rounded figures, so it
/// can drift by a dollar from an unrounded subtraction.
///
/// # Example
///
/// ```
/// use payslip_generator::models::Payslip;
/// use rust_decimal::Decimal;
///
/// let payslip = Payslip {
///     full_name: "John Doe".to_string(),
///     period_label: "01 March – 31 March".to_string(),
///     gross_income: Decimal::from(5004),
///     income_tax: Decimal::from(922),
///     net_income: Decimal::from(4082),
///     super_contribution: Decimal::from(450),
/// };
/// assert_eq!(payslip.net_income, payslip.gross_income - payslip.income_tax);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// First and last name.
    pub full_name: String,
    /// The pay period, "start – end".
    pub period_label: String,
    /// Monthly gross income (annual salary / 12, truncated).
    pub gross_income: Decimal,
    /// Monthly income tax, rounded half-up.
    pub income_tax: Decimal,
    /// Gross income minus income tax.
    pub net_income: Decimal,
    /// Superannuation contribution, rounded half-up.
    pub super_contribution: Decimal,
}
