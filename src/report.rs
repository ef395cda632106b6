//! Payslip rendering.
//!
//! Text output is the line-oriented block shown at the console. JSON
//! output is the full [`CalculationResult`], audit trace included.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PayslipResult;
use crate::models::{CalculationResult, Payslip};

/// How a payslip is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The human-readable block.
    #[default]
    Text,
    /// Pretty-printed JSON of the whole calculation result.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}', expected 'text' or 'json'",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Renders a payslip as the console text block.
///
/// The output is a pure function of its inputs and always ends with a
/// newline.
///
/// # Examples
///
/// ```
/// use payslip_generator::models::Payslip;
/// use payslip_generator::report::render_payslip;
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
///
/// let text = render_payslip(&payslip, "Thank you for using MYOB!");
/// assert!(text.contains("Gross Income: 5004\n"));
/// assert!(text.ends_with("Thank you for using MYOB!\n"));
/// ```
pub fn render_payslip(payslip: &Payslip, closing_message: &str) -> String {
    format!(
        "Your payslip has been generated:\n\
         \n\
         Name: {}\n\
         Pay Period: {}\n\
         Gross Income: {}\n\
         Income Tax: {}\n\
         Net Income: {}\n\
         Super: {}\n\
         \n\
         {}\n",
        payslip.full_name,
        payslip.period_label,
        payslip.gross_income,
        payslip.income_tax,
        payslip.net_income,
        payslip.super_contribution,
        closing_message
    )
}

/// Renders a calculation result in the requested format.
pub fn render_output(
    result: &CalculationResult,
    format: OutputFormat,
    closing_message: &str,
) -> PayslipResult<String> {
    match format {
        OutputFormat::Text => Ok(render_payslip(&result.payslip, closing_message)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(result).map_err(std::io::Error::from)?;
            json.push('\n');
            Ok(json)
        }
    }
}
