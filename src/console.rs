//! Interactive console session.
//!
//! Prompts for one employee's details, validates each numeric answer as
//! soon as it is entered, then prints the payslip. The session is generic
//! over its reader and writer so it runs the same against a terminal or
//! in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::calculation::calculate_payslip;
use crate::config::ConfigLoader;
use crate::error::{PayslipError, PayslipResult};
use crate::models::{CalculationResult, EmployeeInput};
use crate::report::render_output;
use crate::validation::{parse_annual_salary, parse_super_rate};

/// Printed once when the session starts.
pub const WELCOME_MESSAGE: &str = "Welcome to the payslip generator!";

/// A prompt/answer session over a line reader and a writer.
///
/// # Example
///
/// ```
/// use payslip_generator::config::ConfigLoader;
/// use payslip_generator::console::ConsoleSession;
///
/// let input = "John\nDoe\n60050\n9\n01 March\n31 March\n";
/// let mut output = Vec::new();
///
/// let mut session = ConsoleSession::new(input.as_bytes(), &mut output);
/// let result = session.run(&ConfigLoader::defaults()).unwrap();
///
/// assert_eq!(result.payslip.net_income.to_string(), "4082");
/// assert!(String::from_utf8(output).unwrap().contains("Net Income: 4082"));
/// ```
pub struct ConsoleSession<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session reading answers from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Writes `message`, flushes, and reads one line.
    ///
    /// The trailing line ending is stripped; everything else is kept.
    /// Returns `InputClosed` naming `field` if the reader is exhausted.
    pub fn prompt(&mut self, message: &str, field: &str) -> PayslipResult<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PayslipError::InputClosed {
                field: field.to_string(),
            });
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompts for every employee field, validating salary and super rate.
    ///
    /// Stops at the first invalid answer.
    pub fn collect_employee(&mut self, max_super_rate: u8) -> PayslipResult<EmployeeInput> {
        let first_name = self.prompt("Please input your name: ", "first name")?;
        let last_name = self.prompt("Please input your surname: ", "last name")?;

        let raw_salary = self.prompt("Please enter your annual salary: ", "annual salary")?;
        let annual_salary = parse_annual_salary(&raw_salary)
            .inspect_err(|err| warn!(error = %err, "Rejected annual salary"))?;

        let raw_rate = self.prompt("Please enter your super rate: ", "super rate")?;
        let super_rate_percent = parse_super_rate(&raw_rate, max_super_rate)
            .inspect_err(|err| warn!(error = %err, "Rejected super rate"))?;

        let period_start =
            self.prompt("Please enter your payment start date: ", "payment start date")?;
        let period_end = self.prompt("Please enter your payment end date: ", "payment end date")?;

        Ok(EmployeeInput {
            first_name,
            last_name,
            annual_salary,
            super_rate_percent,
            period_start,
            period_end,
        })
    }

    /// Runs a full session: welcome, prompts, calculation, payslip.
    pub fn run(&mut self, config: &ConfigLoader) -> PayslipResult<CalculationResult> {
        writeln!(self.writer, "{}", WELCOME_MESSAGE)?;
        writeln!(self.writer)?;

        let employee = self.collect_employee(config.max_super_rate())?;
        let result = calculate_payslip(&employee);
        info!(
            calculation_id = %result.calculation_id,
            gross_income = %result.payslip.gross_income,
            duration_us = result.audit_trace.duration_us,
            "Payslip generated"
        );

        let output = render_output(&result, config.output_format(), config.closing_message())?;
        writeln!(self.writer)?;
        write!(self.writer, "{}", output)?;
        self.writer.flush()?;

        Ok(result)
    }

    /// Consumes the session, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use rust_decimal::Decimal;

    fn run_with_input(
        input: &str,
        config: &ConfigLoader,
    ) -> (PayslipResult<CalculationResult>, String) {
        let mut output = Vec::new();
        let result = ConsoleSession::new(input.as_bytes(), &mut output).run(config);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_strips_line_ending_only() {
        let mut output = Vec::new();
        let mut session = ConsoleSession::new("  01 March \r\n".as_bytes(), &mut output);

        let answer = session.prompt("Start: ", "start").unwrap();
        assert_eq!(answer, "  01 March ");

        drop(session);
        assert_eq!(String::from_utf8(output).unwrap(), "Start: ");
    }

    #[test]
    fn test_prompt_accepts_last_line_without_newline() {
        let mut session = ConsoleSession::new("31 March".as_bytes(), Vec::new());
        assert_eq!(session.prompt("End: ", "end").unwrap(), "31 March");
    }

    #[test]
    fn test_prompt_on_closed_input() {
        let mut session = ConsoleSession::new("".as_bytes(), Vec::new());

        match session.prompt("Name: ", "first name") {
            Err(PayslipError::InputClosed { field }) => assert_eq!(field, "first name"),
            other => panic!("Expected InputClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_employee() {
        let input = "John\nDoe\n60050\n9\n01 March\n31 March\n";
        let mut session = ConsoleSession::new(input.as_bytes(), Vec::new());

        let employee = session.collect_employee(50).unwrap();
        assert_eq!(
            employee,
            EmployeeInput {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                annual_salary: 60050,
                super_rate_percent: 9,
                period_start: "01 March".to_string(),
                period_end: "31 March".to_string(),
            }
        );

        let (_, written) = session.into_inner();
        let written = String::from_utf8(written).unwrap();
        assert!(written.starts_with("Please input your name: Please input your surname: "));
        assert!(written.ends_with("Please enter your payment end date: "));
    }

    #[test]
    fn test_run_prints_full_session() {
        let (result, output) = run_with_input(
            "John\nDoe\n60050\n9\n01 March\n31 March\n",
            &ConfigLoader::defaults(),
        );

        assert_eq!(result.unwrap().payslip.income_tax, Decimal::from(922));
        assert!(output.starts_with("Welcome to the payslip generator!\n\n"));
        let last_prompt = "Please enter your payment end date: \n";
        assert!(output.contains(&format!("{}Your payslip has been generated:\n", last_prompt)));
        assert!(output.contains("Name: John Doe\n"));
        assert!(output.contains("Pay Period: 01 March – 31 March\n"));
        assert!(output.ends_with("Super: 450\n\nThank you for using MYOB!\n"));
    }

    #[test]
    fn test_run_stops_at_malformed_salary() {
        let (result, output) =
            run_with_input("John\nDoe\nlots\n9\n01 March\n31 March\n", &ConfigLoader::defaults());

        assert!(matches!(result, Err(PayslipError::MalformedSalary { .. })));
        assert!(!output.contains("super rate"));
    }

    #[test]
    fn test_run_rejects_non_positive_salary() {
        let (result, _) =
            run_with_input("John\nDoe\n0\n9\n01 March\n31 March\n", &ConfigLoader::defaults());
        assert!(matches!(result, Err(PayslipError::NonPositiveSalary { salary: 0 })));
    }

    #[test]
    fn test_run_applies_configured_super_bound() {
        let input = "John\nDoe\n60050\n75\n01 March\n31 March\n";

        let (result, _) = run_with_input(input, &ConfigLoader::defaults());
        assert!(matches!(
            result,
            Err(PayslipError::SuperRateOutOfRange { rate: 75, max: 50 })
        ));

        let mut config = ConfigLoader::defaults();
        config.set_max_super_rate(100).unwrap();
        let (result, _) = run_with_input(input, &config);
        assert_eq!(result.unwrap().payslip.super_contribution, Decimal::from(3753));
    }

    #[test]
    fn test_run_reports_closed_input() {
        let (result, _) = run_with_input("John\nDoe\n60050\n", &ConfigLoader::defaults());

        match result {
            Err(PayslipError::InputClosed { field }) => assert_eq!(field, "super rate"),
            other => panic!("Expected InputClosed, got {:?}", other),
        }
    }

    #[test]
    fn test_run_json_output() {
        let mut config = ConfigLoader::defaults();
        config.set_output_format(OutputFormat::Json);

        let (result, output) = run_with_input("John\nDoe\n60050\n9\n01 March\n31 March\n", &config);
        let result = result.unwrap();

        let json_start = output.find('{').unwrap();
        let value: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();
        assert_eq!(value["calculation_id"], result.calculation_id.to_string());
        assert_eq!(value["payslip"]["super_contribution"], "450");
        assert!(!output.contains("Thank you for using MYOB!"));
    }
}
