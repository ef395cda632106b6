//! Input validation.
//!
//! Turns raw salary and super rate values into the typed, range-checked
//! values [`EmployeeInput`](crate::models::EmployeeInput) carries. The
//! console reads text and calls the `parse_*` functions; the HTTP layer
//! receives numbers and calls the `validate_*` functions. Both apply the
//! same bounds.

use crate::error::{PayslipError, PayslipResult};

/// The default inclusive upper bound for the super rate, in percent.
pub const DEFAULT_MAX_SUPER_RATE: u8 = 50;

/// The largest super rate any configuration may allow.
pub const SUPER_RATE_CEILING: u8 = 100;

/// Parses an annual salary typed at the console.
///
/// Surrounding whitespace is ignored. Anything that is not a 32-bit
/// signed integer is malformed; zero and negative values are rejected
/// separately.
///
/// # Examples
///
/// ```
/// use payslip_generator::validation::parse_annual_salary;
///
/// assert_eq!(parse_annual_salary(" 60050 ").unwrap(), 60050);
/// assert!(parse_annual_salary("60,050").is_err());
/// assert!(parse_annual_salary("-1").is_err());
/// ```
pub fn parse_annual_salary(raw: &str) -> PayslipResult<u32> {
    let trimmed = raw.trim();
    let salary: i32 = trimmed
        .parse()
        .map_err(|_| PayslipError::MalformedSalary {
            input: trimmed.to_string(),
        })?;

    validate_annual_salary(i64::from(salary))
}

/// Checks that a numeric annual salary is positive and fits in a 32-bit
/// signed integer, the same range the console accepts.
pub fn validate_annual_salary(salary: i64) -> PayslipResult<u32> {
    if salary <= 0 {
        return Err(PayslipError::NonPositiveSalary { salary });
    }

    let salary = i32::try_from(salary).map_err(|_| PayslipError::MalformedSalary {
        input: salary.to_string(),
    })?;

    Ok(salary.unsigned_abs())
}

/// Parses a super rate typed at the console.
///
/// The rate is a whole percentage between 0 and `max_rate` inclusive.
///
/// # Examples
///
/// ```
/// use payslip_generator::validation::parse_super_rate;
///
/// assert_eq!(parse_super_rate("9", 50).unwrap(), 9);
/// assert!(parse_super_rate("9.5", 50).is_err());
/// assert!(parse_super_rate("51", 50).is_err());
/// ```
pub fn parse_super_rate(raw: &str, max_rate: u8) -> PayslipResult<u8> {
    let trimmed = raw.trim();
    let rate: i64 = trimmed
        .parse()
        .map_err(|_| PayslipError::MalformedSuperRate {
            input: trimmed.to_string(),
        })?;

    validate_super_rate(rate, max_rate)
}

/// Checks that a numeric super rate lies within `0..=max_rate`.
pub fn validate_super_rate(rate: i64, max_rate: u8) -> PayslipResult<u8> {
    if !(0..=i64::from(max_rate)).contains(&rate) {
        return Err(PayslipError::SuperRateOutOfRange {
            rate,
            max: max_rate,
        });
    }

    u8::try_from(rate).map_err(|_| PayslipError::SuperRateOutOfRange {
        rate,
        max: max_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_salary() {
        assert_eq!(parse_annual_salary("60050").unwrap(), 60050);
        assert_eq!(parse_annual_salary("1").unwrap(), 1);
    }

    #[test]
    fn test_parse_salary_trims_whitespace() {
        assert_eq!(parse_annual_salary("  60050\r\n").unwrap(), 60050);
    }

    #[test]
    fn test_parse_salary_rejects_non_integer() {
        for raw in ["", "abc", "60050.50", "60,050", "$60050", "1e5"] {
            match parse_annual_salary(raw) {
                Err(PayslipError::MalformedSalary { input }) => assert_eq!(input, raw.trim()),
                other => panic!("Expected MalformedSalary for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_parse_salary_rejects_values_beyond_32_bits() {
        assert!(matches!(
            parse_annual_salary("2147483648"),
            Err(PayslipError::MalformedSalary { .. })
        ));
        assert_eq!(parse_annual_salary("2147483647").unwrap(), 2_147_483_647);
    }

    #[test]
    fn test_parse_salary_rejects_zero_and_negative() {
        match parse_annual_salary("0") {
            Err(PayslipError::NonPositiveSalary { salary }) => assert_eq!(salary, 0),
            other => panic!("Expected NonPositiveSalary, got {:?}", other),
        }
        match parse_annual_salary("-60050") {
            Err(PayslipError::NonPositiveSalary { salary }) => assert_eq!(salary, -60050),
            other => panic!("Expected NonPositiveSalary, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_salary_rejects_overflow() {
        assert!(matches!(
            validate_annual_salary(i64::from(u32::MAX) + 1),
            Err(PayslipError::MalformedSalary { .. })
        ));
    }

    #[test]
    fn test_validate_salary_matches_console_range() {
        assert_eq!(validate_annual_salary(2_147_483_647).unwrap(), 2_147_483_647);

        for salary in [2_147_483_648_i64, 3_000_000_000] {
            match validate_annual_salary(salary) {
                Err(PayslipError::MalformedSalary { input }) => {
                    assert_eq!(input, salary.to_string())
                }
                other => panic!("Expected MalformedSalary for {}, got {:?}", salary, other),
            }
            assert_eq!(
                validate_annual_salary(salary).unwrap_err().exit_code(),
                parse_annual_salary(&salary.to_string()).unwrap_err().exit_code()
            );
        }
    }

    #[test]
    fn test_parse_super_rate_bounds_are_inclusive() {
        assert_eq!(parse_super_rate("0", 50).unwrap(), 0);
        assert_eq!(parse_super_rate("50", 50).unwrap(), 50);
    }

    #[test]
    fn test_parse_super_rate_rejects_out_of_range() {
        match parse_super_rate("51", 50) {
            Err(PayslipError::SuperRateOutOfRange { rate, max }) => {
                assert_eq!(rate, 51);
                assert_eq!(max, 50);
            }
            other => panic!("Expected SuperRateOutOfRange, got {:?}", other),
        }
        assert!(matches!(
            parse_super_rate("-1", 50),
            Err(PayslipError::SuperRateOutOfRange { rate: -1, .. })
        ));
    }

    #[test]
    fn test_parse_super_rate_with_raised_bound() {
        assert_eq!(parse_super_rate("100", SUPER_RATE_CEILING).unwrap(), 100);
        assert!(parse_super_rate("101", SUPER_RATE_CEILING).is_err());
    }

    #[test]
    fn test_parse_super_rate_rejects_non_integer() {
        for raw in ["", "nine", "9.5", "9%"] {
            assert!(
                matches!(
                    parse_super_rate(raw, DEFAULT_MAX_SUPER_RATE),
                    Err(PayslipError::MalformedSuperRate { .. })
                ),
                "Expected MalformedSuperRate for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_huge_super_rate_is_out_of_range_not_malformed() {
        assert!(matches!(
            parse_super_rate("99999999999", DEFAULT_MAX_SUPER_RATE),
            Err(PayslipError::SuperRateOutOfRange { .. })
        ));
    }
}
