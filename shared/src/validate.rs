use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::amount::parse_amount;

/// Error tag a validator attaches to a field.
///
/// A field may carry several rules; the first failing rule (in declaration
/// order) is the one shown, so Required outranks the length/value rules,
/// which outrank the past-date rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    Required,
    MinLength,
    MinValue,
    PastDate,
}

impl ValidationError {
    /// User-facing inline error text
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Required => "This field is required",
            ValidationError::MinLength => "Too short",
            ValidationError::MinValue => "Amount is too small",
            ValidationError::PastDate => "Date cannot be in the past",
        }
    }
}

/// A single validation rule, checked against the field's raw string value
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MinValue(f64),
    NoPastDate { today: NaiveDate },
}

impl Rule {
    /// Check `value` against this rule.
    ///
    /// Every rule except `Required` short-circuits on empty input:
    /// emptiness is Required's job, and checking it twice would
    /// double-report (or, for the date rule, compare a date parsed from
    /// an empty string).
    pub fn check(&self, value: &str) -> Option<ValidationError> {
        let trimmed = value.trim();
        match self {
            Rule::Required => trimmed.is_empty().then_some(ValidationError::Required),
            Rule::MinLength(min) => {
                if trimmed.is_empty() {
                    return None;
                }
                (trimmed.chars().count() < *min).then_some(ValidationError::MinLength)
            }
            Rule::MinValue(min) => {
                if trimmed.is_empty() {
                    return None;
                }
                match parse_amount(trimmed) {
                    Some(amount) if amount >= *min => None,
                    // Unparsable input counts as below minimum
                    _ => Some(ValidationError::MinValue),
                }
            }
            Rule::NoPastDate { today } => {
                if trimmed.is_empty() {
                    return None;
                }
                match parse_form_date(trimmed) {
                    Some(selected) if selected < *today => Some(ValidationError::PastDate),
                    // Unparsable dates never compare as earlier
                    _ => None,
                }
            }
        }
    }
}

/// Parse a date control value, tolerating a full ISO timestamp by keeping
/// only the date part
pub fn parse_form_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn required_fails_only_on_empty() {
        assert_eq!(Rule::Required.check(""), Some(ValidationError::Required));
        assert_eq!(Rule::Required.check("   "), Some(ValidationError::Required));
        assert_eq!(Rule::Required.check("Rent"), None);
    }

    #[test]
    fn min_length_skips_empty_input() {
        let rule = Rule::MinLength(3);
        assert_eq!(rule.check(""), None);
        assert_eq!(rule.check("Rn"), Some(ValidationError::MinLength));
        assert_eq!(rule.check("  Rn  "), Some(ValidationError::MinLength));
        assert_eq!(rule.check("Rent"), None);
    }

    #[test]
    fn min_value_accepts_grouped_amounts() {
        let rule = Rule::MinValue(1.0);
        assert_eq!(rule.check("1,200"), None);
        assert_eq!(rule.check("1"), None);
        assert_eq!(rule.check("0.5"), Some(ValidationError::MinValue));
        assert_eq!(rule.check("0"), Some(ValidationError::MinValue));
    }

    #[test]
    fn min_value_flags_unparsable_input() {
        let rule = Rule::MinValue(1.0);
        assert_eq!(rule.check("abc"), Some(ValidationError::MinValue));
        assert_eq!(rule.check(""), None);
    }

    #[test]
    fn past_date_fails_for_yesterday_only() {
        let rule = Rule::NoPastDate { today: date("2026-08-26") };
        assert_eq!(rule.check("2026-08-25"), Some(ValidationError::PastDate));
        assert_eq!(rule.check("2026-08-26"), None);
        assert_eq!(rule.check("2026-08-27"), None);
        assert_eq!(rule.check("2027-01-01"), None);
    }

    #[test]
    fn past_date_skips_empty_and_unparsable_input() {
        let rule = Rule::NoPastDate { today: date("2026-08-26") };
        assert_eq!(rule.check(""), None);
        assert_eq!(rule.check("not-a-date"), None);
    }

    #[test]
    fn past_date_ignores_time_of_day() {
        let rule = Rule::NoPastDate { today: date("2026-08-26") };
        assert_eq!(rule.check("2026-08-26T23:59:59Z"), None);
        assert_eq!(
            rule.check("2026-08-25T00:00:01Z"),
            Some(ValidationError::PastDate)
        );
    }
}
