//! Currency input masking for the amount field.
//!
//! The formatter runs on every change event: it sanitizes whatever the user
//! typed (or pasted) into a canonical decimal string with thousands
//! separators. The parser is the inverse used when building the request
//! body.

/// Sanitize raw keyboard input into a display string like "1,234.56".
///
/// Only digits and the first decimal point survive; digits typed after a
/// second decimal point fold into the fractional part. A trailing bare "."
/// is kept so the user can keep typing the fraction.
pub fn format_amount_input(raw: &str) -> String {
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut seen_point = false;

    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            if seen_point {
                fraction.push(ch);
            } else {
                integer.push(ch);
            }
        } else if ch == '.' && !seen_point {
            seen_point = true;
        }
    }

    let grouped = group_thousands(&integer);
    if seen_point {
        format!("{}.{}", grouped, fraction)
    } else {
        grouped
    }
}

/// Parse a formatted display string back into a number.
///
/// Returns `None` for empty or non-numeric input; the caller treats that
/// as an invalid amount.
pub fn parse_amount(display: &str) -> Option<f64> {
    let ungrouped: String = display.chars().filter(|ch| *ch != ',').collect();
    if ungrouped.is_empty() || ungrouped == "." {
        return None;
    }
    ungrouped.parse::<f64>().ok()
}

/// Insert a comma every three digits, counting from the right
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part_with_commas() {
        assert_eq!(format_amount_input("1200"), "1,200");
        assert_eq!(format_amount_input("1234567"), "1,234,567");
        assert_eq!(format_amount_input("999"), "999");
        assert_eq!(format_amount_input("1000"), "1,000");
    }

    #[test]
    fn keeps_a_single_decimal_point() {
        assert_eq!(format_amount_input("1234.56"), "1,234.56");
        assert_eq!(format_amount_input("12."), "12.");
        assert_eq!(format_amount_input(".5"), ".5");
    }

    #[test]
    fn later_decimal_points_fold_into_the_fraction() {
        assert_eq!(format_amount_input("1.2.3"), "1.23");
        assert_eq!(format_amount_input("1..5"), "1.5");
    }

    #[test]
    fn strips_non_numeric_characters() {
        assert_eq!(format_amount_input("$1,2a00"), "1,200");
        assert_eq!(format_amount_input("abc"), "");
        assert_eq!(format_amount_input(""), "");
        assert_eq!(format_amount_input("1 200,50"), "120,050");
    }

    #[test]
    fn reformatting_is_idempotent() {
        for raw in ["1200", "1234.56", "$9,999.99x", "1.2.3", ""] {
            let once = format_amount_input(raw);
            assert_eq!(format_amount_input(&once), once);
        }
    }

    #[test]
    fn parse_inverts_formatting() {
        for (raw, expected) in [
            ("1200", 1200.0),
            ("1,200", 1200.0),
            ("1,234.56", 1234.56),
            (".5", 0.5),
            ("12.", 12.0),
        ] {
            assert_eq!(parse_amount(raw), Some(expected));
        }
    }

    #[test]
    fn parse_rejects_empty_and_non_numeric() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount(","), None);
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn formatted_output_round_trips_through_parse() {
        for raw in ["1200", "$1,2a00", "1.2.3", "0.01", "1234567.89"] {
            let formatted = format_amount_input(raw);
            let sanitized: String = formatted.chars().filter(|ch| *ch != ',').collect();
            assert_eq!(parse_amount(&formatted), parse_amount(&sanitized));
        }
    }
}
