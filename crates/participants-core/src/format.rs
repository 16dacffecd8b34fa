//! Phone number formatting for display

/// Shortest digit string accepted by [`is_valid_phone_number`]
pub const MIN_VALID_DIGITS: usize = 10;

/// Longest digit string accepted by [`is_valid_phone_number`]
pub const MAX_VALID_DIGITS: usize = 15;

/// Remove every character that is not an ASCII digit, keeping order
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Number of ASCII digits in a raw number
pub fn digit_count(raw: &str) -> usize {
    raw.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Format a raw phone number for display.
///
/// Non-digits are stripped first. Eleven digits render as `DD DDDDD-DDDD`,
/// ten digits as `DD DDDD-DDDD`. Any other length is returned as the bare
/// digit string, so this never fails and an input without digits yields an
/// empty string.
pub fn format_phone_number(raw: &str) -> String {
    let digits = strip_non_digits(raw);

    // `digits` is ASCII only, so byte slicing is safe
    match digits.len() {
        11 => format!("{} {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        10 => format!("{} {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => digits,
    }
}

/// Check that a raw number has a plausible digit count for dialing
pub fn is_valid_phone_number(raw: &str) -> bool {
    (MIN_VALID_DIGITS..=MAX_VALID_DIGITS).contains(&digit_count(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eleven_digits() {
        assert_eq!(format_phone_number("+7 (912) 345-67-89"), "79 12345-6789");
        assert_eq!(format_phone_number("11999999999"), "11 99999-9999");
    }

    #[test]
    fn test_format_ten_digits() {
        assert_eq!(format_phone_number("9123456789"), "91 2345-6789");
        assert_eq!(format_phone_number("(11) 3333-4444"), "11 3333-4444");
    }

    #[test]
    fn test_other_lengths_return_digits() {
        assert_eq!(format_phone_number("123"), "123");
        assert_eq!(format_phone_number("1-2-3"), "123");
        assert_eq!(format_phone_number("123456789"), "123456789");
        assert_eq!(format_phone_number("+55 11 99999-99990"), "55119999999990");
    }

    #[test]
    fn test_empty_and_digit_free_input() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("call me"), "");
        assert_eq!(format_phone_number("   ---   "), "");
    }

    #[test]
    fn test_non_ascii_digits_are_stripped() {
        // Arabic-Indic digits are not 0-9
        assert_eq!(format_phone_number("١٢٣"), "");
        assert_eq!(format_phone_number("9١1"), "91");
    }

    #[test]
    fn test_reformatting_preserves_digits() {
        for raw in ["79123456789", "9123456789", "+55 (21) 98765-4321"] {
            let once = format_phone_number(raw);
            let twice = format_phone_number(&strip_non_digits(&once));
            assert_eq!(once, twice);
            assert_eq!(strip_non_digits(&once), strip_non_digits(raw));
        }
    }

    #[test]
    fn test_validation_bounds() {
        assert!(!is_valid_phone_number("123456789"));
        assert!(is_valid_phone_number("1234567890"));
        assert!(is_valid_phone_number("+7 (912) 345-67-89"));
        assert!(is_valid_phone_number("123456789012345"));
        assert!(!is_valid_phone_number("1234567890123456"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count("+7 (912) 345-67-89"), 11);
        assert_eq!(digit_count("abc"), 0);
    }
}
