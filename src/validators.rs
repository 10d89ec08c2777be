//! Input validators applied before requests are built
//!
//! Both functions are pure: they never touch the network and return the
//! normalized value or a [`ValidationError`].

use crate::error::ValidationError;

/// Smallest installment count the API accepts
pub const MIN_INSTALLMENT: i64 = 1;
/// Largest installment count the API accepts
pub const MAX_INSTALLMENT: i64 = 12;

const INSTALLMENT_FORMAT_MESSAGE: &str =
    "Enabled installments must be comma-separated integers (e.g., 1,2,3 or 2,4,6)";

/// Parse a comma-separated list of installment counts.
///
/// Empty input, or input made only of separators and whitespace, yields
/// `[1]` (a single payment). Values keep their input order and duplicates
/// are preserved. The first unparsable or out-of-range segment fails the
/// whole call.
pub fn validate_installments(input: &str) -> Result<Vec<u32>, ValidationError> {
    if input.is_empty() {
        return Ok(vec![1]);
    }

    let mut installments = Vec::new();

    for segment in input.split(',') {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value: i64 = trimmed
            .parse()
            .map_err(|_| ValidationError::new(INSTALLMENT_FORMAT_MESSAGE))?;

        if !(MIN_INSTALLMENT..=MAX_INSTALLMENT).contains(&value) {
            return Err(ValidationError::new(format!(
                "Installment value '{}' is invalid. All installment values must be between {} and {} (inclusive).",
                value, MIN_INSTALLMENT, MAX_INSTALLMENT
            )));
        }

        // In range, so the narrowing is lossless.
        installments.push(value as u32);
    }

    if installments.is_empty() {
        return Ok(vec![1]);
    }

    Ok(installments)
}

/// Phone number shape, decided by prefix of the cleaned number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFormat {
    /// Starts with `+`
    International,
    /// Starts with `00`
    InternationalZeroZero,
    /// Starts with a single `0`
    National,
    /// No leading `+` or `0`
    Local,
}

impl PhoneFormat {
    /// Classify an already cleaned number
    pub fn classify(cleaned: &str) -> Self {
        if cleaned.starts_with('+') {
            PhoneFormat::International
        } else if cleaned.starts_with("00") {
            PhoneFormat::InternationalZeroZero
        } else if cleaned.starts_with('0') {
            PhoneFormat::National
        } else {
            PhoneFormat::Local
        }
    }

    /// Minimum length of the cleaned number, `+` included
    pub fn min_len(&self) -> usize {
        match self {
            PhoneFormat::International => 8,
            PhoneFormat::InternationalZeroZero => 9,
            PhoneFormat::National => 7,
            PhoneFormat::Local => 6,
        }
    }

    fn too_short_label(&self) -> &'static str {
        match self {
            PhoneFormat::International => "International phone number too short",
            PhoneFormat::InternationalZeroZero => {
                "International phone number (00 format) too short"
            }
            PhoneFormat::National => "National phone number too short",
            PhoneFormat::Local => "Local phone number too short",
        }
    }
}

fn is_formatting_char(c: char) -> bool {
    matches!(c, ' ' | '-' | '(' | ')')
}

/// Validate a GSM number and return it with formatting removed.
///
/// Spaces, hyphens and parentheses are stripped; digits and `+` are kept in
/// their original order. An empty input is accepted as-is since the phone
/// field is optional. Error messages echo the caller's original input.
pub fn validate_gsm_number(input: &str) -> Result<String, ValidationError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let invalid_format = || ValidationError::new(format!("Invalid phone number format: {}", input));

    let cleaned: String = input.chars().filter(|&c| !is_formatting_char(c)).collect();

    if cleaned.is_empty() || !cleaned.chars().all(|c| c == '+' || c.is_ascii_digit()) {
        return Err(invalid_format());
    }

    // A number made only of '+' signs has no digits left.
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid_format());
    }

    let format = PhoneFormat::classify(&cleaned);
    // Only ASCII is left, so byte length equals character count.
    if cleaned.len() < format.min_len() {
        return Err(ValidationError::new(format!(
            "{}: {}",
            format.too_short_label(),
            input
        )));
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installments_empty_returns_default() {
        assert_eq!(validate_installments("").unwrap(), vec![1]);
    }

    #[test]
    fn test_installments_single_value() {
        assert_eq!(validate_installments("3").unwrap(), vec![3]);
    }

    #[test]
    fn test_installments_multiple_values() {
        assert_eq!(validate_installments("1,2,3,6").unwrap(), vec![1, 2, 3, 6]);
        assert_eq!(validate_installments("1, 2, 3, 6").unwrap(), vec![1, 2, 3, 6]);
    }

    #[test]
    fn test_installments_keep_order_and_duplicates() {
        assert_eq!(validate_installments("6,2,6,12,1").unwrap(), vec![6, 2, 6, 12, 1]);
    }

    #[test]
    fn test_installments_skip_empty_segments() {
        assert_eq!(validate_installments("2,,  ,4,").unwrap(), vec![2, 4]);
        assert_eq!(validate_installments(",,,").unwrap(), vec![1]);
        assert_eq!(validate_installments("   ").unwrap(), vec![1]);
    }

    #[test]
    fn test_installments_value_too_low() {
        let err = validate_installments("0,2,3").unwrap_err();
        assert!(err.message.contains("Installment value '0' is invalid"));
        assert_eq!(err.status_code, 400);
        assert_eq!(err.code, 0);
    }

    #[test]
    fn test_installments_value_too_high_fails_fast() {
        let err = validate_installments("1,15,3").unwrap_err();
        assert!(err.to_string().contains("Installment value '15' is invalid"));
        assert!(err.message.contains("between 1 and 12 (inclusive)"));

        let err = validate_installments("13,99").unwrap_err();
        assert!(err.message.contains("'13'"));
        assert!(!err.message.contains("'99'"));
    }

    #[test]
    fn test_installments_negative_value() {
        let err = validate_installments("-1").unwrap_err();
        assert!(err.message.contains("Installment value '-1' is invalid"));
    }

    #[test]
    fn test_installments_invalid_format() {
        for input in ["1,abc,3", "1,2.5,3", "1;2", "99999999999999999999999"] {
            let err = validate_installments(input).unwrap_err();
            assert!(
                err.message.contains("comma-separated integers"),
                "unexpected message for {input:?}: {}",
                err.message
            );
        }
    }

    #[test]
    fn test_installments_repeated_values() {
        for n in 1..=12u32 {
            for k in 1..=5 {
                let input = vec![n.to_string(); k].join(",");
                assert_eq!(validate_installments(&input).unwrap(), vec![n; k]);
            }
        }
    }

    #[test]
    fn test_gsm_empty_returns_empty() {
        assert_eq!(validate_gsm_number("").unwrap(), "");
    }

    #[test]
    fn test_gsm_valid_formats() {
        for phone in ["+905551234567", "00905551234567", "05551234567", "5551234567"] {
            assert_eq!(validate_gsm_number(phone).unwrap(), phone);
        }
    }

    #[test]
    fn test_gsm_removes_formatting() {
        assert_eq!(
            validate_gsm_number("+90 555 123-45(67)").unwrap(),
            "+905551234567"
        );
    }

    #[test]
    fn test_gsm_too_short() {
        let cases = [
            ("+90123", "International phone number too short: +90123"),
            ("0090123", "International phone number (00 format) too short: 0090123"),
            ("012345", "National phone number too short: 012345"),
            ("12345", "Local phone number too short: 12345"),
        ];
        for (input, message) in cases {
            let err = validate_gsm_number(input).unwrap_err();
            assert_eq!(err.message, message);
            assert!(err.to_string().contains("too short"));
        }
    }

    #[test]
    fn test_gsm_length_thresholds() {
        assert!(validate_gsm_number("+1234567").is_ok());
        assert!(validate_gsm_number("+123456").is_err());
        assert!(validate_gsm_number("001234567").is_ok());
        assert!(validate_gsm_number("00123456").is_err());
        assert!(validate_gsm_number("0123456").is_ok());
        assert!(validate_gsm_number("012345").is_err());
        assert!(validate_gsm_number("123456").is_ok());
        assert!(validate_gsm_number("12345").is_err());
    }

    #[test]
    fn test_gsm_threshold_counts_cleaned_length() {
        // Formatting characters do not count towards the minimum.
        let err = validate_gsm_number("1 2 3 4 5").unwrap_err();
        assert!(err.message.starts_with("Local phone number too short"));
        assert!(err.message.ends_with("1 2 3 4 5"));
    }

    #[test]
    fn test_gsm_invalid_characters() {
        let err = validate_gsm_number("+90abc1234567").unwrap_err();
        assert_eq!(err.message, "Invalid phone number format: +90abc1234567");

        let err = validate_gsm_number("invalid_phone").unwrap_err();
        assert!(err.message.contains("Invalid phone number format"));
    }

    #[test]
    fn test_gsm_only_special_characters() {
        let err = validate_gsm_number("+++---").unwrap_err();
        assert_eq!(err.message, "Invalid phone number format: +++---");

        let err = validate_gsm_number("- ()").unwrap_err();
        assert!(err.message.contains("Invalid phone number format"));
    }

    #[test]
    fn test_gsm_plus_anywhere_is_kept() {
        assert_eq!(validate_gsm_number("90+5551234").unwrap(), "90+5551234");
    }

    #[test]
    fn test_gsm_idempotent() {
        for phone in ["+90 555 123-45(67)", "0090 555 1234567", "(0555) 123 45 67", "555-123"] {
            let cleaned = validate_gsm_number(phone).unwrap();
            assert_eq!(validate_gsm_number(&cleaned).unwrap(), cleaned);
        }
    }

    #[test]
    fn test_phone_format_classify() {
        assert_eq!(PhoneFormat::classify("+90"), PhoneFormat::International);
        assert_eq!(PhoneFormat::classify("0090"), PhoneFormat::InternationalZeroZero);
        assert_eq!(PhoneFormat::classify("0555"), PhoneFormat::National);
        assert_eq!(PhoneFormat::classify("555"), PhoneFormat::Local);
    }
}
