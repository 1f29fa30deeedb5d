use std::sync::OnceLock;

use regex::Regex;

use crate::error::UidError;

pub const MIN_UID_LEN: usize = 8;

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("static regex"))
}

/// Checks that a uid is present, all ASCII digits, and at least `MIN_UID_LEN` long.
///
/// Only `0-9` count as digits: numerals from other scripts (Arabic-Indic,
/// fullwidth, ...) are rejected with `UidError::NotDigits` rather than
/// forwarded to the upstream APIs.
pub fn validate_uid(uid: &str) -> Result<(), UidError> {
    if uid.is_empty() {
        return Err(UidError::Missing);
    }
    if !digits_re().is_match(uid) {
        return Err(UidError::NotDigits);
    }
    if uid.len() < MIN_UID_LEN {
        return Err(UidError::TooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_long_digit_strings() {
        assert_eq!(validate_uid("12345678"), Ok(()));
        assert_eq!(validate_uid("1234567890"), Ok(()));
    }

    #[test]
    fn empty_is_missing() {
        assert_eq!(validate_uid(""), Err(UidError::Missing));
    }

    #[test]
    fn non_digits_rejected_before_length() {
        assert_eq!(validate_uid("abc"), Err(UidError::NotDigits));
        assert_eq!(validate_uid("12345678x"), Err(UidError::NotDigits));
        assert_eq!(validate_uid("-12345678"), Err(UidError::NotDigits));
        assert_eq!(validate_uid("1234 5678"), Err(UidError::NotDigits));
        assert_eq!(validate_uid("١٢٣٤٥٦٧٨"), Err(UidError::NotDigits));
        assert_eq!(validate_uid("１２３４５６７８"), Err(UidError::NotDigits));
    }

    #[test]
    fn short_digit_strings() {
        assert_eq!(validate_uid("1"), Err(UidError::TooShort));
        assert_eq!(validate_uid("1234567"), Err(UidError::TooShort));
    }
}
