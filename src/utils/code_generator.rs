//! Short code synthesis and custom alias validation.
//!
//! These helpers never touch storage. Collision handling lives in
//! [`crate::application::services::CodeGenerator`].

use crate::error::AppError;
use rand::Rng;

/// Characters used for generated codes (base 36, lowercase).
pub const CODE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest custom alias accepted.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Words that cannot be used as short codes because they shadow routes.
const RESERVED_CODES: &[&str] = &["api", "health"];

/// Generates a random code of `length` base-36 characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
        .collect()
}

/// Validates a user-provided alias and returns it trimmed.
///
/// # Rules
///
/// - Non-empty after trimming surrounding whitespace
/// - At most [`MAX_ALIAS_LENGTH`] characters
/// - ASCII letters and digits only
/// - Not a reserved route word (case-insensitive)
///
/// # Errors
///
/// Returns [`AppError::InvalidAlias`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<&str, AppError> {
    let trimmed = alias.trim();

    if trimmed.is_empty() {
        return Err(AppError::invalid_alias(alias, "alias must not be blank"));
    }

    if trimmed.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::invalid_alias(
            trimmed,
            "alias must be at most 64 characters",
        ));
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::invalid_alias(
            trimmed,
            "alias may only contain letters and digits",
        ));
    }

    if RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(trimmed))
    {
        return Err(AppError::invalid_alias(trimmed, "alias is reserved"));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 6);
        assert_eq!(generate_code(12).len(), 12);
    }

    #[test]
    fn test_generate_code_uses_alphabet() {
        let code = generate_code(64);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generate_code_varies() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code(8)).collect();
        assert!(codes.len() > 95);
    }

    #[test]
    fn test_validate_simple_alias() {
        assert_eq!(validate_custom_alias("promo").unwrap(), "promo");
    }

    #[test]
    fn test_validate_mixed_case_and_digits() {
        assert_eq!(validate_custom_alias("Sale2026").unwrap(), "Sale2026");
    }

    #[test]
    fn test_validate_short_and_long_aliases() {
        assert_eq!(validate_custom_alias("go").unwrap(), "go");
        assert!(validate_custom_alias(&"a".repeat(MAX_ALIAS_LENGTH)).is_ok());
    }

    #[test]
    fn test_validate_trims_whitespace() {
        assert_eq!(validate_custom_alias("  promo \n").unwrap(), "promo");
    }

    #[test]
    fn test_validate_blank() {
        let err = validate_custom_alias("   ").unwrap_err();
        assert!(matches!(err, AppError::InvalidAlias { .. }));
        assert!(err.to_string().contains("blank"));
    }

    #[test]
    fn test_validate_too_long() {
        let alias = "a".repeat(MAX_ALIAS_LENGTH + 1);
        assert!(validate_custom_alias(&alias).is_err());

        let alias = "a".repeat(MAX_ALIAS_LENGTH);
        assert!(validate_custom_alias(&alias).is_ok());
    }

    #[test]
    fn test_validate_rejects_symbols() {
        assert!(validate_custom_alias("my-link").is_err());
        assert!(validate_custom_alias("my_link").is_err());
        assert!(validate_custom_alias("a/b").is_err());
        assert!(validate_custom_alias("my link").is_err());
    }

    #[test]
    fn test_validate_rejects_non_ascii() {
        assert!(validate_custom_alias("café").is_err());
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_alias(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
        assert!(validate_custom_alias("HEALTH").is_err());
    }
}
