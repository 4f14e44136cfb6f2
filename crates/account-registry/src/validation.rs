//! Credential format checks.
//!
//! These are purely syntactic: a username of `"_"` passes, for example.
//! Lengths are counted in characters, not bytes.

use regex::Regex;
use std::sync::LazyLock;

/// Longest accepted username.
pub const MAX_USERNAME_LENGTH: usize = 5;

/// Shortest accepted password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters that satisfy the password's special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// South African numbers only: `+27` and nine digits.
static CELL_PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+27[0-9]{9}$").expect("cell phone pattern is valid"));

/// Username must be non-empty, contain `_` and be at most five characters.
pub fn check_username(username: &str) -> bool {
    !username.is_empty()
        && username.contains('_')
        && username.chars().count() <= MAX_USERNAME_LENGTH
}

/// Password needs eight characters, a capital letter, a digit and a special character.
pub fn check_password_complexity(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(char::is_uppercase)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Cell number must be `+27` followed by exactly nine digits.
pub fn check_cell_phone_number(number: &str) -> bool {
    CELL_PHONE_PATTERN.is_match(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_correctly_formatted() {
        assert!(check_username("kyl_1"));
        assert!(check_username("_"));
        assert!(check_username("__1__"));
    }

    #[test]
    fn test_username_incorrectly_formatted() {
        assert!(!check_username("kyle!!!!!!!"));
        assert!(!check_username("kyle"));
        assert!(!check_username("user_name"));
        assert!(!check_username(""));
    }

    #[test]
    fn test_username_length_counts_characters() {
        // Five characters, more than five bytes
        assert!(check_username("é_éé1"));
        assert!(!check_username("é_éééé"));
    }

    #[test]
    fn test_password_meets_complexity_requirements() {
        assert!(check_password_complexity("Ch&&sec@ke99!"));
        assert!(check_password_complexity("Abcdef1?"));
    }

    #[test]
    fn test_password_fails_each_rule() {
        assert!(!check_password_complexity("password"));
        assert!(!check_password_complexity("Ab1!"));
        assert!(!check_password_complexity("password123!"));
        assert!(!check_password_complexity("Password!"));
        assert!(!check_password_complexity("Password123"));
        assert!(!check_password_complexity(""));
    }

    #[test]
    fn test_password_special_character_set() {
        for special in SPECIAL_CHARACTERS.chars() {
            let password = format!("Abcdef1{}", special);
            assert!(check_password_complexity(&password), "{password}");
        }
        // Not in the set
        assert!(!check_password_complexity("Abcdef1~"));
        assert!(!check_password_complexity("Abcdef1 "));
    }

    #[test]
    fn test_cell_phone_correctly_formatted() {
        assert!(check_cell_phone_number("+27838968976"));
        assert!(check_cell_phone_number("+27000000000"));
    }

    #[test]
    fn test_cell_phone_incorrectly_formatted() {
        assert!(!check_cell_phone_number("08966553"));
        assert!(!check_cell_phone_number("0838968976"));
        assert!(!check_cell_phone_number("+2783896897612345"));
        assert!(!check_cell_phone_number("+2783896897"));
        assert!(!check_cell_phone_number("27838968976"));
        assert!(!check_cell_phone_number("+14155551234"));
        assert!(!check_cell_phone_number("+27 838968976"));
        assert!(!check_cell_phone_number(""));
    }
}
