//! Registration failures.

use thiserror::Error;

/// Why a registration was refused.
///
/// The display text is shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Username already exists, please choose a different username.")]
    UsernameTaken(String),

    #[error("Username is not correctly formatted, please ensure that your username contains an underscore and is no more than five characters in length.")]
    InvalidUsername,

    #[error("Password is not correctly formatted, please ensure that the password contains at least eight characters, a capital letter, a number, and a special character.")]
    InvalidPassword,

    #[error("Cell phone number incorrectly formatted or does not contain international code.")]
    InvalidCellPhone,
}
