//! Registered credentials and the rules for adding to them.

use crate::error::RegistrationError;
use crate::validation::{check_cell_phone_number, check_password_complexity, check_username};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message shown after a successful registration.
pub const REGISTERED: &str = "User registered successfully.";

/// Details collected by the registration prompts.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub cell_phone_number: String,
}

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credential {
    pub username: String,

    /// Stored verbatim
    pub password: String,

    /// `+27` and nine digits
    pub cell_phone_number: String,

    pub first_name: String,
    pub last_name: String,

    /// When the user registered
    pub registered_at: DateTime<Utc>,
}

impl Credential {
    fn from_registration(registration: Registration) -> Self {
        Self {
            username: registration.username,
            password: registration.password,
            cell_phone_number: registration.cell_phone_number,
            first_name: registration.first_name,
            last_name: registration.last_name,
            registered_at: Utc::now(),
        }
    }
}

/// Registered credentials in registration order.
///
/// Serializes as a plain JSON array of credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    credentials: Vec<Credential>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            credentials: Vec::new(),
        }
    }

    /// Get a credential by username.
    pub fn get(&self, username: &str) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.username == username)
    }

    /// Check if a username is already taken.
    pub fn contains(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    /// Validate and add a new user.
    ///
    /// Uniqueness is checked first, then username, password and cell number
    /// in that order. The first failing rule is returned.
    pub fn register(
        &mut self,
        registration: Registration,
    ) -> Result<&Credential, RegistrationError> {
        if self.contains(&registration.username) {
            return Err(RegistrationError::UsernameTaken(registration.username));
        }
        if !check_username(&registration.username) {
            return Err(RegistrationError::InvalidUsername);
        }
        if !check_password_complexity(&registration.password) {
            return Err(RegistrationError::InvalidPassword);
        }
        if !check_cell_phone_number(&registration.cell_phone_number) {
            return Err(RegistrationError::InvalidCellPhone);
        }

        self.credentials
            .push(Credential::from_registration(registration));
        Ok(&self.credentials[self.credentials.len() - 1])
    }

    /// Find the credential matching both username and password exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Credential> {
        self.credentials
            .iter()
            .find(|c| c.username == username && c.password == password)
    }

    /// List all credentials.
    pub fn list_all(&self) -> &[Credential] {
        &self.credentials
    }

    /// Get the number of registered users.
    pub fn count(&self) -> usize {
        self.credentials.len()
    }

    /// Remove every registered user.
    pub fn clear(&mut self) {
        self.credentials.clear();
    }
}

/// Text shown after a login attempt.
pub fn login_status(credential: Option<&Credential>) -> String {
    match credential {
        Some(c) => format!(
            "Welcome {}, {} it is great to see you again.",
            c.first_name, c.last_name
        ),
        None => "Username or password incorrect, please try again.".into(),
    }
}
