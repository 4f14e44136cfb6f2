//! QuickChat account registry.
//!
//! Validates registration details, keeps the registered credentials and
//! checks login attempts against them. Passwords are kept verbatim.

pub mod accounts;
pub mod error;
pub mod registry;
pub mod validation;

pub use accounts::Accounts;
pub use error::RegistrationError;
pub use registry::{login_status, Credential, Registration, Registry, REGISTERED};
pub use validation::{check_cell_phone_number, check_password_complexity, check_username};
