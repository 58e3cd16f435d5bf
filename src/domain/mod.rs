//! Field validators
//!
//! Every classifier is total: any input, including the empty string, maps
//! to exactly one result and nothing here can fail.

pub mod email;
pub mod password;
mod policy;
pub mod username;

pub use email::EmailValidity;
pub use password::{PasswordConfirmValidity, PasswordValidity};
pub use policy::{LengthBound, PasswordPolicy, UsernamePolicy, PASSWORD_LENGTH, USERNAME_LENGTH};
pub use username::UsernameValidity;
