//! Newsletter signup validation.

use crate::email::is_valid_email;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeError {
    #[error("email does not match the accepted shape")]
    InvalidEmail,
}

/// Accepted signup; nothing is sent anywhere, the page only acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub email: String,
}

/// Validate a signup attempt, trimming the address first.
///
/// # Errors
///
/// [`SubscribeError::InvalidEmail`] when the trimmed address fails the
/// shared email pattern.
pub fn subscribe(raw_email: &str) -> Result<Subscription, SubscribeError> {
    let email = raw_email.trim();
    if !is_valid_email(email) {
        return Err(SubscribeError::InvalidEmail);
    }
    Ok(Subscription {
        email: email.to_string(),
    })
}
