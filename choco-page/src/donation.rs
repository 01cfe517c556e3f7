//! Donation form amount resolution and validation.
//!
//! The page never charges anything; a submission that validates is answered
//! with a thank-you toast and a form reset. What this module owns is the
//! order of the checks and the rule that a custom amount overrides whichever
//! preset button is active.

use crate::email::is_valid_email;
use thiserror::Error;

/// `data-amount` of the preset that is re-activated after a successful
/// submission.
pub const DEFAULT_PRESET_AMOUNT: &str = "100";

/// Snapshot of the donation form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationForm {
    pub name: String,
    pub email: String,
    /// `data-amount` of the active preset button, if any.
    pub preset_amount: Option<String>,
    /// Raw text of the custom-amount field.
    pub custom_amount: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DonationError {
    #[error("name, email, or a positive amount is missing")]
    Incomplete,
    #[error("email does not match the accepted shape")]
    InvalidEmail,
}

/// Validated submission, ready to be acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationReceipt {
    pub donor: String,
    /// Amount exactly as the donor entered or selected it, so the thank-you
    /// message echoes their own text.
    pub amount: String,
}

impl DonationForm {
    /// The amount text that counts: a non-empty custom field beats any
    /// active preset.
    #[must_use]
    pub fn resolved_amount(&self) -> Option<&str> {
        if self.custom_amount.is_empty() {
            self.preset_amount.as_deref()
        } else {
            Some(self.custom_amount.as_str())
        }
    }

    /// Validate the snapshot and produce a receipt.
    ///
    /// Checks run in the page's historical order: presence of name, email,
    /// and a positive amount first, then the email shape.
    ///
    /// # Errors
    ///
    /// [`DonationError::Incomplete`] when name or email is blank or the
    /// amount does not parse to a positive number; [`DonationError::InvalidEmail`]
    /// when the address fails the shared pattern.
    pub fn submit(&self) -> Result<DonationReceipt, DonationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let amount = self.resolved_amount().unwrap_or("").trim();
        let value = amount.parse::<f64>().unwrap_or(0.0);

        // A NaN amount fails the positivity check as well.
        if name.is_empty() || email.is_empty() || !(value > 0.0) {
            return Err(DonationError::Incomplete);
        }
        if !is_valid_email(email) {
            return Err(DonationError::InvalidEmail);
        }

        Ok(DonationReceipt {
            donor: name.to_string(),
            amount: amount.to_string(),
        })
    }
}
