//! Guest contact details for a booking

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Contact details collected on the booking form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuestDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub party_size: u32,
    pub notes: String,
}

impl GuestDetails {
    /// Names of required contact fields that are empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.phone.trim().is_empty() {
            missing.push("phone");
        }
        missing
    }

    /// Validate required fields and party size.
    ///
    /// Failures are user-dismissible form notices, not fatal errors.
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
        }
        if self.party_size == 0 {
            return Err(Error::Validation(
                "Party size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
