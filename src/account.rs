//! Account profile management.
//!
//! Validation depth matches the product's screens: the display name must
//! not be blank and the email must look like an email. Nothing deeper is
//! enforced client-side.

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};

/// An account holder's profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown across the workspace.
    pub display_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Mailing address.
    pub address: Option<String>,
}

impl Profile {
    /// Creates a profile with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::ProfileError`] for a blank display name or
    /// a malformed email.
    pub fn new<N: Into<String>, E: Into<String>>(display_name: N, email: E) -> Result<Self> {
        let mut profile = Self::default();
        profile.set_display_name(display_name)?;
        profile.set_email(email)?;
        Ok(profile)
    }

    /// Updates the display name.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::ProfileError`] for a blank name.
    pub fn set_display_name<S: Into<String>>(&mut self, display_name: S) -> Result<()> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(PlatformError::ProfileError("display name cannot be blank".into()));
        }
        self.display_name = display_name;
        Ok(())
    }

    /// Updates the contact email.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::ProfileError`] if the address has no `@`.
    pub fn set_email<S: Into<String>>(&mut self, email: S) -> Result<()> {
        let email = email.into();
        if !email.contains('@') {
            return Err(PlatformError::ProfileError(format!("not an email address: {email}")));
        }
        self.email = email;
        Ok(())
    }

    /// Updates the contact phone number.
    pub fn set_phone<S: Into<String>>(&mut self, phone: S) {
        self.phone = Some(phone.into());
    }

    /// Updates the mailing address.
    pub fn set_address<S: Into<String>>(&mut self, address: S) {
        self.address = Some(address.into());
    }
}
