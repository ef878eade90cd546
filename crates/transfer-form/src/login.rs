//! Login form values and validation.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::FormError;
use crate::form::message;
use crate::validation::{validate_email, validate_password};

/// Missing-value failures specific to the login form.
///
/// The login page reports an absent email or password with its own wording
/// before falling through to the shared field validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginFieldError {
    /// No email was entered.
    #[error("Email is required")]
    EmailRequired,
    /// No password was entered.
    #[error("Password is required")]
    PasswordRequired,
}

/// Raw values of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Whether the session should persist. Not validated.
    pub remember_me: bool,
}

impl LoginForm {
    /// Parses login values from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Parse`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|e| FormError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads login values from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, FormError> {
        let contents = fs::read_to_string(path).map_err(|e| FormError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Validates the email and password fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use transfer_form::LoginForm;
    ///
    /// let form = LoginForm {
    ///     email: "ada@example.com".to_owned(),
    ///     password: "abc".to_owned(),
    ///     remember_me: false,
    /// };
    /// let errors = form.validate();
    ///
    /// assert!(errors.email.is_none());
    /// assert_eq!(
    ///     errors.password.as_deref(),
    ///     Some("password must be at least 6 characters long")
    /// );
    /// ```
    #[must_use]
    pub fn validate(&self) -> LoginFormErrors {
        let email = if self.email.is_empty() {
            Some(LoginFieldError::EmailRequired.to_string())
        } else {
            message(validate_email(&self.email))
        };
        let password = if self.password.is_empty() {
            Some(LoginFieldError::PasswordRequired.to_string())
        } else {
            message(validate_password(&self.password))
        };
        LoginFormErrors { email, password }
    }

    /// Returns `true` when neither field has a message.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Per-field messages produced by [`LoginForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFormErrors {
    /// Message for the email field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Message for the password field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl LoginFormErrors {
    /// Returns `true` when no field has a message.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
