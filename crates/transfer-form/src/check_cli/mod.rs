//! CLI support for checking a saved form against the validators.
//!
//! The binary loads [`CheckSettings`], then delegates to [`run_check`] so
//! the whole flow can be exercised in tests without spawning a process.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::info;

use crate::config::CheckSettings;
use crate::error::FormError;
use crate::form::TransferForm;
use crate::login::LoginForm;
use crate::profile::UnknownProfile;

/// Which form a checked file holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormKind {
    /// The money-transfer request form.
    #[default]
    Transfer,
    /// The login form.
    Login,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Transfer => "transfer",
            Self::Login => "login",
        })
    }
}

impl FromStr for FormKind {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transfer" => Ok(Self::Transfer),
            "login" => Ok(Self::Login),
            _ => Err(CheckError::UnknownKind {
                value: s.to_owned(),
            }),
        }
    }
}

/// Outcome of checking one form file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Whether the form would be accepted on submit.
    pub valid: bool,
    /// The per-field error object, rendered as pretty JSON.
    pub errors_json: String,
}

/// Loads the configured form file and validates it.
///
/// # Errors
///
/// Returns [`CheckError`] when the settings are incomplete or the form file
/// cannot be loaded. An invalid form is not an error; it is reported through
/// [`CheckReport::valid`].
///
/// # Example
///
/// ```
/// use std::time::{SystemTime, UNIX_EPOCH};
///
/// use transfer_form::CheckSettings;
/// use transfer_form::check_cli::run_check;
///
/// let suffix = SystemTime::now()
///     .duration_since(UNIX_EPOCH)
///     .map(|elapsed| elapsed.as_nanos())
///     .unwrap_or(0);
/// let path = std::env::temp_dir().join(format!("transfer-form-check-{suffix}.json"));
/// std::fs::write(&path, r#"{"name": "Al", "terms": false}"#).expect("write form");
///
/// let settings = CheckSettings {
///     form_path: Some(path.clone()),
///     profile: "plain".to_owned(),
///     kind: "transfer".to_owned(),
/// };
/// let report = run_check(&settings).expect("check runs");
///
/// assert!(!report.valid);
/// assert!(report.errors_json.contains("\"name\""));
/// std::fs::remove_file(&path).expect("clean up");
/// ```
pub fn run_check(settings: &CheckSettings) -> Result<CheckReport, CheckError> {
    let path = settings.form_path()?;
    let kind = settings.kind()?;

    let (valid, errors_json) = match kind {
        FormKind::Transfer => {
            let profile = settings.profile()?;
            let form = TransferForm::from_file(path)?;
            let errors = form.validate(profile);
            info!(%kind, %profile, failed = errors.iter().count(), "form checked");
            (form.is_valid(profile), render(&errors)?)
        }
        FormKind::Login => {
            let form = LoginForm::from_file(path)?;
            let errors = form.validate();
            info!(%kind, valid = errors.is_empty(), "form checked");
            (errors.is_empty(), render(&errors)?)
        }
    };

    Ok(CheckReport { valid, errors_json })
}

fn render<T: serde::Serialize>(errors: &T) -> Result<String, CheckError> {
    serde_json::to_string_pretty(errors).map_err(|e| CheckError::Render {
        message: e.to_string(),
    })
}

/// Errors surfaced by the checker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
    /// No form path was supplied.
    #[error("missing required setting: --form-path (or TRANSFER_FORM_FORM_PATH)")]
    MissingFormPath,
    /// The profile name was not recognised.
    #[error(transparent)]
    Profile(#[from] UnknownProfile),
    /// The form kind was not recognised.
    #[error("unknown form kind '{value}' (expected 'transfer' or 'login')")]
    UnknownKind {
        /// Kind value that was not recognised.
        value: String,
    },
    /// The form file could not be loaded.
    #[error("form error: {source}")]
    Form {
        /// Underlying form loading error.
        #[from]
        #[source]
        source: FormError,
    },
    /// The error object could not be rendered.
    #[error("failed to render errors: {message}")]
    Render {
        /// Serializer error message.
        message: String,
    },
}
