//! Form checker configuration loaded via OrthoConfig.
//!
//! Values are layered from configuration files, `TRANSFER_FORM_*` environment
//! variables and command-line flags. Profile and form kind stay as raw
//! strings here, defaulting to `plain` and `transfer`, and are parsed on
//! access so a bad value surfaces as a [`CheckError`] rather than a loader
//! failure.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::check_cli::{CheckError, FormKind};
use crate::profile::ValidationProfile;

/// Default rule set name.
pub const DEFAULT_PROFILE: &str = "plain";

/// Default form kind name.
pub const DEFAULT_KIND: &str = "transfer";

/// Settings for the `transfer-form-check` binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TRANSFER_FORM")]
pub struct CheckSettings {
    /// Path to the JSON file holding the form values.
    pub form_path: Option<PathBuf>,
    /// Rule set to validate under: `plain` or `schema`.
    #[ortho_config(default = "plain".to_owned())]
    pub profile: String,
    /// Which form the file holds: `transfer` or `login`.
    #[ortho_config(default = "transfer".to_owned())]
    pub kind: String,
}

impl CheckSettings {
    /// Return the configured form path.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::MissingFormPath`] when no path was supplied.
    pub fn form_path(&self) -> Result<&Path, CheckError> {
        self.form_path
            .as_deref()
            .ok_or(CheckError::MissingFormPath)
    }

    /// Return the configured profile.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Profile`] for an unrecognised profile name.
    pub fn profile(&self) -> Result<ValidationProfile, CheckError> {
        Ok(self.profile.parse::<ValidationProfile>()?)
    }

    /// Return the configured form kind.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::UnknownKind`] for an unrecognised kind.
    pub fn kind(&self) -> Result<FormKind, CheckError> {
        self.kind.parse()
    }
}
