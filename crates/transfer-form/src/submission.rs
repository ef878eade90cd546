//! Submission of validated forms.
//!
//! Submitting re-runs validation and, when the form passes, records the
//! submitted values as a structured log event. Nothing is sent anywhere.

use thiserror::Error;
use tracing::{debug, info};

use crate::form::{TransferForm, TransferFormErrors};
use crate::login::{LoginForm, LoginFormErrors};
use crate::profile::ValidationProfile;

/// Errors returned when a form cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The transfer form failed validation or the terms were not accepted.
    #[error("transfer form is invalid ({} field(s) failed)", .errors.iter().count())]
    TransferRejected {
        /// Messages for the failing fields.
        errors: TransferFormErrors,
    },
    /// The login form failed validation.
    #[error("login form is invalid")]
    LoginRejected {
        /// Messages for the failing fields.
        errors: LoginFormErrors,
    },
}

/// A transfer request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedTransfer {
    /// The accepted values.
    pub form: TransferForm,
    /// Rule set the values were accepted under.
    pub profile: ValidationProfile,
}

/// Validates and submits a transfer request.
///
/// # Errors
///
/// Returns [`SubmissionError::TransferRejected`] when any field fails under
/// `profile` or the terms were not accepted.
///
/// # Example
///
/// ```
/// use transfer_form::{SubmissionError, TransferForm, ValidationProfile, submit_transfer};
///
/// let err = submit_transfer(&TransferForm::default(), ValidationProfile::Plain)
///     .expect_err("blank form is rejected");
/// assert!(matches!(err, SubmissionError::TransferRejected { .. }));
/// ```
pub fn submit_transfer(
    form: &TransferForm,
    profile: ValidationProfile,
) -> Result<SubmittedTransfer, SubmissionError> {
    let errors = form.validate(profile);
    if !errors.is_empty() || !form.terms {
        debug!(%profile, failed = errors.iter().count(), "transfer submission rejected");
        return Err(SubmissionError::TransferRejected { errors });
    }

    info!(%profile, form = ?form, "transfer submitted");

    Ok(SubmittedTransfer {
        form: form.clone(),
        profile,
    })
}

/// Validates and submits a login attempt.
///
/// The password is never written to the log.
///
/// # Errors
///
/// Returns [`SubmissionError::LoginRejected`] when either field fails.
pub fn submit_login(form: &LoginForm) -> Result<(), SubmissionError> {
    let errors = form.validate();
    if !errors.is_empty() {
        debug!("login submission rejected");
        return Err(SubmissionError::LoginRejected { errors });
    }

    info!(
        email = %form.email,
        remember_me = form.remember_me,
        "login submitted"
    );
    Ok(())
}
