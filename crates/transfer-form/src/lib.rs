//! Field validation for a money-transfer request form and its login form.
//!
//! Every validator is a pure function from one raw field value to either
//! `Ok(())` or the first rule the value breaks. The error's `Display` output
//! is the message to show beside the field. Two rule sets exist for the
//! transfer form and disagree on the minimum amount, so whole-form checks
//! take an explicit [`ValidationProfile`].
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Per-field validators for name, email, password, amount, currency,
//!   message text and terms acceptance
//! - The schema rule chains in [`schema`]
//! - Loading forms from JSON and collecting per-field messages
//! - Submitting valid forms, which records the values as a log event
//! - A `transfer-form-check` binary configured through OrthoConfig
//!
//! # Example
//!
//! ```
//! use transfer_form::{TransferForm, ValidationProfile, validate_email};
//!
//! assert!(validate_email("  a@b.com  ").is_ok());
//!
//! let json = r#"{"name": "Al", "email": "al@test", "amount": 5, "terms": false}"#;
//! let form = TransferForm::from_json(json).expect("valid form JSON");
//! let errors = form.validate(ValidationProfile::Plain);
//!
//! assert!(errors.name.is_some());
//! assert!(errors.amount.is_none());
//! assert!(!form.is_valid(ValidationProfile::Plain));
//! ```

pub mod check_cli;
mod config;
mod email;
mod error;
mod form;
mod login;
mod profile;
pub mod schema;
mod submission;
mod validation;

pub use config::CheckSettings;
pub use email::{DOMAIN_PART_MAX, EmailParts, LOCAL_PART_MAX, validate_email};
pub use error::{
    AmountError, CurrencyError, EmailError, FormError, NameError, PasswordError, TermsError,
    TextError,
};
pub use form::{TransferForm, TransferFormErrors};
pub use login::{LoginFieldError, LoginForm, LoginFormErrors};
pub use profile::{UnknownProfile, ValidationProfile};
pub use submission::{SubmissionError, SubmittedTransfer, submit_login, submit_transfer};
pub use validation::{
    NAME_MIN, PASSWORD_MIN, TEXT_MIN, validate_amount, validate_currency, validate_name,
    validate_password, validate_terms, validate_text,
};
