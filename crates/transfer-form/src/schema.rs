//! Schema rule chains for the transfer form.
//!
//! These mirror the declarative per-field schema used by the library-backed
//! form variants. Each rule in a chain is one guard clause, evaluated in
//! declaration order. The rules differ from the plain validators in three
//! places: names accept two to fifty characters, amounts must reach
//! [`AMOUNT_MIN`], and the message is optional: an empty value is treated as
//! absent and skips the length rule.

use crate::error::{AmountError, EmailError, NameError, TextError};

pub use crate::validation::{validate_currency, validate_terms};

/// Minimum number of characters in a sender name.
pub const NAME_MIN: usize = 2;

/// Maximum number of characters in a sender name.
pub const NAME_MAX: usize = 50;

/// Smallest transfer amount accepted.
pub const AMOUNT_MIN: f64 = 10.0;

/// Minimum number of characters in a transfer message.
pub const TEXT_MIN: usize = 10;

/// Validates the sender name against the schema bounds.
///
/// # Errors
///
/// Returns [`NameError::Required`] for an empty name, then
/// [`NameError::TooShort`] or [`NameError::TooLong`] outside
/// [`NAME_MIN`]..=[`NAME_MAX`] characters.
///
/// # Examples
///
/// ```
/// use transfer_form::schema;
///
/// assert!(schema::validate_name("Al").is_ok());
/// assert!(schema::validate_name(&"x".repeat(51)).is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Required);
    }
    let length = name.chars().count();
    if length < NAME_MIN {
        return Err(NameError::TooShort { min: NAME_MIN });
    }
    if length > NAME_MAX {
        return Err(NameError::TooLong { max: NAME_MAX });
    }
    Ok(())
}

/// Validates the email address.
///
/// The schema only adds a required rule in front of the plain email check;
/// an untrimmed empty value is reported as required before any zone check.
///
/// # Errors
///
/// Returns [`EmailError::Required`] for an empty value, otherwise whatever
/// [`crate::validate_email`] reports.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Required);
    }
    crate::email::validate_email(email)
}

/// Validates the transfer amount against [`AMOUNT_MIN`].
///
/// # Errors
///
/// Returns [`AmountError::Required`] for `NaN` and
/// [`AmountError::BelowMinimum`] for anything under [`AMOUNT_MIN`],
/// including zero and negative amounts.
///
/// # Examples
///
/// ```
/// use transfer_form::{AmountError, schema};
///
/// assert_eq!(schema::validate_amount(10.0), Ok(()));
/// assert_eq!(
///     schema::validate_amount(9.99),
///     Err(AmountError::BelowMinimum { min: schema::AMOUNT_MIN })
/// );
/// ```
pub const fn validate_amount(amount: f64) -> Result<(), AmountError> {
    if amount.is_nan() {
        return Err(AmountError::Required);
    }
    if amount < AMOUNT_MIN {
        return Err(AmountError::BelowMinimum { min: AMOUNT_MIN });
    }
    Ok(())
}

/// Validates the transfer message length.
///
/// The message is optional, so an empty value passes.
///
/// # Errors
///
/// Returns [`TextError::TooShort`] when a non-empty message has fewer than
/// [`TEXT_MIN`] characters.
///
/// # Examples
///
/// ```
/// use transfer_form::schema;
///
/// assert!(schema::validate_text("").is_ok());
/// assert!(schema::validate_text("short").is_err());
/// ```
pub fn validate_text(text: &str) -> Result<(), TextError> {
    if text.is_empty() {
        return Ok(());
    }
    if text.chars().count() < TEXT_MIN {
        return Err(TextError::TooShort { min: TEXT_MIN });
    }
    Ok(())
}
