//! Per-field validators for the transfer and login forms.
//!
//! Every function is pure: it inspects one raw field value and returns
//! `Ok(())` when the value is acceptable or the first failing rule otherwise.
//! Only the email validator trims its input; the other fields are checked
//! exactly as entered.

use crate::error::{
    AmountError, CurrencyError, NameError, PasswordError, TermsError, TextError,
};

pub use crate::email::validate_email;

/// Minimum number of characters in a sender name.
pub const NAME_MIN: usize = 3;

/// Minimum number of characters in a password.
pub const PASSWORD_MIN: usize = 6;

/// Minimum number of characters in a transfer message.
pub const TEXT_MIN: usize = 10;

/// Validates the sender name.
///
/// # Errors
///
/// Returns [`NameError::Required`] for an empty name and
/// [`NameError::TooShort`] when it has fewer than [`NAME_MIN`] characters.
///
/// # Examples
///
/// ```
/// use transfer_form::validate_name;
///
/// assert!(validate_name("Ada").is_ok());
/// assert!(validate_name("Al").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Required);
    }
    if name.chars().count() < NAME_MIN {
        return Err(NameError::TooShort { min: NAME_MIN });
    }
    Ok(())
}

/// Validates a login password.
///
/// # Errors
///
/// Returns [`PasswordError::TooShort`] when the password has fewer than
/// [`PASSWORD_MIN`] characters, including when it is empty.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < PASSWORD_MIN {
        return Err(PasswordError::TooShort { min: PASSWORD_MIN });
    }
    Ok(())
}

/// Validates the transfer amount.
///
/// Any strictly positive amount is accepted. Zero and `NaN` count as a
/// missing amount.
///
/// # Errors
///
/// Returns [`AmountError::Required`] for zero or `NaN` and
/// [`AmountError::NotPositive`] for negative amounts.
///
/// # Examples
///
/// ```
/// use transfer_form::{AmountError, validate_amount};
///
/// assert_eq!(validate_amount(10.0), Ok(()));
/// assert_eq!(validate_amount(0.0), Err(AmountError::Required));
/// assert_eq!(validate_amount(-5.0), Err(AmountError::NotPositive));
/// ```
pub const fn validate_amount(amount: f64) -> Result<(), AmountError> {
    if amount.is_nan() || amount == 0.0 {
        return Err(AmountError::Required);
    }
    if amount < 0.0 {
        return Err(AmountError::NotPositive);
    }
    Ok(())
}

/// Validates the selected currency code.
///
/// # Errors
///
/// Returns [`CurrencyError::Required`] when no currency is selected.
pub const fn validate_currency(currency: &str) -> Result<(), CurrencyError> {
    if currency.is_empty() {
        return Err(CurrencyError::Required);
    }
    Ok(())
}

/// Validates the free-text transfer message.
///
/// # Errors
///
/// Returns [`TextError::Required`] for an empty message and
/// [`TextError::TooShort`] when it has fewer than [`TEXT_MIN`] characters.
pub fn validate_text(text: &str) -> Result<(), TextError> {
    if text.is_empty() {
        return Err(TextError::Required);
    }
    if text.chars().count() < TEXT_MIN {
        return Err(TextError::TooShort { min: TEXT_MIN });
    }
    Ok(())
}

/// Validates that the privacy policy was accepted.
///
/// # Errors
///
/// Returns [`TermsError::NotAccepted`] when `terms` is `false`.
pub const fn validate_terms(terms: bool) -> Result<(), TermsError> {
    if terms {
        Ok(())
    } else {
        Err(TermsError::NotAccepted)
    }
}
