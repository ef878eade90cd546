//! Error types for the transfer-form crate.
//!
//! Field-level failures are plain values: each enum's `Display` output is the
//! message shown next to the offending field. Loading failures are kept
//! separate so callers can tell a bad form apart from a bad file.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by the name validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    /// The name is empty.
    #[error("this field is required")]
    Required,
    /// The name has fewer characters than allowed.
    #[error("name must be at least {min} characters")]
    TooShort {
        /// Minimum character count.
        min: usize,
    },
    /// The name has more characters than allowed.
    #[error("name must be at most {max} characters")]
    TooLong {
        /// Maximum character count.
        max: usize,
    },
}

/// Failures reported by the email validator, most general first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    /// The trimmed address is empty.
    #[error("this field is required")]
    Required,
    /// The address has no `@`.
    #[error("email must contain the @ symbol")]
    MissingAt,
    /// Nothing precedes the `@`.
    #[error("enter the part of the email before the @ symbol")]
    EmptyLocalPart,
    /// The local-part exceeds its length limit.
    #[error("the part before @ is too long (maximum {max} characters)")]
    LocalPartTooLong {
        /// Maximum local-part length.
        max: usize,
    },
    /// The local-part contains characters outside `[A-Za-z0-9._%+-]`.
    #[error("the part before @ contains invalid characters")]
    LocalPartInvalidCharacters,
    /// Nothing follows the `@`.
    #[error("enter the domain after the @ symbol")]
    EmptyDomain,
    /// The domain-part exceeds its length limit.
    #[error("the domain is too long (maximum {max} characters)")]
    DomainTooLong {
        /// Maximum domain-part length.
        max: usize,
    },
    /// The domain-part has no dot.
    #[error("the domain must contain a dot (for example, example.com)")]
    DomainMissingDot,
    /// The domain-part ends with a dot.
    #[error("the domain cannot end with a dot")]
    DomainTrailingDot,
    /// The domain-part contains characters outside `[A-Za-z0-9.-]`.
    #[error("the domain contains invalid characters")]
    DomainInvalidCharacters,
    /// The address passed every zone check but not the overall pattern.
    #[error("invalid email address")]
    Invalid,
}

/// Failures reported by the password validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// The password is shorter than allowed.
    #[error("password must be at least {min} characters long")]
    TooShort {
        /// Minimum character count.
        min: usize,
    },
}

/// Failures reported by the amount validators.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AmountError {
    /// No amount was entered (zero or not a number).
    #[error("enter the transfer amount")]
    Required,
    /// The amount is negative.
    #[error("amount must be greater than zero")]
    NotPositive,
    /// The amount is below the schema minimum.
    #[error("amount must be at least {min}")]
    BelowMinimum {
        /// Smallest accepted amount.
        min: f64,
    },
}

/// Failures reported by the currency validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// No currency was chosen.
    #[error("choose a currency")]
    Required,
}

/// Failures reported by the message text validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TextError {
    /// The message is empty.
    #[error("enter a message")]
    Required,
    /// The message is shorter than allowed.
    #[error("message must contain at least {min} characters")]
    TooShort {
        /// Minimum character count.
        min: usize,
    },
}

/// Failures reported by the terms validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TermsError {
    /// The privacy policy checkbox is unticked.
    #[error("you must accept the privacy policy")]
    NotAccepted,
}

/// Errors raised while loading a form from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The form file could not be read.
    #[error("failed to read form file at '{path}': {message}")]
    Io {
        /// Path to the form file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The form JSON is malformed or holds values of the wrong type.
    #[error("invalid form JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
}
