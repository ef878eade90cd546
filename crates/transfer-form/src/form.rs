//! Transfer request form values and whole-form validation.
//!
//! A [`TransferForm`] is loaded from camelCase JSON, with every missing field
//! falling back to the blank initial value an untouched form shows. Running
//! [`TransferForm::validate`] applies one [`ValidationProfile`] to every field
//! and collects the messages into [`TransferFormErrors`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::profile::ValidationProfile;
use crate::{schema, validation};

/// Raw values of the money-transfer request form.
///
/// # Example
///
/// ```
/// use transfer_form::{TransferForm, ValidationProfile};
///
/// let json = r#"{
///     "name": "Ada Lovelace",
///     "email": "ada@example.com",
///     "amount": 25,
///     "currency": "EUR",
///     "text": "Rent for October",
///     "terms": true
/// }"#;
///
/// let form = TransferForm::from_json(json).expect("valid form JSON");
/// assert!(form.is_valid(ValidationProfile::Plain));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferForm {
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Amount to transfer.
    pub amount: f64,
    /// Selected currency code.
    pub currency: String,
    /// Message attached to the transfer.
    pub text: String,
    /// Whether the privacy policy was accepted.
    pub terms: bool,
}

impl TransferForm {
    /// Parses form values from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Parse`] if the JSON is malformed or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|e| FormError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads form values from a JSON file.
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

    /// Runs every field validator of `profile`.
    #[must_use]
    pub fn validate(&self, profile: ValidationProfile) -> TransferFormErrors {
        match profile {
            ValidationProfile::Plain => TransferFormErrors {
                name: message(validation::validate_name(&self.name)),
                email: message(validation::validate_email(&self.email)),
                amount: message(validation::validate_amount(self.amount)),
                currency: message(validation::validate_currency(&self.currency)),
                text: message(validation::validate_text(&self.text)),
                terms: message(validation::validate_terms(self.terms)),
            },
            ValidationProfile::Schema => TransferFormErrors {
                name: message(schema::validate_name(&self.name)),
                email: message(schema::validate_email(&self.email)),
                amount: message(schema::validate_amount(self.amount)),
                currency: message(schema::validate_currency(&self.currency)),
                text: message(schema::validate_text(&self.text)),
                terms: message(schema::validate_terms(self.terms)),
            },
        }
    }

    /// Returns `true` when no field fails under `profile` and the terms were
    /// accepted.
    #[must_use]
    pub fn is_valid(&self, profile: ValidationProfile) -> bool {
        self.validate(profile).is_empty() && self.terms
    }
}

/// Per-field messages produced by [`TransferForm::validate`].
///
/// Serialises to a JSON object holding only the failing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferFormErrors {
    /// Message for the name field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Message for the email field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Message for the amount field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// Message for the currency field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Message for the text field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Message for the terms checkbox.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
}

impl TransferFormErrors {
    /// Returns `true` when no field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().all(|(_, msg)| msg.is_none())
    }

    /// Iterates over the failing fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields()
            .filter_map(|(field, msg)| msg.map(|text| (field, text)))
    }

    fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> {
        [
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("amount", self.amount.as_deref()),
            ("currency", self.currency.as_deref()),
            ("text", self.text.as_deref()),
            ("terms", self.terms.as_deref()),
        ]
        .into_iter()
    }
}

pub(crate) fn message<E: ToString>(outcome: Result<(), E>) -> Option<String> {
    outcome.err().map(|err| err.to_string())
}
