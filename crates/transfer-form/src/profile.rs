//! Named rule sets a form can be validated under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which rule set to apply to a transfer form.
///
/// The two sets disagree on the minimum transfer amount, so neither is
/// treated as canonical: callers pick one explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationProfile {
    /// The per-field validators: any positive amount is accepted.
    #[default]
    Plain,
    /// The schema rule chains: amounts must reach the schema minimum.
    Schema,
}

impl ValidationProfile {
    /// Returns the lowercase profile name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Schema => "schema",
        }
    }
}

impl fmt::Display for ValidationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a profile name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation profile '{value}' (expected 'plain' or 'schema')")]
pub struct UnknownProfile {
    /// The rejected profile name.
    pub value: String,
}

impl FromStr for ValidationProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "schema" => Ok(Self::Schema),
            _ => Err(UnknownProfile {
                value: s.to_owned(),
            }),
        }
    }
}
