//! Email address validation.
//!
//! An address is checked in three zones: the whole string, the local-part
//! (before the first `@`) and the domain-part (after it). Checks run from the
//! most general to the most specific so the caller receives the first
//! concrete problem rather than a blanket rejection.
//!
//! # Validation Rules
//!
//! - Leading and trailing whitespace is ignored
//! - Local-part: 1 to 64 characters from `[A-Za-z0-9._%+-]`
//! - Domain-part: 1 to 253 characters from `[A-Za-z0-9.-]`, containing a dot
//!   and not ending with one
//! - Whole address: `local@domain.tld` with a 2 to 4 letter TLD

use std::sync::OnceLock;

use regex::Regex;

use crate::error::EmailError;

/// Maximum allowed length of the local-part.
pub const LOCAL_PART_MAX: usize = 64;

/// Maximum allowed length of the domain-part.
pub const DOMAIN_PART_MAX: usize = 253;

static LOCAL_PART_RE: OnceLock<Regex> = OnceLock::new();
static DOMAIN_PART_RE: OnceLock<Regex> = OnceLock::new();
static ADDRESS_RE: OnceLock<Regex> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|error| panic!("email regex '{pattern}' failed to compile: {error}"))
}

fn local_part_regex() -> &'static Regex {
    LOCAL_PART_RE.get_or_init(|| compile("^[A-Za-z0-9._%+-]+$"))
}

fn domain_part_regex() -> &'static Regex {
    DOMAIN_PART_RE.get_or_init(|| compile("^[A-Za-z0-9.-]+$"))
}

fn address_regex() -> &'static Regex {
    ADDRESS_RE.get_or_init(|| compile(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,4}$"))
}

/// The two halves of an address either side of the first `@`.
///
/// The domain-part stops at a second `@` if one is present; the overall
/// pattern check rejects such addresses later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailParts<'a> {
    /// Text before the first `@`.
    pub local: &'a str,
    /// Text after the first `@`, up to any further `@`.
    pub domain: &'a str,
}

impl<'a> EmailParts<'a> {
    /// Splits an address on its first `@`.
    ///
    /// Returns `None` when the address has no `@`.
    ///
    /// # Examples
    ///
    /// ```
    /// use transfer_form::EmailParts;
    ///
    /// let parts = EmailParts::split("ada@example.com").expect("has @");
    /// assert_eq!(parts.local, "ada");
    /// assert_eq!(parts.domain, "example.com");
    /// assert!(EmailParts::split("ada.example.com").is_none());
    /// ```
    #[must_use]
    pub fn split(address: &'a str) -> Option<Self> {
        let (local, rest) = address.split_once('@')?;
        let domain = rest.split('@').next().unwrap_or(rest);
        Some(Self { local, domain })
    }
}

/// Validates an email address, reporting the most specific failure.
///
/// # Errors
///
/// Returns the first [`EmailError`] whose check fails, in the order listed in
/// the module documentation.
///
/// # Examples
///
/// ```
/// use transfer_form::{EmailError, validate_email};
///
/// assert_eq!(validate_email("  ada@example.com "), Ok(()));
/// assert_eq!(validate_email("ada.example.com"), Err(EmailError::MissingAt));
/// assert_eq!(validate_email("ada@"), Err(EmailError::EmptyDomain));
/// ```
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    let address = email.trim();
    if address.is_empty() {
        return Err(EmailError::Required);
    }
    let parts = EmailParts::split(address).ok_or(EmailError::MissingAt)?;

    check_local_part(parts.local)?;
    check_domain_part(parts.domain)?;

    if !address_regex().is_match(address) {
        return Err(EmailError::Invalid);
    }
    Ok(())
}

fn check_local_part(local: &str) -> Result<(), EmailError> {
    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }
    if local.chars().count() > LOCAL_PART_MAX {
        return Err(EmailError::LocalPartTooLong {
            max: LOCAL_PART_MAX,
        });
    }
    if !local_part_regex().is_match(local) {
        return Err(EmailError::LocalPartInvalidCharacters);
    }
    Ok(())
}

fn check_domain_part(domain: &str) -> Result<(), EmailError> {
    if domain.is_empty() {
        return Err(EmailError::EmptyDomain);
    }
    if domain.chars().count() > DOMAIN_PART_MAX {
        return Err(EmailError::DomainTooLong {
            max: DOMAIN_PART_MAX,
        });
    }
    if !domain.contains('.') {
        return Err(EmailError::DomainMissingDot);
    }
    if domain.ends_with('.') {
        return Err(EmailError::DomainTrailingDot);
    }
    if !domain_part_regex().is_match(domain) {
        return Err(EmailError::DomainInvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Covers each zone of the email check and its ordering.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ada@example.com")]
    #[case("a@b.co")]
    #[case("first.last+tag@mail.example.org")]
    #[case("user_%-1@sub-domain.example.info")]
    #[case("  a@b.com  ")]
    #[case("\tUPPER@EXAMPLE.COM\n")]
    fn accepts_well_formed_addresses(#[case] email: &str) {
        assert_eq!(validate_email(email), Ok(()));
    }

    #[rstest]
    #[case("", EmailError::Required)]
    #[case("    ", EmailError::Required)]
    #[case("ada.example.com", EmailError::MissingAt)]
    #[case("@example.com", EmailError::EmptyLocalPart)]
    #[case("ada lovelace@example.com", EmailError::LocalPartInvalidCharacters)]
    #[case("ada!@example.com", EmailError::LocalPartInvalidCharacters)]
    #[case("a@", EmailError::EmptyDomain)]
    #[case("al@test", EmailError::DomainMissingDot)]
    #[case("ada@example.", EmailError::DomainTrailingDot)]
    #[case("ada@exa_mple.com", EmailError::DomainInvalidCharacters)]
    #[case("ada@example.c", EmailError::Invalid)]
    #[case("ada@example.museum", EmailError::Invalid)]
    #[case("ada@example.c0m", EmailError::Invalid)]
    fn reports_the_first_failing_check(#[case] email: &str, #[case] expected: EmailError) {
        assert_eq!(validate_email(email), Err(expected));
    }

    #[test]
    fn rejects_local_part_over_limit() {
        let email = format!("{}@example.com", "a".repeat(LOCAL_PART_MAX + 1));
        assert_eq!(
            validate_email(&email),
            Err(EmailError::LocalPartTooLong {
                max: LOCAL_PART_MAX
            })
        );
    }

    #[test]
    fn accepts_local_part_at_limit() {
        let email = format!("{}@example.com", "a".repeat(LOCAL_PART_MAX));
        assert_eq!(validate_email(&email), Ok(()));
    }

    #[test]
    fn rejects_domain_over_limit() {
        let email = format!("ada@{}.com", "d".repeat(DOMAIN_PART_MAX));
        assert_eq!(
            validate_email(&email),
            Err(EmailError::DomainTooLong {
                max: DOMAIN_PART_MAX
            })
        );
    }

    #[test]
    fn length_check_precedes_character_class() {
        let email = format!("{}@example.com", "!".repeat(LOCAL_PART_MAX + 1));
        assert!(matches!(
            validate_email(&email),
            Err(EmailError::LocalPartTooLong { .. })
        ));
    }

    #[test]
    fn domain_stops_at_second_at_sign() {
        assert_eq!(validate_email("a@b@c.com"), Err(EmailError::DomainMissingDot));
        assert_eq!(validate_email("a@b.io@c.com"), Err(EmailError::Invalid));
    }

    #[test]
    fn split_keeps_empty_halves() {
        let parts = EmailParts::split("@").expect("has @");
        assert_eq!(parts.local, "");
        assert_eq!(parts.domain, "");
    }
}
