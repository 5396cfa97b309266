//! Custom field validators shared by the entity DTOs.
//!
//! The derive-based constraints (length, range, email syntax) live on the
//! DTOs themselves; these are the checks the `validator` derive cannot
//! express on its own. Each returns a coded [`ValidationError`] with a
//! caller-facing message.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use validator::ValidationError;

use crate::rut;
use crate::types::Timestamp;

/// Letters (including Spanish accented letters and enye) and whitespace.
pub static FULL_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ\s]+$").expect("full name regex")
});

/// Alphanumeric plus space, hyphen, underscore (accented letters allowed).
pub static PROJECT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9ÁÉÍÓÚáéíóúÑñ\s_-]+$").expect("project name regex")
});

/// Disposable e-mail providers rejected outright.
const BLOCKED_EMAIL_DOMAINS: &[&str] = &["tempmail.org", "10minutemail.com", "guerrillamail.com"];

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Checksum-validate a national id (any accepted input form, see [`rut`]).
pub fn valid_rut(value: &str) -> Result<(), ValidationError> {
    if rut::is_valid(value) {
        Ok(())
    } else {
        Err(error("national_id", "not a valid national id"))
    }
}

/// Reject e-mail addresses on the disposable-domain blocklist.
///
/// Syntax is checked separately by the `email` derive rule; an address
/// without a domain part is left for that rule to reject.
pub fn allowed_email_domain(value: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = value.rsplit_once('@') else {
        return Ok(());
    };
    if BLOCKED_EMAIL_DOMAINS
        .iter()
        .any(|blocked| domain.eq_ignore_ascii_case(blocked))
    {
        Err(error("email_domain", "disposable e-mail domains are not allowed"))
    } else {
        Ok(())
    }
}

/// Hire dates may not lie in the future.
pub fn not_in_future(value: &Timestamp) -> Result<(), ValidationError> {
    if *value > Utc::now() {
        Err(error("hire_date", "date must not be in the future"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn full_name_allows_accents_and_spaces() {
        assert!(FULL_NAME_RE.is_match("Juan Pérez"));
        assert!(FULL_NAME_RE.is_match("María Ñandú"));
        assert!(!FULL_NAME_RE.is_match("Juan2"));
        assert!(!FULL_NAME_RE.is_match("Juan_Pérez"));
    }

    #[test]
    fn project_name_allows_limited_punctuation() {
        assert!(PROJECT_NAME_RE.is_match("Sistema ERP 2024"));
        assert!(PROJECT_NAME_RE.is_match("app_mobile-v2"));
        assert!(!PROJECT_NAME_RE.is_match("Portal!"));
        assert!(!PROJECT_NAME_RE.is_match("a/b"));
    }

    #[test]
    fn rut_validator_delegates_to_checksum() {
        assert!(valid_rut("12.345.678-5").is_ok());
        assert!(valid_rut("12345678-9").is_err());
    }

    #[test]
    fn blocked_email_domains_rejected_case_insensitively() {
        assert!(allowed_email_domain("a@tempmail.org").is_err());
        assert!(allowed_email_domain("a@TempMail.ORG").is_err());
        assert!(allowed_email_domain("a@example.com").is_ok());
        // No domain part: left to the syntax rule.
        assert!(allowed_email_domain("not-an-address").is_ok());
    }

    #[test]
    fn future_hire_date_rejected() {
        let tomorrow = Utc::now() + Duration::days(1);
        let yesterday = Utc::now() - Duration::days(1);
        assert!(not_in_future(&tomorrow).is_err());
        assert!(not_in_future(&yesterday).is_ok());
        assert!(not_in_future(&Utc::now()).is_ok());
    }
}
