//! Session primitives shared across the UI.
//!
//! # Design
//! - Keep session state as simple data so callers can store/clear it without
//!   side effects.
//! - Treat an empty email as anonymous at the call site.

/// Signed-in user snapshot persisted across reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Email the user signed in with.
    pub email: String,
}

impl Session {
    /// Whether the stored email is usable.
    #[must_use]
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// Display name derived from the email local part.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let local = self.email.split('@').next().unwrap_or("");
        if local.trim().is_empty() { "사용자" } else { local }
    }
}

/// Live validation flags for a candidate new password.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordRules {
    /// At least eight characters.
    pub min_length: bool,
    /// Contains an uppercase letter.
    pub upper: bool,
    /// Contains a lowercase letter.
    pub lower: bool,
    /// Contains a digit.
    pub digit: bool,
    /// Contains a special character (informational, not required).
    pub special: bool,
}

impl PasswordRules {
    /// Evaluate every rule against `password`.
    #[must_use]
    pub fn check(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= 8,
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| "!@#$%^&*(),.?\":{}|<>".contains(c)),
        }
    }

    /// Whether the required rules all pass.
    #[must_use]
    pub const fn satisfied(&self) -> bool {
        self.min_length && self.upper && self.lower && self.digit
    }
}

/// Reasons a password change submission is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordChangeError {
    /// Current password field is empty.
    MissingCurrent,
    /// New password field is empty.
    MissingNew,
    /// New password fails the required rules.
    RulesNotMet,
    /// Confirmation does not match the new password.
    Mismatch,
    /// New password equals the current one.
    Unchanged,
}

impl PasswordChangeError {
    /// User-facing message for this rejection.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingCurrent => "현재 비밀번호를 입력해주세요",
            Self::MissingNew => "새 비밀번호를 입력해주세요",
            Self::RulesNotMet => "비밀번호 조건을 확인해주세요",
            Self::Mismatch => "새 비밀번호가 일치하지 않습니다",
            Self::Unchanged => "새 비밀번호는 현재 비밀번호와 달라야 합니다",
        }
    }
}

/// Validate a password change submission.
///
/// # Errors
/// Returns the first failing [`PasswordChangeError`] in form order.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), PasswordChangeError> {
    if current.is_empty() {
        return Err(PasswordChangeError::MissingCurrent);
    }
    if new.is_empty() {
        return Err(PasswordChangeError::MissingNew);
    }
    if !PasswordRules::check(new).satisfied() {
        return Err(PasswordChangeError::RulesNotMet);
    }
    if new != confirm {
        return Err(PasswordChangeError::Mismatch);
    }
    if current == new {
        return Err(PasswordChangeError::Unchanged);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{PasswordChangeError, PasswordRules, Session, validate_password_change};

    #[test]
    fn display_name_uses_email_local_part() {
        let session = Session {
            email: "dana@example.com".to_string(),
        };
        assert!(session.has_email());
        assert_eq!(session.display_name(), "dana");
    }

    #[test]
    fn empty_email_gets_placeholder_name() {
        let session = Session {
            email: String::new(),
        };
        assert!(!session.has_email());
        assert_eq!(session.display_name(), "사용자");
    }

    #[test]
    fn rules_require_length_and_character_classes() {
        assert!(!PasswordRules::check("Ab1!").satisfied());
        assert!(!PasswordRules::check("alllowercase1").satisfied());
        assert!(PasswordRules::check("Abcdefg1").satisfied());
        let rules = PasswordRules::check("Abcdefg1!");
        assert!(rules.special);
        assert!(rules.satisfied());
    }

    #[test]
    fn change_validation_reports_first_failure() {
        assert_eq!(
            validate_password_change("", "Abcdefg1", "Abcdefg1"),
            Err(PasswordChangeError::MissingCurrent)
        );
        assert_eq!(
            validate_password_change("old", "", ""),
            Err(PasswordChangeError::MissingNew)
        );
        assert_eq!(
            validate_password_change("old", "weak", "weak"),
            Err(PasswordChangeError::RulesNotMet)
        );
        assert_eq!(
            validate_password_change("old", "Abcdefg1", "Abcdefg2"),
            Err(PasswordChangeError::Mismatch)
        );
        assert_eq!(
            validate_password_change("Abcdefg1", "Abcdefg1", "Abcdefg1"),
            Err(PasswordChangeError::Unchanged)
        );
        assert_eq!(validate_password_change("old", "Abcdefg1", "Abcdefg1"), Ok(()));
    }
}
