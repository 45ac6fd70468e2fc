//! Admin credential check.
//!
//! The site has exactly one admin account, configured through the
//! environment at startup. There is no user table, session store, lockout
//! or audit trail here: callers get a yes/no answer and nothing else.

use tracing::warn;

use crate::security::{constant_time_compare, is_valid_hash, verify_password};

/// The single configured admin account.
#[derive(Clone)]
pub struct AdminIdentity {
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
}

impl std::fmt::Debug for AdminIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminIdentity")
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Validates submitted email/password pairs against the admin identity.
#[derive(Debug, Clone)]
pub struct AdminCredentialValidator {
    identity: AdminIdentity,
}

impl AdminCredentialValidator {
    pub fn new(identity: AdminIdentity) -> Self {
        if !is_valid_hash(&identity.password_hash) {
            warn!("Configured admin password hash is not a valid PHC string; admin login will always fail");
        }
        Self { identity }
    }

    /// Return true only when both email and password match.
    ///
    /// Empty input always fails. The password hash is verified even when the
    /// email does not match, so an unknown email and a wrong password take
    /// the same time to reject.
    pub fn validate(&self, email: &str, password: &str) -> bool {
        if email.is_empty() || password.is_empty() {
            return false;
        }

        let email_matches = constant_time_compare(email, &self.identity.email);
        let password_matches = verify_password(password, &self.identity.password_hash);

        email_matches & password_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::hash_password;

    fn validator() -> AdminCredentialValidator {
        AdminCredentialValidator::new(AdminIdentity {
            email: "admin@example.com".to_string(),
            password_hash: hash_password("s3cret-pass").unwrap(),
        })
    }

    #[test]
    fn test_correct_credentials() {
        assert!(validator().validate("admin@example.com", "s3cret-pass"));
    }

    #[test]
    fn test_wrong_password() {
        assert!(!validator().validate("admin@example.com", "wrong"));
    }

    #[test]
    fn test_other_email_rejected_even_with_correct_password() {
        let v = validator();
        assert!(!v.validate("other@x.com", "s3cret-pass"));
        assert!(!v.validate("other@x.com", "wrong"));
    }

    #[test]
    fn test_email_is_case_sensitive() {
        assert!(!validator().validate("Admin@example.com", "s3cret-pass"));
    }

    #[test]
    fn test_empty_input_rejected() {
        let v = validator();
        assert!(!v.validate("", "s3cret-pass"));
        assert!(!v.validate("admin@example.com", ""));
        assert!(!v.validate("", ""));
    }

    #[test]
    fn test_malformed_configured_hash_rejects_everything() {
        let v = AdminCredentialValidator::new(AdminIdentity {
            email: "admin@example.com".to_string(),
            password_hash: "plaintext-password".to_string(),
        });
        assert!(!v.validate("admin@example.com", "plaintext-password"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let debug = format!("{:?}", validator());
        assert!(debug.contains("admin@example.com"));
        assert!(!debug.contains("$argon2"));
    }
}
