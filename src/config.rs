use anyhow::{Context, Result};
use tracing::warn;

use crate::auth::AdminIdentity;
use crate::i18n::{Locale, LocaleRegistry};
use crate::security::hash_password;

/// Development password used when `ADMIN_PASSWORD_HASH` is not set.
pub const DEV_ADMIN_PASSWORD: &str = "admin1234";

#[derive(Debug, Clone)]
pub struct Config {
    // Admin
    pub admin: AdminIdentity,
    /// URL segment hiding the admin entry point (`/<locale>/<secret>`)
    pub secret_admin_path: String,

    // Locales
    pub supported_locales: Vec<&'static str>,
    pub default_locale: Locale,

    // Server
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string());

        let password_hash = match std::env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) if !hash.trim().is_empty() => hash.trim().to_string(),
            _ => {
                warn!("ADMIN_PASSWORD_HASH not set, using the development admin password");
                hash_password(DEV_ADMIN_PASSWORD)
                    .context("Failed to hash development admin password")?
            }
        };

        let default_locale = match std::env::var("DEFAULT_LOCALE") {
            Ok(code) => Locale::from_code(code.trim()).unwrap_or_else(|e| {
                warn!("DEFAULT_LOCALE ignored: {}", e);
                Locale::default_locale()
            }),
            Err(_) => Locale::default_locale(),
        };

        Ok(Self {
            admin: AdminIdentity {
                email: admin_email,
                password_hash,
            },
            secret_admin_path: std::env::var("SECRET_ADMIN_PATH")
                .ok()
                .map(|path| path.trim_matches('/').to_string())
                .filter(|path| !path.is_empty())
                .unwrap_or_else(|| "manage-7f3a".to_string()),

            supported_locales: LocaleRegistry::get().codes(),
            default_locale,

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}
