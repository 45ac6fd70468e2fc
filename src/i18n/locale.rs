//! Locale type: a code that is guaranteed to be in the registry.

use std::fmt;

use crate::error::SiteError;
use crate::i18n::{LocaleConfig, LocaleRegistry, TextDirection};

/// A validated locale.
///
/// Only codes present in the [`LocaleRegistry`] can be turned into a
/// `Locale`, so anything holding one can index translation tables and
/// field suffixes without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const KOREAN: Locale = Locale { code: "ko" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is supported
    /// * `Err(SiteError::UnknownLocale)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, SiteError> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| Locale { code: config.code })
            .ok_or_else(|| SiteError::UnknownLocale(code.to_string()))
    }

    /// Resolve a code to a Locale, falling back to the registry's default
    /// locale for unknown codes. Never fails.
    pub fn resolve(code: &str) -> Locale {
        Self::resolve_or(code, Self::default_locale())
    }

    /// Resolve a code to a Locale, falling back to `default` for unknown
    /// codes. Handlers pass the configured default here.
    pub fn resolve_or(code: &str, default: Locale) -> Locale {
        Self::from_code(code).unwrap_or(default)
    }

    /// The registry's default locale.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Never in practice: a `Locale` can only be built from a registry entry.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be in the registry")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn direction(&self) -> TextDirection {
        self.config().direction
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_supported() {
        let locale = Locale::from_code("ja").expect("Should succeed");
        assert_eq!(locale.code(), "ja");
        assert_eq!(locale.native_name(), "日本語");
    }

    #[test]
    fn test_from_code_unknown() {
        let err = Locale::from_code("fr").unwrap_err();
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn test_from_code_does_not_normalize_case() {
        assert!(Locale::from_code("EN").is_err());
    }

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_unknown_falls_back_to_default() {
        assert_eq!(Locale::resolve("fr"), Locale::ENGLISH);
        assert_eq!(Locale::resolve(""), Locale::ENGLISH);
    }

    #[test]
    fn test_resolve_or_uses_given_default() {
        assert_eq!(Locale::resolve_or("fr", Locale::KOREAN), Locale::KOREAN);
        assert_eq!(Locale::resolve_or("EN", Locale::KOREAN), Locale::KOREAN);
        assert_eq!(Locale::resolve_or("ja", Locale::KOREAN).code(), "ja");
    }

    #[test]
    fn test_resolve_known() {
        assert_eq!(Locale::resolve("ko"), Locale::KOREAN);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_default_trait() {
        assert_eq!(Locale::default(), Locale::ENGLISH);
        assert!(Locale::default().is_default());
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::KOREAN.to_string(), "ko");
    }

    #[test]
    fn test_direction() {
        assert_eq!(Locale::resolve("ar").direction(), TextDirection::Rtl);
        assert_eq!(Locale::ENGLISH.direction(), TextDirection::Ltr);
    }
}
