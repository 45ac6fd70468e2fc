//! Locale registry: Single source of truth for all supported locales.
//!
//! The set of locales is fixed for the lifetime of the process. It is built
//! once on first access through a `OnceLock` and is read-only afterwards, so
//! it can be shared freely between request handlers.

use std::sync::OnceLock;

/// Writing direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Short locale code used in URL prefixes and field suffixes (e.g., "en", "ko")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Korean")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "한국어")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,

    /// Script direction, used by the page shell
    pub direction: TextDirection,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Matching is exact: `"EN"` does not find `"en"`.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locale codes, in registry order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.locales.iter().map(|locale| locale.code).collect()
    }

    /// Get all locale configurations.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one default locale.
    /// The table is static, so this only fires on a broken edit of
    /// `default_locales`.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            direction: TextDirection::Ltr,
        },
        LocaleConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            is_default: false,
            direction: TextDirection::Ltr,
        },
        LocaleConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
            direction: TextDirection::Ltr,
        },
        LocaleConfig {
            code: "id",
            name: "Indonesian",
            native_name: "Bahasa Indonesia",
            is_default: false,
            direction: TextDirection::Ltr,
        },
        LocaleConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            is_default: false,
            direction: TextDirection::Rtl,
        },
        LocaleConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: false,
            direction: TextDirection::Ltr,
        },
    ]
}
