//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Validated `Locale` type with default-locale fallback
//! - `strings`: Static admin translation tables, one per locale
//! - `dates`: Locale-aware date formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use localized_site::i18n::{get_admin_translation, Locale};
//!
//! let korean = Locale::resolve("ko");
//! let table = get_admin_translation(korean.code());
//! ```

mod dates;
mod locale;
mod registry;
mod strings;

pub use dates::{format_date, format_date_time, format_rfc3339_date};
pub use locale::Locale;
pub use registry::{LocaleConfig, LocaleRegistry, TextDirection};
pub use strings::{get_admin_translation, AdminTranslation};
