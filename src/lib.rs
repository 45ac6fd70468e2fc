//! Server core of a multilingual content site: locale-prefixed routing,
//! localized record fields, preferred-language persistence, admin login and
//! toast notifications.

pub mod auth;
pub mod config;
pub mod error;
pub mod i18n;
pub mod localized;
pub mod preferences;
pub mod routing;
pub mod security;
pub mod server;
pub mod toast;
