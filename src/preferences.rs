//! Preferred-language persistence.
//!
//! The user's last chosen locale lives in two places that must agree: a
//! client-side cache and a long-lived cookie the server can read on the
//! next request. Both sit behind [`LanguageBacking`] so either can be
//! swapped for a server-side session or an in-memory fake.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use tracing::debug;

use crate::i18n::{Locale, LocaleRegistry};

pub const PREFERRED_LANGUAGE_COOKIE: &str = "preferred_language";

/// One year, in seconds.
pub const PREFERRED_LANGUAGE_MAX_AGE: u64 = 31_536_000;

/// Storage for a single locale code.
pub trait LanguageBacking {
    fn read(&self) -> Option<String>;
    fn write(&mut self, code: &str);
}

/// In-process cache backing.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    value: Option<String>,
}

impl MemoryCache {
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
        }
    }
}

impl LanguageBacking for MemoryCache {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, code: &str) {
        self.value = Some(code.to_string());
    }
}

/// Cookie backing: reads the request's `Cookie` header and records the
/// `Set-Cookie` value to send back.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    value: Option<String>,
    set_cookie: Option<String>,
}

impl CookieJar {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let value = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .find_map(|header| parse_cookie_header(header, PREFERRED_LANGUAGE_COOKIE));
        Self {
            value,
            set_cookie: None,
        }
    }

    /// The `Set-Cookie` header value produced by the last write, if any.
    pub fn set_cookie_header(&self) -> Option<&str> {
        self.set_cookie.as_deref()
    }
}

impl LanguageBacking for CookieJar {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, code: &str) {
        self.value = Some(code.to_string());
        self.set_cookie = Some(preferred_language_cookie(code));
    }
}

/// Build the `Set-Cookie` value for a preferred language.
pub fn preferred_language_cookie(code: &str) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        PREFERRED_LANGUAGE_COOKIE, code, PREFERRED_LANGUAGE_MAX_AGE
    )
}

/// Read one cookie out of a `Cookie` request header.
pub fn parse_cookie_header(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

/// Pick a supported locale from an `Accept-Language` header.
///
/// Tags are tried in header order; each tag matches on its full form
/// (`ko`) or its primary subtag (`ko-KR` → `ko`, `zh-TW` → `zh`). Quality
/// weights are ignored. Falls back to `default`.
pub fn detect_locale(accept_language: &str, default: Locale) -> Locale {
    let registry = LocaleRegistry::get();

    for raw in accept_language.split(',') {
        let tag = raw.split(';').next().unwrap_or(raw).trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }

        let primary = tag.split(['-', '_']).next().unwrap_or(tag.as_str());
        for candidate in [tag.as_str(), primary] {
            if registry.is_supported(candidate) {
                return Locale::resolve_or(candidate, default);
            }
        }
    }

    default
}

/// Keeps the cache and cookie backings in sync.
#[derive(Debug, Clone)]
pub struct PreferredLanguageStore<C, K> {
    cache: C,
    cookie: K,
    default: Locale,
}

impl<C: LanguageBacking, K: LanguageBacking> PreferredLanguageStore<C, K> {
    /// Store falling back to the registry's default locale.
    pub fn new(cache: C, cookie: K) -> Self {
        Self {
            cache,
            cookie,
            default: Locale::default_locale(),
        }
    }

    /// Use `default` when neither backing holds a supported code.
    pub fn with_default(mut self, default: Locale) -> Self {
        self.default = default;
        self
    }

    /// Record `locale` in both backings. Writing the value already stored
    /// in both leaves them untouched.
    pub fn set_preferred_language(&mut self, locale: Locale) {
        let code = locale.code();
        let cached = self.cache.read();
        let cookied = self.cookie.read();
        if cached.as_deref() == Some(code) && cookied.as_deref() == Some(code) {
            return;
        }

        debug!("Preferred language changed to {}", code);
        if cached.as_deref() != Some(code) {
            self.cache.write(code);
        }
        if cookied.as_deref() != Some(code) {
            self.cookie.write(code);
        }
    }

    /// The cached locale, else the cookie's, else the store's default.
    /// Codes that are not supported are skipped.
    pub fn get_preferred_language(&self) -> Locale {
        [self.cache.read(), self.cookie.read()]
            .into_iter()
            .flatten()
            .find_map(|code| Locale::from_code(&code).ok())
            .unwrap_or(self.default)
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn cookie(&self) -> &K {
        &self.cookie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    /// Backing that counts writes.
    #[derive(Default)]
    struct CountingBacking {
        value: Option<String>,
        writes: usize,
    }

    impl LanguageBacking for CountingBacking {
        fn read(&self) -> Option<String> {
            self.value.clone()
        }

        fn write(&mut self, code: &str) {
            self.value = Some(code.to_string());
            self.writes += 1;
        }
    }

    // ==================== Cookie Tests ====================

    #[test]
    fn test_cookie_format() {
        assert_eq!(
            preferred_language_cookie("ko"),
            "preferred_language=ko; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn test_parse_cookie_header() {
        let header = "theme=dark; preferred_language=ja; other=1";
        assert_eq!(
            parse_cookie_header(header, "preferred_language"),
            Some("ja".to_string())
        );
        assert_eq!(parse_cookie_header(header, "missing"), None);
        assert_eq!(parse_cookie_header("", "preferred_language"), None);
        assert_eq!(parse_cookie_header("garbage", "preferred_language"), None);
    }

    #[test]
    fn test_cookie_jar_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("preferred_language=ar"));
        let jar = CookieJar::from_headers(&headers);
        assert_eq!(jar.read(), Some("ar".to_string()));
        assert!(jar.set_cookie_header().is_none());
    }

    // ==================== Store Tests ====================

    #[test]
    fn test_set_writes_both_backings() {
        let mut store = PreferredLanguageStore::new(MemoryCache::default(), CookieJar::default());
        store.set_preferred_language(Locale::KOREAN);

        assert_eq!(store.cache().read(), Some("ko".to_string()));
        assert_eq!(store.cookie().read(), Some("ko".to_string()));
        assert_eq!(
            store.cookie().set_cookie_header(),
            Some("preferred_language=ko; Path=/; Max-Age=31536000; SameSite=Lax")
        );
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut store =
            PreferredLanguageStore::new(CountingBacking::default(), CountingBacking::default());
        store.set_preferred_language(Locale::KOREAN);
        store.set_preferred_language(Locale::KOREAN);

        assert_eq!(store.cache().writes, 1);
        assert_eq!(store.cookie().writes, 1);
    }

    #[test]
    fn test_set_resyncs_a_stale_backing() {
        let cache = CountingBacking {
            value: Some("ko".to_string()),
            writes: 0,
        };
        let mut store = PreferredLanguageStore::new(cache, CountingBacking::default());
        store.set_preferred_language(Locale::KOREAN);

        assert_eq!(store.cache().writes, 0);
        assert_eq!(store.cookie().writes, 1);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = PreferredLanguageStore::new(MemoryCache::default(), CookieJar::default());
        store.set_preferred_language(Locale::KOREAN);
        store.set_preferred_language(Locale::resolve("ja"));
        assert_eq!(store.get_preferred_language().code(), "ja");
    }

    #[test]
    fn test_get_prefers_cache_over_cookie() {
        let mut cookie = CookieJar::default();
        cookie.write("ja");
        let store = PreferredLanguageStore::new(MemoryCache::with_value("zh"), cookie);
        assert_eq!(store.get_preferred_language().code(), "zh");
    }

    #[test]
    fn test_get_falls_back_to_cookie() {
        let mut cookie = CookieJar::default();
        cookie.write("ja");
        let store = PreferredLanguageStore::new(MemoryCache::default(), cookie);
        assert_eq!(store.get_preferred_language().code(), "ja");
    }

    #[test]
    fn test_get_skips_unsupported_codes() {
        let mut cookie = CookieJar::default();
        cookie.write("id");
        let store = PreferredLanguageStore::new(MemoryCache::with_value("fr"), cookie);
        assert_eq!(store.get_preferred_language().code(), "id");
    }

    #[test]
    fn test_get_defaults_when_empty() {
        let store = PreferredLanguageStore::new(MemoryCache::default(), CookieJar::default());
        assert_eq!(store.get_preferred_language(), Locale::ENGLISH);
    }

    #[test]
    fn test_get_uses_configured_default() {
        let store = PreferredLanguageStore::new(MemoryCache::with_value("fr"), CookieJar::default())
            .with_default(Locale::KOREAN);
        assert_eq!(store.get_preferred_language(), Locale::KOREAN);
    }

    // ==================== detect_locale Tests ====================

    #[test]
    fn test_detect_exact_and_regional_tags() {
        assert_eq!(detect_locale("ko", Locale::ENGLISH).code(), "ko");
        assert_eq!(detect_locale("ko-KR", Locale::ENGLISH).code(), "ko");
        assert_eq!(detect_locale("zh-TW", Locale::ENGLISH).code(), "zh");
        assert_eq!(detect_locale("en-GB", Locale::KOREAN).code(), "en");
        assert_eq!(detect_locale("ar-SA", Locale::ENGLISH).code(), "ar");
    }

    #[test]
    fn test_detect_takes_first_supported_tag() {
        let header = "fr-FR,fr;q=0.9,ja-JP;q=0.8,en;q=0.7";
        assert_eq!(detect_locale(header, Locale::ENGLISH).code(), "ja");
    }

    #[test]
    fn test_detect_falls_back_to_default() {
        assert_eq!(detect_locale("fr-FR,de", Locale::KOREAN), Locale::KOREAN);
        assert_eq!(detect_locale("", Locale::KOREAN), Locale::KOREAN);
        assert_eq!(detect_locale(" , ;q=1", Locale::ENGLISH), Locale::ENGLISH);
    }
}
