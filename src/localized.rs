//! Localized field resolution.
//!
//! Records coming from the content store carry one column per locale for
//! every translatable field (`name`, `name_ko`, `name_ja`, ...). The base
//! column holds the default-language text. Lookups never fail: a missing
//! record, a missing column and an empty column all degrade to the next
//! candidate and finally to an empty string.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::i18n::Locale;

/// Anything that can hand out raw field values by column name.
pub trait LocalizedRecord {
    /// The value stored under `key`, or `None` when the column is absent or
    /// holds no text.
    fn raw_field(&self, key: &str) -> Option<String>;
}

impl LocalizedRecord for Map<String, Value> {
    fn raw_field(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl LocalizedRecord for Value {
    fn raw_field(&self, key: &str) -> Option<String> {
        self.as_object()?.raw_field(key)
    }
}

impl LocalizedRecord for HashMap<String, String> {
    fn raw_field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl LocalizedRecord for BTreeMap<String, String> {
    fn raw_field(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

fn non_empty<R: LocalizedRecord + ?Sized>(record: &R, key: &str) -> Option<String> {
    record.raw_field(key).filter(|value| !value.is_empty())
}

/// Resolve `field` for `locale` on a record.
///
/// Tries `<field>_<locale>`, then the base `<field>`, then gives up with an
/// empty string.
///
/// ```
/// use localized_site::localized::get_field;
/// use serde_json::json;
///
/// let tea = json!({ "name": "Tea", "name_ko": "차" });
/// assert_eq!(get_field(Some(&tea), "name", "ko"), "차");
/// assert_eq!(get_field(Some(&tea), "name", "ja"), "Tea");
/// assert_eq!(get_field(None::<&serde_json::Value>, "name", "ko"), "");
/// ```
pub fn get_field<R: LocalizedRecord + ?Sized>(record: Option<&R>, field: &str, locale: &str) -> String {
    let Some(record) = record else {
        return String::new();
    };

    non_empty(record, &format!("{}_{}", field, locale))
        .or_else(|| non_empty(record, field))
        .unwrap_or_default()
}

/// Resolve `field` by walking an explicit fallback chain before the base
/// column.
pub fn get_field_with_chain<R: LocalizedRecord + ?Sized>(
    record: Option<&R>,
    field: &str,
    chain: &FallbackChain,
) -> String {
    let Some(record) = record else {
        return String::new();
    };

    chain
        .codes()
        .iter()
        .find_map(|code| non_empty(record, &format!("{}_{}", field, code)))
        .or_else(|| non_empty(record, field))
        .unwrap_or_default()
}

/// Resolve several fields at once.
pub fn get_multiple_fields<R: LocalizedRecord + ?Sized>(
    record: Option<&R>,
    fields: &[&str],
    locale: &str,
) -> ResolvedFields {
    let mut resolved = ResolvedFields::default();
    for field in fields {
        if resolved.get(field).is_none() {
            resolved
                .entries
                .push((field.to_string(), get_field(record, field, locale)));
        }
    }
    resolved
}

/// Field name to resolved text, iterating in the order the names were
/// requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFields {
    entries: Vec<(String, String)>,
}

impl ResolvedFields {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect(),
        )
    }
}

/// Ordered list of locale codes tried before the base value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackChain {
    codes: Vec<String>,
}

impl FallbackChain {
    /// Build a chain from codes, dropping empty codes and duplicates while
    /// keeping first occurrences in order.
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for code in codes.into_iter().map(Into::into) {
            if !code.is_empty() && !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self { codes: unique }
    }

    /// The usual chain: requested locale, then the default locale.
    pub fn for_locale(requested: Locale, default: Locale) -> Self {
        Self::new([requested.code(), default.code()])
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

/// One translatable value with an explicit entry per locale.
///
/// `base` is the unsuffixed value used when no locale in the chain has text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
}

impl LocalizedText {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            translations: BTreeMap::new(),
        }
    }

    pub fn with(mut self, locale: &str, value: impl Into<String>) -> Self {
        self.translations.insert(locale.to_string(), value.into());
        self
    }

    /// Collect `field` and every `field_<code>` column of a record.
    pub fn from_record<R: LocalizedRecord + ?Sized>(record: &R, field: &str, codes: &[&str]) -> Self {
        let mut text = Self::new(record.raw_field(field).unwrap_or_default());
        for code in codes {
            if let Some(value) = record.raw_field(&format!("{}_{}", field, code)) {
                text.translations.insert(code.to_string(), value);
            }
        }
        text
    }

    /// First non-empty value along `chain`, then `base`, then `""`.
    pub fn resolve(&self, chain: &FallbackChain) -> &str {
        chain
            .codes()
            .iter()
            .filter_map(|code| self.translations.get(code))
            .find(|value| !value.is_empty())
            .map(String::as_str)
            .unwrap_or(self.base.as_str())
    }
}

/// Field accessor bound to the locale of the current request.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedAccessor {
    locale: Locale,
}

impl LocalizedAccessor {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn field<R: LocalizedRecord + ?Sized>(&self, record: Option<&R>, field: &str) -> String {
        get_field(record, field, self.locale.code())
    }

    pub fn fields<R: LocalizedRecord + ?Sized>(&self, record: Option<&R>, fields: &[&str]) -> ResolvedFields {
        get_multiple_fields(record, fields, self.locale.code())
    }
}
