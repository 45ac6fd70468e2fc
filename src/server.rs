//! HTTP surface: router, shared state and handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::{ACCEPT_LANGUAGE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::from_fn_with_state;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::auth::AdminCredentialValidator;
use crate::config::Config;
use crate::error::SiteError;
use crate::i18n::{format_date, get_admin_translation, Locale};
use crate::localized::LocalizedAccessor;
use crate::preferences::{detect_locale, CookieJar, MemoryCache, PreferredLanguageStore};
use crate::routing::locale_redirect;
use crate::security::constant_time_compare;
use crate::toast::{ToastKind, ToastSlot};

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub config: Config,
    pub validator: AdminCredentialValidator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let validator = AdminCredentialValidator::new(config.admin.clone());
        Self { config, validator }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/admin/login", post(admin_login))
        .route(
            "/api/preferred-language",
            get(get_preferred_language).put(set_preferred_language),
        )
        .route("/api/localize", post(localize_record))
        .route("/:locale", get(locale_home))
        .route("/:locale/:segment", get(admin_entry))
        .layer(from_fn_with_state(state.clone(), locale_redirect))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured port and serve until the process is stopped.
pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("✓ Listening on {}", addr);
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

fn preference_store(
    headers: &HeaderMap,
    default: Locale,
) -> PreferredLanguageStore<MemoryCache, CookieJar> {
    PreferredLanguageStore::new(MemoryCache::default(), CookieJar::from_headers(headers))
        .with_default(default)
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

async fn admin_login(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<LoginRequest>,
) -> Result<Response, SiteError> {
    let locale = preference_store(&headers, state.config.default_locale).get_preferred_language();
    let strings = get_admin_translation(locale.code());

    // Argon2 verification is CPU-bound
    let validator_state = Arc::clone(&state);
    let accepted = tokio::task::spawn_blocking(move || {
        validator_state
            .validator
            .validate(&request.email, &request.password)
    })
    .await
    .map_err(|e| SiteError::PasswordHash(e.to_string()))?;

    let mut toast = ToastSlot::new();
    if accepted {
        info!("Admin login succeeded");
        toast.show(strings.login_success, Some(ToastKind::Success));
        Ok(Json(json!({ "ok": true, "toast": toast.current() })).into_response())
    } else {
        warn!("Admin login rejected");
        toast.show(strings.invalid_credentials, Some(ToastKind::Error));
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "ok": false,
                "error": strings.invalid_credentials,
                "toast": toast.current(),
            })),
        )
            .into_response())
    }
}

/// `locale` is the stored preference; `detected` is the browser's
/// `Accept-Language` choice, offered to the UI when nothing is stored yet.
async fn get_preferred_language(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<Value> {
    let default = state.config.default_locale;
    let locale = preference_store(&headers, default).get_preferred_language();
    let detected = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .map(|value| detect_locale(value, default))
        .unwrap_or(default);

    Json(json!({ "locale": locale.code(), "detected": detected.code() }))
}

#[derive(Debug, Deserialize)]
pub struct PreferredLanguageRequest {
    pub locale: String,
}

async fn set_preferred_language(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<PreferredLanguageRequest>,
) -> Result<Response, SiteError> {
    let locale = Locale::from_code(&request.locale)?;

    let mut store = preference_store(&headers, state.config.default_locale);
    store.set_preferred_language(locale);

    let mut response = Json(json!({ "locale": locale.code() })).into_response();
    if let Some(cookie) = store.cookie().set_cookie_header() {
        let value =
            HeaderValue::from_str(cookie).map_err(|e| SiteError::BadRequest(e.to_string()))?;
        response.headers_mut().insert(SET_COOKIE, value);
    }
    Ok(response)
}

#[derive(Debug, Deserialize)]
pub struct LocalizeRequest {
    #[serde(default)]
    pub record: Option<Value>,
    pub fields: Vec<String>,
    pub locale: String,
}

/// Resolve the requested fields of a record for a locale. Unknown locales
/// resolve as the configured default locale.
async fn localize_record(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LocalizeRequest>,
) -> Json<Value> {
    let accessor = LocalizedAccessor::new(Locale::resolve_or(
        &request.locale,
        state.config.default_locale,
    ));
    let fields: Vec<&str> = request.fields.iter().map(String::as_str).collect();
    let resolved = accessor.fields(request.record.as_ref(), &fields);

    Json(json!({
        "locale": accessor.locale().code(),
        "fields": resolved.to_json(),
    }))
}

/// Excluded paths such as `/api` also match `/:locale`; only supported
/// locales get a page.
async fn locale_home(Path(locale): Path<String>) -> Response {
    let Ok(locale) = Locale::from_code(&locale) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    Json(json!({
        "locale": locale.code(),
        "name": locale.native_name(),
        "direction": locale.direction(),
        "today": format_date(Utc::now().date_naive(), locale),
    }))
    .into_response()
}

/// The admin UI lives under a configured secret segment; every other
/// segment is a plain 404.
async fn admin_entry(
    State(state): State<Arc<AppState>>,
    Path((locale, segment)): Path<(String, String)>,
) -> Response {
    let Ok(locale) = Locale::from_code(&locale) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if !constant_time_compare(&segment, &state.config.secret_admin_path) {
        return StatusCode::NOT_FOUND.into_response();
    }

    Json(json!({
        "locale": locale.code(),
        "direction": locale.direction(),
        "strings": get_admin_translation(locale.code()),
    }))
    .into_response()
}
