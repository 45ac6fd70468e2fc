//! Locale-prefix routing.
//!
//! Every page URL carries its locale as the first path segment
//! (`/ko/about`). Requests without one are redirected to the same path
//! under the default locale before any page handler runs.

use std::sync::{Arc, OnceLock};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use regex::Regex;
use tracing::debug;

use crate::server::AppState;

/// Outcome of inspecting a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// The path already carries a supported locale prefix
    Pass,
    /// The path must be served under this locale-prefixed path instead
    RedirectTo(String),
}

/// Decide whether `path` already has a supported locale prefix.
///
/// A path has a locale when it equals `/<loc>` or starts with `/<loc>/`.
/// Matching is exact: `EN` is not `en`. Paths are expected to be
/// root-relative.
///
/// ```
/// use localized_site::routing::{resolve, RouteAction};
///
/// let supported = ["en", "ko"];
/// assert_eq!(resolve("/ko/menu", &supported, "en"), RouteAction::Pass);
/// assert_eq!(resolve("/", &supported, "en"), RouteAction::RedirectTo("/en".into()));
/// assert_eq!(resolve("/menu", &supported, "en"), RouteAction::RedirectTo("/en/menu".into()));
/// ```
pub fn resolve<S: AsRef<str>>(path: &str, supported: &[S], default_locale: &str) -> RouteAction {
    let has_locale = supported.iter().any(|locale| {
        let locale = locale.as_ref();
        match path.strip_prefix('/').and_then(|rest| rest.strip_prefix(locale)) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    });

    if has_locale {
        return RouteAction::Pass;
    }

    let suffix = if path == "/" { "" } else { path };
    RouteAction::RedirectTo(format!("/{}{}", default_locale, suffix))
}

static EXCLUDED_PATHS: OnceLock<Regex> = OnceLock::new();

/// Paths served without locale handling: API routes, framework assets,
/// images and the favicon.
pub fn is_excluded(path: &str) -> bool {
    let regex = EXCLUDED_PATHS.get_or_init(|| {
        Regex::new(r"^(?:/(?:api|_next/static|_next/image|images)(?:/|$)|/favicon\.ico$)")
            .expect("valid exclusion regex")
    });
    regex.is_match(path)
}

/// Axum middleware redirecting unprefixed page requests to the default locale.
///
/// The query string is carried over to the redirect target.
pub async fn locale_redirect(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();

    if is_excluded(path) {
        return next.run(req).await;
    }

    match resolve(
        path,
        &state.config.supported_locales,
        state.config.default_locale.code(),
    ) {
        RouteAction::Pass => next.run(req).await,
        RouteAction::RedirectTo(mut target) => {
            if let Some(query) = req.uri().query() {
                target.push('?');
                target.push_str(query);
            }
            debug!("Redirecting {} -> {}", req.uri(), target);
            Redirect::temporary(&target).into_response()
        }
    }
}
