//! Cookie-based admin gate.
//!
//! The `is_admin` cookie is advisory client state used to show or hide
//! storefront controls. It is unsigned, client-controlled, and gated by
//! nothing; any real authorization boundary has to be layered on top.

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde_json::{Value, json};

pub const ADMIN_COOKIE: &str = "is_admin";

/// POST /api/client/set-admin-cookie
///
/// Unconditionally marks the caller as admin. Not HttpOnly on purpose: the
/// storefront reads the cookie from script.
pub async fn set_admin_cookie(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let cookie = Cookie::build((ADMIN_COOKIE, "true"))
        .path("/")
        .secure(true)
        .http_only(false)
        .same_site(SameSite::None)
        .build();

    (jar.add(cookie), Json(json!({ "success": true })))
}

/// GET /api/client/check-access
///
/// 200 `{isAdmin: true}` iff the cookie value is exactly `"true"`,
/// otherwise 401 `{isAdmin: false}`.
pub async fn check_access(jar: CookieJar) -> impl IntoResponse {
    let is_admin = jar
        .get(ADMIN_COOKIE)
        .map(|cookie| cookie.value() == "true")
        .unwrap_or(false);

    let status = if is_admin {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };

    (status, Json(json!({ "isAdmin": is_admin })))
}
