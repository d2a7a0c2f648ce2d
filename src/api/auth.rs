//! Session endpoints: login issues the token cookie, logout clears it

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    config::AuthConfig,
    error::AppResult,
    models::user::{AuthResponse, LoginRequest},
};

use super::TOKEN_COOKIE;

fn session_cookie(config: &AuthConfig, value: String) -> Cookie<'static> {
    let same_site = match config.cookie_same_site.as_str() {
        "none" => SameSite::None,
        "lax" => SameSite::Lax,
        _ => SameSite::Strict,
    };

    Cookie::build((TOKEN_COOKIE, value))
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(same_site)
        .path("/")
        .build()
}

/// Issue a session token cookie for the given email
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token cookie set", body = AuthResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<AuthResponse>)> {
    let token = state.services.auth.issue_token(&request.email)?;
    tracing::debug!("Session token issued for {}", request.email);

    let jar = jar.add(session_cookie(&state.config.auth, token));
    Ok((jar, Json(AuthResponse { success: true })))
}

/// Clear the session token cookie
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Token cookie cleared", body = AuthResponse)
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<AuthResponse>) {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/").build());
    (jar, Json(AuthResponse { success: true }))
}
