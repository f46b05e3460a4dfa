// src/presentation/http/extractors.rs
use crate::{
    application::dto::SessionUser,
    presentation::http::{
        flash::{Flash, redirect_with_flash},
        state::HttpState,
    },
};
use axum::{
    Extension,
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use headers::HeaderMapExt;
use std::convert::Infallible;

pub const SESSION_COOKIE: &str = "inkpress_session";

/// Guard for protected routes: a valid session cookie or a redirect to the
/// login page. The wrapped handler never runs on denial.
#[derive(Debug, Clone)]
pub struct Authenticated(pub SessionUser);

/// Session lookup that never rejects; pages use it to render the right nav.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<SessionUser>);

#[derive(Debug)]
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        redirect_with_flash("/login", &Flash::warning("Please log in first"))
    }
}

fn session_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<headers::Cookie>()
        .and_then(|cookies| cookies.get(SESSION_COOKIE).map(str::to_owned))
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthRedirect)?;

        let token = session_token(parts).ok_or(AuthRedirect)?;
        let user = app_state
            .services
            .authenticate(&token)
            .await
            .map_err(|_| AuthRedirect)?;

        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(Extension(app_state)) =
            Extension::<HttpState>::from_request_parts(parts, state).await
        else {
            return Ok(Self(None));
        };

        let Some(token) = session_token(parts) else {
            return Ok(Self(None));
        };

        Ok(Self(app_state.services.authenticate(&token).await.ok()))
    }
}
