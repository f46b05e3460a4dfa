// src/presentation/http/flash.rs
//
// One-time notices carried across a redirect in their own cookie. The next
// full page render shows the notice and clears the cookie.
use axum::{
    extract::FromRequestParts,
    http::{header::SET_COOKIE, request::Parts},
    response::{Html, IntoResponse, Redirect, Response},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use headers::HeaderMapExt;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "inkpress_flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Warning,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Warning,
            message: message.into(),
        }
    }

    /// Cookie value carrying this notice to the next request.
    pub fn to_cookie(&self) -> String {
        let encoded = serde_json::to_vec(self)
            .map(|json| URL_SAFE_NO_PAD.encode(json))
            .unwrap_or_default();
        format!("{FLASH_COOKIE}={encoded}; Path=/; HttpOnly; SameSite=Lax")
    }

    fn from_cookie_value(value: &str) -> Option<Self> {
        let json = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&json).ok()
    }
}

fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; HttpOnly; Max-Age=0; SameSite=Lax")
}

/// Flash notice left by the previous request, if any.
#[derive(Debug, Clone)]
pub struct IncomingFlash(pub Option<Flash>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = parts
            .headers
            .typed_get::<headers::Cookie>()
            .and_then(|cookies| {
                cookies
                    .get(FLASH_COOKIE)
                    .and_then(Flash::from_cookie_value)
            });
        Ok(Self(flash))
    }
}

/// Full page render. Always clears the flash cookie so a notice is shown at
/// most once.
pub fn page_response(markup: String) -> Response {
    ([(SET_COOKIE, clear_cookie())], Html(markup)).into_response()
}

pub fn redirect_with_flash(to: &str, flash: &Flash) -> Response {
    ([(SET_COOKIE, flash.to_cookie())], Redirect::to(to)).into_response()
}
