// src/infrastructure/security/session.rs
//
// Stateless session tokens: a base64url JSON payload signed with
// HMAC-SHA256. The token travels in an HttpOnly cookie; nothing is stored
// server-side, so logout is simply dropping the cookie.
use crate::application::{
    dto::{SessionSubject, SessionTokenDto, SessionUser},
    error::{ApplicationError, ApplicationResult},
    ports::{security::SessionManager, time::Clock},
};
use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration as ChronoDuration};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;
use std::time::Duration;

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct HmacSessionManager {
    key: Vec<u8>,
    ttl: ChronoDuration,
    clock: Arc<dyn Clock>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    uid: i64,
    uname: String,
    iat: i64,
    exp: i64,
}

impl HmacSessionManager {
    pub fn new(secret: &str, ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.is_empty() {
            return Err(ApplicationError::infrastructure(
                "session secret cannot be empty",
            ));
        }
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            key: secret.as_bytes().to_vec(),
            ttl,
            clock,
        })
    }

    fn sign(&self, payload: &str) -> ApplicationResult<String> {
        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload.as_bytes());
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    fn encode(&self, claims: &SessionClaims) -> ApplicationResult<String> {
        let json = serde_json::to_vec(claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let payload = URL_SAFE_NO_PAD.encode(json);
        let signature = self.sign(&payload)?;
        Ok(format!("{payload}.{signature}"))
    }

    fn decode(&self, token: &str) -> ApplicationResult<SessionClaims> {
        let (payload, signature) = token
            .split_once('.')
            .ok_or_else(invalid_session)?;

        let mut mac = HmacSha256::new_from_slice(&self.key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        mac.update(payload.as_bytes());
        let expected = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| invalid_session())?;
        mac.verify_slice(&expected).map_err(|_| invalid_session())?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| invalid_session())?;
        serde_json::from_slice(&json).map_err(|_| invalid_session())
    }
}

fn invalid_session() -> ApplicationError {
    ApplicationError::unauthorized("invalid session")
}

#[async_trait]
impl SessionManager for HmacSessionManager {
    async fn issue(&self, subject: SessionSubject) -> ApplicationResult<SessionTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;

        let claims = SessionClaims {
            uid: subject.user_id.into(),
            uname: subject.username,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(SessionTokenDto {
            token: self.encode(&claims)?,
            expires_at,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<SessionUser> {
        let claims = self.decode(token)?;

        let issued_at = DateTime::from_timestamp(claims.iat, 0).ok_or_else(invalid_session)?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or_else(invalid_session)?;

        if self.clock.now() > expires_at {
            return Err(ApplicationError::unauthorized("session expired"));
        }

        Ok(SessionUser {
            id: crate::domain::user::UserId::new(claims.uid).map_err(|_| invalid_session())?,
            username: claims.uname,
            issued_at,
            expires_at,
        })
    }
}
