// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{SessionSubject, SessionTokenDto, SessionUser},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues and validates the opaque token carried in the session cookie.
#[async_trait]
pub trait SessionManager: Send + Sync {
    async fn issue(&self, subject: SessionSubject) -> ApplicationResult<SessionTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<SessionUser>;
}
