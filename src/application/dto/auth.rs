use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Identity placed into a freshly issued session.
#[derive(Debug, Clone)]
pub struct SessionSubject {
    pub user_id: UserId,
    pub username: String,
}

/// Signed session token plus its expiry, ready to be set as a cookie.
#[derive(Debug, Clone)]
pub struct SessionTokenDto {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// The authenticated identity recovered from a valid session token.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
