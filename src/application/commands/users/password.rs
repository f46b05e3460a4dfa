use crate::application::error::{ApplicationError, ApplicationResult};

/// The store only ever sees a hash, so the plaintext rule is deliberately
/// small: it must exist.
pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::validation("password is required"));
    }
    Ok(())
}
