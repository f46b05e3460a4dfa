// Argon2 with default parameters over the registration and login paths.
// Hashing is CPU-bound, so both operations run on the blocking pool to keep
// request handlers responsive.
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

fn hasher_failure(err: impl ToString) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            let hash = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(hasher_failure)?;
            Ok(hash.to_string())
        })
        .await
        .map_err(hasher_failure)?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&expected_hash).map_err(hasher_failure)?;
            // A mismatch is an authentication failure; the login flow folds
            // it into its single generic credentials message.
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized("password mismatch"))
        })
        .await
        .map_err(hasher_failure)?
    }
}
