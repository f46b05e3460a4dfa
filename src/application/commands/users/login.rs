use super::UserCommandService;
use crate::{
    application::{
        dto::{SessionSubject, SessionTokenDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub session: SessionTokenDto,
    pub user: UserDto,
}

/// One message for every credential failure. Distinguishing an unknown
/// username from a wrong password would allow username enumeration.
fn invalid_credentials() -> ApplicationError {
    ApplicationError::unauthorized("invalid username or password")
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username).map_err(|_| invalid_credentials())?;
        let user = self
            .find_and_authenticate_user(&username, &command.password)
            .await?;

        let subject = SessionSubject {
            user_id: user.id,
            username: user.username.to_string(),
        };
        let session = self.session_manager.issue(subject).await?;

        Ok(LoginResult {
            session,
            user: user.into(),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        username: &Username,
        password: &str,
    ) -> ApplicationResult<crate::domain::user::User> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(invalid_credentials)?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => invalid_credentials(),
                other => other,
            })?;

        Ok(user)
    }
}
