use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, PasswordHash, PersonName, Username},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let name = PersonName::new(command.name)?;
        let email = EmailAddress::new(command.email)?;
        let username = Username::new(command.username)?;
        validate_password(&command.password)?;

        self.ensure_username_available(&username).await?;

        let user = self
            .create_and_insert_user(name, email, username, &command.password)
            .await?;

        Ok(user.into())
    }

    async fn ensure_username_available(&self, username: &Username) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }

        Ok(())
    }

    async fn create_and_insert_user(
        &self,
        name: PersonName,
        email: EmailAddress,
        username: Username,
        password: &str,
    ) -> ApplicationResult<crate::domain::user::User> {
        let hashed = self.password_hasher.hash(password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let registered_at = self.clock.now();
        let new_user = NewUser::new(name, email, username, password_hash, registered_at);
        let user = self.user_repo.insert(new_user).await?;

        Ok(user)
    }
}
