use crate::application::ports::{
    security::{PasswordHasher, SessionManager},
    time::Clock,
};
use crate::domain::user::UserRepository;
use std::sync::Arc;

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) session_manager: Arc<dyn SessionManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_manager: Arc<dyn SessionManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            session_manager,
            clock,
        }
    }
}
