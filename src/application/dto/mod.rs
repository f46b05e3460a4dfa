mod articles;
mod auth;
mod users;

pub use articles::ArticleDto;
pub use auth::{SessionSubject, SessionTokenDto, SessionUser};
pub use users::UserDto;
