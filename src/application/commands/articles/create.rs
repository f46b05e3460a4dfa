// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, SessionUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        user::Username,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &SessionUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let author = Username::new(actor.username.clone())?;

        let new_article = NewArticle {
            title,
            body,
            author,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
