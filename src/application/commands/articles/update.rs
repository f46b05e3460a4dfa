use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, SessionUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleId, ArticleTitle, ArticleUpdate},
        user::Username,
    },
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl ArticleCommandService {
    /// Overwrite title and body of an existing article. Id and author are
    /// immutable, and only the author may edit.
    pub async fn update_article(
        &self,
        actor: &SessionUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let editor = Username::new(actor.username.clone())?;
        if !article.is_authored_by(&editor) {
            return Err(ApplicationError::forbidden(
                "only the author may edit this article",
            ));
        }

        let update = ArticleUpdate {
            id,
            title: ArticleTitle::new(command.title)?,
            body: ArticleBody::new(command.body)?,
        };

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }
}
