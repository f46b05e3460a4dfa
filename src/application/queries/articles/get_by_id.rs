use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Fetch one article by id. A miss is a not-found error, never an empty
    /// value handed to a view.
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::not_found("article not found"))?;

        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
