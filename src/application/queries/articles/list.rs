use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// All articles, newest first. An empty vec is a valid answer; the view
    /// layer renders the explicit "no articles found" state for it.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
