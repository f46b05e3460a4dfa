// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    // The author is a username copy, not a foreign key.
    pub author: Username,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn set_content(&mut self, title: ArticleTitle, body: ArticleBody) {
        self.title = title;
        self.body = body;
    }

    pub fn is_authored_by(&self, username: &Username) -> bool {
        self.author == *username
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author: Username,
    pub created_at: DateTime<Utc>,
}

/// Title and body are the only mutable fields; id and author never change.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
}
