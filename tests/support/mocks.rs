// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Mutex;

use inkpress::application::error::{ApplicationError, ApplicationResult};
use inkpress::application::ports::{security::PasswordHasher, time::Clock};
use inkpress::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use inkpress::domain::errors::{DomainError, DomainResult};
use inkpress::domain::user::{NewUser, User, UserId, UserRepository, Username};

/// Users held in a plain Vec; ids are assigned in insertion order.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn stored_password(&self, username: &str) -> Option<String> {
        let users = self.inner.lock().unwrap();
        users
            .iter()
            .find(|u| u.username.as_str() == username)
            .map(|u| u.password_hash.as_str().to_owned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.inner.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }

        let user = User {
            id: UserId::new(users.len() as i64 + 1)?,
            name: new_user.name,
            email: new_user.email,
            username: new_user.username,
            password_hash: new_user.password_hash,
            registered_at: new_user.registered_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.inner.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }
}

/// One store implementing both the read and the write side.
#[derive(Default)]
pub struct InMemoryArticles {
    inner: Mutex<Vec<Article>>,
}

impl InMemoryArticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        let articles = self.inner.lock().unwrap();
        articles.iter().find(|a| i64::from(a.id) == id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticles {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.inner.lock().unwrap();
        let article = Article {
            id: ArticleId::new(articles.len() as i64 + 1)?,
            title: article.title,
            body: article.body,
            author: article.author,
            created_at: article.created_at,
        };
        articles.push(article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.inner.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.set_content(update.title, update.body);
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticles {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.inner.lock().unwrap();
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let articles = self.inner.lock().unwrap();
        let mut all: Vec<Article> = articles.clone();
        all.reverse();
        Ok(all)
    }
}

/// Transparent hasher for service-level tests: fast and easy to assert on.
pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }
}
