// tests/article_service_unit.rs
use std::sync::Arc;

mod support;

use chrono::{TimeZone, Utc};
use inkpress::application::commands::articles::{
    ArticleCommandService, CreateArticleCommand, UpdateArticleCommand,
};
use inkpress::application::dto::SessionUser;
use inkpress::application::error::ApplicationError;
use inkpress::application::queries::articles::{ArticleQueryService, GetArticleQuery};
use inkpress::domain::user::UserId;
use support::mocks::{FixedClock, InMemoryArticles};

fn actor(id: i64, username: &str) -> SessionUser {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    SessionUser {
        id: UserId::new(id).unwrap(),
        username: username.into(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

fn services(repo: &Arc<InMemoryArticles>) -> (ArticleCommandService, ArticleQueryService) {
    let commands = ArticleCommandService::new(
        repo.clone(),
        repo.clone(),
        Arc::new(FixedClock),
    );
    let queries = ArticleQueryService::new(repo.clone());
    (commands, queries)
}

const BODY: &str = "a body comfortably over the thirty character minimum";

#[tokio::test]
async fn create_sets_the_author_from_the_session() {
    let repo = Arc::new(InMemoryArticles::new());
    let (commands, _) = services(&repo);

    let created = commands
        .create_article(
            &actor(1, "alice"),
            CreateArticleCommand {
                title: "Hello".into(),
                body: BODY.into(),
            },
        )
        .await
        .expect("create");

    assert_eq!(created.author, "alice");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn create_rejects_a_short_body_without_insert() {
    let repo = Arc::new(InMemoryArticles::new());
    let (commands, _) = services(&repo);

    let err = commands
        .create_article(
            &actor(1, "alice"),
            CreateArticleCommand {
                title: "Hello".into(),
                body: "twenty characters!!!".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Domain(_)));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn update_overwrites_title_and_body_only() {
    let repo = Arc::new(InMemoryArticles::new());
    let (commands, _) = services(&repo);
    let alice = actor(1, "alice");

    commands
        .create_article(
            &alice,
            CreateArticleCommand {
                title: "Before".into(),
                body: BODY.into(),
            },
        )
        .await
        .expect("create");

    let updated = commands
        .update_article(
            &alice,
            UpdateArticleCommand {
                id: 1,
                title: "After".into(),
                body: format!("{BODY} (edited)"),
            },
        )
        .await
        .expect("update");

    assert_eq!(updated.title, "After");
    assert_eq!(updated.author, "alice");
    assert_eq!(updated.id, 1);
}

#[tokio::test]
async fn identical_update_twice_is_idempotent() {
    let repo = Arc::new(InMemoryArticles::new());
    let (commands, _) = services(&repo);
    let alice = actor(1, "alice");

    commands
        .create_article(
            &alice,
            CreateArticleCommand {
                title: "Title".into(),
                body: BODY.into(),
            },
        )
        .await
        .expect("create");

    let update = || UpdateArticleCommand {
        id: 1,
        title: "Edited".into(),
        body: format!("{BODY} again"),
    };
    commands.update_article(&alice, update()).await.expect("first update");
    let after_first = repo.get(1).expect("row");
    commands.update_article(&alice, update()).await.expect("second update");
    let after_second = repo.get(1).expect("row");

    assert_eq!(after_first.title.as_str(), after_second.title.as_str());
    assert_eq!(after_first.body.as_str(), after_second.body.as_str());
    assert_eq!(after_first.created_at, after_second.created_at);
}

#[tokio::test]
async fn only_the_author_may_edit() {
    let repo = Arc::new(InMemoryArticles::new());
    let (commands, _) = services(&repo);

    commands
        .create_article(
            &actor(1, "alice"),
            CreateArticleCommand {
                title: "Alice's".into(),
                body: BODY.into(),
            },
        )
        .await
        .expect("create");

    let err = commands
        .update_article(
            &actor(2, "mallory"),
            UpdateArticleCommand {
                id: 1,
                title: "Hijacked".into(),
                body: BODY.into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
    assert_eq!(repo.get(1).unwrap().title.as_str(), "Alice's");
}

#[tokio::test]
async fn update_of_a_missing_article_is_not_found() {
    let repo = Arc::new(InMemoryArticles::new());
    let (commands, _) = services(&repo);

    let err = commands
        .update_article(
            &actor(1, "alice"),
            UpdateArticleCommand {
                id: 42,
                title: "Ghost".into(),
                body: BODY.into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn get_article_misses_report_not_found() {
    let repo = Arc::new(InMemoryArticles::new());
    let (_, queries) = services(&repo);

    let err = queries.get_article(GetArticleQuery { id: 9 }).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    // Non-positive ids are a miss too, not a validation error page.
    let err = queries.get_article(GetArticleQuery { id: 0 }).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn list_returns_newest_first() {
    let repo = Arc::new(InMemoryArticles::new());
    let (commands, queries) = services(&repo);
    let alice = actor(1, "alice");

    for title in ["First", "Second"] {
        commands
            .create_article(
                &alice,
                CreateArticleCommand {
                    title: title.into(),
                    body: BODY.into(),
                },
            )
            .await
            .expect("create");
    }

    let listed = queries.list_articles().await.expect("list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].title, "Second");
    assert_eq!(listed[1].title, "First");
}
