// tests/support/helpers.rs
use super::mocks::{InMemoryArticles, InMemoryUserRepo};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, Response, header};
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt as _;

use inkpress::application::ports::{
    security::{PasswordHasher, SessionManager},
    time::Clock,
};
use inkpress::application::services::ApplicationServices;
use inkpress::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use inkpress::domain::user::UserRepository;
use inkpress::infrastructure::security::{password::Argon2PasswordHasher, session::HmacSessionManager};
use inkpress::infrastructure::time::SystemClock;
use inkpress::presentation::http::{routes::build_router, state::HttpState};

pub const TEST_SESSION_SECRET: &str = "test-secret-test-secret-test-secret!";

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepo>,
    pub articles: Arc<InMemoryArticles>,
}

/// Real router over in-memory stores, with the real hasher and session
/// manager so cookies issued by login round-trip through the guard.
pub fn make_test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepo::new());
    let articles = Arc::new(InMemoryArticles::new());

    let user_repo: Arc<dyn UserRepository> = users.clone();
    let article_write: Arc<dyn ArticleWriteRepository> = articles.clone();
    let article_read: Arc<dyn ArticleReadRepository> = articles.clone();

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let session_manager: Arc<dyn SessionManager> = Arc::new(
        HmacSessionManager::new(TEST_SESSION_SECRET, Duration::from_secs(3600), Arc::clone(&clock))
            .expect("session manager"),
    );

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        password_hasher,
        session_manager,
        clock,
    ));

    let router = build_router(HttpState { services });

    TestApp {
        router,
        users,
        articles,
    }
}

pub async fn get(router: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::empty()).expect("request");
    router.clone().oneshot(request).await.expect("response")
}

pub async fn post_form(
    router: &Router,
    uri: &str,
    form_body: &str,
    cookie: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(form_body.to_owned())).expect("request");
    router.clone().oneshot(request).await.expect("response")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// First Set-Cookie value for `name`, stripped of attributes.
pub fn cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| {
            let (pair, _) = value.split_once(';').unwrap_or((value, ""));
            let (cookie_name, cookie_value) = pair.split_once('=')?;
            (cookie_name == name).then(|| cookie_value.to_owned())
        })
}

pub fn location(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Register and log a user in, returning the session Cookie header value.
pub async fn login_session(router: &Router, username: &str, password: &str) -> String {
    let register = format!(
        "name=Test&email={username}%40example.com&username={username}&password={password}&confirm={password}"
    );
    post_form(router, "/register", &register, None).await;

    let login = format!("username={username}&password={password}");
    let response = post_form(router, "/login", &login, None).await;
    let token = cookie_value(&response, "inkpress_session").expect("session cookie");
    format!("inkpress_session={token}")
}
