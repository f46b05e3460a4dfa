// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, auth, pages};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Router, routing::get};
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/articles", get(articles::list))
        .route("/article/{id}/", get(articles::detail))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/dashboard", get(articles::dashboard))
        .route("/logout", get(auth::logout))
        .route("/add_article", get(articles::add_form).post(articles::add))
        .route(
            "/edit_article/{id}",
            get(articles::edit_form).post(articles::edit),
        )
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
