// src/presentation/http/controllers/pages.rs
use crate::presentation::http::{
    extractors::MaybeAuthenticated,
    flash::{IncomingFlash, page_response},
    views,
};
use axum::response::Response;

pub async fn home(actor: MaybeAuthenticated, IncomingFlash(flash): IncomingFlash) -> Response {
    page_response(views::home_page(actor.0.as_ref(), flash.as_ref()))
}

pub async fn about(actor: MaybeAuthenticated, IncomingFlash(flash): IncomingFlash) -> Response {
    page_response(views::about_page(actor.0.as_ref(), flash.as_ref()))
}
