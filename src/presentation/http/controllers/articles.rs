// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, UpdateArticleCommand},
    error::ApplicationError,
    queries::articles::GetArticleQuery,
};
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::{Authenticated, MaybeAuthenticated},
    flash::{Flash, IncomingFlash, page_response, redirect_with_flash},
    forms::{ArticleForm, FormErrors},
    state::HttpState,
    views,
};
use axum::{
    Extension, Form,
    extract::Path,
    response::{IntoResponse, Response},
};

pub async fn list(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    IncomingFlash(flash): IncomingFlash,
) -> HttpResult<Response> {
    let articles = state.services.article_queries.list_articles().await.into_http()?;
    Ok(page_response(views::articles_page(
        actor.0.as_ref(),
        flash.as_ref(),
        &articles,
    )))
}

pub async fn detail(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()?;
    Ok(page_response(views::article_page(actor.0.as_ref(), &article)))
}

pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    IncomingFlash(flash): IncomingFlash,
) -> HttpResult<Response> {
    let articles = state.services.article_queries.list_articles().await.into_http()?;
    Ok(page_response(views::dashboard_page(
        &user,
        flash.as_ref(),
        &articles,
    )))
}

pub async fn add_form(Authenticated(user): Authenticated) -> Response {
    page_response(views::article_form_page(
        &user,
        "Add Article",
        "/add_article",
        &ArticleForm::default(),
        &FormErrors::default(),
    ))
}

pub async fn add(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Form(form): Form<ArticleForm>,
) -> Response {
    let errors = form.validate();
    if !errors.is_empty() {
        return page_response(views::article_form_page(
            &user,
            "Add Article",
            "/add_article",
            &form,
            &errors,
        ));
    }

    let command = CreateArticleCommand {
        title: form.title.clone(),
        body: form.body.clone(),
    };

    match state
        .services
        .article_commands
        .create_article(&user, command)
        .await
    {
        Ok(_) => redirect_with_flash("/dashboard", &Flash::success("Article created")),
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let article = state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()?;

    if article.author != user.username {
        return Err(HttpError::from_error(ApplicationError::forbidden(
            "only the author may edit this article",
        )));
    }

    let form = ArticleForm {
        title: article.title,
        body: article.body,
    };

    Ok(page_response(views::article_form_page(
        &user,
        "Edit Article",
        &format!("/edit_article/{id}"),
        &form,
        &FormErrors::default(),
    )))
}

pub async fn edit(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Form(form): Form<ArticleForm>,
) -> Response {
    let errors = form.validate();
    if !errors.is_empty() {
        return page_response(views::article_form_page(
            &user,
            "Edit Article",
            &format!("/edit_article/{id}"),
            &form,
            &errors,
        ));
    }

    let command = UpdateArticleCommand {
        id,
        title: form.title.clone(),
        body: form.body.clone(),
    };

    match state
        .services
        .article_commands
        .update_article(&user, command)
        .await
    {
        Ok(_) => redirect_with_flash("/dashboard", &Flash::success("Article updated")),
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
