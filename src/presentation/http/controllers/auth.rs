// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::SessionTokenDto,
    error::ApplicationError,
};
use crate::presentation::http::{
    error::HttpError,
    extractors::{Authenticated, SESSION_COOKIE},
    flash::{Flash, IncomingFlash, page_response, redirect_with_flash},
    forms::{FormErrors, LoginForm, RegisterForm},
    state::HttpState,
    views,
};
use axum::{
    Extension, Form,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use chrono::Utc;

fn session_cookie(session: &SessionTokenDto) -> String {
    let max_age = (session.expires_at - Utc::now()).num_seconds().max(0);
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}",
        session.token
    )
}

fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

pub async fn register_form(IncomingFlash(flash): IncomingFlash) -> Response {
    page_response(views::register_page(
        flash.as_ref(),
        &RegisterForm::default(),
        &FormErrors::default(),
    ))
}

pub async fn register(
    Extension(state): Extension<HttpState>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let mut errors = form.validate();
    if !errors.is_empty() {
        return page_response(views::register_page(None, &form, &errors));
    }

    let command = RegisterUserCommand {
        name: form.name.clone(),
        email: form.email.clone(),
        username: form.username.clone(),
        password: form.password.clone(),
    };

    match state.services.user_commands.register(command).await {
        Ok(_) => redirect_with_flash(
            "/login",
            &Flash::success("Successfully registered! Log in to continue."),
        ),
        Err(ApplicationError::Conflict(_)) => {
            errors.push("username", "That username is already taken");
            page_response(views::register_page(None, &form, &errors))
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

pub async fn login_form(IncomingFlash(flash): IncomingFlash) -> Response {
    page_response(views::login_page(flash.as_ref(), "", None))
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Form(form): Form<LoginForm>,
) -> Response {
    let command = LoginUserCommand {
        username: form.username.clone(),
        password: form.password.clone(),
    };

    match state.services.user_commands.login(command).await {
        Ok(result) => (
            AppendHeaders([
                (SET_COOKIE, session_cookie(&result.session)),
                (SET_COOKIE, Flash::success("You are now logged in").to_cookie()),
            ]),
            Redirect::to("/dashboard"),
        )
            .into_response(),
        Err(ApplicationError::Unauthorized(message)) => {
            // Same page, same generic message, no cookie.
            page_response(views::login_page(None, &form.username, Some(&message)))
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

pub async fn logout(_user: Authenticated) -> Response {
    (
        AppendHeaders([
            (SET_COOKIE, clear_session_cookie()),
            (SET_COOKIE, Flash::success("You are now logged out").to_cookie()),
        ]),
        Redirect::to("/login"),
    )
        .into_response()
}
