// src/presentation/http/views.rs
//
// Plain view functions building the HTML pages. No template engine: every
// page is a layout wrapper around a body fragment, with all dynamic values
// escaped.
use crate::application::dto::{ArticleDto, SessionUser};
use crate::presentation::http::flash::Flash;
use crate::presentation::http::forms::{ArticleForm, FormErrors, RegisterForm};
use axum::http::StatusCode;
use std::fmt::Write as _;

pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn nav(user: Option<&SessionUser>) -> String {
    let mut items = String::from(
        "<a href=\"/\">Home</a> <a href=\"/about\">About</a> <a href=\"/articles\">Articles</a>",
    );
    match user {
        Some(user) => {
            let _ = write!(
                items,
                " <a href=\"/dashboard\">Dashboard</a> <a href=\"/add_article\">Add Article</a> \
                 <a href=\"/logout\">Logout</a> <span class=\"whoami\">{}</span>",
                escape(&user.username)
            );
        }
        None => {
            items.push_str(" <a href=\"/register\">Register</a> <a href=\"/login\">Login</a>");
        }
    }
    format!("<nav>{items}</nav>")
}

fn flash_banner(flash: Option<&Flash>) -> String {
    flash.map_or_else(String::new, |flash| {
        format!(
            "<div class=\"flash flash-{}\">{}</div>",
            flash.level.as_str(),
            escape(&flash.message)
        )
    })
}

fn layout(title: &str, user: Option<&SessionUser>, flash: Option<&Flash>, main: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{} - inkpress</title>\n</head>\n<body>\n{}\n{}\n<main>\n{}\n</main>\n\
         </body>\n</html>\n",
        escape(title),
        nav(user),
        flash_banner(flash),
        main
    )
}

fn field_errors(errors: &FormErrors, field: &str) -> String {
    let mut out = String::new();
    for message in errors.for_field(field) {
        let _ = write!(out, "<p class=\"error\">{}</p>", escape(message));
    }
    out
}

pub fn home_page(user: Option<&SessionUser>, flash: Option<&Flash>) -> String {
    layout(
        "Home",
        user,
        flash,
        "<h1>inkpress</h1>\n<p>A small place for articles. Browse the list or log in to write \
         your own.</p>",
    )
}

pub fn about_page(user: Option<&SessionUser>, flash: Option<&Flash>) -> String {
    layout(
        "About",
        user,
        flash,
        "<h1>About</h1>\n<p>inkpress is a minimal content manager: registered authors write \
         and edit articles, everyone reads them.</p>",
    )
}

pub fn articles_page(
    user: Option<&SessionUser>,
    flash: Option<&Flash>,
    articles: &[ArticleDto],
) -> String {
    let main = if articles.is_empty() {
        "<h1>Articles</h1>\n<p class=\"empty\">No articles found</p>".to_string()
    } else {
        let mut list = String::from("<h1>Articles</h1>\n<ul class=\"articles\">\n");
        for article in articles {
            let _ = writeln!(
                list,
                "<li><a href=\"/article/{}/\">{}</a> <small>by {}</small></li>",
                article.id,
                escape(&article.title),
                escape(&article.author)
            );
        }
        list.push_str("</ul>");
        list
    };
    layout("Articles", user, flash, &main)
}

pub fn article_page(user: Option<&SessionUser>, article: &ArticleDto) -> String {
    let main = format!(
        "<article>\n<h1>{}</h1>\n<p class=\"byline\">by {} on {}</p>\n<div class=\"body\">{}</div>\n</article>",
        escape(&article.title),
        escape(&article.author),
        article.created_at.format("%Y-%m-%d"),
        escape(&article.body)
    );
    layout(&article.title, user, None, &main)
}

pub fn dashboard_page(
    user: &SessionUser,
    flash: Option<&Flash>,
    articles: &[ArticleDto],
) -> String {
    let main = if articles.is_empty() {
        "<h1>Dashboard</h1>\n<p class=\"empty\">No articles found</p>".to_string()
    } else {
        let mut table = String::from(
            "<h1>Dashboard</h1>\n<table>\n<tr><th>Id</th><th>Title</th><th>Author</th><th></th></tr>\n",
        );
        for article in articles {
            let edit = if article.author == user.username {
                format!("<a href=\"/edit_article/{}\">Edit</a>", article.id)
            } else {
                String::new()
            };
            let _ = writeln!(
                table,
                "<tr><td>{}</td><td><a href=\"/article/{}/\">{}</a></td><td>{}</td><td>{}</td></tr>",
                article.id,
                article.id,
                escape(&article.title),
                escape(&article.author),
                edit
            );
        }
        table.push_str("</table>");
        table
    };
    layout("Dashboard", Some(user), flash, &main)
}

pub fn register_page(
    flash: Option<&Flash>,
    form: &RegisterForm,
    errors: &FormErrors,
) -> String {
    // Submitted values are preserved on re-render; passwords are not.
    let main = format!(
        "<h1>Register</h1>\n<form method=\"post\" action=\"/register\">\n\
         <label>Name <input name=\"name\" value=\"{}\"></label>{}\n\
         <label>Email <input name=\"email\" value=\"{}\"></label>{}\n\
         <label>Username <input name=\"username\" value=\"{}\"></label>{}\n\
         <label>Password <input type=\"password\" name=\"password\"></label>{}\n\
         <label>Confirm Password <input type=\"password\" name=\"confirm\"></label>{}\n\
         <button type=\"submit\">Register</button>\n</form>",
        escape(&form.name),
        field_errors(errors, "name"),
        escape(&form.email),
        field_errors(errors, "email"),
        escape(&form.username),
        field_errors(errors, "username"),
        field_errors(errors, "password"),
        field_errors(errors, "confirm"),
    );
    layout("Register", None, flash, &main)
}

pub fn login_page(flash: Option<&Flash>, username: &str, error: Option<&str>) -> String {
    let error_html = error.map_or_else(String::new, |message| {
        format!("<p class=\"error\">{}</p>", escape(message))
    });
    let main = format!(
        "<h1>Login</h1>\n{}\n<form method=\"post\" action=\"/login\">\n\
         <label>Username <input name=\"username\" value=\"{}\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Login</button>\n</form>",
        error_html,
        escape(username)
    );
    layout("Login", None, flash, &main)
}

pub fn article_form_page(
    user: &SessionUser,
    heading: &str,
    action: &str,
    form: &ArticleForm,
    errors: &FormErrors,
) -> String {
    let main = format!(
        "<h1>{}</h1>\n<form method=\"post\" action=\"{}\">\n\
         <label>Title <input name=\"title\" value=\"{}\"></label>{}\n\
         <label>Body <textarea name=\"body\" rows=\"12\">{}</textarea></label>{}\n\
         <button type=\"submit\">Save</button>\n</form>",
        escape(heading),
        escape(action),
        escape(&form.title),
        field_errors(errors, "title"),
        escape(&form.body),
        field_errors(errors, "body"),
    );
    layout(heading, Some(user), None, &main)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let main = format!(
        "<h1>{} {}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back home</a></p>",
        status.as_u16(),
        escape(reason),
        escape(message)
    );
    layout(reason, None, None, &main)
}
