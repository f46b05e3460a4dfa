//! inkpress: a small server-rendered article CMS.
//!
//! Visitors browse static pages and published articles; registered users log
//! in with a cookie session and manage articles tied to their account.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
