pub mod controllers;
pub mod error;
pub mod extractors;
pub mod flash;
pub mod forms;
pub mod routes;
pub mod state;
pub mod views;
