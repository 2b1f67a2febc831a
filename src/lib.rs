pub mod common;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod layout;
pub mod models;
pub mod session;
