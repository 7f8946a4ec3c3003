// src/presentation/http/controllers/mod.rs
pub mod admin_articles;
pub mod articles;
pub mod auth;
pub mod newsletter;
pub mod topics;
