//! Session-scoped URL shortener.
//!
//! Pending form inputs and shortened records live in a single in-memory
//! [`store::Session`]; every user action goes through the pure
//! [`store::reducer::reduce`] transition. The actix-web surface in
//! [`routes`] exposes that session over HTTP.

pub mod app;
pub mod clock;
pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod store;
pub mod types;
pub mod utils;
pub mod validations;
