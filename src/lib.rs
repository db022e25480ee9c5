//! Review submission for a small bookstore.
//!
//! Signed-in readers post a description and a star rating for a product. The
//! review is merged with the session user and the product from the path,
//! checked for presence of every required field and stored in SQLite. Pages
//! are Leptos components rendered on the server and served by actix-web.
pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod reviews;
pub mod session;
