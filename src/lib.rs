//! Shopping relay — splits spoken shopping lists into items and forwards
//! them to IFTTT webhooks, one request per interval.

pub mod auth;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod routes;
pub mod server;
pub mod shopping;
