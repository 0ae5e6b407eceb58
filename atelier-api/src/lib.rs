//! # atelier-api
//!
//! Async client for the studio's public HTTP API. One thin [`Client`]
//! carries the four verbs and the error mapping; per-object-kind modules
//! mirror the server's endpoint families.

pub mod client;
pub mod error;
pub mod jobs;
pub mod libraries;
pub mod outputs;
pub mod plugins;
pub mod recipes;
pub mod server;
pub mod webapps;
pub mod wiki;

pub use client::Client;
pub use error::ApiError;
