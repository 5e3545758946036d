//! # Roster Rust Backend
//!
//! Minimal user-directory REST service with a uniform response envelope.
//!
//! This crate exposes CRUD operations over a single in-memory "users"
//! collection through an axum HTTP API. Every endpoint, success or failure,
//! answers with the same `{code, success, message, result}` envelope, and all
//! store access goes through a narrow repository interface so the in-memory
//! backend can later be replaced by a persistent one.
//!
//! ## Architecture
//!
//! The crate is organized into a few logical modules:
//!
//! - [`api`]: Domain types (`User`, `UserId`) shared across layers
//! - [`db`]: Repository trait, in-memory implementation, and service layer
//! - [`http`]: Axum-based HTTP server, envelope builder, and handlers

pub mod api;

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
