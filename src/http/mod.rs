//! HTTP server module for the user service.
//!
//! This module provides an axum-based HTTP server that exposes the user
//! collection as a REST API with a uniform response envelope.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - Envelope construction                                  │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (db/services.rs)                           │
//! │  - Team filtering                                         │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository (in-memory)                            │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use envelope::Envelope;
pub use router::create_router;
pub use state::AppState;
