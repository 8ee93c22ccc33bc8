//! Core domain types for the HashEx OpenAPI.
//!
//! This crate has zero internal dependencies so it can be shared by the
//! REST/WebSocket client and any future worker or CLI tooling. It holds
//! the response envelope every endpoint returns, the request-signing
//! utilities, and the exchange's shared data types.

pub mod auth;
pub mod response;
pub mod types;

pub use response::ApiResponse;
