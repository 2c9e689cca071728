//! Last.fm web API integration.
//!
//! # Architecture
//!
//! - **DTOs** (`dto.rs`) - Exact API response shapes, one document per endpoint
//! - **Client** (`client.rs`) - HTTP client that folds every failure into an envelope
//! - **Domain** (`domain.rs`) - Cards and detail pages the renderer consumes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to domain models
//!
//! API docs: https://www.last.fm/api

pub mod adapter;
mod client;
mod de;
pub mod domain;
pub mod dto;

pub use client::{LastFmClient, Method};
pub use domain::{ApiError, Card, Detail, NO_DETAILS};
