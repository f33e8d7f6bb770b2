//! # astrux
//!
//! Rust client for the Astrux prediction API.
//!
//! ## Overview
//!
//! This library wraps the remote `predict` endpoint in a small typed
//! surface: an [`Astrux`] client holds immutable configuration (API key,
//! timeout) and exposes a namespaced models sub-client whose single
//! operation sends one request and maps the HTTP response into a
//! [`PredictResponse`] or a classified [`Error`].
//!
//! There is deliberately no retry, caching, or streaming layer; each call
//! is one independent round trip.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use astrux::{Astrux, PredictRequest};
//!
//! #[tokio::main]
//! async fn main() -> astrux::Result<()> {
//!     // Reads ASTRUX_API_KEY when no key is given explicitly.
//!     let client = Astrux::builder().api_key("your-api-key").build()?;
//!
//!     let request = PredictRequest::new("churn-v2", serde_json::json!({ "plan": "pro" }));
//!     let response = client.models().predict(&request).await?;
//!
//!     println!("score: {:?}", response.score());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client facade, builder, and the predict executor |
//! | [`config`] | Client configuration and endpoint defaults |
//! | [`types`] | Request and response types |
//! | [`error`] | Error taxonomy and HTTP status classification |

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{Astrux, AstruxBuilder, ModelsClient};
pub use config::ClientConfig;
pub use error::Error;
pub use types::{PredictRequest, PredictResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
