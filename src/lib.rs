//! # repowiki SDK
//!
//! A typed Rust client for the repository wiki backend, supporting both
//! native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Envelope and request types (always available, WASM-safe)
//! 2. **HTTP API**: `WikiHttp` with configuration, interceptors and generic requests
//! 3. **High-Level Client**: `WikiClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use repowiki_sdk::prelude::*;
//!
//! let client = WikiClient::builder()
//!     .base_url("https://api.example.com")
//!     .build()?;
//!
//! let docs: BaseResponse = client.agents().list().await?;
//! let html = client.wikis().content("42").await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared wire types used across all domains.
pub mod shared;

/// Domain modules: request types and endpoint sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with configuration and interceptors.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `WikiClient`, the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::domain::agent::GenerateRequest;
    pub use crate::domain::wiki::index_path;
    pub use crate::shared::BaseResponse;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::{BASE_URL_ENV, DEFAULT_TIMEOUT};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{AgentsClient, WikiClient, WikiClientBuilder, WikisClient};
    #[cfg(feature = "http")]
    pub use crate::http::{ClientConfig, Interceptors, RequestConfig, WikiHttp};
}
