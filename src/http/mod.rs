//! HTTP client layer: `WikiHttp` with configuration and interceptors.

pub mod client;
pub mod config;
pub mod interceptor;
pub mod request;

pub use client::WikiHttp;
pub use config::ClientConfig;
pub use interceptor::{Interceptors, RequestInterceptor, ResponseInterceptor};
pub use request::RequestConfig;
