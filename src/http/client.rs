//! Low-level HTTP client: `WikiHttp`.
//!
//! Owns the configured `reqwest::Client` and the interceptors, and exposes
//! the generic request functions the endpoint sub-clients are built on.
//! Every call is exactly one network request; errors come back untouched.

use crate::error::HttpError;
use crate::http::config::ClientConfig;
use crate::http::interceptor::Interceptors;
use crate::http::request::RequestConfig;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Low-level HTTP client for the wiki REST API.
#[derive(Debug, Clone)]
pub struct WikiHttp {
    config: ClientConfig,
    client: Client,
    interceptors: Interceptors,
}

impl WikiHttp {
    pub fn new(config: ClientConfig, interceptors: Interceptors) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(config.timeout);
        }

        Ok(Self {
            config,
            client: builder.build()?,
            interceptors,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issue `req` and decode the JSON body into `T`.
    pub async fn request<T: DeserializeOwned>(&self, req: RequestConfig) -> Result<T, HttpError> {
        let timeout = req.timeout.unwrap_or(self.config.timeout);
        with_deadline(timeout, async {
            let resp = self.send(req).await?;
            Ok::<T, HttpError>(resp.json::<T>().await?)
        })
        .await
    }

    /// Issue `req` and return the raw body.
    pub async fn request_text(&self, req: RequestConfig) -> Result<String, HttpError> {
        let timeout = req.timeout.unwrap_or(self.config.timeout);
        with_deadline(timeout, async {
            let resp = self.send(req).await?;
            Ok::<String, HttpError>(resp.text().await?)
        })
        .await
    }

    async fn send(&self, req: RequestConfig) -> Result<Response, HttpError> {
        let url = self.config.resolve_url(&req.url);
        tracing::debug!(method = %req.method, url = %url, "Sending request");

        let mut builder = self.client.request(req.method, url.as_str());
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !req.query.is_empty() {
            builder = builder.query(&req.query);
        }
        if let Some(body) = &req.body {
            builder = builder.json(body);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = req.timeout {
                builder = builder.timeout(timeout);
            }
        }

        let request = self.interceptors.intercept_request(builder.build()?)?;

        let resp = match self.client.execute(request).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Request failed");
                return Err(e.into());
            }
        };

        let resp = self.interceptors.intercept_response(resp)?;
        tracing::debug!(status = resp.status().as_u16(), url = %url, "Received response");

        Ok(resp.error_for_status()?)
    }
}

// reqwest enforces the timeout natively.
#[cfg(not(target_arch = "wasm32"))]
async fn with_deadline<T, F>(_timeout: Duration, fut: F) -> Result<T, HttpError>
where
    F: Future<Output = Result<T, HttpError>>,
{
    fut.await
}

#[cfg(target_arch = "wasm32")]
async fn with_deadline<T, F>(timeout: Duration, fut: F) -> Result<T, HttpError>
where
    F: Future<Output = Result<T, HttpError>>,
{
    use futures_util::future::{select, Either};

    let fut = std::pin::pin!(fut);
    let deadline = std::pin::pin!(futures_timer::Delay::new(timeout));
    match select(fut, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(HttpError::Timeout),
    }
}
