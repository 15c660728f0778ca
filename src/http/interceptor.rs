//! Request/response interceptors.
//!
//! Both hooks default to identity. They exist so that header injection or
//! response post-processing can be added without touching the request path.

use crate::error::HttpError;
use reqwest::{Request, Response};
use std::fmt;
use std::sync::Arc;

/// Called with every outgoing request right before it is sent.
pub type RequestInterceptor = Arc<dyn Fn(Request) -> Result<Request, HttpError> + Send + Sync>;

/// Called with every received response before its status is checked.
pub type ResponseInterceptor = Arc<dyn Fn(Response) -> Result<Response, HttpError> + Send + Sync>;

#[derive(Clone)]
pub struct Interceptors {
    pub(crate) on_request: RequestInterceptor,
    pub(crate) on_response: ResponseInterceptor,
}

impl Default for Interceptors {
    fn default() -> Self {
        Self {
            on_request: Arc::new(|req: Request| Ok::<_, HttpError>(req)),
            on_response: Arc::new(|resp: Response| Ok::<_, HttpError>(resp)),
        }
    }
}

impl Interceptors {
    pub fn on_request<F>(mut self, f: F) -> Self
    where
        F: Fn(Request) -> Result<Request, HttpError> + Send + Sync + 'static,
    {
        self.on_request = Arc::new(f);
        self
    }

    pub fn on_response<F>(mut self, f: F) -> Self
    where
        F: Fn(Response) -> Result<Response, HttpError> + Send + Sync + 'static,
    {
        self.on_response = Arc::new(f);
        self
    }

    pub(crate) fn intercept_request(&self, req: Request) -> Result<Request, HttpError> {
        (self.on_request)(req)
    }

    pub(crate) fn intercept_response(&self, resp: Response) -> Result<Response, HttpError> {
        (self.on_response)(resp)
    }
}

impl fmt::Debug for Interceptors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interceptors").finish_non_exhaustive()
    }
}
