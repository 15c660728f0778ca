//! Wikis sub-client: fetch rendered content.

use crate::client::WikiClient;
use crate::domain::wiki::index_path;
use crate::error::HttpError;
use crate::http::RequestConfig;

pub struct Wikis<'a> {
    pub(crate) client: &'a WikiClient,
}

impl<'a> Wikis<'a> {
    /// `GET /wikis/{repo_id}/index.html`, returning the HTML as received.
    pub async fn content(&self, repo_id: &str) -> Result<String, HttpError> {
        self.client
            .http
            .request_text(RequestConfig::get(index_path(repo_id)))
            .await
    }
}
