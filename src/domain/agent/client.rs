//! Agents sub-client: generate and list documents.

use crate::client::WikiClient;
use crate::domain::agent::{GenerateRequest, GENERATE_PATH, LIST_PATH};
use crate::error::HttpError;
use crate::http::RequestConfig;
use crate::shared::BaseResponse;
use serde::de::DeserializeOwned;

pub struct Agents<'a> {
    pub(crate) client: &'a WikiClient,
}

impl<'a> Agents<'a> {
    /// `POST /agents/generate` with `request` as the JSON body.
    pub async fn generate<T: DeserializeOwned + Default>(
        &self,
        request: &GenerateRequest,
    ) -> Result<BaseResponse<T>, HttpError> {
        let body = serde_json::to_value(request)?;
        self.client
            .http
            .request(RequestConfig::post(GENERATE_PATH).json(body))
            .await
    }

    /// `GET /agents/list`.
    pub async fn list<T: DeserializeOwned + Default>(&self) -> Result<BaseResponse<T>, HttpError> {
        self.client.http.request(RequestConfig::get(LIST_PATH)).await
    }
}
