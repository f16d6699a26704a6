use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::{extract_detail, ApiError};
use crate::config::ApiConfig;
use crate::model::{Resource, ResourceKind};

/// HTTP client bound to one fleet service base URL.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self, kind: ResourceKind) -> String {
        format!("{}/{}", self.base_url, kind.path())
    }

    pub fn record_url(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind.path(), id)
    }

    /// `GET /{resource}`: the full collection in server order.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let url = self.collection_url(R::KIND);
        tracing::debug!(%url, "listing {}", R::KIND.plural());
        let resp = self.send(self.client.get(&url), &url).await?;
        decode(resp, &url).await
    }

    /// `POST /{resource}`: returns the stored record with its new id.
    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let url = self.collection_url(R::KIND);
        tracing::debug!(%url, ?draft, "creating {}", R::KIND.label());
        let resp = self.send(self.client.post(&url).json(draft), &url).await?;
        decode(resp, &url).await
    }

    /// `PUT /{resource}/{id}`.
    ///
    /// The service echoes the updated fields but may omit `id`; the target
    /// id is filled in before decoding.
    pub async fn update<R: Resource>(&self, record: &R) -> Result<R, ApiError> {
        let url = self.record_url(R::KIND, record.id());
        tracing::debug!(%url, "updating {}", R::KIND.label());
        let resp = self.send(self.client.put(&url).json(record), &url).await?;
        let mut value: Value = decode(resp, &url).await?;
        if let Value::Object(map) = &mut value {
            map.entry("id")
                .or_insert_with(|| Value::String(record.id().to_string()));
        }
        serde_json::from_value(value).map_err(|source| ApiError::Decode { url, source })
    }

    /// `DELETE /{resource}/{id}`. The response body is ignored.
    pub async fn delete<R: Resource>(&self, id: &str) -> Result<(), ApiError> {
        let url = self.record_url(R::KIND, id);
        tracing::debug!(%url, "deleting {}", R::KIND.label());
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<Response, ApiError> {
        let resp = builder.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.bytes().await.ok();
        let detail = body.as_deref().and_then(extract_detail);
        tracing::warn!(%url, status = status.as_u16(), ?detail, "service rejected request");
        Err(ApiError::Service {
            status: status.as_u16(),
            detail,
        })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response, url: &str) -> Result<T, ApiError> {
    let bytes = resp.bytes().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}
