//! Algolia REST client.
//!
//! Only the single-object write endpoint is used:
//!
//! ```text
//! PUT {host}/1/indexes/{index}/{objectID}
//! x-algolia-application-id: {app_id}
//! x-algolia-api-key: {app_key}
//!
//! { ...record }
//! ```

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::config::IndexSectionConfig;
use crate::page::IndexRecord;

use super::{IndexError, SearchIndex};

const APP_ID_HEADER: &str = "x-algolia-application-id";
const API_KEY_HEADER: &str = "x-algolia-api-key";
const USER_AGENT_VALUE: &str = concat!("tola-index/", env!("CARGO_PKG_VERSION"));

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct AlgoliaErrorResponse {
    message: String,
}

/// Client for one Algolia index.
#[derive(Debug, Clone)]
pub struct AlgoliaIndex {
    client: Client,
    base_url: Url,
    index_name: String,
    app_id: String,
    api_key: String,
}

impl AlgoliaIndex {
    /// Client for the `[index]` settings.
    ///
    /// Missing values are sent as empty strings; the API rejects them and
    /// the failure is reported per record.
    pub fn new(config: &IndexSectionConfig) -> Result<Self, IndexError> {
        let base_url = config
            .base_url()
            .map_err(|e| IndexError::InvalidRequest(format!("invalid index host: {e}")))?;

        Ok(Self::with_base_url(
            base_url,
            config.name.clone().unwrap_or_default(),
            config.app_id.clone().unwrap_or_default(),
            config.app_key.clone().unwrap_or_default(),
        ))
    }

    /// Client for an explicit endpoint.
    pub fn with_base_url(
        base_url: Url,
        index_name: impl Into<String>,
        app_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url,
            index_name: index_name.into(),
            app_id: app_id.into(),
            api_key: api_key.into(),
        }
    }

    /// URL of one object. Segments are percent-encoded.
    fn object_url(&self, object_id: &str) -> Result<Url, IndexError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                IndexError::InvalidRequest(format!("`{}` cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(["1", "indexes", self.index_name.as_str(), object_id]);
        Ok(url)
    }

    /// Build the authentication headers.
    fn headers(&self) -> Result<HeaderMap, IndexError> {
        let value = |name: &str, v: &str| {
            HeaderValue::from_str(v)
                .map_err(|_| IndexError::InvalidRequest(format!("{name} is not a valid header value")))
        };

        let mut headers = HeaderMap::new();
        headers.insert(APP_ID_HEADER, value("application id", &self.app_id)?);
        headers.insert(API_KEY_HEADER, value("api key", &self.api_key)?);
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Map a non-success response onto an error.
    async fn handle_error_response(response: Response) -> IndexError {
        let status = response.status();
        let message = match response.json::<AlgoliaErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };
        error_for_status(status, message)
    }
}

/// Error for an HTTP status and the message from the response body.
fn error_for_status(status: StatusCode, message: String) -> IndexError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => IndexError::AuthFailed(message),
        StatusCode::NOT_FOUND => IndexError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => IndexError::RateLimited,
        _ if status.is_server_error() => IndexError::ApiError {
            status: status.as_u16(),
            message: format!("Algolia server error: {message}"),
        },
        _ => IndexError::ApiError {
            status: status.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl SearchIndex for AlgoliaIndex {
    fn name(&self) -> &str {
        &self.index_name
    }

    async fn add_or_update_object(
        &self,
        object_id: &str,
        record: &IndexRecord,
    ) -> Result<(), IndexError> {
        let url = self.object_url(object_id)?;
        let body = serde_json::to_vec(record)
            .map_err(|e| IndexError::InvalidRequest(format!("failed to encode record: {e}")))?;

        let response = self
            .client
            .put(url)
            .headers(self.headers()?)
            .body(body)
            .send()
            .await
            .map_err(|e| IndexError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::handle_error_response(response).await)
        }
    }
}
