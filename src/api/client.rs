use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tokio::time::timeout;

use super::error::ApiError;
use super::target::{HttpMethod, Target};
use crate::config::ApiConfig;
use crate::storage::{TokenKind, TokenStore};

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Envelope wrapped around every API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// HTTP client bound to one API base URL.
///
/// When a [`TokenStore`] is attached, the stored access token is sent as a
/// bearer token on every request.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    request_timeout: Duration,
    tokens: Option<TokenStore>,
}

impl HttpClient {
    pub fn new(config: &ApiConfig, tokens: Option<TokenStore>) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("base url '{}': {}", config.base_url, e)))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url,
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
            tokens,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue `target` and decode the `data` field of the response envelope.
    pub async fn request<T: DeserializeOwned>(&self, target: &dyn Target) -> Result<T, ApiError> {
        let path = target.path();
        let body = self.send(target).await?;
        let envelope: ApiResponse<T> =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
                path: path.clone(),
                source,
            })?;
        envelope.data.ok_or(ApiError::EmptyData { path })
    }

    /// Issue `target` for its side effect; the envelope's data is ignored.
    pub async fn execute(&self, target: &dyn Target) -> Result<(), ApiError> {
        let path = target.path();
        let body = self.send(target).await?;
        if body.is_empty() {
            return Ok(());
        }
        serde_json::from_slice::<ApiResponse<Value>>(&body)
            .map(|_| ())
            .map_err(|source| ApiError::Decode { path, source })
    }

    async fn send(&self, target: &dyn Target) -> Result<Vec<u8>, ApiError> {
        match timeout(self.request_timeout, self.do_send(target)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_send(&self, target: &dyn Target) -> Result<Vec<u8>, ApiError> {
        let method = target.method();
        let mut url = self.url_for(&target.path())?;
        let parameters = target.parameters();

        let sends_query = matches!(method, HttpMethod::Get | HttpMethod::Delete);
        if sends_query {
            if let Some(params) = &parameters {
                append_query(&mut url, params)?;
            }
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(
            method = ?method,
            url = %url,
            request_id = %request_id,
            "Sending API request"
        );

        let mut builder = self
            .client
            .request(method.to_reqwest(), url.clone())
            .header(REQUEST_ID_HEADER, request_id.as_str());

        for (name, value) in target.headers() {
            builder = builder.header(name, value);
        }

        if let Some(token) = self.tokens.as_ref().and_then(|t| t.token(TokenKind::Access)) {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.expose()));
        }

        if !sends_query {
            if let Some(params) = &parameters {
                builder = builder.json(params);
            }
        }

        let response = builder.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?
            .to_vec();

        if !status.is_success() {
            let (code, message) = serde_json::from_slice::<ApiResponse<Value>>(&body)
                .map(|envelope| (envelope.code, envelope.message))
                .unwrap_or_else(|_| (String::new(), String::from_utf8_lossy(&body).into_owned()));
            tracing::warn!(
                status = status.as_u16(),
                code = %code,
                request_id = %request_id,
                "API request failed"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                code,
                message,
            });
        }

        Ok(body)
    }

    fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}{}", base, path))
            .map_err(|e| ApiError::InvalidRequest(format!("path '{}': {}", path, e)))
    }
}

fn append_query(url: &mut Url, params: &Value) -> Result<(), ApiError> {
    let Value::Object(map) = params else {
        return Err(ApiError::InvalidRequest(
            "query parameters must be a JSON object".to_string(),
        ));
    };
    let mut pairs = url.query_pairs_mut();
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::String(s) => {
                pairs.append_pair(key, s);
            }
            other => {
                pairs.append_pair(key, &other.to_string());
            }
        }
    }
    Ok(())
}
