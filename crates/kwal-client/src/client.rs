//! Request helper for the job board REST API.
//!
//! Every call goes through [`ApiClient::fetch`]:
//! - resolves an optional bearer token (failures downgrade to an anonymous request)
//! - serializes the body and sets `Content-Type` only when the caller did not
//! - maps 404 to `Ok(None)` and other non-2xx statuses to [`ApiError::Http`]
//! - unwraps the `{ "data": ... }` envelope into the requested type
//! - wraps the call in a tracing span and records request metrics

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

use crate::auth::TokenProvider;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::metrics::record_request;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Options of a single request.
#[derive(Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: HeaderMap,
    pub token_provider: Option<Arc<dyn TokenProvider>>,
}

impl std::fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestOptions")
            .field("method", &self.method)
            .field("body", &self.body)
            .field("headers", &self.headers)
            .field("authenticated", &self.token_provider.is_some())
            .finish()
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn auth(mut self, provider: Option<Arc<dyn TokenProvider>>) -> Self {
        self.token_provider = provider;
        self
    }
}

/// Status and `data` of a successful exchange.
struct Envelope {
    status: u16,
    data: Option<Value>,
}

/// Job board API client.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl ApiClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        url::Url::parse(&config.base_url).map_err(|e| {
            ApiError::config(format!("invalid base URL {:?}: {}", config.base_url, e))
        })?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("kwal-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.config.base_url, path)
        } else {
            format!("{}/{}", self.config.base_url, path)
        }
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    pub async fn get<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        auth: Option<Arc<dyn TokenProvider>>,
    ) -> ApiResult<Option<T>> {
        self.fetch(operation, path, RequestOptions::new(Method::GET).auth(auth))
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
        auth: Option<Arc<dyn TokenProvider>>,
    ) -> ApiResult<Option<T>> {
        let options = RequestOptions::new(Method::POST).json(body)?.auth(auth);
        self.fetch(operation, path, options).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
        auth: Option<Arc<dyn TokenProvider>>,
    ) -> ApiResult<Option<T>> {
        let options = RequestOptions::new(Method::PUT).json(body)?.auth(auth);
        self.fetch(operation, path, options).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        operation: &str,
        path: &str,
        body: &B,
        auth: Option<Arc<dyn TokenProvider>>,
    ) -> ApiResult<Option<T>> {
        let options = RequestOptions::new(Method::PATCH).json(body)?.auth(auth);
        self.fetch(operation, path, options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        auth: Option<Arc<dyn TokenProvider>>,
    ) -> ApiResult<Option<T>> {
        self.fetch(operation, path, RequestOptions::new(Method::DELETE).auth(auth))
            .await
    }

    // =========================================================================
    // Core
    // =========================================================================

    /// Issue a request and decode the `data` field of the response.
    ///
    /// `Ok(None)` means 404, an empty body, or a missing/null `data` field.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<Option<T>> {
        let method = options.method.clone();
        let envelope = self
            .execute_request(operation, &method, path, self.send(path, options))
            .await?;

        match envelope.data {
            None | Some(Value::Null) => Ok(None),
            Some(data) => serde_json::from_value(data).map(Some).map_err(|e| {
                warn!(operation, path, error = %e, "Unexpected response shape");
                ApiError::invalid_response(format!("Invalid response from API at {}: {}", path, e))
            }),
        }
    }

    async fn send(&self, path: &str, options: RequestOptions) -> ApiResult<Envelope> {
        let RequestOptions {
            method,
            body,
            mut headers,
            token_provider,
        } = options;

        if let Some(provider) = token_provider {
            if let Some(token) = resolve_token(provider.as_ref()).await {
                match HeaderValue::from_str(&format!("Bearer {}", token)) {
                    Ok(value) => {
                        headers.insert(AUTHORIZATION, value);
                    }
                    Err(_) => debug!("Token is not a valid header value; sending anonymously"),
                }
            }
        }

        if let Ok(request_id) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            headers.insert(REQUEST_ID_HEADER, request_id);
        }

        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            if !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            request = request.body(serde_json::to_vec(&body)?);
        }

        let response = request.headers(headers).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "API response");

        if status == StatusCode::NOT_FOUND {
            return Ok(Envelope {
                status: status.as_u16(),
                data: None,
            });
        }

        let text = response.text().await?;
        let json = if text.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str::<Value>(&text).map_err(|_| {
                ApiError::invalid_response(format!("Invalid JSON from API at {}", path))
            })?)
        };

        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), json));
        }

        Ok(Envelope {
            status: status.as_u16(),
            data: json.and_then(|mut body| body.get_mut("data").map(Value::take)),
        })
    }

    async fn execute_request<F>(
        &self,
        operation: &str,
        method: &Method,
        path: &str,
        fut: F,
    ) -> ApiResult<Envelope>
    where
        F: Future<Output = ApiResult<Envelope>>,
    {
        let span = info_span!("api_request", operation = %operation, method = %method, path = %path);

        let start = Instant::now();
        let result = fut.instrument(span).await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(envelope) => envelope.status,
            Err(e) => {
                warn!(operation, path, error = %e, "API request failed");
                e.status().unwrap_or(0)
            }
        };
        record_request(operation, status, latency_ms);

        result
    }
}

/// Resolve a token, treating errors and blank tokens as "no token".
async fn resolve_token(provider: &dyn TokenProvider) -> Option<String> {
    match provider.token().await {
        Ok(Some(token)) if !token.trim().is_empty() => Some(token),
        Ok(_) => None,
        Err(e) => {
            debug!(error = %e, "Token lookup failed; sending anonymously");
            None
        }
    }
}
