//! Gateway for the review REST API.
//!
//! The [`ReviewGateway`] trait is the seam between the view layer and the
//! network: the TUI only ever talks to the trait, which keeps the controller
//! testable with mocks while [`HttpReviewGateway`] performs the real HTTP
//! calls through reqwest.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::GatewayError;
use super::models::{ApiPage, PageResult, Review, ReviewDraft};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Default base URL of the review API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const ERROR_BODY_LIMIT: usize = 160;

/// The five review API operations, used for logging and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiOperation {
    /// `GET /reviews?page=&per_page=`.
    ListPage,
    /// `GET /reviews/search?term=`.
    Search,
    /// `POST /reviews`.
    Create,
    /// `PUT /reviews/{id}`.
    Update,
    /// `DELETE /reviews/{id}`.
    Delete,
}

impl ApiOperation {
    /// Returns a stable lowercase name for log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListPage => "list_page",
            Self::Search => "search",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Gateway that can read and modify reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Fetch one page of reviews.
    async fn list_page(&self, page: u32, per_page: u8) -> Result<PageResult, GatewayError>;

    /// Fetch all reviews matching `term`, without pagination.
    async fn search(&self, term: &str) -> Result<Vec<Review>, GatewayError>;

    /// Create a review; the server assigns its id and date.
    async fn create(&self, draft: &ReviewDraft) -> Result<Review, GatewayError>;

    /// Replace the title and content of review `id`.
    async fn update(&self, id: u64, draft: &ReviewDraft) -> Result<Review, GatewayError>;

    /// Delete review `id`.
    async fn delete_by_id(&self, id: u64) -> Result<(), GatewayError>;
}

/// reqwest-backed gateway.
#[derive(Clone)]
pub struct HttpReviewGateway {
    client: Client,
    base_url: Url,
    telemetry: Arc<dyn TelemetrySink>,
}

impl std::fmt::Debug for HttpReviewGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpReviewGateway")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpReviewGateway {
    /// Builds a gateway for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Configuration`] when the URL cannot be parsed,
    /// cannot carry a path, or the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let parsed = Url::parse(base_url).map_err(|error| GatewayError::Configuration {
            message: format!("invalid API URL '{base_url}': {error}"),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(GatewayError::Configuration {
                message: format!("API URL '{base_url}' cannot carry a path"),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| GatewayError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: parsed,
            telemetry: Arc::new(NoopTelemetrySink),
        })
    }

    /// Routes request telemetry to `sink`.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Returns the configured API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::Configuration {
                message: format!("API URL '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: ApiOperation,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let start = Instant::now();
        let outcome = match send_checked(operation, request).await {
            Ok(response) => response
                .json::<T>()
                .await
                .map_err(|error| GatewayError::Decode {
                    message: error.to_string(),
                }),
            Err(error) => Err(error),
        };
        self.record(operation, start, outcome.is_ok());
        outcome
    }

    async fn fetch_empty(
        &self,
        operation: ApiOperation,
        request: RequestBuilder,
    ) -> Result<(), GatewayError> {
        let start = Instant::now();
        let outcome = send_checked(operation, request).await.map(|_| ());
        self.record(operation, start, outcome.is_ok());
        outcome
    }

    fn record(&self, operation: ApiOperation, start: Instant, success: bool) {
        let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.telemetry.record(TelemetryEvent::RequestCompleted {
            operation,
            latency_ms,
            success,
        });
    }
}

#[async_trait]
impl ReviewGateway for HttpReviewGateway {
    async fn list_page(&self, page: u32, per_page: u8) -> Result<PageResult, GatewayError> {
        if page == 0 {
            return Err(GatewayError::InvalidRequest {
                message: "page numbers start at 1".to_owned(),
            });
        }

        let url = self.endpoint(&["reviews"])?;
        let request = self
            .client
            .get(url)
            .query(&[("page", page), ("per_page", u32::from(per_page))]);

        self.fetch_json::<ApiPage>(ApiOperation::ListPage, request)
            .await
            .map(ApiPage::into_result)
    }

    async fn search(&self, term: &str) -> Result<Vec<Review>, GatewayError> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(GatewayError::InvalidRequest {
                message: "search term must not be empty".to_owned(),
            });
        }

        let url = self.endpoint(&["reviews", "search"])?;
        let request = self.client.get(url).query(&[("term", trimmed)]);
        self.fetch_json(ApiOperation::Search, request).await
    }

    async fn create(&self, draft: &ReviewDraft) -> Result<Review, GatewayError> {
        let url = self.endpoint(&["reviews"])?;
        let request = self.client.post(url).json(draft);
        self.fetch_json(ApiOperation::Create, request).await
    }

    async fn update(&self, id: u64, draft: &ReviewDraft) -> Result<Review, GatewayError> {
        let id_segment = id.to_string();
        let url = self.endpoint(&["reviews", id_segment.as_str()])?;
        let request = self.client.put(url).json(draft);
        self.fetch_json(ApiOperation::Update, request).await
    }

    async fn delete_by_id(&self, id: u64) -> Result<(), GatewayError> {
        let id_segment = id.to_string();
        let url = self.endpoint(&["reviews", id_segment.as_str()])?;
        let request = self.client.delete(url);
        self.fetch_empty(ApiOperation::Delete, request).await
    }
}

/// Sends `request` and turns transport failures and non-2xx statuses into
/// [`GatewayError`]s.
async fn send_checked(
    operation: ApiOperation,
    request: RequestBuilder,
) -> Result<Response, GatewayError> {
    let response = request.send().await.map_err(|error| {
        tracing::debug!(operation = operation.as_str(), "transport failure: {error}");
        GatewayError::Network {
            message: error.to_string(),
        }
    })?;

    let status = response.status();
    tracing::debug!(
        operation = operation.as_str(),
        status = status.as_u16(),
        url = %response.url(),
        "review API responded"
    );
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.map_or_else(
        |_| "(failed to read error response body)".to_owned(),
        |content| truncate_for_message(content.as_str(), ERROR_BODY_LIMIT),
    );
    Err(GatewayError::Server {
        status: status.as_u16(),
        message: body,
    })
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output: String = message.chars().take(max_chars).collect();
    if message.chars().nth(max_chars).is_some() {
        output.push_str("...");
    }
    output
}
