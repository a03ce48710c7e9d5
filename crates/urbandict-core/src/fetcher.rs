//! Lookups against the remote dictionary service.
//!
//! Each call passes the rate gate first, then performs exactly one GET and
//! decodes the body. The HTTP response is owned by the call scope, so its
//! connection is released on every exit path, including status and decode
//! failures.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use urbandict_config::api::ApiConfig;

use crate::error::{LookupError, LookupResult};
use crate::gate::{Admission, RateGate};
use crate::model::Response;

/// Dictionary lookup interface
#[async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Definitions for a term
    async fn define(&self, term: &str) -> LookupResult<Response>;

    /// A single definition by its identifier
    async fn define_by_id(&self, id: i64) -> LookupResult<Response>;

    /// A random selection of definitions
    async fn random(&self) -> LookupResult<Response>;
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    define_url: String,
    random_url: String,
    gate: Arc<RateGate>,
}

impl Fetcher {
    pub fn new(config: &ApiConfig) -> LookupResult<Self> {
        let gate = Arc::new(RateGate::new(config.min_interval()));
        Self::with_gate(config, gate)
    }

    /// Share an existing gate, e.g. between fetchers or with a test clock
    pub fn with_gate(config: &ApiConfig, gate: Arc<RateGate>) -> LookupResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            define_url: config.define_url(),
            random_url: config.random_url(),
            gate,
        })
    }

    pub fn gate(&self) -> &Arc<RateGate> {
        &self.gate
    }

    async fn call(&self, request: reqwest::RequestBuilder) -> LookupResult<Response> {
        if let Admission::Denied { retry_after } = self.gate.try_acquire() {
            return Err(LookupError::RateLimited { retry_after });
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "lookup response");

        classify(status)?;

        let body = response.bytes().await?;
        // A bare `null` body means "nothing found", not a broken document
        let decoded = serde_json::from_slice::<Option<Response>>(&body)?.unwrap_or_default();
        tracing::debug!(count = decoded.len(), "decoded definitions");

        Ok(decoded)
    }
}

/// Map 4xx/5xx to their error kinds; anything else is treated as success
fn classify(status: StatusCode) -> LookupResult<()> {
    let code = status.as_u16();
    match code {
        500.. => Err(LookupError::Server { status: code }),
        400..=499 => Err(LookupError::Client { status: code }),
        _ => Ok(()),
    }
}

#[async_trait]
impl DictionaryLookup for Fetcher {
    async fn define(&self, term: &str) -> LookupResult<Response> {
        let request = self.client.get(&self.define_url).query(&[("term", term)]);
        self.call(request).await
    }

    async fn define_by_id(&self, id: i64) -> LookupResult<Response> {
        let request = self.client.get(&self.define_url).query(&[("defid", id)]);
        self.call(request).await
    }

    async fn random(&self) -> LookupResult<Response> {
        let request = self.client.get(&self.random_url);
        self.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert!(classify(StatusCode::OK).is_ok());
        assert!(classify(StatusCode::NOT_MODIFIED).is_ok());
        assert!(matches!(
            classify(StatusCode::NOT_FOUND),
            Err(LookupError::Client { status: 404 })
        ));
        assert!(matches!(
            classify(StatusCode::BAD_REQUEST),
            Err(LookupError::Client { status: 400 })
        ));
        assert!(matches!(
            classify(StatusCode::INTERNAL_SERVER_ERROR),
            Err(LookupError::Server { status: 500 })
        ));
        assert!(matches!(
            classify(StatusCode::SERVICE_UNAVAILABLE),
            Err(LookupError::Server { status: 503 })
        ));
    }
}
