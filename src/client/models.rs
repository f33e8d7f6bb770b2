//! Predict request executor.

use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::{PredictRequest, PredictResponse};
use crate::Result;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, warn};

/// Identifying client header sent with every request.
const USER_AGENT: &str = concat!("astrux-rust/", env!("CARGO_PKG_VERSION"));

/// Client for model operations.
#[derive(Debug)]
pub struct ModelsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ModelsClient {
    pub(crate) fn new(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    /// Run a prediction.
    ///
    /// Performs exactly one round trip: validate the request, POST it to the
    /// predict endpoint, and map the response into a [`PredictResponse`] or
    /// a classified [`Error`]. The call is aborted if the configured timeout
    /// elapses before the body is read.
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        if request.model.is_empty() {
            return Err(Error::validation("`model` is required"));
        }
        if !request.input.is_object() {
            return Err(Error::validation("`input` must be an object"));
        }

        let url = format!("{}/predict", self.config.base_url.trim_end_matches('/'));
        debug!(model = %request.model, "sending predict request");

        let exchange = async {
            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::USER_AGENT, USER_AGENT)
                .json(request)
                .send()
                .await
                .map_err(|e| Error::other(format!("Predict request failed: {}", e)))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| Error::other(format!("Failed to read predict response: {}", e)))?;
            Ok::<(reqwest::StatusCode, String), Error>((status, body))
        };

        // Dropping the in-flight future on expiry aborts the request; the
        // timer itself cannot outlive this call.
        let (status, body) = tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| {
                Error::other(format!(
                    "Request timed out after {}ms",
                    self.config.timeout.as_millis()
                ))
            })??;

        // An unparseable body is treated the same as no body.
        let payload: Option<Value> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            let err = Error::from_http_status(status.as_u16(), &body, payload);
            warn!(
                status = status.as_u16(),
                kind = err.kind(),
                "predict request failed"
            );
            return Err(err);
        }

        debug!(status = status.as_u16(), "predict request succeeded");
        Ok(PredictResponse::from_payload(payload))
    }
}
