// src/services/prediction_client.rs
use reqwest::Url;
use tracing::debug;

use crate::config::WidgetConfig;
use crate::error::ClientError;
use crate::message::{HealthData, PredictionResult};

/// One outbound prediction request per call. No retries, no timeout.
pub trait PredictionClient {
    fn predict(
        &self,
        data: &HealthData,
    ) -> impl Future<Output = Result<PredictionResult, ClientError>> + Send;
}

/// Posts the health record as JSON to the `predict` endpoint.
#[derive(Clone, Debug)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpPredictionClient {
    pub fn new(endpoint: Url) -> Self {
        Self { http: reqwest::Client::new(), endpoint }
    }

    pub fn from_config(config: &WidgetConfig) -> Self {
        Self::new(config.endpoint.clone())
    }
}

impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, data: &HealthData) -> Result<PredictionResult, ClientError> {
        debug!(endpoint = %self.endpoint, "posting health check");

        // `json` sets `Content-Type: application/json`.
        let response = self.http.post(self.endpoint.clone()).json(data).send().await?;

        // The status is not checked: any body that decodes is an answer.
        let status = response.status();
        let body = response.bytes().await?;
        let result: PredictionResult = serde_json::from_slice(&body)?;
        debug!(%status, risk = %result.risk, "prediction received");
        Ok(result)
    }
}
