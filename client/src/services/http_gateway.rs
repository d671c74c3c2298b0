//! HTTP gateway to the warehouse service

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use shared::{
    EligibilityResponse, ProcessReport, ProcessRequest, ServiceHealth, SharedError, StatsResponse,
    UploadReceipt, Workflow, endpoints, workflow_debug,
};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::traits::WarehouseGateway;
use crate::types::{EligibilityQuery, UploadSelection};

/// Gateway that talks HTTP/JSON to a single service origin
#[derive(Clone)]
pub struct RealWarehouseGateway {
    config: ClientConfig,
    client: reqwest::Client,
}

impl RealWarehouseGateway {
    /// Create a gateway for the configured origin
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Decode a JSON body, treating any non-2xx status as a failure
    async fn read_json<T>(endpoint: &str, response: reqwest::Response) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::MalformedResponse {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl WarehouseGateway for RealWarehouseGateway {
    async fn upload_file(&self, selection: UploadSelection) -> ClientResult<UploadReceipt> {
        let url = self.config.endpoint_url(endpoints::UPLOAD);
        workflow_debug!(Workflow::Upload, "POST {} ({})", url, selection.file_name);

        let media_type = selection.media_type.clone();
        let part = Part::bytes(selection.content)
            .file_name(selection.file_name)
            .mime_str(&media_type)
            .map_err(|_| SharedError::invalid_value("media_type", &media_type))?;
        let form = Form::new().part(endpoints::UPLOAD_FIELD, part);

        let response = self.client.post(&url).multipart(form).send().await?;
        Self::read_json(endpoints::UPLOAD, response).await
    }

    async fn process_file(&self, file_path: &str) -> ClientResult<ProcessReport> {
        let url = self.config.endpoint_url(endpoints::PROCESS);
        workflow_debug!(Workflow::Upload, "POST {} ({})", url, file_path);

        let request = ProcessRequest {
            file_path: file_path.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        Self::read_json(endpoints::PROCESS, response).await
    }

    async fn check_eligibility(&self, query: EligibilityQuery) -> ClientResult<EligibilityResponse> {
        let url = self.config.endpoint_url(endpoints::CHECK_ELIGIBILITY);
        workflow_debug!(Workflow::Eligibility, "POST {}", url);

        let response = self.client.post(&url).json(&query).send().await?;
        Self::read_json(endpoints::CHECK_ELIGIBILITY, response).await
    }

    async fn fetch_statistics(&self) -> ClientResult<StatsResponse> {
        let url = self.config.endpoint_url(endpoints::STATS);
        workflow_debug!(Workflow::Statistics, "GET {}", url);

        let response = self.client.get(&url).send().await?;
        Self::read_json(endpoints::STATS, response).await
    }

    async fn health(&self) -> ClientResult<ServiceHealth> {
        let url = self.config.endpoint_url(endpoints::HEALTH);
        let response = self.client.get(&url).send().await?;
        Self::read_json(endpoints::HEALTH, response).await
    }
}
