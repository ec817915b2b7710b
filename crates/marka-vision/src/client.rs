use async_trait::async_trait;
use marka_config::service::ServiceConfig;
use marka_types::RecognitionResult;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

const ANALYZE_PATH: &str = "computervision/imageanalysis:analyze";
const API_VERSION: &str = "2023-10-01";
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Remote text-recognition capability.
///
/// The recognition algorithm itself lives behind this seam; tests substitute
/// a fake instead of talking to the network.
#[async_trait]
pub trait TextReader: Send + Sync {
    /// Analyze raw encoded image bytes (JPEG/PNG) for readable text.
    async fn analyze(&self, image: &[u8]) -> Result<RecognitionResult, ServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("authentication rejected by the service")]
    Authentication,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("service error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("empty image payload")]
    EmptyImage,
}

/// reqwest client for the image-analysis REST endpoint, requesting the
/// read/OCR feature only.
#[derive(Clone)]
pub struct ImageAnalysisClient {
    endpoint: String,
    key: String,
    client: reqwest::Client,
}

impl ImageAnalysisClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            key: config.key,
            client: reqwest::Client::new(),
        }
    }

    fn analyze_url(&self) -> String {
        format!("{}/{}", self.endpoint, ANALYZE_PATH)
    }
}

#[async_trait]
impl TextReader for ImageAnalysisClient {
    async fn analyze(&self, image: &[u8]) -> Result<RecognitionResult, ServiceError> {
        if image.is_empty() {
            return Err(ServiceError::EmptyImage);
        }

        tracing::debug!(bytes = image.len(), "sending image for analysis");

        let response = self
            .client
            .post(self.analyze_url())
            .query(&[("api-version", API_VERSION), ("features", "read")])
            .header(KEY_HEADER, &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, message));
        }

        Ok(response.json::<RecognitionResult>().await?)
    }
}

fn error_for_status(status: StatusCode, message: String) -> ServiceError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Authentication,
        StatusCode::TOO_MANY_REQUESTS => ServiceError::RateLimitExceeded,
        _ => ServiceError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
