use thiserror::Error;

/// Failures of a single outbound Wikipedia call. The pipeline never surfaces
/// these to the consumer as a stream error: page failures collapse to "no
/// results" and image failures to [`ImageState::Failed`](super::ImageState).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    #[error("decoded image is empty")]
    EmptyImage,

    #[error("request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return FetchError::HttpStatus(status.as_u16());
        }

        if error.is_decode() {
            return FetchError::Deserialization(error.to_string());
        }

        FetchError::Network(error.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Deserialization(error.to_string())
    }
}

impl From<image::ImageError> for FetchError {
    fn from(error: image::ImageError) -> Self {
        FetchError::ImageDecode(error.to_string())
    }
}
