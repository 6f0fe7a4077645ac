use lambda_http::http::StatusCode;

/// Failure of a single gallery request. Everything except `Provider` and
/// `UpstreamTimeout` reaches the caller as a generic server error.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("provider rejected search with status {status}")]
    Provider { status: u16, body: String },

    #[error("provider did not answer within the configured timeout")]
    UpstreamTimeout,

    #[error("request to provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider returned an unreadable search response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl GalleryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GalleryError::Provider { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            GalleryError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `error` field of the response body
    pub fn public_message(&self) -> String {
        match self {
            GalleryError::Provider { body, .. } => body.clone(),
            GalleryError::UpstreamTimeout => "Upstream timeout".to_string(),
            _ => "Server error".to_string(),
        }
    }
}
