use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default lifetime of a signed download URL.
pub const DEFAULT_SIGNED_URL_SECS: u64 = 900;

#[derive(Debug, Serialize)]
pub struct MediaUploadResponse {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct MediaKeyQuery {
    pub key: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignedUrlQuery {
    pub key: String,
    /// SigV4 caps presigned URLs at seven days.
    #[serde(default = "default_signed_url_secs")]
    #[validate(range(
        min = 1,
        max = 604800,
        message = "expires_in_secs must be between 1 and 604800"
    ))]
    pub expires_in_secs: u64,
}

fn default_signed_url_secs() -> u64 {
    DEFAULT_SIGNED_URL_SECS
}

#[derive(Debug, Serialize)]
pub struct SignedUrlResponse {
    pub url: String,
    pub expires_in_secs: u64,
}
