use serde::{Deserialize, Serialize};

// ========== PROVIDER ==========
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderAsset {
    pub secure_url: String,
    pub public_id: String, // e.g. "wedding/ceremony/IMG_0042"
    pub bytes: Option<u64>,
    pub format: Option<String>,
    pub created_at: Option<String>,
}

/// Body of a successful `resources/search` call. Fields the gallery does not
/// use (`total_count`, `time`, ...) are ignored.
#[derive(Debug, Deserialize, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub resources: Vec<ProviderAsset>,
    pub next_cursor: Option<String>,
}

// ========== GALLERY ==========
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GalleryFile {
    pub url: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GalleryPage {
    pub files: Vec<GalleryFile>,
    pub next_cursor: Option<String>, // serialized as null when absent
}

// ========== ERROR ==========
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
