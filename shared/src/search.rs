//! Construction of the provider search query and reshaping of its response.

use serde::Serialize;

use crate::types::{GalleryFile, GalleryPage, ProviderAsset, SearchResponse};

/// Page size requested from the provider on every call
pub const MAX_RESULTS: u32 = 100;

/// Filters applied regardless of folder scope
const BASE_EXPRESSION: &str = "resource_type:image AND type:upload";

/// Form body of a `resources/search` call
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchQuery {
    pub expression: String,
    pub max_results: u32,
    pub sort_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl SearchQuery {
    /// Build the query for one gallery page. An empty cursor is treated as
    /// the first page.
    pub fn new(folder: Option<&str>, cursor: Option<&str>) -> Self {
        Self {
            expression: build_expression(folder),
            max_results: MAX_RESULTS,
            sort_by: sort_descriptor(),
            next_cursor: cursor
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string()),
        }
    }
}

/// Wrap a value in double quotes so the search parser reads it as a single
/// token. Backslashes and quotes inside the value are backslash-escaped.
pub fn quote_search_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

/// Search expression for uploaded images, optionally limited to one folder
pub fn build_expression(folder: Option<&str>) -> String {
    match folder.map(str::trim).filter(|f| !f.is_empty()) {
        Some(folder) => format!("{} AND folder={}", BASE_EXPRESSION, quote_search_value(folder)),
        None => BASE_EXPRESSION.to_string(),
    }
}

/// Newest first, as the JSON array descriptor the search endpoint expects
pub fn sort_descriptor() -> String {
    serde_json::json!([{ "created_at": "desc" }]).to_string()
}

/// Last `/`-delimited segment of a public id
pub fn file_name(public_id: &str) -> &str {
    public_id.rsplit('/').next().unwrap_or(public_id)
}

impl From<ProviderAsset> for GalleryFile {
    fn from(asset: ProviderAsset) -> Self {
        let name = file_name(&asset.public_id).to_string();
        Self {
            url: asset.secure_url,
            name,
            bytes: asset.bytes,
            format: asset.format,
            created_at: asset.created_at,
        }
    }
}

impl From<SearchResponse> for GalleryPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            files: response.resources.into_iter().map(GalleryFile::from).collect(),
            next_cursor: response.next_cursor.filter(|c| !c.is_empty()),
        }
    }
}
