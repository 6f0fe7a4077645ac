pub mod types;
pub mod config;
pub mod error;
pub mod search;
pub mod cloudinary;
pub mod responses;

use cloudinary::{CloudinaryClient, SearchApi};
use config::GalleryConfig;
use error::GalleryError;
use std::sync::Arc;

/// Shared application state
pub struct GalleryState {
    pub config: GalleryConfig,
    pub search_api: Arc<dyn SearchApi>,
}

impl GalleryState {
    pub fn new(config: GalleryConfig, search_api: Arc<dyn SearchApi>) -> Arc<Self> {
        Arc::new(Self { config, search_api })
    }

    /// State backed by the real Cloudinary client
    pub fn from_config(config: GalleryConfig) -> Result<Arc<Self>, GalleryError> {
        let client = CloudinaryClient::new(&config)?;
        Ok(Self::new(config, Arc::new(client)))
    }
}
