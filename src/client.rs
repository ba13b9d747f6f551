use tracing::{debug, info};

use crate::config::{ClientConfig, Endpoints};
use crate::error::{ApiError, Result};
use crate::normalize::{
    normalize_detail_common, normalize_images, normalize_intro, normalize_listing, CanonicalRecord,
    ContentType, ImageRecord, RawRecord,
};
use crate::pagination::{fetch_all, fetch_items};
use crate::transport::{HttpTransport, Transport};

/// Blocking client over the tour information service.
///
/// Every call fetches fresh data and normalizes it. Nothing is cached
/// between calls.
pub struct TourClient<T: Transport> {
    transport: T,
    endpoints: Endpoints,
}

impl TourClient<HttpTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(TourClient::new(config, transport))
    }
}

impl<T: Transport> TourClient<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        TourClient {
            transport,
            endpoints: Endpoints::new(config),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All tour listings for the configured area.
    pub fn list_tours(&self) -> Result<Vec<CanonicalRecord>> {
        let raw = fetch_all(&self.transport, self.endpoints.tour_list())?.unwrap_or_default();
        info!("Fetched {} tour listings", raw.len());
        Ok(raw.into_iter().map(normalize_listing).collect())
    }

    pub fn detail_common(&self, content_id: i64) -> Result<CanonicalRecord> {
        self.fetch_common(content_id).map(normalize_detail_common)
    }

    /// Category-specific fields. The category is looked up first through
    /// the common detail, since `detailIntro` requires it.
    pub fn detail_intro(&self, content_id: i64) -> Result<CanonicalRecord> {
        let common = self.fetch_common(content_id)?;
        let content_type = common
            .get("contenttypeid")
            .and_then(ContentType::from_value)
            .ok_or_else(|| {
                ApiError::Envelope(format!("content {} has no content type", content_id))
            })?;
        debug!(content_id, content_type = content_type.code(), "resolved content type");

        let url = self.endpoints.detail_intro(content_id, content_type.code());
        let raw = first_item(fetch_items(&self.transport, &url)?, content_id)?;
        Ok(normalize_intro(raw, content_type))
    }

    /// `None` when the content has no gallery.
    pub fn images(&self, content_id: i64) -> Result<Option<Vec<ImageRecord>>> {
        let raw = fetch_all(&self.transport, &self.endpoints.detail_image(content_id))?;
        let images = normalize_images(raw);
        info!(
            content_id,
            count = images.as_ref().map_or(0, Vec::len),
            "Fetched images"
        );
        Ok(images)
    }

    fn fetch_common(&self, content_id: i64) -> Result<RawRecord> {
        let url = self.endpoints.detail_common(content_id);
        first_item(fetch_items(&self.transport, &url)?, content_id)
    }
}

fn first_item(items: Option<Vec<RawRecord>>, content_id: i64) -> Result<RawRecord> {
    items
        .and_then(|list| list.into_iter().next())
        .ok_or_else(|| ApiError::Envelope(format!("no item returned for content {}", content_id)))
}
