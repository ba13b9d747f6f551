//! Client and field normalizer for the Korea tour information REST API.
//!
//! Upstream records use unstable, category-suffixed field names and mix
//! integers, flag codes and HTML fragments. [`TourClient`] fetches them and
//! hands back records with stable names and coerced values.
//!
//! ```text
//! Transport ──► pagination ──► normalize (common / category / image) ──► TourClient
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod transport;

pub use client::TourClient;
pub use config::{AreaCode, ClientConfig, MobileOs};
pub use error::{ApiError, Result};
pub use normalize::{CanonicalRecord, ContentType, ImageRecord, RawRecord};
pub use transport::{HttpTransport, Transport, TransportError};
