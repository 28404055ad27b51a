//! ModelDeck core: upstream model listing, vendor grouping and page rendering.
//!
//! The server crate wires these pieces behind a single HTTP route; everything
//! here is request-scoped apart from the immutable [`AppConfig`].

pub mod classifier;
pub mod config;
pub mod error;
pub mod groups;
pub mod render;
pub mod upstream;

pub use classifier::{GroupedModels, ModelGroup, classify};
pub use config::{AppConfig, ServerSettings, SiteSettings, UpstreamSettings};
pub use error::FetchError;
pub use groups::{GroupDefinition, GroupTable};
pub use render::{ModelListing, PageRenderer};
pub use upstream::{ModelSource, UpstreamClient};

/// Opaque model identifier as returned by the upstream listing API.
pub type ModelId = String;
