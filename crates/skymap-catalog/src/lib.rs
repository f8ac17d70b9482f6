//! Constellation catalog: dataset ingestion, per-constellation geometry, and the
//! line/info dataset join.
//!
//! Raw JSON is validated once at the boundary ([`schema`]) into typed features.
//! The geometry builder and the join operate only on those typed values and
//! never fail: malformed data degrades to a missing vertex, segment, or
//! constellation, reported through `tracing`.

pub mod catalog;
pub mod details;
pub mod error;
pub mod geometry;
pub mod schema;

pub use catalog::{CatalogStats, JoinedFeature, RenderEntry, SkyCatalog, join_datasets};
pub use details::ConstellationDetails;
pub use error::{DatasetError, SchemaError};
pub use geometry::{CONSTELLATION_RADIUS, ConstellationGeometry, build_geometry};
pub use schema::{
    ConstellationId, Feature, FeatureCollection, InfoDataset, InfoFeature, InfoProperties,
    LineDataset, LineFeature, Polyline, load_json_file,
};
