//! Validation of the raw constellation datasets into typed features.
//!
//! Both datasets are GeoJSON-style feature collections:
//!
//! - line features: `{ id, geometry: { coordinates: [[[ra, dec], ...], ...] } }`
//! - info features: `{ id, properties: { name, desig, en, rank, info, la, ... },
//!   geometry: { coordinates: [ra, dec] } }`
//!
//! Validation is lenient per element and strict per collection. A collection
//! without a `features` array is a [`SchemaError`]; a bad feature, polyline, or
//! vertex is dropped with a diagnostic and its siblings are kept.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use skymap_coords::SkyCoord;
use tracing::{debug, warn};

use crate::error::{DatasetError, SchemaError};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Identifier shared by a constellation's line and info features.
///
/// The datasets use short string codes (`"Ori"`), but numeric ids are
/// accepted and compared by their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstellationId(String);

impl ConstellationId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_json(value: &Value) -> Option<Self> {
        loose_string(value).map(Self)
    }
}

impl fmt::Display for ConstellationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConstellationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ---------------------------------------------------------------------------
// Feature collections
// ---------------------------------------------------------------------------

/// A feature type that can be validated out of a raw JSON value.
pub trait Feature: Sized {
    /// Dataset name used in diagnostics.
    const DATASET: &'static str;

    /// Validate one raw feature. `None` drops the feature.
    fn from_json(value: &Value) -> Option<Self>;
}

/// A validated feature collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection<F> {
    /// Features that passed validation, in source order.
    pub features: Vec<F>,
    /// Number of raw features dropped during validation.
    pub rejected: usize,
}

/// Constellation line geometry, one feature per constellation.
pub type LineDataset = FeatureCollection<LineFeature>;

/// Constellation descriptive metadata, one feature per constellation.
pub type InfoDataset = FeatureCollection<InfoFeature>;

impl<F: Feature> FeatureCollection<F> {
    /// Validate a parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFeatureCollection`] if `value` has no
    /// `features` array.
    pub fn from_json(value: &Value) -> Result<Self, SchemaError> {
        let raw = value
            .get("features")
            .and_then(Value::as_array)
            .ok_or(SchemaError::NotFeatureCollection {
                dataset: F::DATASET,
            })?;

        let features: Vec<F> = raw.iter().filter_map(F::from_json).collect();
        let rejected = raw.len() - features.len();
        if rejected > 0 {
            warn!(dataset = F::DATASET, rejected, "Dropped malformed features");
        }
        Ok(Self { features, rejected })
    }

    /// Number of validated features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when no feature survived validation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<F> Default for FeatureCollection<F> {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            rejected: 0,
        }
    }
}

/// Read and parse a JSON dataset file.
///
/// # Errors
///
/// Returns [`DatasetError::Read`] if the file cannot be read and
/// [`DatasetError::Parse`] if it is not valid JSON.
pub fn load_json_file(path: &Path) -> Result<Value, DatasetError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Line features
// ---------------------------------------------------------------------------

/// A connected run of at least two validated vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<SkyCoord>,
}

impl Polyline {
    /// Build a polyline, or `None` if it has fewer than two vertices.
    #[must_use]
    pub fn new(points: Vec<SkyCoord>) -> Option<Self> {
        (points.len() >= 2).then_some(Self { points })
    }

    /// The vertices in order.
    #[must_use]
    pub fn points(&self) -> &[SkyCoord] {
        &self.points
    }

    /// Consecutive vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (SkyCoord, SkyCoord)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Validated line geometry for one constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFeature {
    pub id: ConstellationId,
    pub polylines: Vec<Polyline>,
    /// Vertices rejected as malformed while validating this feature.
    pub rejected_vertices: usize,
}

impl Feature for LineFeature {
    const DATASET: &'static str = "line";

    fn from_json(value: &Value) -> Option<Self> {
        let Some(id) = value.get("id").and_then(ConstellationId::from_json) else {
            warn!("Line feature without a usable id");
            return None;
        };

        let coordinates = value
            .get("geometry")
            .and_then(|g| g.get("coordinates"))
            .and_then(Value::as_array);
        let Some(coordinates) = coordinates else {
            warn!(%id, "Invalid line data structure, constellation has no geometry");
            return Some(Self {
                id,
                polylines: Vec::new(),
                rejected_vertices: 0,
            });
        };

        let mut polylines = Vec::new();
        let mut rejected_vertices = 0;
        for (index, raw) in coordinates.iter().enumerate() {
            let Some(vertices) = raw.as_array().filter(|v| v.len() >= 2) else {
                debug!(%id, polyline = index, "Skipping polyline with fewer than two entries");
                continue;
            };
            rejected_vertices += split_polyline(&id, index, vertices, &mut polylines);
        }

        Some(Self {
            id,
            polylines,
            rejected_vertices,
        })
    }
}

/// Push the valid runs of `vertices` onto `out`, splitting at malformed
/// vertices. Returns the number of malformed vertices.
///
/// Splitting drops exactly the segments that touch a bad vertex, so the
/// surviving segments are the same as skipping them one by one.
fn split_polyline(
    id: &ConstellationId,
    index: usize,
    vertices: &[Value],
    out: &mut Vec<Polyline>,
) -> usize {
    let mut rejected = 0;
    let mut run = Vec::with_capacity(vertices.len());
    for (vertex, raw) in vertices.iter().enumerate() {
        match parse_coord(raw) {
            Some(coord) => run.push(coord),
            None => {
                warn!(%id, polyline = index, vertex, "Skipping malformed coordinate pair");
                rejected += 1;
                out.extend(Polyline::new(std::mem::take(&mut run)));
            }
        }
    }
    out.extend(Polyline::new(run));
    rejected
}

/// A well-formed coordinate pair is a two-element array of finite numbers.
fn parse_coord(value: &Value) -> Option<SkyCoord> {
    match value.as_array()?.as_slice() {
        [ra, dec] => SkyCoord::new(ra.as_f64()?, dec.as_f64()?),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Info features
// ---------------------------------------------------------------------------

/// Descriptive metadata for a constellation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoProperties {
    /// Display name.
    pub name: Option<String>,
    /// Designation code (e.g. `"Ori"`).
    pub desig: Option<String>,
    /// English name.
    pub en: Option<String>,
    /// Rank, kept as text since datasets mix numbers and strings.
    pub rank: Option<String>,
    /// Descriptive text.
    pub info: Option<String>,
    /// Latin name, used as the description fallback.
    pub la: Option<String>,
    /// Any other properties, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const KNOWN_PROPERTIES: [&str; 6] = ["name", "desig", "en", "rank", "info", "la"];

impl InfoProperties {
    fn from_json(map: &Map<String, Value>) -> Self {
        let text = |key: &str| map.get(key).and_then(loose_string);
        Self {
            name: text("name"),
            desig: text("desig"),
            en: text("en"),
            rank: text("rank"),
            info: text("info"),
            la: text("la"),
            extra: map
                .iter()
                .filter(|(k, _)| !KNOWN_PROPERTIES.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// Validated metadata feature for one constellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoFeature {
    pub id: ConstellationId,
    pub properties: InfoProperties,
    /// Approximate center, for display only.
    pub center: Option<SkyCoord>,
}

impl Feature for InfoFeature {
    const DATASET: &'static str = "info";

    fn from_json(value: &Value) -> Option<Self> {
        let Some(id) = value.get("id").and_then(ConstellationId::from_json) else {
            warn!("Info feature without a usable id");
            return None;
        };

        let properties = match value.get("properties") {
            Some(Value::Object(map)) => InfoProperties::from_json(map),
            None | Some(Value::Null) => InfoProperties::default(),
            Some(_) => {
                warn!(%id, "Info feature properties are not an object, using defaults");
                InfoProperties::default()
            }
        };

        let center = value
            .get("geometry")
            .and_then(|g| g.get("coordinates"))
            .and_then(parse_coord);

        Some(Self {
            id,
            properties,
            center,
        })
    }
}

/// Strings pass through; numbers are rendered as decimal text.
fn loose_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coord(ra: f64, dec: f64) -> SkyCoord {
        SkyCoord::new(ra, dec).unwrap()
    }

    #[test]
    fn test_id_accepts_string_and_number() {
        assert_eq!(ConstellationId::from_json(&json!("Ori")), Some("Ori".into()));
        assert_eq!(ConstellationId::from_json(&json!(42)), Some("42".into()));
        assert_eq!(ConstellationId::from_json(&json!(null)), None);
        assert_eq!(ConstellationId::from_json(&json!(["Ori"])), None);
    }

    #[test]
    fn test_missing_features_is_schema_error() {
        let err = LineDataset::from_json(&json!({ "type": "FeatureCollection" })).unwrap_err();
        assert_eq!(err, SchemaError::NotFeatureCollection { dataset: "line" });

        let err = InfoDataset::from_json(&json!({ "features": {} })).unwrap_err();
        assert_eq!(err, SchemaError::NotFeatureCollection { dataset: "info" });
    }

    #[test]
    fn test_line_feature_parses_polylines() {
        let raw = json!({
            "id": "Cru",
            "geometry": { "coordinates": [[[0, 0], [10, 5], [20, 10]], [[30, -5], [40, -10]]] }
        });
        let feature = LineFeature::from_json(&raw).unwrap();
        assert_eq!(feature.id.as_str(), "Cru");
        assert_eq!(feature.polylines.len(), 2);
        assert_eq!(feature.polylines[0].points().len(), 3);
        assert_eq!(feature.polylines[0].segments().count(), 2);
        assert_eq!(feature.rejected_vertices, 0);
    }

    #[test]
    fn test_corrupt_vertex_splits_polyline() {
        let raw = json!({
            "id": "Ori",
            "geometry": { "coordinates": [[[0, 0], [1, 1], "bad", [2, 2], [3, 3]]] }
        });
        let feature = LineFeature::from_json(&raw).unwrap();
        assert_eq!(feature.rejected_vertices, 1);
        assert_eq!(feature.polylines.len(), 2);
        assert_eq!(feature.polylines[0].points(), &[coord(0.0, 0.0), coord(1.0, 1.0)]);
        assert_eq!(feature.polylines[1].points(), &[coord(2.0, 2.0), coord(3.0, 3.0)]);
    }

    #[test]
    fn test_isolated_vertex_between_bad_pairs_is_dropped() {
        let raw = json!({
            "id": "Ori",
            "geometry": { "coordinates": [[[0, 0], [1], [2, 2], ["x", 3], [4, 4], [5, 5]]] }
        });
        let feature = LineFeature::from_json(&raw).unwrap();
        assert_eq!(feature.rejected_vertices, 2);
        assert_eq!(feature.polylines.len(), 1);
        assert_eq!(feature.polylines[0].points(), &[coord(4.0, 4.0), coord(5.0, 5.0)]);
    }

    #[test]
    fn test_short_or_non_array_polylines_are_skipped() {
        let raw = json!({
            "id": "Lyr",
            "geometry": { "coordinates": [[[0, 0]], "nope", [[1, 1], [2, 2]]] }
        });
        let feature = LineFeature::from_json(&raw).unwrap();
        assert_eq!(feature.polylines.len(), 1);
    }

    #[test]
    fn test_missing_geometry_keeps_feature_without_polylines() {
        let feature = LineFeature::from_json(&json!({ "id": "And" })).unwrap();
        assert!(feature.polylines.is_empty());

        let feature =
            LineFeature::from_json(&json!({ "id": "And", "geometry": { "coordinates": 7 } }))
                .unwrap();
        assert!(feature.polylines.is_empty());
    }

    #[test]
    fn test_feature_without_id_is_rejected() {
        let dataset = LineDataset::from_json(&json!({
            "features": [
                { "geometry": { "coordinates": [] } },
                { "id": "Aql", "geometry": { "coordinates": [] } }
            ]
        }))
        .unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rejected, 1);
    }

    #[test]
    fn test_info_feature_properties() {
        let raw = json!({
            "id": "Ori",
            "properties": {
                "name": "Orion", "desig": "Ori", "en": "Hunter", "rank": 1,
                "la": "Orion", "gen": "Orionis"
            },
            "geometry": { "coordinates": [83.8, 5.9] }
        });
        let info = InfoFeature::from_json(&raw).unwrap();
        assert_eq!(info.properties.name.as_deref(), Some("Orion"));
        assert_eq!(info.properties.rank.as_deref(), Some("1"));
        assert_eq!(info.properties.info, None);
        assert_eq!(info.properties.extra.get("gen"), Some(&json!("Orionis")));
        assert!(!info.properties.extra.contains_key("name"));
        assert_eq!(info.center, Some(coord(83.8, 5.9)));
    }

    #[test]
    fn test_info_feature_tolerates_missing_properties() {
        let info = InfoFeature::from_json(&json!({ "id": 7 })).unwrap();
        assert_eq!(info.id.as_str(), "7");
        assert_eq!(info.properties, InfoProperties::default());
        assert_eq!(info.center, None);
    }

    #[test]
    fn test_load_json_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_json_file(&missing),
            Err(DatasetError::Read { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(
            load_json_file(&broken),
            Err(DatasetError::Parse { .. })
        ));

        let good = dir.path().join("good.json");
        std::fs::write(&good, r#"{ "features": [] }"#).unwrap();
        let value = load_json_file(&good).unwrap();
        assert!(LineDataset::from_json(&value).unwrap().is_empty());
    }
}
