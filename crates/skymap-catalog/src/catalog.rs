//! Joining line and info datasets into the constellation catalog.

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::geometry::{ConstellationGeometry, build_geometry};
use crate::schema::{ConstellationId, InfoDataset, InfoFeature, LineDataset, LineFeature};

/// A line feature paired with the info feature sharing its id.
#[derive(Debug, Clone, Copy)]
pub struct JoinedFeature<'a> {
    pub line: &'a LineFeature,
    pub info: &'a InfoFeature,
}

/// Pair every line feature with its info feature by id.
///
/// Output follows line-feature order. Line features with no info are skipped
/// with a warning; info features with no lines are skipped silently. When an
/// id repeats, the later feature replaces the earlier one in place.
#[must_use]
pub fn join_datasets<'a>(lines: &'a LineDataset, infos: &'a InfoDataset) -> Vec<JoinedFeature<'a>> {
    let mut info_by_id: FxHashMap<&ConstellationId, &InfoFeature> = FxHashMap::default();
    for feature in &infos.features {
        if info_by_id.insert(&feature.id, feature).is_some() {
            warn!(id = %feature.id, "Duplicate info feature, keeping the later one");
        }
    }

    let mut joined: Vec<JoinedFeature<'a>> = Vec::with_capacity(lines.len());
    let mut position: FxHashMap<&ConstellationId, usize> = FxHashMap::default();
    for line in &lines.features {
        let Some(info) = info_by_id.get(&line.id).copied() else {
            warn!(id = %line.id, "No info data found for constellation line");
            continue;
        };
        let entry = JoinedFeature { line, info };
        match position.get(&line.id) {
            Some(&index) => {
                warn!(id = %line.id, "Duplicate line feature, keeping the later one");
                joined[index] = entry;
            }
            None => {
                position.insert(&line.id, joined.len());
                joined.push(entry);
            }
        }
    }

    let unmatched = info_by_id.len() - position.len();
    if unmatched > 0 {
        debug!(unmatched, "Info features without line geometry");
    }
    joined
}

/// One joined, validated constellation ready for the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEntry {
    pub id: ConstellationId,
    pub geometry: ConstellationGeometry,
    pub info: InfoFeature,
}

/// Summary counts over a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    /// Joined constellations, renderable or not.
    pub constellations: usize,
    /// Constellations with at least one star.
    pub renderable: usize,
    /// Unique stars across all constellations.
    pub stars: usize,
    /// Line segments across all constellations.
    pub segments: usize,
    /// Segments dropped for non-finite projections.
    pub rejected_segments: usize,
    /// Malformed coordinate pairs dropped during validation.
    pub rejected_vertices: usize,
}

/// Every constellation's geometry and metadata, computed once from the
/// source datasets and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct SkyCatalog {
    entries: Vec<RenderEntry>,
    index: FxHashMap<ConstellationId, usize>,
    rejected_vertices: usize,
}

impl SkyCatalog {
    /// Join the datasets and build geometry for each constellation on a
    /// sphere of `radius`.
    #[must_use]
    pub fn build(lines: &LineDataset, infos: &InfoDataset, radius: f64) -> Self {
        let mut catalog = Self::default();
        for JoinedFeature { line, info } in join_datasets(lines, infos) {
            let geometry = build_geometry(&line.id, &line.polylines, radius);
            if !geometry.is_renderable() {
                warn!(id = %line.id, "Skipping render for constellation with no star points");
            }
            catalog.rejected_vertices += line.rejected_vertices;
            catalog.index.insert(line.id.clone(), catalog.entries.len());
            catalog.entries.push(RenderEntry {
                id: line.id.clone(),
                geometry,
                info: info.clone(),
            });
        }

        let stats = catalog.stats();
        info!(
            constellations = stats.constellations,
            renderable = stats.renderable,
            stars = stats.stars,
            segments = stats.segments,
            "Built constellation catalog"
        );
        catalog
    }

    /// Validate raw JSON datasets and build the catalog.
    ///
    /// Fails closed: if either document is not a feature collection, the
    /// error is logged and an empty catalog is returned.
    #[must_use]
    pub fn from_json(lines: &Value, infos: &Value, radius: f64) -> Self {
        let datasets = LineDataset::from_json(lines)
            .and_then(|lines| InfoDataset::from_json(infos).map(|infos| (lines, infos)));
        match datasets {
            Ok((lines, infos)) => Self::build(&lines, &infos, radius),
            Err(e) => {
                error!(error = %e, "Constellation data is missing or malformed");
                Self::default()
            }
        }
    }

    /// Look up a constellation by id.
    #[must_use]
    pub fn get(&self, id: &ConstellationId) -> Option<&RenderEntry> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// All entries in line-dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &RenderEntry> {
        self.entries.iter()
    }

    /// Entries that have at least one star.
    pub fn renderable(&self) -> impl Iterator<Item = &RenderEntry> {
        self.entries.iter().filter(|e| e.geometry.is_renderable())
    }

    /// Number of joined constellations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog has no constellations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate counts.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        self.entries.iter().fold(
            CatalogStats {
                rejected_vertices: self.rejected_vertices,
                ..CatalogStats::default()
            },
            |mut stats, entry| {
                let g = &entry.geometry;
                stats.constellations += 1;
                stats.renderable += usize::from(g.is_renderable());
                stats.stars += g.stars().len();
                stats.segments += g.segment_count();
                stats.rejected_segments += g.rejected_segments();
                stats
            },
        )
    }
}

impl<'a> IntoIterator for &'a SkyCatalog {
    type Item = &'a RenderEntry;
    type IntoIter = std::slice::Iter<'a, RenderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
