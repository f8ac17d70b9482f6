//! Per-constellation geometry: deduplicated star positions and line-segment
//! endpoint buffers projected onto the constellation sphere.

use glam::DVec3;
use rustc_hash::FxHashSet;
use skymap_coords::{PositionKey, SkyCoord, is_finite_point};
use tracing::{debug, error, warn};

use crate::schema::{ConstellationId, Polyline};

/// Radius of the sphere constellations are drawn on, in scene units.
pub const CONSTELLATION_RADIUS: f64 = 150.0;

/// Floats per emitted segment: two endpoints of three components each.
const FLOATS_PER_SEGMENT: usize = 6;

/// Renderable geometry for one constellation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstellationGeometry {
    stars: Vec<DVec3>,
    lines: Vec<f64>,
    rejected_segments: usize,
}

impl ConstellationGeometry {
    /// Unique star positions, in first-seen order.
    #[must_use]
    pub fn stars(&self) -> &[DVec3] {
        &self.stars
    }

    /// Flat segment endpoint buffer `[x0, y0, z0, x1, y1, z1, ...]`.
    ///
    /// Always a multiple of six long.
    #[must_use]
    pub fn lines(&self) -> &[f64] {
        &self.lines
    }

    /// Number of line segments in [`lines`](Self::lines).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.lines.len() / FLOATS_PER_SEGMENT
    }

    /// Segments dropped because a projected endpoint was not finite.
    #[must_use]
    pub fn rejected_segments(&self) -> usize {
        self.rejected_segments
    }

    /// A constellation without stars has no visual representation.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        !self.stars.is_empty()
    }

    /// Star positions narrowed to `f32` for vertex upload.
    #[must_use]
    pub fn star_buffer_f32(&self) -> Vec<[f32; 3]> {
        self.stars.iter().map(|p| p.as_vec3().to_array()).collect()
    }

    /// Segment endpoints narrowed to `f32`, one entry per endpoint.
    #[must_use]
    pub fn line_buffer_f32(&self) -> Vec<[f32; 3]> {
        self.lines
            .chunks_exact(3)
            .map(|c| [c[0] as f32, c[1] as f32, c[2] as f32])
            .collect()
    }

    /// Raw bytes of [`star_buffer_f32`](Self::star_buffer_f32).
    #[must_use]
    pub fn star_vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.star_buffer_f32()).to_vec()
    }

    /// Raw bytes of [`line_buffer_f32`](Self::line_buffer_f32).
    #[must_use]
    pub fn line_vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.line_buffer_f32()).to_vec()
    }
}

/// Accumulates segments for a single constellation.
struct GeometryBuilder<'a> {
    id: &'a ConstellationId,
    radius: f64,
    seen: FxHashSet<PositionKey>,
    stars: Vec<DVec3>,
    lines: Vec<f64>,
    rejected_segments: usize,
}

impl<'a> GeometryBuilder<'a> {
    fn new(id: &'a ConstellationId, radius: f64) -> Self {
        Self {
            id,
            radius,
            seen: FxHashSet::default(),
            stars: Vec::new(),
            lines: Vec::new(),
            rejected_segments: 0,
        }
    }

    fn push_segment(&mut self, from: SkyCoord, to: SkyCoord) {
        let a = from.to_cartesian(self.radius);
        let b = to.to_cartesian(self.radius);
        if !is_finite_point(a) || !is_finite_point(b) {
            warn!(
                id = %self.id,
                ra1 = from.ra_deg, dec1 = from.dec_deg,
                ra2 = to.ra_deg, dec2 = to.dec_deg,
                "Projection produced a non-finite point, skipping segment"
            );
            self.rejected_segments += 1;
            return;
        }

        self.lines.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
        self.push_star(a);
        self.push_star(b);
    }

    fn push_star(&mut self, point: DVec3) {
        if self.seen.insert(PositionKey::new(point)) {
            self.stars.push(point);
        }
    }

    fn finish(self) -> ConstellationGeometry {
        if self.lines.len() % FLOATS_PER_SEGMENT != 0 {
            error!(
                id = %self.id,
                len = self.lines.len(),
                "Line buffer is not a whole number of segments, dropping constellation"
            );
            return ConstellationGeometry {
                rejected_segments: self.rejected_segments,
                ..ConstellationGeometry::default()
            };
        }
        if self.stars.is_empty() {
            debug!(id = %self.id, "Constellation has no renderable geometry");
        }
        ConstellationGeometry {
            stars: self.stars,
            lines: self.lines,
            rejected_segments: self.rejected_segments,
        }
    }
}

/// Project every segment of `polylines` onto a sphere of `radius` and collect
/// the deduplicated stars and the segment buffer.
///
/// Stars are keyed by their position rounded to three decimals; the first
/// occurrence wins. Output order follows input order, so identical input
/// always yields identical buffers.
#[must_use]
pub fn build_geometry(
    id: &ConstellationId,
    polylines: &[Polyline],
    radius: f64,
) -> ConstellationGeometry {
    let mut builder = GeometryBuilder::new(id, radius);
    for polyline in polylines {
        for (from, to) in polyline.segments() {
            builder.push_segment(from, to);
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn polyline(points: &[(f64, f64)]) -> Polyline {
        Polyline::new(
            points
                .iter()
                .map(|&(ra, dec)| SkyCoord::new(ra, dec).unwrap())
                .collect(),
        )
        .unwrap()
    }

    fn id() -> ConstellationId {
        ConstellationId::new("Tst")
    }

    #[test]
    fn test_quarter_turn_segment() {
        let geometry = build_geometry(&id(), &[polyline(&[(0.0, 0.0), (90.0, 0.0)])], 150.0);

        let expected = [150.0, 0.0, 0.0, 0.0, 0.0, -150.0];
        assert_eq!(geometry.lines().len(), 6);
        for (actual, expected) in geometry.lines().iter().zip(expected) {
            assert!((actual - expected).abs() < EPS, "{:?}", geometry.lines());
        }
        assert_eq!(geometry.stars().len(), 2);
        assert_eq!(geometry.segment_count(), 1);
        assert!(geometry.is_renderable());
    }

    #[test]
    fn test_shared_vertex_produces_one_star() {
        let geometry = build_geometry(
            &id(),
            &[
                polyline(&[(10.0, 10.0), (20.0, 20.0)]),
                polyline(&[(20.0, 20.0), (30.0, 10.0)]),
            ],
            CONSTELLATION_RADIUS,
        );
        assert_eq!(geometry.segment_count(), 2);
        assert_eq!(geometry.stars().len(), 3);
    }

    #[test]
    fn test_near_coincident_vertices_collapse() {
        // 1e-7 degrees on a 150 radius sphere moves the point by ~2.6e-7 units.
        let geometry = build_geometry(
            &id(),
            &[
                polyline(&[(10.0, 10.0), (20.0, 20.0)]),
                polyline(&[(20.000_000_1, 20.0), (30.0, 10.0)]),
            ],
            CONSTELLATION_RADIUS,
        );
        assert_eq!(geometry.stars().len(), 3);
        assert_eq!(geometry.segment_count(), 2);
    }

    #[test]
    fn test_first_occurrence_order_is_kept() {
        let geometry = build_geometry(
            &id(),
            &[polyline(&[(0.0, 0.0), (90.0, 0.0), (0.0, 0.0)])],
            1.0,
        );
        assert_eq!(geometry.stars().len(), 2);
        assert!((geometry.stars()[0] - DVec3::X).length() < EPS);
        assert!((geometry.stars()[1] - DVec3::NEG_Z).length() < EPS);
        assert_eq!(geometry.segment_count(), 2);
    }

    #[test]
    fn test_build_is_deterministic() {
        let input = [
            polyline(&[(-170.0, 45.0), (-150.0, 50.0), (-130.0, 40.0)]),
            polyline(&[(-150.0, 50.0), (-160.0, 70.0)]),
        ];
        let a = build_geometry(&id(), &input, CONSTELLATION_RADIUS);
        let b = build_geometry(&id(), &input, CONSTELLATION_RADIUS);
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_polylines_yields_empty_geometry() {
        let geometry = build_geometry(&id(), &[], CONSTELLATION_RADIUS);
        assert!(geometry.stars().is_empty());
        assert!(geometry.lines().is_empty());
        assert!(!geometry.is_renderable());
    }

    #[test]
    fn test_non_finite_projection_discards_segments() {
        let geometry = build_geometry(
            &id(),
            &[polyline(&[(0.0, 0.0), (10.0, 10.0)])],
            f64::INFINITY,
        );
        assert_eq!(geometry.rejected_segments(), 1);
        assert!(geometry.lines().is_empty());
        assert!(!geometry.is_renderable());
    }

    #[test]
    fn test_line_buffer_is_whole_segments() {
        let geometry = build_geometry(
            &id(),
            &[polyline(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0), (15.0, -5.0)])],
            CONSTELLATION_RADIUS,
        );
        assert_eq!(geometry.lines().len() % 6, 0);
        assert_eq!(geometry.segment_count(), 3);
    }

    #[test]
    fn test_f32_buffers_and_bytes() {
        let geometry = build_geometry(&id(), &[polyline(&[(0.0, 0.0), (90.0, 0.0)])], 150.0);
        let stars = geometry.star_buffer_f32();
        assert_eq!(stars.len(), 2);
        assert!((stars[0][0] - 150.0).abs() < 1e-4);

        let lines = geometry.line_buffer_f32();
        assert_eq!(lines.len(), 2);
        assert!((lines[1][2] + 150.0).abs() < 1e-4);

        assert_eq!(geometry.star_vertex_bytes().len(), 2 * 12);
        assert_eq!(geometry.line_vertex_bytes().len(), 2 * 12);
    }
}
