//! Rounded position keys for star deduplication.

use glam::DVec3;

/// Decimal places used when deciding whether two projected stars coincide.
pub const DEDUP_DECIMALS: u32 = 3;

/// A hashable key for a projected position, each component rounded to a fixed
/// number of decimal places.
///
/// Two positions map to the same key when they agree after rounding, so
/// vertices shared between polylines collapse into a single star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([i64; 3]);

impl PositionKey {
    /// Key with the default precision of [`DEDUP_DECIMALS`].
    #[must_use]
    pub fn new(point: DVec3) -> Self {
        Self::with_decimals(point, DEDUP_DECIMALS)
    }

    /// Key with an explicit number of decimal places.
    ///
    /// `point` must be finite; non-finite components saturate and are not
    /// meaningful keys.
    #[must_use]
    pub fn with_decimals(point: DVec3, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        let round = |v: f64| (v * scale).round() as i64;
        Self([round(point.x), round(point.y), round(point.z)])
    }
}
