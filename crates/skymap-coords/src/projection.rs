use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A validated right ascension / declination pair, both in degrees.
///
/// Values are not range-checked: a declination outside [-90, 90] still
/// projects to a point on the sphere. Only finiteness is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyCoord {
    /// Right ascension in degrees (the source datasets use [-180, 180]).
    pub ra_deg: f64,
    /// Declination in degrees.
    pub dec_deg: f64,
}

impl SkyCoord {
    /// Build a coordinate pair, rejecting NaN and infinite components.
    #[must_use]
    pub fn new(ra_deg: f64, dec_deg: f64) -> Option<Self> {
        (ra_deg.is_finite() && dec_deg.is_finite()).then_some(Self { ra_deg, dec_deg })
    }

    /// Project this coordinate onto a sphere of the given radius.
    #[must_use]
    pub fn to_cartesian(self, radius: f64) -> DVec3 {
        project(self.ra_deg, self.dec_deg, radius)
    }
}

/// Project `(ra, dec)` in degrees onto a sphere of `radius`.
///
/// `x = r cos(dec) cos(ra)`, `y = r sin(dec)`, `z = -r cos(dec) sin(ra)`.
///
/// Total over the reals. Non-finite input yields non-finite output; callers
/// check the result with [`is_finite_point`] and drop it.
#[must_use]
pub fn project(ra_deg: f64, dec_deg: f64, radius: f64) -> DVec3 {
    let (ra_sin, ra_cos) = ra_deg.to_radians().sin_cos();
    let (dec_sin, dec_cos) = dec_deg.to_radians().sin_cos();
    DVec3::new(
        radius * dec_cos * ra_cos,
        radius * dec_sin,
        -radius * dec_cos * ra_sin,
    )
}

/// Inverse of [`project`]: recover `(ra, dec)` from a point on any sphere.
///
/// RA is returned in (-180, 180], Dec in [-90, 90]. At the poles RA is
/// degenerate and comes back as 0. Returns `None` for the origin or a
/// non-finite point.
#[must_use]
pub fn unproject(point: DVec3) -> Option<SkyCoord> {
    if !is_finite_point(point) {
        return None;
    }
    let radius = point.length();
    if radius == 0.0 {
        return None;
    }
    let dec = (point.y / radius).clamp(-1.0, 1.0).asin().to_degrees();
    let ra = if point.x == 0.0 && point.z == 0.0 {
        0.0
    } else {
        (-point.z).atan2(point.x).to_degrees()
    };
    SkyCoord::new(ra, dec)
}

/// True when every component of `point` is finite.
#[must_use]
pub fn is_finite_point(point: DVec3) -> bool {
    point.is_finite()
}
