//! Celestial sphere coordinates: right ascension / declination pairs and their
//! projection onto a Y-up Cartesian sphere.
//!
//! The projection convention is fixed for the whole workspace:
//!
//! - declination sets the height (`y`),
//! - right ascension rotates in the horizontal `xz` plane,
//! - the raw `z` term is negated so that RA increases clockwise when viewed
//!   from above, matching a sky-facing view from the sphere's center.
//!
//! ```rust
//! use skymap_coords::project;
//!
//! let p = project(0.0, 0.0, 150.0);
//! assert!((p.x - 150.0).abs() < 1e-9);
//! ```

mod key;
mod projection;

pub use key::{DEDUP_DECIMALS, PositionKey};
pub use projection::{SkyCoord, is_finite_point, project, unproject};
