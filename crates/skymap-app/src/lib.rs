//! Sky map application: platform directories and the loaded session that ties
//! the catalog, starfield, and interaction state together.

pub mod platform;
pub mod session;

pub use platform::{PlatformDirs, PlatformError};
pub use session::{AppError, SkyMapSession};
