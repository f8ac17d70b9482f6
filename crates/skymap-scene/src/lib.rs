//! Presentation-side state for the sky view: hover/selection transitions,
//! highlight styling, the per-frame list of visible constellations, and the
//! procedural background starfield.

pub mod interaction;
pub mod starfield;
pub mod style;
pub mod view;

pub use interaction::{CursorStyle, InteractionState, SceneEvent};
pub use starfield::{StarPoint, StarVertex, StarfieldGenerator, blackbody_to_rgb};
pub use style::{Appearance, HighlightState, Palette, Rgb};
pub use view::{SceneItem, visible_constellations};
