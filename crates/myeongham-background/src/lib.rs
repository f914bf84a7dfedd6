//! Ambient background animation for the myeongham portfolio card.
//!
//! A fixed collection of translucent polygons drifts across a pixel
//! viewport, fading in while visible and recycling through the viewport
//! edges once they have drifted out of sight. The field is advanced one
//! frame at a time and painted onto a ratatui canvas.

mod color;
mod entity;
mod field;

pub use color::{faded, PALETTE, PALETTE_ALPHA};
pub use entity::{Polygon, FADE_IN_RATE, FADE_OUT_RATE, OPACITY_CEILING};
pub use field::{PolygonField, POLYGON_COUNT};
