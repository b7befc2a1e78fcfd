//! The pattern painters. [`GridPainter`] tiles a rectangle with
//! randomly-colored unit cells; [`SpiroPainter`] redraws a bloom of circles
//! every frame at an accelerating rotation. Each painter is a plain config
//! struct with a `paint` operation generic over the drawing [`Surface`] and
//! the color [`UnitSource`], so the same pattern renders to SVG frames, a
//! live window, or a test harness without changing a line.
//!
//! [`Surface`]: crate::canvas::Surface
//! [`UnitSource`]: crate::random::UnitSource

pub mod grid;
pub mod pattern_file;
pub mod spiro;

pub use grid::{GridPainter, GridVariant};
pub use pattern_file::{Pattern, PatternFile};
pub use spiro::SpiroPainter;
