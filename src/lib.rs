//! Turtle-graphics pattern painters: random-color grids and animated spiral
//! blooms.
//!
//! This library re-expresses a pair of classic turtle-graphics demos as
//! composable pieces: an explicit [`turtle::Turtle`] state machine that
//! records colored strokes, a [`canvas::Surface`] boundary with a recording
//! [`canvas::SvgCanvas`] behind it, and two painters
//! ([`painters::GridPainter`], [`painters::SpiroPainter`]) that drive any
//! surface with colors pulled from any [`random::UnitSource`]. Frames come
//! out the other end as SVG documents, or land in a live nannou window with
//! the `nannou` feature.
//!
//! # Example
//!
//! ```
//! use turtle_blooms::prelude::*;
//!
//! let mut canvas = SvgCanvas::new();
//! let mut colors = HaltonSequence::default();
//! GridPainter::default().paint(&mut canvas, &mut colors).unwrap();
//!
//! let frame = canvas.last_frame().unwrap();
//! let document = frame.to_document(&Arrangement::turtle_window(&canvas.window()));
//! assert!(document.to_string().contains("<path"));
//! ```

/// The drawing-surface boundary: the [`canvas::Surface`] trait and the
/// recording [`canvas::SvgCanvas`].
pub mod canvas;

/// Error taxonomy for surfaces and painters.
pub mod errors;

/// The grid and spiro pattern painters, and their RON pattern files.
pub mod painters;

/// Unit-interval color sources: rand adapters and the Halton sequence.
pub mod random;

/// Frame output: SVG documents, optional nannou live view.
pub mod render;

/// Turtle graphics implementation with colored stroke recording.
pub mod turtle;

/// Make your life easy! Just import prelude::* and ignore all the warnings!
pub mod prelude {
    pub use crate::canvas::{Frame, Surface, SvgCanvas};
    pub use crate::errors::{PainterError, SurfaceError};
    pub use crate::painters::{GridPainter, GridVariant, Pattern, PatternFile, SpiroPainter};
    pub use crate::random::{random_color, HaltonSequence, RngSource, UnitSource};
    #[cfg(feature = "nannou")]
    pub use crate::render::nannou::StrokeDrawer;
    pub use crate::render::svg::{Arrangement, ToSvg};
    pub use crate::turtle::{PointDistance, Stroke, Turtle, TurtleTrait};
}
