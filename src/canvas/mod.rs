//! The drawing-surface boundary. [`Surface`] is the contract the painters
//! draw against; [`SvgCanvas`] is the reference implementation, a recording
//! surface that snapshots a [`Frame`] on every refresh and hands the frames
//! to the render module (or to tests, which is the point).

use csscolorparser::Color;
use geo_types::{coord, Point, Rect};

use crate::errors::SurfaceError;
use crate::turtle::{Stroke, Turtle, TurtleTrait};

/// Reference screen edge, in turtle units. Window fractions scale this, the
/// way `setup(1.0, 1.0)` fills the actual screen.
const SCREEN_EDGE: f64 = 800.0;

/// A drawing surface, as the painters see it: pen and turtle primitives,
/// canvas-level configuration, and explicit batched refresh. Visible updates
/// may be deferred until [`Surface::refresh`]; that is the one
/// resource-management promise the painters rely on.
pub trait Surface {
    /// Size the window as fractions of the available screen.
    fn configure_window(&mut self, width_frac: f64, height_frac: f64);
    /// Background color, unit-interval channels.
    fn background(&mut self, r: f64, g: f64, b: f64);
    /// Enable or disable deferred (batched) refresh.
    fn batched_refresh(&mut self, enabled: bool);
    fn pen_up(&mut self);
    fn pen_down(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn forward(&mut self, distance: f64);
    fn left(&mut self, degrees: f64);
    fn right(&mut self, degrees: f64);
    fn stroke(&mut self, color: Color);
    fn circle(&mut self, radius: f64);
    /// Erase all strokes. Pen position, heading and state survive.
    fn clear(&mut self);
    /// Return to the origin, heading 0, drawing en route if the pen is down.
    fn home(&mut self);
    /// Flush everything drawn since the last refresh to the viewer.
    fn refresh(&mut self) -> Result<(), SurfaceError>;
    /// Park until the viewer is done with the window. Frontends that own a
    /// real event loop block here; recording surfaces just finalize.
    fn run_until_closed(&mut self) -> Result<(), SurfaceError>;
}

/// One refresh snapshot: whatever strokes were visible when the surface
/// flushed, plus the frame's background.
#[derive(Clone, Debug)]
pub struct Frame {
    pub index: usize,
    pub background: Color,
    pub strokes: Vec<Stroke>,
}

impl Frame {
    /// Strokes that actually put ink on the page.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter().filter(|stroke| stroke.is_visible())
    }
}

/// A recording surface: turtle in, frames out.
///
/// # Example
///
/// ```
/// use turtle_blooms::canvas::{Surface, SvgCanvas};
/// use csscolorparser::Color;
///
/// let mut canvas = SvgCanvas::new();
/// canvas.stroke(Color::new(1.0, 0.0, 0.0, 1.0));
/// canvas.pen_down();
/// canvas.forward(100.0);
/// canvas.refresh().unwrap();
/// assert_eq!(canvas.frames().len(), 1);
/// ```
pub struct SvgCanvas {
    turtle: Turtle,
    background: Color,
    batched: bool,
    window: Rect<f64>,
    frames: Vec<Frame>,
    closed: bool,
}

impl SvgCanvas {
    pub fn new() -> SvgCanvas {
        SvgCanvas {
            turtle: Turtle::new(),
            // Both original patterns run on black.
            background: Color::new(0.0, 0.0, 0.0, 1.0),
            batched: true,
            window: centered_window(1.0, 1.0),
            frames: vec![],
            closed: false,
        }
    }

    /// Frames snapshotted so far, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Drain the snapshotted frames, oldest first. Streaming frontends call
    /// this every tick so the backlog never piles up.
    pub fn take_frames(&mut self) -> Vec<Frame> {
        std::mem::take(&mut self.frames)
    }

    /// The origin-centered window rect, handy as an SVG viewbox.
    pub fn window(&self) -> Rect<f64> {
        self.window
    }

    pub fn background_color(&self) -> Color {
        self.background.clone()
    }

    pub fn position(&self) -> Point<f64> {
        self.turtle.position()
    }

    pub fn heading(&self) -> f64 {
        self.turtle.heading()
    }

    /// Mark the surface gone. Every refresh afterwards fails, which is how
    /// a painter finds out mid-frame that there is nobody left to draw for.
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn with_turtle(&mut self, op: impl FnOnce(Turtle) -> Turtle) {
        self.turtle = op(std::mem::take(&mut self.turtle));
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        SvgCanvas::new()
    }
}

fn centered_window(width_frac: f64, height_frac: f64) -> Rect<f64> {
    let half_w = (SCREEN_EDGE * width_frac) / 2.0;
    let half_h = (SCREEN_EDGE * height_frac) / 2.0;
    Rect::new(
        coord! {x: -half_w, y: -half_h},
        coord! {x: half_w, y: half_h},
    )
}

impl Surface for SvgCanvas {
    fn configure_window(&mut self, width_frac: f64, height_frac: f64) {
        self.window = centered_window(width_frac, height_frac);
    }

    fn background(&mut self, r: f64, g: f64, b: f64) {
        self.background = Color::new(r as f32, g as f32, b as f32, 1.0);
    }

    fn batched_refresh(&mut self, enabled: bool) {
        self.batched = enabled;
    }

    fn pen_up(&mut self) {
        self.with_turtle(|t| t.pen_up());
    }

    fn pen_down(&mut self) {
        self.with_turtle(|t| t.pen_down());
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.with_turtle(|t| t.goto(x, y));
    }

    fn forward(&mut self, distance: f64) {
        self.with_turtle(|t| t.fwd(distance));
    }

    fn left(&mut self, degrees: f64) {
        self.with_turtle(|t| t.left(degrees));
    }

    fn right(&mut self, degrees: f64) {
        self.with_turtle(|t| t.right(degrees));
    }

    fn stroke(&mut self, color: Color) {
        self.with_turtle(|t| t.color(color));
    }

    fn circle(&mut self, radius: f64) {
        self.with_turtle(|t| t.circle(radius));
    }

    fn clear(&mut self) {
        self.with_turtle(|t| t.wipe());
    }

    fn home(&mut self) {
        self.with_turtle(|t| t.home());
    }

    fn refresh(&mut self) -> Result<(), SurfaceError> {
        if self.closed {
            return Err(SurfaceError::Closed);
        }
        let index = self.frames.len();
        let strokes = self.turtle.strokes().to_vec();
        log::debug!("snapshot frame {} ({} strokes)", index, strokes.len());
        self.frames.push(Frame {
            index,
            background: self.background.clone(),
            strokes,
        });
        Ok(())
    }

    fn run_until_closed(&mut self) -> Result<(), SurfaceError> {
        if self.closed {
            return Err(SurfaceError::Closed);
        }
        // Nothing to wait for on a recording surface; the window is the
        // caller's SVG viewer.
        self.close();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Surface, SvgCanvas};
    use crate::errors::SurfaceError;
    use csscolorparser::Color;
    use geo_types::Point;

    #[test]
    fn test_refresh_snapshots_frames() {
        let mut canvas = SvgCanvas::new();
        canvas.pen_down();
        canvas.forward(10.0);
        canvas.refresh().unwrap();
        canvas.forward(10.0);
        canvas.refresh().unwrap();
        assert_eq!(canvas.frames().len(), 2);
        // Earlier snapshots don't grow when the turtle keeps moving.
        assert_eq!(canvas.frames()[0].strokes[0].path.len(), 2);
        assert_eq!(canvas.frames()[1].strokes[0].path.len(), 3);
        assert_eq!(canvas.frames()[1].index, 1);
    }

    #[test]
    fn test_clear_keeps_pen_pose() {
        let mut canvas = SvgCanvas::new();
        canvas.pen_down();
        canvas.forward(25.0);
        canvas.left(90.0);
        canvas.clear();
        canvas.refresh().unwrap();
        assert!(canvas.frames()[0].visible_strokes().count() == 0);
        assert_eq!(canvas.position(), Point::new(25.0, 0.0));
        assert!((canvas.heading() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_closed_surface_fails_refresh() {
        let mut canvas = SvgCanvas::new();
        canvas.close();
        assert!(matches!(canvas.refresh(), Err(SurfaceError::Closed)));
    }

    #[test]
    fn test_window_follows_fractions() {
        let mut canvas = SvgCanvas::new();
        canvas.configure_window(0.5, 1.0);
        let window = canvas.window();
        assert_eq!(window.width(), 400.0);
        assert_eq!(window.height(), 800.0);
        assert_eq!(window.center(), geo_types::coord! {x: 0.0, y: 0.0});
    }

    #[test]
    fn test_background_applies_to_frames() {
        let mut canvas = SvgCanvas::new();
        canvas.background(1.0, 1.0, 1.0);
        canvas.refresh().unwrap();
        assert_eq!(
            canvas.frames()[0].background,
            Color::new(1.0, 1.0, 1.0, 1.0)
        );
    }
}
