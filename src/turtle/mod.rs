use csscolorparser::Color;
use geo_types::{LineString, MultiLineString, Point};

/// # Turtle Module
///
/// Logo-style turtle with colored stroke recording. Unlike the classic
/// global-state turtle, all of the drawing state (position, heading, pen,
/// color) lives in this struct and every motion primitive takes and returns
/// it, so a drawing is a value you can inspect, not a side effect.
///
/// Angles are degrees, 0 points east, and positive turns are
/// counter-clockwise, because that's what logo turtles speak.
#[derive(Clone, Debug)]
pub struct Turtle {
    strokes: Vec<Stroke>,
    position: Point<f64>,
    heading: f64,
    pen: bool,
    color: Color,
    width: f64,
}

/// One pen-down polyline with its pen settings. Changing color mid-draw
/// closes the active stroke and opens a new one, so a stroke is always a
/// single-color path.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub path: Vec<Point<f64>>,
}

impl Stroke {
    /// A stroke needs two points before it puts any ink on the page.
    pub fn is_visible(&self) -> bool {
        self.path.len() >= 2
    }
}

/// Scalar distance helpers for [`geo_types::Point`].
pub trait PointDistance {
    /// Return the scalar distance between two [`geo_types::Point`]s.
    fn distance(&self, other: &Point<f64>) -> f64;

    /// Treat a [`geo_types::Point`] as a Vector and return its scalar length.
    fn length(&self) -> f64;
}

impl PointDistance for Point<f64> {
    fn distance(&self, other: &Point<f64>) -> f64 {
        (*self - *other).length()
    }

    fn length(&self) -> f64 {
        (self.x().powi(2) + self.y().powi(2)).sqrt()
    }
}

/// TurtleTrait provides the turtle motion primitives for the Turtle struct.
///
/// # Example
///
/// ```
/// use turtle_blooms::turtle::{Turtle, TurtleTrait};
///
/// let t = Turtle::new()
///     .pen_down()
///     .fwd(100.0)
///     .right(90.0)
///     .fwd(100.0)
///     .right(90.0)
///     .fwd(100.0)
///     .right(90.0)
///     .fwd(100.0)
///     .right(90.0);
/// assert_eq!(t.strokes().len(), 1);
/// ```
pub trait TurtleTrait {
    fn new() -> Turtle;
    fn fwd(self, distance: f64) -> Self;
    fn left(self, degrees: f64) -> Self;
    fn right(self, degrees: f64) -> Self;
    fn goto(self, x: f64, y: f64) -> Self;
    fn pen_up(self) -> Self;
    fn pen_down(self) -> Self;
    fn color(self, color: Color) -> Self;
    fn width(self, width: f64) -> Self;
    fn circle(self, radius: f64) -> Self;
    fn home(self) -> Self;
    fn wipe(self) -> Self;
    fn to_multiline(&self) -> MultiLineString<f64>;
}

impl Turtle {
    /// Current pen position.
    pub fn position(&self) -> Point<f64> {
        self.position
    }

    /// Current heading in degrees, normalized to [0, 360).
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen
    }

    /// Everything drawn since the last [`TurtleTrait::wipe`].
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    fn trace_to(&mut self, pos: Point<f64>) {
        if self.pen {
            self.strokes
                .last_mut()
                .expect("Turtle drawing without an active stroke!")
                .path
                .push(pos);
        }
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Turtle::new()
    }
}

impl TurtleTrait for Turtle {
    fn new() -> Self {
        Turtle {
            strokes: vec![],
            position: Point::new(0.0f64, 0.0f64),
            heading: 0.0,
            pen: false,
            color: Color::new(0.0, 0.0, 0.0, 1.0),
            width: 1.0,
        }
    }

    fn fwd(mut self, distance: f64) -> Self {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        let pos = self.position + Point::new(distance * cos, distance * sin);
        self.trace_to(pos);
        self.position = pos;
        self
    }

    fn left(mut self, degrees: f64) -> Self {
        self.heading = (self.heading + degrees).rem_euclid(360.0);
        self
    }

    fn right(mut self, degrees: f64) -> Self {
        self.heading = (self.heading - degrees).rem_euclid(360.0);
        self
    }

    /// Absolute move. Heading is untouched, ink is laid down if the pen is.
    fn goto(mut self, x: f64, y: f64) -> Self {
        let pos = Point::new(x, y);
        self.trace_to(pos);
        self.position = pos;
        self
    }

    fn pen_up(mut self) -> Self {
        self.pen = false;
        self
    }

    fn pen_down(mut self) -> Self {
        if self.pen {
            self
        } else {
            self.pen = true;
            self.strokes.push(Stroke {
                color: self.color.clone(),
                width: self.width,
                path: vec![self.position],
            });
            self
        }
    }

    /// Sets the pen color. With the pen down this closes the active stroke
    /// and opens a new one at the current position; if the active stroke
    /// never went anywhere it is retagged in place instead of being left
    /// behind as an invisible one-point stroke.
    fn color(mut self, color: Color) -> Self {
        if self.pen {
            match self.strokes.last_mut() {
                Some(active) if !active.is_visible() => {
                    active.color = color.clone();
                }
                _ => {
                    self.strokes.push(Stroke {
                        color: color.clone(),
                        width: self.width,
                        path: vec![self.position],
                    });
                }
            }
        }
        self.color = color;
        self
    }

    /// Pen width for strokes opened after this call.
    fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Full circle, turtle-style: the center sits `radius` units to the
    /// turtle's left, the sweep runs counter-clockwise, and the turtle ends
    /// exactly where it started, heading unchanged. Approximated as a
    /// regular polygon with enough sides that nobody can tell the
    /// difference.
    fn circle(mut self, radius: f64) -> Self {
        let radius = radius.abs();
        let sides = 1000.min(32.max(radius.floor() as usize * 4));
        let center_angle = (self.heading + 90.0).to_radians();
        let center =
            self.position + Point::new(radius * center_angle.cos(), radius * center_angle.sin());
        // Angle from the center back to the turtle's starting point.
        let base = self.heading - 90.0;
        let start = self.position;
        for i in 1..sides {
            let angle =
                (base + 360.0 * f64::from(i as i32) / f64::from(sides as i32)).to_radians();
            let pos = center + Point::new(radius * angle.cos(), radius * angle.sin());
            self.trace_to(pos);
        }
        // Land exactly on the start point rather than within float fuzz of it.
        self.trace_to(start);
        self
    }

    /// Back to the origin (drawing en route if the pen is down), heading 0.
    fn home(mut self) -> Self {
        self = self.goto(0.0, 0.0);
        self.heading = 0.0;
        self
    }

    /// Erase every stroke. Position, heading, pen state and color survive;
    /// with the pen down a fresh stroke opens immediately so motion keeps
    /// drawing.
    fn wipe(mut self) -> Self {
        self.strokes.clear();
        if self.pen {
            self.strokes.push(Stroke {
                color: self.color.clone(),
                width: self.width,
                path: vec![self.position],
            });
        }
        self
    }

    fn to_multiline(&self) -> MultiLineString<f64> {
        self.strokes
            .iter()
            .map(|stroke| LineString::from(stroke.path.clone()))
            .collect()
    }
}
