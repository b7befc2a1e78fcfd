use csscolorparser::Color;
use geo::BoundingRect;
use geo_types::{Coord, LineString, MultiLineString, Rect};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};
use std::fmt;
use svg::node::element::path::Data;
use svg::node::element::{Path, Rectangle};
use svg::Document;

use crate::canvas::Frame;
use crate::turtle::Stroke;

/// Generic error
#[derive(Debug)]
pub enum SvgCreationError {
    UndefinedViewBox,
}

impl std::error::Error for SvgCreationError {}

impl fmt::Display for SvgCreationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SvgCreationError::UndefinedViewBox => write!(f, "Geometry has no bounding box."),
        }
    }
}

/// An arrangement is a plan for transformation of an SVG: where the drawing
/// lands in the viewbox, and whether the y axis gets flipped on the way
/// (turtle coordinates are y-up, SVG is y-down).
pub enum Arrangement {
    /// Translate the content's center onto the viewbox center, 1:1 scale.
    Center(Rect<f64>, bool),
    /// Scale the content to fill the viewbox, centered.
    FitCenter(Rect<f64>, bool),
    /// FitCenter with a margin inside the viewbox edge.
    FitCenterMargin(f64, Rect<f64>, bool),
    /// Any affine you like.
    Transform(Rect<f64>, Affine2<f64>),
}

fn unit_matrix() -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ))
}

/// Flip y within the viewbox: y' = min.y + max.y - y.
fn flip_matrix(viewbox: &Rect<f64>) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(
        1.0,
        0.0,
        0.0,
        0.0,
        -1.0,
        viewbox.min().y + viewbox.max().y,
        0.0,
        0.0,
        1.0,
    ))
}

impl Arrangement {
    /// Identity placement into the given window.
    pub fn unit(window: &Rect<f64>) -> Arrangement {
        Arrangement::Transform(*window, unit_matrix())
    }

    /// Turtle coordinates straight into the window: 1:1 scale, y flipped
    /// for SVG. This is the faithful rendering of what the turtle drew,
    /// off-center content stays off-center.
    pub fn turtle_window(window: &Rect<f64>) -> Arrangement {
        Arrangement::Transform(*window, flip_matrix(window))
    }

    pub fn viewbox(&self) -> Rect<f64> {
        match self {
            Arrangement::Center(viewbox, _) => *viewbox,
            Arrangement::FitCenter(viewbox, _) => *viewbox,
            Arrangement::FitCenterMargin(_, viewbox, _) => *viewbox,
            Arrangement::Transform(viewbox, _) => *viewbox,
        }
    }

    /// An SVG scaffold sized to the viewbox.
    pub fn create_svg_document(&self) -> Document {
        let viewbox = self.viewbox();
        Document::new()
            .set(
                "viewBox",
                (
                    viewbox.min().x,
                    viewbox.min().y,
                    viewbox.width(),
                    viewbox.height(),
                ),
            )
            .set("width", format!("{}px", viewbox.width()))
            .set("height", format!("{}px", viewbox.height()))
    }

    /// The affine that places content with the given bounds according to
    /// this arrangement.
    fn transformation(&self, gbox: &Rect<f64>) -> Affine2<f64> {
        match self {
            Arrangement::Transform(_viewbox, affine) => *affine,
            Arrangement::Center(bounds, invert) => {
                let delta = bounds.center() - gbox.center();
                let tx = Affine2::from_matrix_unchecked(Matrix3::new(
                    1.0, 0.0, delta.x, //
                    0.0, 1.0, delta.y, //
                    0.0, 0.0, 1.0,
                ));
                if *invert {
                    flip_matrix(bounds) * tx
                } else {
                    tx
                }
            }
            Arrangement::FitCenter(bounds, invert) => {
                fit_transformation(0.0, bounds, gbox, *invert)
            }
            Arrangement::FitCenterMargin(margin, bounds, invert) => {
                fit_transformation(*margin, bounds, gbox, *invert)
            }
        }
    }
}

fn fit_transformation(margin: f64, bounds: &Rect<f64>, gbox: &Rect<f64>, invert: bool) -> Affine2<f64> {
    let scale = f64::min(
        (bounds.width() - 2.0 * margin) / gbox.width(),
        (bounds.height() - 2.0 * margin) / gbox.height(),
    );
    // Content center lands on the viewbox center, post scaling.
    let delta_x = bounds.center().x - gbox.center().x * scale;
    let delta_y = bounds.center().y - gbox.center().y * scale;
    let tx = Affine2::from_matrix_unchecked(Matrix3::new(
        scale, 0.0, delta_x, //
        0.0, scale, delta_y, //
        0.0, 0.0, 1.0,
    ));
    if invert {
        flip_matrix(bounds) * tx
    } else {
        tx
    }
}

/// Convert frames and geometry into arranged SVG.
pub trait ToSvg {
    /// Transform the geometry to fit the arrangement's viewbox.
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError>
    where
        Self: Sized;

    /// Convert into an SVG PathData item, one move-to per linestring.
    fn to_path_data(&self) -> Data;

    /// Convert into an SVG Path, arranged.
    fn to_path(&self, arrangement: &Arrangement) -> Path;
}

impl ToSvg for MultiLineString<f64> {
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError> {
        let gbox = match self.bounding_rect() {
            Some(gbox) => gbox,
            None => return Err(SvgCreationError::UndefinedViewBox),
        };
        let transformation = arrangement.transformation(&gbox);
        Ok(transform_lines(self, &transformation))
    }

    fn to_path_data(&self) -> Data {
        let mut svg_data = Data::new();
        for tline in self {
            for point in tline.points().take(1) {
                svg_data = svg_data.move_to((point.x(), point.y()));
            }
            for point in tline.points().skip(1) {
                svg_data = svg_data.line_to((point.x(), point.y()));
            }
        }
        svg_data
    }

    fn to_path(&self, arrangement: &Arrangement) -> Path {
        match self.arrange(arrangement) {
            Ok(arranged) => Path::new().set("d", arranged.to_path_data()),
            Err(_) => Path::new().set("d", ""),
        }
    }
}

fn transform_lines(lines: &MultiLineString<f64>, affine: &Affine2<f64>) -> MultiLineString<f64> {
    let linestrings: Vec<LineString<f64>> = lines
        .iter()
        .map(|linestring| {
            linestring
                .coords()
                .map(|coord| {
                    let pt = affine * NPoint2::new(coord.x, coord.y);
                    Coord::from((pt.x, pt.y))
                })
                .collect()
        })
        .collect();
    MultiLineString::new(linestrings)
}

fn stroke_lines(stroke: &Stroke) -> MultiLineString<f64> {
    MultiLineString::new(vec![LineString::from(stroke.path.clone())])
}

fn css_hex(color: &Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

impl Frame {
    /// Render the frame as a standalone SVG document: background rect plus
    /// one path per visible stroke, all placed by the same arrangement so
    /// strokes keep their relative positions.
    pub fn to_document(&self, arrangement: &Arrangement) -> Document {
        let viewbox = arrangement.viewbox();
        let mut document = arrangement.create_svg_document().add(
            Rectangle::new()
                .set("x", viewbox.min().x)
                .set("y", viewbox.min().y)
                .set("width", viewbox.width())
                .set("height", viewbox.height())
                .set("fill", css_hex(&self.background)),
        );

        let all_lines: MultiLineString<f64> =
            MultiLineString::new(self.visible_strokes().map(|s| LineString::from(s.path.clone())).collect());
        let gbox = match all_lines.bounding_rect() {
            Some(gbox) => gbox,
            // Nothing drawn; the background is the whole frame.
            None => return document,
        };
        let transformation = arrangement.transformation(&gbox);

        for stroke in self.visible_strokes() {
            let arranged = transform_lines(&stroke_lines(stroke), &transformation);
            document = document.add(
                Path::new()
                    .set("d", arranged.to_path_data())
                    .set("fill", "none")
                    .set("stroke", css_hex(&stroke.color))
                    .set("stroke-width", stroke.width)
                    .set("stroke-linejoin", "round")
                    .set("stroke-linecap", "round"),
            );
        }
        document
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::canvas::{Surface, SvgCanvas};
    use csscolorparser::Color;
    use geo_types::{coord, LineString, MultiLineString, Rect};

    fn unit_square() -> MultiLineString<f64> {
        MultiLineString::new(vec![LineString::new(vec![
            coord! {x: 0.0f64, y: 0.0f64},
            coord! {x: 0.0f64, y: 100.0f64},
            coord! {x: 100.0f64, y: 100.0f64},
            coord! {x: 100.0f64, y: 0.0f64},
            coord! {x: 0.0f64, y: 0.0f64},
        ])])
    }

    #[test]
    fn test_arrange_center() {
        let txmls = unit_square()
            .arrange(&Arrangement::Center(
                Rect::new(coord! {x:0f64, y:0f64}, coord! {x:400f64, y:400f64}),
                false,
            ))
            .expect("Should have been able to arrange");
        let bounds = txmls.bounding_rect().expect("Arranged should have bounds");
        assert_eq!(bounds.center(), coord! {x: 200.0f64, y: 200.0f64});
        assert_eq!(bounds.width(), 100.0f64);
        assert_eq!(bounds.height(), 100.0f64);
    }

    #[test]
    fn test_arrange_fit_center() {
        let txmls = unit_square()
            .arrange(&Arrangement::FitCenter(
                Rect::new(coord! {x:0f64, y:0f64}, coord! {x:400f64, y:400f64}),
                false,
            ))
            .expect("Should have been able to arrange");
        let bounds = txmls.bounding_rect().expect("Arranged should have bounds");
        assert_eq!(bounds.center(), coord! {x: 200.0f64, y: 200.0f64});
        assert_eq!(bounds.width(), 400.0f64);
        assert_eq!(bounds.height(), 400.0f64);
    }

    #[test]
    fn test_arrange_fit_center_margin() {
        let txmls = unit_square()
            .arrange(&Arrangement::FitCenterMargin(
                10.0,
                Rect::new(coord! {x:0f64, y:0f64}, coord! {x:400f64, y:400f64}),
                false,
            ))
            .expect("Should have been able to arrange");
        let bounds = txmls.bounding_rect().expect("Arranged should have bounds");
        assert_eq!(bounds.center(), coord! {x: 200.0f64, y: 200.0f64});
        assert_eq!(bounds.width(), 380.0f64);
    }

    #[test]
    fn test_turtle_window_flips_y() {
        let window = Rect::new(coord! {x: -400.0, y: -400.0}, coord! {x: 400.0, y: 400.0});
        let mls = MultiLineString::new(vec![LineString::new(vec![
            coord! {x: -300.0, y: 300.0},
            coord! {x: -270.0, y: 300.0},
        ])]);
        let txmls = mls
            .arrange(&Arrangement::turtle_window(&window))
            .expect("Should have been able to arrange");
        // Turtle's upper-left lands in SVG's upper-left: y negates.
        assert_eq!(txmls.0[0].0[0], coord! {x: -300.0, y: -300.0});
        assert_eq!(txmls.0[0].0[1], coord! {x: -270.0, y: -300.0});
    }

    #[test]
    fn test_empty_geometry_has_no_arrangement() {
        let empty = MultiLineString::<f64>::new(vec![]);
        assert!(matches!(
            empty.arrange(&Arrangement::unit(&Rect::new(
                coord! {x: 0.0, y: 0.0},
                coord! {x: 1.0, y: 1.0}
            ))),
            Err(SvgCreationError::UndefinedViewBox)
        ));
    }

    #[test]
    fn test_frame_document_carries_stroke_colors() {
        let mut canvas = SvgCanvas::new();
        canvas.stroke(Color::new(1.0, 0.0, 0.0, 1.0));
        canvas.pen_down();
        canvas.forward(100.0);
        canvas.refresh().unwrap();
        let frame = canvas.last_frame().unwrap();
        let rendered = frame
            .to_document(&Arrangement::turtle_window(&canvas.window()))
            .to_string();
        assert!(rendered.contains("#ff0000"));
        // Black background rect from the default canvas.
        assert!(rendered.contains("#000000"));
        assert!(rendered.contains("<path"));
    }

    #[test]
    fn test_blank_frame_renders_background_only() {
        let mut canvas = SvgCanvas::new();
        canvas.refresh().unwrap();
        let frame = canvas.last_frame().unwrap();
        let rendered = frame
            .to_document(&Arrangement::turtle_window(&canvas.window()))
            .to_string();
        assert!(rendered.contains("<rect"));
        assert!(!rendered.contains("<path"));
    }
}
