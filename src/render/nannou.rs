use nannou::draw::primitive::{Path, PathStroke};
use nannou::draw::Drawing;
use nannou::geom::Point2;

use crate::turtle::Stroke;

/// Extension trait for feeding turtle strokes into a nannou polyline. Color
/// and weight stay with the caller, which matches how nannou chains its
/// drawing options.
pub trait StrokeDrawer<'a> {
    fn polyline_from_stroke(self, stroke: &Stroke) -> Drawing<'a, Path>;
}

impl<'a> StrokeDrawer<'a> for Drawing<'a, PathStroke> {
    fn polyline_from_stroke(self, stroke: &Stroke) -> Drawing<'a, Path> {
        self.points(
            stroke
                .path
                .iter()
                .map(|p| Point2::new(p.x() as f32, p.y() as f32))
                .collect::<Vec<Point2>>(),
        )
    }
}
