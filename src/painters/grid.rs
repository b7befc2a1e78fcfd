use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::canvas::Surface;
use crate::errors::PainterError;
use crate::random::{random_color, UnitSource};

/// How a cell's outline gets drawn. Both produce the identical square; the
/// absolute variant walks the corner coordinates, the relative one drives
/// the turtle around them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridVariant {
    #[default]
    Absolute,
    Relative,
}

/// # GridPainter
///
/// Tiles a `rows` x `cols` rectangle with square cells of side `cell_size`,
/// outline only, one independently random color per cell. Cell `(i, j)` has
/// its top-left corner at `(origin.x + j*cell_size, origin.y - i*cell_size)`;
/// rows grow downwards from `origin`. One refresh for the whole grid, not
/// one per cell.
///
/// # Example
///
/// ```
/// use turtle_blooms::canvas::SvgCanvas;
/// use turtle_blooms::painters::GridPainter;
/// use turtle_blooms::random::HaltonSequence;
///
/// let mut canvas = SvgCanvas::new();
/// let mut colors = HaltonSequence::default();
/// GridPainter::default().paint(&mut canvas, &mut colors).unwrap();
/// assert_eq!(canvas.last_frame().unwrap().strokes.len(), 80);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GridPainter {
    pub rows: u32,
    pub cols: u32,
    pub cell_size: f64,
    /// Top-left world coordinate of cell (0, 0).
    pub origin: Point<f64>,
    pub variant: GridVariant,
}

impl Default for GridPainter {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 8,
            cell_size: 30.0,
            origin: Point::new(-300.0, 300.0),
            variant: GridVariant::default(),
        }
    }
}

impl GridPainter {
    /// Draw the grid and issue a single refresh. An empty grid (zero rows or
    /// columns) draws nothing but still refreshes, so the viewer gets its
    /// (blank) frame.
    pub fn paint<S: Surface, U: UnitSource>(
        &self,
        surface: &mut S,
        colors: &mut U,
    ) -> Result<(), PainterError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(PainterError::InvalidCellSize(self.cell_size));
        }
        log::debug!(
            "painting {}x{} grid, cell size {}",
            self.rows,
            self.cols,
            self.cell_size
        );
        let size = self.cell_size;
        surface.pen_up();
        for i in 0..self.rows {
            for j in 0..self.cols {
                let x = self.origin.x() + f64::from(j) * size;
                let y = self.origin.y() - f64::from(i) * size;
                surface.move_to(x, y);
                surface.stroke(random_color(colors));
                surface.pen_down();
                match self.variant {
                    GridVariant::Absolute => {
                        surface.move_to(x + size, y);
                        surface.move_to(x + size, y - size);
                        surface.move_to(x, y - size);
                        surface.move_to(x, y);
                    }
                    GridVariant::Relative => {
                        // Heading starts east and four right angles bring it
                        // back, so every cell begins axis-aligned.
                        for _ in 0..4 {
                            surface.forward(size);
                            surface.right(90.0);
                        }
                    }
                }
                surface.pen_up();
            }
        }
        surface.refresh()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{GridPainter, GridVariant};
    use crate::canvas::SvgCanvas;
    use crate::errors::PainterError;
    use crate::random::{HaltonSequence, RngSource, UnitSource};
    use crate::turtle::PointDistance;
    use geo_types::Point;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_grid_geometry() {
        let mut canvas = SvgCanvas::new();
        let mut colors = HaltonSequence::default();
        GridPainter::default()
            .paint(&mut canvas, &mut colors)
            .unwrap();
        assert_eq!(canvas.frames().len(), 1);
        let frame = &canvas.frames()[0];
        assert_eq!(frame.strokes.len(), 80);
        // First cell: exact corner walk from (-300, 300).
        assert_eq!(
            frame.strokes[0].path,
            vec![
                Point::new(-300.0, 300.0),
                Point::new(-270.0, 300.0),
                Point::new(-270.0, 270.0),
                Point::new(-300.0, 270.0),
                Point::new(-300.0, 300.0),
            ]
        );
        // Last cell (i=9, j=7) starts at (-300 + 7*30, 300 - 9*30).
        let last = frame.strokes.last().unwrap();
        assert_eq!(last.path[0], Point::new(-90.0, 30.0));
        assert_eq!(last.path.len(), 5);
        assert_eq!(last.path[4], last.path[0]);
    }

    #[test]
    fn test_one_color_per_cell() {
        struct Counter(usize);
        impl UnitSource for Counter {
            fn next_unit(&mut self) -> f64 {
                self.0 += 1;
                0.25
            }
        }
        let mut canvas = SvgCanvas::new();
        let mut colors = Counter(0);
        GridPainter::default()
            .paint(&mut canvas, &mut colors)
            .unwrap();
        // Three channel draws per cell, no more, no fewer.
        assert_eq!(colors.0, 3 * 80);
    }

    #[test]
    fn test_variants_draw_identical_squares() {
        let absolute = GridPainter::default();
        let relative = GridPainter {
            variant: GridVariant::Relative,
            ..GridPainter::default()
        };
        let mut canvas_a = SvgCanvas::new();
        let mut canvas_r = SvgCanvas::new();
        absolute
            .paint(&mut canvas_a, &mut HaltonSequence::default())
            .unwrap();
        relative
            .paint(&mut canvas_r, &mut HaltonSequence::default())
            .unwrap();
        let frame_a = &canvas_a.frames()[0];
        let frame_r = &canvas_r.frames()[0];
        assert_eq!(frame_a.strokes.len(), frame_r.strokes.len());
        for (a, r) in frame_a.strokes.iter().zip(frame_r.strokes.iter()) {
            assert_eq!(a.color, r.color);
            assert_eq!(a.path.len(), r.path.len());
            for (pa, pr) in a.path.iter().zip(r.path.iter()) {
                assert!(pa.distance(pr) < 1e-9);
            }
        }
    }

    #[test]
    fn test_same_geometry_different_colors() {
        let painter = GridPainter::default();
        let mut canvas_a = SvgCanvas::new();
        let mut canvas_b = SvgCanvas::new();
        painter
            .paint(&mut canvas_a, &mut RngSource(SmallRng::seed_from_u64(1)))
            .unwrap();
        painter
            .paint(&mut canvas_b, &mut RngSource(SmallRng::seed_from_u64(2)))
            .unwrap();
        let strokes_a = &canvas_a.frames()[0].strokes;
        let strokes_b = &canvas_b.frames()[0].strokes;
        let paths_a: Vec<_> = strokes_a.iter().map(|s| s.path.clone()).collect();
        let paths_b: Vec<_> = strokes_b.iter().map(|s| s.path.clone()).collect();
        assert_eq!(paths_a, paths_b);
        let colors_a: Vec<_> = strokes_a.iter().map(|s| s.color.clone()).collect();
        let colors_b: Vec<_> = strokes_b.iter().map(|s| s.color.clone()).collect();
        assert_ne!(colors_a, colors_b);
    }

    #[test]
    fn test_empty_grid_still_refreshes() {
        let mut canvas = SvgCanvas::new();
        let painter = GridPainter {
            rows: 0,
            ..GridPainter::default()
        };
        painter
            .paint(&mut canvas, &mut HaltonSequence::default())
            .unwrap();
        assert_eq!(canvas.frames().len(), 1);
        assert!(canvas.frames()[0].strokes.is_empty());
    }

    #[test]
    fn test_invalid_cell_size_is_rejected() {
        for bad in [0.0, -30.0, f64::NAN, f64::INFINITY] {
            let painter = GridPainter {
                cell_size: bad,
                ..GridPainter::default()
            };
            let mut canvas = SvgCanvas::new();
            let result = painter.paint(&mut canvas, &mut HaltonSequence::default());
            assert!(matches!(result, Err(PainterError::InvalidCellSize(_))));
            // Rejected before the surface was touched.
            assert!(canvas.frames().is_empty());
        }
    }

    #[test]
    fn test_closed_surface_error_propagates() {
        let mut canvas = SvgCanvas::new();
        canvas.close();
        let result = GridPainter::default().paint(&mut canvas, &mut HaltonSequence::default());
        assert!(matches!(result, Err(PainterError::Surface(_))));
    }
}
