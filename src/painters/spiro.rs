use serde::{Deserialize, Serialize};

use crate::canvas::Surface;
use crate::errors::PainterError;
use crate::random::{random_color, UnitSource};

/// # SpiroPainter
///
/// An animated bloom: every frame clears the canvas, draws `circles` circles
/// of `radius` (a fresh random color before each, a `step`-degree left turn
/// after each), refreshes once, then sends the turtle home and turns it left
/// by the frame index. Because `circles * step` need not divide 360, the
/// petal pattern precesses within a frame, and the post-frame rotation grows
/// a degree per frame, so the whole bloom spins faster and faster.
///
/// The default budget of 10000 frames means "until somebody closes the
/// window" in practice; set `frames` lower for a bounded run.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpiroPainter {
    /// Frame budget for [`SpiroPainter::paint`].
    pub frames: u32,
    /// Circles per bloom.
    pub circles: u32,
    pub radius: f64,
    /// Left turn between circles, degrees.
    pub step: f64,
}

impl Default for SpiroPainter {
    fn default() -> Self {
        Self {
            frames: 10000,
            circles: 80,
            radius: 150.0,
            step: 5.0,
        }
    }
}

impl SpiroPainter {
    fn validate(&self) -> Result<(), PainterError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(PainterError::InvalidRadius(self.radius));
        }
        Ok(())
    }

    /// Run the whole animation. A surface failure aborts immediately,
    /// mid-animation; there is nothing sensible to retry.
    pub fn paint<S: Surface, U: UnitSource>(
        &self,
        surface: &mut S,
        colors: &mut U,
    ) -> Result<(), PainterError> {
        self.validate()?;
        log::debug!(
            "painting {} bloom frames, {} circles each",
            self.frames,
            self.circles
        );
        for index in 0..self.frames {
            self.frame(surface, colors, index)?;
        }
        Ok(())
    }

    /// One frame of the animation: clear, sweep, refresh, then the
    /// post-frame rotation. Public so a live frontend can drive the
    /// animation at its own cadence.
    pub fn frame<S: Surface, U: UnitSource>(
        &self,
        surface: &mut S,
        colors: &mut U,
        index: u32,
    ) -> Result<(), PainterError> {
        self.validate()?;
        surface.pen_down();
        surface.clear();
        self.sweep(surface, colors);
        surface.refresh()?;
        surface.home();
        surface.left(f64::from(index));
        Ok(())
    }

    /// The bloom itself. Heading is deliberately not reset between circles,
    /// so the sweep ends `circles * step` degrees past where it started.
    pub fn sweep<S: Surface, U: UnitSource>(&self, surface: &mut S, colors: &mut U) {
        for _ in 0..self.circles {
            surface.stroke(random_color(colors));
            surface.circle(self.radius);
            surface.left(self.step);
        }
    }
}
