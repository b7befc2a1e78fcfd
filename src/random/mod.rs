//! Unit-interval sources for randomized pen colors.
//!
//! Painters never talk to an RNG directly; they pull floats in `[0, 1)`
//! through the [`UnitSource`] trait, one draw per color channel. That keeps
//! the drawing geometry deterministic and lets tests (and reproducible
//! renders) swap the entropy out for a fixed sequence.

use csscolorparser::Color;
use rand::Rng;

/// A supplier of floats uniformly (or quasi-uniformly) distributed in
/// `[0, 1)`. The single capability the painters need from their environment
/// besides the drawing surface.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any [`rand::Rng`] into a [`UnitSource`].
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use turtle_blooms::random::{RngSource, UnitSource};
///
/// let mut source = RngSource(SmallRng::seed_from_u64(12345));
/// let sample = source.next_unit();
/// assert!((0.0..1.0).contains(&sample));
/// ```
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> UnitSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Pick a fresh pen color: three independent unit draws, one per channel,
/// full alpha.
pub fn random_color<U: UnitSource>(source: &mut U) -> Color {
    let r = source.next_unit();
    let g = source.next_unit();
    let b = source.next_unit();
    Color::new(r as f32, g as f32, b as f32, 1.0)
}

/// Halton low-discrepancy sequence. Covers the unit interval evenly without
/// ever repeating, which makes it a handy deterministic stand-in for random
/// color channels: same sequence, same colors, every run.
pub struct HaltonSequence {
    numer: usize,
    denom: usize,
    x: usize,
    y: usize,
    base: usize,
}

impl Default for HaltonSequence {
    fn default() -> Self {
        Self {
            numer: 0,
            denom: 1,
            x: 0,
            y: 0,
            base: 2,
        }
    }
}

impl HaltonSequence {
    pub fn with_base(base: usize) -> HaltonSequence {
        HaltonSequence {
            base,
            ..HaltonSequence::default()
        }
    }
}

impl Iterator for HaltonSequence {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        self.x = self.denom - self.numer;
        if self.x == 1 {
            self.numer = 1;
            self.denom *= self.base;
        } else {
            self.y = self.denom / self.base;
            while self.x <= self.y {
                self.y /= self.base;
            }
            self.numer = (self.base + 1) * self.y - self.x;
        }
        Some(self.numer as f64 / self.denom as f64)
    }
}

impl UnitSource for HaltonSequence {
    fn next_unit(&mut self) -> f64 {
        // The sequence is infinite; next() is always Some.
        self.next().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{random_color, HaltonSequence, RngSource, UnitSource};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_halton_base2_prefix() {
        let samples: Vec<f64> = HaltonSequence::default().take(7).collect();
        assert_eq!(samples, vec![0.5, 0.25, 0.75, 0.125, 0.625, 0.375, 0.875]);
    }

    #[test]
    fn test_halton_stays_in_unit_interval() {
        for sample in HaltonSequence::with_base(3).take(1000) {
            assert!((0.0..1.0).contains(&sample));
        }
    }

    #[test]
    fn test_rng_source_stays_in_unit_interval() {
        let mut source = RngSource(SmallRng::seed_from_u64(42));
        for _ in 0..1000 {
            assert!((0.0..1.0).contains(&source.next_unit()));
        }
    }

    #[test]
    fn test_random_color_draws_three_channels() {
        struct Counter(usize);
        impl UnitSource for Counter {
            fn next_unit(&mut self) -> f64 {
                self.0 += 1;
                0.5
            }
        }
        let mut source = Counter(0);
        let color = random_color(&mut source);
        assert_eq!(source.0, 3);
        assert_eq!(color.to_rgba8(), [128, 128, 128, 255]);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RngSource(SmallRng::seed_from_u64(7));
        let mut b = RngSource(SmallRng::seed_from_u64(7));
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }
}
