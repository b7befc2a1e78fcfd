//! Frame output. [`svg`] turns a [`crate::canvas::Frame`] into an SVG
//! document; [`nannou`] (feature `nannou`) draws strokes into a live window.

pub mod svg;

#[cfg(feature = "nannou")]
pub mod nannou;

pub use self::svg::{Arrangement, ToSvg};
