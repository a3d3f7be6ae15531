// MIT/Apache2 License

//! Reveal an image through a positioned mask.
//!
//! A mask image is placed at an integer offset over a primary image. Wherever the mask is opaque, the
//! primary image shows through; everywhere else it is cut away. The mask may be smaller or larger than the
//! primary image and may hang off of any of its edges.
//!
//! The work is split between this crate and a few collaborators. This crate turns a placement and the two
//! image sizes into [`ShaderParameters`] and a [`DrawInstruction`], and hands them to a [`Shader`] and a
//! [`Surface`]. CPU implementations of both, [`ClippingMaskShader`] and [`BitmapSurface`], are provided.

#![forbid(unsafe_code)]

mod error;

pub mod color;
pub mod composite;
pub mod compositor;
pub mod filter;
pub mod geometry;
pub mod image;
pub mod intensity;
pub mod shader;
pub mod surface;
pub mod transform;

pub(crate) mod util;

pub use color::*;
pub use composite::*;
pub use compositor::*;
pub use error::*;
pub use filter::*;
pub use geometry::*;
pub use image::*;
pub use intensity::*;
pub use shader::*;
pub use surface::*;
pub use transform::*;
