//! Seeded 2D Perlin noise with octave summation, and a sampler that renders it
//! into a grayscale intensity grid.
//!
//! The crate has no display dependency: callers hand it a [`NoiseParameters`]
//! value and get back a [`NoiseImage`] ready to upload wherever they like.

pub mod api;
pub mod params;
pub mod perlin;
pub mod permutation;
pub mod sampling;

pub use api::*;
pub use params::NoiseParameters;
pub use perlin::PerlinEngine;
pub use permutation::{MinStdRand, PermutationTable};
pub use sampling::ImageSampler;
