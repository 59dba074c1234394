use std::time::Instant;

use log::debug;

use crate::api::*;
use crate::params::NoiseParameters;

/// Maps a normalized value to a gray level. Out-of-range input saturates
/// instead of wrapping.
#[inline]
pub fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Renders a fixed-size grid of octave noise. Always recomputes the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSampler {
    width: u32,
    height: u32,
}

impl ImageSampler {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Unclamped octave values, row-major. Pixel `(i, j)` samples noise space at
    /// `(i * scale, j * scale)`.
    pub fn sample_field<E: NoiseEngine + ?Sized>(&self, engine: &E, params: &NoiseParameters) -> NoiseField {
        let (width, height) = (self.width, self.height);
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for j in 0..height {
            let y = f64::from(j) * params.scale;
            for i in 0..width {
                let x = f64::from(i) * params.scale;
                values.push(engine.sample_octaves(x, y, params.octaves, params.persistence));
            }
        }
        NoiseField { width, height, values }
    }

    pub fn regenerate<E: NoiseEngine + ?Sized>(&self, engine: &E, params: &NoiseParameters) -> NoiseImage {
        let start = Instant::now();
        let image = self.sample_field(engine, params).quantize();
        debug!(
            "Regenerated {}x{} noise image (seed {}, {} octaves) in {:.2}ms",
            self.width,
            self.height,
            engine.seed(),
            params.octaves,
            start.elapsed().as_secs_f64() * 1000.0
        );
        image
    }
}

impl NoiseField {
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn quantize(&self) -> NoiseImage {
        NoiseImage {
            width: self.width,
            height: self.height,
            pixels: self.values.iter().map(|&v| quantize(v)).collect(),
        }
    }
}

impl NoiseImage {
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Gray level replicated into RGB with opaque alpha, ready for texture upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&v| [v, v, v, u8::MAX]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perlin::PerlinEngine;

    /// Returns the same raw sample everywhere.
    struct FlatEngine(f64);

    impl NoiseEngine for FlatEngine {
        fn reseed(&mut self, _seed: u32) {}
        fn seed(&self) -> u32 {
            0
        }
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn quantize_truncates_and_saturates() {
        assert_eq!(quantize(0.0), 0);
        assert_eq!(quantize(0.5), 127);
        assert_eq!(quantize(1.0), 255);
        assert_eq!(quantize(1.7), 255);
        assert_eq!(quantize(-0.3), 0);
        assert_eq!(quantize(f64::NAN), 0);
    }

    #[test]
    fn overflowing_octave_sum_is_clamped() {
        // Raw 3.0 per octave normalizes to 2.0, well past the top.
        let params = NoiseParameters { persistence: 5.0, octaves: 10, ..Default::default() };
        let sampler = ImageSampler::new(3, 2);

        let field = sampler.sample_field(&FlatEngine(3.0), &params);
        assert!(field.values.iter().all(|&v| (v - 2.0).abs() < 1e-9));
        assert!(sampler.regenerate(&FlatEngine(3.0), &params).pixels.iter().all(|&p| p == 255));
        assert!(sampler.regenerate(&FlatEngine(-3.0), &params).pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn zero_octaves_render_black() {
        let params = NoiseParameters { octaves: 0, ..Default::default() };
        let image = ImageSampler::new(4, 4).regenerate(&FlatEngine(0.3), &params);
        assert_eq!(image.pixels, vec![0; 16]);
    }

    #[test]
    fn empty_grids_are_empty() {
        let engine = PerlinEngine::new(1);
        let params = NoiseParameters::default();
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let image = ImageSampler::new(w, h).regenerate(&engine, &params);
            assert!(image.is_empty());
            assert_eq!((image.width, image.height), (w, h));
            assert!(image.to_rgba8().is_empty());
        }
    }

    #[test]
    fn pixels_are_row_major() {
        let engine = PerlinEngine::new(3);
        let params = NoiseParameters { scale: 0.37, ..Default::default() };
        let field = ImageSampler::new(5, 3).sample_field(&engine, &params);
        assert_eq!(field.values.len(), 15);

        let want = engine.sample_octaves(4.0 * 0.37, 2.0 * 0.37, 4, 0.75);
        assert_eq!(field.get(4, 2), Some(want));
        assert_eq!(field.values[2 * 5 + 4], want);
        assert_eq!(field.get(5, 0), None);
        assert_eq!(field.get(0, 3), None);
    }

    #[test]
    fn rgba_replicates_gray() {
        let image = NoiseImage { width: 2, height: 1, pixels: vec![10, 200] };
        assert_eq!(image.to_rgba8(), vec![10, 10, 10, 255, 200, 200, 200, 255]);
        assert_eq!(image.get(1, 0), Some(200));
        assert_eq!(image.get(2, 0), None);
    }

    #[test]
    fn engine_works_through_trait_object() {
        let engine: Box<dyn NoiseEngine> = Box::new(PerlinEngine::new(1));
        let image = ImageSampler::new(2, 2).regenerate(engine.as_ref(), &NoiseParameters::default());
        assert_eq!(image.pixels.len(), 4);
    }
}
