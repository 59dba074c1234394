use thiserror::Error;
#[derive(Debug, Error)] pub enum NoiseError { #[error("invalid parameter {name}: {value}")] InvalidParameter { name: &'static str, value: f64 }, #[error("preset error: {0}")] Preset(String) }
#[derive(Debug, Clone, PartialEq)] pub struct NoiseField { pub width: u32, pub height: u32, pub values: Vec<f64> }
#[derive(Debug, Clone, PartialEq, Eq)] pub struct NoiseImage { pub width: u32, pub height: u32, pub pixels: Vec<u8> }

/// Source of 2D gradient noise. The viewer only talks to this trait, so the
/// concrete engine can be swapped without touching the sampler.
pub trait NoiseEngine: Send + Sync {
    /// Rebuilds all seeded state. Nothing of the previous seed survives.
    fn reseed(&mut self, seed: u32);

    fn seed(&self) -> u32;

    /// Raw noise at one point, roughly in [-1, 1].
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Sums `octaves` layers of [`sample`](Self::sample), doubling the
    /// frequency and multiplying the amplitude by `persistence` each layer,
    /// then maps the sum into nominally [0, 1].
    ///
    /// The mapping assumes each layer stays within its amplitude, which does
    /// not hold for large persistence, so the result is not clamped. Zero
    /// octaves yields 0.
    fn sample_octaves(&self, x: f64, y: f64, octaves: u32, persistence: f64) -> f64 {
        if octaves == 0 {
            return 0.0;
        }

        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        let mut max_value = 0.0;

        for _ in 0..octaves {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_value += amplitude;
            amplitude *= persistence;
            frequency *= 2.0;
        }

        (total + max_value) / (2.0 * max_value)
    }
}
