//! Improved Perlin gradient noise over a seeded permutation table.

use log::debug;

use crate::api::NoiseEngine;
use crate::permutation::{PermutationTable, TABLE_SIZE};

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`. First and second derivatives
/// vanish at 0 and 1, so cell edges leave no creases.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of `(x, y)` with one of eight gradients picked by the low
/// three bits of `hash`: `±x ± 2y` or `±y ± 2x`.
#[inline]
pub fn grad(hash: usize, x: f64, y: f64) -> f64 {
    let h = hash & 7;
    let (u, v) = if h < 4 { (x, y) } else { (y, x) };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -2.0 * v } else { 2.0 * v };
    u + v
}

/// Lattice coordinate of `floor` wrapped into the table. Euclidean, so
/// negative cells wrap instead of indexing below zero.
#[inline]
fn lattice_index(floor: f64) -> usize {
    (floor as i64).rem_euclid(TABLE_SIZE as i64) as usize
}

#[derive(Debug, Clone)]
pub struct PerlinEngine {
    seed: u32,
    table: PermutationTable,
}

impl PerlinEngine {
    pub fn new(seed: u32) -> Self {
        Self { seed, table: PermutationTable::new(seed) }
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    #[inline]
    fn hash(&self, xi: usize, yi: usize) -> usize {
        self.table.get(self.table.get(xi) + yi)
    }
}

impl Default for PerlinEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

impl NoiseEngine for PerlinEngine {
    fn reseed(&mut self, seed: u32) {
        debug!("Reseeding permutation table: {} -> {}", self.seed, seed);
        self.table = PermutationTable::new(seed);
        self.seed = seed;
    }

    fn seed(&self) -> u32 {
        self.seed
    }

    fn sample(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();

        let xi0 = lattice_index(x_floor);
        let xi1 = (xi0 + 1) % TABLE_SIZE;
        let yi0 = lattice_index(y_floor);
        let yi1 = (yi0 + 1) % TABLE_SIZE;

        let tx = x - x_floor;
        let ty = y - y_floor;

        let u = fade(tx);
        let v = fade(ty);

        let a = grad(self.hash(xi0, yi0), tx, ty);
        let b = grad(self.hash(xi1, yi0), tx - 1.0, ty);
        let c = grad(self.hash(xi0, yi1), tx, ty - 1.0);
        let d = grad(self.hash(xi1, yi1), tx - 1.0, ty - 1.0);

        lerp(v, lerp(u, a, b), lerp(u, c, d))
    }
}
