use bevy::prelude::*;
use perlin_engine::{ImageSampler, NoiseEngine, NoiseImage, NoiseParameters, PerlinEngine};

use crate::config::ViewerConfig;

/// Engine, parameters and the last rendered image. Edits only mark the image
/// dirty; [`ViewerState::refresh`] does the actual work, at most once a frame.
#[derive(Resource)]
pub struct ViewerState {
    engine: PerlinEngine,
    sampler: ImageSampler,
    params: NoiseParameters,
    initial: NoiseParameters,
    image: NoiseImage,
    dirty: bool,
    generation: u64,
}

impl ViewerState {
    pub fn new(config: &ViewerConfig) -> Self {
        let params = config.params.clamped();
        let engine = PerlinEngine::new(params.seed);
        let sampler = ImageSampler::new(config.width, config.height);
        let image = sampler.regenerate(&engine, &params);
        Self {
            engine,
            sampler,
            params,
            initial: params,
            image,
            dirty: false,
            generation: 1,
        }
    }

    pub fn params(&self) -> NoiseParameters {
        self.params
    }

    pub fn image(&self) -> &NoiseImage {
        &self.image
    }

    /// Bumped each time `image` is replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Takes new parameters, reseeding first when the seed moved. Returns
    /// whether anything changed.
    pub fn apply(&mut self, next: NoiseParameters) -> bool {
        let next = next.clamped();
        if next == self.params {
            return false;
        }
        if next.seed != self.params.seed {
            self.engine.reseed(next.seed);
        }
        self.params = next;
        self.dirty = true;
        true
    }

    pub fn reset(&mut self) -> bool {
        self.apply(self.initial)
    }

    /// Re-renders if an edit is pending. Returns whether it did.
    pub fn refresh(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.image = self.sampler.regenerate(&self.engine, &self.params);
        self.dirty = false;
        self.generation += 1;
        true
    }
}
