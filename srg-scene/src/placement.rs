//! Object placements and their rejection sampler.
//!
//! Sampling is a pure function of the injected RNG; callers own the seed.
//! The non-intersection variant redraws from scratch (no perturbation) and is
//! bounded by an explicit attempt cap.

use glam::Vec3;
use rand::Rng;
use thiserror::Error;

use srg_core::vocab::{Color, ObjectKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// The non-intersection constraint could not be satisfied within the
    /// attempt cap; the sampling region is too tight for `min_distance`.
    #[error("could not place object clear of {existing} existing objects within {attempts} attempts")]
    Exhausted { attempts: u32, existing: usize },
}

/// A sampled object's full geometric state in a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: ObjectKind,
    pub color: Color,
    pub size: f32,
    pub position: Vec3,
    /// Euler angles; only yaw (z) is ever nonzero for sampled objects.
    pub orientation: Vec3,
    /// Renderer-side shape handle, if the placement has been realized.
    /// Not owned; reset together with the scene.
    pub shape_id: Option<i64>,
}

impl Placement {
    pub fn new(kind: ObjectKind, color: Color, size: f32, position: Vec3, orientation: Vec3) -> Self {
        Self {
            kind,
            color,
            size,
            position,
            orientation,
            shape_id: None,
        }
    }

    /// Draw one placement: uniform sampleable kind and color, position
    /// uniform in `origin ± max_bounds` (elementwise), yaw uniform in
    /// `[0, max_rotation)`.
    pub fn sample<R: Rng>(
        rng: &mut R,
        origin: Vec3,
        max_bounds: Vec3,
        max_rotation: f32,
        size: f32,
    ) -> Placement {
        let kind = ObjectKind::SAMPLEABLE[rng.gen_range(0..ObjectKind::SAMPLEABLE.len())];
        let color = Color::SAMPLEABLE[rng.gen_range(0..Color::SAMPLEABLE.len())];

        let unit = Vec3::new(
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
        );
        let position = unit * max_bounds + origin;
        let yaw = if max_rotation > 0.0 {
            rng.gen::<f32>() * max_rotation
        } else {
            0.0
        };

        Placement::new(kind, color, size, position, Vec3::new(0.0, 0.0, yaw))
    }

    fn intersects(&self, other: &Placement, min_distance: f32) -> bool {
        self.position.distance(other.position) < min_distance
    }

    /// Draw a placement whose center is at least `min_distance` from every
    /// placement in `existing`, redrawing uniformly up to `max_attempts`
    /// times.
    #[allow(clippy::too_many_arguments)]
    pub fn sample_clear<R: Rng>(
        rng: &mut R,
        origin: Vec3,
        max_bounds: Vec3,
        max_rotation: f32,
        size: f32,
        existing: &[Placement],
        min_distance: f32,
        max_attempts: u32,
    ) -> Result<Placement, SampleError> {
        for _ in 0..max_attempts {
            let candidate = Placement::sample(rng, origin, max_bounds, max_rotation, size);
            if existing.iter().all(|o| !candidate.intersects(o, min_distance)) {
                return Ok(candidate);
            }
        }
        Err(SampleError::Exhausted {
            attempts: max_attempts,
            existing: existing.len(),
        })
    }
}
