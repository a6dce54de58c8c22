//! srg-batch: in-memory tensor assembly for labeled scenes.
//!
//! This crate stops at row-major f32 buffers; on-disk formats and the
//! training loop are external collaborators.

use rand::seq::SliceRandom;
use rand::Rng;

use srg_core::encode::PRED_ONE_HOT_LEN;
use srg_core::predicate::Predicate;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The labeled predicate list of one scene.
#[derive(Debug, Clone, Default)]
pub struct SceneSample {
    pub rows: Vec<(Predicate, f32)>,
}

/// Stacked tensors for one scene: a row-major one-hot predicate matrix and
/// the matching truth-value vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTensors {
    pub predicates: Vec<f32>,
    pub targets: Vec<f32>,
}

impl SceneTensors {
    pub fn rows(&self) -> usize {
        self.targets.len()
    }
}

impl SceneSample {
    pub fn new(rows: Vec<(Predicate, f32)>) -> Self {
        Self { rows }
    }

    /// Shuffle the rows and stack them into tensors. The same permutation
    /// applies to predicates and targets.
    pub fn to_tensors<R: Rng>(&self, rng: &mut R) -> SceneTensors {
        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        order.shuffle(rng);

        let mut predicates = Vec::with_capacity(order.len() * PRED_ONE_HOT_LEN);
        let mut targets = Vec::with_capacity(order.len());
        for &i in &order {
            let (p, v) = self.rows[i];
            predicates.extend_from_slice(&p.to_one_hot());
            targets.push(v);
        }
        SceneTensors {
            predicates,
            targets,
        }
    }
}

/// Groups shuffled scene samples into fixed-size batches.
///
/// The trailing remainder that does not fill a whole batch is dropped.
#[derive(Debug)]
pub struct BatchBuilder {
    batch_size: usize,
    buf: Vec<SceneSample>,
}

impl BatchBuilder {
    /// # Panics
    /// Panics if `batch_size` is zero.
    pub fn new(batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch_size must be > 0");
        Self {
            batch_size,
            buf: Vec::new(),
        }
    }

    pub fn push(&mut self, sample: SceneSample) {
        self.buf.push(sample);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Shuffle the collected scenes and emit whole batches of tensors.
    pub fn into_batches<R: Rng>(mut self, rng: &mut R) -> Vec<Vec<SceneTensors>> {
        self.buf.shuffle(rng);
        let num_batches = self.buf.len() / self.batch_size;

        let mut batches = Vec::with_capacity(num_batches);
        let mut it = self.buf.into_iter();
        for _ in 0..num_batches {
            let batch: Vec<SceneTensors> = (&mut it)
                .take(self.batch_size)
                .map(|s| s.to_tensors(rng))
                .collect();
            batches.push(batch);
        }
        batches
    }
}
