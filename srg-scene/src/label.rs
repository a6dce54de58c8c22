//! Label balancing: negative predicates drawn from the complement space.
//!
//! A scene's positives are heavily biased toward true statements; training
//! needs deliberately false rows. Negatives are built by swapping every
//! other sampleable (kind, color) pair into each positive's object role.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use srg_core::predicate::Predicate;
use srg_core::vocab::{Color, ObjectKind};

/// Complement predicates of `p`: same relation and subject, every other
/// sampleable (kind, color) in the object role.
fn object_complement(p: Predicate) -> impl Iterator<Item = Predicate> {
    ObjectKind::SAMPLEABLE.into_iter().flat_map(move |kind| {
        Color::SAMPLEABLE.into_iter().filter_map(move |color| {
            if kind == p.object && color == p.object_color {
                None
            } else {
                Some(p.with_object(kind, color))
            }
        })
    })
}

/// Draw up to `count` false predicates (truth 0.0) for a scene's positives.
///
/// The pool is the union of all positives' object-role complements, minus
/// exact duplicates of positives, de-duplicated by tuple equality. If
/// `count` meets or exceeds the pool, the entire pool is returned; a
/// shortfall is a degraded-but-valid result, not an error.
pub fn false_predicates<R: Rng>(
    positives: &[(Predicate, f32)],
    count: usize,
    rng: &mut R,
) -> Vec<(Predicate, f32)> {
    let positive_set: FxHashSet<Predicate> = positives.iter().map(|(p, _)| *p).collect();

    let mut seen = FxHashSet::default();
    let mut pool = Vec::new();
    for (p, _) in positives {
        for candidate in object_complement(*p) {
            if positive_set.contains(&candidate) {
                continue;
            }
            if seen.insert(candidate) {
                pool.push(candidate);
            }
        }
    }

    let chosen: Vec<Predicate> = if count < pool.len() {
        pool.choose_multiple(rng, count).copied().collect()
    } else {
        pool
    };

    chosen.into_iter().map(|p| (p, 0.0)).collect()
}
