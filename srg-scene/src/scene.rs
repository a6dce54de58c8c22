//! Scene-level composition: sample placements, score them, balance labels.

use glam::Vec3;
use rand::Rng;

use srg_core::config::SceneConfig;
use srg_core::predicate::Predicate;
use srg_core::vocab::{Color, ObjectKind};

use crate::label::false_predicates;
use crate::placement::{Placement, SampleError};
use crate::score::{near_relations, on_relations, on_table_relations};

/// Sample `num_objects` placements under the pairwise minimum-distance
/// constraint.
pub fn sample_scene<R: Rng>(
    rng: &mut R,
    cfg: &SceneConfig,
) -> Result<Vec<Placement>, SampleError> {
    let origin = Vec3::from_array(cfg.origin);
    let bounds = Vec3::from_array(cfg.max_bounds);

    let mut objects: Vec<Placement> = Vec::with_capacity(cfg.num_objects as usize);
    for _ in 0..cfg.num_objects {
        let placed = Placement::sample_clear(
            rng,
            origin,
            bounds,
            cfg.max_rotation,
            cfg.object_size,
            &objects,
            cfg.min_distance,
            cfg.max_place_attempts,
        )?;
        objects.push(placed);
    }
    Ok(objects)
}

/// Full labeled predicate list for a scene: table rows per object, NEAR and
/// object-ON rows per ordered pair, then up to `num_false_predicates`
/// complement negatives.
pub fn label_scene<R: Rng>(
    objects: &[Placement],
    cfg: &SceneConfig,
    rng: &mut R,
) -> Vec<(Predicate, f32)> {
    let bounds = Vec3::from_array(cfg.max_bounds);

    let mut preds = Vec::new();
    for obj in objects {
        preds.extend(on_table_relations(obj, bounds, cfg.add_positional));
    }
    preds.extend(near_relations(objects, cfg.near_max_distance));
    preds.extend(on_relations(objects));

    let negatives = false_predicates(&preds, cfg.num_false_predicates as usize, rng);
    preds.extend(negatives);
    preds
}

/// Sample and label one scene.
pub fn sample_labeled_scene<R: Rng>(
    rng: &mut R,
    cfg: &SceneConfig,
) -> Result<(Vec<Placement>, Vec<(Predicate, f32)>), SampleError> {
    let objects = sample_scene(rng, cfg)?;
    let labels = label_scene(&objects, cfg, rng);
    Ok((objects, labels))
}

/// Every graded predicate of a scene, without label balancing. This is the
/// interactive-annotation view: table rows, NEAR rows, and object-ON rows.
pub fn annotate_scene(
    objects: &[Placement],
    max_bounds: [f32; 3],
    near_max_distance: f32,
) -> Vec<(Predicate, f32)> {
    let bounds = Vec3::from_array(max_bounds);
    let mut rows = Vec::new();
    for obj in objects {
        rows.extend(on_table_relations(obj, bounds, true));
    }
    rows.extend(near_relations(objects, near_max_distance));
    rows.extend(on_relations(objects));
    rows
}

/// Bounds used by the fixed annotation demo scene.
pub const DEMO_MAX_BOUNDS: [f32; 3] = [7.0, 5.0, 0.0];

/// A fixed four-object scene (a three-object stack plus one loose cube),
/// handy for eyeballing scorer output.
pub fn demo_scene() -> Vec<Placement> {
    vec![
        Placement::new(
            ObjectKind::Cube,
            Color::Red,
            2.0,
            Vec3::new(-5.0, -1.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ),
        Placement::new(
            ObjectKind::Cube,
            Color::Yellow,
            2.0,
            Vec3::new(-5.0, -1.0, 3.0),
            Vec3::new(0.0, 0.0, -1.0),
        ),
        Placement::new(
            ObjectKind::Pyramid,
            Color::Blue,
            2.0,
            Vec3::new(-5.0, -1.0, 5.0),
            Vec3::new(0.0, 0.0, 0.0),
        ),
        Placement::new(
            ObjectKind::Cube,
            Color::Green,
            2.0,
            Vec3::new(0.0, -1.0, 1.0),
            Vec3::new(0.0, 0.0, 2.0),
        ),
    ]
}
