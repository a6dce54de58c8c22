//! Relation scoring: pure functions from placement geometry to graded
//! truth values in [0, 1].
//!
//! Table-relative scores work on the position normalized by the per-axis
//! sampling bounds; a zero bound component disables normalization on that
//! axis. Constants follow the canonical scorer variant (see DESIGN.md):
//! ε = 0.05, center falloff 1.5, near sharpness 2.0.

use glam::{Vec2, Vec3};

use srg_core::predicate::Predicate;
use srg_core::vocab::Relation;

use crate::placement::Placement;

/// Height slack for the binary table-ON test.
pub const ON_TABLE_EPS: f32 = 0.05;

/// Falloff coefficient for IN_CENTER_OF.
pub const CENTER_FALLOFF: f32 = 1.5;

/// Sharpness multiplier for NEAR.
pub const NEAR_SHARPNESS: f32 = 2.0;

/// Identifier for the constant set above, recorded in run logs.
pub const SCORER_ID: &str = "table_linear_v1";

fn clip(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Position divided by the per-axis bounds, with zero bounds treated as 1.
fn normalize(position: Vec3, max_bounds: Vec3) -> Vec3 {
    let b = Vec3::new(
        if max_bounds.x == 0.0 { 1.0 } else { max_bounds.x },
        if max_bounds.y == 0.0 { 1.0 } else { max_bounds.y },
        if max_bounds.z == 0.0 { 1.0 } else { max_bounds.z },
    );
    position / b
}

/// Binary table-ON: horizontal position within bounds and resting height.
/// Exactly 0.0 or 1.0, never fractional.
fn score_on_table(obj: &Placement, norm: Vec3) -> f32 {
    let inside = norm.x.abs() < 1.0 && norm.y.abs() < 1.0;
    let resting = obj.position.z < obj.size * 0.5 + ON_TABLE_EPS;
    if inside && resting {
        1.0
    } else {
        0.0
    }
}

/// Graded score for one table-relative relation of `obj` at normalized
/// position `norm`.
///
/// # Panics
/// Panics on `Relation::Near`, which is pairwise and has no table-relative
/// score.
pub fn score_table_relation(relation: Relation, obj: &Placement, norm: Vec3) -> f32 {
    match relation {
        Relation::On => score_on_table(obj, norm),
        Relation::OnLeftSideOf => clip(-norm.x),
        Relation::OnRightSideOf => clip(norm.x),
        Relation::OnFarSideOf => clip(norm.y),
        Relation::OnNearSideOf => clip(-norm.y),
        Relation::InCenterOf => clip(1.0 - CENTER_FALLOFF * norm.truncate().length()),
        Relation::Near => panic!("Near is pairwise, not table-relative"),
    }
}

/// Table-relative relations in emission order: ON first, positional after.
const TABLE_RELATIONS: [Relation; 6] = [
    Relation::On,
    Relation::OnLeftSideOf,
    Relation::OnRightSideOf,
    Relation::OnNearSideOf,
    Relation::OnFarSideOf,
    Relation::InCenterOf,
];

/// Predicates of `obj` against the table.
///
/// The ON row is always emitted (graded 0.0/1.0). The five positional rows
/// are emitted only when `add_positional` is set and the object is actually
/// on the table.
pub fn on_table_relations(
    obj: &Placement,
    max_bounds: Vec3,
    add_positional: bool,
) -> Vec<(Predicate, f32)> {
    let norm = normalize(obj.position, max_bounds);
    let is_on_table = score_on_table(obj, norm);

    let mut preds = vec![(
        Predicate::table_relative(Relation::On, obj.kind, obj.color),
        is_on_table,
    )];

    if add_positional && is_on_table > 0.0 {
        for relation in TABLE_RELATIONS.into_iter().skip(1) {
            preds.push((
                Predicate::table_relative(relation, obj.kind, obj.color),
                score_table_relation(relation, obj, norm),
            ));
        }
    }

    preds
}

/// NEAR predicates over every ordered pair of distinct objects.
///
/// The relation is geometrically symmetric but directional in
/// representation, so both (a, b) and (b, a) are emitted with the same
/// score.
pub fn near_relations(objects: &[Placement], max_distance: f32) -> Vec<(Predicate, f32)> {
    let mut preds = Vec::new();
    for (i, o1) in objects.iter().enumerate() {
        for (j, o2) in objects.iter().enumerate() {
            if i == j {
                continue;
            }
            let d = o1.position.distance(o2.position);
            preds.push((
                Predicate::new(Relation::Near, o1.kind, o1.color, o2.kind, o2.color),
                clip(NEAR_SHARPNESS * (1.0 - d / max_distance)),
            ));
        }
    }
    preds
}

/// Object-on-object ON predicates over every ordered pair (o1 on o2).
///
/// Binary and sparse: a row is emitted with truth 1.0 only when the
/// horizontal footprints overlap and o1 rests on top of o2; unsatisfied
/// pairs produce no row at all.
pub fn on_relations(objects: &[Placement]) -> Vec<(Predicate, f32)> {
    let mut preds = Vec::new();
    for (i, o1) in objects.iter().enumerate() {
        for (j, o2) in objects.iter().enumerate() {
            if i == j {
                continue;
            }
            let half_sizes = 0.5 * (o1.size + o2.size);
            let horizontal: Vec2 = o1.position.truncate() - o2.position.truncate();
            let footprints_overlap = horizontal.length() - half_sizes < 0.0;
            let rests_on_top =
                (o1.position.z - (o2.position.z + half_sizes)).abs() < o1.size * 0.5;
            if footprints_overlap && rests_on_top {
                preds.push((
                    Predicate::new(Relation::On, o1.kind, o1.color, o2.kind, o2.color),
                    1.0,
                ));
            }
        }
    }
    preds
}
