//! srg-bench: shared input generation for the criterion benches.

use glam::Vec3;

use srg_core::vocab::{Color, ObjectKind};
use srg_scene::Placement;

/// Deterministic placement inputs without the rand dependency,
/// via a small xorshift64.
pub fn gen_placements(n: usize) -> Vec<Placement> {
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut next_unit = move || {
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        (x >> 11) as f32 / (1u64 << 53) as f32
    };

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let kind = ObjectKind::SAMPLEABLE[i % ObjectKind::SAMPLEABLE.len()];
        let color = Color::SAMPLEABLE[i % Color::SAMPLEABLE.len()];
        let position = Vec3::new(
            next_unit() * 8.0 - 4.0,
            next_unit() * 8.0 - 4.0,
            next_unit() * 2.0,
        );
        out.push(Placement::new(kind, color, 2.0, position, Vec3::ZERO));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placements_stay_in_expected_region() {
        let ps = gen_placements(100);
        assert_eq!(ps.len(), 100);
        for p in ps {
            assert!(p.position.x >= -4.0 && p.position.x <= 4.0);
            assert!(p.position.z >= 0.0 && p.position.z <= 2.0);
        }
    }
}
