#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    use srg_core::vocab::{Color, ObjectKind, Relation};

    use crate::placement::Placement;
    use crate::scene::demo_scene;
    use crate::score::{near_relations, on_relations, on_table_relations};

    fn cube_at(x: f32, y: f32, z: f32) -> Placement {
        Placement::new(
            ObjectKind::Cube,
            Color::Red,
            2.0,
            Vec3::new(x, y, z),
            Vec3::ZERO,
        )
    }

    #[test]
    fn on_table_is_strictly_binary() {
        let bounds = Vec3::new(4.0, 4.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            // Deliberately wider than the bounds so some samples fall off.
            let p = Placement::sample(
                &mut rng,
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(8.0, 8.0, 2.0),
                0.0,
                2.0,
            );
            let rows = on_table_relations(&p, bounds, true);
            let on = rows
                .iter()
                .find(|(pred, _)| pred.relation == Relation::On)
                .expect("ON row is always emitted");
            assert!(on.1 == 0.0 || on.1 == 1.0, "fractional ON score: {}", on.1);
        }
    }

    #[test]
    fn all_scores_are_bounded() {
        let bounds = Vec3::new(4.0, 4.0, 0.0);
        let extremes = [
            cube_at(0.0, 0.0, 0.0),
            cube_at(100.0, -100.0, 50.0),
            cube_at(-3.9, 3.9, 1.0),
            cube_at(0.0, 0.0, 1.0),
        ];
        for obj in &extremes {
            for (pred, v) in on_table_relations(obj, bounds, true) {
                assert!((0.0..=1.0).contains(&v), "{} scored {}", pred, v);
            }
        }
        // Degenerate: all-zero bounds disables normalization entirely.
        for (pred, v) in on_table_relations(&cube_at(0.5, -0.5, 1.0), Vec3::ZERO, true) {
            assert!((0.0..=1.0).contains(&v), "{} scored {}", pred, v);
        }
    }

    #[test]
    fn centered_cube_scenario() {
        // One cube exactly on center, no spread.
        let obj = cube_at(0.0, 0.0, 1.0);
        let rows = on_table_relations(&obj, Vec3::ZERO, true);
        assert_eq!(rows.len(), 6);

        let score = |r: Relation| {
            rows.iter()
                .find(|(p, _)| p.relation == r)
                .map(|(_, v)| *v)
                .unwrap()
        };
        assert_eq!(score(Relation::On), 1.0);
        assert_eq!(score(Relation::InCenterOf), 1.0);
        assert_eq!(score(Relation::OnLeftSideOf), 0.0);
        assert_eq!(score(Relation::OnRightSideOf), 0.0);
        assert_eq!(score(Relation::OnNearSideOf), 0.0);
        assert_eq!(score(Relation::OnFarSideOf), 0.0);
    }

    #[test]
    fn side_ramps_reach_one_at_the_edges() {
        let bounds = Vec3::new(4.0, 4.0, 0.0);
        let right_edge = cube_at(4.0, 0.0, 1.0);
        let rows = on_table_relations(&right_edge, bounds, true);
        // |norm.x| == 1.0 is off the table: only the ON row, scored 0.0.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1, 0.0);

        let near_right = cube_at(3.99, 0.0, 1.0);
        let rows = on_table_relations(&near_right, bounds, true);
        let right = rows
            .iter()
            .find(|(p, _)| p.relation == Relation::OnRightSideOf)
            .unwrap();
        assert!(right.1 > 0.99);
        let left = rows
            .iter()
            .find(|(p, _)| p.relation == Relation::OnLeftSideOf)
            .unwrap();
        assert_eq!(left.1, 0.0);
    }

    #[test]
    fn floating_object_gets_no_positional_rows() {
        let bounds = Vec3::new(4.0, 4.0, 0.0);
        let floating = cube_at(1.0, 1.0, 5.0);
        let rows = on_table_relations(&floating, bounds, true);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.relation, Relation::On);
        assert_eq!(rows[0].1, 0.0);
    }

    #[test]
    fn positional_rows_suppressed_when_disabled() {
        let bounds = Vec3::new(4.0, 4.0, 0.0);
        let rows = on_table_relations(&cube_at(0.0, 0.0, 1.0), bounds, false);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1, 1.0);
    }

    #[test]
    fn near_score_tracks_distance() {
        let max_distance = 4.0;
        let a = cube_at(0.0, 0.0, 1.0);

        let at = |d: f32| {
            let b = cube_at(d, 0.0, 1.0);
            near_relations(&[a, b], max_distance)[0].1
        };

        assert_eq!(at(0.0), 1.0); // clipped from 2.0
        assert_eq!(at(2.0), 1.0); // half max distance is still fully near
        assert_eq!(at(3.0), 0.5);
        assert_eq!(at(4.0), 0.0);
        assert_eq!(at(10.0), 0.0);

        // Strictly decreasing on the unclipped segment.
        assert!(at(2.5) > at(3.0));
        assert!(at(3.0) > at(3.5));
    }

    #[test]
    fn near_emits_both_directions() {
        let a = cube_at(0.0, 0.0, 1.0);
        let b = Placement::new(
            ObjectKind::Sphere,
            Color::Blue,
            2.0,
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::ZERO,
        );
        let rows = near_relations(&[a, b], 4.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].1, rows[1].1);
        assert_eq!(rows[0].0.object, ObjectKind::Cube);
        assert_eq!(rows[0].0.subject, ObjectKind::Sphere);
        assert_eq!(rows[1].0.object, ObjectKind::Sphere);
        assert_eq!(rows[1].0.subject, ObjectKind::Cube);
    }

    #[test]
    fn stacked_demo_scene_on_rows() {
        // Stack: red cube z=1, yellow cube z=3, blue pyramid z=5, plus a
        // loose green cube far to the right.
        let rows = on_relations(&demo_scene());
        assert_eq!(rows.len(), 2);

        let displays: Vec<String> = rows.iter().map(|(p, _)| p.to_string()).collect();
        assert!(displays.contains(&"(yellow cube on red cube)".to_string()));
        assert!(displays.contains(&"(blue pyramid on yellow cube)".to_string()));
        assert!(rows.iter().all(|(_, v)| *v == 1.0));
    }

    #[test]
    fn separated_objects_emit_no_on_rows() {
        let a = cube_at(0.0, 0.0, 1.0);
        let b = cube_at(5.0, 0.0, 1.0);
        assert!(on_relations(&[a, b]).is_empty());
    }
}
