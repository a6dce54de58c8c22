//! srg-probes: exhaustive predicate probes for batched model evaluation.
//!
//! Probes are query predicates, not labels: they carry no truth values.
//! Enumeration order is deterministic (declaration order of the vocabulary
//! enums), so probe row indices are stable run-to-run.

use srg_core::encode::PRED_ONE_HOT_LEN;
use srg_core::predicate::Predicate;
use srg_core::vocab::{Color, ObjectKind, Relation};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A stacked row-major matrix of one-hot probe encodings.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSet {
    data: Vec<f32>,
    rows: usize,
}

impl ProbeSet {
    fn from_predicates<I: IntoIterator<Item = Predicate>>(preds: I) -> Self {
        let mut data = Vec::new();
        let mut rows = 0usize;
        for p in preds {
            data.extend_from_slice(&p.to_one_hot());
            rows += 1;
        }
        Self { data, rows }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Matrix width; fixed by the one-hot schema.
    pub fn cols(&self) -> usize {
        PRED_ONE_HOT_LEN
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * PRED_ONE_HOT_LEN..(i + 1) * PRED_ONE_HOT_LEN]
    }

    /// Row-major flat view over all rows.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Table-relative probes for every sampleable shape and color.
///
/// With `add_positional`, every relation except NEAR is enumerated;
/// otherwise only ON. The subject is fixed to Table/NoColor.
pub fn on_table_probes(add_positional: bool) -> ProbeSet {
    let relations: Vec<Relation> = if add_positional {
        Relation::ALL
            .into_iter()
            .filter(|r| *r != Relation::Near)
            .collect()
    } else {
        vec![Relation::On]
    };

    ProbeSet::from_predicates(relations.into_iter().flat_map(|relation| {
        ObjectKind::SAMPLEABLE.into_iter().flat_map(move |object| {
            Color::SAMPLEABLE
                .into_iter()
                .map(move |color| Predicate::table_relative(relation, object, color))
        })
    }))
}

/// NEAR probes over the full ordered shape x color x shape x color space.
pub fn near_probes() -> ProbeSet {
    ProbeSet::from_predicates(ObjectKind::SAMPLEABLE.into_iter().flat_map(|o1| {
        Color::SAMPLEABLE.into_iter().flat_map(move |c1| {
            ObjectKind::SAMPLEABLE.into_iter().flat_map(move |o2| {
                Color::SAMPLEABLE
                    .into_iter()
                    .map(move |c2| Predicate::new(Relation::Near, o1, c1, o2, c2))
            })
        })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn on_table_probe_counts() {
        // 6 relations (all but NEAR) x 3 shapes x 6 colors.
        let full = on_table_probes(true);
        assert_eq!(full.rows(), 6 * 3 * 6);
        assert_eq!(full.as_slice().len(), full.rows() * PRED_ONE_HOT_LEN);

        // ON only.
        let on_only = on_table_probes(false);
        assert_eq!(on_only.rows(), 3 * 6);
    }

    #[test]
    fn near_probe_count() {
        let probes = near_probes();
        assert_eq!(probes.rows(), 18 * 18);
        assert_eq!(probes.cols(), PRED_ONE_HOT_LEN);
    }

    #[test]
    fn rows_decode_to_valid_table_probes() {
        let probes = on_table_probes(true);
        for i in 0..probes.rows() {
            let p = Predicate::from_one_hot(probes.row(i)).expect("probe row decodes");
            assert_ne!(p.relation, Relation::Near);
            assert_eq!(p.subject, ObjectKind::Table);
            assert_eq!(p.subject_color, Color::NoColor);
            assert!(ObjectKind::SAMPLEABLE.contains(&p.object));
            assert!(Color::SAMPLEABLE.contains(&p.object_color));
        }
    }

    #[test]
    fn probe_rows_are_unique_and_stable() {
        let a = near_probes();
        let b = near_probes();
        assert_eq!(a, b);

        let mut seen = std::collections::HashSet::new();
        for i in 0..a.rows() {
            let p = Predicate::from_one_hot(a.row(i)).unwrap();
            assert!(seen.insert(p), "duplicate probe {}", p);
        }
    }

    #[test]
    fn first_probe_follows_declaration_order() {
        let probes = on_table_probes(true);
        let first = Predicate::from_one_hot(probes.row(0)).unwrap();
        assert_eq!(first.relation, Relation::On);
        assert_eq!(first.object, ObjectKind::Cube);
        assert_eq!(first.object_color, Color::Blue);
    }
}
