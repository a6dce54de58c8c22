//! The predicate value type: a typed 5-field relation statement.

use std::fmt;

use crate::vocab::{Color, ObjectKind, Relation};

/// "object-color object-kind \<relation\> subject-color subject-kind",
/// e.g. "red cube on table". Immutable; equality and hashing are by full
/// field value. Truth values are carried alongside, never inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub relation: Relation,
    pub object: ObjectKind,
    pub object_color: Color,
    pub subject: ObjectKind,
    pub subject_color: Color,
}

impl Predicate {
    pub fn new(
        relation: Relation,
        object: ObjectKind,
        object_color: Color,
        subject: ObjectKind,
        subject_color: Color,
    ) -> Self {
        Self {
            relation,
            object,
            object_color,
            subject,
            subject_color,
        }
    }

    /// Shorthand for table-relative predicates; the table subject carries
    /// NoColor by convention.
    pub fn table_relative(relation: Relation, object: ObjectKind, object_color: Color) -> Self {
        Self::new(
            relation,
            object,
            object_color,
            ObjectKind::Table,
            Color::NoColor,
        )
    }

    /// The same predicate with a different (kind, color) in the object role.
    /// Used to enumerate complement (false) predicates.
    pub fn with_object(self, object: ObjectKind, object_color: Color) -> Self {
        Self {
            object,
            object_color,
            ..self
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            self.object_color.name(),
            self.object.name(),
            self.relation.name(),
            self.subject_color.name(),
            self.subject.name(),
        ];
        write!(f, "(")?;
        let mut first = true;
        for p in parts {
            if p.is_empty() {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", p)?;
            first = false;
        }
        write!(f, ")")
    }
}
