//! One-hot predicate codec (schema v1).
//!
//! ### Layout (v1)
//! Concatenation of one-hot sub-vectors, one per predicate field, each
//! sub-vector as long as its enum's cardinality:
//!
//! - **relation**: 7 floats
//! - **object**: 5 floats
//! - **object_color**: 8 floats
//! - **subject**: 5 floats
//! - **subject_color**: 8 floats
//!
//! Total: PRED_ONE_HOT_LEN = 33. Decoding exactly inverts encoding.

use thiserror::Error;

use crate::predicate::Predicate;
use crate::vocab::{Color, ObjectKind, Relation};

/// Increment this whenever the one-hot layout changes.
pub const PREDICATE_SCHEMA_ID: u32 = 1;

/// Encoded predicate length for schema v1.
pub const PRED_ONE_HOT_LEN: usize =
    Relation::COUNT + ObjectKind::COUNT + Color::COUNT + ObjectKind::COUNT + Color::COUNT;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("one-hot vector has length {got}, expected {expected}")]
    BadLength { got: usize, expected: usize },
    #[error("one-hot segment for {field} does not have exactly one hot entry")]
    NotOneHot { field: &'static str },
    #[error("decoded discriminant out of range for {field}: {index}")]
    BadIndex { field: &'static str, index: usize },
}

fn push_hot(out: &mut [f32; PRED_ONE_HOT_LEN], offset: &mut usize, index: usize, width: usize) {
    debug_assert!(index < width);
    out[*offset + index] = 1.0;
    *offset += width;
}

/// Index of the single nonzero entry in the next `width` floats.
fn take_hot(
    v: &[f32],
    offset: &mut usize,
    width: usize,
    field: &'static str,
) -> Result<usize, DecodeError> {
    let seg = &v[*offset..*offset + width];
    *offset += width;

    let mut hot = None;
    for (i, &x) in seg.iter().enumerate() {
        if x != 0.0 {
            if hot.is_some() {
                return Err(DecodeError::NotOneHot { field });
            }
            hot = Some(i);
        }
    }
    hot.ok_or(DecodeError::NotOneHot { field })
}

impl Predicate {
    /// Encode to the fixed-width one-hot layout (schema v1).
    pub fn to_one_hot(&self) -> [f32; PRED_ONE_HOT_LEN] {
        let mut out = [0.0f32; PRED_ONE_HOT_LEN];
        let mut off = 0usize;
        push_hot(&mut out, &mut off, self.relation as usize, Relation::COUNT);
        push_hot(&mut out, &mut off, self.object as usize, ObjectKind::COUNT);
        push_hot(&mut out, &mut off, self.object_color as usize, Color::COUNT);
        push_hot(&mut out, &mut off, self.subject as usize, ObjectKind::COUNT);
        push_hot(
            &mut out,
            &mut off,
            self.subject_color as usize,
            Color::COUNT,
        );
        debug_assert_eq!(off, PRED_ONE_HOT_LEN);
        out
    }

    /// Decode a one-hot buffer back into a predicate.
    ///
    /// Rejects wrong-length buffers and segments that are not exactly one-hot.
    pub fn from_one_hot(v: &[f32]) -> Result<Predicate, DecodeError> {
        if v.len() != PRED_ONE_HOT_LEN {
            return Err(DecodeError::BadLength {
                got: v.len(),
                expected: PRED_ONE_HOT_LEN,
            });
        }

        let mut off = 0usize;
        let relation = take_hot(v, &mut off, Relation::COUNT, "relation")?;
        let object = take_hot(v, &mut off, ObjectKind::COUNT, "object")?;
        let object_color = take_hot(v, &mut off, Color::COUNT, "object_color")?;
        let subject = take_hot(v, &mut off, ObjectKind::COUNT, "subject")?;
        let subject_color = take_hot(v, &mut off, Color::COUNT, "subject_color")?;

        Ok(Predicate {
            relation: Relation::try_from(relation as u8).map_err(|_| DecodeError::BadIndex {
                field: "relation",
                index: relation,
            })?,
            object: ObjectKind::try_from(object as u8).map_err(|_| DecodeError::BadIndex {
                field: "object",
                index: object,
            })?,
            object_color: Color::try_from(object_color as u8).map_err(|_| {
                DecodeError::BadIndex {
                    field: "object_color",
                    index: object_color,
                }
            })?,
            subject: ObjectKind::try_from(subject as u8).map_err(|_| DecodeError::BadIndex {
                field: "subject",
                index: subject,
            })?,
            subject_color: Color::try_from(subject_color as u8).map_err(|_| {
                DecodeError::BadIndex {
                    field: "subject_color",
                    index: subject_color,
                }
            })?,
        })
    }
}
