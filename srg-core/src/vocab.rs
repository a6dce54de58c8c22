//! Closed vocabulary: colors, object kinds, and spatial relations.
//!
//! All three enums are integer-backed with dense discriminants in
//! `0..COUNT`; the one-hot codec and the probe enumerators rely on that.

use thiserror::Error;

/// An out-of-range discriminant reaching a vocabulary conversion.
///
/// This is a programming error on well-formed data paths; it surfaces only
/// when decoding untrusted one-hot buffers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabError {
    #[error("invalid color discriminant: {0}")]
    Color(u8),
    #[error("invalid object kind discriminant: {0}")]
    ObjectKind(u8),
    #[error("invalid relation discriminant: {0}")]
    Relation(u8),
}

/// Object colors. The discriminant doubles as a 3-bit RGB pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    NoColor = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Purple = 5,
    Yellow = 6,
    White = 7,
}

impl Color {
    pub const COUNT: usize = 8;

    pub const ALL: [Color; Color::COUNT] = [
        Color::NoColor,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Purple,
        Color::Yellow,
        Color::White,
    ];

    /// Colors drawn for sampled objects. NoColor is reserved for implicit
    /// subjects (the table) and White for the table top itself.
    pub const SAMPLEABLE: [Color; 6] = [
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Purple,
        Color::Yellow,
    ];

    /// Canonical lowercase name. NoColor renders as the empty string so that
    /// predicate display can elide it.
    pub fn name(self) -> &'static str {
        match self {
            Color::NoColor => "",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Red => "red",
            Color::Purple => "purple",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    /// RGBA from the 3-bit discriminant: bit 2 = red, bit 1 = green,
    /// bit 0 = blue, alpha fixed at 1.0.
    pub fn to_rgba(self) -> [f32; 4] {
        let v = self as u8;
        [
            ((v >> 2) & 1) as f32,
            ((v >> 1) & 1) as f32,
            (v & 1) as f32,
            1.0,
        ]
    }
}

impl TryFrom<u8> for Color {
    type Error = VocabError;

    fn try_from(v: u8) -> Result<Self, VocabError> {
        Color::ALL
            .get(v as usize)
            .copied()
            .ok_or(VocabError::Color(v))
    }
}

/// Object kinds. Actor and Table never appear as sampled scene objects;
/// Table is the implicit subject of table-relative relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ObjectKind {
    Actor = 0,
    Table = 1,
    Cube = 2,
    Sphere = 3,
    Pyramid = 4,
}

impl ObjectKind {
    pub const COUNT: usize = 5;

    pub const ALL: [ObjectKind; ObjectKind::COUNT] = [
        ObjectKind::Actor,
        ObjectKind::Table,
        ObjectKind::Cube,
        ObjectKind::Sphere,
        ObjectKind::Pyramid,
    ];

    /// Shapes drawn for sampled objects.
    pub const SAMPLEABLE: [ObjectKind; 3] =
        [ObjectKind::Cube, ObjectKind::Sphere, ObjectKind::Pyramid];

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Actor => "actor",
            ObjectKind::Table => "table",
            ObjectKind::Cube => "cube",
            ObjectKind::Sphere => "sphere",
            ObjectKind::Pyramid => "pyramid",
        }
    }
}

impl TryFrom<u8> for ObjectKind {
    type Error = VocabError;

    fn try_from(v: u8) -> Result<Self, VocabError> {
        ObjectKind::ALL
            .get(v as usize)
            .copied()
            .ok_or(VocabError::ObjectKind(v))
    }
}

/// Spatial relations. On doubles as table-ON and object-on-object-ON;
/// everything except Near is table-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Relation {
    On = 0,
    Near = 1,
    OnLeftSideOf = 2,
    OnRightSideOf = 3,
    OnNearSideOf = 4,
    OnFarSideOf = 5,
    InCenterOf = 6,
}

impl Relation {
    pub const COUNT: usize = 7;

    pub const ALL: [Relation; Relation::COUNT] = [
        Relation::On,
        Relation::Near,
        Relation::OnLeftSideOf,
        Relation::OnRightSideOf,
        Relation::OnNearSideOf,
        Relation::OnFarSideOf,
        Relation::InCenterOf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Relation::On => "on",
            Relation::Near => "near",
            Relation::OnLeftSideOf => "on_left_side_of",
            Relation::OnRightSideOf => "on_right_side_of",
            Relation::OnNearSideOf => "on_near_side_of",
            Relation::OnFarSideOf => "on_far_side_of",
            Relation::InCenterOf => "in_center_of",
        }
    }
}

impl TryFrom<u8> for Relation {
    type Error = VocabError;

    fn try_from(v: u8) -> Result<Self, VocabError> {
        Relation::ALL
            .get(v as usize)
            .copied()
            .ok_or(VocabError::Relation(v))
    }
}
