//! srg-core: predicate vocabulary, one-hot codec, and configuration.

pub mod config;
pub mod encode;
pub mod predicate;
pub mod vocab;


pub use config::{ConfigError, GenerateConfig, SceneConfig};
pub use encode::{DecodeError, PRED_ONE_HOT_LEN, PREDICATE_SCHEMA_ID};
pub use predicate::Predicate;
pub use vocab::{Color, ObjectKind, Relation, VocabError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
