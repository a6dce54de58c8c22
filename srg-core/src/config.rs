//! Unified configuration schema for scene sampling and dataset generation.
//!
//! Scene geometry, labeling, and batch settings live in one YAML-loadable
//! structure so a generation run is fully described by a single file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Scene sampling + labeling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SceneConfig {
    /// Center of the sampling region, in world units.
    #[serde(default = "default_origin")]
    pub origin: [f32; 3],
    /// Per-axis half-extent of the sampling region. A zero component means
    /// no spread on that axis.
    #[serde(default = "default_max_bounds")]
    pub max_bounds: [f32; 3],
    /// Upper bound (exclusive) for the sampled yaw, in radians.
    #[serde(default = "default_max_rotation")]
    pub max_rotation: f32,
    /// Edge length / diameter assigned to sampled objects.
    #[serde(default = "default_object_size")]
    pub object_size: f32,
    /// Number of objects placed per scene.
    #[serde(default = "default_num_objects")]
    pub num_objects: u32,
    /// Minimum center-to-center distance between placed objects.
    #[serde(default = "default_min_distance")]
    pub min_distance: f32,
    /// Rejection-sampling draw cap per placement before the sampler reports
    /// exhaustion.
    #[serde(default = "default_max_place_attempts")]
    pub max_place_attempts: u32,
    /// Distance at which the NEAR score reaches zero.
    #[serde(default = "default_near_max_distance")]
    pub near_max_distance: f32,
    /// If true, emit the five positional table relations for on-table objects.
    #[serde(default = "default_add_positional")]
    pub add_positional: bool,
    /// Number of label-balancing false predicates requested per scene.
    #[serde(default = "default_num_false_predicates")]
    pub num_false_predicates: u32,
}

fn default_origin() -> [f32; 3] {
    [0.0, 0.0, 1.0]
}

fn default_max_bounds() -> [f32; 3] {
    [4.0, 4.0, 0.0]
}

fn default_max_rotation() -> f32 {
    std::f32::consts::TAU
}

fn default_object_size() -> f32 {
    2.0
}

fn default_num_objects() -> u32 {
    1
}

fn default_min_distance() -> f32 {
    2.0
}

fn default_max_place_attempts() -> u32 {
    1000
}

fn default_near_max_distance() -> f32 {
    4.0
}

fn default_add_positional() -> bool {
    true
}

fn default_num_false_predicates() -> u32 {
    1
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::one_object_random_position()
    }
}

impl SceneConfig {
    /// One object pinned to the table center: the easiest labeling scenario.
    pub fn easy_baseline() -> Self {
        Self {
            origin: default_origin(),
            max_bounds: [0.0, 0.0, 0.0],
            max_rotation: default_max_rotation(),
            object_size: default_object_size(),
            num_objects: default_num_objects(),
            min_distance: default_min_distance(),
            max_place_attempts: default_max_place_attempts(),
            near_max_distance: default_near_max_distance(),
            add_positional: default_add_positional(),
            num_false_predicates: default_num_false_predicates(),
        }
    }

    /// One object uniformly placed over the table surface.
    pub fn one_object_random_position() -> Self {
        Self {
            max_bounds: default_max_bounds(),
            ..Self::easy_baseline()
        }
    }
}

/// Dataset generation run configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateConfig {
    /// Scene sampling + labeling settings.
    #[serde(default)]
    pub scene: SceneConfig,
    /// Number of batches to produce.
    #[serde(default = "default_num_batches")]
    pub num_batches: u32,
    /// Scenes per batch.
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
    /// Base RNG seed for the run.
    #[serde(default)]
    pub seed: u64,
    /// Directory for NDJSON run logs.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: String,
}

fn default_num_batches() -> u32 {
    10
}

fn default_batch_size() -> u32 {
    32
}

fn default_logs_dir() -> String {
    "logs".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            scene: SceneConfig::default(),
            num_batches: default_num_batches(),
            batch_size: default_batch_size(),
            seed: 0,
            logs_dir: default_logs_dir(),
        }
    }
}

impl GenerateConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GenerateConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: GenerateConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
