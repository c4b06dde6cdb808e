//! Core configuration for rigkey-core.

use serde::{Deserialize, Serialize};

use crate::pairs::{BonePair, BonePairTable};
use crate::selection::DEFAULT_PHYSICS_PATTERNS;
use crate::spacing::SpacingAxis;
use crate::splice::LoopAnchor;

/// Defaults and reference tables used by the editing passes.
/// Every field is optional in JSON; omitted fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name fragments that mark physics-driven bones.
    pub physics_patterns: Vec<String>,
    /// Left/right pairs the spacing pass may target.
    pub bone_pairs: Vec<BonePair>,

    pub spacing: SpacingDefaults,
    pub looping: LoopDefaults,

    /// First frame sampled when baking physics.
    pub bake_frame_start: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingDefaults {
    pub angle_degrees: f32,
    pub axis: SpacingAxis,
    pub affect_left: bool,
    pub affect_right: bool,
}

impl Default for SpacingDefaults {
    fn default() -> Self {
        Self {
            angle_degrees: 5.0,
            axis: SpacingAxis::Sideways,
            affect_left: true,
            affect_right: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopDefaults {
    pub anchor: LoopAnchor,
    pub easing_width: u32,
}

impl Default for LoopDefaults {
    fn default() -> Self {
        Self {
            anchor: LoopAnchor::LastFrame,
            easing_width: 4,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            physics_patterns: DEFAULT_PHYSICS_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            bone_pairs: crate::pairs::vrm_bone_pairs(),
            spacing: SpacingDefaults::default(),
            looping: LoopDefaults::default(),
            bake_frame_start: 1,
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn pair_table(&self) -> BonePairTable {
        BonePairTable::new(self.bone_pairs.clone())
    }
}
