//! Mirrored bone pairs addressed by the spacing pass.

use serde::{Deserialize, Serialize};

use crate::error::EditError;

/// One left/right pair row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonePair {
    /// Stable id, e.g. `SHOULDER`.
    pub id: String,
    pub left: String,
    pub right: String,
    /// Human-readable label for host menus.
    pub label: String,
}

impl BonePair {
    pub fn new(id: &str, left: &str, right: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            left: left.to_string(),
            right: right.to_string(),
            label: label.to_string(),
        }
    }
}

/// VRM humanoid limb pairs.
pub fn vrm_bone_pairs() -> Vec<BonePair> {
    vec![
        BonePair::new("SHOULDER", "J_Bip_L_Shoulder", "J_Bip_R_Shoulder", "Shoulder"),
        BonePair::new("UPPER_ARM", "J_Bip_L_UpperArm", "J_Bip_R_UpperArm", "Upper Arm"),
        BonePair::new("LOWER_ARM", "J_Bip_L_LowerArm", "J_Bip_R_LowerArm", "Lower Arm"),
        BonePair::new("UPPER_LEG", "J_Bip_L_UpperLeg", "J_Bip_R_UpperLeg", "Upper Leg"),
        BonePair::new("LOWER_LEG", "J_Bip_L_LowerLeg", "J_Bip_R_LowerLeg", "Lower Leg"),
    ]
}

/// Read-only pair table; built once from [`crate::Config`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonePairTable {
    pairs: Vec<BonePair>,
}

impl Default for BonePairTable {
    fn default() -> Self {
        Self::new(vrm_bone_pairs())
    }
}

impl BonePairTable {
    pub fn new(pairs: Vec<BonePair>) -> Self {
        Self { pairs }
    }

    pub fn get(&self, id: &str) -> Option<&BonePair> {
        self.pairs.iter().find(|p| p.id == id)
    }

    pub fn lookup(&self, id: &str) -> Result<&BonePair, EditError> {
        self.get(id)
            .ok_or_else(|| EditError::UnknownBonePair { id: id.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &BonePair> {
        self.pairs.iter()
    }
}
