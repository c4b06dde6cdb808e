//! Baking API: write sampled simulation rotations into a clip as per-frame keys.
//!
//! The simulation itself lives in the host. It is stepped through [`MotionSampler`]
//! one frame at a time (frames ascending), and every sample becomes a key on the
//! bone's X/Y/Z channels. Channels missing from the clip are created here.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::bounds::{clip_bounds, FrameRange};
use crate::data::{Axis, Clip};
use crate::error::EditError;
use crate::resolver::resolve_or_insert;

/// Source of simulated motion (spring bones, cloth, ...).
pub trait MotionSampler {
    /// Bones the sampler can drive.
    fn bones(&self) -> Vec<String>;

    /// Evaluated euler rotation (radians, XYZ) of `bone` at `frame`.
    fn sample(&mut self, bone: &str, frame: i32) -> Option<[f32; 3]>;
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakingConfig {
    /// First frame to sample.
    pub frame_start: i32,
    /// Last frame to sample; if None, uses the clip's last keyed frame.
    pub frame_end: Option<i32>,
    /// Restrict baking to these bones; if None, every bone the sampler reports.
    #[serde(default)]
    pub bones: Option<BTreeSet<String>>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_start: 1,
            frame_end: None,
            bones: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakeReport {
    pub range: FrameRange,
    pub bones_baked: usize,
    pub keys_written: usize,
}

/// Bake `sampler` into `clip` using the provided config.
pub fn bake_clip(
    clip: &mut Clip,
    sampler: &mut dyn MotionSampler,
    cfg: &BakingConfig,
) -> Result<BakeReport, EditError> {
    let end = match cfg.frame_end {
        Some(end) => end,
        None => clip_bounds(clip)?.last,
    };
    if end < cfg.frame_start {
        return Err(EditError::InvalidRange {
            start: cfg.frame_start,
            end,
        });
    }
    let range = FrameRange::new(cfg.frame_start, end);

    let bones: Vec<String> = sampler
        .bones()
        .into_iter()
        .filter(|b| cfg.bones.as_ref().map_or(true, |only| only.contains(b)))
        .collect();
    log::debug!(
        "bake: clip='{}' frames={}..={} bones={}",
        clip.name,
        range.first,
        range.last,
        bones.len()
    );

    let mut keys_written = 0usize;
    let mut baked: BTreeSet<&str> = BTreeSet::new();
    for frame in range.frames() {
        for bone in &bones {
            let Some(euler) = sampler.sample(bone, frame) else {
                log::trace!("bake: no sample for '{bone}' at {frame}");
                continue;
            };
            for axis in Axis::ALL {
                resolve_or_insert(clip, bone, axis)
                    .keys
                    .insert(frame, euler[axis.index()]);
                keys_written += 1;
            }
            baked.insert(bone.as_str());
        }
    }

    if keys_written > 0 {
        if let Some(pinned) = clip.frame_range.as_mut() {
            pinned.first = pinned.first.min(range.first);
            pinned.last = pinned.last.max(range.last);
        }
    }

    Ok(BakeReport {
        range,
        bones_baked: baked.len(),
        keys_written,
    })
}

/// Export a bake report as serde_json::Value (stable schema for FFI/serialization).
pub fn export_bake_report_json(report: &BakeReport) -> serde_json::Value {
    serde_json::to_value(report).unwrap_or(serde_json::Value::Null)
}
