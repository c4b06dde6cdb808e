//! Mirrored spacing adjustment for a left/right bone pair.
//!
//! The pass walks every integer frame of the clip range (inclusive on both ends)
//! and, for each side that is enabled, nudges the rotation on the chosen axis:
//! left by `+delta`, right by `-delta`. Only frames that already carry a key on
//! that channel are touched, so the key layout never changes. Repeated calls
//! accumulate.

use serde::{Deserialize, Serialize};

use crate::bounds::keyed_bounds;
use crate::data::{Axis, Clip};
use crate::error::EditError;
use crate::host::PoseHost;
use crate::pairs::BonePairTable;
use crate::resolver::ChannelResolver;

/// Which way the pair is spread.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpacingAxis {
    /// Spread sideways (Z rotation).
    #[default]
    Sideways,
    /// Spread forward/backward (Y rotation).
    ForwardBackward,
}

impl SpacingAxis {
    pub fn axis(self) -> Axis {
        match self {
            SpacingAxis::Sideways => Axis::Z,
            SpacingAxis::ForwardBackward => Axis::Y,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpacingRequest {
    /// Bone pair id, e.g. `SHOULDER`.
    pub pair: String,
    #[serde(default)]
    pub axis: SpacingAxis,
    pub angle_degrees: f32,
    pub affect_left: bool,
    pub affect_right: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum SpacingOutcome {
    /// Neither side was selected.
    NothingToDo,
    Applied {
        keys_adjusted: usize,
        left_keys: usize,
        right_keys: usize,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Where the live rotation at a keyed frame comes from.
#[derive(Copy, Clone)]
enum PoseSource<'p> {
    /// The keyed value itself.
    Keys,
    Host(&'p dyn PoseHost),
}

#[derive(Clone, Debug, Default)]
pub struct SpacingAdjuster {
    pairs: BonePairTable,
}

impl SpacingAdjuster {
    pub fn new(pairs: BonePairTable) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &BonePairTable {
        &self.pairs
    }

    /// Apply using keyed values as the live pose.
    pub fn apply(&self, clip: &mut Clip, req: &SpacingRequest) -> Result<SpacingOutcome, EditError> {
        self.run(clip, req, PoseSource::Keys)
    }

    /// Apply sampling live rotations from `pose` at each keyed frame.
    pub fn apply_with_pose(
        &self,
        clip: &mut Clip,
        req: &SpacingRequest,
        pose: &dyn PoseHost,
    ) -> Result<SpacingOutcome, EditError> {
        self.run(clip, req, PoseSource::Host(pose))
    }

    fn run(
        &self,
        clip: &mut Clip,
        req: &SpacingRequest,
        pose: PoseSource<'_>,
    ) -> Result<SpacingOutcome, EditError> {
        if !req.affect_left && !req.affect_right {
            return Ok(SpacingOutcome::NothingToDo);
        }
        let pair = self.pairs.lookup(&req.pair)?;
        let delta = req.angle_degrees * std::f32::consts::PI / 180.0;
        let axis = req.axis.axis();

        // Keyed span, not the pinned range: loop seam keys sit outside it.
        let range = match keyed_bounds(clip) {
            Ok(r) => r,
            Err(_) => {
                log::debug!("spacing: clip '{}' has no keys, nothing adjusted", clip.name);
                return Ok(SpacingOutcome::Applied {
                    keys_adjusted: 0,
                    left_keys: 0,
                    right_keys: 0,
                });
            }
        };
        log::debug!(
            "spacing: pair={} axis={} delta={delta} rad frames={}..={}",
            pair.id,
            axis,
            range.first,
            range.last
        );

        let mut left_keys = 0usize;
        let mut right_keys = 0usize;
        for frame in range.frames() {
            if req.affect_left && nudge(clip, &pair.left, axis, frame, delta, Side::Left, pose) {
                left_keys += 1;
            }
            if req.affect_right && nudge(clip, &pair.right, axis, frame, delta, Side::Right, pose) {
                right_keys += 1;
            }
        }

        Ok(SpacingOutcome::Applied {
            keys_adjusted: left_keys + right_keys,
            left_keys,
            right_keys,
        })
    }
}

/// Offset one bone's key at `frame`. Returns false when the frame was skipped.
fn nudge(
    clip: &mut Clip,
    bone: &str,
    axis: Axis,
    frame: i32,
    delta: f32,
    side: Side,
    pose: PoseSource<'_>,
) -> bool {
    if let PoseSource::Host(host) = pose {
        if !host.has_bone(bone) {
            log::trace!("spacing: bone '{bone}' not posed by host, skipping frame {frame}");
            return false;
        }
    }
    let Some(channel) = clip.resolve_mut(bone, axis) else {
        log::trace!("spacing: no {axis} channel for '{bone}'");
        return false;
    };
    let Some(keyed) = channel.keys.get(frame) else {
        return false;
    };
    let live = match pose {
        PoseSource::Keys => keyed,
        PoseSource::Host(host) => match host.rotation(bone, axis, frame) {
            Some(v) => v,
            None => {
                log::trace!("spacing: host has no rotation for '{bone}' at {frame}");
                return false;
            }
        },
    };
    let adjusted = match side {
        Side::Left => live + delta,
        Side::Right => live - delta,
    };
    channel.keys.insert(frame, adjusted);
    true
}
