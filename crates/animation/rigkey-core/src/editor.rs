//! Editor: host-facing entry points over the editing passes.
//!
//! Methods:
//! - adjust_spacing, loopify_physics, select_physics_bones, clip_bounds, clear_bones, bake_physics
//!
//! Each call takes the clip explicitly and runs to completion. The editor owns only
//! configuration, never animation data.

use std::collections::BTreeSet;

use crate::baking::{bake_clip, BakeReport, BakingConfig, MotionSampler};
use crate::bounds::FrameRange;
use crate::config::Config;
use crate::data::Clip;
use crate::error::EditError;
use crate::host::PoseHost;
use crate::selection::select_bones;
use crate::spacing::{SpacingAdjuster, SpacingOutcome, SpacingRequest};
use crate::splice::{LoopReport, LoopRequest, LoopSplicer};
use crate::strip::StripReport;

#[derive(Clone, Debug)]
pub struct Editor {
    cfg: Config,
    spacing: SpacingAdjuster,
    splicer: LoopSplicer,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Editor {
    pub fn new(cfg: Config) -> Self {
        let spacing = SpacingAdjuster::new(cfg.pair_table());
        Self {
            cfg,
            spacing,
            splicer: LoopSplicer::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Spacing request for `pair` filled from the configured defaults.
    pub fn spacing_request(&self, pair: &str) -> SpacingRequest {
        let d = &self.cfg.spacing;
        SpacingRequest {
            pair: pair.to_string(),
            axis: d.axis,
            angle_degrees: d.angle_degrees,
            affect_left: d.affect_left,
            affect_right: d.affect_right,
        }
    }

    /// Loop request over `selected` filled from the configured defaults.
    pub fn loop_request(&self, selected: BTreeSet<String>) -> LoopRequest {
        LoopRequest {
            anchor: self.cfg.looping.anchor,
            easing_width: self.cfg.looping.easing_width,
            selected,
        }
    }

    /// Spread or narrow a bone pair. Selecting neither side is a `NO_SELECTION` error here.
    pub fn adjust_spacing(
        &self,
        clip: &mut Clip,
        req: &SpacingRequest,
    ) -> Result<SpacingOutcome, EditError> {
        finish_spacing(self.spacing.apply(clip, req)?)
    }

    pub fn adjust_spacing_with_pose(
        &self,
        clip: &mut Clip,
        req: &SpacingRequest,
        pose: &dyn PoseHost,
    ) -> Result<SpacingOutcome, EditError> {
        finish_spacing(self.spacing.apply_with_pose(clip, req, pose)?)
    }

    pub fn loopify_physics(
        &self,
        clip: &mut Clip,
        req: &LoopRequest,
    ) -> Result<LoopReport, EditError> {
        let report = self.splicer.apply(clip, req)?;
        log::debug!(
            "loopify: {} channels, {} keys removed, {} pasted at frame {}",
            report.channels_touched,
            report.keys_removed,
            report.keys_pasted,
            report.plan.paste_frame
        );
        Ok(report)
    }

    /// Bones whose ids contain one of the configured physics patterns.
    pub fn select_physics_bones<I, S>(&self, all_bone_ids: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        select_bones(all_bone_ids, self.cfg.physics_patterns.as_slice())
    }

    pub fn clip_bounds(&self, clip: &Clip) -> Result<FrameRange, EditError> {
        crate::bounds::clip_bounds(clip)
    }

    /// Empty every channel of the selected bones (e.g. physics bones after retargeting).
    pub fn clear_bones(
        &self,
        clip: &mut Clip,
        selected: &BTreeSet<String>,
    ) -> Result<StripReport, EditError> {
        let report = crate::strip::clear_bones(clip, selected)?;
        log::debug!(
            "clear bones: clip='{}' {} channels, {} keys removed",
            clip.name,
            report.channels_cleared,
            report.keys_removed
        );
        Ok(report)
    }

    /// Bake simulated motion from the configured start frame up to `frame_end`
    /// (or the clip's last keyed frame).
    pub fn bake_physics(
        &self,
        clip: &mut Clip,
        sampler: &mut dyn MotionSampler,
        frame_end: Option<i32>,
    ) -> Result<BakeReport, EditError> {
        let cfg = BakingConfig {
            frame_start: self.cfg.bake_frame_start,
            frame_end,
            bones: None,
        };
        let report = bake_clip(clip, sampler, &cfg)?;
        log::info!(
            "baked {} bones over frames {}..={} ({} keys)",
            report.bones_baked,
            report.range.first,
            report.range.last,
            report.keys_written
        );
        Ok(report)
    }
}

fn finish_spacing(outcome: SpacingOutcome) -> Result<SpacingOutcome, EditError> {
    match outcome {
        SpacingOutcome::NothingToDo => Err(EditError::no_selection(
            "select at least one side (left or right) to adjust",
        )),
        applied => Ok(applied),
    }
}

/// [`Editor::adjust_spacing`] with the default configuration.
pub fn adjust_spacing(clip: &mut Clip, req: &SpacingRequest) -> Result<SpacingOutcome, EditError> {
    Editor::default().adjust_spacing(clip, req)
}

/// [`Editor::loopify_physics`] with the default configuration.
pub fn loopify_physics(clip: &mut Clip, req: &LoopRequest) -> Result<LoopReport, EditError> {
    Editor::default().loopify_physics(clip, req)
}
