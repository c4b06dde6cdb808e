//! Loop splicing for baked physics channels.
//!
//! A physics bake does not loop: the simulation starts from rest and settles over
//! time. Splicing picks one boundary as the seam (the anchor), empties an easing
//! window of `easing_width` frames at the opposite boundary, and keys the anchor's
//! value just past that boundary so playback wraps onto a matching value.
//!
//! | anchor       | copy frame | delete window              | paste frame |
//! |--------------|------------|----------------------------|-------------|
//! | `LAST_FRAME` | `last`     | `[first, first + E - 1]`   | `0`         |
//! | `FIRST_FRAME`| `first`    | `[last - E + 1, last]`     | `last + 1`  |
//!
//! The delete window is always empty on exit, even when the paste frame falls inside it.
//! The first splice pins `Clip::frame_range`, so the seam key at frame 0 or
//! `last + 1` never widens the range seen by later splices on the same clip.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::bounds::{clip_bounds, FrameRange};
use crate::data::{Clip, Timeline};
use crate::error::EditError;

/// Boundary whose keyed value seeds the loop seam.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoopAnchor {
    FirstFrame,
    /// The most settled end of a simulation.
    #[default]
    LastFrame,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopRequest {
    #[serde(default)]
    pub anchor: LoopAnchor,
    pub easing_width: u32,
    pub selected: BTreeSet<String>,
}

impl LoopRequest {
    pub fn new<I, S>(anchor: LoopAnchor, easing_width: u32, selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchor,
            easing_width,
            selected: selected.into_iter().map(Into::into).collect(),
        }
    }
}

/// Frames involved in one splice.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SplicePlan {
    pub copy_frame: i32,
    /// Inclusive bounds; `None` when the easing width is zero.
    pub delete: Option<FrameRange>,
    pub paste_frame: i32,
}

impl SplicePlan {
    /// Frames for `bounds`. An easing width wider than the clip is not rejected;
    /// the window simply extends past the opposite boundary.
    pub fn compute(bounds: FrameRange, anchor: LoopAnchor, easing_width: u32) -> Self {
        let width = i64::from(easing_width);
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let delete = (width > 0).then(|| match anchor {
            LoopAnchor::LastFrame => {
                let start = i64::from(bounds.first);
                FrameRange::new(bounds.first, clamp(start + width - 1))
            }
            LoopAnchor::FirstFrame => {
                let end = i64::from(bounds.last);
                FrameRange::new(clamp(end - width + 1), bounds.last)
            }
        });
        match anchor {
            LoopAnchor::LastFrame => Self {
                copy_frame: bounds.last,
                delete,
                paste_frame: 0,
            },
            LoopAnchor::FirstFrame => Self {
                copy_frame: bounds.first,
                delete,
                paste_frame: clamp(i64::from(bounds.last) + 1),
            },
        }
    }

    pub fn in_delete_window(&self, frame: i32) -> bool {
        self.delete.is_some_and(|r| r.contains(frame))
    }

    fn delete_range(&self) -> Option<RangeInclusive<i32>> {
        self.delete.map(|r| r.first..=r.last)
    }

    /// Apply to one timeline. Returns (keys removed, pasted).
    pub fn apply_to(&self, keys: &mut Timeline) -> (usize, bool) {
        let captured = keys.get(self.copy_frame);
        let removed = self
            .delete_range()
            .map(|r| keys.remove_range(r))
            .unwrap_or(0);
        match captured {
            Some(v) if !self.in_delete_window(self.paste_frame) => {
                keys.insert(self.paste_frame, v);
                (removed, true)
            }
            _ => (removed, false),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopReport {
    pub plan: SplicePlan,
    pub channels_touched: usize,
    pub keys_removed: usize,
    pub keys_pasted: usize,
}

#[derive(Clone, Debug, Default)]
pub struct LoopSplicer;

impl LoopSplicer {
    pub fn new() -> Self {
        Self
    }

    /// Splice every channel whose bone is in `req.selected`.
    pub fn apply(&self, clip: &mut Clip, req: &LoopRequest) -> Result<LoopReport, EditError> {
        let bounds = clip_bounds(clip)?;
        if req.selected.is_empty() {
            return Err(EditError::no_selection("no bones selected"));
        }
        // Pin the range so seam keys pasted outside it never move later splices.
        clip.frame_range.get_or_insert(bounds);
        let plan = SplicePlan::compute(bounds, req.anchor, req.easing_width);
        if u64::from(req.easing_width) >= bounds.frame_count() {
            log::warn!(
                "loop splice: easing width {} covers the whole clip range {}..={}",
                req.easing_width,
                bounds.first,
                bounds.last
            );
        }
        log::debug!(
            "loop splice: clip='{}' range={}..={} anchor={:?} copy={} delete={:?} paste={}",
            clip.name,
            bounds.first,
            bounds.last,
            req.anchor,
            plan.copy_frame,
            plan.delete,
            plan.paste_frame
        );

        let mut report = LoopReport {
            plan,
            channels_touched: 0,
            keys_removed: 0,
            keys_pasted: 0,
        };
        for channel in clip
            .channels
            .iter_mut()
            .filter(|c| req.selected.contains(&c.bone))
        {
            let (removed, pasted) = plan.apply_to(&mut channel.keys);
            if !pasted {
                log::trace!(
                    "loop splice: '{}' {} has no key at {}",
                    channel.bone,
                    channel.axis,
                    plan.copy_frame
                );
            }
            report.channels_touched += 1;
            report.keys_removed += removed;
            report.keys_pasted += usize::from(pasted);
        }
        Ok(report)
    }
}
