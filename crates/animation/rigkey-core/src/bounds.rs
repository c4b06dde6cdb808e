//! Clip frame range: the pinned `Clip::frame_range`, or the span of keyed frames.

use serde::{Deserialize, Serialize};

use crate::data::Clip;
use crate::error::EditError;

/// Inclusive integer frame range `[first, last]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameRange {
    pub first: i32,
    pub last: i32,
}

impl FrameRange {
    pub fn new(first: i32, last: i32) -> Self {
        Self { first, last }
    }

    /// Number of integer frames covered (both endpoints included).
    pub fn frame_count(&self) -> u64 {
        (i64::from(self.last) - i64::from(self.first) + 1).max(0) as u64
    }

    pub fn contains(&self, frame: i32) -> bool {
        frame >= self.first && frame <= self.last
    }

    /// Every integer frame from `first` to `last`, inclusive.
    pub fn frames(&self) -> impl Iterator<Item = i32> {
        self.first..=self.last
    }
}

/// The clip's frame range: its authoritative `frame_range` when set, otherwise the
/// first and last keyed frame across every channel. A clip without keys is
/// `NO_ANIMATION_DATA` either way.
pub fn clip_bounds(clip: &Clip) -> Result<FrameRange, EditError> {
    let keyed = keyed_bounds(clip)?;
    Ok(clip.frame_range.unwrap_or(keyed))
}

/// First and last keyed frame across every channel of `clip`, ignoring `frame_range`.
pub fn keyed_bounds(clip: &Clip) -> Result<FrameRange, EditError> {
    let mut range: Option<FrameRange> = None;
    for ch in &clip.channels {
        let (Some(lo), Some(hi)) = (ch.keys.first_frame(), ch.keys.last_frame()) else {
            continue;
        };
        range = Some(match range {
            None => FrameRange::new(lo, hi),
            Some(r) => FrameRange::new(r.first.min(lo), r.last.max(hi)),
        });
    }
    range.ok_or_else(|| EditError::NoAnimationData {
        clip: clip.name.clone(),
    })
}
