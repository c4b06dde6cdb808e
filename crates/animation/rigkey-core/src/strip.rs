//! Stripping baked or retargeted motion from a set of bones.
//!
//! Retargeted clips often carry keys on physics bones that the host should
//! simulate instead. Stripping empties every channel of the selected bones.
//! Channels stay in the clip; only their keys go.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::data::Clip;
use crate::error::EditError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripReport {
    pub channels_cleared: usize,
    pub keys_removed: usize,
}

/// Remove every key on every channel whose bone is in `selected`.
///
/// Fails with `NO_ANIMATION_DATA` when the clip has no keys and `NO_SELECTION`
/// when `selected` is empty; the clip is untouched in both cases.
pub fn clear_bones(clip: &mut Clip, selected: &BTreeSet<String>) -> Result<StripReport, EditError> {
    if !clip.has_animation() {
        return Err(EditError::NoAnimationData {
            clip: clip.name.clone(),
        });
    }
    if selected.is_empty() {
        return Err(EditError::no_selection("no bones selected"));
    }

    let mut report = StripReport::default();
    for channel in clip
        .channels
        .iter_mut()
        .filter(|c| selected.contains(&c.bone))
    {
        let removed = channel.keys.clear();
        log::trace!("strip: '{}' {} lost {removed} keys", channel.bone, channel.axis);
        report.channels_cleared += 1;
        report.keys_removed += removed;
    }
    Ok(report)
}
