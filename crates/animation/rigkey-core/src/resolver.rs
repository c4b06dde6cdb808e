//! Channel lookup by (bone, axis).
//!
//! Hosts that keep animation in their own storage implement [`ChannelResolver`];
//! the editing passes only ever go through it. A miss is `None`, never an error.

use crate::data::{Axis, Channel, Clip};

pub trait ChannelResolver {
    fn resolve(&self, bone: &str, axis: Axis) -> Option<&Channel>;
    fn resolve_mut(&mut self, bone: &str, axis: Axis) -> Option<&mut Channel>;
}

impl ChannelResolver for Clip {
    fn resolve(&self, bone: &str, axis: Axis) -> Option<&Channel> {
        self.channels
            .iter()
            .find(|c| c.axis == axis && c.bone == bone)
    }

    fn resolve_mut(&mut self, bone: &str, axis: Axis) -> Option<&mut Channel> {
        self.channels
            .iter_mut()
            .find(|c| c.axis == axis && c.bone == bone)
    }
}

/// Look up a channel, creating an empty one at the end of the clip when missing.
/// Only the bake pass creates channels.
pub(crate) fn resolve_or_insert<'a>(clip: &'a mut Clip, bone: &str, axis: Axis) -> &'a mut Channel {
    let idx = match clip
        .channels
        .iter()
        .position(|c| c.axis == axis && c.bone == bone)
    {
        Some(i) => i,
        None => {
            clip.channels.push(Channel::new(bone, axis));
            clip.channels.len() - 1
        }
    };
    &mut clip.channels[idx]
}
