//! Canonical keyed-rotation data model.
//!
//! A [`Clip`] owns an ordered list of [`Channel`]s, one per (bone, axis). Each
//! channel stores a sparse [`Timeline`] of keys at integer frames. Only keyed
//! values are modelled; interpolation between keys belongs to the host.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::bounds::FrameRange;

/// Euler rotation axis of a channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index inside an euler triple.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(s)
    }
}

/// A single key: rotation value (radians) at an integer frame.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Key {
    pub frame: i32,
    pub value: f32,
}

/// Sparse frame -> value mapping. One key per frame; iteration is in frame order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Key>", into = "Vec<Key>")]
pub struct Timeline {
    keys: BTreeMap<i32, f32>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Value keyed at exactly `frame`, if any.
    #[inline]
    pub fn get(&self, frame: i32) -> Option<f32> {
        self.keys.get(&frame).copied()
    }

    #[inline]
    pub fn has_key(&self, frame: i32) -> bool {
        self.keys.contains_key(&frame)
    }

    /// Insert or overwrite the key at `frame`. Returns the previous value.
    pub fn insert(&mut self, frame: i32, value: f32) -> Option<f32> {
        self.keys.insert(frame, value)
    }

    /// Drop every key. Returns the count removed.
    pub fn clear(&mut self) -> usize {
        let n = self.keys.len();
        self.keys.clear();
        n
    }

    /// Remove every key whose frame lies in `range` (inclusive). Returns the count removed.
    pub fn remove_range(&mut self, range: RangeInclusive<i32>) -> usize {
        if range.is_empty() {
            return 0;
        }
        let doomed: Vec<i32> = self.keys.range(range).map(|(f, _)| *f).collect();
        for f in &doomed {
            self.keys.remove(f);
        }
        doomed.len()
    }

    pub fn first_frame(&self) -> Option<i32> {
        self.keys.keys().next().copied()
    }

    pub fn last_frame(&self) -> Option<i32> {
        self.keys.keys().next_back().copied()
    }

    pub fn frames(&self) -> impl Iterator<Item = i32> + '_ {
        self.keys.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.keys.iter().map(|(frame, value)| Key {
            frame: *frame,
            value: *value,
        })
    }
}

impl From<Vec<Key>> for Timeline {
    /// Later keys at a repeated frame win. Strict validation lives in `clip_json`.
    fn from(keys: Vec<Key>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<Timeline> for Vec<Key> {
    fn from(t: Timeline) -> Self {
        t.iter().collect()
    }
}

impl FromIterator<Key> for Timeline {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(|k| (k.frame, k.value)).collect(),
        }
    }
}

impl FromIterator<(i32, f32)> for Timeline {
    fn from_iter<I: IntoIterator<Item = (i32, f32)>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// A rotation channel of one bone on one axis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    pub bone: String,
    pub axis: Axis,
    #[serde(default)]
    pub keys: Timeline,
}

impl Channel {
    pub fn new(bone: impl Into<String>, axis: Axis) -> Self {
        Self {
            bone: bone.into(),
            axis,
            keys: Timeline::new(),
        }
    }

    pub fn with_keys(bone: impl Into<String>, axis: Axis, keys: Timeline) -> Self {
        Self {
            bone: bone.into(),
            axis,
            keys,
        }
    }
}

/// One animation action: the host-owned set of channels.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Clip {
    pub name: String,
    /// Authoritative playback range. When unset, bounds are derived from keys;
    /// the first loop splice pins it so later seam keys never shift it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_range: Option<FrameRange>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Clip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frame_range: None,
            channels: Vec::new(),
        }
    }

    pub fn with_frame_range(mut self, range: FrameRange) -> Self {
        self.frame_range = Some(range);
        self
    }

    /// Builder-style channel append (tests and bake glue).
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Distinct bone identifiers in first-seen order.
    pub fn bone_ids(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for ch in &self.channels {
            if !out.iter().any(|b| b == &ch.bone) {
                out.push(ch.bone.clone());
            }
        }
        out
    }

    /// True when the clip has at least one key in any channel.
    pub fn has_animation(&self) -> bool {
        self.channels.iter().any(|c| !c.keys.is_empty())
    }

    /// Total number of keys across all channels.
    pub fn key_count(&self) -> usize {
        self.channels.iter().map(|c| c.keys.len()).sum()
    }

    /// Validate basic invariants (ordered frame range, finite values, one channel per (bone, axis)).
    pub fn validate_basic(&self) -> Result<(), String> {
        if let Some(r) = self.frame_range {
            if r.first > r.last {
                return Err(format!("frame range [{}, {}] is inverted", r.first, r.last));
            }
        }
        for (i, ch) in self.channels.iter().enumerate() {
            if ch.bone.is_empty() {
                return Err(format!("channel {i} has an empty bone identifier"));
            }
            if let Some(k) = ch.keys.iter().find(|k| !k.value.is_finite()) {
                return Err(format!(
                    "non-finite value at frame {} for '{}' {}",
                    k.frame, ch.bone, ch.axis
                ));
            }
            if self.channels[..i]
                .iter()
                .any(|o| o.bone == ch.bone && o.axis == ch.axis)
            {
                return Err(format!(
                    "duplicate channel for '{}' axis {}",
                    ch.bone, ch.axis
                ));
            }
        }
        Ok(())
    }
}
