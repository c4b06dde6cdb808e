//! Clip JSON loader.
//!
//! Notes:
//! - The on-disk shape is `{ name, frame_range?, channels: [{ bone, axis, keys: [{ frame, value }] }] }`.
//! - Frames are read as `f64` first so a fractional frame is reported, not truncated.
//! - `to_clip_json` writes the same shape, so export then parse yields an equal clip.

use serde::Deserialize;
use thiserror::Error;

use crate::bounds::FrameRange;
use crate::data::{Axis, Channel, Clip, Timeline};

/// Errors produced while loading clip JSON.
#[derive(Debug, Error)]
pub enum ClipJsonError {
    #[error("clip json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("non-integer frame {frame} in '{bone}' {axis}")]
    FractionalFrame { bone: String, axis: Axis, frame: f64 },
    #[error("frame {frame} keyed twice in '{bone}' {axis}")]
    DuplicateKey { bone: String, axis: Axis, frame: i32 },
    #[error("invalid clip: {0}")]
    Invalid(String),
}

/// Public API: parse clip JSON into the canonical [`Clip`] (data.rs).
///
/// Notes:
/// - Frames arrive as JSON numbers and must be integral (`12` and `12.0` both load).
/// - A frame may appear only once per channel; a (bone, axis) only once per clip.
/// - Values are radians and must be finite.
pub fn parse_clip_json(s: &str) -> Result<Clip, ClipJsonError> {
    let raw: RawClip = serde_json::from_str(s)?;

    let mut channels: Vec<Channel> = Vec::with_capacity(raw.channels.len());
    for rc in raw.channels {
        let mut keys = Timeline::new();
        for k in rc.keys {
            let frame = to_frame(k.frame).ok_or_else(|| ClipJsonError::FractionalFrame {
                bone: rc.bone.clone(),
                axis: rc.axis,
                frame: k.frame,
            })?;
            if keys.insert(frame, k.value as f32).is_some() {
                return Err(ClipJsonError::DuplicateKey {
                    bone: rc.bone,
                    axis: rc.axis,
                    frame,
                });
            }
        }
        channels.push(Channel::with_keys(rc.bone, rc.axis, keys));
    }

    let clip = Clip {
        name: raw.name,
        frame_range: raw.frame_range,
        channels,
    };
    clip.validate_basic().map_err(ClipJsonError::Invalid)?;
    Ok(clip)
}

/// Serialize a clip to the same schema [`parse_clip_json`] accepts.
pub fn to_clip_json(clip: &Clip) -> serde_json::Value {
    serde_json::to_value(clip).unwrap_or(serde_json::Value::Null)
}

fn to_frame(f: f64) -> Option<i32> {
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    if f < f64::from(i32::MIN) || f > f64::from(i32::MAX) {
        return None;
    }
    Some(f as i32)
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct RawClip {
    pub name: String,
    #[serde(default)]
    pub frame_range: Option<FrameRange>,
    #[serde(default)]
    pub channels: Vec<RawChannel>,
}

#[derive(Debug, Deserialize)]
struct RawChannel {
    pub bone: String,
    pub axis: Axis,
    #[serde(default)]
    pub keys: Vec<RawKey>,
}

#[derive(Debug, Deserialize)]
struct RawKey {
    pub frame: f64,
    pub value: f64,
}
