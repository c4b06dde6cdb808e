//! rigkey core (host-agnostic)
//!
//! Keyed rotation editing for symmetric skeletal rigs. The crate works on explicit
//! [`Clip`] values owned by the host and provides two edits:
//! - pair spacing: mirrored angular offsets on an existing left/right bone pair
//! - loop splicing: turn a baked physics clip into a seamless loop
//!
//! Supporting pieces: channel resolution, clip bounds, physics-bone selection,
//! stripping keys from selected bones, clip JSON loading and a bake driver over a
//! host-provided motion sampler.

pub mod baking;
pub mod bounds;
pub mod clip_json;
pub mod config;
pub mod data;
pub mod editor;
pub mod error;
pub mod host;
pub mod pairs;
pub mod resolver;
pub mod selection;
pub mod spacing;
pub mod splice;
pub mod strip;

// Re-exports for consumers (hosts/adapters)
pub use baking::{bake_clip, BakeReport, BakingConfig, MotionSampler};
pub use bounds::{clip_bounds, keyed_bounds, FrameRange};
pub use clip_json::{parse_clip_json, to_clip_json, ClipJsonError};
pub use config::Config;
pub use data::{Axis, Channel, Clip, Key, Timeline};
pub use editor::{adjust_spacing, loopify_physics, Editor};
pub use error::{EditError, ErrorKind, ErrorReport};
pub use host::{toggle_spring_physics, PoseHost, SpringPhysics};
pub use pairs::{BonePair, BonePairTable};
pub use resolver::ChannelResolver;
pub use selection::{select_bones, select_physics_bones, DEFAULT_PHYSICS_PATTERNS};
pub use spacing::{SpacingAdjuster, SpacingAxis, SpacingOutcome, SpacingRequest};
pub use splice::{LoopAnchor, LoopReport, LoopRequest, LoopSplicer, SplicePlan};
pub use strip::{clear_bones, StripReport};
