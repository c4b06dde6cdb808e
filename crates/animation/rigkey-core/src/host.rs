//! Collaborator traits implemented by the host application.
//!
//! The core never reaches into scene state on its own. Anything it needs from the
//! rig (live pose values, the spring-bone toggle) comes through these traits.

use crate::data::Axis;
use crate::error::EditError;

/// Live pose queries. `frame` is passed explicitly; hosts with a playhead cursor
/// move it themselves before answering.
pub trait PoseHost {
    fn has_bone(&self, bone: &str) -> bool;

    /// Evaluated rotation (radians) of `bone` on `axis` at `frame`, or `None` when
    /// the host cannot pose that bone.
    fn rotation(&self, bone: &str, axis: Axis, frame: i32) -> Option<f32>;
}

/// Secondary-motion (spring bone) feature flag on the rig.
pub trait SpringPhysics {
    /// Current state, or `None` when the rig has no spring bone system.
    fn spring_enabled(&self) -> Option<bool>;
    fn set_spring_enabled(&mut self, enabled: bool);
}

/// Flip the spring bone flag and return the new state.
pub fn toggle_spring_physics(host: &mut dyn SpringPhysics) -> Result<bool, EditError> {
    let current = host
        .spring_enabled()
        .ok_or(EditError::SpringUnavailable)?;
    let enabled = !current;
    host.set_spring_enabled(enabled);
    log::info!(
        "spring bone physics {}",
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(enabled)
}
