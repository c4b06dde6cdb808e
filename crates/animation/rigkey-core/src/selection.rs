//! Physics bone classification by name fragment.

use std::collections::BTreeSet;

/// Name fragments of bones driven by spring/secondary motion on VRM rigs.
pub const DEFAULT_PHYSICS_PATTERNS: [&str; 6] = ["Hair", "Bust", "Skirt", "Sleeve", "Ear", "Tail"];

/// Ids that contain any of `patterns` (case-sensitive substring match).
pub fn select_bones<I, S, P>(all_bone_ids: I, patterns: &[P]) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: AsRef<str>,
{
    all_bone_ids
        .into_iter()
        .filter(|id| {
            let id = id.as_ref();
            patterns.iter().any(|p| id.contains(p.as_ref()))
        })
        .map(|id| id.as_ref().to_string())
        .collect()
}

/// [`select_bones`] with [`DEFAULT_PHYSICS_PATTERNS`].
pub fn select_physics_bones<I, S>(all_bone_ids: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    select_bones(all_bone_ids, &DEFAULT_PHYSICS_PATTERNS)
}
