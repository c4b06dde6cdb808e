use std::collections::BTreeSet;

use rigkey_core::{
    clip_bounds, parse_clip_json, Axis, ChannelResolver, Clip, Editor, ErrorKind, FrameRange,
};

fn fixture(name: &str) -> Clip {
    let json = rigkey_test_fixtures::clips::json(name).expect("load fixture");
    parse_clip_json(&json).expect("parse fixture")
}

#[test]
fn physics_bones_are_emptied_after_retarget() {
    let editor = Editor::default();
    let mut clip = fixture("hair-swing");
    let channels_before = clip.channels.len();
    let head_before = clip.resolve("J_Bip_C_Head", Axis::Y).unwrap().clone();

    let selected = editor.select_physics_bones(clip.bone_ids());
    let report = editor.clear_bones(&mut clip, &selected).unwrap();
    assert_eq!(report.channels_cleared, 3);
    assert_eq!(report.keys_removed, 3 * 48);

    assert_eq!(clip.channels.len(), channels_before);
    for bone in &selected {
        for axis in Axis::ALL {
            if let Some(ch) = clip.resolve(bone, axis) {
                assert!(ch.keys.is_empty(), "{bone} {axis} still keyed");
            }
        }
    }
    assert_eq!(clip.resolve("J_Bip_C_Head", Axis::Y).unwrap(), &head_before);
    assert_eq!(clip_bounds(&clip).unwrap(), FrameRange::new(1, 48));
}

#[test]
fn empty_selection_is_rejected_without_mutation() {
    let mut clip = fixture("mixed-rig");
    let before = clip.clone();
    let err = Editor::default()
        .clear_bones(&mut clip, &BTreeSet::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSelection);
    assert_eq!(clip, before);
}

#[test]
fn clip_without_keys_is_rejected() {
    let mut clip = Clip::new("bare");
    let err = Editor::default()
        .clear_bones(&mut clip, &BTreeSet::from(["J_Sec_Tail_01".to_string()]))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoAnimationData);
    assert_eq!(err.report().kind, ErrorKind::NoAnimationData);
}

#[test]
fn clearing_every_bone_leaves_no_animation() {
    let mut clip = fixture("shoulder-spacing");
    let all: BTreeSet<String> = clip.bone_ids().into_iter().collect();
    Editor::default().clear_bones(&mut clip, &all).unwrap();
    assert!(!clip.has_animation());
    assert_eq!(
        clip_bounds(&clip).unwrap_err().kind(),
        ErrorKind::NoAnimationData
    );
}
