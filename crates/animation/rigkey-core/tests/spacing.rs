use rigkey_core::{
    adjust_spacing, parse_clip_json, Axis, Channel, ChannelResolver, Clip, EditError, ErrorKind,
    PoseHost, SpacingAdjuster, SpacingAxis, SpacingOutcome, SpacingRequest, Timeline,
};

const LEFT: &str = "J_Bip_L_Shoulder";
const RIGHT: &str = "J_Bip_R_Shoulder";

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn keys(pairs: &[(i32, f32)]) -> Timeline {
    pairs.iter().copied().collect()
}

fn shoulder_clip(frames: &[i32]) -> Clip {
    let flat: Vec<(i32, f32)> = frames.iter().map(|f| (*f, 0.0)).collect();
    Clip::new("shoulders")
        .with_channel(Channel::with_keys(LEFT, Axis::Z, keys(&flat)))
        .with_channel(Channel::with_keys(RIGHT, Axis::Z, keys(&flat)))
}

fn req(angle: f32, left: bool, right: bool) -> SpacingRequest {
    SpacingRequest {
        pair: "SHOULDER".into(),
        axis: SpacingAxis::Sideways,
        angle_degrees: angle,
        affect_left: left,
        affect_right: right,
    }
}

fn channel<'a>(clip: &'a Clip, bone: &str, axis: Axis) -> &'a Timeline {
    &clip.resolve(bone, axis).expect("channel").keys
}

#[test]
fn shoulder_sideways_five_degrees() {
    let mut clip = shoulder_clip(&[1, 10, 20]);
    let outcome = adjust_spacing(&mut clip, &req(5.0, true, true)).unwrap();
    assert_eq!(
        outcome,
        SpacingOutcome::Applied {
            keys_adjusted: 6,
            left_keys: 3,
            right_keys: 3
        }
    );

    let left = channel(&clip, LEFT, Axis::Z);
    let right = channel(&clip, RIGHT, Axis::Z);
    assert_eq!(left.frames().collect::<Vec<_>>(), vec![1, 10, 20]);
    assert_eq!(right.frames().collect::<Vec<_>>(), vec![1, 10, 20]);
    for f in [1, 10, 20] {
        approx(left.get(f).unwrap(), 0.0873, 1e-4);
        approx(right.get(f).unwrap(), -0.0873, 1e-4);
    }
}

#[test]
fn shoulder_fixture_only_touches_chosen_axis_and_pair() {
    let json = rigkey_test_fixtures::clips::json("shoulder-spacing").expect("load fixture");
    let mut clip = parse_clip_json(&json).expect("parse fixture");
    let before = clip.clone();

    adjust_spacing(&mut clip, &req(5.0, true, true)).unwrap();

    // Y channel of the same bone and the upper-arm pair are untouched.
    assert_eq!(
        channel(&clip, LEFT, Axis::Y),
        channel(&before, LEFT, Axis::Y)
    );
    assert_eq!(
        channel(&clip, "J_Bip_L_UpperArm", Axis::Z),
        channel(&before, "J_Bip_L_UpperArm", Axis::Z)
    );
    approx(channel(&clip, LEFT, Axis::Z).get(20).unwrap(), 0.0873, 1e-4);
}

#[test]
fn negative_delta_restores_keys() {
    let json = rigkey_test_fixtures::clips::json("shoulder-spacing").expect("load fixture");
    let mut clip = parse_clip_json(&json).expect("parse fixture");
    let before = clip.clone();

    let mut upper = req(7.5, true, true);
    upper.pair = "UPPER_ARM".into();
    adjust_spacing(&mut clip, &upper).unwrap();
    assert_ne!(clip, before);

    upper.angle_degrees = -7.5;
    adjust_spacing(&mut clip, &upper).unwrap();
    for (after, orig) in clip.channels.iter().zip(before.channels.iter()) {
        assert_eq!(after.keys.len(), orig.keys.len());
        for (a, o) in after.keys.iter().zip(orig.keys.iter()) {
            assert_eq!(a.frame, o.frame);
            approx(a.value, o.value, 1e-6);
        }
    }
}

#[test]
fn never_creates_keys() {
    // Left keyed sparsely, right keyed on other frames; range spans 1..=30.
    let mut clip = Clip::new("sparse")
        .with_channel(Channel::with_keys(LEFT, Axis::Z, keys(&[(1, 0.1), (30, 0.2)])))
        .with_channel(Channel::with_keys(RIGHT, Axis::Z, keys(&[(7, -0.1)])))
        .with_channel(Channel::with_keys(LEFT, Axis::Y, keys(&[(15, 0.0)])));
    let before = clip.key_count();

    adjust_spacing(&mut clip, &req(3.0, true, true)).unwrap();

    assert_eq!(clip.key_count(), before);
    assert_eq!(channel(&clip, RIGHT, Axis::Z).frames().collect::<Vec<_>>(), vec![7]);
    // Forward/backward axis is absent on the right bone: still no new channel or key.
    let mut fb = req(3.0, true, true);
    fb.axis = SpacingAxis::ForwardBackward;
    adjust_spacing(&mut clip, &fb).unwrap();
    assert_eq!(clip.key_count(), before);
    assert!(clip.resolve(RIGHT, Axis::Y).is_none());
}

#[test]
fn last_frame_of_range_is_adjusted() {
    let mut clip = shoulder_clip(&[2, 9]);
    adjust_spacing(&mut clip, &req(1.0, true, false)).unwrap();
    approx(
        channel(&clip, LEFT, Axis::Z).get(9).unwrap(),
        1.0f32.to_radians(),
        1e-6,
    );
}

#[test]
fn left_only_leaves_right_unchanged() {
    let mut clip = shoulder_clip(&[1, 5, 9]);
    let right_before = channel(&clip, RIGHT, Axis::Z).clone();
    let out = adjust_spacing(&mut clip, &req(4.0, true, false)).unwrap();
    assert_eq!(
        out,
        SpacingOutcome::Applied {
            keys_adjusted: 3,
            left_keys: 3,
            right_keys: 0
        }
    );
    assert_eq!(channel(&clip, RIGHT, Axis::Z), &right_before);

    let left_before = channel(&clip, LEFT, Axis::Z).clone();
    adjust_spacing(&mut clip, &req(4.0, false, true)).unwrap();
    assert_eq!(channel(&clip, LEFT, Axis::Z), &left_before);
    approx(channel(&clip, RIGHT, Axis::Z).get(5).unwrap(), -4.0f32.to_radians(), 1e-6);
}

#[test]
fn repeated_calls_accumulate() {
    let mut clip = shoulder_clip(&[1, 2]);
    for _ in 0..3 {
        adjust_spacing(&mut clip, &req(2.0, true, true)).unwrap();
    }
    approx(channel(&clip, LEFT, Axis::Z).get(1).unwrap(), 6.0f32.to_radians(), 1e-5);
    approx(channel(&clip, RIGHT, Axis::Z).get(2).unwrap(), -6.0f32.to_radians(), 1e-5);
}

#[test]
fn zero_delta_is_identity() {
    let mut clip = shoulder_clip(&[1, 3]);
    let before = clip.clone();
    adjust_spacing(&mut clip, &req(0.0, true, true)).unwrap();
    assert_eq!(clip, before);
}

#[test]
fn neither_side_is_a_no_op_for_the_adjuster() {
    let mut clip = shoulder_clip(&[1]);
    let before = clip.clone();
    let adjuster = SpacingAdjuster::default();
    let out = adjuster.apply(&mut clip, &req(5.0, false, false)).unwrap();
    assert_eq!(out, SpacingOutcome::NothingToDo);
    assert_eq!(clip, before);

    let err = adjust_spacing(&mut clip, &req(5.0, false, false)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSelection);
}

#[test]
fn unknown_pair_is_rejected_before_mutation() {
    let mut clip = shoulder_clip(&[1]);
    let before = clip.clone();
    let mut bad = req(5.0, true, true);
    bad.pair = "ELBOW".into();
    let err = adjust_spacing(&mut clip, &bad).unwrap_err();
    assert_eq!(err, EditError::UnknownBonePair { id: "ELBOW".into() });
    assert_eq!(clip, before);
}

#[test]
fn clip_without_keys_adjusts_nothing() {
    let mut clip = Clip::new("empty");
    let out = adjust_spacing(&mut clip, &req(5.0, true, true)).unwrap();
    assert_eq!(
        out,
        SpacingOutcome::Applied {
            keys_adjusted: 0,
            left_keys: 0,
            right_keys: 0
        }
    );
}

/// Host whose evaluated pose differs from the keys and which only knows the left bone.
struct LeftOnlyRig;

impl PoseHost for LeftOnlyRig {
    fn has_bone(&self, bone: &str) -> bool {
        bone == LEFT
    }

    fn rotation(&self, _bone: &str, _axis: Axis, frame: i32) -> Option<f32> {
        Some(frame as f32 * 0.1)
    }
}

#[test]
fn live_pose_values_come_from_host() {
    let mut clip = shoulder_clip(&[1, 4]);
    let adjuster = SpacingAdjuster::default();
    let out = adjuster
        .apply_with_pose(&mut clip, &req(10.0, true, true), &LeftOnlyRig)
        .unwrap();
    assert_eq!(
        out,
        SpacingOutcome::Applied {
            keys_adjusted: 2,
            left_keys: 2,
            right_keys: 0
        }
    );
    let delta = 10.0f32.to_radians();
    approx(channel(&clip, LEFT, Axis::Z).get(1).unwrap(), 0.1 + delta, 1e-6);
    approx(channel(&clip, LEFT, Axis::Z).get(4).unwrap(), 0.4 + delta, 1e-6);
    // Right bone unknown to the host: skipped.
    assert_eq!(channel(&clip, RIGHT, Axis::Z).get(4), Some(0.0));
}

#[test]
fn keys_outside_pinned_range_are_still_spaced() {
    let mut clip = shoulder_clip(&[0, 10, 20]).with_frame_range(rigkey_core::FrameRange::new(1, 20));
    adjust_spacing(&mut clip, &req(5.0, true, false)).unwrap();
    approx(channel(&clip, LEFT, Axis::Z).get(0).unwrap(), 0.0873, 1e-4);
}
