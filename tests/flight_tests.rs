// Host-side tests for the scroll flight path.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod skyline {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod flight {
        include!("../src/core/flight.rs");
    }
}

use glam::Vec3;
use skyline::constants::*;
use skyline::flight::*;
use skyline::tween::*;

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

/// Stage double that records what the animator asked for.
#[derive(Default)]
struct RecordingStage {
    loaded: bool,
    snaps: Vec<Pose>,
    motions: Vec<Motion>,
}

impl ModelStage for RecordingStage {
    fn has_model(&self) -> bool {
        self.loaded
    }
    fn snap(&mut self, pose: Pose) {
        self.snaps.push(pose);
    }
    fn animate(&mut self, motion: Motion) {
        self.motions.push(motion);
    }
}

#[test]
fn top_of_page_is_centered_with_base_pitch() {
    let t = scroll_target(0.0);
    assert_eq!(t.position, Vec3::ZERO);
    assert!(approx(t.pitch, 0.02));
}

#[test]
fn bottom_of_page_returns_to_center() {
    let t = scroll_target(1.0);
    assert_eq!(t.position.x, 0.0);
    assert!(approx(t.position.y, -0.5));
    assert!(approx(t.position.z, -2.0));
    assert!(approx(t.pitch, 0.17));
}

#[test]
fn lateral_offset_hits_every_waypoint() {
    for (i, expected) in LATERAL_WAYPOINTS.iter().enumerate() {
        let p = (i as f32 * SEGMENT_WIDTH).min(1.0);
        let x = lateral_offset(p);
        assert!(
            (x - expected).abs() < 1e-3,
            "waypoint {i}: expected {expected}, got {x}"
        );
    }
}

#[test]
fn first_boundary_reaches_full_left() {
    assert!((lateral_offset(1.0 / 6.0) + 2.0).abs() < 1e-3);
}

#[test]
fn boundary_belongs_to_entering_segment() {
    for i in 1..SEGMENT_COUNT {
        let boundary = i as f32 * SEGMENT_WIDTH;
        assert_eq!(segment_index(boundary), i);
        assert_eq!(segment_index(boundary - 1e-4), i - 1);
    }
    assert_eq!(segment_index(0.0), 0);
    assert_eq!(segment_index(1.0), SEGMENT_COUNT - 1);
}

#[test]
fn lateral_offset_is_continuous_across_boundaries() {
    for i in 1..SEGMENT_COUNT {
        let boundary = i as f32 * SEGMENT_WIDTH;
        let before = lateral_offset(boundary - 1e-5);
        let at = lateral_offset(boundary);
        assert!((before - at).abs() < 1e-2, "jump at boundary {i}: {before} vs {at}");
    }
}

#[test]
fn lateral_offset_ramps_linearly_inside_a_segment() {
    // Segment 2 runs -2 -> +2, so its midpoint is 0 and its quarter is -1.
    let start = SEGMENT_WIDTH;
    assert!(approx(lateral_offset(start + SEGMENT_WIDTH * 0.5), 0.0));
    assert!(approx(lateral_offset(start + SEGMENT_WIDTH * 0.25), -1.0));
    // Last segment runs -2 -> 0.
    let last = 5.0 * SEGMENT_WIDTH;
    assert!(approx(lateral_offset(last + SEGMENT_WIDTH * 0.5), -1.0));
}

#[test]
fn descent_recession_and_pitch_are_monotonic() {
    let mut prev = scroll_target(0.0);
    for step in 1..=1000 {
        let t = scroll_target(step as f32 / 1000.0);
        assert!(t.position.y <= prev.position.y);
        assert!(t.position.z <= prev.position.z);
        assert!(t.pitch >= prev.pitch);
        prev = t;
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(scroll_target(2.5), scroll_target(1.0));
    assert_eq!(scroll_target(-0.3), scroll_target(0.0));
    assert_eq!(scroll_target(f32::NAN), scroll_target(0.0));
}

#[test]
fn scroll_progress_normalizes_and_clamps() {
    assert!(approx(scroll_progress(250.0, 1200.0, 200.0), 0.25));
    assert_eq!(scroll_progress(5000.0, 1200.0, 200.0), 1.0);
    assert_eq!(scroll_progress(-40.0, 1200.0, 200.0), 0.0);
}

#[test]
fn scroll_progress_without_scrollable_height_is_zero() {
    assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(120.0, 800.0, 800.0), 0.0);
    assert_eq!(scroll_progress(120.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 1200.0, 200.0), 0.0);
}

#[test]
fn scroll_before_model_loads_is_ignored() {
    let mut animator = ScrollPathAnimator::new(RecordingStage::default());
    animator.on_scroll(0.5);
    animator.on_model_ready();
    assert!(animator.stage().motions.is_empty());
    assert!(animator.stage().snaps.is_empty());
    assert!(!animator.has_entered());
}

#[test]
fn scroll_issues_short_ease_out_motion_to_target() {
    let mut animator = ScrollPathAnimator::new(RecordingStage {
        loaded: true,
        ..Default::default()
    });
    animator.on_scroll(0.5);
    let motion = animator.stage().motions.last().expect("motion issued");
    let target = scroll_target(0.5);
    assert_eq!(motion.ease, Ease::Power1Out);
    assert!(approx(motion.duration_sec, SCROLL_TWEEN_SEC));
    assert_eq!(motion.delay_sec, 0.0);
    assert_eq!(motion.targets().len(), 4);
    assert_eq!(motion.target(Channel::PosX), Some(target.position.x));
    assert_eq!(motion.target(Channel::PosY), Some(target.position.y));
    assert_eq!(motion.target(Channel::PosZ), Some(target.position.z));
    assert_eq!(motion.target(Channel::RotX), Some(target.pitch));
    assert_eq!(motion.target(Channel::RotY), None);
}

#[test]
fn entrance_plays_once_from_off_screen() {
    let mut animator = ScrollPathAnimator::new(RecordingStage {
        loaded: true,
        ..Default::default()
    });
    animator.on_model_ready();
    animator.on_model_ready();

    let stage = animator.stage();
    assert!(animator.has_entered());
    assert_eq!(stage.snaps, vec![entrance_start_pose()]);
    assert_eq!(stage.motions.len(), 1);
    let entrance = &stage.motions[0];
    assert_eq!(entrance.ease, Ease::Power2Out);
    assert!(approx(entrance.duration_sec, ENTRANCE_TWEEN_SEC));
    assert!(approx(entrance.delay_sec, ENTRANCE_DELAY_SEC));
    assert_eq!(entrance.target(Channel::PosX), Some(0.0));
    assert_eq!(entrance.target(Channel::PosY), None);
    assert_eq!(entrance.target(Channel::RotY), Some(0.0));
    assert_eq!(entrance.target(Channel::RotZ), Some(-0.02));
}

#[test]
fn entrance_glides_tweened_pose_to_rest() {
    let mut model = TweenedPose::new();
    model.set_model_loaded();
    let mut animator = ScrollPathAnimator::new(model);
    animator.on_model_ready();

    let start = animator.stage_mut().advance(0.0);
    assert_eq!(start.position, ENTRANCE_START_POSITION);

    for _ in 0..240 {
        animator.stage_mut().advance(1.0 / 60.0);
    }
    let pose = animator.stage().pose();
    assert!(approx(pose.position.x, 0.0));
    assert!(approx(pose.position.y, ENTRANCE_START_POSITION.y));
    assert!(approx(pose.rotation.x, 0.02));
    assert!(approx(pose.rotation.y, 0.0));
    assert!(approx(pose.rotation.z, -0.02));
    assert!(animator.stage().is_settled());
}

#[test]
fn rapid_scrolls_supersede_earlier_targets() {
    let mut model = TweenedPose::new();
    model.set_model_loaded();
    let mut animator = ScrollPathAnimator::new(model);
    animator.on_scroll(0.2);
    animator.stage_mut().advance(0.1);
    animator.on_scroll(0.9);

    let latest = scroll_target(0.9);
    assert_eq!(
        animator.stage().active_target(Channel::PosZ),
        Some(latest.position.z)
    );
    for _ in 0..60 {
        animator.stage_mut().advance(1.0 / 60.0);
    }
    let pose = animator.stage().pose();
    assert!(approx(pose.position.z, latest.position.z));
    assert!(approx(pose.rotation.x, latest.pitch));
}

#[test]
fn path_endpoints_are_exactly_centered() {
    assert_eq!(lateral_offset(0.0), 0.0);
    assert_eq!(lateral_offset(1.0), 0.0);
    assert_eq!(lateral_offset(f32::MAX), 0.0);
}
