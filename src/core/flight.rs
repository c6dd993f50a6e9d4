use super::constants::*;
use super::tween::{Channel, Ease, Motion, Pose};
use glam::Vec3;

/// Renderer-side handle to the (possibly still loading) model.
///
/// The stage owns interpolation; the animator only decides where the model
/// should end up.
pub trait ModelStage {
    /// False until a model has finished loading.
    fn has_model(&self) -> bool;
    /// Place the model immediately, dropping any running tweens.
    fn snap(&mut self, pose: Pose);
    /// Start tweening the channels named in `motion`.
    fn animate(&mut self, motion: Motion);
}

/// Where the scroll position wants the model to be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTarget {
    pub position: Vec3,
    /// Nose pitch (rotation about x) in radians.
    pub pitch: f32,
}

/// Normalized scroll progress in \[0, 1\].
///
/// A page without scrollable height reports 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f32 {
    let scrollable = scroll_height - client_height;
    if scrollable.is_nan() || scrollable <= 0.0 || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0) as f32
}

/// Index of the segment `progress` falls in.
///
/// A value exactly on a boundary belongs to the segment it enters.
#[inline]
pub fn segment_index(progress: f32) -> usize {
    (0..SEGMENT_COUNT)
        .find(|&i| progress < (i + 1) as f32 * SEGMENT_WIDTH)
        .unwrap_or(SEGMENT_COUNT - 1)
}

/// Horizontal zig-zag offset for `progress`.
pub fn lateral_offset(progress: f32) -> f32 {
    let p = sanitize(progress);
    let i = segment_index(p);
    // Scale before subtracting so p = 1 lands exactly on the last waypoint.
    let local = (p * SEGMENT_COUNT as f32 - i as f32).clamp(0.0, 1.0);
    let (a, b) = (LATERAL_WAYPOINTS[i], LATERAL_WAYPOINTS[i + 1]);
    a + (b - a) * local
}

pub fn scroll_target(progress: f32) -> ScrollTarget {
    let p = sanitize(progress);
    ScrollTarget {
        position: Vec3::new(
            lateral_offset(p),
            -p * DESCENT_PER_PROGRESS,
            -p * RECESSION_PER_PROGRESS,
        ),
        pitch: PITCH_BASE + p * PITCH_PER_PROGRESS,
    }
}

#[inline]
fn sanitize(progress: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn entrance_start_pose() -> Pose {
    Pose::new(ENTRANCE_START_POSITION, ENTRANCE_START_ROTATION)
}

/// Drives the model along the scroll path and plays the one-time entrance.
#[derive(Debug)]
pub struct ScrollPathAnimator<S: ModelStage> {
    stage: S,
    entered: bool,
}

impl<S: ModelStage> ScrollPathAnimator<S> {
    pub fn new(stage: S) -> Self {
        Self {
            stage,
            entered: false,
        }
    }

    /// Retarget the model for a new scroll position. No-op until loaded.
    pub fn on_scroll(&mut self, progress: f32) {
        if !self.stage.has_model() {
            return;
        }
        let target = scroll_target(progress);
        self.stage.animate(
            Motion::new(SCROLL_TWEEN_SEC, Ease::Power1Out)
                .position(target.position)
                .to(Channel::RotX, target.pitch),
        );
    }

    /// Play the entrance glide the first time the model becomes available.
    pub fn on_model_ready(&mut self) {
        if self.entered || !self.stage.has_model() {
            return;
        }
        self.entered = true;
        log::info!("[flight] model ready, starting entrance");
        self.stage.snap(entrance_start_pose());
        self.stage.animate(
            Motion::new(ENTRANCE_TWEEN_SEC, Ease::Power2Out)
                .to(Channel::PosX, ENTRANCE_REST_X)
                .rotation(ENTRANCE_REST_ROTATION)
                .delay(ENTRANCE_DELAY_SEC),
        );
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }
}
