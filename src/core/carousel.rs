use super::constants::{AUTOPLAY_PERIOD_MS, SLIDE_SETTLE_MS, SLIDE_STEP_PERCENT};
use std::time::Duration;

/// Direction the slide track moves in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideAxis {
    #[default]
    Vertical,
    Horizontal,
}

/// The externally owned slides, track and pagination dots of one carousel.
pub trait SlideSurface {
    fn slide_count(&self) -> usize;
    /// Move the track so the slide at `offset_percent / 100` is in view.
    fn show_offset(&mut self, offset_percent: f32, axis: SlideAxis);
    /// Drop any existing dots and create `count` fresh ones.
    fn rebuild_dots(&mut self, count: usize);
    fn set_dot_active(&mut self, index: usize, active: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// One-shot: ends the transition guard window.
    Settle,
    /// Recurring: advances the carousel.
    Autoplay,
}

/// Opaque id of a pending timer, unique per host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u32);

/// Deferred-callback facility. Fired timers are reported back to the owner
/// through [`Carousel::on_timer`].
pub trait TimerHost {
    /// Returns `None` if the platform refused to install the timer.
    fn schedule(&mut self, kind: TimerKind, delay: Duration) -> Option<TimerHandle>;
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    NoSlides,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    pub settle_delay: Duration,
    pub autoplay_period: Duration,
    pub axis: SlideAxis,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(SLIDE_SETTLE_MS),
            autoplay_period: Duration::from_millis(AUTOPLAY_PERIOD_MS),
            axis: SlideAxis::Vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// What a wheel gesture over the carousel did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// A transition was in flight; nothing happened.
    Swallowed,
    Advanced,
    Retreated,
}

/// Looping slide carousel with autoplay and a transition guard.
///
/// All mutation goes through [`Carousel::go_to_slide`]; while a transition is
/// settling every further navigation request is dropped.
#[derive(Debug)]
pub struct Carousel<S: SlideSurface, T: TimerHost> {
    name: &'static str,
    surface: S,
    timers: T,
    config: CarouselConfig,
    total: usize,
    current: usize,
    phase: Phase,
    settle: Option<TimerHandle>,
    autoplay: Option<TimerHandle>,
}

impl<S: SlideSurface, T: TimerHost> Carousel<S, T> {
    pub fn new(
        name: &'static str,
        surface: S,
        timers: T,
        config: CarouselConfig,
    ) -> Result<Self, CarouselError> {
        let total = surface.slide_count();
        if total == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            name,
            surface,
            timers,
            config,
            total,
            current: 0,
            phase: Phase::Idle,
            settle: None,
            autoplay: None,
        })
    }

    /// Render dots, show the first slide without a guard window and start
    /// autoplay.
    pub fn start(&mut self) {
        self.surface.rebuild_dots(self.total);
        self.current = 0;
        self.render();
        self.start_autoplay();
        log::info!("[carousel:{}] started with {} slides", self.name, self.total);
    }

    /// Navigate to `target`, wrapped into range. Returns false if a
    /// transition was still settling.
    pub fn go_to_slide(&mut self, target: i64) -> bool {
        if self.phase == Phase::Transitioning {
            log::debug!("[carousel:{}] ignored go_to_slide({})", self.name, target);
            return false;
        }
        self.current = wrap_index(target, self.total);
        self.phase = Phase::Transitioning;
        self.render();
        self.settle = self
            .timers
            .schedule(TimerKind::Settle, self.config.settle_delay);
        if self.settle.is_none() {
            log::warn!("[carousel:{}] settle timer unavailable", self.name);
            self.phase = Phase::Idle;
        }
        true
    }

    pub fn advance(&mut self) -> bool {
        self.go_to_slide(self.current as i64 + 1)
    }

    pub fn retreat(&mut self) -> bool {
        self.go_to_slide(self.current as i64 - 1)
    }

    /// Restart the autoplay cadence from now.
    pub fn reset_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            self.timers.cancel(handle);
        }
        self.start_autoplay();
    }

    pub fn click_dot(&mut self, index: usize) {
        self.go_to_slide(index as i64);
        self.reset_autoplay();
    }

    /// Handle a wheel gesture. The caller suppresses page scroll regardless.
    pub fn wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if self.phase == Phase::Transitioning {
            return WheelOutcome::Swallowed;
        }
        let outcome = if delta_y > 0.0 {
            self.advance();
            WheelOutcome::Advanced
        } else {
            self.retreat();
            WheelOutcome::Retreated
        };
        self.reset_autoplay();
        outcome
    }

    /// Dispatch a fired timer. Handles that are no longer current are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.settle == Some(handle) {
            self.settle = None;
            self.phase = Phase::Idle;
        } else if self.autoplay == Some(handle) {
            self.advance();
        } else {
            log::debug!("[carousel:{}] stale timer {:?}", self.name, handle);
        }
    }

    /// Recreate the pagination dots and re-highlight the current slide.
    pub fn reset_dots(&mut self) {
        self.surface.rebuild_dots(self.total);
        self.update_dots();
    }

    /// Cancel all pending timers. The carousel stays on its current slide.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.settle.take() {
            self.timers.cancel(handle);
        }
        if let Some(handle) = self.autoplay.take() {
            self.timers.cancel(handle);
        }
        self.phase = Phase::Idle;
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total_slides(&self) -> usize {
        self.total
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn autoplay_handle(&self) -> Option<TimerHandle> {
        self.autoplay
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    fn start_autoplay(&mut self) {
        self.autoplay = self
            .timers
            .schedule(TimerKind::Autoplay, self.config.autoplay_period);
        if self.autoplay.is_none() {
            log::warn!("[carousel:{}] autoplay timer unavailable", self.name);
        }
    }

    fn render(&mut self) {
        self.surface
            .show_offset(self.current as f32 * SLIDE_STEP_PERCENT, self.config.axis);
        self.update_dots();
    }

    fn update_dots(&mut self) {
        for i in 0..self.total {
            self.surface.set_dot_active(i, i == self.current);
        }
    }
}

/// Wrap any integer into `[0, total)`.
#[inline]
pub fn wrap_index(target: i64, total: usize) -> usize {
    target.rem_euclid(total as i64) as usize
}
