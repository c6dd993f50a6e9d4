use super::flight::ModelStage;
use glam::Vec3;

/// Easing curves used by the page animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-out.
    Power1Out,
    /// Cubic ease-out.
    Power2Out,
}

impl Ease {
    /// Map linear time `t` in \[0, 1\] onto the eased curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - inv * inv,
            Ease::Power2Out => 1.0 - inv * inv * inv,
        }
    }
}

/// One animatable scalar of a model transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    PosX,
    PosY,
    PosZ,
    RotX,
    RotY,
    RotZ,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::PosX,
        Channel::PosY,
        Channel::PosZ,
        Channel::RotX,
        Channel::RotY,
        Channel::RotZ,
    ];

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

/// Position plus Euler rotation (radians, XYZ order) of the model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::PosX => self.position.x,
            Channel::PosY => self.position.y,
            Channel::PosZ => self.position.z,
            Channel::RotX => self.rotation.x,
            Channel::RotY => self.rotation.y,
            Channel::RotZ => self.rotation.z,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f32) {
        match channel {
            Channel::PosX => self.position.x = value,
            Channel::PosY => self.position.y = value,
            Channel::PosZ => self.position.z = value,
            Channel::RotX => self.rotation.x = value,
            Channel::RotY => self.rotation.y = value,
            Channel::RotZ => self.rotation.z = value,
        }
    }
}

/// A request to animate some channels towards target values.
///
/// Channels not mentioned keep whatever tween (or value) they already have.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    targets: Vec<(Channel, f32)>,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub ease: Ease,
}

impl Motion {
    pub fn new(duration_sec: f32, ease: Ease) -> Self {
        Self {
            targets: Vec::with_capacity(Channel::ALL.len()),
            duration_sec,
            delay_sec: 0.0,
            ease,
        }
    }

    /// Set the target for `channel`, replacing an earlier target for it.
    pub fn to(mut self, channel: Channel, value: f32) -> Self {
        match self.targets.iter_mut().find(|(c, _)| *c == channel) {
            Some(entry) => entry.1 = value,
            None => self.targets.push((channel, value)),
        }
        self
    }

    pub fn position(self, p: Vec3) -> Self {
        self.to(Channel::PosX, p.x)
            .to(Channel::PosY, p.y)
            .to(Channel::PosZ, p.z)
    }

    pub fn rotation(self, r: Vec3) -> Self {
        self.to(Channel::RotX, r.x)
            .to(Channel::RotY, r.y)
            .to(Channel::RotZ, r.z)
    }

    pub fn delay(mut self, delay_sec: f32) -> Self {
        self.delay_sec = delay_sec;
        self
    }

    pub fn targets(&self) -> &[(Channel, f32)] {
        &self.targets
    }

    pub fn target(&self, channel: Channel) -> Option<f32> {
        self.targets
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, v)| *v)
    }
}

/// Timed interpolation of a single scalar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    duration_sec: f32,
    delay_sec: f32,
    ease: Ease,
    elapsed_sec: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_sec: f32, delay_sec: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_sec: duration_sec.max(0.0),
            delay_sec: delay_sec.max(0.0),
            ease,
            elapsed_sec: 0.0,
        }
    }

    /// Value at the current elapsed time.
    pub fn sample(&self) -> f32 {
        let active = self.elapsed_sec - self.delay_sec;
        if active <= 0.0 {
            return self.from;
        }
        if self.duration_sec <= 0.0 {
            return self.to;
        }
        let t = (active / self.duration_sec).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    /// Advance by `dt_sec` and return the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        self.elapsed_sec += dt_sec.max(0.0);
        self.sample()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_sec >= self.delay_sec + self.duration_sec
    }
}

/// Frame-driven model pose with one tween slot per channel.
///
/// A new motion on a channel replaces whatever tween was running on it and
/// starts from the channel's current value, so rapid scroll events retarget
/// the model smoothly instead of queueing.
#[derive(Clone, Debug, Default)]
pub struct TweenedPose {
    pose: Pose,
    slots: [Option<Tween>; 6],
    loaded: bool,
}

impl TweenedPose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_model_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn advance(&mut self, dt_sec: f32) -> Pose {
        for channel in Channel::ALL {
            let slot = &mut self.slots[channel.slot()];
            let Some(tween) = slot.as_mut() else {
                continue;
            };
            let value = tween.step(dt_sec);
            let done = tween.is_done();
            self.pose.set(channel, value);
            if done {
                *slot = None;
            }
        }
        self.pose
    }

    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Target of the tween currently running on `channel`, if any.
    pub fn active_target(&self, channel: Channel) -> Option<f32> {
        self.slots[channel.slot()].map(|t| t.to)
    }
}

impl ModelStage for TweenedPose {
    fn has_model(&self) -> bool {
        self.loaded
    }

    fn snap(&mut self, pose: Pose) {
        self.pose = pose;
        self.slots = Default::default();
    }

    fn animate(&mut self, motion: Motion) {
        for &(channel, to) in motion.targets() {
            let from = self.pose.get(channel);
            self.slots[channel.slot()] = Some(Tween::new(
                from,
                to,
                motion.duration_sec,
                motion.delay_sec,
                motion.ease,
            ));
        }
    }
}
