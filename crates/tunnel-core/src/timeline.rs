//! Property tweens positioned on repeating timelines.
//!
//! Tweens animate one [`Channel`] of [`AnimationParams`] toward a target. The
//! start value is captured the first time a tween renders, so a tween placed
//! after another on the same channel picks up where the earlier one left
//! off. Children render in insertion order each frame; when two overlap on
//! one channel the later one wins.

use crate::constants::*;
use crate::ease::{Ease, Power, RoughEase};
use smallvec::SmallVec;

/// Animated scalar fields read by the frame step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    OffsetX,
    OffsetY,
    RepeatX,
    RepeatY,
    ShakeX,
    ShakeY,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    pub offset_x: f32,
    pub offset_y: f32,
    pub repeat_x: f32,
    pub repeat_y: f32,
    pub shake_x: f32,
    pub shake_y: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            repeat_x: TEXTURE_REPEAT_X,
            repeat_y: TEXTURE_REPEAT_Y,
            shake_x: 0.0,
            shake_y: 0.0,
        }
    }
}

impl AnimationParams {
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::OffsetX => self.offset_x,
            Channel::OffsetY => self.offset_y,
            Channel::RepeatX => self.repeat_x,
            Channel::RepeatY => self.repeat_y,
            Channel::ShakeX => self.shake_x,
            Channel::ShakeY => self.shake_y,
        }
    }

    pub fn set(&mut self, channel: Channel, value: f32) {
        let slot = match channel {
            Channel::OffsetX => &mut self.offset_x,
            Channel::OffsetY => &mut self.offset_y,
            Channel::RepeatX => &mut self.repeat_x,
            Channel::RepeatY => &mut self.repeat_y,
            Channel::ShakeX => &mut self.shake_x,
            Channel::ShakeY => &mut self.shake_y,
        };
        *slot = value;
    }
}

/// Whether a tween or timeline starts over after its first play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Never,
    Forever,
}

#[derive(Clone, Debug)]
pub struct Tween {
    pub channel: Channel,
    pub to: f32,
    pub duration: f32,
    pub ease: Ease,
    pub repeat: Repeat,
    from: Option<f32>,
}

impl Tween {
    pub fn to(channel: Channel, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            channel,
            to,
            duration: duration.max(0.0),
            ease,
            repeat: Repeat::Never,
            from: None,
        }
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Captured start value, once the tween has rendered.
    pub fn from(&self) -> Option<f32> {
        self.from
    }

    /// Length including repeats; `None` when it repeats forever.
    pub fn total_duration(&self) -> Option<f32> {
        match self.repeat {
            Repeat::Never => Some(self.duration),
            Repeat::Forever => None,
        }
    }

    /// Progress through the current play for `local` seconds since start.
    fn progress(&self, local: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let duration = f64::from(self.duration);
        match self.repeat {
            Repeat::Never if local >= duration => 1.0,
            _ => (local.rem_euclid(duration) / duration).clamp(0.0, 1.0) as f32,
        }
    }

    fn render(&mut self, local: f64, params: &mut AnimationParams) {
        let channel = self.channel;
        let from = *self.from.get_or_insert_with(|| params.get(channel));
        let ratio = self.ease.ratio(self.progress(local));
        params.set(channel, from + (self.to - from) * ratio);
    }
}

/// Where a tween is placed on its timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    At(f32),
    /// Right after the current end of the timeline.
    End,
}

#[derive(Clone, Debug)]
struct Child {
    start: f32,
    tween: Tween,
}

#[derive(Clone, Debug)]
pub struct Timeline {
    label: &'static str,
    children: SmallVec<[Child; 4]>,
    repeat: Repeat,
    repeat_delay: f32,
    /// Kept in f64 so a page left open for weeks still advances by `dt`.
    elapsed: f64,
    cycle: u64,
}

impl Timeline {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            children: SmallVec::new(),
            repeat: Repeat::Never,
            repeat_delay: 0.0,
            elapsed: 0.0,
            cycle: 0,
        }
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_repeat_delay(mut self, delay: f32) -> Self {
        self.repeat_delay = delay.max(0.0);
        self
    }

    pub fn add(mut self, tween: Tween, position: Position) -> Self {
        let start = match position {
            Position::At(t) => t.max(0.0),
            Position::End => self.duration().unwrap_or(0.0),
        };
        self.children.push(Child { start, tween });
        self
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Completed repeat cycles so far.
    #[inline]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn tweens(&self) -> impl Iterator<Item = (f32, &Tween)> {
        self.children.iter().map(|c| (c.start, &c.tween))
    }

    /// One play's length; `None` when a child repeats forever.
    pub fn duration(&self) -> Option<f32> {
        self.children.iter().try_fold(0.0_f32, |acc, c| {
            c.tween.total_duration().map(|d| acc.max(c.start + d))
        })
    }

    pub fn is_finished(&self) -> bool {
        match (self.duration(), self.repeat) {
            (Some(d), Repeat::Never) => self.elapsed >= f64::from(d),
            _ => false,
        }
    }

    fn cycle_length(&self, duration: f32) -> f64 {
        f64::from(duration) + f64::from(self.repeat_delay)
    }

    /// Move the playhead by `dt` seconds and write the tweened values.
    pub fn advance(&mut self, dt: f32, params: &mut AnimationParams) {
        self.elapsed += f64::from(dt.max(0.0));
        let Some(duration) = self.duration() else {
            self.render_at(self.elapsed, params);
            return;
        };

        let end = f64::from(duration);
        let cycle_len = self.cycle_length(duration);
        let (cycle, local) = match self.repeat {
            _ if cycle_len <= 0.0 => (0, end),
            Repeat::Never => (0, self.elapsed.min(end)),
            Repeat::Forever => {
                let cycle = (self.elapsed / cycle_len).floor() as u64;
                let local = self.elapsed - cycle as f64 * cycle_len;
                (cycle, local.min(end))
            }
        };

        if cycle > self.cycle {
            // close out the play the playhead just left
            self.render_at(end, params);
            self.cycle = cycle;
            log::trace!("[timeline] {} cycle {}", self.label, cycle);
        }
        self.render_at(local, params);
    }

    fn render_at(&mut self, local: f64, params: &mut AnimationParams) {
        for child in self.children.iter_mut() {
            let start = f64::from(child.start);
            if local >= start {
                child.tween.render(local - start, params);
            }
        }
    }
}

/// Frame deltas above the lag threshold (tab switches, breakpoints) are
/// replaced by a nominal frame so timelines do not jump.
#[inline]
pub fn smooth_lag(dt: f32) -> f32 {
    if !dt.is_finite() || dt < 0.0 {
        0.0
    } else if dt > LAG_THRESHOLD_SEC {
        LAG_ADJUSTED_SEC
    } else {
        dt
    }
}

/// Texture repeat collapses while the horizontal offset streams forward.
pub fn hyperspace_timeline() -> Timeline {
    Timeline::new("hyperspace")
        .with_repeat(Repeat::Forever)
        .add(
            Tween::to(
                Channel::RepeatX,
                HYPER_REPEAT_X_TARGET,
                HYPER_REPEAT_DURATION,
                Ease::Power(Power::InOut(1)),
            ),
            Position::At(0.0),
        )
        .add(
            Tween::to(
                Channel::OffsetX,
                HYPER_OFFSET_X_TARGET,
                HYPER_OFFSET_DURATION,
                Ease::Power(Power::In(2)),
            ),
            Position::At(0.0),
        )
        .add(
            Tween::to(
                Channel::OffsetX,
                HYPER_OFFSET_X_TARGET,
                HYPER_OFFSET_DURATION,
                Ease::Linear,
            )
            .with_repeat(Repeat::Forever),
            Position::At(0.0),
        )
}

/// Camera nudge out and back with a jittered ease, then a pause.
pub fn shake_timeline(rough: &RoughEase) -> Timeline {
    Timeline::new("shake")
        .with_repeat(Repeat::Forever)
        .with_repeat_delay(SHAKE_REPEAT_DELAY)
        .add(
            Tween::to(
                Channel::ShakeX,
                SHAKE_X_TARGET,
                SHAKE_DURATION,
                Ease::Rough(rough.clone()),
            ),
            Position::At(SHAKE_START),
        )
        .add(
            Tween::to(Channel::ShakeX, 0.0, SHAKE_DURATION, Ease::Rough(rough.clone())),
            Position::End,
        )
}
