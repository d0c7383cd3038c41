use std::ops::{Add, Mul, Sub};

use egui::emath::easing;

/// Shape of a [`Tween`]'s progress curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseOut,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseOut => easing::cubic_out(t),
        }
    }
}

/// A fire-and-forget animation between two values, sampled with the frame time.
///
/// Nothing awaits a tween: whoever owns it samples it each frame and drops it once
/// [`Tween::is_finished`] returns `true`.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    start_time: f64,
    duration: f32,
    easing: Easing,
}

impl<T> Tween<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    pub fn new(from: T, to: T, start_time: f64, duration: f32) -> Self {
        Self {
            from,
            to,
            start_time,
            duration: duration.max(0.0),
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start_time) / f64::from(self.duration)) as f32).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> T {
        let t = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Shifts both ends by `delta`, keeping the timing.
    pub fn translate(&mut self, delta: T) {
        self.from = self.from + delta;
        self.to = self.to + delta;
    }
}

/// Samples an optional tween into `value`, dropping the tween once it completes.
///
/// Returns `true` while the tween is still running.
pub(crate) fn advance<T>(tween: &mut Option<Tween<T>>, value: &mut T, now: f64) -> bool
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    let Some(running) = tween else {
        return false;
    };
    *value = running.value_at(now);
    if running.is_finished(now) {
        *tween = None;
        return false;
    }
    true
}
