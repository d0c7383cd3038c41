use egui::{Pos2, Rect, Vec2};

use crate::animation::{Easing, Tween, advance};
use crate::geometry::clamp_center;
use crate::haptics::{HapticFeedback, ImpactStyle};
use crate::options::{PanelOptions, SafeAreaInsets};

/// The area a panel is flung around in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingContainer {
    pub bounds: Rect,
    pub safe_area: SafeAreaInsets,
}

/// Where a released panel comes to rest, and how long it takes to get there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fling {
    pub target: Pos2,
    pub duration: f32,
}

/// Projects a release velocity onto a rest point inside the container.
///
/// This is not momentum decay: the panel travels `velocity * slide_factor` where the slide factor
/// itself grows with the release speed, and the result is clamped to the container.
pub fn fling_destination(
    center: Pos2,
    velocity: Vec2,
    half_size: Vec2,
    container: &FlingContainer,
    options: &PanelOptions,
) -> Fling {
    let slide_factor = options.slide_factor(velocity.length());
    let projected = center + velocity * slide_factor;
    Fling {
        target: clamp_center(projected, half_size, container.bounds, container.safe_area),
        duration: 2.0 * slide_factor,
    }
}

/// Position and press feedback of the floating panel, with the animations driving them.
#[derive(Clone, Debug)]
pub struct PanelState {
    pub center: Pos2,
    pub scale: f32,
    pub opacity: f32,
    center_tween: Option<Tween<Vec2>>,
    scale_tween: Option<Tween<f32>>,
    opacity_tween: Option<Tween<f32>>,
}

impl PanelState {
    pub fn new(center: Pos2, opacity: f32) -> Self {
        Self {
            center,
            scale: 1.0,
            opacity,
            center_tween: None,
            scale_tween: None,
            opacity_tween: None,
        }
    }

    /// Samples every running animation. Returns `true` while any is still running.
    pub fn advance(&mut self, now: f64) -> bool {
        let mut center = self.center.to_vec2();
        let moving = advance(&mut self.center_tween, &mut center, now);
        self.center = center.to_pos2();
        let scaling = advance(&mut self.scale_tween, &mut self.scale, now);
        let fading = advance(&mut self.opacity_tween, &mut self.opacity, now);
        moving || scaling || fading
    }

    pub fn is_animating(&self) -> bool {
        self.center_tween.is_some() || self.scale_tween.is_some() || self.opacity_tween.is_some()
    }

    pub fn set_center(&mut self, center: Pos2) {
        self.center_tween = None;
        self.center = center;
    }

    /// Moves the panel by `delta`. A running center animation is shifted along with it.
    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
        if let Some(tween) = &mut self.center_tween {
            tween.translate(delta);
        }
    }

    fn animate_center(&mut self, to: Pos2, now: f64, duration: f32) {
        self.center_tween = Some(
            Tween::new(self.center.to_vec2(), to.to_vec2(), now, duration)
                .with_easing(Easing::EaseOut),
        );
    }

    fn animate_visuals(&mut self, scale: f32, opacity: f32, now: f64, duration: f32) {
        self.scale_tween = Some(Tween::new(self.scale, scale, now, duration));
        self.opacity_tween = Some(Tween::new(self.opacity, opacity, now, duration));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// Free repositioning of the panel: press feedback, absolute tracking, fling to rest.
#[derive(Clone, Debug)]
pub struct DragablePanGesture {
    options: PanelOptions,

    /// Touch point minus panel center, recorded when the touch began.
    grab_offset: Option<Vec2>,

    phase: Option<PanPhase>,
}

impl DragablePanGesture {
    pub fn new(options: &PanelOptions) -> Self {
        Self {
            options: options.clone(),
            grab_offset: None,
            phase: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.grab_offset.is_some()
    }

    /// The last phase this gesture went through.
    pub fn phase(&self) -> Option<PanPhase> {
        self.phase
    }

    pub fn touches_began(
        &mut self,
        touch: Pos2,
        panel: &mut PanelState,
        now: f64,
        haptics: &mut dyn HapticFeedback,
    ) {
        self.grab_offset = Some(touch - panel.center);
        self.phase = Some(PanPhase::Began);

        // Catch the panel where it is if a previous fling is still running.
        panel.set_center(panel.center);
        panel.animate_visuals(
            self.options.pressed_scale,
            1.0,
            now,
            self.options.press_animation_duration,
        );
        haptics.impact(ImpactStyle::Medium);
        log::debug!("panel pan began at {touch:?}");
    }

    pub fn touches_moved(&mut self, touch: Pos2, panel: &mut PanelState) {
        let Some(grab_offset) = self.grab_offset else {
            return;
        };
        self.phase = Some(PanPhase::Moved);
        panel.set_center(touch - grab_offset);
    }

    pub fn touches_ended(
        &mut self,
        velocity: Vec2,
        half_size: Vec2,
        container: &FlingContainer,
        panel: &mut PanelState,
        now: f64,
    ) -> Fling {
        self.grab_offset = None;
        self.phase = Some(PanPhase::Ended);

        let fling = fling_destination(panel.center, velocity, half_size, container, &self.options);
        log::debug!(
            "panel released with velocity {velocity:?}, resting at {:?} after {:.2}s",
            fling.target,
            fling.duration
        );
        panel.animate_center(fling.target, now, fling.duration);
        panel.animate_visuals(1.0, self.options.rest_opacity, now, fling.duration);
        fling
    }

    /// Restores the resting look and pulls the panel back inside the container.
    pub fn touches_cancelled(
        &mut self,
        half_size: Vec2,
        container: &FlingContainer,
        panel: &mut PanelState,
        now: f64,
    ) {
        self.grab_offset = None;
        self.phase = Some(PanPhase::Cancelled);

        let duration = self.options.press_animation_duration;
        let target = clamp_center(panel.center, half_size, container.bounds, container.safe_area);
        panel.animate_center(target, now, duration);
        panel.animate_visuals(1.0, self.options.rest_opacity, now, duration);
        log::debug!("panel pan cancelled");
    }
}

#[cfg(test)]
mod fling_tests;
