/// Insets of the container that the panel must not fling into.
///
/// Only the vertical edges are honored when clamping a fling; horizontally the panel is clamped
/// to the raw container bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SafeAreaInsets {
    pub top: f32,
    pub bottom: f32,
}

impl SafeAreaInsets {
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };
}

/// Options for [`crate::ViewController`] and the views it composes.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelOptions {
    /// Maximum time (seconds) between two taps of the same multi-tap gesture.
    ///
    /// A tap sequence that stalls for longer than this fails every recognizer still waiting for
    /// more taps, which in turn releases the lower tap-count recognizers waiting on them.
    pub max_tap_interval: f64,

    /// A touch that travels further than this (in points) is not a tap.
    pub tap_slop: f32,

    /// How long (seconds) the panel must be held before the hide prompt is raised.
    pub long_press_duration: f64,

    /// Pointer movement (in points) tolerated during a long press.
    pub long_press_allowable_movement: f32,

    /// Panel scale while it is being dragged.
    pub pressed_scale: f32,

    /// Panel background opacity while resting. Dragging raises it to fully opaque.
    pub rest_opacity: f32,

    /// Duration (seconds) of the press feedback animation.
    pub press_animation_duration: f32,

    /// Release speed (points/second) that maps to a slide multiplier of 1.
    pub fling_velocity_divisor: f32,

    /// Coefficient applied to the slide multiplier to get the slide factor.
    ///
    /// The projected rest point is `center + velocity * slide_factor`, reached after
    /// `2 * slide_factor` seconds.
    pub fling_coefficient: f32,

    /// Distance (in points) between midpoints at which a dragged favorite swaps with a neighbor.
    pub reorder_tolerance: f32,

    /// Scale of a favorite button while it is being dragged.
    pub reorder_scale: f32,

    /// Duration (seconds) of the animation that settles a dropped favorite into its slot.
    pub settle_duration: f32,

    /// How many favorites fit the single-row layout. More than this wraps into rows.
    pub max_single_row_favorites: usize,

    /// Safe-area insets of the container the panel lives in.
    pub safe_area: SafeAreaInsets,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            max_tap_interval: 0.35,
            tap_slop: 10.0,
            long_press_duration: 1.5,
            long_press_allowable_movement: 10.0,
            pressed_scale: 1.2,
            rest_opacity: 0.5,
            press_animation_duration: 0.3,
            fling_velocity_divisor: 200.0,
            fling_coefficient: 0.1,
            reorder_tolerance: 5.0,
            reorder_scale: 1.1,
            settle_duration: 0.3,
            max_single_row_favorites: 7,
            safe_area: SafeAreaInsets::ZERO,
        }
    }
}

impl PanelOptions {
    /// Slide factor for a release with the given speed (points/second).
    pub(crate) fn slide_factor(&self, speed: f32) -> f32 {
        if self.fling_velocity_divisor <= 0.0 {
            return 0.0;
        }
        self.fling_coefficient * (speed / self.fling_velocity_divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_factor_is_linear_in_speed() {
        let opt = PanelOptions::default();
        assert_eq!(opt.slide_factor(0.0), 0.0);
        assert!((opt.slide_factor(200.0) - 0.1).abs() < 1e-6);
        assert!((opt.slide_factor(1000.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn non_positive_divisor_disables_fling() {
        let opt = PanelOptions {
            fling_velocity_divisor: 0.0,
            ..Default::default()
        };
        assert_eq!(opt.slide_factor(5000.0), 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_ron_falls_back_to_defaults() {
        let opt: PanelOptions =
            ron::from_str("(max_tap_interval: 0.5, safe_area: (top: 47.0, bottom: 34.0))")
                .expect("valid ron");
        assert_eq!(opt.max_tap_interval, 0.5);
        assert_eq!(opt.safe_area.top, 47.0);
        assert_eq!(opt.max_single_row_favorites, 7);
        assert_eq!(opt.reorder_tolerance, 5.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_preserves_tuned_values() {
        let opt = PanelOptions {
            pressed_scale: 1.35,
            ..Default::default()
        };
        let json = serde_json::to_string(&opt).expect("serialize");
        let back: PanelOptions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.pressed_scale, 1.35);
        assert_eq!(back.safe_area, opt.safe_area);
    }
}
