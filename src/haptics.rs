#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

/// Tactile feedback for gesture milestones (press began, long press fired).
pub trait HapticFeedback {
    fn impact(&mut self, style: ImpactStyle);
}

/// Feedback sink for platforms without a haptic engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogHaptics;

impl HapticFeedback for LogHaptics {
    fn impact(&mut self, style: ImpactStyle) {
        log::trace!("haptic impact: {style:?}");
    }
}
