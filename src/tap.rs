//! Multi-finger, multi-tap gesture recognition.
//!
//! Raw egui events go through [`TapInput`], which reduces them to completed taps. A
//! [`TapGestureSet`] feeds those taps to its [`TapRecognizer`]s and resolves conflicts between
//! them with a [`GestureDisambiguationPolicy`].

mod gesture_set;
mod input;
mod recognizer;

pub use gesture_set::{GestureDisambiguationPolicy, TapCountDisambiguation, TapGestureSet};
pub use input::TapInput;
pub use recognizer::{RecognizerState, TapRecognizer};

/// A completed tap (or a touch sequence that can no longer be one).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapEvent {
    /// All fingers lifted. `touches` is the most fingers that were down at once.
    Tap { touches: u8, time: f64 },

    /// The touch moved too far or was cancelled.
    Invalid { time: f64 },
}

impl TapEvent {
    pub fn time(self) -> f64 {
        match self {
            Self::Tap { time, .. } | Self::Invalid { time } => time,
        }
    }
}

/// The tap gestures the screen reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum TapGesture {
    OneFingerTwoTaps,
    OneFingerThreeTaps,
    TwoFingersTwoTaps,
    TwoFingersThreeTaps,
    NotRecognized,
}

impl TapGesture {
    pub fn classify(taps_required: u8, touches: u8) -> Self {
        match (taps_required, touches) {
            (2, 1) => Self::OneFingerTwoTaps,
            (2, 2) => Self::TwoFingersTwoTaps,
            (3, 1) => Self::OneFingerThreeTaps,
            (3, 2) => Self::TwoFingersThreeTaps,
            _ => Self::NotRecognized,
        }
    }
}
