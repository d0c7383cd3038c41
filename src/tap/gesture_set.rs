use super::recognizer::{RecognizerState, TapRecognizer};
use super::{TapEvent, TapGesture};

/// Decides which recognizers have to wait for others to fail before they may fire.
pub trait GestureDisambiguationPolicy: std::fmt::Debug {
    /// Whether `recognizer` may only fire once `other` has failed.
    fn requires_failure_of(&self, recognizer: &TapRecognizer, other: &TapRecognizer) -> bool;
}

/// Standard tap-count disambiguation: a recognizer waits for every recognizer that uses the
/// same number of fingers but needs more taps.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapCountDisambiguation;

impl GestureDisambiguationPolicy for TapCountDisambiguation {
    fn requires_failure_of(&self, recognizer: &TapRecognizer, other: &TapRecognizer) -> bool {
        recognizer.touches_required() == other.touches_required()
            && other.taps_required() > recognizer.taps_required()
    }
}

/// A group of tap recognizers that see the same taps and are resolved against each other.
#[derive(Debug)]
pub struct TapGestureSet {
    recognizers: Vec<TapRecognizer>,
    fired: Vec<bool>,
    policy: Box<dyn GestureDisambiguationPolicy>,
    max_interval: f64,
}

impl TapGestureSet {
    /// The four recognizers of the main screen: one and two fingers, two and three taps each.
    pub fn new(max_interval: f64) -> Self {
        let mut set = Self::with_policy(max_interval, TapCountDisambiguation);
        for touches in [1, 2] {
            for taps in [2, 3] {
                set.add_recognizer(TapRecognizer::new(taps, touches));
            }
        }
        set
    }

    pub fn with_policy(
        max_interval: f64,
        policy: impl GestureDisambiguationPolicy + 'static,
    ) -> Self {
        Self {
            recognizers: Vec::new(),
            fired: Vec::new(),
            policy: Box::new(policy),
            max_interval,
        }
    }

    pub fn add_recognizer(&mut self, recognizer: TapRecognizer) {
        self.recognizers.push(recognizer);
        self.fired.push(false);
    }

    pub fn recognizers(&self) -> &[TapRecognizer] {
        &self.recognizers
    }

    /// Feeds a tap to every recognizer and returns the gestures that fired because of it.
    ///
    /// A sequence that went stale before this tap is settled first, so the tap starts a new
    /// sequence instead of failing the old one.
    pub fn handle(&mut self, event: TapEvent) -> Vec<TapGesture> {
        let mut gestures = self.tick(event.time());
        for recognizer in &mut self.recognizers {
            recognizer.handle(event, self.max_interval);
        }
        gestures.extend(self.resolve());
        gestures
    }

    /// Advances time, failing overdue sequences, and returns the gestures released by that.
    pub fn tick(&mut self, now: f64) -> Vec<TapGesture> {
        for recognizer in &mut self.recognizers {
            recognizer.tick(now, self.max_interval);
        }
        self.resolve()
    }

    /// Whether a tap sequence is still undecided, i.e. the caller should keep ticking.
    pub fn is_pending(&self) -> bool {
        self.recognizers
            .iter()
            .zip(&self.fired)
            .any(|(r, &fired)| {
                r.is_collecting() || (r.state() == RecognizerState::Recognized && !fired)
            })
    }

    fn resolve(&mut self) -> Vec<TapGesture> {
        let mut gestures = Vec::new();

        loop {
            let mut changed = false;

            for i in 0..self.recognizers.len() {
                if self.fired[i] || self.recognizers[i].state() != RecognizerState::Recognized {
                    continue;
                }

                let mut blocked = false;
                let mut beaten = false;
                for (j, other) in self.recognizers.iter().enumerate() {
                    if i == j || !self.policy.requires_failure_of(&self.recognizers[i], other) {
                        continue;
                    }
                    match other.state() {
                        RecognizerState::Possible => blocked = true,
                        RecognizerState::Recognized => beaten = true,
                        RecognizerState::Failed => {}
                    }
                }

                if beaten {
                    log::debug!(
                        "tap recognizer {}x{} lost to a higher tap count",
                        self.recognizers[i].taps_required(),
                        self.recognizers[i].touches_required()
                    );
                    self.recognizers[i].fail();
                    changed = true;
                } else if !blocked {
                    let gesture = self.recognizers[i].gesture();
                    log::debug!("tap gesture recognized: {gesture:?}");
                    self.fired[i] = true;
                    gestures.push(gesture);
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        if !self.is_pending() {
            for recognizer in &mut self.recognizers {
                recognizer.reset();
            }
            self.fired.iter_mut().for_each(|fired| *fired = false);
        }

        gestures
    }
}
