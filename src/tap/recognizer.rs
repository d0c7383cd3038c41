use super::{TapEvent, TapGesture};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecognizerState {
    /// Still collecting taps.
    Possible,

    /// Saw every tap it needs. It may still have to wait for other recognizers to fail.
    Recognized,

    Failed,
}

/// Recognizes `taps_required` consecutive taps made with exactly `touches_required` fingers.
#[derive(Clone, Debug)]
pub struct TapRecognizer {
    taps_required: u8,
    touches_required: u8,
    state: RecognizerState,
    taps: u8,
    last_tap_time: Option<f64>,
}

impl TapRecognizer {
    pub fn new(taps_required: u8, touches_required: u8) -> Self {
        Self {
            taps_required,
            touches_required,
            state: RecognizerState::Possible,
            taps: 0,
            last_tap_time: None,
        }
    }

    pub fn taps_required(&self) -> u8 {
        self.taps_required
    }

    pub fn touches_required(&self) -> u8 {
        self.touches_required
    }

    pub fn state(&self) -> RecognizerState {
        self.state
    }

    pub fn taps(&self) -> u8 {
        self.taps
    }

    /// The gesture this recognizer reports once it fires.
    pub fn gesture(&self) -> TapGesture {
        TapGesture::classify(self.taps_required, self.touches_required)
    }

    pub fn reset(&mut self) {
        self.state = RecognizerState::Possible;
        self.taps = 0;
        self.last_tap_time = None;
    }

    pub(crate) fn fail(&mut self) {
        self.state = RecognizerState::Failed;
    }

    pub fn handle(&mut self, event: TapEvent, max_interval: f64) {
        if self.state != RecognizerState::Possible {
            return;
        }
        match event {
            TapEvent::Invalid { .. } => self.fail(),
            TapEvent::Tap { touches, time } => {
                if self.timed_out(time, max_interval) || touches != self.touches_required {
                    self.fail();
                    return;
                }
                self.taps += 1;
                self.last_tap_time = Some(time);
                if self.taps >= self.taps_required {
                    self.state = RecognizerState::Recognized;
                }
            }
        }
    }

    /// Fails a started sequence once the next tap is overdue.
    pub fn tick(&mut self, now: f64, max_interval: f64) {
        if self.state == RecognizerState::Possible && self.timed_out(now, max_interval) {
            self.fail();
        }
    }

    /// Whether a tap sequence is in progress and waiting for its next tap.
    pub fn is_collecting(&self) -> bool {
        self.state == RecognizerState::Possible && self.taps > 0
    }

    fn timed_out(&self, now: f64, max_interval: f64) -> bool {
        self.last_tap_time
            .is_some_and(|last| now - last > max_interval)
    }
}
