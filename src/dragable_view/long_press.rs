use egui::Pos2;

#[derive(Clone, Copy, Debug)]
struct Press {
    start_time: f64,
    start_pos: Pos2,
    fired: bool,
    cancelled: bool,
}

/// Fires once when a press is held long enough without wandering off.
#[derive(Clone, Debug)]
pub struct LongPressRecognizer {
    min_duration: f64,
    allowable_movement: f32,
    press: Option<Press>,
}

impl LongPressRecognizer {
    pub fn new(min_duration: f64, allowable_movement: f32) -> Self {
        Self {
            min_duration,
            allowable_movement,
            press: None,
        }
    }

    /// `pressed_at` is the pointer position while the press is held, `None` once released.
    ///
    /// Returns `true` on the frame the long press is recognized.
    pub fn update(&mut self, pressed_at: Option<Pos2>, now: f64) -> bool {
        let Some(pos) = pressed_at else {
            self.press = None;
            return false;
        };

        let press = self.press.get_or_insert(Press {
            start_time: now,
            start_pos: pos,
            fired: false,
            cancelled: false,
        });
        if press.fired || press.cancelled {
            return false;
        }
        if press.start_pos.distance(pos) > self.allowable_movement {
            press.cancelled = true;
            return false;
        }
        if now - press.start_time >= self.min_duration {
            press.fired = true;
            return true;
        }
        false
    }

    /// Seconds until a still-armed press fires.
    pub fn time_remaining(&self, now: f64) -> Option<f64> {
        let press = self.press.filter(|p| !p.fired && !p.cancelled)?;
        Some((press.start_time + self.min_duration - now).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn fires_once_after_min_duration() {
        let mut lp = LongPressRecognizer::new(1.5, 10.0);
        let p = pos2(10.0, 10.0);
        assert!(!lp.update(Some(p), 0.0));
        assert!(!lp.update(Some(p), 1.0));
        assert_eq!(lp.time_remaining(1.0), Some(0.5));
        assert!(lp.update(Some(p), 1.5));
        assert!(!lp.update(Some(p), 2.0));
        assert_eq!(lp.time_remaining(2.0), None);
    }

    #[test]
    fn moving_away_cancels() {
        let mut lp = LongPressRecognizer::new(1.5, 10.0);
        lp.update(Some(pos2(0.0, 0.0)), 0.0);
        lp.update(Some(pos2(20.0, 0.0)), 0.5);
        assert!(!lp.update(Some(pos2(0.0, 0.0)), 2.0));
    }

    #[test]
    fn release_rearms() {
        let mut lp = LongPressRecognizer::new(1.5, 10.0);
        lp.update(Some(pos2(0.0, 0.0)), 0.0);
        assert!(!lp.update(None, 1.0));
        assert!(!lp.update(Some(pos2(0.0, 0.0)), 1.2));
        assert!(lp.update(Some(pos2(0.0, 0.0)), 3.0));
    }
}
