use ahash::AHashMap;
use egui::{Event, PointerButton, Pos2, TouchPhase};

use super::TapEvent;

/// Reduces raw egui input to completed taps.
///
/// A tap ends when the last finger lifts; it counts the most fingers that were down at the same
/// time. On platforms without touch input a primary click is a one-finger tap and a primary click
/// with the command modifier held stands in for a two-finger tap.
#[derive(Debug, Default)]
pub struct TapInput {
    slop: f32,
    touches: AHashMap<u64, Pos2>,
    max_touches: u8,
    moved_too_far: bool,

    /// egui backends emulate pointer events for the first finger; once real touches show up
    /// those emulated clicks must not count twice.
    touch_seen: bool,

    click: Option<(Pos2, u8)>,
}

impl TapInput {
    pub fn new(slop: f32) -> Self {
        Self {
            slop,
            ..Default::default()
        }
    }

    pub fn collect(&mut self, ctx: &egui::Context) -> Vec<TapEvent> {
        ctx.input(|i| {
            let time = i.time;
            i.events
                .iter()
                .filter_map(|event| self.on_event(event, time))
                .collect()
        })
    }

    pub fn on_event(&mut self, event: &Event, time: f64) -> Option<TapEvent> {
        match event {
            Event::Touch { id, phase, pos, .. } => {
                self.touch_seen = true;
                self.on_touch(id.0, *phase, *pos, time)
            }
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed,
                modifiers,
            } if !self.touch_seen => {
                if *pressed {
                    let fingers = if modifiers.command { 2 } else { 1 };
                    self.click = Some((*pos, fingers));
                    return None;
                }
                let (start, touches) = self.click.take()?;
                Some(if start.distance(*pos) > self.slop {
                    TapEvent::Invalid { time }
                } else {
                    TapEvent::Tap { touches, time }
                })
            }
            _ => None,
        }
    }

    fn on_touch(&mut self, id: u64, phase: TouchPhase, pos: Pos2, time: f64) -> Option<TapEvent> {
        match phase {
            TouchPhase::Start => {
                if self.touches.is_empty() {
                    self.max_touches = 0;
                    self.moved_too_far = false;
                }
                self.touches.insert(id, pos);
                let down = u8::try_from(self.touches.len()).unwrap_or(u8::MAX);
                self.max_touches = self.max_touches.max(down);
                None
            }
            TouchPhase::Move => {
                if self
                    .touches
                    .get(&id)
                    .is_some_and(|start| start.distance(pos) > self.slop)
                {
                    self.moved_too_far = true;
                }
                None
            }
            TouchPhase::End | TouchPhase::Cancel => {
                self.touches.remove(&id)?;
                if phase == TouchPhase::Cancel {
                    self.moved_too_far = true;
                }
                if !self.touches.is_empty() {
                    return None;
                }
                Some(if self.moved_too_far {
                    TapEvent::Invalid { time }
                } else {
                    TapEvent::Tap {
                        touches: self.max_touches,
                        time,
                    }
                })
            }
        }
    }
}
