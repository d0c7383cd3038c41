use egui::{Pos2, Rect, Vec2};

use crate::options::SafeAreaInsets;

/// Uniform scale around a pivot, used to draw (and hit-test) a pressed panel and its contents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleAbout {
    pub pivot: Pos2,
    pub scale: f32,
}

impl ScaleAbout {
    pub const IDENTITY: Self = Self {
        pivot: Pos2::ZERO,
        scale: 1.0,
    };

    pub fn new(pivot: Pos2, scale: f32) -> Self {
        Self { pivot, scale }
    }

    pub fn apply(&self, pos: Pos2) -> Pos2 {
        self.pivot + (pos - self.pivot) * self.scale
    }

    pub fn apply_rect(&self, rect: Rect) -> Rect {
        Rect::from_center_size(self.apply(rect.center()), rect.size() * self.scale)
    }

    pub fn invert(&self, pos: Pos2) -> Pos2 {
        if self.scale == 0.0 {
            return self.pivot;
        }
        self.pivot + (pos - self.pivot) / self.scale
    }
}

/// Clamps a view center so the whole view stays inside `bounds`.
///
/// The vertical range is shrunk by the safe-area insets, the horizontal range is not. If a range
/// is inverted (the view is larger than the space available) the lower bound wins.
pub fn clamp_center(
    center: Pos2,
    half_size: Vec2,
    bounds: Rect,
    safe_area: SafeAreaInsets,
) -> Pos2 {
    let min_x = bounds.min.x + half_size.x;
    let max_x = (bounds.max.x - half_size.x).max(min_x);
    let min_y = bounds.min.y + safe_area.top + half_size.y;
    let max_y = (bounds.max.y - safe_area.bottom - half_size.y).max(min_y);
    egui::pos2(center.x.clamp(min_x, max_x), center.y.clamp(min_y, max_y))
}
