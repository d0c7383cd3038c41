use egui::{Align2, FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::animation::{Easing, Tween};
use crate::favorite_factory::{FavoriteButton, FavoriteId};
use crate::geometry::ScaleAbout;
use crate::options::PanelOptions;

pub const BUTTON_SIZE: Vec2 = Vec2::splat(28.0);
pub const SPACING: f32 = 4.0;

/// How favorites are arranged when there are more than fit a single row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FavoritesLayout {
    /// Every favorite on one row.
    #[default]
    SingleRow,

    /// Rows of at most `columns` favorites.
    Wrapped { columns: usize },
}

impl FavoritesLayout {
    fn columns(self, count: usize) -> usize {
        match self {
            Self::SingleRow => count.max(1),
            Self::Wrapped { columns } => columns.max(1),
        }
    }
}

/// A swap performed while dragging: the dragged favorite moved from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Default)]
pub struct FavoritesResponse {
    /// Tag of the favorite that was tapped this frame.
    pub tapped: Option<usize>,

    /// New display order, if a drag reordered the favorites this frame.
    pub reordered: Option<Vec<FavoriteId>>,
}

#[derive(Clone, Copy, Debug)]
struct ButtonDrag {
    id: FavoriteId,
    grab_offset: Vec2,

    /// Local center of the dragged favorite. Only `x` follows the pointer.
    center: Pos2,

    last_swapped: Option<FavoriteId>,
}

#[derive(Clone, Copy, Debug)]
struct Settle {
    id: FavoriteId,
    offset: Tween<Vec2>,
    scale: Tween<f32>,
}

/// A row of favorite buttons that can be reordered by dragging.
///
/// All positions handled here are local to the row's top-left corner.
#[derive(Debug)]
pub struct FavoritesView {
    buttons: Vec<FavoriteButton>,
    layout: FavoritesLayout,
    drag: Option<ButtonDrag>,
    settle: Option<Settle>,
    tolerance: f32,
    drag_scale: f32,
    settle_duration: f32,
}

impl FavoritesView {
    pub fn new(options: &PanelOptions) -> Self {
        Self {
            buttons: Vec::new(),
            layout: FavoritesLayout::SingleRow,
            drag: None,
            settle: None,
            tolerance: options.reorder_tolerance,
            drag_scale: options.reorder_scale,
            settle_duration: options.settle_duration,
        }
    }

    pub fn buttons(&self) -> &[FavoriteButton] {
        &self.buttons
    }

    pub fn order(&self) -> Vec<FavoriteId> {
        self.buttons.iter().map(|b| b.id).collect()
    }

    pub fn layout(&self) -> FavoritesLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: FavoritesLayout) {
        if self.layout != layout {
            log::debug!("favorites layout {:?} -> {layout:?}", self.layout);
            self.layout = layout;
        }
    }

    /// Replaces every rendered favorite.
    ///
    /// Per-button drag state belongs to the old set and is discarded with it.
    pub fn update_favorites_view(&mut self, buttons: Vec<FavoriteButton>) {
        if let Some(drag) = self.drag.take() {
            log::debug!("dropping in-flight drag of {:?} on favorites update", drag.id);
        }
        self.settle = None;
        self.buttons = buttons;
        log::debug!("favorites view now shows {} buttons", self.buttons.len());
    }

    pub fn size_that_fits(&self) -> Vec2 {
        let count = self.buttons.len();
        if count == 0 {
            return Vec2::new(0.0, BUTTON_SIZE.y);
        }
        let columns = self.layout.columns(count).min(count);
        let rows = count.div_ceil(columns);
        Vec2::new(
            columns as f32 * BUTTON_SIZE.x + (columns - 1) as f32 * SPACING,
            rows as f32 * BUTTON_SIZE.y + (rows - 1) as f32 * SPACING,
        )
    }

    fn row_of(&self, index: usize) -> usize {
        index / self.layout.columns(self.buttons.len())
    }

    pub fn slot_center(&self, index: usize) -> Pos2 {
        let columns = self.layout.columns(self.buttons.len());
        let (row, column) = (index / columns, index % columns);
        Pos2::new(
            column as f32 * (BUTTON_SIZE.x + SPACING) + BUTTON_SIZE.x / 2.0,
            row as f32 * (BUTTON_SIZE.y + SPACING) + BUTTON_SIZE.y / 2.0,
        )
    }

    /// Where the favorite at `index` is drawn right now.
    pub fn item_center(&self, index: usize, now: f64) -> Pos2 {
        let slot = self.slot_center(index);
        let Some(button) = self.buttons.get(index) else {
            return slot;
        };
        if let Some(drag) = self.drag.filter(|d| d.id == button.id) {
            return drag.center;
        }
        if let Some(settle) = self.settle.filter(|s| s.id == button.id) {
            return slot + settle.offset.value_at(now);
        }
        slot
    }

    pub fn item_scale(&self, id: FavoriteId, now: f64) -> f32 {
        if self.drag.is_some_and(|d| d.id == id) {
            return self.drag_scale;
        }
        match self.settle {
            Some(settle) if settle.id == id => settle.scale.value_at(now),
            _ => 1.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.settle.is_some()
    }

    /// Reorder drags only start on horizontal-dominant motion.
    pub fn should_begin_drag(motion: Vec2) -> bool {
        motion.x.abs() > motion.y.abs()
    }

    pub fn drag_began(&mut self, id: FavoriteId, pointer: Pos2) -> bool {
        let Some(index) = self.buttons.iter().position(|b| b.id == id) else {
            return false;
        };
        let center = self.slot_center(index);
        self.drag = Some(ButtonDrag {
            id,
            grab_offset: pointer - center,
            center,
            last_swapped: None,
        });
        if self.settle.is_some_and(|s| s.id == id) {
            self.settle = None;
        }
        log::debug!("favorite drag began id={id:?} index={index}");
        true
    }

    /// Moves the dragged favorite horizontally and swaps it with the first neighbor whose
    /// midpoint is within tolerance.
    pub fn drag_changed(&mut self, pointer: Pos2) -> Option<Reorder> {
        let mut drag = self.drag?;
        let frame = Rect::from_min_size(Pos2::ZERO, self.size_that_fits());
        if !frame.contains(pointer) {
            return None;
        }
        let from = self.buttons.iter().position(|b| b.id == drag.id)?;

        drag.center.x = pointer.x - drag.grab_offset.x;

        let row = self.row_of(from);
        let hit = (0..self.buttons.len())
            .filter(|&i| i != from && self.row_of(i) == row)
            .find(|&i| (self.slot_center(i).x - drag.center.x).abs() <= self.tolerance);

        let mut reorder = None;
        match hit {
            None => drag.last_swapped = None,
            Some(to) if drag.last_swapped == Some(self.buttons[to].id) => {}
            Some(to) => {
                self.buttons.swap(from, to);
                drag.last_swapped = Some(self.buttons[from].id);
                log::debug!("favorite {:?} swapped {from} -> {to}", drag.id);
                reorder = Some(Reorder { from, to });
            }
        }

        self.drag = Some(drag);
        reorder
    }

    /// Ends (or cancels) the current drag and lets the favorite settle into its slot.
    pub fn drag_ended(&mut self, now: f64) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let Some(index) = self.buttons.iter().position(|b| b.id == drag.id) else {
            return;
        };
        let offset = drag.center - self.slot_center(index);
        self.settle = Some(Settle {
            id: drag.id,
            offset: Tween::new(offset, Vec2::ZERO, now, self.settle_duration)
                .with_easing(Easing::EaseOut),
            scale: Tween::new(self.drag_scale, 1.0, now, self.settle_duration),
        });
        log::debug!("favorite drag ended id={:?} index={index}", drag.id);
    }

    fn advance(&mut self, now: f64) {
        if self.settle.is_some_and(|s| s.offset.is_finished(now)) {
            self.settle = None;
        }
    }

    /// Draws the row with its top-left corner at `origin`, transformed by `transform`.
    pub fn ui(
        &mut self,
        ui: &mut Ui,
        origin: Pos2,
        transform: ScaleAbout,
        opacity: f32,
    ) -> FavoritesResponse {
        let now = ui.input(|i| i.time);
        self.advance(now);

        let to_local = |p: Pos2| transform.invert(p) - origin.to_vec2();
        let mut response = FavoritesResponse::default();
        let mut drag_pointer = None;
        let mut drag_stopped = false;
        let mut drag_seen = false;
        let mut on_top = None;

        for index in 0..self.buttons.len() {
            let button = self.buttons[index];
            let scale = self.item_scale(button.id, now);
            let local = Rect::from_center_size(self.item_center(index, now), BUTTON_SIZE * scale);
            let rect = transform.apply_rect(local.translate(origin.to_vec2()));

            let id = egui::Id::new(("egui_dragable_panel_favorite", button.id.to_u64()));
            let resp = ui.interact(rect, id, Sense::click_and_drag());

            if resp.clicked() {
                log::info!("favorite tapped tag={}", button.tag);
                response.tapped = Some(button.tag);
            }

            if resp.drag_started() && !self.is_dragging() {
                let motion = ui.input(|i| {
                    let velocity = i.pointer.velocity();
                    if velocity != Vec2::ZERO {
                        return velocity;
                    }
                    match (i.pointer.press_origin(), i.pointer.interact_pos()) {
                        (Some(start), Some(current)) => current - start,
                        _ => Vec2::ZERO,
                    }
                });
                if Self::should_begin_drag(motion)
                    && let Some(pointer) = resp.interact_pointer_pos()
                {
                    self.drag_began(button.id, to_local(pointer));
                }
            }

            if self.drag.is_some_and(|d| d.id == button.id) {
                if resp.dragged() {
                    drag_seen = true;
                    drag_pointer = resp.interact_pointer_pos();
                }
                if resp.drag_stopped() {
                    drag_seen = true;
                    drag_stopped = true;
                }
            }

            let alpha = if resp.is_pointer_button_down_on() {
                button.highlight_alpha
            } else {
                1.0
            };
            let painted = (rect, button, alpha * opacity);
            if self.drag.is_some_and(|d| d.id == button.id) {
                on_top = Some(painted);
            } else {
                paint_button(ui, painted);
            }
        }

        if let Some(painted) = on_top {
            paint_button(ui, painted);
        }

        if let Some(pointer) = drag_pointer
            && self.drag_changed(to_local(pointer)).is_some()
        {
            response.reordered = Some(self.order());
        }
        if drag_stopped || (self.is_dragging() && !drag_seen) {
            self.drag_ended(now);
        }

        if self.is_dragging() || self.is_animating() {
            ui.ctx().request_repaint();
        }

        response
    }
}

fn paint_button(ui: &Ui, (rect, button, alpha): (Rect, FavoriteButton, f32)) {
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        button.icon.glyph(),
        FontId::proportional(rect.height() * 0.7),
        button.tint.gamma_multiply(alpha),
    );
}

#[cfg(test)]
mod reorder_tests;
