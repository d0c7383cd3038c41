mod long_press;
mod pan_gesture;

pub use long_press::LongPressRecognizer;
pub use pan_gesture::{
    DragablePanGesture, Fling, FlingContainer, PanPhase, PanelState, fling_destination,
};

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::favorite_factory::FavoriteButton;
use crate::favorites_view::{FavoritesLayout, FavoritesResponse, FavoritesView};
use crate::geometry::ScaleAbout;
use crate::haptics::{HapticFeedback, ImpactStyle};
use crate::options::PanelOptions;

const INSET_LEFT: f32 = 10.0;
const INSET_RIGHT: f32 = 10.0;
const INSET_VERTICAL: f32 = 6.0;
const ICON_SIZE: f32 = 28.0;
const SPACING: f32 = 4.0;
const HEIGHT: f32 = 50.0;
const CORNER_RADIUS: f32 = 12.0;
const ICON_GLYPH: &str = "▦";

/// Told when the user asks to hide the panel (long press on it).
pub trait PanelVisibilityListener {
    fn hide_requested(&mut self);
}

#[derive(Debug, Default)]
pub struct DragableViewResponse {
    pub favorites: FavoritesResponse,
    pub hide_requested: bool,
}

/// The floating panel: a leading icon followed by the favorites row.
///
/// The panel can be dragged anywhere in its container and is flung to rest on release. Holding
/// it asks the [`PanelVisibilityListener`] to confirm hiding it.
#[derive(Debug)]
pub struct DragableView {
    favorites_view: FavoritesView,
    state: PanelState,
    pan: DragablePanGesture,
    long_press: LongPressRecognizer,
}

impl DragableView {
    pub fn new(options: &PanelOptions) -> Self {
        Self {
            favorites_view: FavoritesView::new(options),
            state: PanelState::new(Pos2::ZERO, options.rest_opacity),
            pan: DragablePanGesture::new(options),
            long_press: LongPressRecognizer::new(
                options.long_press_duration,
                options.long_press_allowable_movement,
            ),
        }
    }

    pub fn favorites_view(&self) -> &FavoritesView {
        &self.favorites_view
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn update_favorites_view(&mut self, buttons: Vec<FavoriteButton>) {
        self.favorites_view.update_favorites_view(buttons);
    }

    pub fn set_favorites_layout(&mut self, layout: FavoritesLayout) {
        self.favorites_view.set_layout(layout);
    }

    pub fn size_that_fits(&self) -> Vec2 {
        let favorites = self.favorites_view.size_that_fits();
        Vec2::new(
            INSET_LEFT + ICON_SIZE + SPACING + favorites.x + INSET_RIGHT,
            HEIGHT.max(favorites.y + 2.0 * INSET_VERTICAL),
        )
    }

    /// Unscaled frame in container coordinates.
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.state.center, self.size_that_fits())
    }

    pub fn set_frame_origin(&mut self, origin: Pos2) {
        self.state.set_center(origin + self.size_that_fits() / 2.0);
    }

    /// Puts the top-left corner at `origin` without interrupting a running fling, which lands
    /// shifted by the same amount.
    pub fn move_frame_origin(&mut self, origin: Pos2) {
        let delta = origin - self.frame().min;
        self.state.translate(delta);
    }

    pub fn is_dragging(&self) -> bool {
        self.pan.is_active()
    }

    /// Aborts an in-flight pan, e.g. because the panel is being hidden.
    pub fn cancel_interaction(&mut self, container: &FlingContainer, now: f64) {
        if self.pan.is_active() {
            let half_size = self.size_that_fits() / 2.0;
            self.pan
                .touches_cancelled(half_size, container, &mut self.state, now);
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut Ui,
        container: &FlingContainer,
        listener: &mut dyn PanelVisibilityListener,
        haptics: &mut dyn HapticFeedback,
    ) -> DragableViewResponse {
        let now = ui.input(|i| i.time);
        let animating = self.state.advance(now);

        let frame = self.frame();
        let transform = ScaleAbout::new(frame.center(), self.state.scale);
        let panel_rect = transform.apply_rect(frame);
        let response = ui.interact(
            panel_rect,
            egui::Id::new("egui_dragable_panel"),
            Sense::drag(),
        );

        {
            let painter = ui.painter();
            painter.rect_filled(
                panel_rect,
                CORNER_RADIUS * self.state.scale,
                Color32::LIGHT_GRAY.gamma_multiply(self.state.opacity),
            );
            let icon_center =
                frame.min + Vec2::new(INSET_LEFT + ICON_SIZE / 2.0, frame.height() / 2.0);
            painter.text(
                transform.apply(icon_center),
                Align2::CENTER_CENTER,
                ICON_GLYPH,
                FontId::proportional(ICON_SIZE * 0.8 * self.state.scale),
                Color32::BLACK,
            );
        }

        let favorites_size = self.favorites_view.size_that_fits();
        let favorites_origin = frame.min
            + Vec2::new(
                INSET_LEFT + ICON_SIZE + SPACING,
                (frame.height() - favorites_size.y) / 2.0,
            );
        let favorites = self.favorites_view.ui(ui, favorites_origin, transform, 1.0);

        let half_size = self.size_that_fits() / 2.0;
        if response.drag_started()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            self.pan
                .touches_began(pointer, &mut self.state, now, haptics);
        }
        if response.dragged()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            self.pan.touches_moved(pointer, &mut self.state);
        }
        if response.drag_stopped() {
            let velocity = ui.input(|i| i.pointer.velocity());
            self.pan
                .touches_ended(velocity, half_size, container, &mut self.state, now);
        } else if self.pan.is_active() && !response.dragged() {
            self.pan
                .touches_cancelled(half_size, container, &mut self.state, now);
        }

        let mut hide_requested = false;
        let pressed_at = if response.is_pointer_button_down_on() {
            response.interact_pointer_pos()
        } else {
            None
        };
        if self.long_press.update(pressed_at, now) {
            log::info!("long press on panel: asking to hide it");
            haptics.impact(ImpactStyle::Medium);
            listener.hide_requested();
            hide_requested = true;
        }
        if let Some(remaining) = self.long_press.time_remaining(now) {
            ui.ctx().request_repaint_after_secs(remaining as f32);
        }

        if animating || self.pan.is_active() {
            ui.ctx().request_repaint();
        }

        DragableViewResponse {
            favorites,
            hide_requested,
        }
    }
}
