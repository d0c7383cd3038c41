use egui::{
    Align2, Button, CentralPanel, Color32, Context, Frame, Id, Modal, Pos2, Rect, RichText,
    TextStyle, Ui, Vec2, Window,
};

use crate::dragable_view::{DragableView, FlingContainer, PanelVisibilityListener};
use crate::favorite_factory::{FavoriteButton, FavoriteFactory};
use crate::favorites_view::FavoritesLayout;
use crate::haptics::{HapticFeedback, LogHaptics};
use crate::options::PanelOptions;
use crate::presenter::{Presenter, ViewControllerInput};
use crate::tap::{TapGesture, TapGestureSet, TapInput};

const ADD_BUTTON_OFFSET: f32 = 100.0;
const REMOVE_BUTTON_OFFSET: f32 = 50.0;
const FADE_DURATION: f32 = 0.3;
const ADD_TITLE: &str = "Add another drawing to favorites";
const REMOVE_TITLE: &str = "Remove the last drawing from favorites";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SheetDetent {
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Default)]
struct SecondarySheet {
    open: bool,
    detent: SheetDetent,
}

#[derive(Debug, Default)]
struct HidePrompt {
    open: bool,
}

impl PanelVisibilityListener for HidePrompt {
    fn hide_requested(&mut self) {
        self.open = true;
    }
}

/// Everything the presenter can change on screen.
#[derive(Debug)]
struct Screen {
    dragable_view: DragableView,
    dragable_view_hidden: bool,
    sheet: SecondarySheet,
}

impl Screen {
    /// Centers the panel in `screen_rect`, or puts its top-left corner at `origin`.
    fn layout_dragable_view(&mut self, screen_rect: Rect, origin: Option<Pos2>) {
        let size = self.dragable_view.size_that_fits();
        let origin = origin.unwrap_or(screen_rect.center() - size / 2.0);
        self.dragable_view.set_frame_origin(origin);
    }
}

impl ViewControllerInput for Screen {
    fn set_dragable_view_hidden(&mut self, hidden: bool) {
        self.dragable_view_hidden = hidden;
    }

    fn present(&mut self) {
        self.sheet = SecondarySheet {
            open: true,
            detent: SheetDetent::Medium,
        };
    }

    fn update_favorites_view(&mut self, favorites: Vec<FavoriteButton>) {
        let origin = self.dragable_view.frame().min;
        self.dragable_view.update_favorites_view(favorites);
        self.dragable_view.move_frame_origin(origin);
    }

    fn set_favorites_layout(&mut self, layout: FavoritesLayout) {
        self.dragable_view.set_favorites_layout(layout);
    }
}

/// The demo screen: a white canvas reacting to multi-finger taps, two buttons that add and
/// remove favorites, and the floating panel showing them.
pub struct ViewController {
    options: PanelOptions,
    presenter: Presenter,
    screen: Screen,
    hide_prompt: HidePrompt,
    taps: TapGestureSet,
    tap_input: TapInput,
    haptics: Box<dyn HapticFeedback>,
    last_screen_size: Option<Vec2>,
}

impl ViewController {
    pub fn new(options: PanelOptions) -> Self {
        Self::with_haptics(options, LogHaptics)
    }

    pub fn with_haptics(options: PanelOptions, haptics: impl HapticFeedback + 'static) -> Self {
        Self {
            presenter: Presenter::new(FavoriteFactory::new(), &options),
            screen: Screen {
                dragable_view: DragableView::new(&options),
                dragable_view_hidden: true,
                sheet: SecondarySheet::default(),
            },
            hide_prompt: HidePrompt::default(),
            taps: TapGestureSet::new(options.max_tap_interval),
            tap_input: TapInput::new(options.tap_slop),
            haptics: Box::new(haptics),
            last_screen_size: None,
            options,
        }
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn dragable_view(&self) -> &DragableView {
        &self.screen.dragable_view
    }

    pub fn is_dragable_view_hidden(&self) -> bool {
        self.screen.dragable_view_hidden
    }

    pub fn is_sheet_presented(&self) -> bool {
        self.screen.sheet.open
    }

    pub fn ui(&mut self, ctx: &Context) {
        self.handle_taps(ctx);

        let screen_rect = ctx.screen_rect();
        if self.last_screen_size != Some(screen_rect.size()) {
            log::debug!("screen resized to {:?}, centering panel", screen_rect.size());
            self.last_screen_size = Some(screen_rect.size());
            self.screen.layout_dragable_view(screen_rect, None);
        }

        let container = FlingContainer {
            bounds: screen_rect,
            safe_area: self.options.safe_area,
        };

        CentralPanel::default()
            .frame(Frame::new().fill(Color32::WHITE))
            .show(ctx, |ui| {
                self.favorite_buttons(ui, screen_rect);
                self.dragable_view_ui(ui, &container);
            });

        self.hide_prompt_ui(ctx, &container);
        self.sheet_ui(ctx, screen_rect);

        if self.taps.is_pending() {
            ctx.request_repaint_after_secs(self.options.max_tap_interval as f32);
        }
    }

    fn handle_taps(&mut self, ctx: &Context) {
        let mut gestures: Vec<TapGesture> = Vec::new();
        for event in self.tap_input.collect(ctx) {
            gestures.extend(self.taps.handle(event));
        }
        gestures.extend(self.taps.tick(ctx.input(|i| i.time)));

        for gesture in gestures {
            self.presenter.did_tap(gesture, &mut self.screen);
        }
    }

    fn favorite_buttons(&mut self, ui: &mut Ui, screen_rect: Rect) {
        let center_x = screen_rect.center().x;
        let bottom = screen_rect.max.y;

        let add = button_rect(ui, ADD_TITLE, center_x, bottom - ADD_BUTTON_OFFSET);
        if ui.put(add, red_button(ADD_TITLE)).clicked() {
            self.presenter.did_trigger_add_favorite_button(&mut self.screen);
        }
        let remove = button_rect(ui, REMOVE_TITLE, center_x, bottom - REMOVE_BUTTON_OFFSET);
        if ui.put(remove, red_button(REMOVE_TITLE)).clicked() {
            self.presenter
                .did_trigger_remove_favorite_button(&mut self.screen);
        }
    }

    fn dragable_view_ui(&mut self, ui: &mut Ui, container: &FlingContainer) {
        let now = ui.input(|i| i.time);
        let visibility = ui.ctx().animate_bool_with_time(
            Id::new("egui_dragable_panel_visibility"),
            !self.screen.dragable_view_hidden,
            FADE_DURATION,
        );
        if self.screen.dragable_view_hidden && self.screen.dragable_view.is_dragging() {
            self.screen.dragable_view.cancel_interaction(container, now);
        }
        if visibility <= 0.0 {
            return;
        }

        let response = ui
            .scope(|ui| {
                ui.multiply_opacity(visibility);
                self.screen.dragable_view.ui(
                    ui,
                    container,
                    &mut self.hide_prompt,
                    self.haptics.as_mut(),
                )
            })
            .inner;

        if let Some(order) = response.favorites.reordered {
            self.presenter.did_reorder_favorites(&order);
        }
    }

    fn hide_prompt_ui(&mut self, ctx: &Context, container: &FlingContainer) {
        if !self.hide_prompt.open {
            return;
        }

        let mut confirmed = false;
        let mut cancelled = false;
        let modal = Modal::new(Id::new("egui_dragable_panel_hide_prompt")).show(ctx, |ui| {
            ui.heading("Hide the favorites panel?");
            ui.horizontal(|ui| {
                confirmed = ui.button("Yes").clicked();
                cancelled = ui.button("Cancel").clicked();
            });
        });

        if confirmed {
            let now = ctx.input(|i| i.time);
            self.screen.dragable_view.cancel_interaction(container, now);
            self.presenter
                .set_dragable_view_hidden(true, &mut self.screen);
        }
        if confirmed || cancelled || modal.should_close() {
            self.hide_prompt.open = false;
        }
    }

    fn sheet_ui(&mut self, ctx: &Context, screen_rect: Rect) {
        let SecondarySheet { open, detent } = &mut self.screen.sheet;
        if !*open {
            return;
        }
        let height = match detent {
            SheetDetent::Medium => screen_rect.height() / 2.0,
            SheetDetent::Large => screen_rect.height() - self.options.safe_area.top,
        };
        Window::new("Secondary")
            .open(open)
            .anchor(Align2::CENTER_BOTTOM, Vec2::ZERO)
            .fixed_size(Vec2::new(screen_rect.width(), height))
            .collapsible(false)
            .resizable(false)
            .frame(Frame::window(&ctx.style()).fill(Color32::WHITE))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(detent, SheetDetent::Medium, "Medium");
                    ui.selectable_value(detent, SheetDetent::Large, "Large");
                });
            });
    }
}

fn red_button(text: &str) -> Button<'static> {
    Button::new(RichText::new(text.to_owned()).color(Color32::RED)).frame(false)
}

/// Just large enough for `text`, centered on `center_x`, with its bottom edge at `bottom`.
fn button_rect(ui: &Ui, text: &str, center_x: f32, bottom: f32) -> Rect {
    let font = TextStyle::Button.resolve(ui.style());
    let text_size = ui.fonts(|fonts| {
        fonts
            .layout_no_wrap(text.to_owned(), font, Color32::RED)
            .size()
    });
    let size = (text_size + 2.0 * ui.spacing().button_padding)
        .max(Vec2::new(0.0, ui.spacing().interact_size.y));
    Rect::from_min_size(Pos2::new(center_x - size.x / 2.0, bottom - size.y), size)
}
