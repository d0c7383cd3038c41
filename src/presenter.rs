use crate::favorite_factory::{FavoriteButton, FavoriteFactory, FavoriteId};
use crate::favorites_view::FavoritesLayout;
use crate::options::PanelOptions;
use crate::tap::TapGesture;

/// What the [`Presenter`] can ask of the screen it drives.
pub trait ViewControllerInput {
    fn set_dragable_view_hidden(&mut self, hidden: bool);

    /// Shows the secondary sheet.
    fn present(&mut self);

    fn update_favorites_view(&mut self, favorites: Vec<FavoriteButton>);

    fn set_favorites_layout(&mut self, layout: FavoritesLayout);
}

/// Turns user intents into model changes and view updates.
#[derive(Debug)]
pub struct Presenter {
    favorite_factory: FavoriteFactory,
    max_single_row: usize,
}

impl Presenter {
    pub fn new(favorite_factory: FavoriteFactory, options: &PanelOptions) -> Self {
        Self {
            favorite_factory,
            max_single_row: options.max_single_row_favorites,
        }
    }

    pub fn favorite_factory(&self) -> &FavoriteFactory {
        &self.favorite_factory
    }

    pub fn did_tap(&mut self, gesture: TapGesture, view: &mut dyn ViewControllerInput) {
        match gesture {
            TapGesture::OneFingerTwoTaps => {
                log::info!("double tap: showing panel");
                view.set_dragable_view_hidden(false);
            }
            TapGesture::OneFingerThreeTaps => {
                log::info!("triple tap: hiding panel");
                view.set_dragable_view_hidden(true);
            }
            TapGesture::TwoFingersTwoTaps => {
                log::info!("two-finger double tap: presenting secondary screen");
                view.present();
            }
            TapGesture::TwoFingersThreeTaps => {
                log::debug!("two-finger triple tap has no action");
            }
            TapGesture::NotRecognized => {}
        }
    }

    pub fn did_trigger_add_favorite_button(&mut self, view: &mut dyn ViewControllerInput) {
        let favorites = self.favorite_factory.add_next_favorite();
        self.push_favorites(favorites, view);
    }

    pub fn did_trigger_remove_favorite_button(&mut self, view: &mut dyn ViewControllerInput) {
        match self.favorite_factory.try_remove_last_favorite() {
            Ok(favorites) => self.push_favorites(favorites, view),
            Err(err) => log::warn!("cannot remove favorite: {err}"),
        }
    }

    pub fn set_dragable_view_hidden(&mut self, hidden: bool, view: &mut dyn ViewControllerInput) {
        view.set_dragable_view_hidden(hidden);
    }

    /// Keeps the model in the order the user dragged the favorites into.
    pub fn did_reorder_favorites(&mut self, order: &[FavoriteId]) {
        if let Err(err) = self.favorite_factory.apply_order(order) {
            log::warn!("ignoring reorder: {err}");
        }
    }

    fn push_favorites(&self, favorites: Vec<FavoriteButton>, view: &mut dyn ViewControllerInput) {
        let layout = if favorites.len() > self.max_single_row {
            FavoritesLayout::Wrapped {
                columns: self.max_single_row,
            }
        } else {
            FavoritesLayout::SingleRow
        };
        view.set_favorites_layout(layout);
        view.update_favorites_view(favorites);
    }
}
