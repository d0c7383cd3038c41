#![forbid(unsafe_code)]

pub mod animation;
pub mod dragable_view;
pub mod favorite_factory;
pub mod favorites_view;
pub mod geometry;
pub mod haptics;
pub mod options;
pub mod presenter;
pub mod tap;
pub mod view_controller;

pub use dragable_view::{DragableView, DragableViewResponse, PanelVisibilityListener};
pub use favorite_factory::{
    FavoriteButton, FavoriteFactory, FavoriteIcon, FavoriteId, FavoritesError,
};
pub use favorites_view::{FavoritesLayout, FavoritesResponse, FavoritesView, Reorder};
pub use haptics::{HapticFeedback, ImpactStyle, LogHaptics};
pub use options::{PanelOptions, SafeAreaInsets};
pub use presenter::{Presenter, ViewControllerInput};
pub use tap::{GestureDisambiguationPolicy, TapGesture, TapGestureSet};
pub use view_controller::{SheetDetent, ViewController};
