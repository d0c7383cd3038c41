use egui::Color32;
use itertools::Itertools as _;
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// Stable identity of a favorite, unique for the lifetime of a [`FavoriteFactory`].
///
/// Unlike [`FavoriteButton::tag`], ids never collide: tags are handed out from the current list
/// length, so reordering followed by removing the last favorite can produce a duplicate tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FavoriteId(u64);

impl FavoriteId {
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    pub fn to_u64(self) -> u64 {
        self.0
    }
}

/// The fixed icon set favorites are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteIcon {
    CloudFog,
    Grid,
    AirQuality,
    Drizzle,
    DrizzleCircle,
    CloudBolt,
    Thermometer,
    Share,
}

impl FavoriteIcon {
    pub const ALL: [Self; 8] = [
        Self::CloudFog,
        Self::Grid,
        Self::AirQuality,
        Self::Drizzle,
        Self::DrizzleCircle,
        Self::CloudBolt,
        Self::Thermometer,
        Self::Share,
    ];

    /// Glyph from egui's bundled emoji/icon fonts.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::CloudFog => "🌫",
            Self::Grid => "▦",
            Self::AirQuality => "〰",
            Self::Drizzle => "🌧",
            Self::DrizzleCircle => "☔",
            Self::CloudBolt => "🌩",
            Self::Thermometer => "🌡",
            Self::Share => "⮉",
        }
    }
}

/// A single favorite as handed out by the [`FavoriteFactory`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FavoriteButton {
    pub id: FavoriteId,

    /// Display index at creation time. Never renumbered.
    pub tag: usize,

    pub icon: FavoriteIcon,
    pub tint: Color32,

    /// Opacity of the button while it is pressed.
    pub highlight_alpha: f32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FavoritesError {
    Empty,
    OrderMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "there is no favorite to remove"),
            Self::OrderMismatch { expected, found } => write!(
                f,
                "favorite order is not a permutation of the current favorites \
                 ({found} ids for {expected} favorites)"
            ),
        }
    }
}

impl std::error::Error for FavoritesError {}

/// Owns the ordered list of favorites.
///
/// Every mutating call returns a snapshot of the whole list, never a view into it.
#[derive(Debug)]
pub struct FavoriteFactory {
    favorites: Vec<FavoriteButton>,
    next_id: u64,
    rng: StdRng,
}

impl Default for FavoriteFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoriteFactory {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// A factory whose icon choices are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            favorites: Vec::new(),
            next_id: 1,
            rng,
        }
    }

    pub fn favorites(&self) -> Vec<FavoriteButton> {
        self.favorites.clone()
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn add_next_favorite(&mut self) -> Vec<FavoriteButton> {
        let button = self.create_button();
        log::debug!("add favorite id={:?} tag={}", button.id, button.tag);
        self.favorites.push(button);
        self.favorites()
    }

    /// Removes the last favorite. On an empty list nothing happens and an empty snapshot is
    /// returned.
    pub fn remove_last_favorite(&mut self) -> Vec<FavoriteButton> {
        match self.try_remove_last_favorite() {
            Ok(favorites) => favorites,
            Err(err) => {
                log::warn!("remove_last_favorite: {err}");
                self.favorites()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`FavoritesError::Empty`] if there is nothing to remove.
    pub fn try_remove_last_favorite(&mut self) -> Result<Vec<FavoriteButton>, FavoritesError> {
        let removed = self.favorites.pop().ok_or(FavoritesError::Empty)?;
        log::debug!("remove favorite id={:?} tag={}", removed.id, removed.tag);
        Ok(self.favorites())
    }

    /// Reorders the favorites to match `order`, e.g. after the user dragged one into a new slot.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::OrderMismatch`] unless `order` is a permutation of the current
    /// ids. The list is left untouched in that case.
    pub fn apply_order(
        &mut self,
        order: &[FavoriteId],
    ) -> Result<Vec<FavoriteButton>, FavoritesError> {
        let mismatch = FavoritesError::OrderMismatch {
            expected: self.favorites.len(),
            found: order.len(),
        };
        if order.len() != self.favorites.len() || !order.iter().all_unique() {
            return Err(mismatch);
        }

        let mut reordered = Vec::with_capacity(order.len());
        for id in order {
            let Some(button) = self.favorites.iter().find(|b| b.id == *id) else {
                return Err(mismatch);
            };
            reordered.push(*button);
        }
        self.favorites = reordered;
        Ok(self.favorites())
    }

    fn create_button(&mut self) -> FavoriteButton {
        let id = FavoriteId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        let icon = FavoriteIcon::ALL[self.rng.random_range(0..FavoriteIcon::ALL.len())];

        FavoriteButton {
            id,
            tag: self.favorites.len(),
            icon,
            tint: Color32::BLACK,
            highlight_alpha: 0.5,
        }
    }
}
