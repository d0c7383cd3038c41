use egui::{Pos2, Vec2, pos2, vec2};

use super::{FavoritesLayout, FavoritesView, Reorder};
use crate::favorite_factory::{FavoriteButton, FavoriteFactory, FavoriteId};
use crate::options::PanelOptions;

fn favorites(count: usize) -> Vec<FavoriteButton> {
    let mut factory = FavoriteFactory::with_seed(11);
    for _ in 0..count {
        factory.add_next_favorite();
    }
    factory.favorites()
}

fn view_with(count: usize, options: &PanelOptions) -> (FavoritesView, Vec<FavoriteId>) {
    let mut view = FavoritesView::new(options);
    view.update_favorites_view(favorites(count));
    let ids = view.order();
    (view, ids)
}

#[test]
fn size_tracks_button_count() {
    let options = PanelOptions::default();
    let (empty, _) = view_with(0, &options);
    assert_eq!(empty.size_that_fits(), vec2(0.0, 28.0));

    let (three, _) = view_with(3, &options);
    assert_eq!(three.size_that_fits(), vec2(92.0, 28.0));
}

#[test]
fn wrapped_layout_grows_downwards() {
    let (mut view, _) = view_with(9, &PanelOptions::default());
    view.set_layout(FavoritesLayout::Wrapped { columns: 7 });
    assert_eq!(view.size_that_fits(), vec2(220.0, 60.0));
    assert_eq!(view.slot_center(7), pos2(14.0, 46.0));
}

#[test]
fn drags_only_begin_on_horizontal_motion() {
    assert!(FavoritesView::should_begin_drag(vec2(10.0, 2.0)));
    assert!(FavoritesView::should_begin_drag(vec2(-10.0, 9.0)));
    assert!(!FavoritesView::should_begin_drag(vec2(2.0, 10.0)));
    assert!(!FavoritesView::should_begin_drag(Vec2::ZERO));
}

#[test]
fn crossing_a_neighbor_swaps_exactly_once() {
    let (mut view, ids) = view_with(3, &PanelOptions::default());
    assert!(view.drag_began(ids[0], pos2(14.0, 14.0)));

    assert_eq!(view.drag_changed(pos2(30.0, 14.0)), None);
    assert_eq!(
        view.drag_changed(pos2(42.0, 14.0)),
        Some(Reorder { from: 0, to: 1 })
    );
    assert_eq!(view.order(), vec![ids[1], ids[0], ids[2]]);

    // Still hovering the same spot: no second swap.
    assert_eq!(view.drag_changed(pos2(43.0, 14.0)), None);
    assert_eq!(view.order(), vec![ids[1], ids[0], ids[2]]);
}

#[test]
fn same_neighbor_is_not_reswapped_until_tolerance_is_left() {
    let options = PanelOptions {
        reorder_tolerance: 40.0,
        ..Default::default()
    };
    let (mut view, ids) = view_with(2, &options);
    assert!(view.drag_began(ids[0], pos2(14.0, 14.0)));

    assert_eq!(
        view.drag_changed(pos2(20.0, 14.0)),
        Some(Reorder { from: 0, to: 1 })
    );
    assert_eq!(view.drag_changed(pos2(21.0, 14.0)), None);
    assert_eq!(view.order(), vec![ids[1], ids[0]]);

    // Leave the tolerance of every neighbor, then come back.
    assert_eq!(view.drag_changed(pos2(59.0, 14.0)), None);
    assert_eq!(
        view.drag_changed(pos2(20.0, 14.0)),
        Some(Reorder { from: 1, to: 0 })
    );
    assert_eq!(view.order(), ids);
}

#[test]
fn pointer_outside_the_row_is_ignored() {
    let (mut view, ids) = view_with(3, &PanelOptions::default());
    assert!(view.drag_began(ids[1], pos2(50.0, 10.0)));

    assert_eq!(view.drag_changed(pos2(200.0, 14.0)), None);
    assert_eq!(view.item_center(1, 0.0), pos2(46.0, 14.0));
}

#[test]
fn vertical_pointer_motion_is_ignored() {
    let (mut view, ids) = view_with(3, &PanelOptions::default());
    assert!(view.drag_began(ids[1], pos2(46.0, 14.0)));
    view.drag_changed(pos2(55.0, 27.0));
    assert_eq!(view.item_center(1, 0.0), pos2(55.0, 14.0));
}

#[test]
fn dropped_favorite_settles_into_its_slot() {
    let options = PanelOptions::default();
    let (mut view, ids) = view_with(3, &options);
    assert!(view.drag_began(ids[2], pos2(78.0, 14.0)));
    view.drag_changed(pos2(70.0, 14.0));
    assert_eq!(view.item_scale(ids[2], 0.0), options.reorder_scale);

    view.drag_ended(1.0);
    assert!(!view.is_dragging());
    assert!(view.is_animating());
    assert_eq!(view.item_center(2, 1.0), pos2(70.0, 14.0));
    assert_eq!(view.item_center(2, 2.0), pos2(78.0, 14.0));
    assert_eq!(view.item_scale(ids[2], 2.0), 1.0);
}

#[test]
fn updating_favorites_drops_the_active_drag() {
    let (mut view, ids) = view_with(3, &PanelOptions::default());
    assert!(view.drag_began(ids[0], pos2(14.0, 14.0)));
    view.update_favorites_view(favorites(2));
    assert!(!view.is_dragging());
    assert_eq!(view.drag_changed(pos2(42.0, 14.0)), None);
}

#[test]
fn unknown_favorite_cannot_be_dragged() {
    let (mut view, _) = view_with(2, &PanelOptions::default());
    assert!(!view.drag_began(FavoriteId::from_u64(404), Pos2::ZERO));
}

#[test]
fn wrapped_rows_only_reorder_within_their_row() {
    let (mut view, ids) = view_with(9, &PanelOptions::default());
    view.set_layout(FavoritesLayout::Wrapped { columns: 7 });
    assert!(view.drag_began(ids[7], pos2(14.0, 46.0)));

    // Index 0 sits right above at x = 14 but lives on the first row.
    assert_eq!(view.drag_changed(pos2(15.0, 46.0)), None);
    assert_eq!(
        view.drag_changed(pos2(44.0, 46.0)),
        Some(Reorder { from: 7, to: 8 })
    );
    assert_eq!(view.order()[..7], ids[..7]);
}
