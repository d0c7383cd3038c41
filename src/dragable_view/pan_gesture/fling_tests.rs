use egui::{Pos2, Rect, Vec2, pos2, vec2};

use super::{DragablePanGesture, FlingContainer, PanPhase, PanelState, fling_destination};
use crate::haptics::{HapticFeedback, ImpactStyle};
use crate::options::{PanelOptions, SafeAreaInsets};

#[derive(Default)]
struct RecordingHaptics(Vec<ImpactStyle>);

impl HapticFeedback for RecordingHaptics {
    fn impact(&mut self, style: ImpactStyle) {
        self.0.push(style);
    }
}

fn container() -> FlingContainer {
    FlingContainer {
        bounds: Rect::from_min_size(Pos2::ZERO, vec2(400.0, 800.0)),
        safe_area: SafeAreaInsets {
            top: 47.0,
            bottom: 34.0,
        },
    }
}

const HALF: Vec2 = vec2(60.0, 25.0);

fn assert_inside(target: Pos2, container: &FlingContainer) {
    let b = container.bounds;
    assert!(
        target.x >= b.min.x + HALF.x && target.x <= b.max.x - HALF.x,
        "x out of range: {target:?}"
    );
    assert!(
        target.y >= b.min.y + container.safe_area.top + HALF.y
            && target.y <= b.max.y - container.safe_area.bottom - HALF.y,
        "y out of range: {target:?}"
    );
}

#[test]
fn zero_velocity_lands_on_clamped_center() {
    let options = PanelOptions::default();
    let c = container();

    let inside = fling_destination(pos2(200.0, 400.0), Vec2::ZERO, HALF, &c, &options);
    assert_eq!(inside.target, pos2(200.0, 400.0));
    assert_eq!(inside.duration, 0.0);

    let outside = fling_destination(pos2(-30.0, 10.0), Vec2::ZERO, HALF, &c, &options);
    assert_eq!(outside.target, pos2(60.0, 72.0));
}

#[test]
fn slide_factor_scales_with_release_speed() {
    let options = PanelOptions::default();
    let c = container();

    // |v| = 200 -> slide factor 0.1: travels 20pt in 0.2s.
    let slow = fling_destination(pos2(200.0, 400.0), vec2(200.0, 0.0), HALF, &c, &options);
    assert!((slow.target.x - 220.0).abs() < 1e-3);
    assert!((slow.duration - 0.2).abs() < 1e-6);

    // |v| = 500 -> slide factor 0.25: (300, 400) * 0.25 = (75, 100).
    let diagonal = fling_destination(pos2(200.0, 400.0), vec2(300.0, 400.0), HALF, &c, &options);
    assert!((diagonal.target - pos2(275.0, 500.0)).length() < 1e-3);
    assert!((diagonal.duration - 0.5).abs() < 1e-6);
}

#[test]
fn fast_fling_is_clamped_to_the_container() {
    let options = PanelOptions::default();
    let c = container();
    let fling = fling_destination(pos2(200.0, 400.0), vec2(1000.0, 0.0), HALF, &c, &options);
    assert_eq!(fling.target, pos2(340.0, 400.0));
    assert!((fling.duration - 1.0).abs() < 1e-6);
}

#[test]
fn landing_point_stays_inside_for_any_velocity() {
    let options = PanelOptions::default();
    let c = container();
    let speeds = [-4000.0, -900.0, -1.0, 0.0, 1.0, 250.0, 3000.0];
    for &vx in &speeds {
        for &vy in &speeds {
            for center in [pos2(0.0, 0.0), pos2(200.0, 400.0), pos2(390.0, 790.0)] {
                let fling = fling_destination(center, vec2(vx, vy), HALF, &c, &options);
                assert_inside(fling.target, &c);
            }
        }
    }
}

#[test]
fn press_moves_and_flings_the_panel() {
    let options = PanelOptions::default();
    let c = container();
    let mut haptics = RecordingHaptics::default();
    let mut panel = PanelState::new(pos2(100.0, 100.0), options.rest_opacity);
    let mut pan = DragablePanGesture::new(&options);

    pan.touches_began(pos2(150.0, 120.0), &mut panel, 0.0, &mut haptics);
    assert!(pan.is_active());
    assert_eq!(haptics.0, vec![ImpactStyle::Medium]);

    panel.advance(0.5);
    assert_eq!(panel.scale, options.pressed_scale);
    assert_eq!(panel.opacity, 1.0);

    // Absolute tracking: the grab offset is kept, deltas are not accumulated.
    pan.touches_moved(pos2(200.0, 300.0), &mut panel);
    assert_eq!(panel.center, pos2(150.0, 280.0));
    pan.touches_moved(pos2(210.0, 300.0), &mut panel);
    assert_eq!(panel.center, pos2(160.0, 280.0));
    assert_eq!(pan.phase(), Some(PanPhase::Moved));

    let fling = pan.touches_ended(Vec2::ZERO, HALF, &c, &mut panel, 1.0);
    assert!(!pan.is_active());
    assert_eq!(fling.target, pos2(160.0, 280.0));

    assert!(!panel.advance(1.0));
    assert_eq!(panel.scale, 1.0);
    assert_eq!(panel.opacity, options.rest_opacity);
}

#[test]
fn fling_animates_towards_the_target() {
    let options = PanelOptions::default();
    let c = container();
    let mut panel = PanelState::new(pos2(200.0, 400.0), options.rest_opacity);
    let mut pan = DragablePanGesture::new(&options);
    pan.touches_began(pos2(200.0, 400.0), &mut panel, 0.0, &mut RecordingHaptics::default());

    let fling = pan.touches_ended(vec2(0.0, 400.0), HALF, &c, &mut panel, 1.0);
    assert!((fling.duration - 0.4).abs() < 1e-6);

    assert!(panel.advance(1.2));
    assert!(panel.center.y > 400.0 && panel.center.y < fling.target.y);
    assert!(!panel.advance(1.5));
    assert_eq!(panel.center, fling.target);
}

#[test]
fn move_without_began_is_ignored() {
    let options = PanelOptions::default();
    let mut panel = PanelState::new(pos2(100.0, 100.0), options.rest_opacity);
    let mut pan = DragablePanGesture::new(&options);
    pan.touches_moved(pos2(300.0, 300.0), &mut panel);
    assert_eq!(panel.center, pos2(100.0, 100.0));
    assert_eq!(pan.phase(), None);
}

#[test]
fn cancel_restores_the_resting_look_inside_the_container() {
    let options = PanelOptions::default();
    let c = container();
    let mut panel = PanelState::new(pos2(200.0, 400.0), options.rest_opacity);
    let mut pan = DragablePanGesture::new(&options);

    pan.touches_began(pos2(200.0, 400.0), &mut panel, 0.0, &mut RecordingHaptics::default());
    panel.advance(0.5);
    pan.touches_moved(pos2(-100.0, 20.0), &mut panel);

    pan.touches_cancelled(HALF, &c, &mut panel, 0.5);
    assert!(!pan.is_active());
    assert_eq!(pan.phase(), Some(PanPhase::Cancelled));

    assert!(!panel.advance(5.0));
    assert_eq!(panel.scale, 1.0);
    assert_eq!(panel.opacity, options.rest_opacity);
    assert_eq!(panel.center, pos2(60.0, 72.0));
}
