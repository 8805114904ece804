use term_desk::apps::AppId;
use term_desk::constants::TOP_BAR_HEIGHT;
use term_desk::geometry::{SnapSide, Viewport};
use term_desk::window::{Bounds, CycleDirection, OpenOptions, SnapState, WindowManager};

fn wm() -> WindowManager {
    WindowManager::new(Viewport::new(120, 40))
}

#[test]
fn open_sequences_yield_unique_ids_and_increasing_z() {
    let mut m = wm();
    let mut ids = Vec::new();
    let mut zs = Vec::new();
    for app in [
        AppId::About,
        AppId::Projects,
        AppId::Contact,
        AppId::MediaViewer,
        AppId::Snake,
    ] {
        let id = m.open(app, OpenOptions::default());
        ids.push(id);
        zs.push(m.get(id).unwrap().z);
    }
    for (i, id) in ids.iter().enumerate() {
        assert!(!ids[i + 1..].contains(id));
    }
    assert!(zs.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn z_values_are_never_reused_after_close() {
    let mut m = wm();
    let a = m.open(AppId::About, OpenOptions::default());
    let a_z = m.get(a).unwrap().z;
    m.close(a);
    let b = m.open(AppId::About, OpenOptions::default());
    assert!(m.get(b).unwrap().z > a_z);
    assert_ne!(a, b);
}

#[test]
fn toggle_maximize_is_an_involution() {
    let mut m = wm();
    let id = m.open(AppId::Projects, OpenOptions::default());
    let original = m.get(id).unwrap().bounds;
    m.toggle_maximize(id);
    assert!(m.get(id).unwrap().maximized);
    assert_ne!(m.get(id).unwrap().bounds, original);
    m.toggle_maximize(id);
    let w = m.get(id).unwrap();
    assert!(!w.maximized);
    assert_eq!(w.bounds, original);
}

#[test]
fn snap_left_then_right_is_never_a_mix() {
    let mut m = wm();
    let id = m.open(AppId::About, OpenOptions::default());
    m.snap(id, SnapSide::Left);
    m.snap(id, SnapSide::Right);
    let w = m.get(id).unwrap();
    assert!(!w.maximized);
    assert_eq!(w.snap, SnapState::Right);
    assert_eq!(
        w.bounds,
        term_desk::geometry::snap_bounds(m.viewport(), TOP_BAR_HEIGHT, SnapSide::Right)
    );
}

#[test]
fn minimized_window_is_never_focused() {
    let mut m = wm();
    let a = m.open(AppId::About, OpenOptions::default());
    let b = m.open(AppId::Projects, OpenOptions::default());
    assert_eq!(m.focused(), Some(b));
    m.minimize(b);
    assert_ne!(m.focused(), Some(b));
    assert_eq!(m.focused(), Some(a));
    m.minimize(a);
    assert_eq!(m.focused(), None);
}

#[test]
fn close_active_with_no_windows_is_a_noop() {
    let mut m = wm();
    m.close_active();
    assert!(m.is_empty());
    assert_eq!(m.focused(), None);
}

#[test]
fn open_minimize_close_scenario() {
    let mut m = wm();
    let a = m.open(AppId::About, OpenOptions::default());
    let b = m.open(AppId::Projects, OpenOptions::default());
    assert!(m.get(b).unwrap().z > m.get(a).unwrap().z);
    assert_eq!(m.focused(), Some(b));

    m.minimize(b);
    assert_eq!(m.focused(), Some(a));

    m.close(a);
    assert_eq!(m.focused(), None);
    assert_eq!(m.visible_stack().len(), 0);
    assert_eq!(m.len(), 1); // b survives, minimized
    m.close(b);
    assert!(m.is_empty());
}

#[test]
fn snap_geometry_matches_reference_viewport() {
    let mut m = WindowManager::with_chrome(Viewport::new(1280, 800), 32);
    let id = m.open(AppId::About, OpenOptions::default());
    m.snap(id, SnapSide::Left);
    assert_eq!(m.get(id).unwrap().bounds, Bounds::new(0, 32, 640, 768));
    m.snap(id, SnapSide::Right);
    assert_eq!(m.get(id).unwrap().bounds, Bounds::new(640, 32, 640, 768));
}

#[test]
fn cycle_focus_assigns_fresh_top_z() {
    let mut m = wm();
    let a = m.open(AppId::About, OpenOptions::default());
    let b = m.open(AppId::Projects, OpenOptions::default());
    let top_z = m.get(b).unwrap().z;
    m.cycle_focus(CycleDirection::Forward);
    assert_eq!(m.focused(), Some(a));
    assert!(m.get(a).unwrap().z > top_z);
}

#[test]
fn restore_after_snap_returns_original_bounds() {
    let mut m = wm();
    let id = m.open(AppId::Contact, OpenOptions::default());
    let original = m.get(id).unwrap().bounds;
    m.snap(id, SnapSide::Left);
    m.toggle_maximize(id);
    m.toggle_maximize(id);
    assert_eq!(m.get(id).unwrap().bounds, original);
}
