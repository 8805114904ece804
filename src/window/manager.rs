use super::{Bounds, SnapState, Window, WindowId};
use crate::apps::{AppId, AppLaunch};
use crate::constants::TOP_BAR_HEIGHT;
use crate::geometry::{self, SnapSide, Viewport};

/// Direction for the window-switch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Forward,
    Backward,
}

/// Emitted to subscribers synchronously after each completed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Opened(WindowId),
    Closed(WindowId),
    Focused(Option<WindowId>),
    Updated(WindowId),
}

type Observer = Box<dyn FnMut(&StoreChange)>;

/// Open-time parameters. Everything is optional; per-app defaults from
/// [`AppId::spec`] fill the gaps.
#[derive(Debug, Clone, Default)]
pub struct OpenOptions {
    pub title: Option<String>,
    pub size: Option<(u16, u16)>,
    pub position: Option<(i32, i32)>,
    pub launch: AppLaunch,
}

impl OpenOptions {
    pub fn with_launch(launch: AppLaunch) -> Self {
        Self {
            launch,
            ..Self::default()
        }
    }
}

/// The single source of truth for open windows: the ordered record
/// collection, the focused-window pointer, and the monotonic id/z pools.
///
/// All mutation goes through the methods below; collaborators (renderers,
/// the dispatcher) only read. Operations referencing a missing [`WindowId`]
/// are silent no-ops so call sites never need to guard.
pub struct WindowManager {
    windows: Vec<Window>,
    focused: Option<WindowId>,
    next_id: u64,
    next_z: u64,
    opened_count: u64,
    viewport: Viewport,
    chrome_top: u16,
    observers: Vec<Observer>,
}

impl WindowManager {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_chrome(viewport, TOP_BAR_HEIGHT)
    }

    /// Like [`WindowManager::new`] with an explicit top-chrome height.
    pub fn with_chrome(viewport: Viewport, chrome_top: u16) -> Self {
        Self {
            windows: Vec::new(),
            focused: None,
            next_id: 0,
            next_z: 0,
            opened_count: 0,
            viewport,
            chrome_top,
            observers: Vec::new(),
        }
    }

    /// Register a change observer, called synchronously after every
    /// completed mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&StoreChange) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, change: StoreChange) {
        for obs in &mut self.observers {
            obs(&change);
        }
    }

    fn fresh_z(&mut self) -> u64 {
        self.next_z += 1;
        self.next_z
    }

    // ---- read access ------------------------------------------------------

    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    pub fn focused_window(&self) -> Option<&Window> {
        self.focused.and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All windows, ascending z. Painting in this order reproduces the
    /// visual stack.
    pub fn stack(&self) -> Vec<&Window> {
        let mut v: Vec<&Window> = self.windows.iter().collect();
        v.sort_by_key(|w| w.z);
        v
    }

    /// Non-minimized windows, ascending z.
    pub fn visible_stack(&self) -> Vec<&Window> {
        let mut v: Vec<&Window> = self.windows.iter().filter(|w| !w.minimized).collect();
        v.sort_by_key(|w| w.z);
        v
    }

    /// Minimized windows, oldest first. Feeds the minimized strip.
    pub fn minimized_windows(&self) -> Vec<&Window> {
        let mut v: Vec<&Window> = self.windows.iter().filter(|w| w.minimized).collect();
        v.sort_by_key(|w| w.id);
        v
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn chrome_top(&self) -> u16 {
        self.chrome_top
    }

    // ---- lifecycle --------------------------------------------------------

    /// Create a window (or focus the existing one for single-instance apps)
    /// and return its id.
    pub fn open(&mut self, app: AppId, opts: OpenOptions) -> WindowId {
        let spec = app.spec();
        if spec.single_instance
            && let Some(existing) = self.windows.iter().find(|w| w.app == app).map(|w| w.id)
        {
            if opts.launch != AppLaunch::None
                && let Some(w) = self.get_mut(existing)
            {
                w.launch = opts.launch;
            }
            self.focus(existing);
            return existing;
        }

        let (mut w, mut h) = opts.size.unwrap_or(spec.default_size);
        if w < spec.min_width() || h < spec.min_height() {
            debug_assert!(
                opts.size.is_none(),
                "open size {w}x{h} below floor for {app:?}"
            );
            tracing::warn!(?app, w, h, "requested size below floor, clamping");
            w = w.max(spec.min_width());
            h = h.max(spec.min_height());
        }
        let (x, y) = opts
            .position
            .unwrap_or_else(|| geometry::cascade_origin(self.opened_count, self.chrome_top));
        self.opened_count += 1;

        let id = WindowId(self.next_id);
        self.next_id += 1;
        let z = self.fresh_z();
        let window = Window {
            id,
            app,
            title: opts.title.unwrap_or_else(|| spec.title.to_string()),
            bounds: Bounds::new(x, y, w, h),
            z,
            minimized: false,
            maximized: false,
            snap: SnapState::None,
            saved_bounds: None,
            launch: opts.launch,
        };
        tracing::debug!(id = id.raw(), ?app, z, "opened window");
        self.windows.push(window);
        self.focused = Some(id);
        self.notify(StoreChange::Opened(id));
        self.notify(StoreChange::Focused(Some(id)));
        id
    }

    /// Remove the window. Focus falls to the highest-z surviving
    /// non-minimized window, or clears if none remain.
    pub fn close(&mut self, id: WindowId) {
        let Some(idx) = self.windows.iter().position(|w| w.id == id) else {
            return;
        };
        self.windows.remove(idx);
        tracing::debug!(id = id.raw(), "closed window");
        self.notify(StoreChange::Closed(id));
        if self.focused == Some(id) {
            self.refocus_topmost();
        }
    }

    pub fn close_active(&mut self) {
        if let Some(id) = self.focused {
            self.close(id);
        }
    }

    /// Bring the window to the front. Clears `minimized` and assigns a fresh
    /// top z; a no-op when the id is missing or already focused.
    pub fn focus(&mut self, id: WindowId) {
        if self.focused == Some(id) || self.get(id).is_none() {
            return;
        }
        let z = self.fresh_z();
        if let Some(w) = self.get_mut(id) {
            w.minimized = false;
            w.z = z;
        }
        self.focused = Some(id);
        tracing::debug!(id = id.raw(), z, "focused window");
        self.notify(StoreChange::Updated(id));
        self.notify(StoreChange::Focused(Some(id)));
    }

    /// Hide the window from the visible stack. Its record and z survive so
    /// re-activating restores prior order context.
    pub fn minimize(&mut self, id: WindowId) {
        let Some(w) = self.get_mut(id) else {
            return;
        };
        if w.minimized {
            return;
        }
        w.minimized = true;
        self.notify(StoreChange::Updated(id));
        if self.focused == Some(id) {
            self.refocus_topmost();
        }
    }

    /// Enter or leave the maximized mode. Entering captures the restore
    /// bounds once (unless already captured by a snap) and clears any snap
    /// state before setting the flag; leaving restores the captured bounds.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let vp = self.viewport;
        let chrome = self.chrome_top;
        let Some(w) = self.get_mut(id) else {
            return;
        };
        if w.maximized {
            w.maximized = false;
            if let Some(saved) = w.saved_bounds.take() {
                w.bounds = saved;
            }
        } else {
            if !w.is_constrained() {
                w.saved_bounds = Some(w.bounds);
            }
            // clear-then-set: snap and maximize must never overlap
            w.snap = SnapState::None;
            w.maximized = true;
            w.bounds = geometry::maximized_bounds(vp, chrome);
        }
        self.notify(StoreChange::Updated(id));
    }

    /// Constrain the window to one half of the usable area. Re-snapping to
    /// the current side is idempotent.
    pub fn snap(&mut self, id: WindowId, side: SnapSide) {
        let vp = self.viewport;
        let chrome = self.chrome_top;
        let Some(w) = self.get_mut(id) else {
            return;
        };
        let target = match side {
            SnapSide::Left => SnapState::Left,
            SnapSide::Right => SnapState::Right,
        };
        if w.snap == target {
            return;
        }
        if !w.is_constrained() {
            w.saved_bounds = Some(w.bounds);
        }
        // clear-then-set: snap and maximize must never overlap
        w.maximized = false;
        w.snap = target;
        w.bounds = geometry::snap_bounds(vp, chrome, side);
        self.notify(StoreChange::Updated(id));
    }

    /// Manual drag: always exits a constrained layout mode and makes the new
    /// bounds the restore baseline.
    pub fn move_by(&mut self, id: WindowId, dx: i32, dy: i32) {
        let Some(w) = self.get_mut(id) else {
            return;
        };
        Self::exit_constrained(w);
        w.bounds.x += dx;
        w.bounds.y += dy;
        self.notify(StoreChange::Updated(id));
    }

    /// Manual resize: clamps to the per-app floor and, like [`Self::move_by`],
    /// exits any constrained mode.
    pub fn resize(&mut self, id: WindowId, width: u16, height: u16) {
        let Some(w) = self.get_mut(id) else {
            return;
        };
        let spec = w.app.spec();
        Self::exit_constrained(w);
        w.bounds.w = width.max(spec.min_width());
        w.bounds.h = height.max(spec.min_height());
        self.notify(StoreChange::Updated(id));
    }

    fn exit_constrained(w: &mut Window) {
        w.maximized = false;
        w.snap = SnapState::None;
        w.saved_bounds = None;
    }

    /// Step focus through non-minimized windows by descending z, wrapping at
    /// the ends. A no-op with fewer than two eligible windows.
    pub fn cycle_focus(&mut self, direction: CycleDirection) {
        let mut eligible: Vec<(u64, WindowId)> = self
            .windows
            .iter()
            .filter(|w| !w.minimized)
            .map(|w| (w.z, w.id))
            .collect();
        if eligible.len() < 2 {
            return;
        }
        eligible.sort_by(|a, b| b.0.cmp(&a.0));
        let idx = self
            .focused
            .and_then(|id| eligible.iter().position(|(_, eid)| *eid == id))
            .unwrap_or(0);
        let step = match direction {
            CycleDirection::Forward => 1isize,
            CycleDirection::Backward => -1isize,
        };
        let next = ((idx as isize + step).rem_euclid(eligible.len() as isize)) as usize;
        self.focus(eligible[next].1);
    }

    /// Recompute constrained windows against a new viewport. Floating
    /// windows keep their bounds.
    pub fn handle_viewport_resize(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        let chrome = self.chrome_top;
        let mut touched = Vec::new();
        for w in &mut self.windows {
            if w.maximized {
                w.bounds = geometry::maximized_bounds(viewport, chrome);
                touched.push(w.id);
            } else {
                let side = match w.snap {
                    SnapState::Left => Some(SnapSide::Left),
                    SnapState::Right => Some(SnapSide::Right),
                    SnapState::None => None,
                };
                if let Some(side) = side {
                    w.bounds = geometry::snap_bounds(viewport, chrome, side);
                    touched.push(w.id);
                }
            }
        }
        for id in touched {
            self.notify(StoreChange::Updated(id));
        }
    }

    /// Point focus at the highest-z non-minimized window, or clear it.
    /// The target's z is left alone: it is already on top of the survivors.
    fn refocus_topmost(&mut self) {
        let next = self
            .windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z)
            .map(|w| w.id);
        self.focused = next;
        self.notify(StoreChange::Focused(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wm() -> WindowManager {
        WindowManager::new(Viewport::new(120, 40))
    }

    #[test]
    fn open_assigns_unique_ids_and_increasing_z() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        let b = m.open(AppId::About, OpenOptions::default());
        assert_ne!(a, b);
        assert!(m.get(b).unwrap().z > m.get(a).unwrap().z);
        assert_eq!(m.focused(), Some(b));
    }

    #[test]
    fn single_instance_apps_are_deduped() {
        let mut m = wm();
        let first = m.open(AppId::Settings, OpenOptions::default());
        m.open(AppId::About, OpenOptions::default());
        let second = m.open(
            AppId::Settings,
            OpenOptions::with_launch(AppLaunch::SettingsTab {
                tab: "theme".into(),
            }),
        );
        assert_eq!(first, second);
        assert_eq!(m.len(), 2);
        assert_eq!(m.focused(), Some(first));
        assert_eq!(
            m.get(first).unwrap().launch,
            AppLaunch::SettingsTab {
                tab: "theme".into()
            }
        );
    }

    #[test]
    fn focus_clears_minimized_and_raises() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        let b = m.open(AppId::Projects, OpenOptions::default());
        m.minimize(a);
        let z_before = m.get(b).unwrap().z;
        m.focus(a);
        let a_win = m.get(a).unwrap();
        assert!(!a_win.minimized);
        assert!(a_win.z > z_before);
        assert_eq!(m.focused(), Some(a));
    }

    #[test]
    fn close_missing_id_is_a_noop() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        m.close(a);
        m.close(a);
        m.close_active();
        assert!(m.is_empty());
        assert_eq!(m.focused(), None);
    }

    #[test]
    fn maximize_then_snap_never_overlap() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        m.toggle_maximize(a);
        m.snap(a, SnapSide::Left);
        let w = m.get(a).unwrap();
        assert!(!w.maximized);
        assert_eq!(w.snap, SnapState::Left);
    }

    #[test]
    fn saved_bounds_survive_mode_changes() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        let original = m.get(a).unwrap().bounds;
        m.snap(a, SnapSide::Left);
        m.toggle_maximize(a);
        // restore target is still the pre-snap bounds
        m.toggle_maximize(a);
        assert_eq!(m.get(a).unwrap().bounds, original);
    }

    #[test]
    fn manual_move_exits_constrained_mode() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        m.snap(a, SnapSide::Right);
        m.move_by(a, 3, 1);
        let w = m.get(a).unwrap();
        assert_eq!(w.snap, SnapState::None);
        assert!(!w.maximized);
        assert_eq!(w.saved_bounds, None);
    }

    #[test]
    fn resize_clamps_to_app_floor() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        m.resize(a, 1, 1);
        let w = m.get(a).unwrap();
        let spec = AppId::About.spec();
        assert_eq!(w.bounds.w, spec.min_width());
        assert_eq!(w.bounds.h, spec.min_height());
    }

    #[test]
    fn cycle_focus_wraps_and_skips_minimized() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        let b = m.open(AppId::Projects, OpenOptions::default());
        let c = m.open(AppId::Contact, OpenOptions::default());
        m.minimize(b);
        assert_eq!(m.focused(), Some(c));
        m.cycle_focus(CycleDirection::Forward);
        assert_eq!(m.focused(), Some(a));
        m.cycle_focus(CycleDirection::Forward);
        assert_eq!(m.focused(), Some(c));
    }

    #[test]
    fn cycle_focus_with_one_window_is_a_noop() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        m.cycle_focus(CycleDirection::Forward);
        assert_eq!(m.focused(), Some(a));
    }

    #[test]
    fn viewport_resize_tracks_constrained_windows() {
        let mut m = wm();
        let a = m.open(AppId::About, OpenOptions::default());
        let b = m.open(AppId::Projects, OpenOptions::default());
        let b_bounds = m.get(b).unwrap().bounds;
        m.snap(a, SnapSide::Left);
        m.handle_viewport_resize(Viewport::new(200, 60));
        assert_eq!(
            m.get(a).unwrap().bounds,
            geometry::snap_bounds(Viewport::new(200, 60), TOP_BAR_HEIGHT, SnapSide::Left)
        );
        // floating windows are left alone
        assert_eq!(m.get(b).unwrap().bounds, b_bounds);
    }

    #[test]
    fn observers_see_mutations_in_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let log: Rc<RefCell<Vec<StoreChange>>> = Rc::default();
        let sink = Rc::clone(&log);
        let mut m = wm();
        m.subscribe(move |c| sink.borrow_mut().push(*c));
        let a = m.open(AppId::About, OpenOptions::default());
        m.close(a);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                StoreChange::Opened(a),
                StoreChange::Focused(Some(a)),
                StoreChange::Closed(a),
                StoreChange::Focused(None),
            ]
        );
    }
}
