mod manager;

use ratatui::prelude::Rect;

use crate::apps::{AppId, AppLaunch};

pub use manager::{CycleDirection, OpenOptions, StoreChange, WindowManager};

/// Signed rectangle origin with unsigned size, in viewport cells. Signed so
/// a window can be nudged partially past the left/top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
}

impl Bounds {
    pub fn new(x: i32, y: i32, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Clip to the on-screen portion for painting. Off-screen cells to the
    /// left/top are dropped; the size shrinks accordingly.
    pub fn to_rect(&self, screen: Rect) -> Rect {
        let x = self.x.max(0) as u16;
        let y = self.y.max(0) as u16;
        let clip_x = (x as i32 - self.x).max(0) as u16;
        let clip_y = (y as i32 - self.y).max(0) as u16;
        let w = self.w.saturating_sub(clip_x);
        let h = self.h.saturating_sub(clip_y);
        let w = w.min(screen.width.saturating_sub(x.min(screen.width)));
        let h = h.min(screen.height.saturating_sub(y.min(screen.height)));
        Rect {
            x,
            y,
            width: w,
            height: h,
        }
    }
}

/// Process-unique window identifier. Monotonic, never reused, including
/// after the window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapState {
    #[default]
    None,
    Left,
    Right,
}

/// One open application instance: placement plus lifecycle flags. Mutated
/// exclusively through [`WindowManager`].
#[derive(Debug, Clone)]
pub struct Window {
    pub id: WindowId,
    pub app: AppId,
    pub title: String,
    pub bounds: Bounds,
    /// Stacking order. Strictly increasing pool: every open/focus/restore
    /// hands out a fresh, larger value, so ascending-z iteration reproduces
    /// visual stacking without re-sorting history.
    pub z: u64,
    pub minimized: bool,
    pub maximized: bool,
    pub snap: SnapState,
    /// Restore target captured once on entry into maximize/snap; not
    /// overwritten while already in a constrained mode.
    pub saved_bounds: Option<Bounds>,
    pub launch: AppLaunch,
}

impl Window {
    /// True when the window occupies a constrained layout mode.
    pub fn is_constrained(&self) -> bool {
        self.maximized || self.snap != SnapState::None
    }
}
