//! Pure placement math for the window manager.
//!
//! Everything here is stateless: callers pass the current viewport and get
//! target bounds back. Recomputing on every viewport resize is cheap and
//! avoids stale cached geometry.

use crate::constants::{CASCADE_SLOTS, CASCADE_STEP};
use crate::window::Bounds;

/// Current terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// The area below the fixed top chrome.
    fn usable_height(&self, chrome_top: u16) -> u16 {
        self.height.saturating_sub(chrome_top)
    }
}

/// Which half of the usable area a snapped window occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapSide {
    Left,
    Right,
}

/// Full usable area: everything except the top chrome strip.
pub fn maximized_bounds(vp: Viewport, chrome_top: u16) -> Bounds {
    Bounds {
        x: 0,
        y: chrome_top as i32,
        w: vp.width,
        h: vp.usable_height(chrome_top),
    }
}

/// Half of the usable area. The left half takes the floor of an odd width so
/// the two halves always sum exactly to the viewport width.
pub fn snap_bounds(vp: Viewport, chrome_top: u16, side: SnapSide) -> Bounds {
    let left_w = vp.width / 2;
    let right_w = vp.width - left_w;
    let h = vp.usable_height(chrome_top);
    match side {
        SnapSide::Left => Bounds {
            x: 0,
            y: chrome_top as i32,
            w: left_w,
            h,
        },
        SnapSide::Right => Bounds {
            x: left_w as i32,
            y: chrome_top as i32,
            w: right_w,
            h,
        },
    }
}

/// Staggered origin for the n-th opened window so fresh windows don't hide
/// each other completely.
pub fn cascade_origin(n: u64, chrome_top: u16) -> (i32, i32) {
    let slot = (n % CASCADE_SLOTS) as i32;
    let step = CASCADE_STEP as i32;
    (2 + slot * step * 2, chrome_top as i32 + 1 + slot * step / 2)
}
