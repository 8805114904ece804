//! The static global shortcut table.
//!
//! Shortcuts are configuration, not runtime entities: one fixed table,
//! resolved against the detected platform at startup. The help panel renders
//! the same table verbatim, grouped by category.

use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::apps::AppId;
use crate::geometry::SnapSide;
use crate::window::CycleDirection;

/// What a matched chord asks the shell to do. Window-manager tags map 1:1
/// onto [`crate::window::WindowManager`] calls; the rest are emitted upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // System
    LockScreen,
    OpenApp(AppId),
    // Windows
    CloseActive,
    MinimizeActive,
    ToggleMaximizeActive,
    SnapActive(SnapSide),
    MoveActive(i32, i32),
    ResizeActive(i32, i32),
    // Navigation
    CycleWindow(CycleDirection),
    ShowOverview,
    ShowAppGrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    System,
    Windows,
    Navigation,
    Apps,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::System => "System",
            Category::Windows => "Windows",
            Category::Navigation => "Navigation",
            Category::Apps => "Apps",
        })
    }
}

/// Which modifier plays the "primary" role. Resolved once; never branched on
/// again past the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacLike,
    Other,
}

impl Platform {
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacLike
        } else {
            Platform::Other
        }
    }

    pub fn primary_modifier(self) -> KeyModifiers {
        match self {
            Platform::MacLike => KeyModifiers::SUPER,
            Platform::Other => KeyModifiers::CONTROL,
        }
    }

    pub fn primary_label(self) -> &'static str {
        match self {
            Platform::MacLike => "Cmd",
            Platform::Other => "Ctrl",
        }
    }
}

/// A chord in platform-neutral form: the physical key plus which abstract
/// modifiers are required. `primary` resolves to Cmd or Ctrl per platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    pub code: KeyCode,
    pub primary: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Chord {
    const fn primary(code: KeyCode) -> Self {
        Self {
            code,
            primary: true,
            shift: false,
            alt: false,
        }
    }

    const fn primary_shift(code: KeyCode) -> Self {
        Self {
            code,
            primary: true,
            shift: true,
            alt: false,
        }
    }

    const fn primary_alt(code: KeyCode) -> Self {
        Self {
            code,
            primary: true,
            shift: false,
            alt: true,
        }
    }

    const fn bare(code: KeyCode) -> Self {
        Self {
            code,
            primary: false,
            shift: false,
            alt: false,
        }
    }

    /// The exact modifier set this chord requires on the given platform.
    pub fn modifiers(self, platform: Platform) -> KeyModifiers {
        let mut mods = KeyModifiers::NONE;
        if self.primary {
            mods |= platform.primary_modifier();
        }
        if self.shift {
            mods |= KeyModifiers::SHIFT;
        }
        if self.alt {
            mods |= KeyModifiers::ALT;
        }
        mods
    }

    /// Human-readable label with the platform's primary-modifier name.
    pub fn display(self, platform: Platform) -> String {
        let mut parts = Vec::new();
        if self.primary {
            parts.push(platform.primary_label().to_string());
        }
        if self.shift {
            parts.push("Shift".to_string());
        }
        if self.alt {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        };
        parts.push(code);
        parts.join("+")
    }
}

/// One row of the shortcut table.
#[derive(Debug, Clone, Copy)]
pub struct Shortcut {
    pub label: &'static str,
    pub category: Category,
    pub chord: Chord,
    pub action: ShortcutAction,
}

/// The fixed global table. Order matters: the dispatcher takes the first
/// matching row.
pub fn default_table() -> Vec<Shortcut> {
    use crate::constants::{MOVE_STEP_COLS, MOVE_STEP_ROWS};
    use Category::*;
    use ShortcutAction::*;

    let mut t = Vec::new();
    let mut add = |label, category, chord, action| {
        t.push(Shortcut {
            label,
            category,
            chord,
            action,
        });
    };

    // System
    add(
        "Lock screen",
        System,
        Chord::primary(KeyCode::Char('l')),
        LockScreen,
    );
    add(
        "Open settings",
        System,
        Chord::primary(KeyCode::Char(',')),
        OpenApp(AppId::Settings),
    );
    add(
        "Keyboard shortcuts",
        System,
        Chord::bare(KeyCode::F(1)),
        OpenApp(AppId::Shortcuts),
    );

    // Windows
    add(
        "Close window",
        Windows,
        Chord::primary(KeyCode::Char('q')),
        CloseActive,
    );
    add(
        "Minimize window",
        Windows,
        Chord::primary(KeyCode::Char('m')),
        MinimizeActive,
    );
    add(
        "Maximize / restore",
        Windows,
        Chord::primary(KeyCode::Up),
        ToggleMaximizeActive,
    );
    add(
        "Snap left",
        Windows,
        Chord::primary(KeyCode::Left),
        SnapActive(SnapSide::Left),
    );
    add(
        "Snap right",
        Windows,
        Chord::primary(KeyCode::Right),
        SnapActive(SnapSide::Right),
    );
    for (label, code, dx, dy) in [
        ("Move window left", KeyCode::Left, -MOVE_STEP_COLS, 0),
        ("Move window right", KeyCode::Right, MOVE_STEP_COLS, 0),
        ("Move window up", KeyCode::Up, 0, -MOVE_STEP_ROWS),
        ("Move window down", KeyCode::Down, 0, MOVE_STEP_ROWS),
    ] {
        add(label, Windows, Chord::primary_shift(code), MoveActive(dx, dy));
    }
    for (label, code, dw, dh) in [
        ("Shrink window width", KeyCode::Left, -MOVE_STEP_COLS, 0),
        ("Grow window width", KeyCode::Right, MOVE_STEP_COLS, 0),
        ("Shrink window height", KeyCode::Up, 0, -MOVE_STEP_ROWS),
        ("Grow window height", KeyCode::Down, 0, MOVE_STEP_ROWS),
    ] {
        add(label, Windows, Chord::primary_alt(code), ResizeActive(dw, dh));
    }

    // Navigation
    add(
        "Next window",
        Navigation,
        Chord::primary(KeyCode::Tab),
        CycleWindow(CycleDirection::Forward),
    );
    add(
        "Previous window",
        Navigation,
        Chord::primary_shift(KeyCode::Tab),
        CycleWindow(CycleDirection::Backward),
    );
    add(
        "Overview",
        Navigation,
        Chord::primary(KeyCode::Char(' ')),
        ShowOverview,
    );
    add(
        "App grid",
        Navigation,
        Chord::primary(KeyCode::Char('a')),
        ShowAppGrid,
    );

    // Apps: primary+1..=5 launch by slot
    for (i, app) in [
        AppId::About,
        AppId::Projects,
        AppId::Contact,
        AppId::MediaViewer,
        AppId::Snake,
    ]
    .into_iter()
    .enumerate()
    {
        let digit = char::from(b'1' + i as u8);
        add(
            app.spec().title,
            Apps,
            Chord::primary(KeyCode::Char(digit)),
            OpenApp(app),
        );
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_chord_is_unique_per_platform() {
        for platform in [Platform::MacLike, Platform::Other] {
            let table = default_table();
            for (i, a) in table.iter().enumerate() {
                for b in &table[i + 1..] {
                    let clash = a.chord.code == b.chord.code
                        && a.chord.modifiers(platform) == b.chord.modifiers(platform);
                    assert!(!clash, "{} and {} share a chord", a.label, b.label);
                }
            }
        }
    }

    #[test]
    fn primary_label_follows_platform() {
        let chord = Chord::primary(KeyCode::Char('q'));
        assert_eq!(chord.display(Platform::Other), "Ctrl+Q");
        assert_eq!(chord.display(Platform::MacLike), "Cmd+Q");
    }

    #[test]
    fn all_categories_are_populated() {
        let table = default_table();
        for cat in [
            Category::System,
            Category::Windows,
            Category::Navigation,
            Category::Apps,
        ] {
            assert!(table.iter().any(|s| s.category == cat));
        }
    }
}
