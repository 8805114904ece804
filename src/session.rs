//! Lock and theme state, owned outside the window manager.
//!
//! The window manager never reads theme data; the dispatcher only triggers
//! `lock_screen` (via the shell). While locked the shell suppresses all
//! dispatch until the unlock gesture.

use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Session {
    locked: bool,
    theme: ThemeKind,
}

impl Session {
    pub fn new(theme: ThemeKind, locked: bool) -> Self {
        Self { locked, theme }
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn lock_screen(&mut self) {
        if self.locked {
            return;
        }
        self.locked = true;
        tracing::info!("session locked");
    }

    pub fn unlock_screen(&mut self) {
        if !self.locked {
            return;
        }
        self.locked = false;
        tracing::info!("session unlocked");
    }

    pub fn theme(&self) -> ThemeKind {
        self.theme
    }

    pub fn set_theme(&mut self, theme: ThemeKind) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ThemeKind::Dark, false)
    }
}
