//! The closed set of applications the desktop can host, plus their static
//! per-app policy (default geometry, minimum floor, instance rules).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

#[derive(Debug, Error)]
pub enum ShellError {
    /// An app was referenced by a name outside the closed set. Typed
    /// [`AppId`] values cannot be invalid; this only arises from string
    /// surfaces (CLI, launch-by-name).
    #[error("unknown app: {0:?}")]
    UnknownApp(String),
}

/// Every application kind the shell knows how to host. Content rendering is
/// dispatched through a registry keyed on this tag; the window manager never
/// looks past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppId {
    About,
    Projects,
    Contact,
    MediaViewer,
    Snake,
    Settings,
    Shortcuts,
}

impl AppId {
    pub const ALL: [AppId; 7] = [
        AppId::About,
        AppId::Projects,
        AppId::Contact,
        AppId::MediaViewer,
        AppId::Snake,
        AppId::Settings,
        AppId::Shortcuts,
    ];

    pub fn spec(self) -> AppSpec {
        match self {
            AppId::About => AppSpec {
                title: "About",
                default_size: (52, 16),
                min_size: (24, 6),
                single_instance: false,
            },
            AppId::Projects => AppSpec {
                title: "Projects",
                default_size: (64, 20),
                min_size: (30, 8),
                single_instance: false,
            },
            AppId::Contact => AppSpec {
                title: "Contact",
                default_size: (48, 14),
                min_size: (28, 8),
                single_instance: false,
            },
            AppId::MediaViewer => AppSpec {
                title: "Media Viewer",
                default_size: (70, 22),
                min_size: (30, 10),
                single_instance: false,
            },
            AppId::Snake => AppSpec {
                title: "Snake",
                default_size: (40, 20),
                min_size: (24, 12),
                single_instance: false,
            },
            AppId::Settings => AppSpec {
                title: "Settings",
                default_size: (50, 16),
                min_size: (30, 8),
                single_instance: true,
            },
            AppId::Shortcuts => AppSpec {
                title: "Keyboard Shortcuts",
                default_size: (60, 24),
                min_size: (36, 10),
                single_instance: true,
            },
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().title)
    }
}

impl FromStr for AppId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "about" => Ok(AppId::About),
            "projects" => Ok(AppId::Projects),
            "contact" => Ok(AppId::Contact),
            "media" | "media-viewer" => Ok(AppId::MediaViewer),
            "snake" => Ok(AppId::Snake),
            "settings" => Ok(AppId::Settings),
            "shortcuts" | "help" => Ok(AppId::Shortcuts),
            other => Err(ShellError::UnknownApp(other.to_string())),
        }
    }
}

/// Static policy for one app kind.
#[derive(Debug, Clone, Copy)]
pub struct AppSpec {
    pub title: &'static str,
    pub default_size: (u16, u16),
    /// Per-app floor; never below the crate-wide minimum.
    pub min_size: (u16, u16),
    /// When true, a second open call focuses the existing window (and
    /// replaces its launch payload) instead of creating a duplicate.
    pub single_instance: bool,
}

impl AppSpec {
    pub fn min_width(&self) -> u16 {
        self.min_size.0.max(MIN_WINDOW_WIDTH)
    }

    pub fn min_height(&self) -> u16 {
        self.min_size.1.max(MIN_WINDOW_HEIGHT)
    }
}

/// Opaque open-time payload handed to the content renderer. Set once at open
/// and read-only afterward; re-parameterized only when a single-instance app
/// is re-opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AppLaunch {
    #[default]
    None,
    /// Path (or name) of the file the media viewer should preview.
    Media {
        path: String,
    },
    /// Which settings tab to land on.
    SettingsTab {
        tab: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_app_is_reachable_by_name() {
        let names = [
            ("about", AppId::About),
            ("projects", AppId::Projects),
            ("contact", AppId::Contact),
            ("media", AppId::MediaViewer),
            ("snake", AppId::Snake),
            ("settings", AppId::Settings),
            ("shortcuts", AppId::Shortcuts),
        ];
        assert_eq!(names.len(), AppId::ALL.len());
        for (name, app) in names {
            assert_eq!(name.parse::<AppId>().unwrap(), app);
        }
    }

    #[test]
    fn unknown_app_is_an_error() {
        assert!(matches!(
            "solitaire".parse::<AppId>(),
            Err(ShellError::UnknownApp(_))
        ));
    }

    #[test]
    fn min_sizes_never_below_global_floor() {
        for app in AppId::ALL {
            let spec = app.spec();
            assert!(spec.min_width() >= MIN_WINDOW_WIDTH);
            assert!(spec.min_height() >= MIN_WINDOW_HEIGHT);
            assert!(spec.default_size.0 >= spec.min_width());
            assert!(spec.default_size.1 >= spec.min_height());
        }
    }
}
