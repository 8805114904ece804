use ratatui::style::Color;

use crate::session::ThemeKind;

// Centralized palette helpers. Small functions rather than a struct so call
// sites stay terse; everything keys off the session's ThemeKind.

pub fn desktop_bg(theme: ThemeKind) -> Color {
    match theme {
        ThemeKind::Dark => Color::Rgb(24, 26, 32),
        ThemeKind::Light => Color::Rgb(210, 214, 220),
    }
}

pub fn top_bar_bg(theme: ThemeKind) -> Color {
    match theme {
        ThemeKind::Dark => Color::Rgb(40, 42, 52),
        ThemeKind::Light => Color::Rgb(235, 238, 242),
    }
}

pub fn top_bar_fg(theme: ThemeKind) -> Color {
    match theme {
        ThemeKind::Dark => Color::Gray,
        ThemeKind::Light => Color::Black,
    }
}

pub fn window_bg(theme: ThemeKind) -> Color {
    match theme {
        ThemeKind::Dark => Color::Rgb(32, 34, 42),
        ThemeKind::Light => Color::White,
    }
}

pub fn window_fg(theme: ThemeKind) -> Color {
    match theme {
        ThemeKind::Dark => Color::White,
        ThemeKind::Light => Color::Black,
    }
}

pub fn border_focused(_theme: ThemeKind) -> Color {
    Color::Cyan
}

pub fn border_unfocused(theme: ThemeKind) -> Color {
    match theme {
        ThemeKind::Dark => Color::DarkGray,
        ThemeKind::Light => Color::Gray,
    }
}

pub fn accent(_theme: ThemeKind) -> Color {
    Color::Rgb(255, 165, 0)
}

pub fn lock_fg(theme: ThemeKind) -> Color {
    match theme {
        ThemeKind::Dark => Color::White,
        ThemeKind::Light => Color::Black,
    }
}
