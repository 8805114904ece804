//! Static informational panels. Copy only; no state, no window mutation.

use indoc::indoc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::session::ThemeKind;
use crate::shortcuts::{Category, Platform, default_table};
use crate::theme;
use crate::window::Window;

use super::ContentRenderer;

fn body_style(theme: ThemeKind) -> Style {
    Style::default()
        .fg(theme::window_fg(theme))
        .bg(theme::window_bg(theme))
}

pub struct AboutPanel;

impl ContentRenderer for AboutPanel {
    fn render(&self, frame: &mut Frame, area: Rect, _window: &Window, _focused: bool, theme: ThemeKind) {
        let text = indoc! {"
            term-desk

            A small desktop environment that lives in your terminal.
            Windows float, snap, stack and minimize like the real thing;
            everything is driven from the keyboard.

            Press F1 for the shortcut list.
        "};
        frame.render_widget(
            Paragraph::new(text)
                .style(body_style(theme))
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

pub struct ProjectsPanel;

impl ContentRenderer for ProjectsPanel {
    fn render(&self, frame: &mut Frame, area: Rect, _window: &Window, _focused: bool, theme: ThemeKind) {
        let rows = [
            ("window manager", "authoritative window state and stacking"),
            ("shortcut dispatcher", "chords to commands, platform aware"),
            ("geometry engine", "pure snap and maximize math"),
            ("lock screen", "session gate in front of the desktop"),
        ];
        let mut lines = Vec::new();
        for (name, blurb) in rows {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{name:<20}"),
                    Style::default()
                        .fg(theme::accent(theme))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(blurb),
            ]));
        }
        frame.render_widget(Paragraph::new(lines).style(body_style(theme)), area);
    }
}

pub struct ContactPanel;

impl ContentRenderer for ContactPanel {
    fn render(&self, frame: &mut Frame, area: Rect, _window: &Window, _focused: bool, theme: ThemeKind) {
        let text = indoc! {"
            Say hello

            name:    _______________
            email:   _______________
            message: _______________

            While this form has focus, only shortcuts that include the
            primary modifier are handled; everything else types.
        "};
        frame.render_widget(
            Paragraph::new(text)
                .style(body_style(theme))
                .wrap(Wrap { trim: false }),
            area,
        );
    }
}

/// Placeholder body for apps whose content is out of scope.
pub struct StubPanel {
    message: &'static str,
}

impl StubPanel {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl ContentRenderer for StubPanel {
    fn render(&self, frame: &mut Frame, area: Rect, _window: &Window, _focused: bool, theme: ThemeKind) {
        frame.render_widget(Paragraph::new(self.message).style(body_style(theme)), area);
    }
}

/// Renders the dispatcher's table verbatim, grouped by category, with the
/// platform's own key labels.
pub struct ShortcutsPanel {
    platform: Platform,
}

impl ShortcutsPanel {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl ContentRenderer for ShortcutsPanel {
    fn render(&self, frame: &mut Frame, area: Rect, _window: &Window, _focused: bool, theme: ThemeKind) {
        let table = default_table();
        let mut lines = Vec::new();
        for category in [
            Category::System,
            Category::Windows,
            Category::Navigation,
            Category::Apps,
        ] {
            lines.push(Line::from(Span::styled(
                category.to_string(),
                Style::default()
                    .fg(theme::accent(theme))
                    .add_modifier(Modifier::BOLD),
            )));
            for shortcut in table.iter().filter(|s| s.category == category) {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<18}", shortcut.chord.display(self.platform)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(shortcut.label),
                ]));
            }
            lines.push(Line::default());
        }
        frame.render_widget(Paragraph::new(lines).style(body_style(theme)), area);
    }
}
