//! Application content rendering.
//!
//! Renderers are looked up through a registry keyed on [`AppId`] so the
//! window manager stays ignorant of rendering concerns. A renderer reads the
//! window's launch payload and paints the body; it never touches bounds, z,
//! or focus.

mod media;
mod panels;
mod settings;

use std::collections::BTreeMap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use crate::apps::AppId;
use crate::session::ThemeKind;
use crate::shortcuts::Platform;
use crate::theme;
use crate::window::Window;

pub use media::MediaViewerPanel;
pub use panels::{AboutPanel, ContactPanel, ProjectsPanel, ShortcutsPanel, StubPanel};
pub use settings::SettingsPanel;

pub trait ContentRenderer {
    fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        window: &Window,
        focused: bool,
        theme: ThemeKind,
    );
}

pub struct RendererRegistry {
    map: BTreeMap<AppId, Box<dyn ContentRenderer>>,
}

impl RendererRegistry {
    /// Registry with every stock app wired up.
    pub fn with_defaults(platform: Platform) -> Self {
        let mut map: BTreeMap<AppId, Box<dyn ContentRenderer>> = BTreeMap::new();
        map.insert(AppId::About, Box::new(AboutPanel));
        map.insert(AppId::Projects, Box::new(ProjectsPanel));
        map.insert(AppId::Contact, Box::new(ContactPanel));
        map.insert(AppId::MediaViewer, Box::new(MediaViewerPanel));
        map.insert(AppId::Snake, Box::new(StubPanel::new("snake sleeps here")));
        map.insert(AppId::Settings, Box::new(SettingsPanel));
        map.insert(AppId::Shortcuts, Box::new(ShortcutsPanel::new(platform)));
        Self { map }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        window: &Window,
        focused: bool,
        theme: ThemeKind,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        match self.map.get(&window.app) {
            Some(renderer) => renderer.render(frame, area, window, focused, theme),
            None => {
                let fallback = Paragraph::new("nothing to show")
                    .style(Style::default().fg(theme::window_fg(theme)));
                frame.render_widget(fallback, area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_app() {
        let registry = RendererRegistry::with_defaults(Platform::Other);
        for app in AppId::ALL {
            assert!(registry.map.contains_key(&app), "{app:?} has no renderer");
        }
    }
}
