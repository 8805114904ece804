//! Turns raw keydown events into shortcut actions.
//!
//! The dispatcher owns no mutable state beyond the resolved platform and the
//! static table. It never mutates the window store itself; the shell applies
//! the returned action.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::shortcuts::{Platform, Shortcut, ShortcutAction, default_table};

pub struct Dispatcher {
    platform: Platform,
    table: Vec<Shortcut>,
}

impl Dispatcher {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            table: default_table(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn table(&self) -> &[Shortcut] {
        &self.table
    }

    /// Resolve a keydown against the table. First match wins; at most one
    /// action per event.
    ///
    /// While a text-entry control has keyboard focus only chords that
    /// include the primary modifier match, so ordinary typing is never
    /// hijacked.
    pub fn handle_key(&self, key: &KeyEvent, text_input_focused: bool) -> Option<ShortcutAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let (code, mods) = normalize(key);
        let primary = self.platform.primary_modifier();
        if text_input_focused && !mods.contains(primary) {
            return None;
        }
        self.table
            .iter()
            .find(|s| code == normalize_code(s.chord.code) && mods == s.chord.modifiers(self.platform))
            .map(|s| s.action)
    }
}

/// Canonical form for matching. Terminals report Shift+Tab as `BackTab`
/// without a separate code for the physical key, and shifted characters
/// arrive upper-cased (some legacy terminals then drop the SHIFT bit
/// entirely); fold all of these so a chord matches regardless of layout.
/// An upper-case character always folds to lowercase plus SHIFT.
pub fn normalize(key: &KeyEvent) -> (KeyCode, KeyModifiers) {
    let mut mods = key.modifiers
        & (KeyModifiers::CONTROL | KeyModifiers::SHIFT | KeyModifiers::ALT | KeyModifiers::SUPER);
    let code = match key.code {
        KeyCode::BackTab => {
            mods |= KeyModifiers::SHIFT;
            KeyCode::Tab
        }
        KeyCode::Char(c) => {
            if c.is_ascii_uppercase() {
                mods |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c.to_ascii_lowercase())
        }
        other => other,
    };
    (code, mods)
}

fn normalize_code(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::CycleDirection;

    fn press(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn primary_q_closes_active() {
        let d = Dispatcher::new(Platform::Other);
        let action = d.handle_key(
            &press(KeyCode::Char('q'), KeyModifiers::CONTROL),
            false,
        );
        assert_eq!(action, Some(ShortcutAction::CloseActive));
    }

    #[test]
    fn bare_key_ignored_in_text_input_but_primary_still_fires() {
        let d = Dispatcher::new(Platform::Other);
        assert_eq!(d.handle_key(&press(KeyCode::F(1), KeyModifiers::NONE), true), None);
        assert_eq!(
            d.handle_key(&press(KeyCode::Char('q'), KeyModifiers::CONTROL), true),
            Some(ShortcutAction::CloseActive)
        );
    }

    #[test]
    fn extra_modifiers_do_not_match() {
        let d = Dispatcher::new(Platform::Other);
        assert_eq!(
            d.handle_key(
                &press(
                    KeyCode::Char('q'),
                    KeyModifiers::CONTROL | KeyModifiers::ALT
                ),
                false
            ),
            None
        );
    }

    #[test]
    fn uppercase_chars_fold_to_shifted_lowercase() {
        // upper-case report with the SHIFT bit present
        assert_eq!(
            normalize(&press(
                KeyCode::Char('Q'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )),
            (
                KeyCode::Char('q'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )
        );
        // legacy terminals drop SHIFT but keep the upper-case character
        assert_eq!(
            normalize(&press(KeyCode::Char('Q'), KeyModifiers::CONTROL)),
            (
                KeyCode::Char('q'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            )
        );
        // an upper-case Q therefore never lands on the plain primary+Q chord
        let d = Dispatcher::new(Platform::Other);
        assert_eq!(
            d.handle_key(&press(KeyCode::Char('Q'), KeyModifiers::CONTROL), false),
            None
        );
    }

    #[test]
    fn backtab_matches_primary_shift_tab() {
        let d = Dispatcher::new(Platform::Other);
        let action = d.handle_key(
            &press(KeyCode::BackTab, KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            false,
        );
        assert_eq!(
            action,
            Some(ShortcutAction::CycleWindow(CycleDirection::Backward))
        );
    }

    #[test]
    fn release_events_never_match() {
        let d = Dispatcher::new(Platform::Other);
        let mut key = press(KeyCode::Char('q'), KeyModifiers::CONTROL);
        key.kind = KeyEventKind::Release;
        assert_eq!(d.handle_key(&key, false), None);
    }

    #[test]
    fn mac_platform_uses_super() {
        let d = Dispatcher::new(Platform::MacLike);
        assert_eq!(
            d.handle_key(&press(KeyCode::Char('q'), KeyModifiers::CONTROL), false),
            None
        );
        assert_eq!(
            d.handle_key(&press(KeyCode::Char('q'), KeyModifiers::SUPER), false),
            Some(ShortcutAction::CloseActive)
        );
    }
}
