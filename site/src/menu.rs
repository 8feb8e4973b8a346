//! Mobile menu: open/closed per page session, never persisted.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::action::Action;
use crate::engine::SiteCore;
use crate::schedule::TimerKey;

impl SiteCore {
    /// The hamburger toggle was clicked.
    pub fn on_menu_toggle(&mut self) -> Vec<Action> {
        let mut out = Vec::new();
        if self.ui.menu_open {
            self.close_menu(&mut out);
        } else {
            self.open_menu(&mut out);
        }
        out
    }

    /// A menu link without a `data-section` target was followed.
    pub fn on_menu_link_click(&mut self) -> Vec<Action> {
        let mut out = Vec::new();
        self.close_menu(&mut out);
        out
    }

    /// A click anywhere in the document. `inside_menu` is true when the target
    /// lies within the menu or its toggle.
    pub fn on_document_click(&mut self, inside_menu: bool) -> Vec<Action> {
        let mut out = Vec::new();
        if !inside_menu {
            self.close_menu(&mut out);
        }
        out
    }

    /// A window resize. Only the last width of a burst is acted on, once the
    /// debounce quiet period has passed.
    pub fn on_resize(&mut self, width: f64) -> Vec<Action> {
        self.ui.pending_width = Some(width);
        let mut out = Vec::new();
        self.arm(TimerKey::ResizeDebounce, self.config.resize_debounce_ms, &mut out);
        out
    }

    pub(crate) fn apply_resize(&mut self, out: &mut Vec<Action>) {
        let Some(width) = self.ui.pending_width.take() else {
            return;
        };
        if width > self.config.menu_breakpoint_px {
            self.close_menu(out);
        }
    }

    pub(crate) fn open_menu(&mut self, out: &mut Vec<Action>) {
        if self.ui.menu_open {
            return;
        }
        self.ui.menu_open = true;
        out.push(Action::SetMenuOpen(true));
        self.sync_scroll_lock(out);
    }

    pub(crate) fn close_menu(&mut self, out: &mut Vec<Action>) {
        if !self.ui.menu_open {
            return;
        }
        self.ui.menu_open = false;
        out.push(Action::SetMenuOpen(false));
        self.sync_scroll_lock(out);
    }
}
