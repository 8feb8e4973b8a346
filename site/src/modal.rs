//! "Not found" modal shown when routing to an undeclared section.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::action::Action;
use crate::consts::HOME_SECTION;
use crate::engine::SiteCore;
use crate::router::LinkOrigin;

impl SiteCore {
    /// Close button or overlay clicked.
    pub fn on_modal_close(&mut self) -> Vec<Action> {
        let mut out = Vec::new();
        self.close_modal(&mut out);
        out
    }

    /// Escape closes the modal, and only while it is open.
    pub fn on_key_down(&mut self, key: &str) -> Vec<Action> {
        let mut out = Vec::new();
        if key == "Escape" {
            self.close_modal(&mut out);
        }
        out
    }

    /// "Return home": close the modal and route to home.
    pub fn on_modal_home(&mut self) -> Vec<Action> {
        self.on_link_click(HOME_SECTION, LinkOrigin::Modal)
    }

    pub(crate) fn open_modal(&mut self, out: &mut Vec<Action>) {
        if self.ui.modal_open {
            return;
        }
        self.ui.modal_open = true;
        out.push(Action::SetModalOpen(true));
        self.sync_scroll_lock(out);
    }

    pub(crate) fn close_modal(&mut self, out: &mut Vec<Action>) {
        if !self.ui.modal_open {
            return;
        }
        self.ui.modal_open = false;
        out.push(Action::SetModalOpen(false));
        self.sync_scroll_lock(out);
    }
}
