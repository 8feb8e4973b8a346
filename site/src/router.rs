//! View router: one visible section at a time.
//!
//! Switching hides every declared section, reveals the target, keeps the
//! testimonials block visible only on home, scrolls to top, retitles the
//! document and schedules the entrance transition. An undeclared name opens
//! the "not found" modal and leaves the visible section, the nav marking and
//! history untouched.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::action::Action;
use crate::engine::SiteCore;
use crate::history::{HistoryEntry, HistoryState};
use crate::schedule::TimerKey;

/// Where a `data-section` click came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOrigin {
    /// A `.nav__link` inside the menu; also closes the mobile menu.
    Nav,
    /// Any other `[data-section]` element in the page body.
    Content,
    /// The "return home" control inside the "not found" modal.
    Modal,
}

impl SiteCore {
    /// Show `name`, or open the "not found" modal if it is not declared.
    pub fn show_section(&mut self, name: &str) -> Vec<Action> {
        let mut out = Vec::new();
        self.show_section_into(name, &mut out);
        out
    }

    /// Mark exactly the nav links that reference `name` as active.
    #[must_use]
    pub fn update_active_nav_link(&self, name: &str) -> Vec<Action> {
        let mut out = Vec::new();
        self.update_active_nav_link_into(name, &mut out);
        out
    }

    /// Push a history entry for `name`.
    #[must_use]
    pub fn update_history(&self, name: &str) -> Vec<Action> {
        let mut out = Vec::new();
        if let Some(section) = self.catalog.find(name) {
            out.push(Action::PushHistory(HistoryEntry::for_section(section)));
        }
        out
    }

    /// A click on an element carrying `data-section`.
    pub fn on_link_click(&mut self, name: &str, origin: LinkOrigin) -> Vec<Action> {
        let mut out = Vec::new();
        match origin {
            LinkOrigin::Nav => self.close_menu(&mut out),
            LinkOrigin::Modal => self.close_modal(&mut out),
            LinkOrigin::Content => {}
        }
        if self.show_section_into(name, &mut out) {
            self.update_active_nav_link_into(name, &mut out);
            out.extend(self.update_history(name));
        }
        out
    }

    /// Browser back/forward. `state` is the popped entry's payload, if any.
    pub fn on_pop_state(&mut self, state: Option<&HistoryState>) -> Vec<Action> {
        let section = HistoryState::section_or_home(state);
        log::debug!("popstate -> {section}");
        let mut out = Vec::new();
        if self.show_section_into(section.as_str(), &mut out) {
            self.update_active_nav_link_into(section.as_str(), &mut out);
        }
        out
    }

    /// Returns `false` when `name` is undeclared and the modal was opened instead.
    pub(crate) fn show_section_into(&mut self, name: &str, out: &mut Vec<Action>) -> bool {
        let Some(target) = self.catalog.find(name).cloned() else {
            log::debug!("section `{name}` not declared, opening not-found modal");
            self.open_modal(out);
            return false;
        };

        for section in self.catalog.iter() {
            out.push(Action::SetSectionHidden { section: section.clone(), hidden: *section != target });
        }
        out.push(Action::SetTestimonialsHidden(!target.is_home()));
        out.push(Action::ScrollToTop);
        out.push(Action::SetTitle(target.title()));
        self.arm(TimerKey::EntranceStart(target.clone()), self.config.entrance_delay_ms, out);

        log::debug!("section {} -> {target}", self.ui.current);
        self.ui.current = target;
        true
    }

    pub(crate) fn update_active_nav_link_into(&self, name: &str, out: &mut Vec<Action>) {
        for (index, link) in self.nav_links.iter().enumerate() {
            out.push(Action::SetNavLinkActive { index, active: link.section == name });
        }
    }
}
