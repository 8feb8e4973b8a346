//! The site core: all interaction state and the event entry points.
//!
//! [`SiteCore`] is the only owner of UI state. Handlers are split across
//! modules by concern ([`crate::router`], [`crate::menu`], [`crate::modal`],
//! [`crate::submit`]) as `impl SiteCore` blocks; each returns the
//! [`Action`]s the host must apply, in order.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::collections::BTreeSet;

use crate::action::Action;
use crate::config::SiteConfig;
use crate::consts::HOME_SECTION;
use crate::form::FormKind;
use crate::schedule::{Scheduler, TimerHandle, TimerKey};
use crate::section::{SectionCatalog, SectionId};
use crate::submit::Banner;

/// A `.nav__link` registered in document order.
///
/// `section` is the raw `data-section` value and may name an undeclared
/// section; such a link is simply never marked active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub section: String,
}

impl NavLink {
    #[must_use]
    pub fn new(section: impl Into<String>) -> Self {
        Self { section: section.into() }
    }
}

/// Mutable interaction state, injectable for tests.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Section currently visible.
    pub current: SectionId,
    pub menu_open: bool,
    pub modal_open: bool,
    /// Width from the latest resize event, consumed when the debounce fires.
    pub pending_width: Option<f64>,
    /// Forms with a submission in flight.
    pub busy_forms: BTreeSet<FormKind>,
    /// Banners currently on screen, oldest first.
    pub banners: Vec<Banner>,
    pub next_banner: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            current: SectionId::new(HOME_SECTION),
            menu_open: false,
            modal_open: false,
            pending_width: None,
            busy_forms: BTreeSet::new(),
            banners: Vec::new(),
            next_banner: 0,
        }
    }
}

pub struct SiteCore {
    pub config: SiteConfig,
    pub catalog: SectionCatalog,
    pub nav_links: Vec<NavLink>,
    pub ui: UiState,
    pub scheduler: Scheduler,
}

impl SiteCore {
    #[must_use]
    pub fn new(config: SiteConfig, catalog: SectionCatalog, nav_links: Vec<NavLink>) -> Self {
        Self::with_state(config, catalog, nav_links, UiState::default())
    }

    #[must_use]
    pub fn with_state(config: SiteConfig, catalog: SectionCatalog, nav_links: Vec<NavLink>, ui: UiState) -> Self {
        Self { config, catalog, nav_links, ui, scheduler: Scheduler::new() }
    }

    /// Initial render: show home and mark its links, without a history entry.
    pub fn start(&mut self) -> Vec<Action> {
        log::debug!("site core starting with {} sections, {} nav links", self.catalog.len(), self.nav_links.len());
        let mut out = Vec::new();
        if self.show_section_into(HOME_SECTION, &mut out) {
            self.update_active_nav_link_into(HOME_SECTION, &mut out);
        }
        out
    }

    /// Report a timer expiry. Stale handles produce no actions.
    pub fn on_timer(&mut self, handle: &TimerHandle) -> Vec<Action> {
        if !self.scheduler.take(handle) {
            log::trace!("ignoring stale timer {:?}", handle.key);
            return Vec::new();
        }
        let mut out = Vec::new();
        match &handle.key {
            TimerKey::EntranceStart(section) => {
                out.push(Action::BeginEntrance(section.clone()));
                self.arm(TimerKey::EntranceEnd(section.clone()), self.config.entrance_cleanup_ms, &mut out);
            }
            TimerKey::EntranceEnd(section) => out.push(Action::EndEntrance(section.clone())),
            TimerKey::ResizeDebounce => self.apply_resize(&mut out),
            TimerKey::SubmitLatency(kind) => self.complete_submission(*kind, Ok(()), &mut out),
            TimerKey::BannerDismiss(id) => self.dismiss_banner(*id, &mut out),
        }
        out
    }

    // --- Queries ---

    #[must_use]
    pub fn current_section(&self) -> &SectionId {
        &self.ui.current
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.ui.menu_open
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.ui.modal_open
    }

    // --- Shared helpers ---

    pub(crate) fn arm(&mut self, key: TimerKey, delay_ms: u32, out: &mut Vec<Action>) {
        let handle = self.scheduler.schedule(key);
        out.push(Action::StartTimer { handle, delay_ms });
    }

    /// Page scroll stays suppressed while either the menu or the modal is open.
    pub(crate) fn sync_scroll_lock(&self, out: &mut Vec<Action>) {
        out.push(Action::SetScrollLocked(self.ui.menu_open || self.ui.modal_open));
    }
}
