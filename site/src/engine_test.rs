use super::*;
use crate::harness::{Harness, SECTIONS, nav_links};

// =============================================================
// Construction and defaults
// =============================================================

#[test]
fn ui_state_default_is_home_with_everything_closed() {
    let ui = UiState::default();
    assert_eq!(ui.current.as_str(), "home");
    assert!(!ui.menu_open);
    assert!(!ui.modal_open);
    assert!(ui.pending_width.is_none());
    assert!(ui.busy_forms.is_empty());
    assert!(ui.banners.is_empty());
}

#[test]
fn with_state_uses_injected_state() {
    let ui = UiState { menu_open: true, current: SectionId::new("blog"), ..UiState::default() };
    let core = SiteCore::with_state(SiteConfig::default(), SectionCatalog::new(SECTIONS), nav_links(), ui);
    assert!(core.is_menu_open());
    assert!(!core.is_modal_open());
    assert_eq!(core.current_section().as_str(), "blog");
}

// =============================================================
// start
// =============================================================

#[test]
fn start_shows_home_and_marks_home_link() {
    let mut h = Harness::new();
    let actions = h.core.start();
    assert!(!actions.iter().any(|a| matches!(a, Action::PushHistory(_))));
    h.apply(actions);
    assert_eq!(h.visible_sections(), vec!["home"]);
    assert!(!h.page.testimonials_hidden);
    assert_eq!(h.page.active_links, h.links_for("home"));
    assert_eq!(h.page.title, "Ketolize - Balance Body & Soul");
    assert_eq!(h.page.history.len(), 1);
}

#[test]
fn start_without_home_section_opens_modal() {
    let mut core = SiteCore::new(SiteConfig::default(), SectionCatalog::new(["about"]), nav_links());
    let actions = core.start();
    assert!(actions.contains(&Action::SetModalOpen(true)));
    assert!(core.is_modal_open());
}

// =============================================================
// Timers
// =============================================================

#[test]
fn entrance_runs_after_delay_and_cleans_up() {
    let mut h = Harness::new();
    let actions = h.core.start();
    h.apply(actions);

    h.advance(99);
    assert!(h.page.entrances_begun.is_empty());
    h.advance(1);
    assert_eq!(h.page.entrances_begun, vec![SectionId::new("home")]);
    assert!(h.page.entrances_ended.is_empty());
    h.advance(699);
    assert!(h.page.entrances_ended.is_empty());
    h.advance(1);
    assert_eq!(h.page.entrances_ended, vec![SectionId::new("home")]);
    assert_eq!(h.pending_timers(), 0);
}

#[test]
fn stale_timer_produces_no_actions() {
    let mut core = SiteCore::new(SiteConfig::default(), SectionCatalog::new(SECTIONS), nav_links());
    let first = core.on_resize(800.0);
    let Some(Action::StartTimer { handle, .. }) = first.first().cloned() else {
        panic!("resize should arm the debounce timer");
    };
    core.on_resize(900.0);
    assert!(core.on_timer(&handle).is_empty());
}

#[test]
fn repeated_navigation_to_same_section_restarts_entrance() {
    let mut h = Harness::started();
    h.click("about");
    h.advance(50);
    h.click("about");
    h.advance(1_000);
    let about_starts = h.page.entrances_begun.iter().filter(|s| s.as_str() == "about").count();
    assert_eq!(about_starts, 1);
}
