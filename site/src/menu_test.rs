use crate::action::Action;
use crate::config::SiteConfig;
use crate::harness::Harness;

fn open_menu(h: &mut Harness) {
    let actions = h.core.on_menu_toggle();
    h.apply(actions);
}

#[test]
fn toggle_opens_then_closes() {
    let mut h = Harness::started();
    open_menu(&mut h);
    assert!(h.page.menu_open);
    assert!(h.page.scroll_locked);
    assert!(h.core.is_menu_open());

    open_menu(&mut h);
    assert!(!h.page.menu_open);
    assert!(!h.page.scroll_locked);
}

#[test]
fn open_emits_menu_then_scroll_lock() {
    let mut h = Harness::started();
    let actions = h.core.on_menu_toggle();
    assert_eq!(actions, vec![Action::SetMenuOpen(true), Action::SetScrollLocked(true)]);
}

#[test]
fn click_outside_closes_open_menu() {
    let mut h = Harness::started();
    open_menu(&mut h);
    let actions = h.core.on_document_click(false);
    h.apply(actions);
    assert!(!h.page.menu_open);
}

#[test]
fn click_inside_keeps_menu_open() {
    let mut h = Harness::started();
    open_menu(&mut h);
    assert!(h.core.on_document_click(true).is_empty());
    assert!(h.core.is_menu_open());
}

#[test]
fn click_outside_closed_menu_is_noop() {
    let mut h = Harness::started();
    assert!(h.core.on_document_click(false).is_empty());
}

#[test]
fn resize_past_breakpoint_closes_menu_after_debounce() {
    let mut h = Harness::started();
    open_menu(&mut h);
    let actions = h.core.on_resize(1024.0);
    h.apply(actions);

    h.advance(249);
    assert!(h.page.menu_open);
    h.advance(1);
    assert!(!h.page.menu_open);
    assert!(!h.core.is_menu_open());
    assert!(!h.page.scroll_locked);
}

#[test]
fn resize_burst_acts_on_last_width_only() {
    let mut h = Harness::started();
    open_menu(&mut h);
    for width in [1200.0, 900.0, 700.0] {
        let actions = h.core.on_resize(width);
        h.apply(actions);
        h.advance(100);
    }
    let actions = h.core.on_resize(500.0);
    h.apply(actions);
    h.advance(250);
    assert!(h.page.menu_open);
}

#[test]
fn resize_exactly_at_breakpoint_keeps_menu() {
    let mut h = Harness::started();
    open_menu(&mut h);
    let actions = h.core.on_resize(640.0);
    h.apply(actions);
    h.advance(250);
    assert!(h.page.menu_open);
}

#[test]
fn resize_with_closed_menu_emits_nothing_on_fire() {
    let mut h = Harness::started();
    let actions = h.core.on_resize(1024.0);
    h.apply(actions);
    let toggles_before = h.page.menu_open;
    h.advance(250);
    assert_eq!(h.page.menu_open, toggles_before);
    assert!(!h.core.is_menu_open());
}

#[test]
fn breakpoint_and_debounce_follow_config() {
    let config = SiteConfig { menu_breakpoint_px: 1000.0, resize_debounce_ms: 10, ..SiteConfig::default() };
    let mut h = Harness::with_config(config);
    let actions = h.core.start();
    h.apply(actions);
    open_menu(&mut h);
    let actions = h.core.on_resize(900.0);
    h.apply(actions);
    h.advance(10);
    assert!(h.page.menu_open);
    let actions = h.core.on_resize(1001.0);
    h.apply(actions);
    h.advance(10);
    assert!(!h.page.menu_open);
}

#[test]
fn closing_menu_keeps_scroll_locked_while_modal_open() {
    let mut h = Harness::started();
    open_menu(&mut h);
    let actions = h.core.show_section("missing");
    h.apply(actions);
    assert!(h.page.modal_open);
    let actions = h.core.on_document_click(false);
    h.apply(actions);
    assert!(!h.page.menu_open);
    assert!(h.page.scroll_locked);
}

#[test]
fn plain_menu_link_closes_menu() {
    let mut h = Harness::started();
    open_menu(&mut h);
    let actions = h.core.on_menu_link_click();
    h.apply(actions);
    assert!(!h.page.menu_open);
    assert!(!h.page.scroll_locked);
    assert!(h.core.on_menu_link_click().is_empty());
}
