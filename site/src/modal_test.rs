use crate::action::Action;
use crate::harness::Harness;

fn open_not_found(h: &mut Harness) {
    let actions = h.core.show_section("does-not-exist");
    h.apply(actions);
}

#[test]
fn unknown_section_opens_modal_and_locks_scroll() {
    let mut h = Harness::started();
    open_not_found(&mut h);
    assert!(h.page.modal_open);
    assert!(h.page.scroll_locked);
    assert!(h.core.is_modal_open());
}

#[test]
fn second_unknown_section_does_not_reopen() {
    let mut h = Harness::started();
    open_not_found(&mut h);
    let actions = h.core.show_section("still-missing");
    assert!(actions.is_empty());
}

#[test]
fn close_button_closes_and_unlocks() {
    let mut h = Harness::started();
    open_not_found(&mut h);
    let actions = h.core.on_modal_close();
    h.apply(actions);
    assert!(!h.page.modal_open);
    assert!(!h.page.scroll_locked);
}

#[test]
fn escape_closes_only_while_open() {
    let mut h = Harness::started();
    assert!(h.core.on_key_down("Escape").is_empty());
    open_not_found(&mut h);
    assert!(h.core.on_key_down("Enter").is_empty());
    let actions = h.core.on_key_down("Escape");
    assert_eq!(actions, vec![Action::SetModalOpen(false), Action::SetScrollLocked(false)]);
}

#[test]
fn close_when_closed_is_noop() {
    let mut h = Harness::started();
    assert!(h.core.on_modal_close().is_empty());
}

#[test]
fn return_home_closes_modal_and_routes_home() {
    let mut h = Harness::started();
    h.click("blog");
    open_not_found(&mut h);
    let history_before = h.page.history.len();

    let actions = h.core.on_modal_home();
    h.apply(actions);

    assert!(!h.page.modal_open);
    assert_eq!(h.visible_sections(), vec!["home"]);
    assert!(!h.page.testimonials_hidden);
    assert_eq!(h.page.active_links, h.links_for("home"));
    assert_eq!(h.page.history.len(), history_before + 1);
}

#[test]
fn unknown_popstate_opens_modal_without_moving() {
    let mut h = Harness::started();
    h.click("about");
    let state = crate::history::HistoryState { section: crate::section::SectionId::new("gone") };
    let actions = h.core.on_pop_state(Some(&state));
    h.apply(actions);
    assert!(h.page.modal_open);
    assert_eq!(h.visible_sections(), vec!["about"]);
}
