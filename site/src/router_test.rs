use crate::action::Action;
use crate::harness::{Harness, SECTIONS};
use crate::router::LinkOrigin;

// =============================================================
// show_section
// =============================================================

#[test]
fn show_section_leaves_exactly_target_visible_for_every_section() {
    for name in SECTIONS {
        let mut h = Harness::started();
        let actions = h.core.show_section(name);
        h.apply(actions);
        assert_eq!(h.visible_sections(), vec![name], "showing {name}");
        assert_eq!(h.core.current_section().as_str(), name);
    }
}

#[test]
fn testimonials_visible_only_on_home() {
    let mut h = Harness::started();
    let sequence = ["about", "home", "blog", "booking", "home", "contact"];
    for name in sequence {
        h.click(name);
        assert_eq!(!h.page.testimonials_hidden, name == "home", "after {name}");
    }
}

#[test]
fn show_section_sets_title_and_scrolls() {
    let mut h = Harness::started();
    let scrolls = h.page.scrolls_to_top;
    let actions = h.core.show_section("recipes");
    h.apply(actions);
    assert_eq!(h.page.title, "Keto Recipes - Ketolize");
    assert_eq!(h.page.scrolls_to_top, scrolls + 1);
}

#[test]
fn show_unknown_section_opens_modal_and_changes_nothing() {
    let mut h = Harness::started();
    h.click("blog");
    let before_hidden = h.page.hidden.clone();
    let before_links = h.page.active_links.clone();
    let before_history = h.page.history.len();

    let actions = h.core.show_section("pricing");
    assert!(!actions.iter().any(|a| matches!(a, Action::SetSectionHidden { .. })));
    h.apply(actions);

    assert!(h.page.modal_open);
    assert_eq!(h.page.hidden, before_hidden);
    assert_eq!(h.page.active_links, before_links);
    assert_eq!(h.page.history.len(), before_history);
    assert_eq!(h.core.current_section().as_str(), "blog");
}

#[test]
fn testimonials_is_not_routable() {
    let mut h = Harness::started();
    let actions = h.core.show_section("testimonials");
    h.apply(actions);
    assert!(h.page.modal_open);
    assert_eq!(h.visible_sections(), vec!["home"]);
}

// =============================================================
// update_active_nav_link
// =============================================================

#[test]
fn active_links_always_equal_links_for_current_section() {
    let mut h = Harness::started();
    for name in ["contact", "about", "booking", "home", "services"] {
        h.click(name);
        assert_eq!(h.page.active_links, h.links_for(name), "after {name}");
    }
}

#[test]
fn duplicate_links_are_all_marked() {
    let mut h = Harness::started();
    h.click("contact");
    assert_eq!(h.page.active_links.len(), 2);
}

#[test]
fn section_without_nav_link_clears_all_marks() {
    let mut h = Harness::started();
    h.click("booking");
    assert!(h.page.active_links.is_empty());
}

// =============================================================
// update_history
// =============================================================

#[test]
fn update_history_maps_home_to_root() {
    let h = Harness::started();
    let actions = h.core.update_history("home");
    let [Action::PushHistory(entry)] = actions.as_slice() else {
        panic!("expected one history entry, got {actions:?}");
    };
    assert_eq!(entry.url, "/");
    assert_eq!(entry.state.section.as_str(), "home");
}

#[test]
fn update_history_uses_fragment_and_title() {
    let h = Harness::started();
    let actions = h.core.update_history("services");
    let [Action::PushHistory(entry)] = actions.as_slice() else {
        panic!("expected one history entry, got {actions:?}");
    };
    assert_eq!(entry.url, "/#services");
    assert_eq!(entry.title, "Our Services - Ketolize");
}

#[test]
fn update_history_ignores_unknown_section() {
    let h = Harness::started();
    assert!(h.core.update_history("nowhere").is_empty());
}

// =============================================================
// Link clicks and back/forward
// =============================================================

#[test]
fn link_click_pushes_one_history_entry() {
    let mut h = Harness::started();
    h.click("about");
    h.click("blog");
    assert_eq!(h.page.history.len(), 3);
    assert_eq!(h.page.history_index, 2);
}

#[test]
fn unknown_link_click_pushes_nothing() {
    let mut h = Harness::started();
    h.click("pricing");
    assert_eq!(h.page.history.len(), 1);
    assert!(h.page.modal_open);
}

#[test]
fn back_restores_previous_section_and_links() {
    let mut h = Harness::started();
    h.click("about");
    h.click("recipes");
    h.back();
    assert_eq!(h.visible_sections(), vec!["about"]);
    assert_eq!(h.page.active_links, h.links_for("about"));
    assert_eq!(h.page.title, "About Us - Ketolize");
}

#[test]
fn back_to_initial_entry_defaults_to_home() {
    let mut h = Harness::started();
    h.click("services");
    h.back();
    assert_eq!(h.visible_sections(), vec!["home"]);
    assert!(!h.page.testimonials_hidden);
    assert_eq!(h.page.active_links, h.links_for("home"));
}

#[test]
fn back_and_forward_do_not_push_history() {
    let mut h = Harness::started();
    h.click("about");
    h.click("blog");
    h.back();
    h.forward();
    assert_eq!(h.page.history.len(), 3);
    assert_eq!(h.visible_sections(), vec!["blog"]);
}

#[test]
fn content_link_keeps_menu_state() {
    let mut h = Harness::started();
    let actions = h.core.on_menu_toggle();
    h.apply(actions);
    let actions = h.core.on_link_click("booking", LinkOrigin::Content);
    h.apply(actions);
    assert!(h.page.menu_open);
    assert_eq!(h.visible_sections(), vec!["booking"]);
}

#[test]
fn nav_link_click_closes_menu() {
    let mut h = Harness::started();
    let actions = h.core.on_menu_toggle();
    h.apply(actions);
    h.click("blog");
    assert!(!h.page.menu_open);
    assert!(!h.page.scroll_locked);
}
