//! Applies core [`Action`]s to the document.
//!
//! `StartTimer` and `Submit` need the shared host and are handled in
//! [`crate::host`]; everything else is a pure DOM write done here.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use site::action::Action;
use site::form::FormKind;
use site::history::HistoryEntry;
use site::submit::{Banner, BannerId, BannerTone};

use crate::error::DomError;
use crate::page::{Page, query_all};
use crate::selectors::{
    ACTIVE, ARIA_EXPANDED, ARIA_HIDDEN, ARIA_INVALID, BANNER_CLASS, BANNER_ERROR_CLASS, DATA_IDLE_LABEL, ERROR,
    HAMBURGER_BAR, HIDDEN,
};
use crate::style::{self, Decl};

/// Apply one DOM action.
///
/// # Errors
///
/// Returns the first failed lookup or DOM call; the caller logs it and
/// continues with the next action.
pub fn apply(page: &Page, action: &Action) -> Result<(), DomError> {
    match action {
        Action::SetSectionHidden { section, hidden } => set_class(&page.section(section.as_str())?, HIDDEN, *hidden),
        Action::SetTestimonialsHidden(hidden) => set_class(&page.testimonials()?, HIDDEN, *hidden),
        Action::SetNavLinkActive { index, active } => set_class(page.nav_link(*index)?, ACTIVE, *active),
        Action::SetTitle(title) => {
            page.document.set_title(title);
            Ok(())
        }
        Action::ScrollToTop => {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            page.window.scroll_to_with_scroll_to_options(&options);
            Ok(())
        }
        Action::PushHistory(entry) => push_history(page, entry),
        Action::BeginEntrance(section) => begin_entrance(page, &page.section(section.as_str())?),
        Action::EndEntrance(section) => set_styles(&page.section(section.as_str())?.style(), style::ENTRANCE_CLEAR),
        Action::SetMenuOpen(open) => set_menu_open(page, *open),
        Action::SetModalOpen(open) => set_modal_open(page, *open),
        Action::SetScrollLocked(locked) => set_styles(&page.body()?.style(), &[style::scroll_lock(*locked)]),
        Action::SetFieldError { form, field, message } => set_field_error(page, *form, field, message.as_deref()),
        Action::SetSubmitBusy { form, busy } => set_submit_busy(page, *form, *busy),
        Action::ResetForm(form) => {
            page.form(*form)?.reset();
            Ok(())
        }
        Action::ShowBanner(banner) => show_banner(page, banner),
        Action::RemoveBanner(id) => {
            remove_banner(page, *id);
            Ok(())
        }
        Action::StartTimer { .. } | Action::Submit(_) => Ok(()),
    }
}

fn set_class(el: &Element, class: &str, enabled: bool) -> Result<(), DomError> {
    el.class_list().toggle_with_force(class, enabled)?;
    Ok(())
}

pub(crate) fn set_styles(style: &CssStyleDeclaration, decls: &[Decl]) -> Result<(), DomError> {
    for (property, value) in decls {
        style.set_property(property, value)?;
    }
    Ok(())
}

fn push_history(page: &Page, entry: &HistoryEntry) -> Result<(), DomError> {
    let json = serde_json::to_string(&entry.state).map_err(|e| DomError::Js(e.to_string()))?;
    let state = js_sys::JSON::parse(&json)?;
    page.window.history()?.push_state_with_url(&state, &entry.title, Some(&entry.url))?;
    Ok(())
}

/// Snap to the start pose, then animate to rest on the next frame.
fn begin_entrance(page: &Page, section: &HtmlElement) -> Result<(), DomError> {
    set_styles(&section.style(), style::ENTRANCE_FROM)?;
    let target = section.clone();
    let settle = Closure::once_into_js(move || {
        if let Err(err) = set_styles(&target.style(), style::ENTRANCE_TO) {
            log::warn!("entrance settle failed: {err}");
        }
    });
    page.window.request_animation_frame(settle.unchecked_ref())?;
    Ok(())
}

fn set_menu_open(page: &Page, open: bool) -> Result<(), DomError> {
    set_class(&page.menu()?, ACTIVE, open)?;
    let toggle = page.toggle()?;
    toggle.set_attribute(ARIA_EXPANDED, if open { "true" } else { "false" })?;

    let bars = query_all(&toggle, HAMBURGER_BAR)?;
    if bars.len() >= 3 {
        for (bar, decl) in bars.iter().zip(style::hamburger_bars(open)) {
            if let Some(bar) = bar.dyn_ref::<HtmlElement>() {
                set_styles(&bar.style(), &[decl])?;
            }
        }
    }
    Ok(())
}

fn set_modal_open(page: &Page, open: bool) -> Result<(), DomError> {
    let modal = page.modal()?;
    set_class(&modal, HIDDEN, !open)?;
    modal.set_attribute(ARIA_HIDDEN, if open { "false" } else { "true" })?;
    if open {
        page.modal_close()?.focus()?;
    }
    Ok(())
}

fn set_field_error(page: &Page, form: FormKind, field: &str, message: Option<&str>) -> Result<(), DomError> {
    let input = page.field(form, field)?;
    match page.error_slot(&input) {
        Ok(slot) => {
            slot.set_text_content(Some(message.unwrap_or_default()));
            set_styles(&slot.style(), &[style::error_slot(message.is_some())])?;
        }
        Err(err) => log::debug!("no error slot for #{field}: {err}"),
    }
    set_class(&input, ERROR, message.is_some())?;
    if message.is_some() {
        input.set_attribute(ARIA_INVALID, "true")?;
    } else {
        input.remove_attribute(ARIA_INVALID)?;
    }
    set_styles(&input.style(), &style::field_error(message.is_some()))
}

fn set_submit_busy(page: &Page, form: FormKind, busy: bool) -> Result<(), DomError> {
    let button = page.submit_button(form)?;
    if busy {
        let idle = button.text_content().unwrap_or_default();
        button.set_attribute(DATA_IDLE_LABEL, &idle)?;
        button.set_text_content(Some(site::consts::SUBMITTING_LABEL));
    } else if let Some(idle) = button.get_attribute(DATA_IDLE_LABEL) {
        button.set_text_content(Some(&idle));
        button.remove_attribute(DATA_IDLE_LABEL)?;
    }
    button.set_disabled(busy);
    set_styles(&button.style(), &[style::submit_button(busy)])
}

fn show_banner(page: &Page, banner: &Banner) -> Result<(), DomError> {
    let form = page.form(banner.form)?;
    let outer = page.document.create_element("div")?;
    outer.set_id(&banner.id.to_string());
    outer.set_class_name(BANNER_CLASS);
    if banner.tone == BannerTone::Error {
        outer.class_list().add_1(BANNER_ERROR_CLASS)?;
    }
    let inner = page.document.create_element("div")?;
    inner.set_attribute("style", style::banner(banner.tone))?;
    inner.set_text_content(Some(&banner.message));
    outer.append_child(&inner)?;
    form.insert_before(&outer, form.first_child().as_ref())?;
    Ok(())
}

fn remove_banner(page: &Page, id: BannerId) {
    match page.document.get_element_by_id(&id.to_string()) {
        Some(el) => el.remove(),
        None => log::debug!("{id} already gone"),
    }
}
