//! Owns the core and the page, forwards DOM events, applies actions and runs
//! the timers and fetches the core asks for.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, Node, PopStateEvent};

use site::action::Action;
use site::config::SubmitMode;
use site::engine::{NavLink, SiteCore};
use site::error::SubmitError;
use site::form::{FormKind, Submission};
use site::history::HistoryState;
use site::router::LinkOrigin;
use site::schedule::{TimerHandle, TimerKey};
use site::section::SectionCatalog;

use crate::apply::apply;
use crate::config::read_config;
use crate::error::DomError;
use crate::page::{Page, control_value, query, query_all};
use crate::reveal;
use crate::selectors::{DATA_SECTION, MODAL, MODAL_OVERLAY, NAV_LINK, NAV_LINK_CLASS, SECTION_LINK};
use crate::submit::post_submission;
use crate::wiring;

pub struct Host {
    core: RefCell<SiteCore>,
    page: Page,
    timers: RefCell<HashMap<TimerKey, Timeout>>,
    submit_url: Option<String>,
}

/// Scan the page, build the core, wire every listener and render home.
///
/// # Errors
///
/// Fails only when the window or document is unavailable or the section list
/// cannot be read. Every other control is wired on its own; a missing one is
/// logged and left unwired.
pub fn boot() -> Result<(), DomError> {
    let page = Page::scan()?;
    let config = read_config(&page.document);
    log::set_max_level(config.level_filter());

    let catalog = SectionCatalog::new(page.section_ids()?);
    let nav_links = page.nav_link_sections().into_iter().map(NavLink::new).collect();
    let submit_url = match &config.submit {
        SubmitMode::Endpoint { url } => Some(url.clone()),
        SubmitMode::Simulated { .. } => None,
    };
    log::info!("{} sections declared, submit mode {:?}", catalog.len(), config.submit);

    let host = Rc::new(Host {
        core: RefCell::new(SiteCore::new(config, catalog, nav_links)),
        page,
        timers: RefCell::new(HashMap::new()),
        submit_url,
    });

    wiring::report(
        "boot",
        [
            ("section links", wire_section_links(&host)),
            ("menu", wire_menu(&host)),
            ("history", wire_history(&host)),
        ],
    );
    wire_modal(&host);
    let forms = wiring::report("forms", FormKind::ALL.map(|kind| (kind, wire_form(&host, kind))));
    log::debug!("{forms} form(s) wired");
    if let Err(err) = reveal::init_reveal(&host.page) {
        log::warn!("scroll reveal disabled: {err}");
    }
    if let Err(err) = reveal::preload_images() {
        log::warn!("image preload failed: {err}");
    }

    host.dispatch(SiteCore::start);
    Ok(())
}

impl Host {
    /// Run one core handler and apply what it returns.
    ///
    /// The core borrow ends before any action is applied: DOM writes such as
    /// `focus()` can fire listeners synchronously, and those dispatch again.
    fn dispatch(self: &Rc<Self>, handler: impl FnOnce(&mut SiteCore) -> Vec<Action>) {
        let actions = handler(&mut *self.core.borrow_mut());
        for action in actions {
            match action {
                Action::StartTimer { handle, delay_ms } => self.start_timer(handle, delay_ms),
                Action::Submit(submission) => self.submit(submission),
                other => {
                    if let Err(err) = apply(&self.page, &other) {
                        log::warn!("skipped {other:?}: {err}");
                    }
                }
            }
        }
    }

    /// Replacing a key's entry drops the older `Timeout`, which clears it.
    fn start_timer(self: &Rc<Self>, handle: TimerHandle, delay_ms: u32) {
        let key = handle.key.clone();
        let host = Rc::clone(self);
        let timeout = Timeout::new(delay_ms, move || {
            let fired = host.timers.borrow_mut().remove(&handle.key);
            host.dispatch(|core| core.on_timer(&handle));
            drop(fired);
        });
        self.timers.borrow_mut().insert(key, timeout);
    }

    fn submit(self: &Rc<Self>, submission: Submission) {
        let kind = submission.kind;
        let Some(url) = self.submit_url.clone() else {
            self.dispatch(|core| {
                core.on_submit_result(kind, Err(SubmitError::Transport("no submission endpoint".into())))
            });
            return;
        };
        let host = Rc::clone(self);
        spawn_local(async move {
            let result = post_submission(&url, &submission).await;
            host.dispatch(|core| core.on_submit_result(kind, result));
        });
    }
}

fn listen<T>(target: &T, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), DomError>
where
    T: AsRef<EventTarget>,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.as_ref().add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn link_origin(link: &Element) -> Result<LinkOrigin, DomError> {
    if link.closest(MODAL)?.is_some() {
        Ok(LinkOrigin::Modal)
    } else if link.class_list().contains(NAV_LINK_CLASS) {
        Ok(LinkOrigin::Nav)
    } else {
        Ok(LinkOrigin::Content)
    }
}

fn wire_section_links(host: &Rc<Host>) -> Result<(), DomError> {
    let links = query_all(&host.page.document, SECTION_LINK)?;
    let wired = wiring::report(
        "section links",
        links
            .iter()
            .filter_map(|link| link.get_attribute(DATA_SECTION).map(|section| (link, section)))
            .map(|(link, section)| (section.clone(), wire_section_link(host, link, section))),
    );
    log::debug!("wired {wired} section links");
    Ok(())
}

fn wire_section_link(host: &Rc<Host>, link: &Element, section: String) -> Result<(), DomError> {
    let origin = link_origin(link)?;
    let h = Rc::clone(host);
    listen(link, "click", move |event| {
        event.prevent_default();
        h.dispatch(|core| core.on_link_click(&section, origin));
    })
}

fn wire_menu(host: &Rc<Host>) -> Result<(), DomError> {
    let menu = host.page.menu()?;
    let toggle = host.page.toggle()?;

    let h = Rc::clone(host);
    listen(&toggle, "click", move |_| h.dispatch(SiteCore::on_menu_toggle))?;

    for link in query_all(&host.page.document, NAV_LINK)? {
        if link.has_attribute(DATA_SECTION) {
            continue;
        }
        let h = Rc::clone(host);
        listen(&link, "click", move |_| h.dispatch(SiteCore::on_menu_link_click))?;
    }

    let h = Rc::clone(host);
    listen(&host.page.document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = target.is_some_and(|node| menu.contains(Some(&node)) || toggle.contains(Some(&node)));
        h.dispatch(|core| core.on_document_click(inside));
    })?;

    let h = Rc::clone(host);
    listen(&host.page.window, "resize", move |_| match h.page.window.inner_width() {
        Ok(width) => {
            let width = width.as_f64().unwrap_or_default();
            h.dispatch(|core| core.on_resize(width));
        }
        Err(err) => log::warn!("no viewport width: {}", DomError::from(err)),
    })
}

/// Escape, close button and overlay are wired independently.
fn wire_modal(host: &Rc<Host>) {
    let h = Rc::clone(host);
    let escape = listen(&host.page.document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            h.dispatch(|core| core.on_key_down(&key));
        }
    });
    let close = host.page.modal_close().and_then(|button| close_modal_on_click(host, &button));
    let overlay = host
        .page
        .modal()
        .and_then(|modal| query(&modal, MODAL_OVERLAY))
        .and_then(|overlay| close_modal_on_click(host, &overlay));

    wiring::report("modal", [("escape", escape), ("close", close), ("overlay", overlay)]);
}

fn close_modal_on_click(host: &Rc<Host>, control: &Element) -> Result<(), DomError> {
    let h = Rc::clone(host);
    listen(control, "click", move |_| h.dispatch(SiteCore::on_modal_close))
}

fn wire_history(host: &Rc<Host>) -> Result<(), DomError> {
    let h = Rc::clone(host);
    listen(&host.page.window, "popstate", move |event| {
        let state = event.dyn_ref::<PopStateEvent>().and_then(|e| history_state(&e.state()));
        h.dispatch(|core| core.on_pop_state(state.as_ref()));
    })
}

/// `{section}` from a popped entry; anything unreadable counts as no state.
fn history_state(raw: &wasm_bindgen::JsValue) -> Option<HistoryState> {
    if raw.is_null() || raw.is_undefined() {
        return None;
    }
    let json = js_sys::JSON::stringify(raw).map(String::from).map_err(DomError::from);
    match json {
        Ok(json) => match HistoryState::parse(&json) {
            Ok(state) => Some(state),
            Err(err) => {
                log::debug!("foreign history state {json}: {err}");
                None
            }
        },
        Err(err) => {
            log::debug!("unreadable history state: {err}");
            None
        }
    }
}

/// The submit listener goes on first so a form with a missing field still
/// never falls through to a native submit.
fn wire_form(host: &Rc<Host>, kind: FormKind) -> Result<(), DomError> {
    let form = host.page.form(kind)?;
    let h = Rc::clone(host);
    listen(&form, "submit", move |event| {
        event.prevent_default();
        match h.page.form_values(kind) {
            Ok(values) => h.dispatch(|core| core.on_submit(kind, &values)),
            Err(err) => log::warn!("{kind} form unreadable: {err}"),
        }
    })?;

    let scope = format!("{kind} form");
    wiring::report(&scope, kind.fields().iter().map(|rule| (rule.id, wire_field(host, kind, rule.id))));
    Ok(())
}

fn wire_field(host: &Rc<Host>, kind: FormKind, id: &'static str) -> Result<(), DomError> {
    let field = host.page.field(kind, id)?;

    let h = Rc::clone(host);
    let input = field.clone();
    listen(&field, "blur", move |_| {
        let value = control_value(&input).unwrap_or_default();
        h.dispatch(|core| core.on_field_blur(kind, id, &value));
    })?;

    let h = Rc::clone(host);
    listen(&field, "input", move |_| h.dispatch(|core| core.on_field_input(kind, id)))
}
