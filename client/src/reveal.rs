//! Decoration that lives outside the core: card reveal on scroll and hero
//! image preloading.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::apply::set_styles;
use crate::error::DomError;
use crate::page::{Page, query_all};
use crate::selectors::REVEAL_TARGETS;
use crate::style::{REVEAL_FROM, REVEAL_PLAY};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

const HERO_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1490645935967-10de6ba17061?w=600&h=400&fit=crop",
    "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=500&h=600&fit=crop",
];

/// Hide every card and play its entrance the first time it scrolls into view.
///
/// Does nothing when the browser lacks `IntersectionObserver`; the cards then
/// keep their stylesheet appearance.
///
/// # Errors
///
/// Propagates a failed observer construction or style write.
pub fn init_reveal(page: &Page) -> Result<(), DomError> {
    if !js_sys::Reflect::has(&page.window, &JsValue::from_str("IntersectionObserver"))? {
        log::info!("IntersectionObserver unavailable, skipping scroll reveal");
        return Ok(());
    }

    let on_intersect = Closure::<dyn FnMut(Array)>::new(|entries: Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Some(target) = entry.target().dyn_ref::<HtmlElement>() {
                if let Err(err) = set_styles(&target.style(), REVEAL_PLAY) {
                    log::warn!("reveal failed: {err}");
                }
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    on_intersect.forget();

    let targets = query_all(&page.document, REVEAL_TARGETS)?;
    for el in &targets {
        if let Some(card) = el.dyn_ref::<HtmlElement>() {
            set_styles(&card.style(), REVEAL_FROM)?;
        }
        observer.observe(el);
    }
    log::debug!("observing {} cards for reveal", targets.len());
    Ok(())
}

/// Warm the cache for the hero images.
///
/// # Errors
///
/// Fails if an `<img>` cannot be created.
pub fn preload_images() -> Result<(), DomError> {
    for src in HERO_IMAGES {
        HtmlImageElement::new()?.set_src(src);
    }
    Ok(())
}
