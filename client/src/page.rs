//! Typed lookups over the static page.
//!
//! Every lookup returns `Result<_, DomError>`; a missing element is reported
//! to the caller instead of being skipped silently.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

use site::form::{FieldValues, FormKind};

use crate::error::DomError;
use crate::selectors::{
    DATA_SECTION, ERROR_MESSAGE, FORM_CONTROL, MODAL, MODAL_CLOSE, NAV_LINK, NAV_MENU, NAV_TOGGLE, SECTIONS,
    SUBMIT_BUTTON, TESTIMONIALS, TESTIMONIALS_CLASS, form_selector,
};

pub struct Page {
    pub window: Window,
    pub document: Document,
    nav_links: Vec<Element>,
}

impl Page {
    /// Capture the window, document and the ordered `.nav__link` list.
    ///
    /// # Errors
    ///
    /// Fails only if there is no window or document at all.
    pub fn scan() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or_else(|| DomError::Missing("window".into()))?;
        let document = window.document().ok_or_else(|| DomError::Missing("document".into()))?;
        let nav_links = query_all(&document, NAV_LINK)?;
        Ok(Self { window, document, nav_links })
    }

    /// Ids of the routable sections in document order, testimonials excluded.
    ///
    /// # Errors
    ///
    /// Propagates a failed `querySelectorAll`.
    pub fn section_ids(&self) -> Result<Vec<String>, DomError> {
        Ok(query_all(&self.document, SECTIONS)?
            .into_iter()
            .filter(|el| !el.class_list().contains(TESTIMONIALS_CLASS))
            .map(|el| el.id())
            .filter(|id| !id.is_empty())
            .collect())
    }

    /// `data-section` of each nav link, empty when the attribute is absent.
    #[must_use]
    pub fn nav_link_sections(&self) -> Vec<String> {
        self.nav_links
            .iter()
            .map(|el| el.get_attribute(DATA_SECTION).unwrap_or_default())
            .collect()
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when no link was registered at `index`.
    pub fn nav_link(&self, index: usize) -> Result<&Element, DomError> {
        self.nav_links.get(index).ok_or_else(|| DomError::Missing(format!("{NAV_LINK}[{index}]")))
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when no element carries the section's id.
    pub fn section(&self, id: &str) -> Result<HtmlElement, DomError> {
        let el = self.document.get_element_by_id(id).ok_or_else(|| DomError::Missing(format!("#{id}")))?;
        as_html(el, id)
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when the page has no testimonials block.
    pub fn testimonials(&self) -> Result<Element, DomError> {
        query(&self.document, TESTIMONIALS)
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when the menu is absent.
    pub fn menu(&self) -> Result<Element, DomError> {
        query(&self.document, NAV_MENU)
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when the toggle is absent.
    pub fn toggle(&self) -> Result<Element, DomError> {
        query(&self.document, NAV_TOGGLE)
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when the modal is absent.
    pub fn modal(&self) -> Result<Element, DomError> {
        query(&self.document, MODAL)
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when the modal has no close control.
    pub fn modal_close(&self) -> Result<HtmlElement, DomError> {
        as_html(query(&self.modal()?, MODAL_CLOSE)?, MODAL_CLOSE)
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when the document has no `<body>`.
    pub fn body(&self) -> Result<HtmlElement, DomError> {
        self.document.body().ok_or_else(|| DomError::Missing("body".into()))
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] / [`DomError::WrongType`] for an absent or non-form root.
    pub fn form(&self, kind: FormKind) -> Result<HtmlFormElement, DomError> {
        let selector = form_selector(kind);
        query(&self.document, selector)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| DomError::WrongType(selector.into(), "form"))
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] when the form has no input with `field` as id.
    pub fn field(&self, kind: FormKind, field: &str) -> Result<HtmlElement, DomError> {
        let selector = format!("#{field}");
        as_html(query(&self.form(kind)?, &selector)?, &selector)
    }

    /// The `.error-message` sibling of a field, if the markup provides one.
    ///
    /// # Errors
    ///
    /// [`DomError::Missing`] when the field has no parent or no error slot.
    pub fn error_slot(&self, field: &HtmlElement) -> Result<HtmlElement, DomError> {
        let parent = field
            .parent_element()
            .ok_or_else(|| DomError::Missing(format!("parent of #{}", field.id())))?;
        as_html(query(&parent, ERROR_MESSAGE)?, ERROR_MESSAGE)
    }

    /// # Errors
    ///
    /// [`DomError::Missing`] / [`DomError::WrongType`] for an absent or non-button control.
    pub fn submit_button(&self, kind: FormKind) -> Result<HtmlButtonElement, DomError> {
        query(&self.form(kind)?, SUBMIT_BUTTON)?
            .dyn_into::<HtmlButtonElement>()
            .map_err(|_| DomError::WrongType(SUBMIT_BUTTON.into(), "button"))
    }

    /// Current value of every `.form-control` in the form, keyed by id.
    ///
    /// # Errors
    ///
    /// Propagates a missing form root.
    pub fn form_values(&self, kind: FormKind) -> Result<FieldValues, DomError> {
        let form = self.form(kind)?;
        Ok(query_all(&form, FORM_CONTROL)?
            .iter()
            .filter_map(|el| control_value(el).map(|value| (el.id(), value)))
            .filter(|(id, _)| !id.is_empty())
            .collect())
    }
}

/// Value of an input, textarea or select; `None` for anything else.
#[must_use]
pub fn control_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    el.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

/// First match of `selector` under `root`.
///
/// # Errors
///
/// [`DomError::Missing`] when nothing matches, [`DomError::Js`] for an invalid selector.
pub fn query<R: QueryRoot + ?Sized>(root: &R, selector: &str) -> Result<Element, DomError> {
    root.query_first(selector)?.ok_or_else(|| DomError::Missing(selector.into()))
}

/// Every match of `selector` under `root`, in document order.
///
/// # Errors
///
/// [`DomError::Js`] for an invalid selector.
pub fn query_all<R: QueryRoot + ?Sized>(root: &R, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = root.query_every(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `querySelector` / `querySelectorAll` on either a document or an element.
pub trait QueryRoot {
    /// # Errors
    ///
    /// [`DomError::Js`] for an invalid selector.
    fn query_first(&self, selector: &str) -> Result<Option<Element>, DomError>;
    /// # Errors
    ///
    /// [`DomError::Js`] for an invalid selector.
    fn query_every(&self, selector: &str) -> Result<web_sys::NodeList, DomError>;
}

impl QueryRoot for Document {
    fn query_first(&self, selector: &str) -> Result<Option<Element>, DomError> {
        Ok(self.query_selector(selector)?)
    }

    fn query_every(&self, selector: &str) -> Result<web_sys::NodeList, DomError> {
        Ok(self.query_selector_all(selector)?)
    }
}

impl QueryRoot for Element {
    fn query_first(&self, selector: &str) -> Result<Option<Element>, DomError> {
        Ok(self.query_selector(selector)?)
    }

    fn query_every(&self, selector: &str) -> Result<web_sys::NodeList, DomError> {
        Ok(self.query_selector_all(selector)?)
    }
}

impl QueryRoot for HtmlFormElement {
    fn query_first(&self, selector: &str) -> Result<Option<Element>, DomError> {
        Ok(self.query_selector(selector)?)
    }

    fn query_every(&self, selector: &str) -> Result<web_sys::NodeList, DomError> {
        Ok(self.query_selector_all(selector)?)
    }
}

fn as_html(el: Element, what: &str) -> Result<HtmlElement, DomError> {
    el.dyn_into::<HtmlElement>().map_err(|_| DomError::WrongType(what.into(), "HTML element"))
}
