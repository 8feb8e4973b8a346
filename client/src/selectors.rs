//! DOM contract: selectors, ids, classes and attributes the host relies on.

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_TOGGLE: &str = ".nav__toggle";
pub const NAV_MENU: &str = ".nav__menu";
pub const NAV_LINK: &str = ".nav__link";
pub const NAV_LINK_CLASS: &str = "nav__link";
pub const HAMBURGER_BAR: &str = ".hamburger";
pub const SECTION_LINK: &str = "[data-section]";
pub const DATA_SECTION: &str = "data-section";

// ── Sections ────────────────────────────────────────────────────

pub const SECTIONS: &str = "main > .section";
pub const TESTIMONIALS: &str = ".testimonials";
pub const TESTIMONIALS_CLASS: &str = "testimonials";

// ── Modal ───────────────────────────────────────────────────────

pub const MODAL: &str = "#modal-404";
pub const MODAL_CLOSE: &str = ".modal__close";
pub const MODAL_OVERLAY: &str = ".modal__overlay";

// ── Forms ───────────────────────────────────────────────────────

pub const BOOKING_FORM: &str = ".booking-form";
pub const CONTACT_FORM: &str = ".contact-form";
pub const FORM_CONTROL: &str = ".form-control";
pub const ERROR_MESSAGE: &str = ".error-message";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
/// Holds a submit button's idle label while it shows the busy label.
pub const DATA_IDLE_LABEL: &str = "data-idle-label";
pub const BANNER_CLASS: &str = "success-message";
pub const BANNER_ERROR_CLASS: &str = "success-message--error";

// ── State classes and attributes ────────────────────────────────

pub const HIDDEN: &str = "hidden";
pub const ACTIVE: &str = "active";
pub const ERROR: &str = "error";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";
pub const ARIA_INVALID: &str = "aria-invalid";

// ── Config and decoration ───────────────────────────────────────

/// Inline `<script type="application/json">` holding config overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const REVEAL_TARGETS: &str = ".feature-card, .pricing-card, .recipe-card, .blog-card, .testimonial-card";

/// Form root selector for a form kind.
#[must_use]
pub fn form_selector(kind: site::form::FormKind) -> &'static str {
    match kind {
        site::form::FormKind::Booking => BOOKING_FORM,
        site::form::FormKind::Contact => CONTACT_FORM,
    }
}
