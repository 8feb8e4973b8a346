//! Inline style declarations applied by the host.
//!
//! Kept as data so the values are testable without a browser. An empty value
//! removes the property.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use site::submit::BannerTone;

/// `(property, value)` pair for `CSSStyleDeclaration.setProperty`.
pub type Decl = (&'static str, &'static str);

// ── Section entrance ────────────────────────────────────────────

pub const ENTRANCE_FROM: &[Decl] = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
];

pub const ENTRANCE_TO: &[Decl] = &[("opacity", "1"), ("transform", "translateY(0)")];

pub const ENTRANCE_CLEAR: &[Decl] = &[("transition", ""), ("opacity", ""), ("transform", "")];

// ── Scroll reveal ───────────────────────────────────────────────

pub const REVEAL_FROM: &[Decl] = &[("opacity", "0"), ("transform", "translateY(30px)")];

pub const REVEAL_PLAY: &[Decl] = &[("animation", "fadeInUp 0.8s ease-out forwards")];

// ── Mobile menu ─────────────────────────────────────────────────

/// Per-bar declaration for the three hamburger bars: an X when open.
#[must_use]
pub fn hamburger_bars(open: bool) -> [Decl; 3] {
    if open {
        [
            ("transform", "rotate(45deg) translate(5px, 5px)"),
            ("opacity", "0"),
            ("transform", "rotate(-45deg) translate(7px, -6px)"),
        ]
    } else {
        [("transform", ""), ("opacity", "1"), ("transform", "")]
    }
}

#[must_use]
pub fn scroll_lock(locked: bool) -> Decl {
    ("overflow", if locked { "hidden" } else { "" })
}

// ── Forms ───────────────────────────────────────────────────────

#[must_use]
pub fn field_error(active: bool) -> [Decl; 2] {
    if active {
        [("border-color", "var(--color-error)"), ("box-shadow", "0 0 0 3px rgba(255, 87, 87, 0.1)")]
    } else {
        [("border-color", ""), ("box-shadow", "")]
    }
}

#[must_use]
pub fn error_slot(visible: bool) -> Decl {
    ("display", if visible { "block" } else { "none" })
}

#[must_use]
pub fn submit_button(busy: bool) -> Decl {
    ("opacity", if busy { "0.7" } else { "1" })
}

/// `style` attribute for the inner box of a banner.
#[must_use]
pub fn banner(tone: BannerTone) -> &'static str {
    match tone {
        BannerTone::Success => {
            "background: rgba(111, 239, 224, 0.1); border: 1px solid var(--color-primary); \
             color: var(--color-primary); padding: var(--spacing-md); border-radius: var(--radius-md); \
             margin-bottom: var(--spacing-md); text-align: center; font-weight: 500;"
        }
        BannerTone::Error => {
            "background: rgba(255, 87, 87, 0.1); border: 1px solid var(--color-error); \
             color: var(--color-error); padding: var(--spacing-md); border-radius: var(--radius-md); \
             margin-bottom: var(--spacing-md); text-align: center; font-weight: 500;"
        }
    }
}
