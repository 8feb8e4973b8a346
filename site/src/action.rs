//! Instructions returned by [`crate::engine::SiteCore`] for the host to apply.
//!
//! Actions are semantic: the host decides which classes, attributes and
//! inline styles realise each one. Order within a batch is significant and
//! must be preserved when applying.

use crate::form::{FormKind, Submission};
use crate::history::HistoryEntry;
use crate::schedule::TimerHandle;
use crate::section::SectionId;
use crate::submit::{Banner, BannerId};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add or remove the `hidden` class on a routable section.
    SetSectionHidden { section: SectionId, hidden: bool },
    /// Add or remove the `hidden` class on the testimonials block.
    SetTestimonialsHidden(bool),
    /// Add or remove `active` on the nav link registered at `index`.
    SetNavLinkActive { index: usize, active: bool },
    SetTitle(&'static str),
    /// Smooth-scroll the viewport to the top.
    ScrollToTop,
    PushHistory(HistoryEntry),
    /// Put the section in its entrance start pose and animate to rest.
    BeginEntrance(SectionId),
    /// Remove the entrance transition's inline styles.
    EndEntrance(SectionId),
    /// Menu `active` class, toggle `aria-expanded` and hamburger glyph.
    SetMenuOpen(bool),
    /// Modal `hidden` class, `aria-hidden` and focus on its close control.
    SetModalOpen(bool),
    /// Suppress or restore page scrolling on `<body>`.
    SetScrollLocked(bool),
    /// Show (`Some`) or clear (`None`) a field's inline error.
    SetFieldError { form: FormKind, field: &'static str, message: Option<String> },
    /// Disable the submit control with a busy label, or restore it.
    SetSubmitBusy { form: FormKind, busy: bool },
    /// Clear every input of the form.
    ResetForm(FormKind),
    /// Insert a banner at the top of its form.
    ShowBanner(Banner),
    RemoveBanner(BannerId),
    /// Hand a validated submission to the external collaborator.
    Submit(Submission),
    /// Arm a one-shot timer; report expiry via `SiteCore::on_timer`.
    StartTimer { handle: TimerHandle, delay_ms: u32 },
}
