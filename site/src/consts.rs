//! Shared constants for the site core.

// ── Sections ────────────────────────────────────────────────────

/// Section shown at start-up and when history carries no state.
pub const HOME_SECTION: &str = "home";

/// Document title used for home and for sections without a mapped title.
pub const DEFAULT_TITLE: &str = "Ketolize - Balance Body & Soul";

// ── Mobile menu ─────────────────────────────────────────────────

/// Viewport width in CSS pixels above which the mobile menu is force-closed.
pub const MENU_BREAKPOINT_PX: f64 = 640.0;

/// Quiet period before a burst of resize events is acted upon.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

// ── Entrance animation ──────────────────────────────────────────

/// Delay between revealing a section and starting its entrance transition.
pub const ENTRANCE_DELAY_MS: u32 = 100;

/// Time after the entrance starts at which its inline styles are removed.
pub const ENTRANCE_CLEANUP_MS: u32 = 700;

// ── Forms ───────────────────────────────────────────────────────

/// Latency of the simulated submission collaborator.
pub const SIMULATED_SUBMIT_LATENCY_MS: u32 = 2000;

/// Lifetime of a success or error banner.
pub const BANNER_LIFETIME_MS: u32 = 5000;

/// Submit button label while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Field message for a malformed email address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Banner text after a failed external submission.
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

// ── Logging ─────────────────────────────────────────────────────

/// Log level used when the config does not name one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
