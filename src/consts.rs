//! Default values for [`crate::config::SiteConfig`].

// ── Layout ──────────────────────────────────────────────────────

/// Viewport widths at or below this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Vertical scroll offset past which the scroll-to-top button shows.
pub const SCROLL_THRESHOLD_PX: f64 = 300.0;

// ── Slideshow ───────────────────────────────────────────────────

/// Delay between automatic slide advances.
pub const SLIDE_INTERVAL_MS: u32 = 5000;

// ── Fragments ───────────────────────────────────────────────────

pub const HEADER_ID: &str = "header";
pub const HEADER_PATH: &str = "components/header.html";
pub const FOOTER_ID: &str = "footer";
pub const FOOTER_PATH: &str = "components/footer.html";

// ── Contact form relay ──────────────────────────────────────────

/// Form-collection endpoint the contact form relays to.
pub const CONTACT_ENDPOINT: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSfvgBtlywPrt8U2B-tcWF9XJ6KeaGMcVTIskdfVehGPEJv1RA/formResponse";

/// Entry keys dictated by the collection service.
pub const NAME_ENTRY_KEY: &str = "entry.856552114";
pub const EMAIL_ENTRY_KEY: &str = "entry.416083448";
pub const MESSAGE_ENTRY_KEY: &str = "entry.533288431";

pub const CONFIRMATION_MESSAGE: &str = "Thank you! Your message has been submitted successfully.";

// ── Markers ─────────────────────────────────────────────────────

/// Class that marks the main menu as open.
pub const MENU_OPEN_CLASS: &str = "show";

/// Class that marks an indicator dot or accordion item as active.
pub const ACTIVE_CLASS: &str = "active";
