//! Error type shared by the core and the browser host.
//!
//! ERROR HANDLING
//! ==============
//! No failure here is fatal. Missing elements are not errors at all (setup
//! simply no-ops); the variants below cover what the host logs and moves on
//! from: fragment loads, form dispatch, and config parsing.

/// Error returned by fallible site operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A fragment arrived but its placeholder element is not in the page.
    #[error("no placeholder element with id `{0}`")]
    MissingPlaceholder(String),
    /// The fragment request completed with a non-success status.
    #[error("loading {path} returned status {status}")]
    FragmentStatus { path: String, status: u16 },
    /// A request could not be dispatched.
    #[error("network error: {0}")]
    Network(String),
    /// A browser API call threw.
    #[error("browser error: {0}")]
    Js(String),
    /// The page's config block is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}
