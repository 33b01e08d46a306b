//! Shared header/footer fragments fetched at load and injected verbatim.

#[cfg(test)]
#[path = "fragments_test.rs"]
mod fragments_test;

use crate::dom::{Contract, Node, Page};
use crate::error::SiteError;

/// Check the status of a completed fragment request.
///
/// # Errors
///
/// Returns [`SiteError::FragmentStatus`] for anything outside `200..=299`.
pub fn check_status(path: &str, status: u16) -> Result<(), SiteError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SiteError::FragmentStatus { path: path.to_owned(), status })
    }
}

/// Replace the content of placeholder `target_id` with `html`.
///
/// The fragment is trusted markup from the same site and is not sanitized.
///
/// # Errors
///
/// Returns [`SiteError::MissingPlaceholder`] if no element has that id.
pub fn inject<P: Page>(dom: &Contract<'_, P>, target_id: &str, html: &str) -> Result<(), SiteError> {
    let placeholder = dom
        .placeholder(target_id)
        .ok_or_else(|| SiteError::MissingPlaceholder(target_id.to_owned()))?;
    placeholder.set_inner_html(html);
    log::info!("injected fragment into #{target_id} ({} bytes)", html.len());
    Ok(())
}
