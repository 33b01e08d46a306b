//! Floating scroll-to-top button.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

use crate::dom::{Contract, Display, Node, Page};

/// Whether the button should show at vertical scroll `offset`.
#[must_use]
pub fn visible_at(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Hide the button. Returns `false` if it is not in the page.
pub fn setup<P: Page>(dom: &Contract<'_, P>) -> bool {
    let Some(button) = dom.scroll_button() else {
        return false;
    };
    button.set_display(Display::None);
    true
}

/// Show or hide the button for the current scroll offset.
pub fn on_scroll<P: Page>(dom: &Contract<'_, P>, offset: f64, threshold: f64) {
    if let Some(button) = dom.scroll_button() {
        button.set_display(if visible_at(offset, threshold) { Display::Flex } else { Display::None });
    }
}

/// Whether `target` is inside the button.
#[must_use]
pub fn hit<P: Page>(dom: &Contract<'_, P>, target: &P::Node) -> bool {
    dom.scroll_button().is_some_and(|b| b.contains(target))
}
