//! Accordion with at most one expanded item.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

use crate::dom::{Contract, Display, Node, Page};

/// Handle a click. If `target` is inside an item's header, collapse every
/// other item and toggle that one. Returns whether a header was hit.
pub fn on_click<P: Page>(dom: &Contract<'_, P>, target: &P::Node) -> bool {
    let active = &dom.selectors().active_class;
    let items = dom.accordion_items();
    let Some(clicked) = items.iter().find(|i| i.header.contains(target)) else {
        return false;
    };
    for other in items.iter().filter(|i| i.item != clicked.item) {
        other.item.remove_class(active);
        other.content.set_display(Display::None);
    }
    if clicked.item.toggle_class(active) {
        clicked.content.set_display(Display::Block);
    } else {
        clicked.content.set_display(Display::None);
    }
    true
}
