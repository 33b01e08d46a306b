//! Hamburger menu for small viewports.
//!
//! The trigger button flips the open marker on the main menu; a click that
//! lands outside both the menu and the button clears it. Every operation is a
//! no-op while either element is missing (the header fragment has not arrived).

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

use crate::dom::{Contract, Node, Page};

fn parts<P: Page>(dom: &Contract<'_, P>) -> Option<(P::Node, P::Node)> {
    Some((dom.mobile_menu_button()?, dom.main_menu()?))
}

/// Whether both the trigger button and the menu are present.
#[must_use]
pub fn is_ready<P: Page>(dom: &Contract<'_, P>) -> bool {
    parts(dom).is_some()
}

/// Whether `target` is inside the trigger button.
#[must_use]
pub fn trigger_contains<P: Page>(dom: &Contract<'_, P>, target: &P::Node) -> bool {
    parts(dom).is_some_and(|(button, _)| button.contains(target))
}

/// Flip the open marker. Returns the new state, or `None` if the menu is absent.
pub fn toggle<P: Page>(dom: &Contract<'_, P>) -> Option<bool> {
    let (_, menu) = parts(dom)?;
    Some(menu.toggle_class(&dom.selectors().menu_open_class))
}

/// Close the menu if `target` is outside both the menu and its trigger.
///
/// Returns whether the click counted as outside.
pub fn dismiss_outside<P: Page>(dom: &Contract<'_, P>, target: &P::Node) -> bool {
    let Some((button, menu)) = parts(dom) else {
        return false;
    };
    if menu.contains(target) || button.contains(target) {
        return false;
    }
    menu.remove_class(&dom.selectors().menu_open_class);
    true
}

/// Clear the open marker regardless of where the user clicked.
pub fn close<P: Page>(dom: &Contract<'_, P>) {
    if let Some(menu) = dom.main_menu() {
        menu.remove_class(&dom.selectors().menu_open_class);
    }
}

#[must_use]
pub fn is_open<P: Page>(dom: &Contract<'_, P>) -> bool {
    dom.main_menu()
        .is_some_and(|menu| menu.has_class(&dom.selectors().menu_open_class))
}
