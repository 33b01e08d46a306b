//! Dropdown navigation: hover on desktop, tap on mobile.
//!
//! The mode is picked from the viewport width whenever setup runs (at start,
//! on resize). Panels are hidden by setup and shown with an inline
//! `display: block`.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use crate::dom::{Contract, Display, Node, Page};

/// How dropdown roots react to the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavMode {
    /// Tap a root to toggle its panel.
    Mobile,
    /// Hover a root to show its panel.
    #[default]
    Desktop,
}

impl NavMode {
    /// Widths at or below `breakpoint` are mobile.
    #[must_use]
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint { Self::Mobile } else { Self::Desktop }
    }
}

/// Dropdown navigation state.
///
/// `known` holds every root whose panel has already been hidden by setup, so a
/// fragment that arrives later gets its own roots set up without touching
/// panels the user may have open. `pending` holds adopted roots the host has
/// not yet bound hover listeners to.
#[derive(Debug, Clone)]
pub struct DropdownNav<N> {
    mode: NavMode,
    known: Vec<N>,
    pending: Vec<N>,
}

impl<N> Default for DropdownNav<N> {
    fn default() -> Self {
        Self { mode: NavMode::default(), known: Vec::new(), pending: Vec::new() }
    }
}

impl<N: Node> DropdownNav<N> {
    #[must_use]
    pub fn mode(&self) -> NavMode {
        self.mode
    }

    /// Select the mode for `width` and hide every panel.
    pub fn setup<P: Page<Node = N>>(&mut self, dom: &Contract<'_, P>, width: f64, breakpoint: f64) {
        self.mode = NavMode::for_width(width, breakpoint);
        let dropdowns = dom.dropdowns();
        for dropdown in &dropdowns {
            dropdown.panel.set_display(Display::None);
        }
        log::debug!("dropdowns: {} in {:?} mode", dropdowns.len(), self.mode);
    }

    /// Hide the panels of roots not seen before and remember them. Roots that
    /// left the page are forgotten. Returns the newly seen roots.
    pub fn adopt<P: Page<Node = N>>(&mut self, dom: &Contract<'_, P>, width: f64, breakpoint: f64) -> Vec<N> {
        self.mode = NavMode::for_width(width, breakpoint);
        let dropdowns = dom.dropdowns();
        self.known.retain(|root| dropdowns.iter().any(|d| d.root == *root));

        let mut fresh = Vec::new();
        for dropdown in dropdowns {
            if self.known.contains(&dropdown.root) {
                continue;
            }
            dropdown.panel.set_display(Display::None);
            self.known.push(dropdown.root.clone());
            self.pending.push(dropdown.root.clone());
            fresh.push(dropdown.root);
        }
        if !fresh.is_empty() {
            log::debug!("dropdowns: {} new, {} known", fresh.len(), self.known.len());
        }
        fresh
    }

    /// Drain the roots adopted since the last call.
    pub fn take_pending(&mut self) -> Vec<N> {
        std::mem::take(&mut self.pending)
    }

    /// Handle a click in mobile mode. Returns `true` if `target` was inside a
    /// dropdown root, in which case propagation should stop.
    pub fn on_click<P: Page<Node = N>>(&self, dom: &Contract<'_, P>, target: &N) -> bool {
        if self.mode != NavMode::Mobile {
            return false;
        }
        let dropdowns = dom.dropdowns();
        let Some(clicked) = dropdowns.iter().find(|d| d.root.contains(target)) else {
            return false;
        };
        let was_open = clicked.panel.display() == Display::Block;
        for other in dom.dropdown_panels() {
            if other != clicked.panel {
                other.set_display(Display::None);
            }
        }
        clicked
            .panel
            .set_display(if was_open { Display::None } else { Display::Block });
        true
    }

    /// Hover enter/leave on a dropdown root. Ignored in mobile mode.
    pub fn on_hover<P: Page<Node = N>>(&self, dom: &Contract<'_, P>, root: &N, entered: bool) {
        if self.mode != NavMode::Desktop {
            return;
        }
        if let Some(dropdown) = dom.dropdowns().into_iter().find(|d| d.root == *root) {
            dropdown
                .panel
                .set_display(if entered { Display::Block } else { Display::None });
        }
    }
}

/// Hide every dropdown panel in the page.
pub fn close_all<P: Page>(dom: &Contract<'_, P>) {
    for panel in dom.dropdown_panels() {
        panel.set_display(Display::None);
    }
}
