//! Change watcher: finishes feature setup once fragment elements exist.
//!
//! The host calls [`setup_pass`] from a body-wide mutation observer. Each
//! single-element feature initializes the first time its elements are found
//! and is skipped on every later pass, so unrelated mutations never repeat
//! setup. Dropdowns are tracked per root instead: header, footer, and static
//! markup may each bring their own, in any order, and only the new roots are
//! set up (an open panel elsewhere is left alone).

#[cfg(test)]
#[path = "watcher_test.rs"]
mod watcher_test;

use crate::dom::{Contract, Page};
use crate::dropdown::DropdownNav;
use crate::{contact_form, mobile_menu, scroll_top};

/// A behavior whose elements may arrive with a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Dropdowns,
    MobileMenu,
    ScrollToTop,
    ContactForm,
}

/// One "already initialized" flag per [`Feature`].
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    dropdowns: bool,
    mobile_menu: bool,
    scroll_to_top: bool,
    contact_form: bool,
}

impl FeatureFlags {
    #[must_use]
    pub fn is_ready(&self, feature: Feature) -> bool {
        match feature {
            Feature::Dropdowns => self.dropdowns,
            Feature::MobileMenu => self.mobile_menu,
            Feature::ScrollToTop => self.scroll_to_top,
            Feature::ContactForm => self.contact_form,
        }
    }

    /// Set the flag. Returns `true` if it was not set before.
    pub fn mark(&mut self, feature: Feature) -> bool {
        let flag = match feature {
            Feature::Dropdowns => &mut self.dropdowns,
            Feature::MobileMenu => &mut self.mobile_menu,
            Feature::ScrollToTop => &mut self.scroll_to_top,
            Feature::ContactForm => &mut self.contact_form,
        };
        !std::mem::replace(flag, true)
    }
}

/// Initialize the mobile menu if it is present and not yet set up.
pub fn setup_mobile_menu<P: Page>(flags: &mut FeatureFlags, dom: &Contract<'_, P>) -> bool {
    if flags.is_ready(Feature::MobileMenu) || !mobile_menu::is_ready(dom) {
        return false;
    }
    log::debug!("mobile menu ready");
    flags.mark(Feature::MobileMenu)
}

/// Run setup for every feature not yet initialized whose elements now exist.
///
/// Returns the features that initialized during this pass. `Dropdowns` is
/// reported whenever new dropdown roots appeared, not only the first time.
pub fn setup_pass<P: Page>(
    flags: &mut FeatureFlags,
    dom: &Contract<'_, P>,
    nav: &mut DropdownNav<P::Node>,
    width: f64,
    breakpoint: f64,
) -> Vec<Feature> {
    let mut ready = Vec::new();

    if !nav.adopt(dom, width, breakpoint).is_empty() {
        flags.mark(Feature::Dropdowns);
        ready.push(Feature::Dropdowns);
    }
    if setup_mobile_menu(flags, dom) {
        ready.push(Feature::MobileMenu);
    }
    if !flags.is_ready(Feature::ScrollToTop) && scroll_top::setup(dom) {
        flags.mark(Feature::ScrollToTop);
        ready.push(Feature::ScrollToTop);
    }
    if !flags.is_ready(Feature::ContactForm) && contact_form::setup(dom) {
        flags.mark(Feature::ContactForm);
        ready.push(Feature::ContactForm);
    }

    if !ready.is_empty() {
        log::debug!("setup pass initialized {ready:?}");
    }
    ready
}
