//! Site configuration: fragment paths, thresholds, selectors, and the
//! contact-form relay.
//!
//! Every field has a default, so a page only needs to override what differs.
//! The browser host reads overrides from an optional
//! `<script type="application/json" id="site-config">` block.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::error::SiteError;

/// Id of the inline JSON block the host reads overrides from.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// A fragment to fetch and inject into a placeholder element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Id of the placeholder element.
    pub target_id: String,
    /// Path of the HTML fragment, relative to the page.
    pub path: String,
}

impl Fragment {
    #[must_use]
    pub fn new(target_id: &str, path: &str) -> Self {
        Self { target_id: target_id.to_owned(), path: path.to_owned() }
    }
}

/// Element ids and class names the behaviors look for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub mobile_menu_button_id: String,
    pub main_menu_class: String,
    pub dropdown_class: String,
    pub dropdown_panel_class: String,
    pub scroll_button_id: String,
    pub slide_class: String,
    pub dot_class: String,
    pub contact_form_id: String,
    pub accordion_item_class: String,
    pub accordion_header_class: String,
    pub accordion_content_class: String,
    pub menu_open_class: String,
    pub active_class: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            mobile_menu_button_id: "mobile-menu-btn".to_owned(),
            main_menu_class: "main-menu".to_owned(),
            dropdown_class: "panel-dropdown".to_owned(),
            dropdown_panel_class: "dropdown-panel".to_owned(),
            scroll_button_id: "scrollToTop".to_owned(),
            slide_class: "slide".to_owned(),
            dot_class: "dot".to_owned(),
            contact_form_id: "contactForm".to_owned(),
            accordion_item_class: "accordion-item".to_owned(),
            accordion_header_class: "accordion-header".to_owned(),
            accordion_content_class: "accordion-content".to_owned(),
            menu_open_class: consts::MENU_OPEN_CLASS.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
        }
    }
}

/// Where and how contact-form submissions are relayed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    /// Form control names read at submit time.
    pub name_field: String,
    pub email_field: String,
    pub message_field: String,
    /// Keys the collection service expects in the multipart payload.
    pub name_key: String,
    pub email_key: String,
    pub message_key: String,
    /// Shown once the request has been dispatched.
    pub confirmation: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: consts::CONTACT_ENDPOINT.to_owned(),
            name_field: "name".to_owned(),
            email_field: "email".to_owned(),
            message_field: "message".to_owned(),
            name_key: consts::NAME_ENTRY_KEY.to_owned(),
            email_key: consts::EMAIL_ENTRY_KEY.to_owned(),
            message_key: consts::MESSAGE_ENTRY_KEY.to_owned(),
            confirmation: consts::CONFIRMATION_MESSAGE.to_owned(),
        }
    }
}

/// Top-level configuration for all site behaviors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub fragments: Vec<Fragment>,
    /// Id of the fragment whose arrival triggers mobile-menu setup.
    pub header_id: String,
    pub mobile_breakpoint_px: f64,
    pub scroll_threshold_px: f64,
    pub slide_interval_ms: u32,
    pub selectors: Selectors,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            fragments: vec![
                Fragment::new(consts::HEADER_ID, consts::HEADER_PATH),
                Fragment::new(consts::FOOTER_ID, consts::FOOTER_PATH),
            ],
            header_id: consts::HEADER_ID.to_owned(),
            mobile_breakpoint_px: consts::MOBILE_BREAKPOINT_PX,
            scroll_threshold_px: consts::SCROLL_THRESHOLD_PX,
            slide_interval_ms: consts::SLIDE_INTERVAL_MS,
            selectors: Selectors::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if `raw` is not valid JSON or a present
    /// key has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`Self::from_json`], but logs and falls back to defaults on error.
    #[must_use]
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default site config");
                Self::default()
            }
        }
    }
}
