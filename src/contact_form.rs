//! Contact form relay.
//!
//! On submit the three fields are read from the live form and packaged under
//! the keys the collection service dictates. The host posts the payload
//! without reading the response, so "sent" only ever means "dispatched".

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use serde::Serialize;

use crate::config::ContactConfig;
use crate::dom::{Contract, Node, Page};

/// A packaged form submission ready to be relayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub endpoint: String,
    /// `(key, value)` pairs in payload order.
    pub entries: Vec<(String, String)>,
}

/// Whether the form is in the page.
#[must_use]
pub fn setup<P: Page>(dom: &Contract<'_, P>) -> bool {
    dom.contact_form().is_some()
}

/// Package the form's current values if `target` is the contact form (or
/// inside it). Missing fields are sent as empty strings.
#[must_use]
pub fn read_submission<P: Page>(
    dom: &Contract<'_, P>,
    contact: &ContactConfig,
    target: &P::Node,
) -> Option<Submission> {
    let form = dom.contact_form()?;
    if !form.contains(target) {
        return None;
    }
    let value = |name: &str| form.field_value(name).unwrap_or_default();
    Some(Submission {
        endpoint: contact.endpoint.clone(),
        entries: vec![
            (contact.name_key.clone(), value(&contact.name_field)),
            (contact.email_key.clone(), value(&contact.email_field)),
            (contact.message_key.clone(), value(&contact.message_field)),
        ],
    })
}

/// Clear the form after a dispatch.
pub fn reset<P: Page>(dom: &Contract<'_, P>) {
    if let Some(form) = dom.contact_form() {
        form.reset_form();
    }
}
