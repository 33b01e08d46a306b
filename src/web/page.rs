//! [`Page`] and [`Node`] over the live document.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::{Display, Node, Page};
use crate::error::SiteError;

pub(crate) fn js_error(value: JsValue) -> SiteError {
    SiteError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn warn_on_err(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{what}: {}", js_error(e));
    }
}

/// Escape `value` for use inside a double-quoted CSS attribute selector.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            // Control characters (newlines included) only parse as hex escapes.
            c if c.is_control() => out.push_str(&format!("\\{:x} ", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

/// A live DOM element.
#[derive(Debug, Clone, PartialEq)]
pub struct WebNode(pub Element);

impl WebNode {
    fn query(&self, selector: &str) -> Option<Element> {
        match self.0.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("query `{selector}`: {}", js_error(e));
                None
            }
        }
    }
}

impl Node for WebNode {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        warn_on_err("add class", self.0.class_list().add_1(class));
    }

    fn remove_class(&self, class: &str) {
        warn_on_err("remove class", self.0.class_list().remove_1(class));
    }

    fn toggle_class(&self, class: &str) -> bool {
        match self.0.class_list().toggle(class) {
            Ok(now) => now,
            Err(e) => {
                log::warn!("toggle class: {}", js_error(e));
                self.has_class(class)
            }
        }
    }

    fn display(&self) -> Display {
        let Some(el) = self.0.dyn_ref::<HtmlElement>() else {
            return Display::Unset;
        };
        match el.style().get_property_value("display") {
            Ok(raw) => Display::from_css(&raw),
            Err(e) => {
                log::warn!("read display: {}", js_error(e));
                Display::Unset
            }
        }
    }

    fn set_display(&self, display: Display) {
        if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            warn_on_err("set display", el.style().set_property("display", display.as_css()));
        }
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(other.0.as_ref()))
    }

    fn descendant_by_class(&self, class: &str) -> Option<Self> {
        self.0.get_elements_by_class_name(class).item(0).map(WebNode)
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn field_value(&self, name: &str) -> Option<String> {
        let control = self.query(&format!("[name=\"{}\"]", escape_attr(name)))?;
        if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
            Some(input.value())
        } else if let Some(area) = control.dyn_ref::<HtmlTextAreaElement>() {
            Some(area.value())
        } else {
            control.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}

/// The browser document.
#[derive(Debug, Clone)]
pub struct WebPage {
    document: Document,
}

impl WebPage {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for WebPage {
    type Node = WebNode;

    fn element_by_id(&self, id: &str) -> Option<WebNode> {
        self.document.get_element_by_id(id).map(WebNode)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebNode> {
        let live = self.document.get_elements_by_class_name(class);
        (0..live.length())
            .filter_map(|i| live.item(i))
            .map(WebNode)
            .collect()
    }
}
