//! The DOM contract the site behaviors depend on.
//!
//! Behaviors never touch `web_sys` directly. They work through [`Page`] and
//! [`Node`], which the browser host implements over the live document and
//! [`crate::synthetic`] implements in memory for tests. [`Contract`] names
//! each element or collection the behaviors need, resolved through the
//! configured [`Selectors`].

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use crate::config::Selectors;

/// Inline `display` value written by the behaviors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Display {
    /// No inline value; the stylesheet decides.
    #[default]
    Unset,
    None,
    Block,
    Flex,
}

impl Display {
    /// CSS text for this value (`""` for [`Display::Unset`]).
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
        }
    }

    /// Parse an inline `display` value. Anything unrecognized is `Unset`.
    #[must_use]
    pub fn from_css(raw: &str) -> Self {
        match raw.trim() {
            "none" => Self::None,
            "block" => Self::Block,
            "flex" => Self::Flex,
            _ => Self::Unset,
        }
    }

    /// Whether an element with this inline value has been explicitly shown.
    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Block | Self::Flex)
    }
}

/// An element handle. Equality is element identity.
pub trait Node: Clone + PartialEq {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;

    fn display(&self) -> Display;
    fn set_display(&self, display: Display);

    /// Whether `other` is this node or one of its descendants.
    fn contains(&self, other: &Self) -> bool;

    /// First descendant carrying `class`, in document order.
    fn descendant_by_class(&self, class: &str) -> Option<Self>;

    /// Replace this element's content with `html`, verbatim.
    fn set_inner_html(&self, html: &str);

    /// Current value of the form control named `name` under this element.
    fn field_value(&self, name: &str) -> Option<String>;

    /// Reset form controls under this element to their initial values.
    fn reset_form(&self);
}

/// A document the behaviors can query.
pub trait Page {
    type Node: Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Node>;
}

/// A navigation root and the submenu panel it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown<N> {
    pub root: N,
    pub panel: N,
}

/// An accordion item with its toggle header and collapsible content.
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionItem<N> {
    pub item: N,
    pub header: N,
    pub content: N,
}

/// Named accessors for every element the behaviors use.
pub struct Contract<'a, P: Page> {
    page: &'a P,
    selectors: &'a Selectors,
}

impl<'a, P: Page> Contract<'a, P> {
    #[must_use]
    pub fn new(page: &'a P, selectors: &'a Selectors) -> Self {
        Self { page, selectors }
    }

    #[must_use]
    pub fn mobile_menu_button(&self) -> Option<P::Node> {
        self.page.element_by_id(&self.selectors.mobile_menu_button_id)
    }

    #[must_use]
    pub fn main_menu(&self) -> Option<P::Node> {
        self.page
            .elements_by_class(&self.selectors.main_menu_class)
            .into_iter()
            .next()
    }

    /// Dropdown roots paired with their panels. Roots without a panel are skipped.
    #[must_use]
    pub fn dropdowns(&self) -> Vec<Dropdown<P::Node>> {
        self.page
            .elements_by_class(&self.selectors.dropdown_class)
            .into_iter()
            .filter_map(|root| {
                let panel = root.descendant_by_class(&self.selectors.dropdown_panel_class)?;
                Some(Dropdown { root, panel })
            })
            .collect()
    }

    /// Every dropdown panel in the page, owned by a root or not.
    #[must_use]
    pub fn dropdown_panels(&self) -> Vec<P::Node> {
        self.page.elements_by_class(&self.selectors.dropdown_panel_class)
    }

    #[must_use]
    pub fn scroll_button(&self) -> Option<P::Node> {
        self.page.element_by_id(&self.selectors.scroll_button_id)
    }

    #[must_use]
    pub fn slides(&self) -> Vec<P::Node> {
        self.page.elements_by_class(&self.selectors.slide_class)
    }

    #[must_use]
    pub fn dots(&self) -> Vec<P::Node> {
        self.page.elements_by_class(&self.selectors.dot_class)
    }

    #[must_use]
    pub fn contact_form(&self) -> Option<P::Node> {
        self.page.element_by_id(&self.selectors.contact_form_id)
    }

    /// Accordion items with both a header and a content element.
    #[must_use]
    pub fn accordion_items(&self) -> Vec<AccordionItem<P::Node>> {
        self.page
            .elements_by_class(&self.selectors.accordion_item_class)
            .into_iter()
            .filter_map(|item| {
                let header = item.descendant_by_class(&self.selectors.accordion_header_class)?;
                let content = item.descendant_by_class(&self.selectors.accordion_content_class)?;
                Some(AccordionItem { item, header, content })
            })
            .collect()
    }

    #[must_use]
    pub fn placeholder(&self, id: &str) -> Option<P::Node> {
        self.page.element_by_id(id)
    }

    #[must_use]
    pub fn selectors(&self) -> &Selectors {
        self.selectors
    }
}
