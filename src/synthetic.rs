//! In-memory document for exercising the behaviors without a browser.
//!
//! Elements are reference-counted so handles behave like DOM references:
//! cloning a [`SyntheticNode`] yields another handle to the same element, and
//! equality is identity. Inner HTML is stored verbatim and never parsed; tests
//! that simulate a fragment arriving append the fragment's elements themselves.

#[cfg(test)]
#[path = "synthetic_test.rs"]
mod synthetic_test;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use crate::dom::{Display, Node, Page};

#[derive(Debug, Default)]
struct NodeData {
    id: Option<String>,
    classes: BTreeSet<String>,
    display: Display,
    inner_html: String,
    field: Option<Field>,
    children: Vec<SyntheticNode>,
    parent: Weak<RefCell<NodeData>>,
}

#[derive(Debug)]
struct Field {
    name: String,
    value: String,
    initial: String,
}

/// Handle to an element in a synthetic document.
#[derive(Debug, Clone, Default)]
pub struct SyntheticNode(Rc<RefCell<NodeData>>);

impl PartialEq for SyntheticNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SyntheticNode {
    /// A detached element with no id, classes, or children.
    #[must_use]
    pub fn element() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.0.borrow_mut().id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.insert(class.to_owned());
        self
    }

    /// Make this element a form control named `name` with initial `value`.
    #[must_use]
    pub fn with_field(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().field = Some(Field {
            name: name.to_owned(),
            value: value.to_owned(),
            initial: value.to_owned(),
        });
        self
    }

    /// Builder form of [`Self::append`].
    #[must_use]
    pub fn child(self, child: SyntheticNode) -> Self {
        self.append(&child);
        self
    }

    /// Attach `child` as the last child, detaching it from any prior parent.
    pub fn append(&self, child: &SyntheticNode) {
        child.detach();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    /// Remove this element from its parent, if it has one.
    pub fn detach(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|c| c != self);
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    /// Change the current value of this form control. No-op on non-controls.
    pub fn set_value(&self, value: &str) {
        if let Some(field) = self.0.borrow_mut().field.as_mut() {
            field.value = value.to_owned();
        }
    }

    /// Current value of this form control, if it is one.
    #[must_use]
    pub fn value(&self) -> Option<String> {
        self.0.borrow().field.as_ref().map(|f| f.value.clone())
    }

    #[must_use]
    pub fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    #[must_use]
    pub fn parent(&self) -> Option<SyntheticNode> {
        self.0.borrow().parent.upgrade().map(SyntheticNode)
    }

    fn id_is(&self, id: &str) -> bool {
        self.0.borrow().id.as_deref() == Some(id)
    }

    fn children(&self) -> Vec<SyntheticNode> {
        self.0.borrow().children.clone()
    }

    /// Depth-first, pre-order walk over this element and its descendants.
    fn walk(&self, visit: &mut impl FnMut(&SyntheticNode) -> bool) -> bool {
        if visit(self) {
            return true;
        }
        self.children().iter().any(|c| c.walk(visit))
    }

    fn find_descendant(&self, mut pred: impl FnMut(&SyntheticNode) -> bool) -> Option<SyntheticNode> {
        let mut found = None;
        for child in self.children() {
            child.walk(&mut |n| {
                if pred(n) {
                    found = Some(n.clone());
                    true
                } else {
                    false
                }
            });
            if found.is_some() {
                break;
            }
        }
        found
    }
}

impl Node for SyntheticNode {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_owned());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        let mut data = self.0.borrow_mut();
        if data.classes.remove(class) {
            false
        } else {
            data.classes.insert(class.to_owned());
            true
        }
    }

    fn display(&self) -> Display {
        self.0.borrow().display
    }

    fn set_display(&self, display: Display) {
        self.0.borrow_mut().display = display;
    }

    fn contains(&self, other: &Self) -> bool {
        let mut cursor = Some(other.clone());
        while let Some(node) = cursor {
            if node == *self {
                return true;
            }
            cursor = node.parent();
        }
        false
    }

    fn descendant_by_class(&self, class: &str) -> Option<Self> {
        self.find_descendant(|n| n.has_class(class))
    }

    fn set_inner_html(&self, html: &str) {
        html.clone_into(&mut self.0.borrow_mut().inner_html);
    }

    fn field_value(&self, name: &str) -> Option<String> {
        self.find_descendant(|n| {
            n.0.borrow().field.as_ref().is_some_and(|f| f.name == name)
        })
        .and_then(|n| n.value())
    }

    fn reset_form(&self) {
        self.walk(&mut |n| {
            if let Some(field) = n.0.borrow_mut().field.as_mut() {
                field.value.clone_from(&field.initial);
            }
            false
        });
    }
}

/// A synthetic document rooted at a `<body>` element.
#[derive(Debug, Clone, Default)]
pub struct SyntheticPage {
    body: SyntheticNode,
}

impl SyntheticPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn body(&self) -> &SyntheticNode {
        &self.body
    }

    /// Append `node` to the body and return a handle to it.
    pub fn add(&self, node: SyntheticNode) -> SyntheticNode {
        self.body.append(&node);
        node
    }
}

impl Page for SyntheticPage {
    type Node = SyntheticNode;

    fn element_by_id(&self, id: &str) -> Option<SyntheticNode> {
        if self.body.id_is(id) {
            return Some(self.body.clone());
        }
        self.body.find_descendant(|n| n.id_is(id))
    }

    fn elements_by_class(&self, class: &str) -> Vec<SyntheticNode> {
        let mut out = Vec::new();
        self.body.walk(&mut |n| {
            if n.has_class(class) {
                out.push(n.clone());
            }
            false
        });
        out
    }
}
