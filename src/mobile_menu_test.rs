use super::*;
use crate::config::Selectors;
use crate::synthetic::{SyntheticNode, SyntheticPage};

struct Fixture {
    page: SyntheticPage,
    button: SyntheticNode,
    icon: SyntheticNode,
    link: SyntheticNode,
    outside: SyntheticNode,
    selectors: Selectors,
}

fn fixture() -> Fixture {
    let page = SyntheticPage::new();
    let icon = SyntheticNode::element();
    let button = page.add(SyntheticNode::element().with_id("mobile-menu-btn").child(icon.clone()));
    let link = SyntheticNode::element();
    page.add(SyntheticNode::element().with_class("main-menu").child(link.clone()));
    let outside = page.add(SyntheticNode::element());
    Fixture { page, button, icon, link, outside, selectors: Selectors::default() }
}

#[test]
fn toggle_flips_open_marker() {
    let f = fixture();
    let dom = Contract::new(&f.page, &f.selectors);
    assert_eq!(toggle(&dom), Some(true));
    assert!(is_open(&dom));
    assert_eq!(toggle(&dom), Some(false));
    assert!(!is_open(&dom));
}

#[test]
fn trigger_contains_nested_icon() {
    let f = fixture();
    let dom = Contract::new(&f.page, &f.selectors);
    assert!(trigger_contains(&dom, &f.button));
    assert!(trigger_contains(&dom, &f.icon));
    assert!(!trigger_contains(&dom, &f.outside));
}

#[test]
fn outside_click_closes() {
    let f = fixture();
    let dom = Contract::new(&f.page, &f.selectors);
    toggle(&dom);
    assert!(dismiss_outside(&dom, &f.outside));
    assert!(!is_open(&dom));
}

#[test]
fn inside_click_keeps_open() {
    let f = fixture();
    let dom = Contract::new(&f.page, &f.selectors);
    toggle(&dom);
    assert!(!dismiss_outside(&dom, &f.link));
    assert!(!dismiss_outside(&dom, &f.icon));
    assert!(is_open(&dom));
}

#[test]
fn missing_menu_is_noop() {
    let page = SyntheticPage::new();
    let target = page.add(SyntheticNode::element().with_id("mobile-menu-btn"));
    let selectors = Selectors::default();
    let dom = Contract::new(&page, &selectors);
    assert!(!is_ready(&dom));
    assert_eq!(toggle(&dom), None);
    assert!(!dismiss_outside(&dom, &target));
    close(&dom);
}
