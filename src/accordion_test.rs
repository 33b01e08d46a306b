use super::*;
use crate::config::Selectors;
use crate::synthetic::{SyntheticNode, SyntheticPage};

/// Positions of the items currently marked expanded.
fn expanded(dom: &Contract<'_, SyntheticPage>) -> Vec<usize> {
    let active = &dom.selectors().active_class;
    dom.accordion_items()
        .iter()
        .enumerate()
        .filter(|(_, i)| i.item.has_class(active))
        .map(|(pos, _)| pos)
        .collect()
}

fn accordion(count: usize) -> (SyntheticPage, Vec<SyntheticNode>, Vec<SyntheticNode>) {
    let page = SyntheticPage::new();
    let mut headers = Vec::new();
    let mut contents = Vec::new();
    for _ in 0..count {
        let header = SyntheticNode::element().with_class("accordion-header");
        let content = SyntheticNode::element().with_class("accordion-content");
        page.add(
            SyntheticNode::element()
                .with_class("accordion-item")
                .child(header.clone())
                .child(content.clone()),
        );
        headers.push(header);
        contents.push(content);
    }
    (page, headers, contents)
}

#[test]
fn click_expands_toggles_and_switches() {
    let (page, headers, contents) = accordion(3);
    let selectors = Selectors::default();
    let dom = Contract::new(&page, &selectors);

    assert!(on_click(&dom, &headers[1]));
    assert_eq!(expanded(&dom), vec![1]);
    assert_eq!(contents[1].display(), Display::Block);

    assert!(on_click(&dom, &headers[1]));
    assert!(expanded(&dom).is_empty());
    assert_eq!(contents[1].display(), Display::None);

    assert!(on_click(&dom, &headers[0]));
    assert_eq!(expanded(&dom), vec![0]);
}

#[test]
fn opening_one_collapses_the_others() {
    let (page, headers, contents) = accordion(3);
    let selectors = Selectors::default();
    let dom = Contract::new(&page, &selectors);

    on_click(&dom, &headers[0]);
    on_click(&dom, &headers[2]);
    assert_eq!(expanded(&dom), vec![2]);
    assert_eq!(contents[0].display(), Display::None);
    assert_eq!(contents[1].display(), Display::None);
    assert_eq!(contents[2].display(), Display::Block);
}

#[test]
fn click_in_content_is_not_a_toggle() {
    let (page, headers, contents) = accordion(2);
    let selectors = Selectors::default();
    let dom = Contract::new(&page, &selectors);

    on_click(&dom, &headers[0]);
    assert!(!on_click(&dom, &contents[0]));
    assert_eq!(expanded(&dom), vec![0]);
}

#[test]
fn nested_header_child_counts_as_header() {
    let (page, headers, _) = accordion(1);
    let label = SyntheticNode::element();
    headers[0].append(&label);
    let selectors = Selectors::default();
    let dom = Contract::new(&page, &selectors);
    assert!(on_click(&dom, &label));
    assert_eq!(expanded(&dom), vec![0]);
}
