use super::*;
use crate::config::Selectors;
use crate::synthetic::{SyntheticNode, SyntheticPage};

struct Show {
    page: SyntheticPage,
    slides: Vec<SyntheticNode>,
    dots: Vec<SyntheticNode>,
    selectors: Selectors,
}

fn show(count: usize) -> Show {
    let page = SyntheticPage::new();
    let slides = (0..count)
        .map(|_| page.add(SyntheticNode::element().with_class("slide")))
        .collect();
    let dots = (0..count)
        .map(|_| page.add(SyntheticNode::element().with_class("dot")))
        .collect();
    Show { page, slides, dots, selectors: Selectors::default() }
}

fn visible(s: &Show) -> Vec<usize> {
    s.slides
        .iter()
        .enumerate()
        .filter(|(_, n)| n.display() == Display::Block)
        .map(|(i, _)| i)
        .collect()
}

fn active(s: &Show) -> Vec<usize> {
    s.dots
        .iter()
        .enumerate()
        .filter(|(_, n)| n.has_class("active"))
        .map(|(i, _)| i)
        .collect()
}

// =============================================================
// Start
// =============================================================

#[test]
fn start_shows_first_slide_and_arms_timer() {
    let s = show(3);
    let dom = Contract::new(&s.page, &s.selectors);
    let mut slideshow = Slideshow::new(5000);
    let tick = slideshow.start(&dom).expect("tick");
    assert_eq!(tick.delay_ms, 5000);
    assert_eq!(visible(&s), vec![0]);
    assert_eq!(active(&s), vec![0]);
}

#[test]
fn start_without_slides_does_nothing() {
    let s = show(0);
    let dom = Contract::new(&s.page, &s.selectors);
    let mut slideshow = Slideshow::new(5000);
    assert_eq!(slideshow.start(&dom), None);
    slideshow.advance(&dom);
    assert_eq!(slideshow.jump_to(&dom, 2), None);
    assert_eq!(slideshow.on_tick(&dom, 0), None);
    assert_eq!(slideshow.index(), 0);
}

// =============================================================
// Ticks
// =============================================================

#[test]
fn tick_advances_and_wraps() {
    let s = show(3);
    let dom = Contract::new(&s.page, &s.selectors);
    let mut slideshow = Slideshow::new(5000);
    let mut tick = slideshow.start(&dom).expect("tick");
    for expected in [1, 2, 0, 1] {
        tick = slideshow.on_tick(&dom, tick.generation).expect("next tick");
        assert_eq!(slideshow.index(), expected);
        assert_eq!(visible(&s), vec![expected]);
        assert_eq!(active(&s), vec![expected]);
    }
}

#[test]
fn stale_tick_is_ignored() {
    let s = show(3);
    let dom = Contract::new(&s.page, &s.selectors);
    let mut slideshow = Slideshow::new(5000);
    let first = slideshow.start(&dom).expect("tick");
    let fresh = slideshow.jump_to(&dom, 3).expect("tick");
    assert_ne!(first.generation, fresh.generation);

    assert_eq!(slideshow.on_tick(&dom, first.generation), None);
    assert_eq!(slideshow.index(), 2);
    assert!(slideshow.on_tick(&dom, fresh.generation).is_some());
    assert_eq!(slideshow.index(), 0);
}

#[test]
fn stop_ends_the_chain() {
    let s = show(2);
    let dom = Contract::new(&s.page, &s.selectors);
    let mut slideshow = Slideshow::new(5000);
    let tick = slideshow.start(&dom).expect("tick");
    slideshow.stop();
    assert!(slideshow.stopped);
    assert_eq!(slideshow.on_tick(&dom, tick.generation), None);
    assert_eq!(slideshow.jump_to(&dom, 2), None);
    assert_eq!(slideshow.index(), 0);
}

// =============================================================
// Jumps
// =============================================================

#[test]
fn jump_is_one_based() {
    let s = show(4);
    let dom = Contract::new(&s.page, &s.selectors);
    let mut slideshow = Slideshow::new(5000);
    slideshow.start(&dom);
    slideshow.jump_to(&dom, 3);
    assert_eq!(slideshow.index(), 2);
    assert_eq!(visible(&s), vec![2]);
    assert_eq!(active(&s), vec![2]);
}

#[test]
fn jump_wraps_out_of_range() {
    let s = show(3);
    let dom = Contract::new(&s.page, &s.selectors);
    let mut slideshow = Slideshow::new(5000);
    slideshow.jump_to(&dom, 0);
    assert_eq!(slideshow.index(), 2);
    slideshow.jump_to(&dom, 5);
    assert_eq!(slideshow.index(), 1);
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn render_tolerates_fewer_dots_than_slides() {
    let s = show(2);
    let extra = s.page.add(SyntheticNode::element().with_class("slide"));
    let dom = Contract::new(&s.page, &s.selectors);
    render(&dom, 2);
    assert_eq!(extra.display(), Display::Block);
    assert!(active(&s).is_empty());
}

#[test]
fn dot_index_finds_clicked_dot() {
    let s = show(3);
    let dom = Contract::new(&s.page, &s.selectors);
    assert_eq!(dot_index(&dom, &s.dots[1]), Some(1));
    assert_eq!(dot_index(&dom, &s.slides[1]), None);
}
