//! Auto-advancing slideshow with indicator dots.
//!
//! `Slideshow` owns the slide index and the timer generation. The host
//! schedules each [`Tick`] it is handed and feeds it back through
//! [`Slideshow::on_tick`]; a tick whose generation is no longer current was
//! superseded by a manual jump (or teardown) and does nothing.
//!
//! The slide count is read from the page on every render. With no slides,
//! nothing renders and no tick is scheduled.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

use crate::dom::{Contract, Display, Node, Page};

/// A pending timer the host should arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Slideshow {
    index: usize,
    interval_ms: u32,
    generation: u64,
    stopped: bool,
}

impl Slideshow {
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self { index: 0, interval_ms, generation: 0, stopped: false }
    }

    /// Current 0-based slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Render the first slide and arm the timer.
    pub fn start<P: Page>(&mut self, dom: &Contract<'_, P>) -> Option<Tick> {
        let count = dom.slides().len();
        if count == 0 {
            log::debug!("slideshow: no slides");
            return None;
        }
        log::debug!("slideshow: {count} slides");
        self.index = 0;
        render(dom, self.index);
        self.rearm()
    }

    /// Move to the next slide, wrapping after the last.
    pub fn advance<P: Page>(&mut self, dom: &Contract<'_, P>) {
        let count = dom.slides().len();
        if count == 0 {
            return;
        }
        self.index = (self.index + 1) % count;
        render(dom, self.index);
    }

    /// Show slide `n` (1-based) now and restart the timer from here.
    ///
    /// `n` wraps modulo the slide count, so `0` selects the last slide.
    pub fn jump_to<P: Page>(&mut self, dom: &Contract<'_, P>, n: usize) -> Option<Tick> {
        let count = dom.slides().len();
        if count == 0 || self.stopped {
            return None;
        }
        self.index = (n % count + count - 1) % count;
        render(dom, self.index);
        self.rearm()
    }

    /// Handle a fired timer. Returns the next tick, if the chain continues.
    pub fn on_tick<P: Page>(&mut self, dom: &Contract<'_, P>, generation: u64) -> Option<Tick> {
        if self.stopped || generation != self.generation {
            return None;
        }
        if dom.slides().is_empty() {
            return None;
        }
        self.advance(dom);
        Some(self.tick())
    }

    /// Stop for good. Pending ticks are ignored from here on.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.generation += 1;
    }

    fn rearm(&mut self) -> Option<Tick> {
        if self.stopped {
            return None;
        }
        self.generation += 1;
        Some(self.tick())
    }

    fn tick(&self) -> Tick {
        Tick { generation: self.generation, delay_ms: self.interval_ms }
    }
}

/// Hide every slide and dot, then show the pair at `index`.
pub fn render<P: Page>(dom: &Contract<'_, P>, index: usize) {
    let active = &dom.selectors().active_class;
    let slides = dom.slides();
    let dots = dom.dots();
    for slide in &slides {
        slide.set_display(Display::None);
    }
    for dot in &dots {
        dot.remove_class(active);
    }
    if let Some(slide) = slides.get(index) {
        slide.set_display(Display::Block);
    }
    if let Some(dot) = dots.get(index) {
        dot.add_class(active);
    }
}

/// Position of the dot containing `target`, if any.
#[must_use]
pub fn dot_index<P: Page>(dom: &Contract<'_, P>, target: &P::Node) -> Option<usize> {
    dom.dots().iter().position(|d| d.contains(target))
}
