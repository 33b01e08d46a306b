use crate::config::SiteConfig;
use crate::contact_form::{self, Submission};
use crate::dom::{Contract, Page};
use crate::dropdown::{self, DropdownNav, NavMode};
use crate::error::SiteError;
use crate::slideshow::{self, Slideshow, Tick};
use crate::watcher::{self, Feature, FeatureFlags};
use crate::{accordion, fragments, mobile_menu, scroll_top};

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

/// Effects returned from event handlers for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Fetch `path` as text and hand it to [`SiteCore::inject_fragment`].
    LoadFragment { target_id: String, path: String },
    /// Call [`SiteCore::on_tick`] with `generation` after `delay_ms`.
    ScheduleTick { generation: u64, delay_ms: u32 },
    /// Smooth-scroll the window to the top.
    ScrollToTop,
    /// Relay the submission, then call [`SiteCore::on_submission_sent`].
    Submit(Submission),
    /// Show a message to the user.
    Notify(String),
    /// Stop the current event from reaching further handlers.
    StopPropagation,
    /// Cancel the browser's default handling of the current event.
    PreventDefault,
}

impl From<Tick> for Action {
    fn from(tick: Tick) -> Self {
        Self::ScheduleTick { generation: tick.generation, delay_ms: tick.delay_ms }
    }
}

/// Core site state: every behavior, independent of the browser.
///
/// Separated from the host so it can be driven against a synthetic page.
pub struct SiteCore<P: Page> {
    page: P,
    config: SiteConfig,
    flags: FeatureFlags,
    nav: DropdownNav<P::Node>,
    slideshow: Slideshow,
    viewport_width: f64,
}

impl<P: Page> SiteCore<P> {
    #[must_use]
    pub fn new(page: P, config: SiteConfig) -> Self {
        let slideshow = Slideshow::new(config.slide_interval_ms);
        Self {
            page,
            config,
            flags: FeatureFlags::default(),
            nav: DropdownNav::default(),
            slideshow,
            viewport_width: 0.0,
        }
    }

    // --- Lifecycle ---

    /// Initial pass at page load: set up whatever is already present, start
    /// the slideshow, and request the fragments.
    pub fn start(&mut self, viewport_width: f64) -> Vec<Action> {
        self.viewport_width = viewport_width;
        self.nav.setup(
            &Contract::new(&self.page, &self.config.selectors),
            viewport_width,
            self.config.mobile_breakpoint_px,
        );
        self.on_mutation();

        let mut actions: Vec<Action> = self
            .config
            .fragments
            .iter()
            .map(|f| Action::LoadFragment { target_id: f.target_id.clone(), path: f.path.clone() })
            .collect();
        let dom = Contract::new(&self.page, &self.config.selectors);
        if let Some(tick) = self.slideshow.start(&dom) {
            actions.push(tick.into());
        }
        actions
    }

    /// Stop the slideshow. Pending ticks become no-ops.
    pub fn teardown(&mut self) {
        self.slideshow.stop();
    }

    // --- Fragments / mutations ---

    /// Inject a fetched fragment. The header fragment also sets up the mobile
    /// menu right away rather than waiting for the mutation callback.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::MissingPlaceholder`] if the placeholder is gone.
    pub fn inject_fragment(&mut self, target_id: &str, html: &str) -> Result<(), SiteError> {
        let dom = Contract::new(&self.page, &self.config.selectors);
        fragments::inject(&dom, target_id, html)?;
        if target_id == self.config.header_id {
            watcher::setup_mobile_menu(&mut self.flags, &dom);
        }
        Ok(())
    }

    /// The document changed. Returns features that became ready.
    pub fn on_mutation(&mut self) -> Vec<Feature> {
        let dom = Contract::new(&self.page, &self.config.selectors);
        watcher::setup_pass(
            &mut self.flags,
            &dom,
            &mut self.nav,
            self.viewport_width,
            self.config.mobile_breakpoint_px,
        )
    }

    // --- Input events ---

    /// Route a click the way it would bubble through the page's handlers.
    pub fn on_click(&mut self, target: &P::Node) -> Vec<Action> {
        let dom = Contract::new(&self.page, &self.config.selectors);

        if self.flags.is_ready(Feature::MobileMenu) && mobile_menu::trigger_contains(&dom, target) {
            mobile_menu::toggle(&dom);
            return vec![Action::StopPropagation];
        }
        if self.flags.is_ready(Feature::Dropdowns) && self.nav.on_click(&dom, target) {
            return vec![Action::StopPropagation];
        }

        let mut actions = Vec::new();
        accordion::on_click(&dom, target);
        if self.flags.is_ready(Feature::ScrollToTop) && scroll_top::hit(&dom, target) {
            actions.push(Action::ScrollToTop);
        }
        if let Some(pos) = slideshow::dot_index(&dom, target) {
            if let Some(tick) = self.slideshow.jump_to(&dom, pos + 1) {
                actions.push(tick.into());
            }
        }

        // Document-level handlers.
        if self.flags.is_ready(Feature::MobileMenu) {
            mobile_menu::dismiss_outside(&dom, target);
        }
        dropdown::close_all(&dom);
        actions
    }

    /// Pointer entered (`true`) or left (`false`) a dropdown root.
    pub fn on_hover(&mut self, root: &P::Node, entered: bool) {
        if !self.flags.is_ready(Feature::Dropdowns) {
            return;
        }
        let dom = Contract::new(&self.page, &self.config.selectors);
        self.nav.on_hover(&dom, root, entered);
    }

    /// The window scrolled to vertical `offset`.
    pub fn on_scroll(&mut self, offset: f64) {
        if !self.flags.is_ready(Feature::ScrollToTop) {
            return;
        }
        let dom = Contract::new(&self.page, &self.config.selectors);
        scroll_top::on_scroll(&dom, offset, self.config.scroll_threshold_px);
    }

    /// The viewport is now `width` pixels wide.
    pub fn on_resize(&mut self, width: f64) {
        self.viewport_width = width;
        let dom = Contract::new(&self.page, &self.config.selectors);
        self.nav.setup(&dom, width, self.config.mobile_breakpoint_px);
        if width > self.config.mobile_breakpoint_px && mobile_menu::is_open(&dom) {
            mobile_menu::close(&dom);
            log::debug!("mobile menu closed at {width}px");
        }
    }

    /// A form was submitted from `target`.
    pub fn on_submit(&mut self, target: &P::Node) -> Vec<Action> {
        if !self.flags.is_ready(Feature::ContactForm) {
            return Vec::new();
        }
        let dom = Contract::new(&self.page, &self.config.selectors);
        match contact_form::read_submission(&dom, &self.config.contact, target) {
            Some(submission) => {
                log::info!("relaying contact form to {}", submission.endpoint);
                vec![Action::PreventDefault, Action::Submit(submission)]
            }
            None => Vec::new(),
        }
    }

    /// The relay request was dispatched. Its outcome is never known.
    pub fn on_submission_sent(&mut self) -> Vec<Action> {
        let dom = Contract::new(&self.page, &self.config.selectors);
        contact_form::reset(&dom);
        vec![Action::Notify(self.config.contact.confirmation.clone())]
    }

    // --- Slideshow ---

    /// A slideshow timer fired.
    pub fn on_tick(&mut self, generation: u64) -> Vec<Action> {
        let dom = Contract::new(&self.page, &self.config.selectors);
        self.slideshow
            .on_tick(&dom, generation)
            .into_iter()
            .map(Action::from)
            .collect()
    }

    /// Show slide `n` (1-based) and restart the timer.
    pub fn jump_to_slide(&mut self, n: usize) -> Vec<Action> {
        let dom = Contract::new(&self.page, &self.config.selectors);
        self.slideshow
            .jump_to(&dom, n)
            .into_iter()
            .map(Action::from)
            .collect()
    }

    // --- Queries ---

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn is_ready(&self, feature: Feature) -> bool {
        self.flags.is_ready(feature)
    }

    #[must_use]
    pub fn nav_mode(&self) -> NavMode {
        self.nav.mode()
    }

    #[must_use]
    pub fn slide_index(&self) -> usize {
        self.slideshow.index()
    }

    /// Dropdown roots set up since the last call, for hosts that bind hover
    /// listeners per element. Each root is handed out once.
    pub fn take_new_dropdown_roots(&mut self) -> Vec<P::Node> {
        self.nav.take_pending()
    }
}
