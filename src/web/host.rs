//! Browser host: wires DOM events into [`SiteCore`] and carries out the
//! [`Action`]s it returns.
//!
//! DESIGN
//! ======
//! Click, submit, scroll, and resize each get one listener, bound once at
//! mount; click and submit are delegated from the document so elements that
//! arrive later with a fragment need no re-binding. Hover does not bubble, so
//! hover listeners are bound per dropdown root: the core hands out each root it
//! sets up exactly once, and the host binds whatever it is handed after every
//! setup pass.
//!
//! The core sits in a `RefCell` inside the shared `Rc<Host>`. Every callback
//! borrows it for a single core call and releases the borrow before performing the returned
//! actions, so async continuations never find it already borrowed.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, Event, EventTarget, FormData, MutationObserver, MutationObserverInit, RequestMode,
    ScrollBehavior, ScrollToOptions, Window,
};

use super::page::{WebNode, WebPage, js_error};
use crate::config::SiteConfig;
use crate::contact_form::Submission;
use crate::error::SiteError;
use crate::fragments;
use crate::site::{Action, SiteCore};
use crate::watcher::Feature;

type Listener = Closure<dyn FnMut(Event)>;

/// A bound event listener, kept so it can be removed on teardown.
struct Binding {
    target: EventTarget,
    event: &'static str,
    callback: Listener,
}

/// Owns the core and every browser resource bound on its behalf.
pub struct Host {
    core: RefCell<SiteCore<WebPage>>,
    window: Window,
    bindings: RefCell<Vec<Binding>>,
    slide_timer: RefCell<Option<Timeout>>,
    observer: RefCell<Option<(MutationObserver, Closure<dyn FnMut()>)>>,
}

impl Host {
    /// Bind every listener, start the core, and perform its start actions.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Js`] if there is no window or document, or the
    /// mutation observer cannot be created.
    pub fn mount(config: SiteConfig) -> Result<Rc<Self>, SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::Js("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| SiteError::Js("no document".to_owned()))?;

        let host = Rc::new(Self {
            core: RefCell::new(SiteCore::new(WebPage::new(document.clone()), config)),
            window: window.clone(),
            bindings: RefCell::new(Vec::new()),
            slide_timer: RefCell::new(None),
            observer: RefCell::new(None),
        });

        host.listen(document.as_ref(), "click", |host, event| {
            let Some(target) = event_element(&event) else {
                return;
            };
            let actions = host.core.borrow_mut().on_click(&target);
            host.perform(actions, Some(&event));
        })?;

        host.listen(document.as_ref(), "submit", |host, event| {
            let Some(target) = event_element(&event) else {
                return;
            };
            let actions = host.core.borrow_mut().on_submit(&target);
            host.perform(actions, Some(&event));
        })?;

        host.listen(window.as_ref(), "scroll", |host, _| match host.window.scroll_y() {
            Ok(offset) => host.core.borrow_mut().on_scroll(offset),
            Err(e) => log::warn!("read scroll offset: {}", js_error(e)),
        })?;

        host.listen(window.as_ref(), "resize", |host, _| {
            let width = host.viewport_width();
            host.core.borrow_mut().on_resize(width);
        })?;

        host.observe_body()?;

        let width = host.viewport_width();
        let actions = host.core.borrow_mut().start(width);
        host.perform(actions, None);
        host.bind_hover();
        log::info!("site behaviors mounted at {width}px ({:?} nav)", host.core.borrow().nav_mode());
        Ok(host)
    }

    /// Show slide `n` (1-based) and restart the slideshow timer.
    pub fn jump_to_slide(self: &Rc<Self>, n: usize) {
        let actions = self.core.borrow_mut().jump_to_slide(n);
        log::debug!("slideshow at index {}", self.core.borrow().slide_index());
        self.perform(actions, None);
    }

    /// Stop the slideshow, disconnect the observer, and remove every listener.
    pub fn teardown(&self) {
        self.core.borrow_mut().teardown();
        self.slide_timer.borrow_mut().take();
        if let Some((observer, _)) = self.observer.borrow_mut().take() {
            observer.disconnect();
        }
        for binding in self.bindings.borrow_mut().drain(..) {
            if let Err(e) = binding
                .target
                .remove_event_listener_with_callback(binding.event, binding.callback.as_ref().unchecked_ref())
            {
                log::warn!("remove {} listener: {}", binding.event, js_error(e));
            }
        }
        log::info!("site behaviors torn down");
    }

    fn viewport_width(&self) -> f64 {
        match self.window.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(0.0),
            Err(e) => {
                log::warn!("read viewport width: {}", js_error(e));
                0.0
            }
        }
    }

    fn listen(
        self: &Rc<Self>,
        target: &EventTarget,
        event: &'static str,
        handler: impl Fn(&Rc<Self>, Event) + 'static,
    ) -> Result<(), SiteError> {
        let weak = Rc::downgrade(self);
        let callback: Listener = Closure::new(move |e: Event| {
            if let Some(host) = weak.upgrade() {
                handler(&host, e);
            }
        });
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
        self.bindings.borrow_mut().push(Binding { target: target.clone(), event, callback });
        Ok(())
    }

    fn observe_body(self: &Rc<Self>) -> Result<(), SiteError> {
        let Some(body) = self.core.borrow().page().document().body() else {
            log::warn!("no <body>; fragment setup will not be re-run");
            return Ok(());
        };
        let weak = Rc::downgrade(self);
        let callback: Closure<dyn FnMut()> = Closure::new(move || {
            let Some(host) = weak.upgrade() else {
                return;
            };
            let ready = host.core.borrow_mut().on_mutation();
            if ready.contains(&Feature::Dropdowns) {
                host.bind_hover();
            }
        });
        let observer = MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        observer.observe_with_options(&body, &options).map_err(js_error)?;
        *self.observer.borrow_mut() = Some((observer, callback));
        Ok(())
    }

    /// Bind hover listeners on every dropdown root set up since the last call.
    fn bind_hover(self: &Rc<Self>) {
        let roots = self.core.borrow_mut().take_new_dropdown_roots();
        for root in roots {
            for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
                let node = root.clone();
                let bound = self.listen(root.0.as_ref(), event, move |host, _| {
                    host.core.borrow_mut().on_hover(&node, entered);
                });
                if let Err(e) = bound {
                    log::warn!("bind {event}: {e}");
                }
            }
        }
    }

    fn perform(self: &Rc<Self>, actions: Vec<Action>, event: Option<&Event>) {
        for action in actions {
            match action {
                Action::LoadFragment { target_id, path } => {
                    let host = Rc::clone(self);
                    wasm_bindgen_futures::spawn_local(async move {
                        host.load_fragment(&target_id, &path).await;
                    });
                }
                Action::ScheduleTick { generation, delay_ms } => {
                    let weak = Rc::downgrade(self);
                    let timer = Timeout::new(delay_ms, move || {
                        if let Some(host) = weak.upgrade() {
                            let actions = host.core.borrow_mut().on_tick(generation);
                            host.perform(actions, None);
                        }
                    });
                    // Replacing the handle cancels any timer still pending.
                    *self.slide_timer.borrow_mut() = Some(timer);
                }
                Action::ScrollToTop => {
                    let options = ScrollToOptions::new();
                    options.set_top(0.0);
                    options.set_behavior(ScrollBehavior::Smooth);
                    self.window.scroll_to_with_scroll_to_options(&options);
                }
                Action::Submit(submission) => {
                    let host = Rc::clone(self);
                    wasm_bindgen_futures::spawn_local(async move {
                        host.relay(submission).await;
                    });
                }
                Action::Notify(message) => {
                    if let Err(e) = self.window.alert_with_message(&message) {
                        log::warn!("alert: {}", js_error(e));
                    }
                }
                Action::StopPropagation => {
                    if let Some(event) = event {
                        event.stop_propagation();
                    }
                }
                Action::PreventDefault => {
                    if let Some(event) = event {
                        event.prevent_default();
                    }
                }
            }
        }
    }

    async fn load_fragment(&self, target_id: &str, path: &str) {
        let loaded = match fetch_text(path).await {
            Ok(html) => self.core.borrow_mut().inject_fragment(target_id, &html),
            Err(e) => Err(e),
        };
        if let Err(e) = loaded {
            log::error!("error loading {path}: {e}");
        }
    }

    async fn relay(self: Rc<Self>, submission: Submission) {
        match post_opaque(&submission).await {
            Ok(()) => {
                let actions = self.core.borrow_mut().on_submission_sent();
                self.perform(actions, None);
            }
            Err(e) => log::error!("contact form relay failed: {e}"),
        }
    }
}

fn event_element(event: &Event) -> Option<WebNode> {
    event
        .target()
        .and_then(|t| t.dyn_ref::<Element>().cloned())
        .map(WebNode)
}

async fn fetch_text(path: &str) -> Result<String, SiteError> {
    let response = Request::get(path)
        .send()
        .await
        .map_err(|e| SiteError::Network(e.to_string()))?;
    fragments::check_status(path, response.status())?;
    response.text().await.map_err(|e| SiteError::Network(e.to_string()))
}

/// POST `submission` as multipart form data. The response is opaque
/// (`no-cors`), so success only means the request left the browser.
async fn post_opaque(submission: &Submission) -> Result<(), SiteError> {
    let form = FormData::new().map_err(js_error)?;
    for (key, value) in &submission.entries {
        form.append_with_str(key, value).map_err(js_error)?;
    }
    Request::post(&submission.endpoint)
        .mode(RequestMode::NoCors)
        .body(form)
        .map_err(|e| SiteError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SiteError::Network(e.to_string()))?;
    Ok(())
}
