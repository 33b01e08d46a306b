//! Browser entry point (`hydrate` only).
//!
//! The wasm start function installs logging, reads the optional inline config
//! block, and mounts a [`host::Host`] once the document has been parsed. The
//! mounted host lives in a thread-local so the JS exports can reach it.

pub mod host;
pub mod page;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use host::Host;

thread_local! {
    static HOST: RefCell<Option<Rc<Host>>> = const { RefCell::new(None) };
}

/// Wasm start function.
#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("logger already installed: {e}");
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; site behaviors disabled");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(mount);
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::error!("bind DOMContentLoaded: {e:?}");
        }
    } else {
        mount();
    }
}

/// Jump the slideshow to slide `n` (1-based). Also installed as
/// `window.currentSlide` for inline `onclick` handlers.
#[wasm_bindgen(js_name = currentSlide)]
pub fn current_slide(n: u32) {
    let n = usize::try_from(n).unwrap_or(usize::MAX);
    HOST.with(|slot| {
        if let Some(host) = slot.borrow().as_ref() {
            host.jump_to_slide(n);
        }
    });
}

/// Stop the slideshow and unbind every listener.
#[wasm_bindgen]
pub fn teardown() {
    HOST.with(|slot| {
        if let Some(host) = slot.borrow_mut().take() {
            host.teardown();
        }
    });
}

fn mount() {
    let config = web_sys::window()
        .and_then(|w| w.document())
        .map_or_else(SiteConfig::default, |doc| read_config(&doc));

    match Host::mount(config) {
        Ok(host) => {
            HOST.with(|slot| *slot.borrow_mut() = Some(host));
            expose_current_slide();
        }
        Err(e) => log::error!("mounting site behaviors failed: {e}"),
    }
}

fn read_config(document: &Document) -> SiteConfig {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(raw) => SiteConfig::from_json_or_default(&raw),
        None => SiteConfig::default(),
    }
}

fn expose_current_slide() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let jump = Closure::<dyn Fn(u32)>::new(current_slide).into_js_value();
    if let Err(e) = Reflect::set(&window, &JsValue::from_str("currentSlide"), &jump) {
        log::warn!("install window.currentSlide: {e:?}");
    }
}
