//! Client-side behavior for a static marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by the site's pages. It
//! injects the shared header/footer fragments and drives the navigation menus,
//! scroll-to-top button, slideshow, accordion, and contact-form relay.
//!
//! All behavior lives in [`site::SiteCore`], which works against the
//! [`dom::Page`] contract and returns [`site::Action`]s for its host to carry
//! out. The `hydrate` feature adds the browser host in `web`; without it the
//! crate builds natively and is driven against [`synthetic::SyntheticPage`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Core state, event routing, and host-facing actions |
//! | [`dom`] | DOM contract: `Node`, `Page`, named element accessors |
//! | [`synthetic`] | In-memory `Page` for tests and non-browser embedders |
//! | [`fragments`] | Header/footer fragment injection |
//! | [`watcher`] | Once-per-feature setup as fragment elements arrive |
//! | [`mobile_menu`] | Hamburger menu toggle and outside-click dismissal |
//! | [`dropdown`] | Hover/tap dropdown navigation |
//! | [`scroll_top`] | Scroll-to-top button |
//! | [`slideshow`] | Auto-advancing slideshow |
//! | [`contact_form`] | Contact form packaging and reset |
//! | [`accordion`] | Single-open accordion |
//! | [`config`] | Site configuration and selectors |
//! | [`consts`] | Default thresholds, paths, and relay keys |
//! | [`error`] | `SiteError` |

pub mod accordion;
pub mod config;
pub mod consts;
pub mod contact_form;
pub mod dom;
pub mod dropdown;
pub mod error;
pub mod fragments;
pub mod mobile_menu;
pub mod scroll_top;
pub mod site;
pub mod slideshow;
pub mod synthetic;
pub mod watcher;

#[cfg(feature = "hydrate")]
pub mod web;
