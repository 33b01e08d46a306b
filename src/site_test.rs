use super::*;
use crate::dom::{Display, Node};
use crate::synthetic::{SyntheticNode, SyntheticPage};

/// Page with header/footer placeholders, a slideshow, and a contact form.
/// Header content arrives through [`arrive_header`].
struct Fixture {
    page: SyntheticPage,
    header: SyntheticNode,
    slides: Vec<SyntheticNode>,
    dots: Vec<SyntheticNode>,
    name: SyntheticNode,
    form: SyntheticNode,
    outside: SyntheticNode,
}

struct Header {
    button: SyntheticNode,
    menu: SyntheticNode,
    roots: Vec<SyntheticNode>,
    panels: Vec<SyntheticNode>,
}

fn fixture() -> Fixture {
    let page = SyntheticPage::new();
    let header = page.add(SyntheticNode::element().with_id("header"));
    let slides = (0..3)
        .map(|_| page.add(SyntheticNode::element().with_class("slide")))
        .collect();
    let dots = (0..3)
        .map(|_| page.add(SyntheticNode::element().with_class("dot")))
        .collect();
    let name = SyntheticNode::element().with_field("name", "");
    let form = page.add(
        SyntheticNode::element()
            .with_id("contactForm")
            .child(name.clone())
            .child(SyntheticNode::element().with_field("email", ""))
            .child(SyntheticNode::element().with_field("message", "")),
    );
    let outside = page.add(SyntheticNode::element());
    page.add(SyntheticNode::element().with_id("footer"));
    Fixture { page, header, slides, dots, name, form, outside }
}

fn arrive_header(f: &Fixture) -> Header {
    let button = SyntheticNode::element().with_id("mobile-menu-btn");
    let mut roots = Vec::new();
    let mut panels = Vec::new();
    let menu = SyntheticNode::element().with_class("main-menu");
    for _ in 0..2 {
        let panel = SyntheticNode::element().with_class("dropdown-panel");
        let root = SyntheticNode::element().with_class("panel-dropdown").child(panel.clone());
        menu.append(&root);
        roots.push(root);
        panels.push(panel);
    }
    f.header.append(&button);
    f.header.append(&menu);
    Header { button, menu, roots, panels }
}

fn core(f: &Fixture) -> SiteCore<SyntheticPage> {
    SiteCore::new(f.page.clone(), SiteConfig::default())
}

// =============================================================
// Start
// =============================================================

#[test]
fn start_requests_fragments_and_arms_slideshow() {
    let f = fixture();
    let mut site = core(&f);
    let actions = site.start(1280.0);
    assert_eq!(
        actions,
        vec![
            Action::LoadFragment { target_id: "header".into(), path: "components/header.html".into() },
            Action::LoadFragment { target_id: "footer".into(), path: "components/footer.html".into() },
            Action::ScheduleTick { generation: 1, delay_ms: 5000 },
        ]
    );
    assert_eq!(f.slides[0].display(), Display::Block);
    assert!(f.dots[0].has_class("active"));
    assert_eq!(site.nav_mode(), NavMode::Desktop);
}

#[test]
fn start_on_empty_page_schedules_nothing() {
    let mut site = SiteCore::new(SyntheticPage::new(), SiteConfig::default());
    let actions = site.start(500.0);
    assert!(actions.iter().all(|a| matches!(a, Action::LoadFragment { .. })));
    assert!(site.on_tick(1).is_empty());
    assert!(site.jump_to_slide(1).is_empty());
}

#[test]
fn start_sets_up_static_contact_form() {
    let f = fixture();
    let mut site = core(&f);
    site.start(1280.0);
    assert!(site.is_ready(Feature::ContactForm));
    assert!(!site.is_ready(Feature::MobileMenu));
}

// =============================================================
// Fragments
// =============================================================

#[test]
fn header_injection_sets_up_mobile_menu() {
    let f = fixture();
    let mut site = core(&f);
    site.start(500.0);
    let header = arrive_header(&f);

    site.inject_fragment("header", "<nav></nav>").expect("inject");
    assert!(site.is_ready(Feature::MobileMenu));
    assert!(!site.is_ready(Feature::Dropdowns));

    assert_eq!(site.on_mutation(), vec![Feature::Dropdowns]);
    assert_eq!(site.take_new_dropdown_roots(), header.roots);
    assert!(site.take_new_dropdown_roots().is_empty());
}

#[test]
fn footer_injection_leaves_mobile_menu_to_watcher() {
    let f = fixture();
    let mut site = core(&f);
    site.start(500.0);
    arrive_header(&f);
    site.inject_fragment("footer", "<footer></footer>").expect("inject");
    assert!(!site.is_ready(Feature::MobileMenu));
    assert!(site.on_mutation().contains(&Feature::MobileMenu));
}

#[test]
fn injection_into_missing_placeholder_errors() {
    let mut site = SiteCore::new(SyntheticPage::new(), SiteConfig::default());
    assert!(matches!(
        site.inject_fragment("header", "<nav></nav>"),
        Err(SiteError::MissingPlaceholder(_))
    ));
}

// =============================================================
// Click routing
// =============================================================

#[test]
fn trigger_click_toggles_and_stops() {
    let f = fixture();
    let mut site = core(&f);
    site.start(500.0);
    let header = arrive_header(&f);
    site.on_mutation();

    assert_eq!(site.on_click(&header.button), vec![Action::StopPropagation]);
    assert!(header.menu.has_class("show"));
    assert_eq!(site.on_click(&header.button), vec![Action::StopPropagation]);
    assert!(!header.menu.has_class("show"));
}

#[test]
fn outside_click_closes_menu_and_dropdowns() {
    let f = fixture();
    let mut site = core(&f);
    site.start(500.0);
    let header = arrive_header(&f);
    site.on_mutation();

    site.on_click(&header.button);
    site.on_click(&header.roots[0]);
    assert_eq!(header.panels[0].display(), Display::Block);
    assert!(header.menu.has_class("show"));

    assert!(site.on_click(&f.outside).is_empty());
    assert!(!header.menu.has_class("show"));
    assert_eq!(header.panels[0].display(), Display::None);
}

#[test]
fn mobile_dropdown_click_keeps_menu_open() {
    let f = fixture();
    let mut site = core(&f);
    site.start(500.0);
    let header = arrive_header(&f);
    site.on_mutation();

    site.on_click(&header.button);
    assert_eq!(site.on_click(&header.roots[1]), vec![Action::StopPropagation]);
    assert!(header.menu.has_class("show"));
    assert_eq!(header.panels[1].display(), Display::Block);
}

#[test]
fn desktop_root_click_falls_through_to_document() {
    let f = fixture();
    let mut site = core(&f);
    site.start(1280.0);
    let header = arrive_header(&f);
    site.on_mutation();

    site.on_hover(&header.roots[0], true);
    assert_eq!(header.panels[0].display(), Display::Block);
    assert!(site.on_click(&header.roots[0]).is_empty());
    assert_eq!(header.panels[0].display(), Display::None);
}

#[test]
fn hover_before_setup_is_ignored() {
    let f = fixture();
    let mut site = core(&f);
    site.start(1280.0);
    let header = arrive_header(&f);
    site.on_hover(&header.roots[0], true);
    assert_eq!(header.panels[0].display(), Display::Unset);
}

#[test]
fn dot_click_jumps_and_rearms() {
    let f = fixture();
    let mut site = core(&f);
    site.start(1280.0);
    let actions = site.on_click(&f.dots[2]);
    assert_eq!(actions, vec![Action::ScheduleTick { generation: 2, delay_ms: 5000 }]);
    assert_eq!(site.slide_index(), 2);
    assert_eq!(f.slides[2].display(), Display::Block);
}

#[test]
fn scroll_button_click_requests_scroll() {
    let f = fixture();
    let button = f.page.add(SyntheticNode::element().with_id("scrollToTop"));
    let mut site = core(&f);
    site.start(1280.0);
    assert_eq!(site.on_click(&button), vec![Action::ScrollToTop]);
}

// =============================================================
// Scroll / resize
// =============================================================

#[test]
fn scroll_toggles_button_after_setup() {
    let f = fixture();
    let mut site = core(&f);
    site.start(1280.0);
    site.on_scroll(900.0);

    let button = f.page.add(SyntheticNode::element().with_id("scrollToTop"));
    site.on_mutation();
    assert_eq!(button.display(), Display::None);
    site.on_scroll(900.0);
    assert_eq!(button.display(), Display::Flex);
    site.on_scroll(10.0);
    assert_eq!(button.display(), Display::None);
}

#[test]
fn resize_to_desktop_clears_menu_and_panels() {
    let f = fixture();
    let mut site = core(&f);
    site.start(500.0);
    let header = arrive_header(&f);
    site.on_mutation();
    site.on_click(&header.button);
    site.on_click(&header.roots[0]);

    site.on_resize(1024.0);
    assert_eq!(site.nav_mode(), NavMode::Desktop);
    assert!(!header.menu.has_class("show"));
    assert_eq!(header.panels[0].display(), Display::None);
}

#[test]
fn resize_within_mobile_keeps_menu() {
    let f = fixture();
    let mut site = core(&f);
    site.start(500.0);
    let header = arrive_header(&f);
    site.on_mutation();
    site.on_click(&header.button);

    site.on_resize(768.0);
    assert_eq!(site.nav_mode(), NavMode::Mobile);
    assert!(header.menu.has_class("show"));
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn submit_then_sent_resets_and_notifies() {
    let f = fixture();
    let mut site = core(&f);
    site.start(1280.0);
    f.name.set_value("Ada");

    let actions = site.on_submit(&f.form);
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], Action::PreventDefault);
    let Action::Submit(submission) = &actions[1] else {
        panic!("expected submit, got {:?}", actions[1]);
    };
    assert!(submission.entries.contains(&("entry.856552114".to_owned(), "Ada".to_owned())));

    let after = site.on_submission_sent();
    assert_eq!(after, vec![Action::Notify(site.config.contact.confirmation.clone())]);
    assert_eq!(f.name.value().as_deref(), Some(""));
}

#[test]
fn submit_from_other_form_passes_through() {
    let f = fixture();
    let mut site = core(&f);
    site.start(1280.0);
    assert!(site.on_submit(&f.outside).is_empty());
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_silences_slideshow() {
    let f = fixture();
    let mut site = core(&f);
    site.start(1280.0);
    site.teardown();
    assert!(site.on_tick(1).is_empty());
    assert!(site.jump_to_slide(2).is_empty());
    assert_eq!(site.slide_index(), 0);
}
