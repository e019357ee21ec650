use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Vertical scroll offset beyond which the nav bar switches to its condensed style.
const SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Horizontal anchor line below the viewport top; the first section crossing it is active.
const SECTION_ANCHOR_PX: f64 = 150.0;
/// Height of the fixed nav bar; scroll targets stop this far below the viewport top.
const HEADER_OFFSET_PX: f64 = 80.0;

/// The five content sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const IN_DOCUMENT_ORDER: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Sections shown in the nav bar, in display order.
    pub const NAV_ITEMS: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Two-digit position in the nav bar (`01`-`04`); `None` for sections not in it.
    pub fn nav_number(self) -> Option<String> {
        Self::NAV_ITEMS
            .iter()
            .position(|s| *s == self)
            .map(|i| format!("{:02}", i + 1))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Live view-derived state: registered into context by [`provide_viewport_state`].
#[derive(Clone, Copy)]
pub struct ViewportState {
    pub scrolled: ReadSignal<bool>,
    pub active_section: ReadSignal<Section>,
    pub pointer: ReadSignal<PointerPosition>,
}

/// Subscribes to window scroll and mouse movement for the lifetime of the
/// current reactive owner and provides [`ViewportState`] as context. The
/// listeners are removed when the owner is disposed.
pub fn provide_viewport_state() {
    let (scrolled, set_scrolled) = signal(false);
    let (active_section, set_active_section) = signal(Section::Home);
    let (pointer, set_pointer) = signal(PointerPosition::default());

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        set_scrolled.set(past_scroll_threshold(offset));
        // A tick with no section under the anchor (e.g. mid programmatic
        // scroll) keeps the previous selection.
        if let Some(section) = section_under_anchor() {
            set_active_section.set(section);
        }
    });

    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        set_pointer.set(PointerPosition {
            x: ev.client_x() as f64,
            y: ev.client_y() as f64,
        });
    });

    provide_context(ViewportState {
        scrolled,
        active_section,
        pointer,
    });
}

/// Smooth-scroll navigation plus the mobile menu flag it controls.
#[derive(Clone, Copy)]
pub struct Navigator {
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
}

pub fn provide_navigator() {
    provide_context(Navigator::new());
}

impl Navigator {
    fn new() -> Self {
        let (menu_open, set_menu_open) = signal(false);
        Self {
            menu_open,
            set_menu_open,
        }
    }

    pub fn menu_open(&self) -> ReadSignal<bool> {
        self.menu_open
    }

    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|open| *open = !*open);
    }

    /// Scrolls the window so `section` lands just below the fixed nav bar and
    /// closes the mobile menu. Does nothing if the section element is not in
    /// the document.
    pub fn go_to(&self, section: Section) {
        let Some(element) = document().get_element_by_id(section.id()) else {
            return;
        };
        let target = scroll_target(
            element.get_bounding_client_rect().top(),
            window().scroll_y().unwrap_or_default(),
        );

        let options = ScrollToOptions::new();
        options.set_top(target);
        options.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);

        self.set_menu_open.set(false);
    }
}

/// Decorative glow that trails the pointer.
#[component]
pub fn CursorGlow() -> impl IntoView {
    let viewport = expect_context::<ViewportState>();
    view! {
        <div
            class="cursor-glow"
            style:left=move || format!("{}px", viewport.pointer.get().x)
            style:top=move || format!("{}px", viewport.pointer.get().y)
        ></div>
    }
}

fn past_scroll_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// First section in document order whose bounding rect spans the anchor line.
fn section_under_anchor() -> Option<Section> {
    let doc = document();
    first_anchored(Section::IN_DOCUMENT_ORDER.into_iter().map(|section| {
        let rect = doc
            .get_element_by_id(section.id())
            .map(|el| el.get_bounding_client_rect())
            .map(|rect| (rect.top(), rect.bottom()));
        (section, rect)
    }))
}

fn first_anchored(
    rects: impl IntoIterator<Item = (Section, Option<(f64, f64)>)>,
) -> Option<Section> {
    rects
        .into_iter()
        .find(|(_, rect)| {
            rect.is_some_and(|(top, bottom)| top <= SECTION_ANCHOR_PX && bottom >= SECTION_ANCHOR_PX)
        })
        .map(|(section, _)| section)
}

fn scroll_target(element_top: f64, scroll_offset: f64) -> f64 {
    element_top + scroll_offset - HEADER_OFFSET_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    // All five sections laid out back to back, `scroll` px into the page.
    fn page_rects(scroll: f64) -> Vec<(Section, Option<(f64, f64)>)> {
        const SECTION_HEIGHT: f64 = 900.0;
        Section::IN_DOCUMENT_ORDER
            .into_iter()
            .enumerate()
            .map(|(i, section)| {
                let top = i as f64 * SECTION_HEIGHT - scroll;
                (section, Some((top, top + SECTION_HEIGHT)))
            })
            .collect()
    }

    #[test]
    fn scroll_threshold_is_strict() {
        assert!(!past_scroll_threshold(0.0));
        assert!(!past_scroll_threshold(49.9));
        assert!(!past_scroll_threshold(50.0));
        assert!(past_scroll_threshold(50.1));
        assert!(past_scroll_threshold(800.0));
    }

    #[test]
    fn fresh_page_is_on_home() {
        assert_eq!(first_anchored(page_rects(0.0)), Some(Section::Home));
        assert!(!past_scroll_threshold(0.0));
    }

    #[test]
    fn about_spanning_anchor_is_active() {
        // scrollY = 800: about spans (-50, 400) around the 150px anchor
        let rects = vec![
            (Section::Home, Some((-800.0, 100.0))),
            (Section::About, Some((-50.0, 400.0))),
            (Section::Projects, Some((400.0, 1300.0))),
            (Section::Skills, Some((1300.0, 2200.0))),
            (Section::Contact, Some((2200.0, 3100.0))),
        ];
        assert_eq!(first_anchored(rects), Some(Section::About));
        assert!(past_scroll_threshold(800.0));
    }

    #[test]
    fn first_candidate_in_document_order_wins() {
        // Both home and about touch the anchor line; home is earlier
        let rects = vec![
            (Section::Home, Some((0.0, 150.0))),
            (Section::About, Some((150.0, 1050.0))),
        ];
        assert_eq!(first_anchored(rects), Some(Section::Home));
    }

    #[test]
    fn rect_touching_anchor_on_either_edge_is_a_candidate() {
        let top_edge = vec![(Section::Skills, Some((150.0, 900.0)))];
        assert_eq!(first_anchored(top_edge), Some(Section::Skills));
        let bottom_edge = vec![(Section::Skills, Some((-600.0, 150.0)))];
        assert_eq!(first_anchored(bottom_edge), Some(Section::Skills));
    }

    #[test]
    fn missing_elements_are_skipped() {
        let rects = vec![
            (Section::Home, None),
            (Section::About, Some((-50.0, 400.0))),
        ];
        assert_eq!(first_anchored(rects), Some(Section::About));
    }

    #[test]
    fn no_candidate_yields_none_so_selection_is_retained() {
        // Between sections during a fast programmatic scroll
        let rects = vec![
            (Section::Home, Some((-900.0, -100.0))),
            (Section::About, Some((400.0, 1300.0))),
            (Section::Projects, None),
        ];
        assert_eq!(first_anchored(rects), None);
    }

    #[test]
    fn scroll_target_sits_below_the_nav_bar() {
        // Projects element 120px below the viewport top, page scrolled 800px
        assert_eq!(scroll_target(120.0, 800.0), 840.0);
        assert_eq!(scroll_target(0.0, 0.0), -HEADER_OFFSET_PX);
    }

    #[test]
    fn menu_toggle_twice_restores_original_state() {
        let owner = Owner::new();
        owner.set();

        let navigator = Navigator::new();
        assert!(!navigator.menu_open().get_untracked());
        navigator.toggle_menu();
        assert!(navigator.menu_open().get_untracked());
        navigator.toggle_menu();
        assert!(!navigator.menu_open().get_untracked());
    }

    #[test]
    fn nav_numbering_follows_display_order() {
        assert_eq!(Section::Home.nav_number(), None);
        assert_eq!(Section::About.nav_number().as_deref(), Some("01"));
        assert_eq!(Section::Projects.nav_number().as_deref(), Some("02"));
        assert_eq!(Section::Skills.nav_number().as_deref(), Some("03"));
        assert_eq!(Section::Contact.nav_number().as_deref(), Some("04"));
    }

    #[test]
    fn section_ids_match_document_order() {
        let ids = Section::IN_DOCUMENT_ORDER.map(Section::id);
        assert_eq!(ids, ["home", "about", "projects", "skills", "contact"]);
    }
}
