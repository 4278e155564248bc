// 🧭 Navigation Controller - Mobile menu open/closed state
// Owns the single `is_open` flag; every operation is idempotent when the
// menu is already in the target state.

use crate::page::PageDocument;
use crate::ElementId;
use log::debug;

/// Marker class applied to the links container and the trigger while open.
pub const OPEN_CLASS: &str = "open";

#[derive(Debug, Clone)]
pub struct NavController {
    is_open: bool,
    /// Viewport width above which the mobile menu layout no longer applies.
    breakpoint: f64,
}

impl NavController {
    pub fn new(breakpoint: f64) -> Self {
        NavController {
            is_open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Flip the menu, mirroring the state onto the trigger and the links
    /// container, and lock page scroll while the overlay is up.
    pub fn toggle(&mut self, doc: &mut PageDocument) {
        let open = !self.is_open;
        self.set_open(doc, open);
    }

    /// A click landed somewhere on the page: close unless it was inside
    /// the navigation container.
    pub fn close_if_outside(&mut self, doc: &mut PageDocument, target: ElementId) {
        if self.is_open && !doc.is_within(target, doc.nav()) {
            self.set_open(doc, false);
        }
    }

    /// Following an in-page link always dismisses the menu.
    pub fn close_on_navigate(&mut self, doc: &mut PageDocument) {
        self.set_open(doc, false);
    }

    /// The layout no longer needs the mobile menu above the breakpoint.
    pub fn on_viewport_widened(&mut self, doc: &mut PageDocument, width: f64) {
        if width > self.breakpoint && self.is_open {
            self.set_open(doc, false);
        }
    }

    fn set_open(&mut self, doc: &mut PageDocument, open: bool) {
        if self.is_open != open {
            debug!("menu {}", if open { "opened" } else { "closed" });
        }
        self.is_open = open;

        let links = doc.nav_links();
        let toggle = doc.menu_toggle();
        let body = doc.body();
        if open {
            doc.add_class(links, OPEN_CLASS);
            doc.add_class(toggle, OPEN_CLASS);
        } else {
            doc.remove_class(links, OPEN_CLASS);
            doc.remove_class(toggle, OPEN_CLASS);
        }
        doc.element_mut(body).style.overflow_hidden = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Rect, Viewport};

    fn page() -> PageDocument {
        let mut doc = PageDocument::new(
            Viewport {
                width: 375.0,
                height: 700.0,
            },
            60.0,
        );
        doc.add_section("home", Rect::new(0.0, 700.0));
        doc.set_document_height(1400.0);
        doc
    }

    #[test]
    fn test_toggle_is_a_pure_flip() {
        let mut doc = page();
        let mut nav = NavController::new(768.0);

        nav.toggle(&mut doc);
        assert!(nav.is_open());
        assert!(doc.has_class(doc.nav_links(), OPEN_CLASS));
        assert!(doc.has_class(doc.menu_toggle(), OPEN_CLASS));
        assert!(doc.element(doc.body()).style.overflow_hidden);

        nav.toggle(&mut doc);
        assert!(!nav.is_open());
        assert!(!doc.has_class(doc.nav_links(), OPEN_CLASS));
        assert!(!doc.has_class(doc.menu_toggle(), OPEN_CLASS));
        assert!(!doc.element(doc.body()).style.overflow_hidden);
    }

    #[test]
    fn test_outside_click_closes_inside_click_keeps() {
        let mut doc = page();
        let section = doc.sections()[0];
        let card = doc.add_card(section, "card", Rect::new(100.0, 100.0));
        let mut nav = NavController::new(768.0);

        nav.toggle(&mut doc);
        // Click on the trigger itself is inside the nav container
        let toggle = doc.menu_toggle();
        nav.close_if_outside(&mut doc, toggle);
        assert!(nav.is_open());

        nav.close_if_outside(&mut doc, card);
        assert!(!nav.is_open());
        assert!(!doc.element(doc.body()).style.overflow_hidden);
    }

    #[test]
    fn test_outside_click_noop_when_closed() {
        let mut doc = page();
        let section = doc.sections()[0];
        let card = doc.add_card(section, "card", Rect::new(100.0, 100.0));
        let mut nav = NavController::new(768.0);

        nav.close_if_outside(&mut doc, card);
        assert!(!nav.is_open());
        assert!(!doc.has_class(doc.nav_links(), OPEN_CLASS));
    }

    #[test]
    fn test_navigate_always_closes() {
        let mut doc = page();
        let mut nav = NavController::new(768.0);

        nav.close_on_navigate(&mut doc);
        assert!(!nav.is_open());

        nav.toggle(&mut doc);
        nav.close_on_navigate(&mut doc);
        assert!(!nav.is_open());
    }

    #[test]
    fn test_widened_viewport_dismisses_menu() {
        let mut doc = page();
        let mut nav = NavController::new(768.0);

        nav.toggle(&mut doc);
        // Still mobile width: nothing happens
        nav.on_viewport_widened(&mut doc, 700.0);
        assert!(nav.is_open());
        // Boundary itself does not dismiss
        nav.on_viewport_widened(&mut doc, 768.0);
        assert!(nav.is_open());

        nav.on_viewport_widened(&mut doc, 1024.0);
        assert!(!nav.is_open());
        assert!(!doc.element(doc.body()).style.overflow_hidden);
    }
}
