// 📄 Page Document - In-memory stand-in for the markup collaborator
// Elements carry marker classes and a handful of inline style properties;
// controllers only ever write those, never structure.

use std::collections::BTreeSet;

// ============================================================================
// GEOMETRY
// ============================================================================

/// Vertical extent of an element within the document, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Rect { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Visible window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

// ============================================================================
// ELEMENTS
// ============================================================================

/// Handle into the page's element table. Cheap to copy, stable for the
/// lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// The subset of inline style the controllers write. Everything visual
/// beyond these properties belongs to the external style layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub opacity: Option<f64>,
    pub translate_y: Option<f64>,
    pub transition: Option<String>,
    pub background: Option<String>,
    pub box_shadow: Option<String>,
    /// Body-only scroll lock while the mobile menu is open.
    pub overflow_hidden: bool,
}

#[derive(Debug, Clone)]
pub struct Element {
    /// Markup identifier, the target of `#anchor` links (sections only).
    pub anchor: Option<String>,
    /// Link destination for anchor elements (`#features` etc).
    pub href: Option<String>,
    pub text: String,
    pub rect: Rect,
    pub classes: BTreeSet<String>,
    pub style: InlineStyle,
    parent: Option<ElementId>,
}

impl Element {
    fn new(rect: Rect, parent: Option<ElementId>) -> Self {
        Element {
            anchor: None,
            href: None,
            text: String::new(),
            rect,
            classes: BTreeSet::new(),
            style: InlineStyle::default(),
            parent,
        }
    }
}

// ============================================================================
// SECTION REGISTRY
// ============================================================================

/// One entry of the derived section registry, in document order.
#[derive(Debug, Clone)]
pub struct SectionInfo {
    pub element: ElementId,
    pub anchor: String,
    pub top: f64,
    pub height: f64,
}

// ============================================================================
// PAGE DOCUMENT
// ============================================================================

/// The whole page as the controllers see it: a flat element table plus the
/// role handles captured once at startup. The trigger, links container and
/// header are required (the page template always has them); everything else
/// is optional and silently skipped when absent.
#[derive(Debug, Clone)]
pub struct PageDocument {
    pub viewport: Viewport,
    pub scroll_top: f64,
    elements: Vec<Element>,
    body: ElementId,
    header: ElementId,
    nav: ElementId,
    menu_toggle: ElementId,
    nav_links: ElementId,
    link_items: Vec<ElementId>,
    sections: Vec<ElementId>,
    cards: Vec<ElementId>,
    stats: Option<ElementId>,
    counters: Vec<ElementId>,
    hero_title: Option<ElementId>,
    hero_subtitle: Option<ElementId>,
    hero_actions: Option<ElementId>,
}

impl PageDocument {
    /// Create a page with the required chrome: body, header, and the nav
    /// container holding the menu trigger and the links container.
    pub fn new(viewport: Viewport, header_height: f64) -> Self {
        let mut elements = Vec::new();
        let mut push = |el: Element| {
            elements.push(el);
            ElementId(elements.len() - 1)
        };

        let body = push(Element::new(Rect::new(0.0, viewport.height), None));
        let header = push(Element::new(Rect::new(0.0, header_height), Some(body)));
        let nav = push(Element::new(Rect::new(0.0, header_height), Some(header)));
        let menu_toggle = push(Element::new(Rect::new(0.0, header_height), Some(nav)));
        let nav_links = push(Element::new(Rect::new(0.0, header_height), Some(nav)));

        PageDocument {
            viewport,
            scroll_top: 0.0,
            elements,
            body,
            header,
            nav,
            menu_toggle,
            nav_links,
            link_items: Vec::new(),
            sections: Vec::new(),
            cards: Vec::new(),
            stats: None,
            counters: Vec::new(),
            hero_title: None,
            hero_subtitle: None,
            hero_actions: None,
        }
    }

    fn push(&mut self, el: Element) -> ElementId {
        self.elements.push(el);
        ElementId(self.elements.len() - 1)
    }

    // ------------------------------------------------------------------
    // Construction of page content
    // ------------------------------------------------------------------

    /// Add a navigation link inside the links container.
    pub fn add_link(&mut self, label: &str, href: &str) -> ElementId {
        let mut el = Element::new(Rect::new(0.0, 0.0), Some(self.nav_links));
        el.text = label.to_string();
        el.href = Some(href.to_string());
        let id = self.push(el);
        self.link_items.push(id);
        id
    }

    /// Add a section carrying a markup identifier. Sections must be added
    /// in document order; the registry preserves insertion order.
    pub fn add_section(&mut self, anchor: &str, rect: Rect) -> ElementId {
        let mut el = Element::new(rect, Some(self.body));
        el.anchor = Some(anchor.to_string());
        let id = self.push(el);
        self.sections.push(id);
        id
    }

    /// Add an animatable card inside a section.
    pub fn add_card(&mut self, section: ElementId, text: &str, rect: Rect) -> ElementId {
        let mut el = Element::new(rect, Some(section));
        el.text = text.to_string();
        let id = self.push(el);
        self.cards.push(id);
        id
    }

    /// Register the stats container (at most one).
    pub fn add_stats(&mut self, section: ElementId, rect: Rect) -> ElementId {
        let el = Element::new(rect, Some(section));
        let id = self.push(el);
        self.stats = Some(id);
        id
    }

    /// Add a numeric display element inside the stats container.
    pub fn add_counter(&mut self, stats: ElementId, text: &str) -> ElementId {
        let rect = self.elements[stats.0].rect;
        let mut el = Element::new(rect, Some(stats));
        el.text = text.to_string();
        let id = self.push(el);
        self.counters.push(id);
        id
    }

    /// Register the three hero sub-elements inside a section.
    pub fn add_hero(
        &mut self,
        section: ElementId,
        title: &str,
        subtitle: &str,
        actions: &str,
    ) -> (ElementId, ElementId, ElementId) {
        let rect = self.elements[section.0].rect;
        let mut t = Element::new(rect, Some(section));
        t.text = title.to_string();
        let title_id = self.push(t);
        let mut s = Element::new(rect, Some(section));
        s.text = subtitle.to_string();
        let subtitle_id = self.push(s);
        let mut a = Element::new(rect, Some(section));
        a.text = actions.to_string();
        let actions_id = self.push(a);

        self.hero_title = Some(title_id);
        self.hero_subtitle = Some(subtitle_id);
        self.hero_actions = Some(actions_id);
        (title_id, subtitle_id, actions_id)
    }

    /// Total document height (the body rect is kept in sync by the host).
    pub fn set_document_height(&mut self, height: f64) {
        self.elements[self.body.0].rect.height = height;
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.insert(class.to_string());
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        self.elements[id.0].classes.remove(class);
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements[id.0].classes.contains(class)
    }

    /// Walk the parent chain, `closest()`-style containment.
    pub fn is_within(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.elements[c.0].parent;
        }
        false
    }

    // ------------------------------------------------------------------
    // Role handles
    // ------------------------------------------------------------------

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn header(&self) -> ElementId {
        self.header
    }

    pub fn nav(&self) -> ElementId {
        self.nav
    }

    pub fn menu_toggle(&self) -> ElementId {
        self.menu_toggle
    }

    pub fn nav_links(&self) -> ElementId {
        self.nav_links
    }

    pub fn link_items(&self) -> &[ElementId] {
        &self.link_items
    }

    pub fn sections(&self) -> &[ElementId] {
        &self.sections
    }

    pub fn cards(&self) -> &[ElementId] {
        &self.cards
    }

    pub fn stats(&self) -> Option<ElementId> {
        self.stats
    }

    pub fn counters(&self) -> &[ElementId] {
        &self.counters
    }

    pub fn hero_title(&self) -> Option<ElementId> {
        self.hero_title
    }

    pub fn hero_subtitle(&self) -> Option<ElementId> {
        self.hero_subtitle
    }

    pub fn hero_actions(&self) -> Option<ElementId> {
        self.hero_actions
    }

    pub fn header_height(&self) -> f64 {
        self.elements[self.header.0].rect.height
    }

    // ------------------------------------------------------------------
    // Derived geometry
    // ------------------------------------------------------------------

    /// Rebuild the section registry from current element rects. Recomputed
    /// on demand; section boundaries can shift between events.
    pub fn section_registry(&self) -> Vec<SectionInfo> {
        self.sections
            .iter()
            .filter_map(|&id| {
                let el = &self.elements[id.0];
                el.anchor.as_ref().map(|anchor| SectionInfo {
                    element: id,
                    anchor: anchor.clone(),
                    top: el.rect.top,
                    height: el.rect.height,
                })
            })
            .collect()
    }

    /// Find the section targeted by an `#anchor` href, if it exists.
    pub fn find_anchor(&self, href: &str) -> Option<ElementId> {
        let name = href.strip_prefix('#')?;
        self.sections.iter().copied().find(|&id| {
            self.elements[id.0].anchor.as_deref() == Some(name)
        })
    }

    pub fn document_height(&self) -> f64 {
        self.elements[self.body.0].rect.height
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Keep the scroll offset inside the document after layout changes.
    pub fn clamp_scroll(&mut self) {
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll());
    }

    /// Fraction of the element's rect inside the viewport, with the trigger
    /// zone shrunk by `bottom_margin` pixels at the bottom edge.
    pub fn intersection_ratio(&self, id: ElementId, bottom_margin: f64) -> f64 {
        let rect = self.elements[id.0].rect;
        if rect.height <= 0.0 {
            return 0.0;
        }
        let window_top = self.scroll_top;
        let window_bottom = self.scroll_top + self.viewport.height - bottom_margin;
        let overlap = rect.bottom().min(window_bottom) - rect.top.max(window_top);
        (overlap / rect.height).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageDocument {
        let mut doc = PageDocument::new(
            Viewport {
                width: 1280.0,
                height: 800.0,
            },
            80.0,
        );
        doc.add_section("home", Rect::new(0.0, 600.0));
        doc.add_section("features", Rect::new(600.0, 900.0));
        doc.add_section("contact", Rect::new(1500.0, 500.0));
        doc.set_document_height(2000.0);
        doc
    }

    #[test]
    fn test_section_registry_preserves_document_order() {
        let doc = page();
        let registry = doc.section_registry();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry[0].anchor, "home");
        assert_eq!(registry[1].anchor, "features");
        assert_eq!(registry[2].anchor, "contact");
        assert!(registry[0].top < registry[1].top);
    }

    #[test]
    fn test_find_anchor() {
        let doc = page();

        assert!(doc.find_anchor("#features").is_some());
        assert!(doc.find_anchor("#missing").is_none());
        assert!(doc.find_anchor("features").is_none());
    }

    #[test]
    fn test_is_within_walks_parent_chain() {
        let doc = page();

        assert!(doc.is_within(doc.menu_toggle(), doc.nav()));
        assert!(doc.is_within(doc.nav_links(), doc.body()));
        assert!(!doc.is_within(doc.header(), doc.nav()));
    }

    #[test]
    fn test_intersection_ratio_full_and_none() {
        let mut doc = page();
        let card = doc.add_card(doc.sections()[0], "card", Rect::new(100.0, 200.0));

        // Fully inside the viewport at scroll 0
        assert_eq!(doc.intersection_ratio(card, 0.0), 1.0);

        // Scrolled far past it
        doc.scroll_top = 1200.0;
        assert_eq!(doc.intersection_ratio(card, 0.0), 0.0);
    }

    #[test]
    fn test_intersection_ratio_respects_bottom_margin() {
        let mut doc = page();
        // Sits right at the bottom edge of an 800px viewport
        let card = doc.add_card(doc.sections()[1], "card", Rect::new(760.0, 100.0));

        // 40 of 100 px visible without margin
        assert!((doc.intersection_ratio(card, 0.0) - 0.4).abs() < 1e-9);
        // The 50px margin pulls the trigger edge above the card's top
        assert!(doc.intersection_ratio(card, 50.0) < 0.4);
        doc.scroll_top = 120.0;
        assert_eq!(doc.intersection_ratio(card, 50.0), 1.0);
    }

    #[test]
    fn test_clamp_scroll() {
        let mut doc = page();
        doc.scroll_top = 5000.0;
        doc.clamp_scroll();
        assert_eq!(doc.scroll_top, 1200.0); // 2000 - 800

        doc.scroll_top = -10.0;
        doc.clamp_scroll();
        assert_eq!(doc.scroll_top, 0.0);
    }
}
