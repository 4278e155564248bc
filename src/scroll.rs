// 🛤 Scroll State Tracker - Header mode and current-section highlighting
// Runs on the raw scroll stream; the debounced hook is reserved for
// expensive work and carries no payload of its own yet.

use crate::page::{PageDocument, SectionInfo};
use crate::timing::Debouncer;
use log::debug;
use std::time::{Duration, Instant};

/// Marker class carried by exactly one navigation link at a time.
pub const ACTIVE_CLASS: &str = "active";

// ============================================================================
// HEADER MODE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// At or near the top of the page.
    Flat,
    /// Scrolled past the threshold: opaque background plus drop shadow.
    Elevated,
}

impl HeaderMode {
    pub fn name(&self) -> &str {
        match self {
            HeaderMode::Flat => "flat",
            HeaderMode::Elevated => "elevated",
        }
    }
}

// ============================================================================
// SCROLL TRACKER
// ============================================================================

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    /// Scroll offset beyond which the header switches to Elevated.
    header_threshold: f64,
    /// Extra slack added below the header when deciding the current
    /// section, so the highlight flips a little before the section top
    /// reaches the header edge.
    section_bias: f64,
    debounce: Debouncer,
    last_mode: HeaderMode,
}

impl ScrollTracker {
    pub fn new(header_threshold: f64, section_bias: f64, debounce_window: Duration) -> Self {
        ScrollTracker {
            header_threshold,
            section_bias,
            debounce: Debouncer::new(debounce_window),
            last_mode: HeaderMode::Flat,
        }
    }

    /// Pure mapping from scroll offset to header mode. The boundary value
    /// itself stays Flat; there is deliberately no hysteresis band.
    pub fn header_mode(&self, scroll_top: f64) -> HeaderMode {
        if scroll_top > self.header_threshold {
            HeaderMode::Elevated
        } else {
            HeaderMode::Flat
        }
    }

    /// The current section is the last one, in document order, whose top
    /// (less header height and bias) is at or above the scroll offset.
    pub fn current_section<'a>(
        &self,
        scroll_top: f64,
        registry: &'a [SectionInfo],
        header_height: f64,
    ) -> Option<&'a SectionInfo> {
        registry
            .iter()
            .filter(|section| scroll_top >= section.top - header_height - self.section_bias)
            .last()
    }

    /// Raw scroll pass: restyle the header and move the active link marker.
    /// Also arms the debounced hook.
    pub fn on_scroll(&mut self, doc: &mut PageDocument, now: Instant) {
        self.apply_header_style(doc);
        self.apply_active_link(doc);
        self.debounce.trigger(now);
    }

    /// Trailing-edge poll for the reserved hook; the caller decides what,
    /// if anything, runs when it fires.
    pub fn poll_debounce(&mut self, now: Instant) -> bool {
        self.debounce.poll(now)
    }

    fn apply_header_style(&mut self, doc: &mut PageDocument) {
        let mode = self.header_mode(doc.scroll_top);
        if mode != self.last_mode {
            debug!("header mode -> {}", mode.name());
            self.last_mode = mode;
        }

        let header = doc.header();
        let style = &mut doc.element_mut(header).style;
        match mode {
            HeaderMode::Elevated => {
                style.background = Some("rgba(255, 255, 255, 0.98)".to_string());
                style.box_shadow = Some("0 2px 20px rgba(0, 0, 0, 0.1)".to_string());
            }
            HeaderMode::Flat => {
                style.background = Some("rgba(255, 255, 255, 0.95)".to_string());
                style.box_shadow = None;
            }
        }
    }

    fn apply_active_link(&self, doc: &mut PageDocument) {
        let registry = doc.section_registry();
        let current = self
            .current_section(doc.scroll_top, &registry, doc.header_height())
            .map(|section| format!("#{}", section.anchor));

        for link in doc.link_items().to_vec() {
            let matches = match (&current, &doc.element(link).href) {
                (Some(anchor), Some(href)) => anchor == href,
                _ => false,
            };
            if matches {
                doc.add_class(link, ACTIVE_CLASS);
            } else {
                doc.remove_class(link, ACTIVE_CLASS);
            }
        }
    }
}

// ============================================================================
// GLIDE SCROLL
// ============================================================================

/// Smooth scroll toward an anchor with exponential ease-out: each tick
/// closes a fixed fraction of the remaining distance, then snaps once the
/// remainder is below half a pixel.
#[derive(Debug, Clone)]
pub struct GlideScroll {
    target: f64,
    /// Fraction of the remaining distance closed per tick. Good range at
    /// a 20ms tick: 0.15-0.35.
    speed: f64,
}

impl GlideScroll {
    pub fn new(target: f64, speed: f64) -> Self {
        GlideScroll {
            target: target.max(0.0),
            speed: speed.clamp(0.05, 0.95),
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance one tick from `current`; returns the next scroll offset.
    pub fn tick(&self, current: f64) -> f64 {
        let next = current + (self.target - current) * self.speed;
        if (self.target - next).abs() < 0.5 {
            self.target
        } else {
            next
        }
    }

    pub fn is_settled(&self, current: f64) -> bool {
        current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Rect, Viewport};

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(100.0, 200.0, Duration::from_millis(16))
    }

    fn page() -> PageDocument {
        let mut doc = PageDocument::new(
            Viewport {
                width: 1280.0,
                height: 800.0,
            },
            80.0,
        );
        doc.add_link("Home", "#home");
        doc.add_link("Features", "#features");
        doc.add_link("Contact", "#contact");
        doc.add_section("home", Rect::new(0.0, 700.0));
        doc.add_section("features", Rect::new(700.0, 900.0));
        doc.add_section("contact", Rect::new(1600.0, 600.0));
        doc.set_document_height(2200.0);
        doc
    }

    fn active_links(doc: &PageDocument) -> Vec<String> {
        doc.link_items()
            .iter()
            .filter(|&&link| doc.has_class(link, ACTIVE_CLASS))
            .map(|&link| doc.element(link).href.clone().unwrap())
            .collect()
    }

    #[test]
    fn test_header_mode_boundary() {
        let tracker = tracker();

        assert_eq!(tracker.header_mode(0.0), HeaderMode::Flat);
        assert_eq!(tracker.header_mode(100.0), HeaderMode::Flat);
        assert_eq!(tracker.header_mode(100.1), HeaderMode::Elevated);
        assert_eq!(tracker.header_mode(5000.0), HeaderMode::Elevated);
    }

    #[test]
    fn test_header_style_applied_on_scroll() {
        let mut doc = page();
        let mut tracker = tracker();
        let t0 = Instant::now();

        doc.scroll_top = 300.0;
        tracker.on_scroll(&mut doc, t0);
        let style = &doc.element(doc.header()).style;
        assert_eq!(style.background.as_deref(), Some("rgba(255, 255, 255, 0.98)"));
        assert!(style.box_shadow.is_some());

        doc.scroll_top = 50.0;
        tracker.on_scroll(&mut doc, t0);
        let style = &doc.element(doc.header()).style;
        assert_eq!(style.background.as_deref(), Some("rgba(255, 255, 255, 0.95)"));
        assert!(style.box_shadow.is_none());
    }

    #[test]
    fn test_current_section_is_last_qualifying() {
        let doc = page();
        let tracker = tracker();
        let registry = doc.section_registry();

        // features top=700, adjusted 700-80-200=420
        let current = tracker.current_section(420.0, &registry, 80.0).unwrap();
        assert_eq!(current.anchor, "features");

        // contact top=1600, adjusted 1320
        let current = tracker.current_section(1319.0, &registry, 80.0).unwrap();
        assert_eq!(current.anchor, "features");
        let current = tracker.current_section(1320.0, &registry, 80.0).unwrap();
        assert_eq!(current.anchor, "contact");
    }

    #[test]
    fn test_no_section_qualifies_clears_highlight() {
        let mut doc = page();
        let mut tracker = tracker();
        let t0 = Instant::now();

        // Make the first section start far below the fold
        doc.element_mut(doc.sections()[0]).rect = Rect::new(2000.0, 700.0);
        doc.element_mut(doc.sections()[1]).rect = Rect::new(2700.0, 900.0);
        doc.element_mut(doc.sections()[2]).rect = Rect::new(3600.0, 600.0);

        doc.scroll_top = 0.0;
        tracker.on_scroll(&mut doc, t0);
        assert!(active_links(&doc).is_empty());
    }

    #[test]
    fn test_exactly_one_active_link() {
        let mut doc = page();
        let mut tracker = tracker();
        let t0 = Instant::now();

        for offset in [0.0, 419.0, 420.0, 1000.0, 1320.0, 2200.0] {
            doc.scroll_top = offset;
            tracker.on_scroll(&mut doc, t0);
            let active = active_links(&doc);
            assert_eq!(active.len(), 1, "offset {offset}");
        }

        doc.scroll_top = 2200.0;
        tracker.on_scroll(&mut doc, t0);
        assert_eq!(active_links(&doc), vec!["#contact".to_string()]);
    }

    #[test]
    fn test_debounce_hook_trailing_edge() {
        let mut doc = page();
        let mut tracker = tracker();
        let t0 = Instant::now();

        for ms in [0u64, 5, 10] {
            doc.scroll_top += 10.0;
            tracker.on_scroll(&mut doc, t0 + Duration::from_millis(ms));
        }
        assert!(!tracker.poll_debounce(t0 + Duration::from_millis(20)));
        assert!(tracker.poll_debounce(t0 + Duration::from_millis(26)));
        assert!(!tracker.poll_debounce(t0 + Duration::from_millis(60)));
    }

    #[test]
    fn test_glide_scroll_settles_on_target() {
        let glide = GlideScroll::new(620.0, 0.3);
        let mut pos = 0.0;
        let mut ticks = 0;

        while !glide.is_settled(pos) {
            pos = glide.tick(pos);
            ticks += 1;
            assert!(ticks < 100, "glide never settled");
        }
        assert_eq!(pos, 620.0);
        // Ease-out: monotonic approach, no overshoot
        assert!(glide.tick(620.0) == 620.0);
    }
}
