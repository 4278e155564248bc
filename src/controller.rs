// 🎛 Page Controller - Event dispatch over the four components
// Owns the page document and every controller, constructed once at
// startup. Run-to-completion per event; the host only ever feeds
// PageEvents and a monotonic now.

use crate::config::Tuning;
use crate::counter::CounterAnimator;
use crate::nav::NavController;
use crate::page::PageDocument;
use crate::reveal::{HeroSequence, Revealer};
use crate::scroll::{GlideScroll, ScrollTracker};
use crate::ElementId;
use log::debug;
use std::time::{Duration, Instant};

/// Marker class applied to the body once the full-load signal arrives.
pub const LOADED_CLASS: &str = "loaded";

/// Hook invoked when the debounced scroll window goes quiet. Reserved for
/// expensive work; the default is nothing.
pub type IdleHook = Box<dyn FnMut(&PageDocument)>;

// ============================================================================
// EVENTS
// ============================================================================

/// Everything the host page can tell us. Mirrors the browser lifecycle:
/// content-ready and load fire once each, the rest stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// Markup parsed; safe to take element handles and hide animatables.
    ContentReady,
    /// Full load: assets in, entrance styling may rely on final layout.
    Loaded,
    Scroll(f64),
    Resize { width: f64, height: f64 },
    Click(ElementId),
}

// ============================================================================
// CONTROLLER
// ============================================================================

pub struct PageController {
    doc: PageDocument,
    nav: NavController,
    tracker: ScrollTracker,
    revealer: Revealer,
    hero: HeroSequence,
    counters: CounterAnimator,
    glide: Option<GlideScroll>,
    glide_speed: f64,
    idle_hook: Option<IdleHook>,
}

impl PageController {
    pub fn new(doc: PageDocument, tuning: &Tuning) -> Self {
        let hero = HeroSequence::new(
            &doc,
            Duration::from_millis(tuning.hero_base_delay_ms),
            Duration::from_millis(tuning.hero_step_ms),
        );
        PageController {
            doc,
            nav: NavController::new(tuning.breakpoint),
            tracker: ScrollTracker::new(
                tuning.header_threshold,
                tuning.section_bias,
                Duration::from_millis(tuning.debounce_ms),
            ),
            revealer: Revealer::new(tuning.reveal_threshold, tuning.reveal_bottom_margin),
            hero,
            counters: CounterAnimator::new(
                tuning.counter_threshold,
                tuning.counter_steps,
                Duration::from_millis(tuning.counter_period_ms),
            ),
            glide: None,
            glide_speed: tuning.glide_speed,
            idle_hook: None,
        }
    }

    pub fn document(&self) -> &PageDocument {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut PageDocument {
        &mut self.doc
    }

    pub fn menu_is_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn is_scrolling(&self) -> bool {
        self.glide.is_some()
    }

    /// Register the debounced-idle hook. Replaces any previous hook.
    pub fn set_idle_hook(&mut self, hook: IdleHook) {
        self.idle_hook = Some(hook);
    }

    // ------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------

    pub fn handle(&mut self, event: PageEvent, now: Instant) {
        match event {
            PageEvent::ContentReady => self.on_content_ready(now),
            PageEvent::Loaded => self.on_loaded(),
            PageEvent::Scroll(top) => self.on_scroll(top, now),
            PageEvent::Resize { width, height } => self.on_resize(width, height, now),
            PageEvent::Click(target) => self.on_click(target),
        }
    }

    /// Host tick: timers only. Call at roughly the counter period.
    pub fn tick(&mut self, now: Instant) {
        if self.tracker.poll_debounce(now) {
            debug!("scroll idle");
            if let Some(hook) = &mut self.idle_hook {
                hook(&self.doc);
            }
        }

        self.hero.poll(&mut self.doc, now);
        self.counters.tick(&mut self.doc, now);

        if let Some(glide) = &self.glide {
            let next = glide.tick(self.doc.scroll_top);
            let settled = glide.is_settled(next);
            self.doc.scroll_top = next;
            self.scroll_pass(now);
            if settled {
                self.glide = None;
            }
        }
    }

    // ------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------

    fn on_content_ready(&mut self, now: Instant) {
        let cards = self.doc.cards().to_vec();
        self.revealer.observe(&mut self.doc, &cards);
        self.hero.start(&mut self.doc, now);
        // Initial pass so above-the-fold cards reveal without a scroll
        self.scroll_pass(now);
    }

    fn on_loaded(&mut self) {
        let body = self.doc.body();
        self.doc.add_class(body, LOADED_CLASS);
    }

    fn on_scroll(&mut self, top: f64, now: Instant) {
        self.doc.scroll_top = top;
        self.doc.clamp_scroll();
        // A user scroll cancels an in-flight glide
        self.glide = None;
        self.scroll_pass(now);
    }

    fn on_resize(&mut self, width: f64, height: f64, now: Instant) {
        self.doc.viewport.width = width;
        self.doc.viewport.height = height;
        self.nav.on_viewport_widened(&mut self.doc, width);
        self.doc.clamp_scroll();
        self.scroll_pass(now);
    }

    fn on_click(&mut self, target: ElementId) {
        if target == self.doc.menu_toggle() {
            self.nav.toggle(&mut self.doc);
            return;
        }

        if let Some(href) = self.doc.element(target).href.clone() {
            if href.starts_with('#') {
                if let Some(section) = self.doc.find_anchor(&href) {
                    let top = self.doc.element(section).rect.top - self.doc.header_height();
                    debug!("navigate to {href}");
                    self.glide = Some(GlideScroll::new(
                        top.min(self.doc.max_scroll()),
                        self.glide_speed,
                    ));
                    self.nav.close_on_navigate(&mut self.doc);
                }
                // Missing anchor: leave default navigation alone
                return;
            }
        }

        self.nav.close_if_outside(&mut self.doc, target);
    }

    /// The raw-event scroll work shared by scroll, resize, glide and the
    /// initial content-ready pass.
    fn scroll_pass(&mut self, now: Instant) {
        self.tracker.on_scroll(&mut self.doc, now);
        self.revealer.check(&mut self.doc);
        self.counters.check(&mut self.doc, now);
    }
}
