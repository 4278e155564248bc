// 👁 Visibility Revealer - One-shot fade-in for cards and the hero entrance
// Per-element state is monotonic: once Revealed, never back to Pending.
// The style layer owns the actual transition; we only flip the terminal
// opacity/translation values.

use crate::page::PageDocument;
use crate::ElementId;
use crate::timing::Delay;
use log::debug;
use std::time::{Duration, Instant};

const CARD_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
const HERO_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";
const HIDDEN_TRANSLATE: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

fn hide(doc: &mut PageDocument, id: ElementId, transition: &str) {
    let style = &mut doc.element_mut(id).style;
    style.opacity = Some(0.0);
    style.translate_y = Some(HIDDEN_TRANSLATE);
    style.transition = Some(transition.to_string());
}

fn show(doc: &mut PageDocument, id: ElementId) {
    let style = &mut doc.element_mut(id).style;
    style.opacity = Some(1.0);
    style.translate_y = Some(0.0);
}

// ============================================================================
// SCROLL-DRIVEN REVEALER
// ============================================================================

/// Watches a fixed set of elements and flips each to its terminal visual
/// state the first time it crosses the intersection threshold.
#[derive(Debug, Clone)]
pub struct Revealer {
    /// Intersection ratio that must be exceeded to reveal.
    threshold: f64,
    /// Shrinks the trigger zone at the bottom of the viewport.
    bottom_margin: f64,
    tracked: Vec<(ElementId, RevealState)>,
}

impl Revealer {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Revealer {
            threshold,
            bottom_margin,
            tracked: Vec::new(),
        }
    }

    /// Start watching the elements: apply the initial hidden style and
    /// register them as Pending. Call once at content-ready.
    pub fn observe(&mut self, doc: &mut PageDocument, elements: &[ElementId]) {
        for &id in elements {
            hide(doc, id, CARD_TRANSITION);
            self.tracked.push((id, RevealState::Pending));
        }
    }

    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.tracked
            .iter()
            .find(|(tracked, _)| *tracked == id)
            .map(|&(_, state)| state)
    }

    /// Intersection pass: reveal every pending element whose ratio exceeds
    /// the threshold. Transitions are one-way; revealed entries are left in
    /// place but never re-examined.
    pub fn check(&mut self, doc: &mut PageDocument) {
        for (id, state) in &mut self.tracked {
            if *state == RevealState::Pending
                && doc.intersection_ratio(*id, self.bottom_margin) > self.threshold
            {
                debug!("reveal fired: {:?}", *id);
                show(doc, *id);
                *state = RevealState::Revealed;
            }
        }
    }
}

// ============================================================================
// STAGGERED REVEAL
// ============================================================================

/// Time-driven reveal over an element list: element `i` fires at
/// `base + i * step` after the sequence starts. Used for the hero entrance
/// and available as a general utility.
#[derive(Debug, Clone)]
pub struct StaggerQueue {
    steps: Vec<(Delay, ElementId)>,
}

impl StaggerQueue {
    pub fn new(now: Instant, elements: &[ElementId], base: Duration, step: Duration) -> Self {
        let steps = elements
            .iter()
            .enumerate()
            .map(|(i, &id)| (Delay::after(now, base + step * i as u32), id))
            .collect();
        StaggerQueue { steps }
    }

    /// Fire every due step. Returns true once all steps have fired.
    pub fn poll(&mut self, doc: &mut PageDocument, now: Instant) -> bool {
        for (delay, id) in &mut self.steps {
            if delay.poll(now) {
                show(doc, *id);
            }
        }
        self.steps.iter().all(|(delay, _)| delay.is_fired())
    }
}

// ============================================================================
// HERO ENTRANCE
// ============================================================================

/// One-shot entrance for the hero trio, independent of scroll: title,
/// subtitle, actions at fixed staggered delays from load.
#[derive(Debug, Clone)]
pub struct HeroSequence {
    elements: Vec<ElementId>,
    base: Duration,
    step: Duration,
    queue: Option<StaggerQueue>,
}

impl HeroSequence {
    pub fn new(doc: &PageDocument, base: Duration, step: Duration) -> Self {
        // Missing hero elements are skipped, not an error
        let elements = [doc.hero_title(), doc.hero_subtitle(), doc.hero_actions()]
            .into_iter()
            .flatten()
            .collect();
        HeroSequence {
            elements,
            base,
            step,
            queue: None,
        }
    }

    /// Apply initial hidden styles and schedule the staggered reveals.
    pub fn start(&mut self, doc: &mut PageDocument, now: Instant) {
        if self.queue.is_some() {
            return;
        }
        for &id in &self.elements {
            hide(doc, id, HERO_TRANSITION);
        }
        self.queue = Some(StaggerQueue::new(now, &self.elements, self.base, self.step));
    }

    pub fn poll(&mut self, doc: &mut PageDocument, now: Instant) {
        if let Some(queue) = &mut self.queue {
            queue.poll(doc, now);
        }
    }
}
