// 🔢 Counter Animator - Fixed-duration count-up for the stats display
// Armed against the stats container; fires once at half visibility and
// self-disarms. One interval per element, stepped off the host tick.

use crate::page::PageDocument;
use crate::ElementId;
use crate::timing::Interval;
use log::debug;
use std::time::{Duration, Instant};

/// Parse a display string into its numeric target and trailing decoration:
/// digits make the target, everything else makes the suffix.
/// `"250+"` -> `(250, "+")`, `"95%"` -> `(95, "%")`, `"N/A"` -> `(0, "N/A")`.
pub fn parse_counter(text: &str) -> (u64, String) {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let suffix: String = text.chars().filter(|c| !c.is_ascii_digit()).collect();
    (digits.parse().unwrap_or(0), suffix)
}

// ============================================================================
// PER-ELEMENT ANIMATION
// ============================================================================

#[derive(Debug, Clone)]
struct CounterAnimation {
    element: ElementId,
    target: u64,
    suffix: String,
    /// Steps completed so far; the shown value is `target * steps / total`,
    /// computed fresh each step instead of accumulating float error.
    steps: u32,
    interval: Interval,
}

impl CounterAnimation {
    fn current(&self, total_steps: u32) -> f64 {
        let raw = self.target as f64 * self.steps as f64 / total_steps as f64;
        raw.min(self.target as f64)
    }

    fn done(&self, total_steps: u32) -> bool {
        self.current(total_steps) >= self.target as f64
    }
}

// ============================================================================
// ANIMATOR
// ============================================================================

#[derive(Debug, Clone)]
pub struct CounterAnimator {
    /// Intersection ratio of the stats container that triggers the run.
    threshold: f64,
    /// Number of steps to reach the target.
    total_steps: u32,
    period: Duration,
    armed: bool,
    animations: Vec<CounterAnimation>,
}

impl CounterAnimator {
    pub fn new(threshold: f64, total_steps: u32, period: Duration) -> Self {
        CounterAnimator {
            threshold,
            total_steps: total_steps.max(1),
            period,
            armed: true,
            animations: Vec::new(),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_running(&self) -> bool {
        !self.animations.is_empty()
    }

    /// Intersection pass: when the stats container (if any) crosses the
    /// threshold, start one animation per counter element and disarm.
    pub fn check(&mut self, doc: &mut PageDocument, now: Instant) {
        if !self.armed {
            return;
        }
        let Some(stats) = doc.stats() else {
            // No stats section on this page: nothing to ever trigger
            return;
        };
        if doc.intersection_ratio(stats, 0.0) <= self.threshold {
            return;
        }

        self.armed = false;
        for &element in doc.counters().to_vec().iter() {
            let (target, suffix) = parse_counter(&doc.element(element).text);
            debug!("counter started: target {target}");
            doc.element_mut(element).text = format!("0{suffix}");
            self.animations.push(CounterAnimation {
                element,
                target,
                suffix,
                steps: 0,
                interval: Interval::new(now, self.period),
            });
        }
    }

    /// Advance every running animation by the periods elapsed since the
    /// last tick, rendering after each step. A finished counter drops its
    /// interval and never restarts.
    pub fn tick(&mut self, doc: &mut PageDocument, now: Instant) {
        for animation in &mut self.animations {
            let elapsed = animation.interval.poll(now);
            for _ in 0..elapsed {
                animation.steps += 1;
                let shown = animation.current(self.total_steps).floor() as u64;
                doc.element_mut(animation.element).text =
                    format!("{}{}", shown, animation.suffix);
                if animation.done(self.total_steps) {
                    break;
                }
            }
        }
        let total_steps = self.total_steps;
        self.animations.retain(|animation| !animation.done(total_steps));
    }
}
