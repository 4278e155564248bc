// ⚙️ Tuning - Thresholds as data
// Every magic number the controllers use lives here, loadable from a JSON
// file so a page can retune without a rebuild. Defaults match the shipped
// landing page.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Viewport width (logical px) above which the mobile menu is dismissed.
    pub breakpoint: f64,

    /// Scroll offset beyond which the header switches to the elevated style.
    pub header_threshold: f64,

    /// Slack below the header edge when picking the current section.
    pub section_bias: f64,

    /// Intersection ratio that reveals a card.
    pub reveal_threshold: f64,

    /// Trigger-zone shrink at the bottom of the viewport, in px.
    pub reveal_bottom_margin: f64,

    /// Intersection ratio of the stats container that starts the counters.
    pub counter_threshold: f64,

    /// Steps a counter takes to reach its target.
    pub counter_steps: u32,

    /// Period of one counter step, in ms.
    pub counter_period_ms: u64,

    /// Quiet window of the debounced scroll hook, in ms (~one 60fps frame).
    pub debounce_ms: u64,

    /// Delay before the hero title appears, in ms.
    pub hero_base_delay_ms: u64,

    /// Extra delay per hero element after the first, in ms.
    pub hero_step_ms: u64,

    /// Fraction of the remaining distance the smooth scroll closes per tick.
    pub glide_speed: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            breakpoint: 768.0,
            header_threshold: 100.0,
            section_bias: 200.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50.0,
            counter_threshold: 0.5,
            counter_steps: 100,
            counter_period_ms: 20,
            debounce_ms: 16,
            hero_base_delay_ms: 300,
            hero_step_ms: 200,
            glide_speed: 0.3,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file; absent keys keep defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tuning file: {}", path.display()))?;
        let tuning: Tuning = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse tuning file: {}", path.display()))?;
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_page() {
        let tuning = Tuning::default();

        assert_eq!(tuning.breakpoint, 768.0);
        assert_eq!(tuning.header_threshold, 100.0);
        assert_eq!(tuning.section_bias, 200.0);
        assert_eq!(tuning.counter_steps, 100);
        assert_eq!(tuning.counter_period_ms, 20);
        assert_eq!(tuning.debounce_ms, 16);
    }

    #[test]
    fn test_partial_overrides_keep_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{"breakpoint": 1024.0, "counter_steps": 50}"#).unwrap();

        assert_eq!(tuning.breakpoint, 1024.0);
        assert_eq!(tuning.counter_steps, 50);
        assert_eq!(tuning.header_threshold, 100.0);
        assert_eq!(tuning.hero_base_delay_ms, 300);
    }

    #[test]
    fn test_roundtrip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.glide_speed, tuning.glide_speed);
    }
}
