// Pagemotion - Core Library
// Scroll/visibility-driven UI state for the landing page, exposed for the
// demo binary and tests.

pub mod page;       // Element table, section registry, intersection geometry
pub mod timing;     // Debounce, intervals, one-shot delays
pub mod nav;        // Mobile menu open/closed state
pub mod scroll;     // Header mode, active section, smooth scroll
pub mod reveal;     // One-shot fade-ins and the hero entrance
pub mod counter;    // Stats count-up animation
pub mod controller; // Event dispatch over the components
pub mod config;     // Tuning thresholds as data
pub mod validate;   // Pure form-validation helpers (unwired)

// Re-export commonly used types
pub use page::{Element, ElementId, InlineStyle, PageDocument, Rect, SectionInfo, Viewport};
pub use timing::{Debouncer, Delay, Interval};
pub use nav::{NavController, OPEN_CLASS};
pub use scroll::{GlideScroll, HeaderMode, ScrollTracker, ACTIVE_CLASS};
pub use reveal::{HeroSequence, RevealState, Revealer, StaggerQueue};
pub use counter::{parse_counter, CounterAnimator};
pub use controller::{PageController, PageEvent, LOADED_CLASS};
pub use config::Tuning;
pub use validate::validate_email;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
