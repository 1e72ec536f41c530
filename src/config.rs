use log::Level;

/// Which arrangement of the landing page gets rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageVariant {
    /// Services, reviews, gallery, process, coverage, contact.
    Classic,
    /// Leads with the before/after comparison and moves reviews further down.
    Showcase,
}

#[cfg(feature = "showcase")]
pub fn page_variant() -> PageVariant {
    PageVariant::Showcase
}

#[cfg(not(feature = "showcase"))]
pub fn page_variant() -> PageVariant {
    PageVariant::Classic
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty widget logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Gallery items shown side by side in a carousel viewport.
pub const VISIBLE_ITEMS: usize = 5;

/// Horizontal travel (css px) a gesture needs before it counts as a swipe.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Gap between gallery slides (css px); the track step adds `gap / VISIBLE_ITEMS`.
pub const SLIDE_GAP_PX: f64 = 16.0;

/// Where the before/after split starts, in percent of the container width.
pub const INITIAL_SPLIT: f64 = 50.0;

/// Height of the fixed header; anchors scroll to just below it.
pub const NAV_HEIGHT: f64 = 88.0;

pub const TOAST_DURATION_MS: u32 = 4_000;

/// A section reveals once its top edge passes this fraction of the viewport.
pub const REVEAL_TRIGGER: f64 = 0.8;
