use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose watcher/animation logs when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Height of the fixed nav; section scrolls stop this far above the target.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll distance after which the nav gets its solid background.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// How long the simulated contact submission takes.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Share of simulated submissions that fail.
pub const SUBMIT_FAILURE_RATE: f64 = 0.2;

/// Trigger margin for fade-ins: elements start 50px inside the viewport.
pub const FADE_IN_MARGIN_PX: i32 = -50;
