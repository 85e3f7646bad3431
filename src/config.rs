//! Application-level configuration constants.

use log::LevelFilter;

// Logging
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

// Picker geometry, must match `.scroll-item` in index.css
pub const SLOT_WIDTH_PX: f64 = 64.0;

// Default values for the setup screen
pub const DEFAULT_ROUNDS: u32 = 3;
pub const DEFAULT_WORK_SECONDS: u32 = 30;
pub const DEFAULT_REST_SECONDS: u32 = 15;

// Min/Max/step for the setup pickers
pub const MIN_ROUNDS: u32 = 1;
pub const MAX_ROUNDS: u32 = 30;
pub const ROUNDS_STEP: u32 = 1;
pub const MIN_WORK_SECONDS: u32 = 5;
pub const MAX_WORK_SECONDS: u32 = 120;
pub const WORK_STEP_SECONDS: u32 = 5;
pub const MIN_REST_SECONDS: u32 = 5;
pub const MAX_REST_SECONDS: u32 = 90;
pub const REST_STEP_SECONDS: u32 = 5;
