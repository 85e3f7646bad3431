use std::fmt;
use wasm_bindgen::prelude::*;

pub mod cue;
pub mod picker;
pub mod plan;
pub mod schedule;
pub mod session;

pub use cue::{Cue, CueSink};
pub use picker::{allowed_values, PickerMode, PickerModel, PickerUpdate};
pub use plan::PlanSegment;
pub use schedule::ScheduleSlot;
pub use session::{Phase, SessionController, SessionSnapshot, SessionState, WorkoutConfig};

/// Timing constants shared by the session controller and the picker.
pub mod defaults {
    /// Countdown before the first work phase, in ticks.
    pub const PREP_SECONDS: u32 = 5;
    /// Remaining values (after the decrement) that trigger a warning cue.
    pub const WARNING_WINDOW_SECONDS: u32 = 3;
    /// Cadence of the session tick.
    pub const TICK_INTERVAL_MS: u32 = 1_000;
    /// Quiet period after the last scroll event before the picker settles.
    pub const SETTLE_DEBOUNCE_MS: u32 = 150;
    /// Offsets closer than this to a slot centre are not animated.
    pub const SNAP_TOLERANCE_PX: f64 = 0.5;
}

/// Reasons a workout configuration is refused by `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NoRounds,
    NoWorkTime,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoRounds => write!(f, "A workout needs at least one round"),
            ConfigError::NoWorkTime => write!(f, "Work time must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Format whole seconds as `m:ss` for the countdown display.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// JavaScript entry point listing the timed segments of a workout.
///
/// Returns an array of `{ phase, round, seconds }` objects, or an error
/// string when the configuration would be refused by the controller.
#[wasm_bindgen(js_name = workoutPlan)]
pub fn workout_plan(rounds: u32, work_seconds: u32, rest_seconds: u32) -> JsValue {
    let config = WorkoutConfig::new(rounds, work_seconds, rest_seconds);
    if let Err(e) = config.validate() {
        return serde_wasm_bindgen::to_value(&format!("Invalid workout: {}", e))
            .unwrap_or(JsValue::NULL);
    }
    serde_wasm_bindgen::to_value(&config.plan()).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(75), "1:15");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn config_error_messages() {
        assert_eq!(
            ConfigError::NoRounds.to_string(),
            "A workout needs at least one round"
        );
        assert_eq!(
            ConfigError::NoWorkTime.to_string(),
            "Work time must be greater than zero"
        );
    }
}
