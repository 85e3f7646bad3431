//! Cue events raised by the session controller.
//!
//! The controller only decides *which* cue fires at *which* moment; playing it
//! is left to whatever implements [`CueSink`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cue {
    /// Session started, prep countdown begins.
    Start,
    /// One of the last ticks of a phase.
    TickWarning,
    /// A work phase begins (after prep or after a rest).
    RoundAdvance,
    RestBegin,
    WorkoutComplete,
}

impl Cue {
    /// Stable identifier handed to the audio layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Start => "start",
            Cue::TickWarning => "tick-warning",
            Cue::RoundAdvance => "round-advance",
            Cue::RestBegin => "rest-begin",
            Cue::WorkoutComplete => "workout-complete",
        }
    }
}

/// Receiver for cues emitted by the controller.
pub trait CueSink {
    fn emit(&mut self, cue: Cue);
}

impl<F: FnMut(Cue)> CueSink for F {
    fn emit(&mut self, cue: Cue) {
        self(cue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_collect_cues() {
        let mut seen = Vec::new();
        let mut sink = |cue: Cue| seen.push(cue.as_str());
        sink.emit(Cue::Start);
        sink.emit(Cue::WorkoutComplete);
        assert_eq!(seen, vec!["start", "workout-complete"]);
    }

    #[test]
    fn cue_names_match_serialized_kind() {
        let json = serde_json::to_string(&Cue::TickWarning).unwrap();
        assert_eq!(json, "\"TICK_WARNING\"");
    }
}
