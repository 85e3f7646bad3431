//! Whole-workout arithmetic: the ordered list of timed segments and the time
//! left until the end of a session.

use crate::defaults::PREP_SECONDS;
use crate::session::{Phase, SessionState, WorkoutConfig};
use serde::{Deserialize, Serialize};

/// One timed phase of a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSegment {
    pub phase: Phase,
    pub round: u32,
    pub seconds: u32,
}

impl WorkoutConfig {
    /// Number of ticks from start to COMPLETE.
    pub fn total_seconds(&self) -> u32 {
        PREP_SECONDS
            .saturating_add(self.rounds.saturating_mul(self.work_seconds))
            .saturating_add(self.rounds.saturating_sub(1).saturating_mul(self.rest_seconds))
    }

    /// Timed segments in the order the controller runs them. Rests of zero
    /// length are skipped, as the controller skips them.
    pub fn plan(&self) -> Vec<PlanSegment> {
        let mut segments = vec![PlanSegment {
            phase: Phase::Prep,
            round: 1,
            seconds: PREP_SECONDS,
        }];
        for round in 1..=self.rounds {
            segments.push(PlanSegment {
                phase: Phase::Work,
                round,
                seconds: self.work_seconds,
            });
            if round < self.rounds && self.rest_seconds > 0 {
                segments.push(PlanSegment {
                    phase: Phase::Rest,
                    round,
                    seconds: self.rest_seconds,
                });
            }
        }
        segments
    }

    /// Ticks left until COMPLETE from `state`.
    pub fn remaining_total_seconds(&self, state: &SessionState) -> u32 {
        let later_rounds = self.rounds.saturating_sub(state.current_round);
        let work = self.work_seconds;
        let rest = self.rest_seconds;
        let after_current = match state.phase {
            Phase::Setup => return self.total_seconds(),
            Phase::Complete => return 0,
            Phase::Prep => self
                .rounds
                .saturating_mul(work)
                .saturating_add(self.rounds.saturating_sub(1).saturating_mul(rest)),
            Phase::Work => later_rounds.saturating_mul(work.saturating_add(rest)),
            Phase::Rest => later_rounds
                .saturating_mul(work)
                .saturating_add(later_rounds.saturating_sub(1).saturating_mul(rest)),
        };
        state.seconds_remaining.saturating_add(after_current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_lists_segments_in_order() {
        let config = WorkoutConfig::new(2, 30, 15);
        let plan = config.plan();
        let shape: Vec<(Phase, u32, u32)> =
            plan.iter().map(|s| (s.phase, s.round, s.seconds)).collect();
        assert_eq!(
            shape,
            vec![
                (Phase::Prep, 1, PREP_SECONDS),
                (Phase::Work, 1, 30),
                (Phase::Rest, 1, 15),
                (Phase::Work, 2, 30),
            ]
        );
        let sum: u32 = plan.iter().map(|s| s.seconds).sum();
        assert_eq!(sum, config.total_seconds());
    }

    #[test]
    fn remaining_total_counts_down_one_per_tick() {
        let config = WorkoutConfig::new(3, 4, 2);
        let mut state = SessionState::prep();
        let mut left = config.remaining_total_seconds(&state);
        assert_eq!(left, config.total_seconds());

        while state.phase.is_active() {
            state = state.tick(&config).0;
            let now = config.remaining_total_seconds(&state);
            assert_eq!(now, left - 1);
            left = now;
        }
        assert_eq!(left, 0);
    }

    #[test]
    fn setup_reports_full_duration() {
        let config = WorkoutConfig::new(3, 30, 15);
        assert_eq!(
            config.remaining_total_seconds(&SessionState::setup()),
            PREP_SECONDS + 90 + 30
        );
    }

    #[test]
    fn degenerate_config_does_not_overflow() {
        let config = WorkoutConfig::new(0, 0, 0);
        assert_eq!(config.total_seconds(), PREP_SECONDS);
        let huge = WorkoutConfig::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(huge.total_seconds(), u32::MAX);
    }

    #[test]
    fn plan_serializes_with_js_field_names() {
        let json = serde_json::to_value(WorkoutConfig::new(1, 20, 10).plan()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "phase": "PREP", "round": 1, "seconds": PREP_SECONDS },
                { "phase": "WORK", "round": 1, "seconds": 20 },
            ])
        );
    }
}
