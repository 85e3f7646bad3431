//! Workout session state machine and its tick scheduler.
//!
//! [`SessionState::tick`] is a pure transition: it takes the current state by
//! value and returns the next one together with the cues it raised.
//! [`SessionController`] owns that state plus the single live tick schedule.

use crate::cue::{Cue, CueSink};
use crate::defaults::{PREP_SECONDS, WARNING_WINDOW_SECONDS};
use crate::schedule::ScheduleSlot;
use crate::ConfigError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Setup,
    Prep,
    Work,
    Rest,
    Complete,
}

impl Phase {
    /// Phases during which the tick schedule runs.
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Prep | Phase::Work | Phase::Rest)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Setup => "SETUP",
            Phase::Prep => "GET READY",
            Phase::Work => "WORK",
            Phase::Rest => "REST",
            Phase::Complete => "DONE",
        }
    }
}

/// Rounds and durations chosen on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutConfig {
    pub rounds: u32,
    pub work_seconds: u32,
    pub rest_seconds: u32,
}

impl WorkoutConfig {
    pub fn new(rounds: u32, work_seconds: u32, rest_seconds: u32) -> Self {
        Self {
            rounds,
            work_seconds,
            rest_seconds,
        }
    }

    /// Check the preconditions `start` enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.work_seconds == 0 {
            return Err(ConfigError::NoWorkTime);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub phase: Phase,
    pub seconds_remaining: u32,
    /// 1-indexed, never above the configured rounds.
    pub current_round: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::setup()
    }
}

impl SessionState {
    pub const fn setup() -> Self {
        Self {
            phase: Phase::Setup,
            seconds_remaining: 0,
            current_round: 1,
        }
    }

    /// State right after a session starts.
    pub const fn prep() -> Self {
        Self {
            phase: Phase::Prep,
            seconds_remaining: PREP_SECONDS,
            current_round: 1,
        }
    }

    /// Advance one tick.
    ///
    /// Remaining time is decremented; a warning cue is raised whenever the new
    /// value is inside the warning window, including the tick that reaches 0.
    /// That same tick then performs the phase transition, so remaining time is
    /// never negative. Inactive phases are returned unchanged.
    pub fn tick(self, config: &WorkoutConfig) -> (SessionState, Vec<Cue>) {
        let mut cues = Vec::new();
        if !self.phase.is_active() {
            return (self, cues);
        }

        let next = match self.seconds_remaining.checked_sub(1) {
            // entered with nothing left
            None => self.advance(config, &mut cues),
            Some(remaining) => {
                if remaining <= WARNING_WINDOW_SECONDS {
                    cues.push(Cue::TickWarning);
                }
                let counted = SessionState {
                    seconds_remaining: remaining,
                    ..self
                };
                if remaining == 0 {
                    counted.advance(config, &mut cues)
                } else {
                    counted
                }
            }
        };
        (next, cues)
    }

    fn advance(self, config: &WorkoutConfig, cues: &mut Vec<Cue>) -> SessionState {
        let next = match self.phase {
            Phase::Prep => Self::work(self.current_round, config),
            Phase::Work if self.current_round < config.rounds => {
                if config.rest_seconds == 0 {
                    Self::work(self.current_round + 1, config)
                } else {
                    SessionState {
                        phase: Phase::Rest,
                        seconds_remaining: config.rest_seconds,
                        current_round: self.current_round,
                    }
                }
            }
            Phase::Rest if self.current_round < config.rounds => {
                Self::work(self.current_round + 1, config)
            }
            Phase::Work | Phase::Rest => SessionState {
                phase: Phase::Complete,
                seconds_remaining: 0,
                current_round: self.current_round,
            },
            Phase::Setup | Phase::Complete => return self,
        };

        cues.push(match next.phase {
            Phase::Work => Cue::RoundAdvance,
            Phase::Rest => Cue::RestBegin,
            _ => Cue::WorkoutComplete,
        });
        debug!(
            "Phase {:?} -> {:?} (round {}/{})",
            self.phase, next.phase, next.current_round, config.rounds
        );
        next
    }

    fn work(round: u32, config: &WorkoutConfig) -> SessionState {
        SessionState {
            phase: Phase::Work,
            seconds_remaining: config.work_seconds,
            current_round: round,
        }
    }
}

/// Read-only view handed to the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub rounds: u32,
    pub paused: bool,
    pub total_seconds: u32,
    pub remaining_total_seconds: u32,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            state: SessionState::setup(),
            rounds: 0,
            paused: false,
            total_seconds: 0,
            remaining_total_seconds: 0,
        }
    }
}

impl SessionSnapshot {
    /// Fraction of the whole workout already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        let elapsed = self.total_seconds.saturating_sub(self.remaining_total_seconds);
        elapsed as f64 / self.total_seconds as f64
    }
}

/// Owns the workout state and the handle `H` of its periodic tick schedule.
///
/// Every exit path (start, pause, reset, completion, drop) cancels the
/// schedule, so a session has exactly one live schedule while it runs and
/// none otherwise.
#[derive(Debug)]
pub struct SessionController<H> {
    config: WorkoutConfig,
    state: SessionState,
    paused: bool,
    schedule: ScheduleSlot<H>,
}

impl<H> Default for SessionController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> SessionController<H> {
    pub fn new() -> Self {
        Self {
            config: WorkoutConfig::new(0, 0, 0),
            state: SessionState::setup(),
            paused: false,
            schedule: ScheduleSlot::new(),
        }
    }

    pub fn config(&self) -> &WorkoutConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a tick schedule is currently installed.
    pub fn is_scheduled(&self) -> bool {
        self.schedule.is_active()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            rounds: self.config.rounds,
            paused: self.paused,
            total_seconds: self.config.total_seconds(),
            remaining_total_seconds: self.config.remaining_total_seconds(&self.state),
        }
    }

    /// Start a new session with `config`.
    ///
    /// An invalid config is refused without touching state or schedule.
    /// Otherwise any previous schedule is cancelled before the state moves to
    /// PREP and `install` creates the new one.
    pub fn start<F>(
        &mut self,
        config: WorkoutConfig,
        cues: &mut impl CueSink,
        install: F,
    ) -> Result<(), ConfigError>
    where
        F: FnOnce() -> H,
    {
        if let Err(e) = config.validate() {
            warn!("Refusing to start workout {:?}: {}", config, e);
            return Err(e);
        }

        self.schedule.cancel();
        self.config = config;
        self.state = SessionState::prep();
        self.paused = false;
        self.schedule.install(install);

        info!(
            "Workout started: {} rounds, {}s work, {}s rest",
            config.rounds, config.work_seconds, config.rest_seconds
        );
        cues.emit(Cue::Start);
        Ok(())
    }

    /// Apply one tick from the schedule.
    ///
    /// Stray ticks (paused, or no active phase) are ignored. Reaching COMPLETE
    /// cancels the schedule.
    pub fn tick(&mut self, cues: &mut impl CueSink) {
        if self.paused || !self.state.phase.is_active() {
            debug!("Ignoring tick in {:?} (paused: {})", self.state.phase, self.paused);
            return;
        }

        let (next, emitted) = self.state.tick(&self.config);
        self.state = next;
        if !next.phase.is_active() {
            self.schedule.cancel();
            info!("Workout complete after {} rounds", next.current_round);
        }
        for cue in emitted {
            cues.emit(cue);
        }
    }

    /// Suspend ticking, keeping phase and remaining time. Returns whether the
    /// session was actually paused.
    pub fn pause(&mut self) -> bool {
        if self.paused || !self.state.phase.is_active() {
            return false;
        }
        self.schedule.cancel();
        self.paused = true;
        debug!("Paused at {:?} {}s", self.state.phase, self.state.seconds_remaining);
        true
    }

    /// Reinstall the tick schedule of a paused session.
    pub fn resume<F>(&mut self, install: F) -> bool
    where
        F: FnOnce() -> H,
    {
        if !self.paused || !self.state.phase.is_active() {
            return false;
        }
        self.paused = false;
        self.schedule.install(install);
        debug!("Resumed at {:?} {}s", self.state.phase, self.state.seconds_remaining);
        true
    }

    /// Cancel the schedule and return to SETUP. Always succeeds.
    pub fn reset(&mut self) {
        self.schedule.cancel();
        self.state = SessionState::setup();
        self.paused = false;
        debug!("Session reset");
    }

    /// Drop the schedule without changing state, for component teardown.
    pub fn cancel_schedule(&mut self) -> bool {
        self.schedule.cancel()
    }
}
