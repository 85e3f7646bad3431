//! Pure Yew view components for the workout timer.
//!
//! These render from props only; the session hook and the pickers own all
//! state and timers.

use workout_timer::{format_clock, Phase, PlanSegment, SessionSnapshot, WorkoutConfig};
use yew::prelude::*;

/// CSS modifier for a phase, shared by the timeline and the session view.
fn phase_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Setup => "phase-setup",
        Phase::Prep => "phase-prep",
        Phase::Work => "phase-work",
        Phase::Rest => "phase-rest",
        Phase::Complete => "phase-complete",
    }
}

/// Renders the planned segments of a workout as a proportional bar.
fn render_timeline(plan: &[PlanSegment]) -> Html {
    html! {
        <div class="plan-timeline">
            { plan.iter().map(|segment| {
                html! {
                    <div
                        class={classes!("plan-segment", phase_class(segment.phase))}
                        style={format!("flex-grow: {}", segment.seconds)}
                        title={format!("{} {} ({}s)",
                                       segment.phase.label(), segment.round, segment.seconds)}
                    />
                }
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SetupSummaryProps {
    pub config: WorkoutConfig,
    pub error: Option<AttrValue>,
    pub onstart: Callback<()>,
}

/// Total duration, plan timeline and the Start button.
///
/// The button stays disabled while the configuration would be refused.
#[function_component(SetupSummary)]
pub fn setup_summary(props: &SetupSummaryProps) -> Html {
    let valid = props.config.validate().is_ok();
    let onclick = {
        let onstart = props.onstart.clone();
        Callback::from(move |_: MouseEvent| onstart.emit(()))
    };

    html! {
        <div class="setup-summary">
            <div class="total-time">
                { format!("Total: {}", format_clock(props.config.total_seconds())) }
            </div>
            { render_timeline(&props.config.plan()) }
            <button class="start-button" disabled={!valid} {onclick}>{ "Start" }</button>
            if let Some(err) = &props.error {
                <div class="current-error">{ err.clone() }</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionViewProps {
    pub snapshot: SessionSnapshot,
    pub onpause: Callback<()>,
    pub onresume: Callback<()>,
    pub onreset: Callback<()>,
}

/// Countdown, round counter and controls for a running session.
#[function_component(SessionView)]
pub fn session_view(props: &SessionViewProps) -> Html {
    let snapshot = props.snapshot;
    let state = snapshot.state;
    let complete = state.phase == Phase::Complete;

    let toggle = if snapshot.paused {
        let onresume = props.onresume.clone();
        html! {
            <button class="resume-button" onclick={Callback::from(move |_: MouseEvent| onresume.emit(()))}>
                { "Resume" }
            </button>
        }
    } else {
        let onpause = props.onpause.clone();
        html! {
            <button class="pause-button" disabled={complete}
                    onclick={Callback::from(move |_: MouseEvent| onpause.emit(()))}>
                { "Pause" }
            </button>
        }
    };
    let onreset = {
        let onreset = props.onreset.clone();
        Callback::from(move |_: MouseEvent| onreset.emit(()))
    };

    html! {
        <div class={classes!("session-view", phase_class(state.phase))}>
            <div class="phase-label">{ state.phase.label() }</div>
            if !complete {
                <div class="countdown">{ format_clock(state.seconds_remaining) }</div>
            }
            <div class="round-counter">
                { format!("Round {} / {}", state.current_round, snapshot.rounds) }
            </div>
            <progress class="session-progress" max="1" value={snapshot.progress().to_string()} />
            <div class="time-left">
                { format!("{} left", format_clock(snapshot.remaining_total_seconds)) }
            </div>
            <div class="session-controls">
                if !complete { { toggle } }
                <button class="reset-button" onclick={onreset}>
                    { if complete { "New Workout" } else { "Reset" } }
                </button>
            </div>
        </div>
    }
}
