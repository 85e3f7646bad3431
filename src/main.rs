//! Main module for the workout timer application using Yew.
//! Wires the setup pickers, the session hook and the countdown view.

use workout_timer::{Phase, WorkoutConfig};
use yew::prelude::*;

mod audio;
mod components;
mod config;
mod hooks;
mod logging;
mod scroll_picker;

use audio::play_cue;
use components::{SessionView, SetupSummary};
use config::*;
use hooks::use_session;
use scroll_picker::ScrollPicker;

/// Setter callback for a picker-driven `u32` state.
fn setter(state: &UseStateHandle<u32>) -> Callback<u32> {
    let state = state.clone();
    Callback::from(move |value: u32| state.set(value))
}

/// Primary application component: setup screen until a session starts, then
/// the session view until it is reset.
#[function_component]
pub fn App() -> Html {
    let rounds = use_state(|| DEFAULT_ROUNDS);
    let work_seconds = use_state(|| DEFAULT_WORK_SECONDS);
    let rest_seconds = use_state(|| DEFAULT_REST_SECONDS);
    let session = use_session(Callback::from(play_cue));

    let config = WorkoutConfig::new(*rounds, *work_seconds, *rest_seconds);
    let onstart = {
        let on_start = session.on_start.clone();
        Callback::from(move |_: ()| on_start.emit(config))
    };

    if session.snapshot.state.phase != Phase::Setup {
        return html! {
            <div class="app-container">
                <SessionView
                    snapshot={session.snapshot}
                    onpause={session.on_pause.clone()}
                    onresume={session.on_resume.clone()}
                    onreset={session.on_reset.clone()}
                />
            </div>
        };
    }

    html! {
        <div class="app-container">
            <h1 class="title">{ "Workout Timer" }</h1>

            <div class="scroll-section">
                <ScrollPicker
                    label="Rounds"
                    value={*rounds}
                    min={MIN_ROUNDS}
                    max={MAX_ROUNDS}
                    increment={ROUNDS_STEP}
                    onchange={setter(&rounds)}
                />
                <ScrollPicker
                    label="Work Time (sec)"
                    value={*work_seconds}
                    min={MIN_WORK_SECONDS}
                    max={MAX_WORK_SECONDS}
                    increment={WORK_STEP_SECONDS}
                    wheel=true
                    onchange={setter(&work_seconds)}
                />
                <ScrollPicker
                    label="Rest Time (sec)"
                    value={*rest_seconds}
                    min={MIN_REST_SECONDS}
                    max={MAX_REST_SECONDS}
                    increment={REST_STEP_SECONDS}
                    wheel=true
                    onchange={setter(&rest_seconds)}
                />
            </div>

            <SetupSummary
                {config}
                error={session.last_error.map(|e| AttrValue::from(e.to_string()))}
                {onstart}
            />
        </div>
    }
}

/// Entry point: installs the panic hook and logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    if logging::init(LOG_LEVEL).is_err() {
        web_sys::console::warn_1(&"Logger already installed".into());
    }
    yew::Renderer::<App>::new().render();
}
