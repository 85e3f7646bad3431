use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use workout_timer::defaults::TICK_INTERVAL_MS;
use workout_timer::{ConfigError, Cue, SessionController, SessionSnapshot, WorkoutConfig};
use yew::prelude::*;

type SharedController = Rc<RefCell<SessionController<Interval>>>;

/// Holds the session snapshot and the actions the view can trigger.
#[derive(Clone)]
pub struct SessionHandle {
    /// Read-only copy of the controller state, refreshed on every change.
    pub snapshot: SessionSnapshot,
    /// Why the last start attempt was refused, if it was.
    pub last_error: Option<ConfigError>,
    pub on_start: Callback<WorkoutConfig>,
    pub on_pause: Callback<()>,
    pub on_resume: Callback<()>,
    pub on_reset: Callback<()>,
}

/// Build the periodic tick for `controller`.
///
/// Cues are collected while the controller is borrowed and emitted after the
/// borrow ends.
fn tick_interval(
    controller: SharedController,
    snapshot: UseStateHandle<SessionSnapshot>,
    on_cue: Callback<Cue>,
) -> Interval {
    Interval::new(TICK_INTERVAL_MS, move || {
        let mut cues = Vec::new();
        {
            let mut ctl = controller.borrow_mut();
            ctl.tick(&mut |cue: Cue| cues.push(cue));
            snapshot.set(ctl.snapshot());
        }
        for cue in cues {
            on_cue.emit(cue);
        }
    })
}

/// Custom hook owning a [`SessionController`] driven by a gloo `Interval`.
///
/// The controller lives in a `use_mut_ref` for the lifetime of the component.
/// Unmounting cancels the tick schedule, which also breaks the reference
/// cycle between the controller and the interval closure.
#[hook]
pub fn use_session(on_cue: Callback<Cue>) -> SessionHandle {
    let controller: SharedController = use_mut_ref(SessionController::new);
    let snapshot = use_state(SessionSnapshot::default);
    let last_error = use_state(|| None::<ConfigError>);

    let on_start = {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        let last_error = last_error.clone();
        let on_cue = on_cue.clone();
        Callback::from(move |config: WorkoutConfig| {
            let mut cues = Vec::new();
            let result = {
                let mut ctl = controller.borrow_mut();
                let result = ctl.start(config, &mut |cue: Cue| cues.push(cue), || {
                    tick_interval(controller.clone(), snapshot.clone(), on_cue.clone())
                });
                snapshot.set(ctl.snapshot());
                result
            };
            last_error.set(result.err());
            for cue in cues {
                on_cue.emit(cue);
            }
        })
    };

    let on_pause = {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |_: ()| {
            let mut ctl = controller.borrow_mut();
            if ctl.pause() {
                snapshot.set(ctl.snapshot());
            }
        })
    };

    let on_resume = {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        let on_cue = on_cue.clone();
        Callback::from(move |_: ()| {
            let mut ctl = controller.borrow_mut();
            let resumed = ctl.resume(|| {
                tick_interval(controller.clone(), snapshot.clone(), on_cue.clone())
            });
            if resumed {
                snapshot.set(ctl.snapshot());
            }
        })
    };

    let on_reset = {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        let last_error = last_error.clone();
        Callback::from(move |_: ()| {
            let mut ctl = controller.borrow_mut();
            ctl.reset();
            snapshot.set(ctl.snapshot());
            last_error.set(None);
        })
    };

    // Cancel the schedule on unmount
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            move || {
                controller.borrow_mut().cancel_schedule();
            }
        });
    }

    SessionHandle {
        snapshot: *snapshot,
        last_error: *last_error,
        on_start,
        on_pause,
        on_resume,
        on_reset,
    }
}
