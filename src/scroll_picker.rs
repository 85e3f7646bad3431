//! Horizontal scroll picker used by the setup screen.
//!
//! The DOM strip is the source of the continuous position; [`PickerModel`]
//! decides which value that position means. A gloo `Timeout` held in a
//! [`ScheduleSlot`] debounces scroll events so a settled gesture commits once.

use crate::config::SLOT_WIDTH_PX;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, KeyboardEvent, ScrollBehavior, ScrollToOptions};
use workout_timer::defaults::SETTLE_DEBOUNCE_MS;
use workout_timer::{PickerMode, PickerModel, PickerUpdate, ScheduleSlot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScrollPickerProps {
    pub label: AttrValue,
    pub value: u32,
    pub min: u32,
    pub max: u32,
    pub increment: u32,
    /// Render as an endless wheel instead of stopping at min/max.
    #[prop_or_default]
    pub wheel: bool,
    pub onchange: Callback<u32>,
}

/// Move the strip as requested by `update` and report a committed value.
fn apply_update(strip: &NodeRef, update: PickerUpdate, onchange: &Callback<u32>) {
    if let Some(element) = strip.cast::<Element>() {
        if let Some(offset) = update.jump_to {
            element.set_scroll_left(offset.round() as i32);
        }
        if let Some(offset) = update.snap_to {
            let options = ScrollToOptions::new();
            options.set_left(offset);
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_to_with_scroll_to_options(&options);
        }
    }
    if let Some(value) = update.commit {
        onchange.emit(value);
    }
}

#[function_component(ScrollPicker)]
pub fn scroll_picker(props: &ScrollPickerProps) -> Html {
    let strip = use_node_ref();
    let mode = if props.wheel {
        PickerMode::Wheel
    } else {
        PickerMode::Bounded
    };
    let model: Rc<RefCell<PickerModel>> = use_mut_ref(|| {
        PickerModel::new(
            props.min,
            props.max,
            props.increment,
            props.value,
            mode,
            SLOT_WIDTH_PX,
        )
    });
    let settle_timer: Rc<RefCell<ScheduleSlot<Timeout>>> = use_mut_ref(ScheduleSlot::new);

    // Regenerate values when the range changes
    {
        let model = model.clone();
        let strip = strip.clone();
        let onchange = props.onchange.clone();
        let value = props.value;
        use_effect_with(
            (props.min, props.max, props.increment),
            move |&(min, max, increment)| {
                let update = model.borrow_mut().set_range(min, max, increment, value);
                apply_update(&strip, update, &onchange);
            },
        );
    }

    // Follow values set by the owner
    {
        let model = model.clone();
        let strip = strip.clone();
        let onchange = props.onchange.clone();
        use_effect_with(props.value, move |&value| {
            let update = model.borrow_mut().sync_value(value);
            apply_update(&strip, update, &onchange);
        });
    }

    // No settle may fire after unmount
    {
        let settle_timer = settle_timer.clone();
        use_effect_with((), move |_| {
            move || {
                settle_timer.borrow_mut().cancel();
            }
        });
    }

    let onscroll = {
        let model = model.clone();
        let strip = strip.clone();
        let settle_timer = settle_timer.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |_: Event| {
            let Some(element) = strip.cast::<Element>() else {
                return;
            };
            model.borrow_mut().scroll_to(element.scroll_left() as f64);

            let model = model.clone();
            let strip = strip.clone();
            let onchange = onchange.clone();
            let fired = settle_timer.clone();
            settle_timer.borrow_mut().install(|| {
                Timeout::new(SETTLE_DEBOUNCE_MS, move || {
                    let update = model.borrow_mut().settle();
                    apply_update(&strip, update, &onchange);
                    fired.borrow_mut().cancel();
                })
            });
        })
    };

    let onselect = {
        let model = model.clone();
        let strip = strip.clone();
        let settle_timer = settle_timer.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |slot: usize| {
            settle_timer.borrow_mut().cancel();
            let update = model.borrow_mut().select_slot(slot);
            apply_update(&strip, update, &onchange);
        })
    };

    let onstep = {
        let model = model.clone();
        let strip = strip.clone();
        let settle_timer = settle_timer.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |delta: i32| {
            settle_timer.borrow_mut().cancel();
            let update = model.borrow_mut().step(delta);
            apply_update(&strip, update, &onchange);
        })
    };

    let onkeydown = {
        let onstep = onstep.clone();
        Callback::from(move |e: KeyboardEvent| {
            let delta = match e.key().as_str() {
                "ArrowLeft" => -1,
                "ArrowRight" => 1,
                _ => return,
            };
            e.prevent_default();
            onstep.emit(delta);
        })
    };

    let model = model.borrow();
    if model.is_disabled() {
        return html! {
            <div class="scroll-input disabled">
                <label class="scroll-label">{ props.label.clone() }</label>
                <div class="scroll-wheel">{ "—" }</div>
            </div>
        };
    }

    let spacer_style = format!("flex: 0 0 calc(50% - {}px)", SLOT_WIDTH_PX / 2.0);
    let slot_style = format!("flex: 0 0 {}px", SLOT_WIDTH_PX);

    html! {
        <div class="scroll-input">
            <label class="scroll-label">{ props.label.clone() }</label>
            <div class="scroll-row">
                <button class="scroll-step" onclick={
                    let onstep = onstep.clone();
                    Callback::from(move |_: MouseEvent| onstep.emit(-1))
                }>{ "‹" }</button>
                <div class="scroll-wheel" ref={strip} tabindex="0" {onscroll} {onkeydown}>
                    <div class="scroll-spacer" style={spacer_style.clone()} />
                    { (0..model.slot_count()).filter_map(|slot| {
                        let item = model.value_at(slot)?;
                        let onselect = onselect.clone();
                        Some(html! {
                            <div
                                key={slot}
                                class={classes!("scroll-item", (item == props.value).then_some("active"))}
                                style={slot_style.clone()}
                                onclick={Callback::from(move |_: MouseEvent| onselect.emit(slot))}
                            >
                                { item }
                            </div>
                        })
                    }).collect::<Html>() }
                    <div class="scroll-spacer" style={spacer_style} />
                </div>
                <button class="scroll-step" onclick={
                    Callback::from(move |_: MouseEvent| onstep.emit(1))
                }>{ "›" }</button>
            </div>
        </div>
    }
}
