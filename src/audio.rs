//! JavaScript interop for cue playback.
//! Provides Rust bindings to the WebAudio helpers defined in cue_player.js.

use wasm_bindgen::prelude::*;
use workout_timer::Cue;

#[wasm_bindgen(module = "/cue_player.js")]
extern "C" {
    #[wasm_bindgen(js_name = playCue)]
    fn play_cue_kind(kind: &str);
}

/// Play the tone for `cue`. Each cue kind has its own pitch and length.
pub fn play_cue(cue: Cue) {
    play_cue_kind(cue.as_str());
}
