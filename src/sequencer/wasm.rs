//! WASM bindings for the typing sequencer.
//!
//! The browser host owns the timers (`setTimeout` with the returned
//! `nextDelayMs`, mirroring the original hook's scheduling); the Rust core
//! owns every transition.

use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::error::TypingError;
use super::manager::TypingSequencer;
use super::model::TimingConfig;

/// Serialize a value to JsValue with maps as plain JS objects (not Map).
fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::new().serialize_maps_as_objects(true))
}

// =============================================================================
// ERROR CONVERSION
// =============================================================================

impl From<TypingError> for JsValue {
    fn from(err: TypingError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for Result conversion
macro_rules! js_result {
    ($expr:expr) => {
        $expr.map_err(|e: TypingError| JsValue::from(e))
    };
}

// =============================================================================
// TICK RESULT SHAPE
// =============================================================================

/// JS-facing shape of a tick result.
#[derive(Serialize)]
struct JsTickOutcome {
    /// Whether the display should re-render.
    emit: bool,
    /// Visible text after the transition.
    text: String,
    /// Milliseconds until the host should schedule the next tick.
    next_delay_ms: u64,
}

// =============================================================================
// MAIN WRAPPER TYPE
// =============================================================================

/// JavaScript-friendly wrapper around [`TypingSequencer`].
///
/// The host drives it with its own timer:
///
/// ```js
/// const seq = new JsTypingSequencer(["Hello", "World"], { pause_duration_ms: 1500 });
/// const step = () => {
///   const out = seq.tick();
///   if (out.emit) render(out.text);
///   setTimeout(step, out.next_delay_ms);
/// };
/// setTimeout(step, seq.nextDelayMs());
/// ```
#[wasm_bindgen]
pub struct JsTypingSequencer {
    inner: TypingSequencer,
}

#[wasm_bindgen]
impl JsTypingSequencer {
    /// Creates a sequencer from a phrase array and an optional config object.
    ///
    /// Config fields (all optional, milliseconds): `typing_interval_ms`,
    /// `deleting_interval_ms`, `pause_duration_ms`.
    ///
    /// Throws on an empty phrase array, a non-string array element, or a
    /// negative duration.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const seq = new JsTypingSequencer(["Hi", "Bye"]);
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(phrases: Array, config: JsValue) -> Result<JsTypingSequencer, JsValue> {
        let phrases: Vec<String> = phrases
            .iter()
            .map(|v| {
                v.as_string()
                    .ok_or_else(|| JsValue::from_str("phrase list must contain only strings"))
            })
            .collect::<Result<_, JsValue>>()?;
        let config: TimingConfig = if config.is_undefined() || config.is_null() {
            TimingConfig::default()
        } else {
            from_value(config)?
        };
        let inner = js_result!(TypingSequencer::with_config(phrases, config))?;
        Ok(JsTypingSequencer { inner })
    }

    /// Applies one transition.
    ///
    /// Returns `{ emit, text, next_delay_ms }`.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const out = seq.tick();
    /// if (out.emit) element.textContent = out.text + "|";
    /// ```
    pub fn tick(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.inner.tick();
        let out = JsTickOutcome {
            emit: outcome.emit,
            next_delay_ms: outcome.next_delay_ms(),
            text: outcome.text,
        };
        Ok(to_js_value(&out)?)
    }

    /// The currently visible text.
    #[wasm_bindgen(js_name = currentText)]
    pub fn current_text(&self) -> String {
        self.inner.current_text()
    }

    /// Milliseconds until the next tick should fire.
    #[wasm_bindgen(js_name = nextDelayMs)]
    pub fn next_delay_ms(&self) -> f64 {
        self.inner.next_delay().as_millis() as f64
    }

    /// Snapshot of the cycle position as a JavaScript object.
    ///
    /// # Example (JavaScript)
    /// ```js
    /// const state = seq.getState();
    /// console.log(state.phrase_index, state.char_count, state.mode);
    /// ```
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        Ok(to_js_value(&self.inner.state())?)
    }

    /// Number of configured phrases.
    #[wasm_bindgen(js_name = phraseCount)]
    pub fn phrase_count(&self) -> usize {
        self.inner.phrase_count()
    }
}
