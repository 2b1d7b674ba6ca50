//! WASM bindings for browser front-ends

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{normalize, run_match, Move, MatchState, SeededRng, WeightedOpponent};

fn seed_from(seed: &[u8]) -> Result<[u8; 32], JsError> {
    seed.try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// A live match against the seeded weighted opponent
#[wasm_bindgen]
pub struct WasmMatch {
    state: MatchState,
    opponent: WeightedOpponent<SeededRng>,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Start a match whose opponent draws from `seed` (32 bytes) and `session`
    #[wasm_bindgen(constructor)]
    pub fn new(seed: &[u8], session: u32) -> Result<WasmMatch, JsError> {
        let seed_arr = seed_from(seed)?;
        Ok(WasmMatch {
            state: MatchState::new(),
            opponent: WeightedOpponent::new(SeededRng::new(&seed_arr, session)),
        })
    }

    /// Play one round. Returns the serialized `Turn`; throws only once the match is complete.
    #[wasm_bindgen(js_name = submitMove)]
    pub fn submit_move(&mut self, input: &str) -> Result<JsValue, JsError> {
        let turn = self
            .state
            .submit_move(input, &mut self.opponent)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&turn)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.state.snapshot())
    }

    pub fn status(&self) -> Result<JsValue, JsError> {
        to_js(&self.state.status())
    }
}

/// Replay a full match from a JSON array of raw inputs
///
/// # Arguments
/// * `inputs_json` - JSON array of strings, e.g. `["rock", "bomb", "paper"]`
/// * `seed` - 32-byte opponent seed
/// * `session` - Session index mixed into the seed
///
/// # Returns
/// Array of serialized `Turn`s
#[wasm_bindgen(js_name = replayMatch)]
pub fn replay_match(inputs_json: &str, seed: &[u8], session: u32) -> Result<JsValue, JsError> {
    let inputs: Vec<String> = serde_json::from_str(inputs_json)
        .map_err(|e| JsError::new(&format!("Invalid inputs: {}", e)))?;
    let seed_arr = seed_from(seed)?;

    let mut opponent = WeightedOpponent::new(SeededRng::new(&seed_arr, session));
    let turns = run_match(&inputs, &mut opponent)
        .map_err(|e| JsError::new(&e.to_string()))?;

    to_js(&turns)
}

/// Names of every accepted move
#[wasm_bindgen(js_name = getMoveTypes)]
pub fn get_move_types() -> js_sys::Array {
    Move::ALL
        .iter()
        .map(|m| JsValue::from_str(m.name()))
        .collect()
}

#[derive(serde::Serialize)]
struct ValidationResult {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#move: Option<Move>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Normalize raw input.
///
/// Returns `{valid: true, move: "rock"}` or `{valid: false, error: "..."}`.
/// Never throws; bomb availability is checked by the match itself.
#[wasm_bindgen(js_name = validateMove)]
pub fn validate_move(input: &str) -> JsValue {
    let result = match normalize(input) {
        Ok(m) => ValidationResult { valid: true, r#move: Some(m), error: None },
        Err(e) => ValidationResult { valid: false, r#move: None, error: Some(e.to_string()) },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}
