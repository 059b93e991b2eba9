//! `wasm-bindgen` exports for a browser front end.
//!
//! Values cross the boundary as plain JS objects via `serde-wasm-bindgen`,
//! using the serde shapes of [`Entrant`], [`EngineConfig`],
//! [`BracketResult`] and [`OverrideCommand`].

use crate::bracket::{Bracket, BracketResult};
use crate::engine::{BracketEngine, EngineConfig};
use crate::entrant::Entrant;
use crate::manual::{CommandOutcome, DragPolicy, OverrideCommand};
use wasm_bindgen::prelude::*;

fn config_from(value: JsValue) -> Result<EngineConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EngineConfig::default());
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

/// Runs the bracketing pipeline. A missing config uses the defaults.
#[wasm_bindgen(js_name = processEntrants)]
pub fn process_entrants(entrants: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let entrants: Vec<Entrant> = serde_wasm_bindgen::from_value(entrants)?;
    let config = config_from(config)?;
    let result = BracketEngine::run(&entrants, &config);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Updated result plus what the command did, returned as
/// `{ result, outcome }`.
#[derive(Debug, serde::Serialize)]
struct AppliedCommand {
    result: BracketResult,
    outcome: CommandOutcome,
}

fn apply_to(mut result: BracketResult, command: OverrideCommand) -> AppliedCommand {
    let outcome = result.apply(command);
    AppliedCommand { result, outcome }
}

/// Applies one override command and returns `{ result, outcome }`.
#[wasm_bindgen(js_name = applyCommand)]
pub fn apply_command(result: JsValue, command: JsValue) -> Result<JsValue, JsValue> {
    let result: BracketResult = serde_wasm_bindgen::from_value(result)?;
    let command: OverrideCommand = serde_wasm_bindgen::from_value(command)?;
    Ok(serde_wasm_bindgen::to_value(&apply_to(result, command))?)
}

/// Drag-compatibility check for highlighting drop targets.
#[wasm_bindgen(js_name = canDrop)]
pub fn can_drop(entrant: JsValue, bracket: JsValue) -> Result<bool, JsValue> {
    let entrant: Entrant = serde_wasm_bindgen::from_value(entrant)?;
    let bracket: Bracket = serde_wasm_bindgen::from_value(bracket)?;
    Ok(DragPolicy::can_drop(&entrant, &bracket))
}
