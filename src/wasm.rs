use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{Square, generate as generate_square, magic_constant, verify as verify_square};

/// Verification outcome as seen from JavaScript.
#[derive(Serialize)]
struct JsVerification {
    valid: bool,
    reason: String,
}

/// Convert a Square to a JsValue (2D array of numbers).
fn square_to_js(sq: &Square) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&sq.to_rows()).map_err(|e| JsError::new(&e.to_string()))
}

/// Generate the magic square of order n.
/// Returns a 2D array directly usable in JavaScript.
#[wasm_bindgen]
pub fn generate(n: i32) -> Result<JsValue, JsError> {
    let sq = generate_square(i64::from(n)).map_err(|e| JsError::new(&e.to_string()))?;
    square_to_js(&sq)
}

/// Check a 2D array of numbers for the magic square property.
///
/// Returns `{ valid, reason }`. A grid that is not magic is not an error;
/// only input that is not a square array of non-negative integers throws.
#[wasm_bindgen]
pub fn verify(rows: JsValue) -> Result<JsValue, JsError> {
    let rows: Vec<Vec<u32>> =
        serde_wasm_bindgen::from_value(rows).map_err(|e| JsError::new(&e.to_string()))?;
    let sq = Square::from_rows(rows).map_err(|e| JsError::new(&e.to_string()))?;
    let verification = verify_square(&sq);

    let result = JsVerification {
        valid: verification.is_magic(),
        reason: verification.to_string(),
    };
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsError::new(&e.to_string()))
}

/// The magic constant of order n. Exact as a JS number for every `u16` order.
#[wasm_bindgen(js_name = magicConstant)]
pub fn magic_constant_js(n: u16) -> f64 {
    magic_constant(n as usize) as f64
}
