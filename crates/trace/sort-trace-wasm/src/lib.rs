use js_sys::Array;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use sort_trace_core::{generate_trace_by_name, Algorithm, Config, Snapshot};

#[wasm_bindgen]
pub struct SortTracer {
    cfg: Config,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn trace_to_js(trace: &[Snapshot]) -> Result<JsValue, JsError> {
    swb::to_value(trace).map_err(|e| JsError::new(&format!("trace error: {e}")))
}

#[wasm_bindgen]
impl SortTracer {
    /// Create a tracer. Pass a JSON config object or undefined/null for defaults.
    /// Example:
    ///   new SortTracer({ max_elements: 50 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SortTracer, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(SortTracer { cfg })
    }

    /// Generate the full trace for `values` (array of numbers) with the
    /// algorithm named `algorithm` (e.g. "Bubble Sort"). Returns an array of
    /// snapshots; an unknown algorithm name yields an empty array.
    #[wasm_bindgen]
    pub fn generate(&self, values: JsValue, algorithm: String) -> Result<JsValue, JsError> {
        let values: Vec<f64> = if jsvalue_is_undefined_or_null(&values) {
            self.cfg.default_sequence.clone()
        } else {
            swb::from_value(values).map_err(|e| JsError::new(&format!("values error: {e}")))?
        };
        self.cfg
            .check_sequence(&values)
            .map_err(|e| JsError::new(&format!("values error: {e}")))?;
        let trace = generate_trace_by_name(&values, &algorithm);
        trace_to_js(&trace)
    }

    /// Sequence to show before the user supplies one.
    #[wasm_bindgen(js_name = default_sequence)]
    pub fn default_sequence(&self) -> Vec<f64> {
        self.cfg.default_sequence.clone()
    }

    #[wasm_bindgen(js_name = max_elements)]
    pub fn max_elements(&self) -> usize {
        self.cfg.max_elements
    }
}

/// Display names of every supported algorithm, in selector order.
#[wasm_bindgen]
pub fn algorithms() -> Array {
    Algorithm::ALL
        .iter()
        .map(|a| JsValue::from_str(a.display_name()))
        .collect()
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
