//! Build-time configuration for where the published documents live, with an
//! optional runtime override. The runtime config is read from
//! `window.GRADEBOOK_CONFIG` (if present) so one build can be hosted next to
//! different data directories. Configuration values are public; do not store
//! secrets here.

use grade_core::DEFAULT_DATA_BASE;

/// Default request timeout (milliseconds) applied to document fetches.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_base_url: String,
    pub request_timeout_ms: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let data_base_url = option_env!("GRADEBOOK_DATA_BASE_URL").unwrap_or(DEFAULT_DATA_BASE);
        let request_timeout_ms = option_env!("GRADEBOOK_REQUEST_TIMEOUT_MS")
            .and_then(parse_timeout)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let mut config = Self {
            data_base_url: data_base_url.to_string(),
            request_timeout_ms,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    data_base_url: Option<String>,
    request_timeout_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.data_base_url {
        config.data_base_url = value;
    }
    if let Some(value) = runtime.request_timeout_ms {
        config.request_timeout_ms = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("GRADEBOOK_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        data_base_url: read_runtime_value(&object, "data_base_url"),
        request_timeout_ms: read_runtime_timeout(&object, "request_timeout_ms"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

// Accepts either a JSON number or a numeric string.
#[cfg(target_arch = "wasm32")]
fn read_runtime_timeout(object: &js_sys::Object, key: &str) -> Option<u32> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    match value.as_f64() {
        Some(number) => parse_timeout(&number.to_string()),
        None => parse_timeout(&value.as_string()?),
    }
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_timeout(value: &str) -> Option<u32> {
    normalize_runtime_value(value)?
        .parse::<u32>()
        .ok()
        .filter(|ms| *ms > 0)
}
