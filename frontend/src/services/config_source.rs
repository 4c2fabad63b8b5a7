use anyhow::Context;
use referee_calendar_domain::{ConfigError, ConfigSource};
use shared::CalendarConfig;
use wasm_bindgen::JsValue;

/// Global the server template assigns the calendar configuration to
pub const CONFIG_GLOBAL: &str = "CALENDARIO_CONFIG";

/// Reads `window.CALENDARIO_CONFIG` each time it is polled
pub struct WindowConfigSource;

impl ConfigSource for WindowConfigSource {
    fn try_load(&self) -> Result<Option<CalendarConfig>, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Malformed(format!("{:?}", e)))?;
        if value.is_falsy() {
            return Ok(None);
        }

        let json = js_sys::JSON::stringify(&value)
            .ok()
            .and_then(|json| json.as_string())
            .ok_or_else(|| ConfigError::Malformed("value cannot be converted to JSON".to_string()))?;

        parse_config(&json)
            .map(Some)
            .map_err(|e| ConfigError::Malformed(format!("{:#}", e)))
    }
}

pub fn parse_config(json: &str) -> anyhow::Result<CalendarConfig> {
    serde_json::from_str(json).context("Failed to parse calendar configuration")
}
