use log::{Level, LevelFilter};
use serde_json::{Map, Number, Value};
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGER_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Installs the browser console sink once. Later calls only adjust the filter.
pub fn init(level: LevelFilter) {
    if !LOGGER_INSTALLED.swap(true, Ordering::SeqCst) {
        install_sink(level);
    }
    log::set_max_level(level);
}

#[cfg(target_arch = "wasm32")]
fn install_sink(level: LevelFilter) {
    let level = level.to_level().unwrap_or(Level::Error);
    wasm_logger::init(wasm_logger::Config::new(level));
}

#[cfg(not(target_arch = "wasm32"))]
fn install_sink(_level: LevelFilter) {}

pub fn log_event(level: Level, event: &str, fields: Value) {
    if level > log::max_level() {
        return;
    }

    let payload = event_payload(level, event, fields, chrono::Utc::now().timestamp_millis());
    log::log!(target: "portfolio", level, "{payload}");
}

pub fn event_payload(level: Level, event: &str, fields: Value, ts_millis: i64) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts_millis)));
    payload.insert(
        "level".to_string(),
        Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            // Reserved keys win over caller-supplied fields.
            payload.entry(key).or_insert(value);
        }
    }

    Value::Object(payload)
}
