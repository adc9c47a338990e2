use std::cmp::Ordering;

use crate::config::EffectsConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

pub fn log_event(config: &EffectsConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let line = event_payload(now_unix_millis(), level, event, fields).to_string();
    match level {
        LogLevel::Debug => log::debug!("{line}"),
        LogLevel::Info => log::info!("{line}"),
    }
}

fn event_payload(ts: u64, level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert("ts".to_string(), serde_json::Value::Number(ts.into()));
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_ranks_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.max(LogLevel::Debug), LogLevel::Info);
    }

    #[test]
    fn payload_flattens_extra_fields() {
        let payload = event_payload(
            42,
            LogLevel::Info,
            "region_revealed",
            serde_json::json!({ "region": 3, "kind": "project_card" }),
        );

        assert_eq!(payload["ts"], 42);
        assert_eq!(payload["level"], "info");
        assert_eq!(payload["event"], "region_revealed");
        assert_eq!(payload["region"], 3);
        assert_eq!(payload["kind"], "project_card");
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(1, LogLevel::Debug, "tick", serde_json::json!([1, 2]));
        let object = payload.as_object().expect("payload is an object");

        assert_eq!(object.len(), 3);
    }
}
