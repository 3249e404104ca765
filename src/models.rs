use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

pub const TYPE_MIN_LEN: usize = 2;
pub const TYPE_MAX_LEN: usize = 64;
pub const PAGE_MAX_LEN: usize = 256;

// Validated client event, fields passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "type")]
    pub event_type: String,
    pub page: String,
    pub ts: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Map<String, Value>>,
}

// What the log sink receives for an accepted event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedEvent {
    pub ip: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub page: String,
    pub payload: Map<String, Value>,
    pub ts: Number,
}

impl AcceptedEvent {
    pub fn new(ip: String, record: EventRecord) -> Self {
        Self {
            ip,
            event_type: record.event_type,
            page: record.page,
            payload: record.payload.unwrap_or_default(),
            ts: record.ts,
        }
    }
}

// Event endpoint response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EventResponse {
    pub fn accepted() -> Self {
        Self { ok: true, error: None }
    }

    pub fn rejected(code: &str) -> Self {
        Self {
            ok: false,
            error: Some(code.to_string()),
        }
    }
}

// Lengths count UTF-16 code units, the unit the browser client measures in
fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

// Structural check of a decoded body. Returns None on the first failing rule.
pub fn validate_body(data: &Value) -> Option<EventRecord> {
    let obj = data.as_object()?;

    let event_type = obj.get("type")?.as_str()?;
    if !(TYPE_MIN_LEN..=TYPE_MAX_LEN).contains(&text_len(event_type)) {
        return None;
    }

    let page = obj.get("page")?.as_str()?;
    if !page.starts_with('/') || text_len(page) > PAGE_MAX_LEN {
        return None;
    }

    let ts = match obj.get("ts")? {
        Value::Number(n) if n.as_f64().is_some_and(f64::is_finite) => n.clone(),
        _ => return None,
    };

    let payload = match obj.get("payload") {
        None => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(_) => return None,
    };

    Some(EventRecord {
        event_type: event_type.to_string(),
        page: page.to_string(),
        ts,
        payload,
    })
}
