//! Wire format of the profile backend and its conversion into domain results.
//!
//! Response bodies are parsed from text so the HTTP layer stays thin and every
//! shape the backend can send is testable without a socket.
//!
//! | Endpoint | Body |
//! |---|---|
//! | `POST /start_profile` | `{ok, message}` |
//! | `POST /inject` | `{ok, message?, stats?: {contexts, pages, injected_url, injected_inline}}` |
//! | `GET /status/{id}` | `{exists, status?, debug_host?, debug_port?, websocket?, error?, started_at_human?}` |
//! | `GET /status` | `{<profile_id>: <status object without "exists">, ...}` |

use std::collections::BTreeMap;

use serde::Deserialize;

use pdeck_core::prelude::*;
use pdeck_core::DebugEndpoint;

// ─────────────────────────────────────────────────────────────────
// Domain results
// ─────────────────────────────────────────────────────────────────

/// Acknowledgement returned by a successful start request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartAck {
    pub message: String,
}

/// Counters reported by a successful inject. Absent counters are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InjectStats {
    pub contexts: u64,
    pub pages: u64,
    pub injected_by_url: u64,
    pub injected_inline: u64,
}

impl InjectStats {
    /// `Ctx:2 | Pages:5 | URL:0 | Inline:0`
    pub fn summary(&self) -> String {
        format!(
            "Ctx:{} | Pages:{} | URL:{} | Inline:{}",
            self.contexts, self.pages, self.injected_by_url, self.injected_inline
        )
    }
}

/// The backend's current view of one profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub status: String,
    pub debug_host: Option<String>,
    pub debug_port: Option<u16>,
    pub websocket: Option<String>,
    pub error: Option<String>,
    pub started_at: Option<String>,
}

impl StatusSnapshot {
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Self::default()
        }
    }

    /// Debug endpoint, only when both host and port are known
    pub fn debug_endpoint(&self) -> Option<DebugEndpoint> {
        match (&self.debug_host, self.debug_port) {
            (Some(host), Some(port)) => Some(DebugEndpoint::new(host.clone(), port)),
            _ => None,
        }
    }
}

/// Outcome of a status lookup. `NotFound` is a valid answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLookup {
    Found(StatusSnapshot),
    NotFound,
}

/// Optional script source sent with an inject request.
///
/// With neither field set the backend falls back to its bundled script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectOptions {
    pub script_url: Option<String>,
    pub inline_js: Option<String>,
}

impl InjectOptions {
    /// Build from raw settings values; blank values are dropped.
    pub fn new(script_url: &str, inline_js: &str) -> Self {
        Self {
            script_url: non_blank(script_url),
            inline_js: non_blank(inline_js),
        }
    }

    /// Form fields for `POST /inject`
    pub fn form_fields<'a>(&'a self, profile_id: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut fields = vec![("profile_id", profile_id)];
        if let Some(url) = &self.script_url {
            fields.push(("script_url", url.as_str()));
        }
        if let Some(js) = &self.inline_js {
            fields.push(("inline_js", js.as_str()));
        }
        fields
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ─────────────────────────────────────────────────────────────────
// Wire payloads
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct StartPayload {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InjectPayload {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    stats: Option<InjectStatsPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct InjectStatsPayload {
    #[serde(default)]
    contexts: Option<u64>,
    #[serde(default)]
    pages: Option<u64>,
    #[serde(default)]
    injected_url: Option<u64>,
    #[serde(default)]
    injected_inline: Option<u64>,
}

/// `debug_port` is an int, but the backend falls back to the raw string when
/// the address it got could not be parsed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u64),
    Text(String),
}

impl PortValue {
    fn as_port(&self) -> Option<u16> {
        match self {
            PortValue::Number(n) => u16::try_from(*n).ok(),
            PortValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    #[serde(default)]
    exists: bool,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    debug_host: Option<String>,
    #[serde(default)]
    debug_port: Option<PortValue>,
    #[serde(default)]
    websocket: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    started_at_human: Option<String>,
}

impl StatusPayload {
    fn into_snapshot(self) -> StatusSnapshot {
        StatusSnapshot {
            status: self.status.unwrap_or_default(),
            debug_host: self.debug_host.and_then(|h| non_blank(&h)),
            debug_port: self.debug_port.as_ref().and_then(PortValue::as_port),
            websocket: self.websocket.and_then(|w| non_blank(&w)),
            error: self.error.and_then(|e| non_blank(&e)),
            started_at: self.started_at_human.and_then(|s| non_blank(&s)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Parsers
// ─────────────────────────────────────────────────────────────────

fn decode<'a, T: Deserialize<'a>>(what: &str, body: &'a str) -> Result<T> {
    serde_json::from_str(body)
        .map_err(|e| Error::transport(format!("Invalid {} response: {}", what, e)))
}

/// Parse a `POST /start_profile` body. `ok=false` is a remote failure.
pub fn parse_start_response(body: &str) -> Result<StartAck> {
    let payload: StartPayload = decode("start", body)?;
    if !payload.ok {
        return Err(Error::remote(
            payload
                .message
                .unwrap_or_else(|| "Start rejected by backend".to_string()),
        ));
    }
    Ok(StartAck {
        message: payload
            .message
            .unwrap_or_else(|| "Start requested".to_string()),
    })
}

/// Parse a `POST /inject` body. `ok=false` is a remote failure.
pub fn parse_inject_response(body: &str) -> Result<InjectStats> {
    let payload: InjectPayload = decode("inject", body)?;
    if !payload.ok {
        return Err(Error::remote(
            payload
                .message
                .unwrap_or_else(|| "Inject rejected by backend".to_string()),
        ));
    }
    let stats = payload.stats.unwrap_or_default();
    Ok(InjectStats {
        contexts: stats.contexts.unwrap_or(0),
        pages: stats.pages.unwrap_or(0),
        injected_by_url: stats.injected_url.unwrap_or(0),
        injected_inline: stats.injected_inline.unwrap_or(0),
    })
}

/// Parse a `GET /status/{id}` body. `exists=false` maps to [`StatusLookup::NotFound`].
pub fn parse_status_response(body: &str) -> Result<StatusLookup> {
    let payload: StatusPayload = decode("status", body)?;
    if !payload.exists {
        return Ok(StatusLookup::NotFound);
    }
    Ok(StatusLookup::Found(payload.into_snapshot()))
}

/// Parse a `GET /status` body: every profile the backend currently tracks.
pub fn parse_status_map(body: &str) -> Result<BTreeMap<String, StatusSnapshot>> {
    let payload: BTreeMap<String, StatusPayload> = decode("status list", body)?;
    Ok(payload
        .into_iter()
        .map(|(id, info)| (id, info.into_snapshot()))
        .collect())
}
