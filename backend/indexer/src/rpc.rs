//! Soroban RPC client — polls `getEvents` and decodes campaign ledger events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns a soft error or a
//!   rate-limit response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.
//! * JSON-RPC "invalid request" / "method not found" are hard failures.
//!
//! ## Event encoding
//!
//! The RPC returns each topic and the event value as base64 XDR `ScVal`s.
//! Ledger events carry a symbol (`created`, `donated`, `refunded`) followed by
//! the 32-byte campaign id, which is stored hex-encoded. The value is the
//! event struct, an `ScMap` keyed by field name. JSON topics and values are
//! accepted as a fallback.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use stellar_xdr::curr::{AccountId, Hash, Limits, PublicKey, ReadXdr, ScAddress, ScVal, Uint256};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{EventKind, LedgerEvent};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

/// JSON-RPC codes that retrying cannot fix.
const HARD_ERROR_CODES: [i64; 2] = [-32600, -32601];

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    /// Unique per on-chain event: ledger, transaction, operation and event index.
    pub id: String,
    /// XDR-encoded topic list
    pub topic: Vec<String>,
    /// Event data, a base64 XDR `ScVal`
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
}

/// One page of `getEvents` output.
#[derive(Debug)]
pub struct EventsPage {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    pub latest_ledger: Option<u64>,
}

// ─────────────────────────────────────────────────────────
// Back-off
// ─────────────────────────────────────────────────────────

/// Doubling delay capped at [`MAX_BACKOFF_SECS`].
#[derive(Debug)]
struct Backoff {
    secs: u64,
}

impl Backoff {
    fn new() -> Self {
        Backoff {
            secs: INITIAL_BACKOFF_SECS,
        }
    }

    /// Return the current delay and double it for next time.
    fn next_delay(&mut self) -> Duration {
        let delay = Duration::from_secs(self.secs);
        self.secs = (self.secs * 2).min(MAX_BACKOFF_SECS);
        delay
    }

    async fn wait(&mut self) {
        tokio::time::sleep(self.next_delay()).await;
    }
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events from the RPC.
///
/// * `start_ledger` — the ledger sequence to scan from (inclusive).
/// * `cursor`       — optional opaque pagination cursor from a previous response.
/// * `limit`        — maximum number of events to return.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_id: &str,
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<EventsPage> {
    let mut backoff = Backoff::new();
    let request = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "getEvents",
        "params": build_params(contract_id, start_ledger, cursor, limit),
    });

    loop {
        let resp = match client.post(rpc_url).json(&request).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, retry_in = ?backoff.secs, "RPC request failed");
                backoff.wait().await;
                continue;
            }
        };

        if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!(retry_in = ?backoff.secs, "Rate-limited by RPC");
            backoff.wait().await;
            continue;
        }

        let body: RpcResponse = resp.json().await?;

        if let Some(err) = body.error {
            if HARD_ERROR_CODES.contains(&err.code) {
                return Err(IndexerError::EventParse(format!(
                    "RPC hard error {}: {}",
                    err.code, err.message
                )));
            }
            warn!(code = err.code, message = %err.message, retry_in = ?backoff.secs, "RPC soft error");
            backoff.wait().await;
            continue;
        }

        let result = body.result.ok_or_else(|| {
            IndexerError::EventParse("Empty result from getEvents".to_string())
        })?;

        debug!(
            count = result.events.len(),
            latest_ledger = ?result.latest_ledger,
            "Fetched events"
        );

        return Ok(EventsPage {
            events: result.events,
            cursor: result.cursor,
            latest_ledger: result.latest_ledger,
        });
    }
}

fn build_params(contract_id: &str, start_ledger: u32, cursor: Option<&str>, limit: u32) -> Value {
    let mut params = json!({
        "filters": [
            {
                "type": "contract",
                "contractIds": [contract_id]
            }
        ],
        "pagination": {
            "limit": limit
        }
    });

    match cursor {
        Some(cur) => params["pagination"]["cursor"] = json!(cur),
        None => params["startLedger"] = json!(start_ledger),
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode a list of raw RPC events into [`LedgerEvent`] structs.
///
/// Events from failed invocations are dropped: their state changes were
/// rolled back, so they are not part of the audit trail.
pub fn decode_events(raw: &[RawEvent], contract_id: &str) -> Vec<LedgerEvent> {
    raw.iter()
        .filter(|e| e.in_successful_contract_call != Some(false))
        .filter_map(|e| decode_single(e, contract_id))
        .collect()
}

fn decode_single(raw: &RawEvent, contract_id: &str) -> Option<LedgerEvent> {
    let first_topic = raw.topic.first()?;
    let kind = EventKind::from_topic(&extract_symbol(first_topic));

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let data = match &raw.value {
        Value::String(xdr) => decode_scval(xdr).unwrap_or(Value::Null),
        other => other.clone(),
    };

    let campaign_id = raw
        .topic
        .get(1)
        .map(|t| extract_campaign_id(t))
        .or_else(|| extract_field(&data, &["campaign_id"]));

    let (actor, amount) = decode_data(&data, &kind);
    if amount.is_none() && kind != EventKind::Unknown {
        warn!(event = %raw.id, kind = kind.as_str(), "Event value has no amount");
    }

    Some(LedgerEvent {
        rpc_id: raw.id.clone(),
        event_type: kind.as_str().to_string(),
        campaign_id,
        actor,
        amount,
        ledger,
        timestamp,
        contract_id: raw
            .contract_id
            .clone()
            .unwrap_or_else(|| contract_id.to_string()),
        tx_hash: raw.tx_hash.clone(),
    })
}

/// Pull the actor and amount out of the decoded event data.
fn decode_data(value: &Value, kind: &EventKind) -> (Option<String>, Option<String>) {
    match kind {
        EventKind::CampaignCreated => (None, extract_field(value, &["target_amount"])),
        EventKind::DonationSent => (
            extract_field(value, &["donor"]),
            extract_field(value, &["amount"]),
        ),
        EventKind::Refunded => (
            extract_field(value, &["contributor"]),
            extract_field(value, &["amount"]),
        ),
        EventKind::Unknown => (None, None),
    }
}

fn extract_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Decode a base64 XDR `ScVal` into JSON.
fn decode_scval(raw: &str) -> Option<Value> {
    let val = ScVal::from_xdr_base64(raw, Limits::none()).ok()?;
    Some(scval_to_json(&val))
}

/// Contract structs arrive as symbol-keyed maps and become JSON objects.
/// 128-bit integers are decimal strings, bytes are hex, addresses are strkeys.
fn scval_to_json(val: &ScVal) -> Value {
    match val {
        ScVal::Bool(b) => json!(b),
        ScVal::U32(n) => json!(n),
        ScVal::I32(n) => json!(n),
        ScVal::U64(n) => json!(n),
        ScVal::I64(n) => json!(n),
        ScVal::Timepoint(t) => json!(t.0),
        ScVal::U128(parts) => {
            json!((((parts.hi as u128) << 64) | parts.lo as u128).to_string())
        }
        ScVal::I128(parts) => {
            json!((((parts.hi as i128) << 64) | parts.lo as i128).to_string())
        }
        ScVal::Bytes(bytes) => json!(hex::encode(bytes.0.as_slice())),
        ScVal::String(s) => json!(s.0.to_utf8_string_lossy()),
        ScVal::Symbol(s) => json!(s.0.to_utf8_string_lossy()),
        ScVal::Address(address) => json!(strkey(address)),
        ScVal::Vec(Some(items)) => Value::Array(items.0.iter().map(scval_to_json).collect()),
        ScVal::Map(Some(entries)) => Value::Object(
            entries
                .0
                .iter()
                .map(|entry| {
                    let key = match scval_to_json(&entry.key) {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (key, scval_to_json(&entry.val))
                })
                .collect(),
        ),
        _ => Value::Null,
    }
}

fn strkey(address: &ScAddress) -> String {
    match address {
        ScAddress::Account(AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(key)))) => {
            stellar_strkey::ed25519::PublicKey(*key).to_string()
        }
        ScAddress::Contract(Hash(hash)) => stellar_strkey::Contract(*hash).to_string(),
    }
}

/// The `value` of a JSON `{"type":…,"value":…}` topic, as a string.
fn json_topic_value(raw: &str) -> Option<String> {
    let v: Value = serde_json::from_str(raw).ok()?;
    match v.get("value")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A topic as a plain string: XDR first, then JSON, then the raw text.
fn topic_string(raw: &str) -> String {
    decode_scval(raw)
        .and_then(|v| v.as_str().map(String::from))
        .or_else(|| json_topic_value(raw))
        .unwrap_or_else(|| raw.to_string())
}

/// Extract the event symbol from the leading topic.
fn extract_symbol(raw: &str) -> String {
    topic_string(raw)
}

/// Extract the hex campaign id from the second topic.
fn extract_campaign_id(raw: &str) -> String {
    topic_string(raw).to_lowercase()
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
