//! Pusher wire protocol (version 7) as far as this console needs it.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::PushConfig;

pub const PENDING_CHANNEL: &str = "pending-requests";
pub const PENDING_EVENT: &str = "pending-count-updated";
pub const STATUS_CHANNEL: &str = "travel-order-status";
pub const STATUS_EVENT: &str = "status-updated";

pub const CHANNELS: [&str; 2] = [PENDING_CHANNEL, STATUS_CHANNEL];

const CLIENT_VERSION: &str = "8.4.0";

#[derive(Debug, thiserror::Error)]
pub enum PushError {
    #[error("malformed push frame: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PushFrame {
    ConnectionEstablished { socket_id: String },
    SubscriptionSucceeded { channel: String },
    Ping,
    Error { message: String },
    Event {
        channel: String,
        event: String,
        data: Value,
    },
}

#[derive(Deserialize)]
struct RawFrame {
    event: String,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    data: Value,
}

pub fn socket_url(config: &PushConfig) -> String {
    format!(
        "wss://ws-{}.pusher.com/app/{}?protocol=7&client=js&version={}",
        config.cluster, config.key, CLIENT_VERSION
    )
}

/// `data` is usually a JSON document encoded as a string; it is decoded when possible.
fn decode_data(data: Value) -> Value {
    match data {
        Value::String(raw) => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
        other => other,
    }
}

fn str_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub fn parse_frame(raw: &str) -> Result<PushFrame, PushError> {
    let frame: RawFrame = serde_json::from_str(raw)?;
    let data = decode_data(frame.data);
    Ok(match frame.event.as_str() {
        "pusher:connection_established" => PushFrame::ConnectionEstablished {
            socket_id: str_field(&data, "socket_id"),
        },
        "pusher_internal:subscription_succeeded" => PushFrame::SubscriptionSucceeded {
            channel: frame.channel.unwrap_or_default(),
        },
        "pusher:ping" => PushFrame::Ping,
        "pusher:error" => PushFrame::Error {
            message: str_field(&data, "message"),
        },
        _ => PushFrame::Event {
            channel: frame.channel.unwrap_or_default(),
            event: frame.event,
            data,
        },
    })
}

pub fn subscribe_frame(channel: &str) -> String {
    json!({ "event": "pusher:subscribe", "data": { "channel": channel } }).to_string()
}

pub fn unsubscribe_frame(channel: &str) -> String {
    json!({ "event": "pusher:unsubscribe", "data": { "channel": channel } }).to_string()
}

pub fn pong_frame() -> String {
    json!({ "event": "pusher:pong", "data": {} }).to_string()
}
