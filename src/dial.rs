//! Native dial bridge — synchronous method-channel handler that opens the
//! platform phone dialer.
//!
//! Disjoint from the notification worker; the two share no runtime state.
//! A `Success` reply means the request was accepted, never that a call
//! happened: the platform gives no completion signal once the dial intent
//! is issued, and a failed launch is swallowed rather than surfaced.

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Method-channel name embedders register this bridge under.
pub const CHANNEL: &str = "com.beacon.phone";

/// A request arriving over the method channel.
#[derive(Debug, Clone, Deserialize)]
pub struct DialRequest {
    pub method: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl DialRequest {
    /// Build a `dial` request for the given number.
    pub fn dial(number: &str) -> Self {
        let mut arguments = Map::new();
        arguments.insert("number".into(), Value::String(number.into()));
        Self {
            method: "dial".into(),
            arguments,
        }
    }
}

/// Error kinds reported back over the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    #[serde(rename = "INVALID_ARGUMENT")]
    InvalidArgument,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
        }
    }
}

/// Reply sent back to the bridge caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BridgeReply {
    Success { message: String },
    Error { kind: ErrorKind, message: String },
    NotImplemented,
}

/// Issues the platform dial intent. Fire-and-forget at the OS level.
pub trait Dialer: Send + Sync {
    fn dial(&self, number: &str) -> Result<()>;
}

/// Method-channel handler pairing a [`Dialer`] with the bridge contract.
pub struct DialBridge<D: Dialer> {
    dialer: D,
}

impl<D: Dialer> DialBridge<D> {
    pub fn new(dialer: D) -> Self {
        Self { dialer }
    }

    /// Handle one bridge request synchronously.
    pub fn handle(&self, request: &DialRequest) -> BridgeReply {
        if request.method != "dial" {
            return BridgeReply::NotImplemented;
        }

        let Some(number) = request.arguments.get("number").and_then(Value::as_str) else {
            return BridgeReply::Error {
                kind: ErrorKind::InvalidArgument,
                message: "Phone number is required".into(),
            };
        };

        if let Err(e) = self.dialer.dial(number) {
            // The caller still gets Success: acceptance is the only signal
            // this channel has ever reported.
            eprintln!("[dial] failed to launch dialer: {e}");
        }

        BridgeReply::Success {
            message: format!("Dialing {number}"),
        }
    }
}
