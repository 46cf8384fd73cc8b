//! Push payload types — the push provider delivers these, the worker
//! consumes them.
//!
//! Nothing here is required: a completely empty payload is valid and every
//! missing field degrades to a default further down the pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The optional presentation block of a push payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A push payload as delivered by the provider.
///
/// `data` is an opaque key/value bag carried through to the displayed
/// notification verbatim; the worker only ever inspects the routing keys
/// (see [`RoutingData`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationContent>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub data: Map<String, Value>,
}

/// The routing-relevant subset of a payload's `data` bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutingData {
    pub notification_type: Option<String>,
    pub order_id: Option<String>,
    pub supplier_id: Option<String>,
}

impl RoutingData {
    /// Extract the routing keys from a data bag. Non-string values are
    /// treated as absent.
    pub fn from_data(data: &Map<String, Value>) -> Self {
        Self {
            notification_type: str_field(data, "type"),
            order_id: str_field(data, "orderId"),
            supplier_id: str_field(data, "supplierId"),
        }
    }

    /// A data bag carries navigation intent when it names a type or an order.
    /// Supplier id alone is not enough — it only ever rides along.
    pub fn is_routable(&self) -> bool {
        self.notification_type.is_some() || self.order_id.is_some()
    }
}

fn str_field(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_owned)
}
