//! Host abstraction — the environment that displays notifications and owns
//! the set of open application windows.
//!
//! The worker never creates or destroys windows itself; it only enumerates
//! them and requests focus, navigation, or message delivery. Every method is
//! a suspension point and may fail if a window closed between enumeration
//! and use — callers treat those failures as no-ops.

use async_trait::async_trait;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::payload::RoutingData;
use crate::presentation::PresentationSpec;

/// Message type discriminator for notification-click messages posted to an
/// existing window.
pub const CLICK_MESSAGE_TYPE: &str = "notification_click";

/// Opaque focus handle for an open application window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

/// An open application window/tab as enumerated by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientWindow {
    pub id: WindowId,
    pub url: String,
}

/// Structured message posted to an existing window when a notification with
/// navigation data is activated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub notification_type: Option<String>,
    pub order_id: Option<String>,
    pub supplier_id: Option<String>,
    pub data: Map<String, Value>,
}

impl ClickMessage {
    /// Build a click message from the routing keys plus the full data bag.
    pub fn new(routing: &RoutingData, data: Map<String, Value>) -> Self {
        Self {
            kind: CLICK_MESSAGE_TYPE.into(),
            notification_type: routing.notification_type.clone(),
            order_id: routing.order_id.clone(),
            supplier_id: routing.supplier_id.clone(),
            data,
        }
    }
}

/// The host environment the worker runs inside.
///
/// Implementations wrap the platform's notification and window APIs; tests
/// substitute a recording mock.
#[async_trait]
pub trait Host: Send + Sync {
    /// Display a notification. A visible notification with the same
    /// `spec.tag` is replaced, not duplicated.
    async fn show_notification(&self, title: &str, spec: &PresentationSpec) -> Result<()>;

    /// Close the visible notification with the given tag, if any.
    async fn close_notification(&self, tag: &str) -> Result<()>;

    /// Enumerate open application windows, optionally including windows not
    /// yet controlled by this worker instance. Order is host-defined.
    async fn match_all_windows(&self, include_uncontrolled: bool) -> Result<Vec<ClientWindow>>;

    /// Bring a window to the foreground.
    async fn focus(&self, window: &WindowId) -> Result<()>;

    /// Open a new application window at the given URL.
    async fn open_window(&self, url: &str) -> Result<()>;

    /// Post a structured message to a window.
    async fn post_message(&self, window: &WindowId, message: &ClickMessage) -> Result<()>;

    /// Promote this worker version immediately instead of waiting for all
    /// existing windows to close.
    async fn skip_waiting(&self) -> Result<()>;

    /// Route all currently open windows through this worker version.
    async fn claim_windows(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_click_message_wire_shape() {
        let data = json!({"type": "order", "orderId": "123"})
            .as_object()
            .unwrap()
            .clone();
        let routing = RoutingData::from_data(&data);
        let message = ClickMessage::new(&routing, data);

        let wire = serde_json::to_value(&message).unwrap();
        assert_eq!(wire["type"], "notification_click");
        assert_eq!(wire["notificationType"], "order");
        assert_eq!(wire["orderId"], "123");
        assert_eq!(wire["supplierId"], Value::Null);
        assert_eq!(wire["data"]["orderId"], "123");
    }
}
