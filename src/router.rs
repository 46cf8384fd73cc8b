//! Interaction routing decisions — pure logic for sending a notification
//! interaction to an existing window or opening a new one.

use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::host::{ClickMessage, ClientWindow, WindowId};
use crate::payload::RoutingData;

/// What the user did to a displayed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionAction {
    /// Open the app (explicit "open" action, the default body click, or any
    /// unrecognized action string).
    Activate,
    /// Explicit dismiss — terminal, no window work follows.
    Dismiss,
}

impl InteractionAction {
    /// Parse the host's action string. Only an explicit dismiss is terminal.
    pub fn parse(action: &str) -> Self {
        if action == "dismiss" {
            Self::Dismiss
        } else {
            Self::Activate
        }
    }
}

/// A user interaction with a displayed notification, as delivered by the
/// host. Consumed exactly once.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionEvent {
    #[serde(default)]
    pub action: String,

    /// Tag of the originating notification.
    #[serde(default)]
    pub tag: String,

    /// Data bag the notification was displayed with.
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl InteractionEvent {
    pub fn action(&self) -> InteractionAction {
        InteractionAction::parse(&self.action)
    }

    pub fn routing(&self) -> RoutingData {
        RoutingData::from_data(&self.data)
    }
}

/// Where an interaction should be delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteAction {
    /// Explicit dismiss — nothing beyond closing the notification.
    Dismissed,
    /// Message (when navigation data exists) and focus an existing window.
    Deliver {
        window: WindowId,
        message: Option<ClickMessage>,
    },
    /// No window at our origin — open a fresh one at `url`.
    OpenWindow { url: String },
}

/// Decide how to route an interaction given the host's window enumeration.
///
/// The first window (in host order) whose URL origin equals `origin` wins;
/// there is no tie-break beyond enumeration order. A matching window gets a
/// [`ClickMessage`] only when the data bag carries navigation intent,
/// otherwise it is focused bare.
pub fn decide(origin: &str, windows: &[ClientWindow], event: &InteractionEvent) -> RouteAction {
    if event.action() == InteractionAction::Dismiss {
        return RouteAction::Dismissed;
    }

    let routing = event.routing();

    if let Some(window) = windows.iter().find(|w| same_origin(origin, &w.url)) {
        let message = routing
            .is_routable()
            .then(|| ClickMessage::new(&routing, event.data.clone()));
        return RouteAction::Deliver {
            window: window.id.clone(),
            message,
        };
    }

    RouteAction::OpenWindow {
        url: target_url(&routing),
    }
}

/// Origin equality check. A window whose URL fails to parse never matches.
fn same_origin(origin: &str, window_url: &str) -> bool {
    let Ok(origin) = Url::parse(origin) else {
        return false;
    };
    let Ok(window) = Url::parse(window_url) else {
        return false;
    };
    window.origin() == origin.origin()
}

/// Build the navigation target for a fresh window: root path, plus the
/// routing keys as query parameters in fixed order when any are present.
pub fn target_url(routing: &RoutingData) -> String {
    if !routing.is_routable() {
        return "/".into();
    }

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(t) = &routing.notification_type {
        query.append_pair("notificationType", t);
    }
    if let Some(o) = &routing.order_id {
        query.append_pair("orderId", o);
    }
    if let Some(s) = &routing.supplier_id {
        query.append_pair("supplierId", s);
    }
    format!("/?{}", query.finish())
}
