//! Payload-to-presentation mapping — builds the notification the host is
//! asked to display.

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::category::Category;
use crate::config::WorkerConfig;
use crate::payload::NotificationPayload;

/// Action id for the "open the app" notification button.
pub const ACTION_OPEN: &str = "open";
/// Action id for the "dismiss" notification button.
pub const ACTION_DISMISS: &str = "dismiss";

/// A button offered on a displayed notification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationAction {
    pub action: String,
    pub title: String,
}

/// Fully resolved description of one displayed notification.
///
/// `tag` is the notification identity — displaying a spec whose tag matches
/// a visible notification replaces it rather than adding a second one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationSpec {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub tag: String,
    pub data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub actions: Vec<NotificationAction>,
    pub require_interaction: bool,
    pub silent: bool,
    pub vibrate: Vec<u32>,
    /// Display time in epoch milliseconds.
    pub timestamp: i64,
}

/// Map a push payload to the notification to display.
///
/// Total and infallible: every missing or empty field degrades to a
/// configured fallback, so even `NotificationPayload::default()` produces a
/// valid spec. The `data` bag passes through verbatim for later routing.
pub fn map_to_presentation(config: &WorkerConfig, payload: &NotificationPayload) -> PresentationSpec {
    let content = payload.notification.as_ref();

    let title = content
        .and_then(|c| c.title.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or(&config.fallback_title)
        .to_owned();
    let body = content
        .and_then(|c| c.body.as_deref())
        .filter(|b| !b.is_empty())
        .unwrap_or(&config.fallback_body)
        .to_owned();

    let category = Category::from_type(
        payload.data.get("type").and_then(Value::as_str),
    );

    PresentationSpec {
        title,
        body,
        icon: category.icon().to_owned(),
        badge: config.badge.clone(),
        tag: category.tag().to_owned(),
        data: payload.data.clone(),
        image: content.and_then(|c| c.image.clone()),
        actions: vec![
            NotificationAction {
                action: ACTION_OPEN.into(),
                title: "Open Beacon".into(),
            },
            NotificationAction {
                action: ACTION_DISMISS.into(),
                title: "Dismiss".into(),
            },
        ],
        require_interaction: config.require_interaction,
        silent: config.silent,
        vibrate: config.vibrate.clone(),
        timestamp: Utc::now().timestamp_millis(),
    }
}
