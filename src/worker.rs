//! Notification worker — the event-driven core tying the mapper, router,
//! and lifecycle controller together.
//!
//! The worker runs a `tokio::select!` loop over incoming events and a
//! cancellation token. One event is handled to completion (all host calls
//! awaited) before the next is taken, so the host never tears the worker
//! down mid-operation. Failures are terminal-but-local: a failed event is
//! logged and the next event starts clean.

use std::sync::Arc;

use color_eyre::Result;
use tokio::sync::mpsc::Receiver;
use tokio_util::sync::CancellationToken;

use crate::config::WorkerConfig;
use crate::host::Host;
use crate::lifecycle::{ControlMessage, LifecycleController, LifecyclePhase};
use crate::payload::NotificationPayload;
use crate::presentation::map_to_presentation;
use crate::router::{self, InteractionAction, InteractionEvent, RouteAction};

/// An event dispatched to the worker by its host.
#[derive(Debug)]
pub enum WorkerEvent {
    /// Worker version is being installed.
    Install,
    /// Worker version is being activated.
    Activate,
    /// A push payload arrived from the provider.
    Push(NotificationPayload),
    /// The user interacted with a displayed notification.
    Interaction(InteractionEvent),
    /// A generic control message from a window.
    Control(ControlMessage),
}

/// The notification worker. Holds no durable state — every notification and
/// routing decision is derived fresh from its triggering event, so the host
/// may tear down an idle instance at any point between events.
pub struct NotificationWorker {
    id: String,
    config: WorkerConfig,
    host: Arc<dyn Host>,
    lifecycle: LifecycleController,
}

impl NotificationWorker {
    pub fn new(config: WorkerConfig, host: Arc<dyn Host>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            config,
            host,
            lifecycle: LifecycleController::new(),
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.lifecycle.phase()
    }

    /// Run the event loop until `cancel` fires or the sender side closes.
    pub async fn run(mut self, mut events: Receiver<WorkerEvent>, cancel: CancellationToken) {
        eprintln!(
            "[worker] instance {} starting (origin {})",
            self.id, self.config.origin
        );

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    eprintln!("[worker] instance {} shutting down", self.id);
                    break;
                }
                event = events.recv() => match event {
                    Some(event) => self.dispatch(event).await,
                    None => break,
                }
            }
        }
    }

    /// Handle one event, swallowing its failure so the next event is
    /// unaffected. There is no return channel to the push provider, so
    /// logging is all the reporting there is.
    pub async fn dispatch(&mut self, event: WorkerEvent) {
        let outcome = match event {
            WorkerEvent::Install => self.lifecycle.on_install(self.host.as_ref()).await,
            WorkerEvent::Activate => self.lifecycle.on_activate(self.host.as_ref()).await,
            WorkerEvent::Push(payload) => self.handle_push(&payload).await,
            WorkerEvent::Interaction(event) => self.handle_interaction(&event).await,
            WorkerEvent::Control(message) => self.handle_control(&message).await,
        };

        if let Err(e) = outcome {
            eprintln!("[worker] event failed: {e}");
        }
    }

    /// Map an incoming push payload and ask the host to display it. A
    /// visible notification with the same tag is replaced.
    pub async fn handle_push(&self, payload: &NotificationPayload) -> Result<()> {
        let spec = map_to_presentation(&self.config, payload);
        eprintln!("[worker] push -> tag {}", spec.tag);
        self.host.show_notification(&spec.title, &spec).await
    }

    /// Route a user interaction: close the notification, then message/focus
    /// an existing window at our origin or open a new one.
    pub async fn handle_interaction(&self, event: &InteractionEvent) -> Result<()> {
        // The notification never outlives an interaction, dismiss included.
        if let Err(e) = self.host.close_notification(&event.tag).await {
            eprintln!("[worker] close {} failed: {e}", event.tag);
        }

        if event.action() == InteractionAction::Dismiss {
            return Ok(());
        }

        let windows = match self.host.match_all_windows(true).await {
            Ok(windows) => windows,
            Err(e) => {
                // Best effort: with no durable record of the pending
                // navigation there is nothing to recover from.
                eprintln!("[worker] window enumeration failed: {e}");
                return Ok(());
            }
        };

        match router::decide(&self.config.origin, &windows, event) {
            RouteAction::Dismissed => Ok(()),
            RouteAction::Deliver { window, message } => {
                if let Some(message) = &message {
                    if let Err(e) = self.host.post_message(&window, message).await {
                        eprintln!("[worker] post to {:?} failed: {e}", window);
                    }
                }
                // The window may have closed since enumeration; a failed
                // focus on a stale handle is a no-op, not fatal.
                if let Err(e) = self.host.focus(&window).await {
                    eprintln!("[worker] focus {:?} failed: {e}", window);
                }
                Ok(())
            }
            RouteAction::OpenWindow { url } => {
                eprintln!("[worker] no window at {}, opening {url}", self.config.origin);
                self.host.open_window(&url).await
            }
        }
    }

    /// Honor recognized control commands; ignore everything else.
    pub async fn handle_control(&mut self, message: &ControlMessage) -> Result<()> {
        match message {
            ControlMessage::SkipWaiting => self.lifecycle.on_skip_waiting(self.host.as_ref()).await,
            ControlMessage::Unknown => Ok(()),
        }
    }
}
