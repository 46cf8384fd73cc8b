//! Integration tests for worker lifecycle transitions and the event loop.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use color_eyre::Result;
use serde_json::json;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use beacon::config::WorkerConfig;
use beacon::host::{ClickMessage, ClientWindow, Host, WindowId};
use beacon::lifecycle::{ControlMessage, LifecyclePhase};
use beacon::presentation::PresentationSpec;
use beacon::worker::{NotificationWorker, WorkerEvent};

/// Minimal recording host: call names only, plus a switch to make
/// notification display fail.
struct MockHost {
    calls: Mutex<Vec<String>>,
    fail_show: bool,
}

impl MockHost {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_show: false,
        })
    }

    fn failing_show() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_show: true,
        })
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.into());
    }
}

#[async_trait]
impl Host for MockHost {
    async fn show_notification(&self, _title: &str, _spec: &PresentationSpec) -> Result<()> {
        self.record("show");
        if self.fail_show {
            color_eyre::eyre::bail!("display rejected");
        }
        Ok(())
    }

    async fn close_notification(&self, _tag: &str) -> Result<()> {
        self.record("close");
        Ok(())
    }

    async fn match_all_windows(&self, _include_uncontrolled: bool) -> Result<Vec<ClientWindow>> {
        self.record("match_all");
        Ok(Vec::new())
    }

    async fn focus(&self, _window: &WindowId) -> Result<()> {
        self.record("focus");
        Ok(())
    }

    async fn open_window(&self, _url: &str) -> Result<()> {
        self.record("open");
        Ok(())
    }

    async fn post_message(&self, _window: &WindowId, _message: &ClickMessage) -> Result<()> {
        self.record("post");
        Ok(())
    }

    async fn skip_waiting(&self) -> Result<()> {
        self.record("skip_waiting");
        Ok(())
    }

    async fn claim_windows(&self) -> Result<()> {
        self.record("claim_windows");
        Ok(())
    }
}

#[tokio::test]
async fn install_requests_immediate_promotion() {
    let host = MockHost::new();
    let mut worker = NotificationWorker::new(WorkerConfig::default(), host.clone());
    assert_eq!(worker.phase(), LifecyclePhase::Installing);

    worker.dispatch(WorkerEvent::Install).await;
    assert_eq!(worker.phase(), LifecyclePhase::Waiting);
    assert_eq!(host.calls(), vec!["skip_waiting"]);
}

#[tokio::test]
async fn activate_claims_open_windows() {
    let host = MockHost::new();
    let mut worker = NotificationWorker::new(WorkerConfig::default(), host.clone());

    worker.dispatch(WorkerEvent::Install).await;
    worker.dispatch(WorkerEvent::Activate).await;

    assert_eq!(worker.phase(), LifecyclePhase::Active);
    assert_eq!(host.calls(), vec!["skip_waiting", "claim_windows"]);
}

#[tokio::test]
async fn skip_waiting_command_honored_while_pending() {
    let host = MockHost::new();
    let mut worker = NotificationWorker::new(WorkerConfig::default(), host.clone());
    worker.dispatch(WorkerEvent::Install).await;

    worker
        .dispatch(WorkerEvent::Control(ControlMessage::SkipWaiting))
        .await;

    assert_eq!(host.calls(), vec!["skip_waiting", "skip_waiting"]);
}

#[tokio::test]
async fn skip_waiting_command_is_a_noop_once_active() {
    let host = MockHost::new();
    let mut worker = NotificationWorker::new(WorkerConfig::default(), host.clone());
    worker.dispatch(WorkerEvent::Install).await;
    worker.dispatch(WorkerEvent::Activate).await;

    worker
        .dispatch(WorkerEvent::Control(ControlMessage::SkipWaiting))
        .await;

    assert_eq!(host.calls(), vec!["skip_waiting", "claim_windows"]);
}

#[tokio::test]
async fn unknown_control_messages_are_ignored() {
    let host = MockHost::new();
    let mut worker = NotificationWorker::new(WorkerConfig::default(), host.clone());

    let message: ControlMessage = serde_json::from_value(json!({"type": "PING"})).unwrap();
    worker.dispatch(WorkerEvent::Control(message)).await;

    assert!(host.calls().is_empty());
}

#[tokio::test]
async fn run_loop_processes_queued_events_then_stops() {
    let host = MockHost::new();
    let worker = NotificationWorker::new(WorkerConfig::default(), host.clone());

    let (tx, rx) = mpsc::channel(8);
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(worker.run(rx, cancel));

    tx.send(WorkerEvent::Install).await.unwrap();
    tx.send(WorkerEvent::Activate).await.unwrap();
    tx.send(WorkerEvent::Push(
        serde_json::from_value(json!({"data": {"type": "order"}})).unwrap(),
    ))
    .await
    .unwrap();

    // Closing the sender drains the queue and stops the loop.
    drop(tx);
    handle.await.unwrap();

    assert_eq!(host.calls(), vec!["skip_waiting", "claim_windows", "show"]);
}

#[tokio::test]
async fn failed_event_does_not_poison_the_next() {
    let host = MockHost::failing_show();
    let mut worker = NotificationWorker::new(WorkerConfig::default(), host.clone());

    let payload = serde_json::from_value(json!({"data": {"type": "order"}})).unwrap();
    worker.dispatch(WorkerEvent::Push(payload)).await;

    // The display failure was swallowed; an interaction still routes.
    worker
        .dispatch(WorkerEvent::Interaction(serde_json::from_value(
            json!({"action": "", "tag": "beacon-order", "data": {}}),
        )
        .unwrap()))
        .await;

    assert_eq!(host.calls(), vec!["show", "close", "match_all", "open"]);
}
