//! Beacon — push-notification worker core and native dial bridge.
//!
//! The worker receives push payloads in a detached execution context, maps
//! them to displayed notifications, and routes user interactions back to an
//! existing application window (or opens a new one). The dial bridge is an
//! unrelated synchronous method channel that opens the platform phone dialer.

pub mod category;
pub mod config;
pub mod dial;
pub mod host;
pub mod lifecycle;
pub mod payload;
pub mod presentation;
pub mod router;
pub mod worker;
