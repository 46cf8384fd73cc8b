//! Worker activation lifecycle — installing → waiting → active.
//!
//! A new worker version skips the normal waiting hold so it takes effect
//! without every existing window closing first, then claims all open windows
//! on activation so none keep routing through a stale version.

use color_eyre::Result;
use serde::Deserialize;

use crate::host::Host;

/// Activation phase of a worker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Installing,
    Waiting,
    Active,
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Installing => write!(f, "installing"),
            Self::Waiting => write!(f, "waiting"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// Control message delivered over the host's generic message channel.
///
/// One recognized command; everything else deserializes to `Unknown` and is
/// ignored rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ControlMessage {
    #[serde(rename = "SKIP_WAITING")]
    SkipWaiting,
    #[serde(other)]
    Unknown,
}

/// Tracks the worker's activation phase and drives host transitions.
#[derive(Debug)]
pub struct LifecycleController {
    phase: LifecyclePhase,
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new()
    }
}

impl LifecycleController {
    pub fn new() -> Self {
        Self {
            phase: LifecyclePhase::Installing,
        }
    }

    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Install: request immediate promotion, skipping the waiting hold.
    pub async fn on_install(&mut self, host: &dyn Host) -> Result<()> {
        host.skip_waiting().await?;
        self.phase = LifecyclePhase::Waiting;
        Ok(())
    }

    /// Activate: claim every open window so it routes through this version.
    pub async fn on_activate(&mut self, host: &dyn Host) -> Result<()> {
        host.claim_windows().await?;
        self.phase = LifecyclePhase::Active;
        Ok(())
    }

    /// A skip-wait command forces the pending promotion if the worker is
    /// somehow still short of active.
    pub async fn on_skip_waiting(&mut self, host: &dyn Host) -> Result<()> {
        if self.phase != LifecyclePhase::Active {
            host.skip_waiting().await?;
        }
        Ok(())
    }
}
