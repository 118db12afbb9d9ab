//! Motion-permission state machine behind the single user-facing trigger.
//!
//! ```text
//! NotRequested --begin--> Pending --Granted--> Granted
//!      ^                     |----Denied---> Denied --begin--> Pending
//!      |                     |----Failed---> Failed --begin--> Pending
//!                            `--Unavailable--> Unsupported
//! ```

use crate::error::SensorError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PermissionStatus {
    #[default]
    NotRequested,
    Pending,
    Granted,
    Denied,
    Failed,
    /// No motion API at all; the scene simply runs windless.
    Unsupported,
}

/// Result of one permission request as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PermissionOutcome {
    Granted,
    Denied,
    Failed(String),
    Unavailable,
}

impl PermissionOutcome {
    pub fn into_result(self) -> Result<(), SensorError> {
        match self {
            Self::Granted => Ok(()),
            Self::Denied => Err(SensorError::PermissionDenied),
            Self::Failed(reason) => Err(SensorError::PermissionRequestFailed(reason)),
            Self::Unavailable => Err(SensorError::Unavailable),
        }
    }
}

pub const STATUS_IDLE: &str = "傾きを有効にする";
pub const STATUS_PENDING: &str = "確認中…";
pub const STATUS_GRANTED: &str = "許可OK";
pub const STATUS_DENIED: &str = "許可されませんでした";
pub const STATUS_FAILED: &str = "失敗しました";

#[derive(Clone, Debug, Default)]
pub struct PermissionGate {
    status: PermissionStatus,
}

impl PermissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PermissionStatus {
        self.status
    }

    /// Start a request from a user trigger. Returns false, and changes
    /// nothing, when a request is in flight or already settled for good.
    pub fn begin(&mut self) -> bool {
        match self.status {
            PermissionStatus::NotRequested | PermissionStatus::Denied | PermissionStatus::Failed => {
                self.transition(PermissionStatus::Pending);
                true
            }
            _ => false,
        }
    }

    /// Settle the in-flight request. Ignored unless a request is pending.
    pub fn resolve(&mut self, outcome: PermissionOutcome) -> PermissionStatus {
        if self.status != PermissionStatus::Pending {
            log::debug!("[permission] ignoring {:?} while {:?}", outcome, self.status);
            return self.status;
        }
        let next = match outcome.into_result() {
            Ok(()) => PermissionStatus::Granted,
            Err(SensorError::PermissionDenied) => PermissionStatus::Denied,
            Err(SensorError::Unavailable) => PermissionStatus::Unsupported,
            Err(e) => {
                log::warn!("[permission] {e}");
                PermissionStatus::Failed
            }
        };
        self.transition(next);
        next
    }

    /// Whether samples should be subscribed to.
    pub fn is_streaming(&self) -> bool {
        self.status == PermissionStatus::Granted
    }

    pub fn trigger_enabled(&self) -> bool {
        !matches!(
            self.status,
            PermissionStatus::Pending | PermissionStatus::Granted | PermissionStatus::Unsupported
        )
    }

    pub fn status_text(&self) -> &'static str {
        match self.status {
            PermissionStatus::NotRequested | PermissionStatus::Unsupported => STATUS_IDLE,
            PermissionStatus::Pending => STATUS_PENDING,
            PermissionStatus::Granted => STATUS_GRANTED,
            PermissionStatus::Denied => STATUS_DENIED,
            PermissionStatus::Failed => STATUS_FAILED,
        }
    }

    fn transition(&mut self, next: PermissionStatus) {
        log::debug!("[permission] {:?} -> {:?}", self.status, next);
        self.status = next;
    }
}
