//! Outcome Observation
//!
//! Purge failures never reach the caller. Observers are where they become
//! visible.

use tracing::{debug, error, warn};

use crate::error::PurgeOutcome;
use crate::request::PurgeAction;

pub trait OutcomeObserver: Send + Sync {
    fn record(&self, action: &PurgeAction, outcome: &PurgeOutcome);
}

/// Default observer: logs every outcome, louder for failures
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl OutcomeObserver for TracingObserver {
    fn record(&self, action: &PurgeAction, outcome: &PurgeOutcome) {
        match outcome {
            PurgeOutcome::Success(200) => debug!(action = %action, "Bunny request succeeded"),
            PurgeOutcome::Success(status) => {
                warn!(action = %action, status = *status, "Bunny request returned non-200 status")
            }
            PurgeOutcome::TransportFailure(cause) => {
                error!(action = %action, error = %cause, "Bunny request failed")
            }
            PurgeOutcome::NoResponse => error!(action = %action, "No response from Bunny API"),
        }
    }
}
