use std::fmt::Debug;

use minimize_core::Observer;
use tracing::{Level, debug, error, info, trace, warn};

/// Forwards every event to `tracing` and never acts.
///
/// Events are logged with their `Debug` representation at the configured
/// level, tagged with a label so interleaved searches can be told apart.
/// With the workspace's `release_max_level_warn` feature, levels below
/// `WARN` are compiled out of release builds.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    label: &'static str,
    level: Level,
}

impl TraceObserver {
    /// Creates an observer that logs at `DEBUG`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            level: Level::DEBUG,
        }
    }

    /// Returns a copy that logs at `level`.
    #[must_use]
    pub fn at_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    /// Returns the label attached to every record.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<E: Debug, A> Observer<E, A> for TraceObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let label = self.label;
        if self.level == Level::ERROR {
            error!(label, ?event, "solver event");
        } else if self.level == Level::WARN {
            warn!(label, ?event, "solver event");
        } else if self.level == Level::INFO {
            info!(label, ?event, "solver event");
        } else if self.level == Level::DEBUG {
            debug!(label, ?event, "solver event");
        } else {
            trace!(label, ?event, "solver event");
        }
        None
    }
}
