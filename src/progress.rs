//! Progress Reporting
//!
//! A purge run reports `(completed, total, label)` checkpoints
//! synchronously. Hosts that want async delivery wrap their own reporter.

use tracing::info;

pub trait ProgressReporter: Send + Sync {
    fn report(&self, completed: usize, total: usize, label: &str);
}

/// Default reporter when the caller passes none
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _completed: usize, _total: usize, _label: &str) {}
}

/// Logs each checkpoint at INFO
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressReporter for LogProgress {
    fn report(&self, completed: usize, total: usize, label: &str) {
        info!(completed, total, "{}", label);
    }
}

impl<F> ProgressReporter for F
where
    F: Fn(usize, usize, &str) + Send + Sync,
{
    fn report(&self, completed: usize, total: usize, label: &str) {
        self(completed, total, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_reporter() {
        let seen = Mutex::new(Vec::new());
        let reporter = |completed: usize, total: usize, label: &str| {
            seen.lock().unwrap().push((completed, total, label.to_string()));
        };

        reporter.report(0, 3, "Purging 3 pages.");
        reporter.report(3, 3, "Purging 3 pages.");

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1], (3, 3, "Purging 3 pages.".to_string()));
    }

    #[test]
    fn test_no_progress_is_silent() {
        let reporter: &dyn ProgressReporter = &NoProgress;
        reporter.report(1, 1, "ignored");
    }
}
