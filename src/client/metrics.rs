// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::obs::{FlowKind, FlowOutcome};

/// Thread-safe counters for one kind of call.
#[derive(Debug, Default)]
pub struct FlowCounters {
	attempts: AtomicU64,
	success: AtomicU64,
	failure: AtomicU64,
}
impl FlowCounters {
	/// Returns the total number of attempts.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of successful calls.
	pub fn successes(&self) -> u64 {
		self.success.load(Ordering::Relaxed)
	}

	/// Returns the number of failed calls.
	pub fn failures(&self) -> u64 {
		self.failure.load(Ordering::Relaxed)
	}

	pub(crate) fn record(&self, outcome: FlowOutcome) {
		let counter = match outcome {
			FlowOutcome::Attempt => &self.attempts,
			FlowOutcome::Success => &self.success,
			FlowOutcome::Failure => &self.failure,
		};

		counter.fetch_add(1, Ordering::Relaxed);
	}
}

/// Per-client counters for login and refresh calls.
#[derive(Debug, Default)]
pub struct FlowMetrics {
	login: FlowCounters,
	refresh: FlowCounters,
}
impl FlowMetrics {
	/// Returns the counters for `kind`.
	pub fn counters(&self, kind: FlowKind) -> &FlowCounters {
		match kind {
			FlowKind::Login => &self.login,
			FlowKind::Refresh => &self.refresh,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn counters_are_tracked_per_flow() {
		let metrics = FlowMetrics::default();

		metrics.counters(FlowKind::Login).record(FlowOutcome::Attempt);
		metrics.counters(FlowKind::Login).record(FlowOutcome::Failure);
		metrics.counters(FlowKind::Refresh).record(FlowOutcome::Attempt);

		assert_eq!(metrics.counters(FlowKind::Login).attempts(), 1);
		assert_eq!(metrics.counters(FlowKind::Login).failures(), 1);
		assert_eq!(metrics.counters(FlowKind::Refresh).attempts(), 1);
		assert_eq!(metrics.counters(FlowKind::Refresh).successes(), 0);
	}
}
