use crate::application::{dto::HealthDto, ports::time::Clock};
use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

/// Answers liveness probes.
///
/// Timestamps are read from the clock on every call and never repeat: if the
/// wall clock has not advanced (or went backwards) since the previous probe,
/// the previous value plus one millisecond is issued instead.
pub struct HealthService {
    clock: Arc<dyn Clock>,
    last_ts: AtomicI64,
}

impl HealthService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            last_ts: AtomicI64::new(i64::MIN),
        }
    }

    pub fn check(&self) -> HealthDto {
        let now = self.clock.now().timestamp_millis();
        let next = |last: i64| now.max(last.saturating_add(1));
        let previous = self
            .last_ts
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(next(last)))
            .unwrap_or_else(|last| last);

        HealthDto {
            ok: true,
            ts: next(previous),
        }
    }
}
