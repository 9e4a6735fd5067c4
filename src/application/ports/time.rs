// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the current instant. Injected so tests can freeze or step time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
