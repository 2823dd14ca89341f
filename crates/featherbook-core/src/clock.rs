//! Wall-clock access for the engines.
//!
//! Engines compute elapsed time and deadlines from epoch milliseconds.
//! Every public command that depends on time has a `*_at(now_ms)` variant
//! so tests and simulations can drive a synthetic clock.

pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
