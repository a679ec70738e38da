//! Cooldown — a minimum-time-between-activations timer.

use chrono::{DateTime, Duration, Utc};

/// A timer that is "cold" (not ready) until an absolute instant passes.
///
/// Holds a fixed duration and an optional `ready_at` instant. Unarmed means
/// ready; [`Cooldown::hit`] arms it for one duration from now;
/// [`Cooldown::resync`] overwrites `ready_at` with an externally supplied
/// authoritative time, which may run ahead of or behind the local estimate.
#[derive(Debug, Clone)]
pub struct Cooldown {
    duration: Duration,
    ready_at: Option<DateTime<Utc>>,
}

impl Cooldown {
    /// A cooldown that starts ready (never armed).
    pub fn new(duration: std::time::Duration) -> Self {
        Self {
            duration: Duration::from_std(duration).unwrap_or(Duration::MAX),
            ready_at: None,
        }
    }

    /// A cooldown whose first ready instant is already known.
    pub fn with_ready_at(duration: std::time::Duration, ready_at: DateTime<Utc>) -> Self {
        let mut cooldown = Self::new(duration);
        cooldown.ready_at = Some(ready_at);
        cooldown
    }

    /// Activate: ready again one duration from now.
    pub fn hit(&mut self) {
        self.ready_at = Some(Utc::now() + self.duration);
    }

    /// Overwrite `ready_at` with an authoritative external instant,
    /// unconditionally. A past timestamp makes the cooldown immediately ready.
    pub fn resync(&mut self, timestamp: DateTime<Utc>) {
        match self.ready_at {
            Some(current) => {
                let delta = timestamp - current;
                let direction = if delta > Duration::zero() { "longer" } else { "sooner" };
                tracing::debug!(
                    "Resyncing cooldown to {timestamp} ({}s {direction})",
                    delta.num_seconds().abs()
                );
            }
            None => {
                tracing::debug!("Setting unarmed cooldown to {timestamp}");
            }
        }
        self.ready_at = Some(timestamp);
    }

    /// True iff unarmed or the ready instant has passed.
    pub fn is_ready(&self) -> bool {
        match self.ready_at {
            Some(at) => Utc::now() >= at,
            None => true,
        }
    }

    /// Non-negative time remaining until ready.
    pub fn time_left(&self) -> std::time::Duration {
        match self.ready_at {
            Some(at) => (at - Utc::now()).to_std().unwrap_or_default(),
            None => std::time::Duration::ZERO,
        }
    }
}
