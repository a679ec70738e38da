//! Scheduler engine — the periodic loop that decides which command to send.
//!
//! Each configured action carries its own [`Cooldown`]; one extra spacing
//! cooldown enforces a minimum gap between any two dispatched commands, so
//! the game never sees two commands back to back even when several action
//! cooldowns come ready at once.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, mpsc};

use feltbot_core::{BotConfig, Dispatch};

use crate::cooldown::Cooldown;

struct ActionTimer {
    id: String,
    cooldown: Cooldown,
}

/// Owns every cooldown and decides, tick by tick, what to dispatch.
///
/// Actions are evaluated in declaration order; earlier entries win ties. At
/// most one action dispatches per tick. External corrections arrive through
/// [`Scheduler::resync`] only — the cooldown map is never exposed.
pub struct Scheduler {
    actions: Vec<ActionTimer>,
    spacing: Cooldown,
}

impl Scheduler {
    /// Create a scheduler from (action id, cooldown duration) pairs, in
    /// priority order, plus the minimum spacing between any two dispatches.
    pub fn new<I, S>(actions: I, spacing: Duration) -> Self
    where
        I: IntoIterator<Item = (S, Duration)>,
        S: Into<String>,
    {
        Self {
            actions: actions
                .into_iter()
                .map(|(id, duration)| ActionTimer {
                    id: id.into(),
                    cooldown: Cooldown::new(duration),
                })
                .collect(),
            spacing: Cooldown::new(spacing),
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(
            config
                .actions
                .iter()
                .map(|a| (a.id.clone(), Duration::from_secs(a.cooldown_secs))),
            Duration::from_secs(config.spacing_secs),
        )
    }

    /// Apply an authoritative resume time reported by the game for one
    /// action. Unknown ids are logged and ignored; the action set is fixed at
    /// construction.
    pub fn resync(&mut self, action_id: &str, resume_at: DateTime<Utc>) {
        match self.actions.iter_mut().find(|t| t.id == action_id) {
            Some(timer) => {
                tracing::debug!("Resyncing '{action_id}' to resume at {resume_at}");
                timer.cooldown.resync(resume_at);
            }
            None => {
                tracing::warn!("Resync for unconfigured action '{action_id}' ignored");
            }
        }
    }

    /// One evaluation pass: pick the first ready action, wait out whatever
    /// remains of the spacing cooldown, arm both cooldowns, and return the
    /// action to send. `None` when nothing is ready.
    ///
    /// The wait and the arming form one critical section — callers hold the
    /// scheduler lock across the whole call, so no second dispatch can begin
    /// before arming completes.
    pub async fn tick(&mut self) -> Option<Dispatch> {
        let index = self.actions.iter().position(|t| t.cooldown.is_ready())?;

        let gap = self.spacing.time_left();
        if !gap.is_zero() {
            tracing::debug!("Sleeping {}ms before sending a command", gap.as_millis());
            tokio::time::sleep(gap).await;
        }

        let timer = &mut self.actions[index];
        timer.cooldown.hit();
        self.spacing.hit();
        tracing::debug!(
            "Dispatching '{}', next eligible in {}s",
            timer.id,
            timer.cooldown.time_left().as_secs()
        );
        Some(Dispatch { action_id: timer.id.clone() })
    }

    /// Remaining wait for one action, mostly for status display.
    pub fn time_left(&self, action_id: &str) -> Option<Duration> {
        self.actions
            .iter()
            .find(|t| t.id == action_id)
            .map(|t| t.cooldown.time_left())
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }
}

/// Spawn the scheduler loop as a background tokio task. Each tick evaluates
/// readiness and forwards at most one [`Dispatch`] to the transport channel.
pub fn spawn_scheduler(
    scheduler: Arc<Mutex<Scheduler>>,
    dispatches: mpsc::Sender<Dispatch>,
    tick: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("Scheduler started (tick every {}ms)", tick.as_millis());
        let mut interval = tokio::time::interval(tick);
        loop {
            interval.tick().await;

            let dispatch = {
                let mut sched = scheduler.lock().await;
                sched.tick().await
            };

            if let Some(dispatch) = dispatch {
                tracing::info!("Executing {} task", dispatch.action_id);
                if dispatches.send(dispatch).await.is_err() {
                    tracing::info!("Dispatch channel closed, stopping scheduler");
                    break;
                }
            }
        }
    })
}
