//! # feltbot Scheduler
//!
//! Cooldown-gated command scheduling.
//!
//! ## Architecture
//! ```text
//! Scheduler (tokio interval, 1s tick)
//!   ├── $work    Cooldown(305s)   ─┐ first ready action in
//!   ├── $slut    Cooldown(785s)   ─┤ declaration order wins,
//!   ├── $crime   Cooldown(1205s)  ─┤ deposit sweep last
//!   ├── $dep all Cooldown(1800s)  ─┘
//!   ├── spacing  Cooldown(6s)      gap between ANY two sends
//!   └── on dispatch → mpsc → transport collaborator
//!
//! CooldownReset event → Scheduler::resync (out-of-band correction)
//! ```
//!
//! The tick loop is the sole dispatch decision maker; `resync` competes for
//! the same lock, so every `ready_at` write is atomic with respect to it.

pub mod cooldown;
pub mod engine;

pub use cooldown::Cooldown;
pub use engine::{Scheduler, spawn_scheduler};
