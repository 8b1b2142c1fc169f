//! Scheduling primitives for time-driven behaviors.

mod timer;

pub use timer::{ScheduledTask, has_runtime};
