use super::error::SpiroError;
use std::time::{Duration, Instant};

/*
 * Timer
 * the animator re-arms exactly one single-shot timer per tick, the host
 * decides how the delay is waited for.
 */
pub trait Timer {
    fn schedule_once(&mut self, delay: Duration) -> Result<(), SpiroError>;
}

/*
 * Deadline
 * Single-shot timer polled by the host loop. Scheduling again replaces the
 * pending deadline.
 */
#[derive(Debug, Default)]
pub struct Deadline {
    next: Option<Instant>,
}

impl Deadline {
    pub fn new() -> Deadline {
        Deadline { next: None }
    }

    pub fn is_pending(&self) -> bool {
        self.next.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next.map_or(false, |next| now >= next)
    }

    /// Disarms the deadline and returns true if it was due.
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.next = None;
            true
        } else {
            false
        }
    }

    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }

    pub fn schedule_at(&mut self, now: Instant, delay: Duration) -> Result<(), SpiroError> {
        let next = now
            .checked_add(delay)
            .ok_or(SpiroError::TimerRearm("deadline is out of the clock range"))?;
        self.next = Some(next);
        Ok(())
    }
}

impl Timer for Deadline {
    fn schedule_once(&mut self, delay: Duration) -> Result<(), SpiroError> {
        self.schedule_at(Instant::now(), delay)
    }
}
