//! Source of the current club-local wall-clock time.
//!
//! Reservation cutoffs compare requested slots against "now" in the club's local calendar.
//! Services read the time through the `Clock` trait so tests can pin it with `FixedClock`.

use chrono::{Local, NaiveDateTime};

pub trait Clock: Send + Sync {
    /// Current local date and time, without time zone.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the server's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
