use crate::server::{
    error::{booking::BookingError, AppError},
    model::auth::Principal,
    util::clock::FixedClock,
};
use chrono::{NaiveDate, NaiveDateTime};
use test_utils::{builder::TestBuilder, factory};

mod auth;
mod availability;
mod schedule;

/// 2030-01-07, a Monday (weekday 1).
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 7).unwrap()
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

/// Clock frozen at the given time on `date`.
fn clock_at(date: NaiveDate, hour: u32, minute: u32) -> FixedClock {
    FixedClock(at(date, hour, minute))
}

/// Clock frozen well before every date used in the tests.
fn early_clock() -> FixedClock {
    clock_at(NaiveDate::from_ymd_opt(2029, 12, 1).unwrap(), 8, 0)
}

fn user(subject: &str) -> Principal {
    Principal::new(subject, vec!["club-user".to_string()])
}
