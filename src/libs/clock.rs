//! Calendar date source, swappable in tests.

use chrono::{Local, NaiveDate};
use parking_lot::Mutex;

/// Source of the current calendar date for the statistics session.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of this machine.
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a date until it is moved with [`FixedClock::set`].
pub struct FixedClock {
    date: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        FixedClock { date: Mutex::new(date) }
    }

    pub fn set(&self, date: NaiveDate) {
        *self.date.lock() = date;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        *self.date.lock()
    }
}
