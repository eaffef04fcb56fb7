use chrono::{DateTime, NaiveDate, Utc};

/// Time source for services and tests.
///
/// Schedule and dashboard views derive "today" from this clock, so a fixed clock
/// makes deadline countdowns reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns a clock fixed at midnight UTC of the given calendar day.
    #[must_use]
    pub fn on_date(date: NaiveDate) -> Self {
        Self::Fixed(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Calendar day (UTC) according to the clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Clock::Fixed(_))
    }
}

/// Deterministic timestamp for tests (2024-07-18T08:00:00Z), the "today" of the
/// bundled schedule fixtures.
pub const FIXED_TEST_TIMESTAMP: i64 = 1_721_289_600;

/// Returns a deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Calendar day of [`fixed_now`].
#[must_use]
pub fn fixed_today() -> NaiveDate {
    fixed_now().date_naive()
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_fixture_day() {
        let clock = fixed_clock();
        assert!(clock.is_fixed());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 7, 18).unwrap());
    }

    #[test]
    fn on_date_starts_at_midnight() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 25).unwrap();
        let clock = Clock::on_date(day);
        assert_eq!(clock.today(), day);
        assert_eq!(clock.now().timestamp() % 86_400, 0);
    }
}
