use crate::domain::ports::Clock;
use chrono::{Local, NaiveDate};

/// Today's date in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day. Used for `--today` and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Pins the date when one is given, otherwise follows the system clock.
#[derive(Debug, Clone, Copy)]
pub enum AnyClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl AnyClock {
    pub fn from_option(today: Option<NaiveDate>) -> Self {
        match today {
            Some(date) => AnyClock::Fixed(FixedClock(date)),
            None => AnyClock::System(SystemClock),
        }
    }
}

impl Clock for AnyClock {
    fn today(&self) -> NaiveDate {
        match self {
            AnyClock::System(clock) => clock.today(),
            AnyClock::Fixed(clock) => clock.today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_pinned() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(AnyClock::from_option(Some(date)).today(), date);
    }

    #[test]
    fn system_clock_is_close_to_now() {
        let today = AnyClock::from_option(None).today();
        let utc = chrono::Utc::now().date_naive();
        assert!((today - utc).num_days().abs() <= 1);
    }
}
