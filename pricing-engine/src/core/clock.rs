//! Clock abstraction
//!
//! Promotion validity and discounts depend on the current instant. The
//! instant is always injected so evaluation stays deterministic.

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Supplier of the current local date-time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the business timezone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.tz).naive_local()
    }
}

/// Clock frozen at a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock() {
        let instant = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_uses_timezone() {
        let utc = SystemClock::default();
        let madrid = SystemClock::new(chrono_tz::Europe::Madrid);
        assert_eq!(madrid.timezone(), chrono_tz::Europe::Madrid);

        // Madrid is always ahead of UTC (+1h or +2h)
        let diff = madrid.now() - utc.now();
        assert!(diff.num_minutes() >= 59 && diff.num_minutes() <= 121);
    }
}
