use time::{Date, Duration, OffsetDateTime};
use time_tz::{ToTimezone, Tz, timezones};

/// Source of "today" for anchoring the plan.
pub trait Clock {
    fn today(&self) -> Date;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

/// Wall clock read in an IANA time zone.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    timezone: Option<&'static Tz>,
}

impl SystemClock {
    pub fn utc() -> Self {
        Self { timezone: None }
    }

    pub fn new(timezone: &str) -> littlespoon_shared::Result<Self> {
        if timezone.eq_ignore_ascii_case("UTC") {
            return Ok(Self::utc());
        }

        let Some(tz) = timezones::get_by_name(timezone) else {
            littlespoon_shared::bail!("unknown time zone `{}`", timezone);
        };

        Ok(Self { timezone: Some(tz) })
    }

    pub fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();

        match self.timezone {
            Some(tz) => now.to_timezone(tz),
            None => now,
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        self.now().date()
    }
}

/// Clock pinned to one day, for tests and replays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// Monday of the week `date` falls in.
pub fn week_start(date: Date) -> Date {
    let days_since_monday = date.weekday().number_days_from_monday();

    date.saturating_sub(Duration::days(days_since_monday.into()))
}
