use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// A value that falls on a civil day.
///
/// Plan commands address a day by its calendar date only, so a morning and
/// an evening timestamp of the same day select the same entry.
pub trait CalendarDay {
    fn calendar_day(&self) -> Date;

    fn is_same_day(&self, other: &impl CalendarDay) -> bool {
        self.calendar_day() == other.calendar_day()
    }
}

impl CalendarDay for Date {
    fn calendar_day(&self) -> Date {
        *self
    }
}

impl CalendarDay for PrimitiveDateTime {
    fn calendar_day(&self) -> Date {
        self.date()
    }
}

impl CalendarDay for OffsetDateTime {
    fn calendar_day(&self) -> Date {
        self.date()
    }
}

impl<T: CalendarDay> CalendarDay for &T {
    fn calendar_day(&self) -> Date {
        (*self).calendar_day()
    }
}
