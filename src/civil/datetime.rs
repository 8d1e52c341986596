use crate::{
    civil::absolute::days_since_epoch,
    util::{
        common::{is_leap_year, norm},
        t::{
            ABSOLUTE_TO_UNIX, DAYS_BEFORE, NANOS_PER_SECOND, SECONDS_PER_DAY,
            SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
        },
    },
};

/// A set of calendar fields naming a wall clock time in some location.
///
/// This is the input to [`Instant::from_calendar`](crate::Instant::from_calendar).
/// Fields are not required to be in their usual ranges. Out-of-range values
/// are carried into the next larger unit when the fields are resolved, so
/// month `13` is January of the next year, October 32 is November 1 and an
/// hour of `-1` is 23:00 on the previous day.
///
/// The simplest way to build one is with [`datetime`] or [`date`].
///
/// # Example
///
/// ```
/// use nanotime::{civil, tz::Location, Instant};
///
/// let fields = civil::datetime(2009, 11, 10, 23, 0, 0, 0);
/// let t = Instant::from_calendar(fields, &Location::utc());
/// assert_eq!(t.to_string(), "2009-11-10 23:00:00 +0000 UTC");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateTime {
    pub year: i64,
    /// The 1-based month.
    pub month: i64,
    /// The 1-based day of the month.
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub nanosecond: i64,
}

/// Creates calendar fields from each of their parts.
///
/// No validation is performed. See [`DateTime`] for how out-of-range parts
/// are resolved.
#[inline]
pub const fn datetime(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
    nanosecond: i64,
) -> DateTime {
    DateTime { year, month, day, hour, minute, second, nanosecond }
}

/// Creates calendar fields for midnight at the start of the given day.
#[inline]
pub const fn date(year: i64, month: i64, day: i64) -> DateTime {
    datetime(year, month, day, 0, 0, 0, 0)
}

impl DateTime {
    /// Normalizes every field and returns the number of seconds from the
    /// Unix epoch to these fields read as a UTC wall clock, along with the
    /// nanosecond of that second.
    ///
    /// The caller is responsible for subtracting the zone offset. Values
    /// far outside the representable range wrap rather than panic.
    pub(crate) fn to_wall_unix(self) -> (i64, i64) {
        // Normalize the month into the year first, since the number of days
        // in a month depends on the year.
        let (year, month0) = norm(self.year, self.month.wrapping_sub(1), 12);
        let month = month0 + 1;

        let (second, nanosecond) =
            norm(self.second, self.nanosecond, NANOS_PER_SECOND);
        let (minute, second) = norm(self.minute, second, SECONDS_PER_MINUTE);
        let (hour, minute) = norm(self.hour, minute, 60);
        let (day, hour) = norm(self.day, hour, 24);

        let mut days = days_since_epoch(year);
        days = days.wrapping_add(DAYS_BEFORE[month0 as usize] as u64);
        if is_leap_year(year) && month >= 3 {
            days = days.wrapping_add(1);
        }
        days = days.wrapping_add(day.wrapping_sub(1) as u64);

        let abs = days
            .wrapping_mul(SECONDS_PER_DAY as u64)
            .wrapping_add(
                (hour * SECONDS_PER_HOUR
                    + minute * SECONDS_PER_MINUTE
                    + second) as u64,
            );
        ((abs as i64).wrapping_add(ABSOLUTE_TO_UNIX), nanosecond)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(date(1970, 1, 1).to_wall_unix(), (0, 0));
        assert_eq!(datetime(1970, 1, 1, 0, 0, 1, 5).to_wall_unix(), (1, 5));
    }

    #[test]
    fn known_values() {
        let fields = datetime(2008, 9, 17, 20, 4, 26, 0);
        assert_eq!(fields.to_wall_unix(), (1221681866, 0));
        let fields = datetime(1931, 4, 16, 3, 55, 34, 0);
        assert_eq!(fields.to_wall_unix(), (-1221681866, 0));
        assert_eq!(date(1601, 1, 1).to_wall_unix(), (-11644473600, 0));
    }

    #[test]
    fn month_overflow_carries_into_year() {
        assert_eq!(
            date(2023, 13, 1).to_wall_unix(),
            date(2024, 1, 1).to_wall_unix(),
        );
        assert_eq!(
            date(2024, 0, 1).to_wall_unix(),
            date(2023, 12, 1).to_wall_unix(),
        );
        assert_eq!(
            date(2024, -11, 1).to_wall_unix(),
            date(2023, 1, 1).to_wall_unix(),
        );
    }

    #[test]
    fn day_overflow_carries_into_month() {
        assert_eq!(
            date(2024, 1, 32).to_wall_unix(),
            date(2024, 2, 1).to_wall_unix(),
        );
        assert_eq!(
            date(2023, 2, 29).to_wall_unix(),
            date(2023, 3, 1).to_wall_unix(),
        );
        assert_eq!(
            date(2024, 3, 0).to_wall_unix(),
            date(2024, 2, 29).to_wall_unix(),
        );
    }

    #[test]
    fn clock_overflow_carries_into_day() {
        assert_eq!(
            datetime(2024, 1, 1, 24, 0, 0, 0).to_wall_unix(),
            date(2024, 1, 2).to_wall_unix(),
        );
        assert_eq!(
            datetime(2024, 1, 1, 0, 0, 0, -1).to_wall_unix(),
            datetime(2023, 12, 31, 23, 59, 59, 999_999_999).to_wall_unix(),
        );
        assert_eq!(
            datetime(2024, 1, 1, 0, 90, 0, 0).to_wall_unix(),
            datetime(2024, 1, 1, 1, 30, 0, 0).to_wall_unix(),
        );
        assert_eq!(
            datetime(2024, 1, 1, 0, 0, 0, 2_500_000_000).to_wall_unix(),
            datetime(2024, 1, 1, 0, 0, 2, 500_000_000).to_wall_unix(),
        );
    }
}
