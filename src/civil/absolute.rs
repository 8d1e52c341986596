/*!
The calendar engine.

Everything here operates on *absolute* time: unsigned seconds since the start
of [`ABSOLUTE_ZERO_YEAR`]. Because absolute time is never negative, every
division below rounds down and every remainder is non-negative without any
sign correction.

The calendar repeats exactly every 400 years (146,097 days, which is also a
whole number of weeks). The absolute zero year is `1 mod 400`, so each
400-year cycle starts right after a century leap year: its first leap year is
its 4th year, its first skipped leap year is its 100th year and its century
leap year is its 400th year.
*/

use crate::{
    civil::{Clock, Date, IsoWeek, Month, Weekday},
    util::{
        common::is_leap_year,
        t::{
            ABSOLUTE_ZERO_YEAR, DAYS_BEFORE, DAYS_PER_100_YEARS,
            DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, SECONDS_PER_DAY,
            SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK,
            UNIX_TO_ABSOLUTE,
        },
    },
};

const DAY: u64 = SECONDS_PER_DAY as u64;
const HOUR: u64 = SECONDS_PER_HOUR as u64;
const MINUTE: u64 = SECONDS_PER_MINUTE as u64;
const WEEK: u64 = SECONDS_PER_WEEK as u64;

/// Seconds since the start of the absolute zero year.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub(crate) struct Absolute(u64);

/// The result of [`Absolute::decompose`].
///
/// `month` and `day` are only present when a full date was requested.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Decomposed {
    pub(crate) year: i64,
    /// The 0-based day within `year`.
    pub(crate) year_day: i64,
    pub(crate) month: Option<Month>,
    pub(crate) day: Option<i8>,
}

impl Absolute {
    /// Converts Unix seconds, already shifted by a zone offset, to absolute
    /// time.
    ///
    /// This wraps for Unix seconds so large that the sum exceeds `i64`, in
    /// which case the result is meaningless but never a panic.
    #[inline]
    pub(crate) fn from_unix(unix: i64) -> Absolute {
        Absolute(unix.wrapping_add(UNIX_TO_ABSOLUTE) as u64)
    }

    #[inline]
    pub(crate) fn from_raw(seconds: u64) -> Absolute {
        Absolute(seconds)
    }

    #[inline]
    pub(crate) fn get(self) -> u64 {
        self.0
    }

    /// Splits this absolute time into a year and the 0-based day within that
    /// year. When `full` is true, the month and day of month are computed
    /// too.
    pub(crate) fn decompose(self, full: bool) -> Decomposed {
        let mut d = self.0 / DAY;

        // Account for 400 year cycles.
        let mut n = d / DAYS_PER_400_YEARS;
        let mut y = 400 * n;
        d -= DAYS_PER_400_YEARS * n;

        // Cut off 100-year cycles. The last cycle has one extra leap year,
        // so on the last day of that year, `d / DAYS_PER_100_YEARS` is 4
        // instead of 3. Cut it back down to 3 by subtracting `n >> 2`.
        n = d / DAYS_PER_100_YEARS;
        n -= n >> 2;
        y += 100 * n;
        d -= DAYS_PER_100_YEARS * n;

        // Cut off 4-year cycles. The last cycle has a missing leap year,
        // which does not affect the computation.
        n = d / DAYS_PER_4_YEARS;
        y += 4 * n;
        d -= DAYS_PER_4_YEARS * n;

        // Cut off years within a 4-year cycle. The last year is a leap
        // year, so on its last day `d / 365` is 4 instead of 3.
        n = d / 365;
        n -= n >> 2;
        y += n;
        d -= 365 * n;

        let year = (y as i64) + ABSOLUTE_ZERO_YEAR;
        let year_day = d as i64;
        let mut decomposed =
            Decomposed { year, year_day, month: None, day: None };
        if !full {
            return decomposed;
        }

        let mut day = year_day;
        if is_leap_year(year) {
            if day > 31 + 29 - 1 {
                // After the leap day, pretend it wasn't there.
                day -= 1;
            } else if day == 31 + 29 - 1 {
                decomposed.month = Some(Month::February);
                decomposed.day = Some(29);
                return decomposed;
            }
        }

        // Estimate the month assuming every month has 31 days. The estimate
        // may be too low by at most one month.
        let mut month = day / 31;
        let end = DAYS_BEFORE[month as usize + 1];
        let begin = if day >= end {
            month += 1;
            end
        } else {
            DAYS_BEFORE[month as usize]
        };
        decomposed.month = Some(Month::from_number_unchecked(month + 1));
        decomposed.day = Some((day - begin + 1) as i8);
        decomposed
    }

    /// Returns the year, month and day of this absolute time.
    pub(crate) fn date(self) -> Date {
        let d = self.decompose(true);
        // Both are always set when a full decomposition is requested.
        let month = d.month.unwrap_or(Month::January);
        let day = d.day.unwrap_or(1);
        Date::new_unchecked(d.year, month, day)
    }

    /// Returns the year of this absolute time.
    pub(crate) fn year(self) -> i64 {
        self.decompose(false).year
    }

    /// Returns the 1-based day of the year, in `1..=366`.
    pub(crate) fn year_day(self) -> i16 {
        (self.decompose(false).year_day + 1) as i16
    }

    /// Returns the day of the week.
    ///
    /// January 1 of the absolute zero year, like January 1 of 2001, was a
    /// Monday.
    pub(crate) fn weekday(self) -> Weekday {
        let monday = Weekday::Monday.to_sunday_zero_offset() as u64;
        let sec = (self.0 % WEEK + monday * DAY) % WEEK;
        Weekday::from_sunday_zero_offset_unchecked((sec / DAY) as i64)
    }

    /// Returns the ISO 8601 year and week number.
    ///
    /// The first week of an ISO year is the week that contains that year's
    /// first Thursday, where weeks start on Monday. So the ISO year of any
    /// day is the calendar year of the Thursday in the same week.
    pub(crate) fn iso_week(self) -> IsoWeek {
        // Monday Tuesday Wednesday Thursday Friday Saturday Sunday
        // +3     +2      +1        0        -1     -2       -3
        let thursday = Weekday::Thursday.to_sunday_zero_offset() as i64;
        let mut delta =
            thursday - self.weekday().to_sunday_zero_offset() as i64;
        if delta == 4 {
            // Sunday ends the ISO week, so its Thursday is behind it.
            delta = -3;
        }
        let abs = self.0.wrapping_add_signed(delta * SECONDS_PER_DAY);
        let d = Absolute(abs).decompose(false);
        IsoWeek::new_unchecked(d.year, (d.year_day / 7 + 1) as i8)
    }

    /// Returns the hour, minute and second within the day.
    pub(crate) fn clock(self) -> Clock {
        let mut sec = self.0 % DAY;
        let hour = sec / HOUR;
        sec -= hour * HOUR;
        let minute = sec / MINUTE;
        sec -= minute * MINUTE;
        Clock::new_unchecked(hour as i8, minute as i8, sec as i8)
    }

    pub(crate) fn hour(self) -> i8 {
        ((self.0 % DAY) / HOUR) as i8
    }

    pub(crate) fn minute(self) -> i8 {
        ((self.0 % HOUR) / MINUTE) as i8
    }

    pub(crate) fn second(self) -> i8 {
        (self.0 % MINUTE) as i8
    }
}

/// Returns the number of days from the start of the absolute zero year to
/// January 1 of `year`.
///
/// This is the inverse of the cycle peeling in [`Absolute::decompose`]. It
/// wraps for years before the absolute zero year.
pub(crate) fn days_since_epoch(year: i64) -> u64 {
    let mut y = year.wrapping_sub(ABSOLUTE_ZERO_YEAR) as u64;

    // Add in days from 400-year cycles.
    let mut n = y / 400;
    y -= 400 * n;
    let mut d = DAYS_PER_400_YEARS * n;

    // Add in 100-year cycles.
    n = y / 100;
    y -= 100 * n;
    d += DAYS_PER_100_YEARS * n;

    // Add in 4-year cycles.
    n = y / 4;
    y -= 4 * n;
    d += DAYS_PER_4_YEARS * n;

    // Add in non-leap years.
    d + 365 * y
}
