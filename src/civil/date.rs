use crate::{civil::Month, util::common};

/// A calendar date in the proleptic Gregorian calendar.
///
/// Values of this type are produced by decomposing an
/// [`Instant`](crate::Instant). They are always valid: the day exists in the
/// month and the month exists in the year. Years may be zero or negative,
/// where year `0` is 1 BCE.
///
/// # Example
///
/// ```
/// use nanotime::{civil::Month, Instant};
///
/// let date = Instant::from_unix(1221681866, 0).utc().date();
/// assert_eq!(date.year(), 2008);
/// assert_eq!(date.month(), Month::September);
/// assert_eq!(date.day(), 17);
/// assert_eq!(date.to_string(), "2008-09-17");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Date {
    year: i64,
    month: Month,
    day: i8,
}

impl Date {
    #[inline]
    pub(crate) fn new_unchecked(year: i64, month: Month, day: i8) -> Date {
        debug_assert!((1..=31).contains(&day), "invalid day {day}");
        Date { year, month, day }
    }

    /// Returns the year of this date.
    #[inline]
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the month of this date.
    #[inline]
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the day of the month, starting at `1`.
    #[inline]
    pub fn day(self) -> i8 {
        self.day
    }

    /// Returns the number of days in the month of this date.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{civil, tz::Location, Instant};
    ///
    /// let utc = Location::utc();
    /// let t = Instant::from_calendar(civil::date(2000, 2, 1), &utc);
    /// assert_eq!(t.date().days_in_month(), 29);
    /// let t = Instant::from_calendar(civil::date(1900, 2, 1), &utc);
    /// assert_eq!(t.date().days_in_month(), 28);
    /// ```
    #[inline]
    pub fn days_in_month(self) -> i8 {
        common::days_in_month(self.year, i64::from(self.month.number())) as i8
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-{:02}-{:02}", self.month.number(), self.day)
    }
}

/// An ISO 8601 week-numbering year and week.
///
/// The ISO year may differ from the calendar year near its boundaries. For
/// example, January 1 2000 falls in week 52 of ISO year 1999.
///
/// # Example
///
/// ```
/// use nanotime::{civil, tz::Location, Instant};
///
/// let t = Instant::from_calendar(civil::date(2000, 1, 1), &Location::utc());
/// let week = t.iso_week();
/// assert_eq!((week.year(), week.week()), (1999, 52));
/// assert_eq!(week.to_string(), "1999-W52");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct IsoWeek {
    year: i64,
    week: i8,
}

impl IsoWeek {
    #[inline]
    pub(crate) fn new_unchecked(year: i64, week: i8) -> IsoWeek {
        debug_assert!((1..=53).contains(&week), "invalid ISO week {week}");
        IsoWeek { year, week }
    }

    /// Returns the ISO week-numbering year.
    #[inline]
    pub fn year(self) -> i64 {
        self.year
    }

    /// Returns the week number, in `1..=53`.
    #[inline]
    pub fn week(self) -> i8 {
        self.week
    }
}

impl core::fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-W{:02}", self.week)
    }
}

/// Writes a year padded to at least four digits, with a leading `-` for
/// negative years.
pub(crate) fn write_year(
    f: &mut core::fmt::Formatter,
    year: i64,
) -> core::fmt::Result {
    if year < 0 {
        f.write_str("-")?;
    }
    write!(f, "{:04}", year.unsigned_abs())
}
