/*!
Calendar types and the engine that decomposes absolute time into them.

The types here are plain values. [`Date`], [`Clock`] and [`IsoWeek`] are
produced by querying an [`Instant`](crate::Instant), while [`DateTime`] is the
input used to build an instant from calendar fields.

All calendar computations use the proleptic Gregorian calendar and ignore
leap seconds.
*/

pub use self::{
    date::{Date, IsoWeek},
    datetime::{date, datetime, DateTime},
    month::Month,
    time::Clock,
    weekday::Weekday,
};

pub(crate) mod absolute;
mod date;
mod datetime;
mod month;
mod time;
mod weekday;

pub(crate) use self::date::write_year;

/// Returns a value that displays the English name of the month numbered
/// `number`.
///
/// Numbers outside `1..=12` display as `%!Month(N)`.
///
/// # Example
///
/// ```
/// use nanotime::civil;
///
/// assert_eq!(civil::month_name(2).to_string(), "February");
/// assert_eq!(civil::month_name(13).to_string(), "%!Month(13)");
/// ```
pub fn month_name(number: i64) -> impl core::fmt::Display {
    MonthName(number)
}

/// Returns a value that displays the English name of the weekday `offset`
/// days after Sunday.
///
/// Offsets outside `0..=6` display as `%!Weekday(N)`.
///
/// # Example
///
/// ```
/// use nanotime::civil;
///
/// assert_eq!(civil::weekday_name(0).to_string(), "Sunday");
/// assert_eq!(civil::weekday_name(-1).to_string(), "%!Weekday(-1)");
/// ```
pub fn weekday_name(offset: i64) -> impl core::fmt::Display {
    WeekdayName(offset)
}

struct MonthName(i64);

impl core::fmt::Display for MonthName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match Month::try_from(self.0) {
            Ok(month) => f.write_str(month.name()),
            Err(_) => write!(f, "%!Month({})", self.0),
        }
    }
}

struct WeekdayName(i64);

impl core::fmt::Display for WeekdayName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match Weekday::try_from(self.0) {
            Ok(weekday) => f.write_str(weekday.name()),
            Err(_) => write!(f, "%!Weekday({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_out_of_range() {
        insta::assert_snapshot!(month_name(0), @"%!Month(0)");
        insta::assert_snapshot!(month_name(12), @"December");
        insta::assert_snapshot!(weekday_name(6), @"Saturday");
        insta::assert_snapshot!(weekday_name(7), @"%!Weekday(7)");
    }
}
