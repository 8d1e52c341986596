/*!
Constants shared by the calendar engine, the instant representation and the
duration engine.

Three epochs appear throughout this crate:

* *Absolute* time counts unsigned seconds since the start of the year
`ABSOLUTE_ZERO_YEAR`. That year is chosen so that every time we care about is
non-negative, which means calendar divisions can use plain unsigned division
without having to correct negative remainders. It is `1 mod 400` so that
400-year cycles begin right after a century leap year, and it is as early as
possible while keeping the distance to 1970 within `i64` seconds.
* *Internal* time counts signed seconds since January 1 of the year 1. The
zero instant is `0001-01-01T00:00:00Z`.
* *Unix* time counts signed seconds since `1970-01-01T00:00:00Z`.
*/

pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;

pub(crate) const SECONDS_PER_MINUTE: i64 = 60;
pub(crate) const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub(crate) const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub(crate) const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

pub(crate) const DAYS_PER_400_YEARS: u64 = 365 * 400 + 97;
pub(crate) const DAYS_PER_100_YEARS: u64 = 365 * 100 + 24;
pub(crate) const DAYS_PER_4_YEARS: u64 = 365 * 4 + 1;

/// The year at which absolute time starts.
///
/// Times before it do not decompose correctly.
pub(crate) const ABSOLUTE_ZERO_YEAR: i64 = -292277022399;

/// The year of the zero instant.
const INTERNAL_YEAR: i64 = 1;

/// The average number of seconds in a Gregorian year (365.2425 days).
const SECONDS_PER_AVERAGE_YEAR: i64 = 31_556_952;

pub(crate) const ABSOLUTE_TO_INTERNAL: i64 =
    (ABSOLUTE_ZERO_YEAR - INTERNAL_YEAR) * SECONDS_PER_AVERAGE_YEAR;
pub(crate) const INTERNAL_TO_ABSOLUTE: i64 = -ABSOLUTE_TO_INTERNAL;

/// Seconds from the zero instant to the Unix epoch.
pub(crate) const UNIX_TO_INTERNAL: i64 =
    (1969 * 365 + 1969 / 4 - 1969 / 100 + 1969 / 400) * SECONDS_PER_DAY;
pub(crate) const INTERNAL_TO_UNIX: i64 = -UNIX_TO_INTERNAL;

pub(crate) const UNIX_TO_ABSOLUTE: i64 =
    UNIX_TO_INTERNAL + INTERNAL_TO_ABSOLUTE;
pub(crate) const ABSOLUTE_TO_UNIX: i64 = -UNIX_TO_ABSOLUTE;

/// Seconds from the zero instant to `1885-01-01T00:00:00Z`, the reference
/// point for wall seconds packed alongside a monotonic reading.
pub(crate) const WALL_TO_INTERNAL: i64 =
    (1884 * 365 + 1884 / 4 - 1884 / 100 + 1884 / 400) * SECONDS_PER_DAY;

/// The number of bits available for packed wall seconds.
pub(crate) const WALL_SECOND_BITS: u32 = 33;
/// The largest packed wall second offset. This lands in the year 2157.
pub(crate) const MAX_WALL_OFFSET: i64 = (1 << WALL_SECOND_BITS) - 1;

/// The smallest internal second that can carry a monotonic reading.
pub(crate) const MIN_WALL: i64 = WALL_TO_INTERNAL;
/// The largest internal second that can carry a monotonic reading.
pub(crate) const MAX_WALL: i64 = WALL_TO_INTERNAL + MAX_WALL_OFFSET;

/// Cumulative days before the start of each month in a non-leap year.
///
/// Index `m` gives the number of days before the 0-based month `m`. The
/// thirteenth entry is the length of the year.
pub(crate) static DAYS_BEFORE: [i64; 13] = [
    0,
    31,
    31 + 28,
    31 + 28 + 31,
    31 + 28 + 31 + 30,
    31 + 28 + 31 + 30 + 31,
    31 + 28 + 31 + 30 + 31 + 30,
    31 + 28 + 31 + 30 + 31 + 30 + 31,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31 + 30,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,
    31 + 28 + 31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,
];
