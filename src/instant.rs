use std::sync::OnceLock;

use crate::{
    civil::{self, absolute::Absolute, Clock, Date, IsoWeek, Month, Weekday},
    duration::Duration,
    tz::{self, Location, BEGINNING_OF_TIME, END_OF_TIME},
    util::{
        common::norm,
        t::{
            INTERNAL_TO_UNIX, MAX_WALL, MAX_WALL_OFFSET, MIN_WALL,
            NANOS_PER_MILLI, NANOS_PER_SECOND, UNIX_TO_INTERNAL,
            WALL_TO_INTERNAL,
        },
    },
};

/// An instant in time with nanosecond precision, optionally carrying a
/// monotonic clock reading, viewed in some [`Location`].
///
/// # Wall clock and monotonic clock
///
/// Every instant has a wall clock reading: seconds and nanoseconds since
/// `0001-01-01 00:00:00 UTC`. Instants returned by [`Instant::now`]
/// additionally carry a monotonic clock reading, which is immune to changes
/// of the system clock. When both sides of a comparison or of
/// [`Instant::duration_since`] have a monotonic reading, the monotonic
/// readings are used and the wall clock readings are ignored.
///
/// Operations that produce a different wall clock time in a way that the
/// monotonic clock can't follow drop the monotonic reading. That includes
/// attaching a location, calendar arithmetic, rounding and moving the wall
/// clock outside of the years 1885 through 2157.
/// [`Instant::strip_monotonic`] drops it explicitly.
///
/// # Location
///
/// The location of an instant only affects how it is presented: its
/// calendar fields, its zone and its text form. Two instants that name the
/// same moment compare equal regardless of their locations.
///
/// # Comparison
///
/// [`Instant::compare`], [`Instant::equal`], [`Instant::is_before`] and
/// [`Instant::is_after`] use the monotonic readings when both instants have
/// one. The `Eq`, `Ord` and `Hash` impls only ever look at the wall clock,
/// which keeps them consistent when instants with and without monotonic
/// readings are mixed, such as when sorting or using a `BTreeMap`.
///
/// # Arithmetic
///
/// Arithmetic never fails or panics. Adding durations saturates the wall
/// clock at roughly ±292 billion years, and differences between instants
/// saturate at [`Duration::MIN`] and [`Duration::MAX`].
///
/// # Example
///
/// ```
/// use nanotime::{civil::{Month, Weekday}, Duration, Instant};
///
/// let t = Instant::from_unix(1221681866, 0).utc();
/// assert_eq!(t.year(), 2008);
/// assert_eq!(t.month(), Month::September);
/// assert_eq!(t.day(), 17);
/// assert_eq!(t.weekday(), Weekday::Wednesday);
/// assert_eq!(t.to_string(), "2008-09-17 20:04:26 +0000 UTC");
///
/// let later = t.saturating_add(Duration::from_hours(12));
/// assert_eq!(later.to_string(), "2008-09-18 08:04:26 +0000 UTC");
/// assert_eq!(later.duration_since(&t), Duration::from_hours(12));
/// ```
#[derive(Clone)]
pub struct Instant {
    wall: Wall,
    /// `None` means UTC.
    loc: Option<Location>,
}

/// The wall clock reading of an instant, with or without a monotonic
/// reading.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Wall {
    /// Packed seconds since 1885, which fit in 33 bits, alongside a
    /// monotonic reading in nanoseconds.
    WithMonotonic { offset: u64, nsec: u32, mono: i64 },
    /// Seconds since the zero instant.
    WallOnly { sec: i64, nsec: u32 },
}

impl Instant {
    /// Returns the current time in the Local location, with a monotonic
    /// clock reading.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Instant;
    ///
    /// let start = Instant::now();
    /// let end = Instant::now();
    /// assert!(!end.is_before(&start));
    /// assert!(!end.duration_since(&start).is_negative());
    /// ```
    pub fn now() -> Instant {
        let (sec, nsec) = match std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
        {
            Ok(d) => (
                i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
                i64::from(d.subsec_nanos()),
            ),
            Err(err) => {
                let d = err.duration();
                (
                    i64::try_from(d.as_secs()).map_or(i64::MIN, |s| -s),
                    -i64::from(d.subsec_nanos()),
                )
            }
        };
        let mut t = Instant::unix_in(sec, nsec, local_or_utc());
        t.set_monotonic(monotonic_now());
        t
    }

    /// Returns the instant `sec` seconds and `nsec` nanoseconds after the
    /// Unix epoch, in the Local location.
    ///
    /// `nsec` may be outside `0..1_000_000_000`. Whole seconds in it are
    /// carried into `sec`.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Instant;
    ///
    /// let t = Instant::from_unix(10, -1);
    /// assert_eq!(t.unix(), 9);
    /// assert_eq!(t.nanosecond(), 999_999_999);
    /// ```
    pub fn from_unix(sec: i64, nsec: i64) -> Instant {
        Instant::unix_in(sec, nsec, local_or_utc())
    }

    /// Returns the instant `msec` milliseconds after the Unix epoch, in the
    /// Local location.
    pub fn from_unix_milli(msec: i64) -> Instant {
        Instant::from_unix(msec / 1_000, (msec % 1_000) * NANOS_PER_MILLI)
    }

    /// Returns the instant `usec` microseconds after the Unix epoch, in the
    /// Local location.
    pub fn from_unix_micro(usec: i64) -> Instant {
        Instant::from_unix(usec / 1_000_000, (usec % 1_000_000) * 1_000)
    }

    /// Returns the instant `nsec` nanoseconds after the Unix epoch, in the
    /// Local location.
    pub fn from_unix_nano(nsec: i64) -> Instant {
        Instant::from_unix(0, nsec)
    }

    /// Returns the instant at which a wall clock in `location` shows the
    /// given calendar fields.
    ///
    /// Out-of-range fields are normalized by carrying into larger units. See
    /// [`civil::DateTime`].
    ///
    /// Where a wall clock time occurs twice, such as during the hour after
    /// DST ends, or not at all, such as during the hour skipped when DST
    /// begins, one of the two adjacent offsets is used. Which one is not
    /// specified.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{civil, tz::Location, Instant};
    ///
    /// let t = Instant::from_calendar(
    ///     civil::datetime(2008, 9, 17, 20, 4, 26, 0),
    ///     &Location::utc(),
    /// );
    /// assert_eq!(t.unix(), 1221681866);
    ///
    /// // November 31 is December 1.
    /// let utc = Location::utc();
    /// let t = Instant::from_calendar(civil::date(2023, 11, 31), &utc);
    /// assert_eq!(t.to_string(), "2023-12-01 00:00:00 +0000 UTC");
    /// ```
    pub fn from_calendar(
        fields: civil::DateTime,
        location: &Location,
    ) -> Instant {
        let (mut unix, nsec) = fields.to_wall_unix();

        // The lookup wants a Unix second, but we only have a wall clock
        // reading. Guess with the wall clock reading as if it were UTC and
        // check whether the zone found still holds once its offset is
        // applied. Only near a transition does it not.
        let info = location.lookup(unix);
        let mut offset = info.offset();
        if offset != 0 {
            let utc = unix.wrapping_sub(i64::from(offset));
            if utc < info.valid_from() || utc >= info.valid_to() {
                offset = location.lookup(utc).offset();
            }
            unix = unix.wrapping_sub(i64::from(offset));
        }
        Instant::unix_in(unix, nsec, Some(location.clone())).relocated()
    }

    /// Builds an instant from Unix seconds and any nanosecond value, with
    /// the given location stored as is.
    fn unix_in(sec: i64, nsec: i64, loc: Option<Location>) -> Instant {
        let (sec, nsec) = norm(sec, nsec, NANOS_PER_SECOND);
        Instant {
            wall: Wall::WallOnly {
                sec: sec.wrapping_add(UNIX_TO_INTERNAL),
                nsec: nsec as u32,
            },
            loc,
        }
    }

    /// Re-applies the location rules to this instant's own location: UTC
    /// collapses to `None` and the monotonic reading is dropped.
    fn relocated(mut self) -> Instant {
        let loc = self.loc.take();
        self.set_location(loc);
        self
    }

    /// Returns this instant with its location set to `location`.
    ///
    /// This drops any monotonic reading.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{tz::Location, Instant};
    ///
    /// let est = Location::fixed("EST", -5 * 3600);
    /// let t = Instant::from_unix(0, 0).in_location(&est);
    /// assert_eq!(t.to_string(), "1969-12-31 19:00:00 -0500 EST");
    /// assert_eq!(t.location(), est);
    /// ```
    pub fn in_location(&self, location: &Location) -> Instant {
        let mut t = self.clone();
        t.set_location(Some(location.clone()));
        t
    }

    /// Returns this instant in UTC.
    pub fn utc(&self) -> Instant {
        let mut t = self.clone();
        t.set_location(None);
        t
    }

    /// Returns this instant in the Local location.
    pub fn local(&self) -> Instant {
        let mut t = self.clone();
        t.set_location(Some(Location::local()));
        t
    }

    /// Returns the location of this instant.
    pub fn location(&self) -> Location {
        self.loc.clone().unwrap_or_else(Location::utc)
    }

    fn set_location(&mut self, loc: Option<Location>) {
        self.strip_monotonic_in_place();
        self.loc = loc.filter(|loc| loc.name() != "UTC");
    }

    /// Returns this instant without its monotonic clock reading.
    ///
    /// Comparisons and differences involving the result use the wall clock.
    pub fn strip_monotonic(&self) -> Instant {
        let mut t = self.clone();
        t.strip_monotonic_in_place();
        t
    }

    fn strip_monotonic_in_place(&mut self) {
        if let Wall::WithMonotonic { nsec, .. } = self.wall {
            self.wall = Wall::WallOnly { sec: self.sec(), nsec };
        }
    }

    /// Attaches a monotonic reading.
    ///
    /// This does nothing when the wall clock is outside the range a packed
    /// wall reading can hold.
    fn set_monotonic(&mut self, mono: i64) {
        match self.wall {
            Wall::WithMonotonic { offset, nsec, .. } => {
                self.wall = Wall::WithMonotonic { offset, nsec, mono };
            }
            Wall::WallOnly { sec, nsec } => {
                if !(MIN_WALL..=MAX_WALL).contains(&sec) {
                    return;
                }
                let offset = (sec - WALL_TO_INTERNAL) as u64;
                self.wall = Wall::WithMonotonic { offset, nsec, mono };
            }
        }
    }

    /// Returns the monotonic clock reading, if this instant has one.
    pub(crate) fn monotonic(&self) -> Option<i64> {
        match self.wall {
            Wall::WithMonotonic { mono, .. } => Some(mono),
            Wall::WallOnly { .. } => None,
        }
    }

    /// Returns the seconds since the zero instant.
    fn sec(&self) -> i64 {
        match self.wall {
            Wall::WithMonotonic { offset, .. } => {
                WALL_TO_INTERNAL + offset as i64
            }
            Wall::WallOnly { sec, .. } => sec,
        }
    }

    fn nsec(&self) -> u32 {
        match self.wall {
            Wall::WithMonotonic { nsec, .. } | Wall::WallOnly { nsec, .. } => {
                nsec
            }
        }
    }

    fn set_nsec(&mut self, new: u32) {
        match self.wall {
            Wall::WithMonotonic { ref mut nsec, .. }
            | Wall::WallOnly { ref mut nsec, .. } => *nsec = new,
        }
    }

    /// Adds whole seconds to the wall clock.
    ///
    /// A packed reading stays packed if it can. Otherwise the monotonic
    /// reading is dropped and the seconds saturate at ±(2^63 - 1).
    fn add_seconds(&mut self, d: i64) {
        if let Wall::WithMonotonic { offset, nsec, mono } = self.wall {
            match (offset as i64).checked_add(d) {
                Some(new) if (0..=MAX_WALL_OFFSET).contains(&new) => {
                    self.wall = Wall::WithMonotonic {
                        offset: new as u64,
                        nsec,
                        mono,
                    };
                    return;
                }
                _ => self.strip_monotonic_in_place(),
            }
        }
        if let Wall::WallOnly { ref mut sec, .. } = self.wall {
            *sec = sec.checked_add(d).unwrap_or(if d > 0 {
                i64::MAX
            } else {
                -i64::MAX
            });
        }
    }

    /// Returns the Unix second of this instant.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Instant;
    ///
    /// assert_eq!(Instant::from_unix(1221681866, 5).unix(), 1221681866);
    /// assert_eq!(Instant::default().unix(), -62135596800);
    /// ```
    pub fn unix(&self) -> i64 {
        self.sec().wrapping_add(INTERNAL_TO_UNIX)
    }

    /// Returns the number of milliseconds since the Unix epoch, saturating
    /// when that doesn't fit in an `i64`.
    pub fn unix_milli(&self) -> i64 {
        self.unix()
            .saturating_mul(1_000)
            .saturating_add(i64::from(self.nsec()) / NANOS_PER_MILLI)
    }

    /// Returns the number of microseconds since the Unix epoch, saturating
    /// when that doesn't fit in an `i64`.
    pub fn unix_micro(&self) -> i64 {
        self.unix()
            .saturating_mul(1_000_000)
            .saturating_add(i64::from(self.nsec()) / 1_000)
    }

    /// Returns the number of nanoseconds since the Unix epoch, saturating
    /// when that doesn't fit in an `i64`.
    ///
    /// Only instants between roughly the years 1678 and 2262 fit.
    pub fn unix_nano(&self) -> i64 {
        self.unix()
            .saturating_mul(NANOS_PER_SECOND)
            .saturating_add(i64::from(self.nsec()))
    }

    /// Returns true if this is the zero instant,
    /// `0001-01-01 00:00:00 UTC`.
    ///
    /// The zero instant is also what [`Instant::default`] returns.
    pub fn is_zero(&self) -> bool {
        self.sec() == 0 && self.nsec() == 0
    }

    /// Returns the instant `d` after this one.
    ///
    /// The wall clock saturates rather than overflows. The monotonic reading
    /// moves along with the wall clock and is dropped if it would overflow.
    pub fn saturating_add(&self, d: Duration) -> Instant {
        let mut t = self.clone();
        let nanos = d.as_nanos();
        let mut dsec = nanos / NANOS_PER_SECOND;
        let mut nsec = i64::from(t.nsec()) + nanos % NANOS_PER_SECOND;
        if nsec >= NANOS_PER_SECOND {
            dsec += 1;
            nsec -= NANOS_PER_SECOND;
        } else if nsec < 0 {
            dsec -= 1;
            nsec += NANOS_PER_SECOND;
        }
        t.set_nsec(nsec as u32);
        t.add_seconds(dsec);
        if let Wall::WithMonotonic { offset, nsec, mono } = t.wall {
            match mono.checked_add(nanos) {
                Some(mono) => {
                    t.wall = Wall::WithMonotonic { offset, nsec, mono };
                }
                None => t.strip_monotonic_in_place(),
            }
        }
        t
    }

    /// Returns the instant `d` before this one.
    ///
    /// This is like [`Instant::saturating_add`] with `-d`.
    pub fn saturating_sub(&self, d: Duration) -> Instant {
        if d == Duration::MIN {
            // The negation would saturate one nanosecond short.
            return self
                .saturating_add(Duration::MAX)
                .saturating_add(Duration::NANOSECOND);
        }
        self.saturating_add(-d)
    }

    /// Returns the duration from `earlier` to this instant.
    ///
    /// When both instants have a monotonic reading, the readings are
    /// subtracted. Otherwise the wall clocks are. The result saturates at
    /// [`Duration::MIN`] and [`Duration::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{Duration, Instant};
    ///
    /// let a = Instant::from_unix(0, 0);
    /// let b = Instant::from_unix(90, 500_000_000);
    /// assert_eq!(b.duration_since(&a).to_string(), "1m30.5s");
    /// assert_eq!(a.duration_since(&b).to_string(), "-1m30.5s");
    ///
    /// assert_eq!(Instant::default().duration_since(&b), Duration::MIN);
    /// ```
    pub fn duration_since(&self, earlier: &Instant) -> Duration {
        if let (Some(t), Some(u)) = (self.monotonic(), earlier.monotonic()) {
            return match t.checked_sub(u) {
                Some(d) => Duration::from_nanos(d),
                None if t > u => Duration::MAX,
                None => Duration::MIN,
            };
        }
        let nanos = (i128::from(self.sec()) - i128::from(earlier.sec()))
            * i128::from(NANOS_PER_SECOND)
            + (i128::from(self.nsec()) - i128::from(earlier.nsec()));
        match i64::try_from(nanos) {
            Ok(nanos) => Duration::from_nanos(nanos),
            Err(_) if nanos > 0 => Duration::MAX,
            Err(_) => Duration::MIN,
        }
    }

    /// Returns the time elapsed since `earlier`.
    ///
    /// This is shorthand for `Instant::now().duration_since(earlier)`.
    pub fn since(earlier: &Instant) -> Duration {
        Instant::now().duration_since(earlier)
    }

    /// Returns the time remaining until `later`.
    ///
    /// This is shorthand for `later.duration_since(&Instant::now())`.
    pub fn until(later: &Instant) -> Duration {
        later.duration_since(&Instant::now())
    }

    /// Compares two instants.
    ///
    /// When both have a monotonic reading, the readings are compared.
    /// Otherwise the wall clocks are.
    pub fn compare(&self, other: &Instant) -> core::cmp::Ordering {
        if let (Some(a), Some(b)) = (self.monotonic(), other.monotonic()) {
            return a.cmp(&b);
        }
        (self.sec(), self.nsec()).cmp(&(other.sec(), other.nsec()))
    }

    /// Returns true if both instants name the same moment.
    ///
    /// Unlike `==`, this compares monotonic readings when both instants have
    /// one.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Instant;
    ///
    /// let t = Instant::now();
    /// assert!(t.equal(&t.utc()));
    /// ```
    pub fn equal(&self, other: &Instant) -> bool {
        self.compare(other).is_eq()
    }

    /// Returns true if this instant comes before `other`.
    pub fn is_before(&self, other: &Instant) -> bool {
        self.compare(other).is_lt()
    }

    /// Returns true if this instant comes after `other`.
    pub fn is_after(&self, other: &Instant) -> bool {
        self.compare(other).is_gt()
    }

    /// Returns the instant whose calendar fields in this instant's location
    /// are offset by the given years, months and days.
    ///
    /// The result is normalized like [`Instant::from_calendar`], so adding a
    /// month to October 31 gives December 1.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{civil, tz::Location, Instant};
    ///
    /// let utc = Location::utc();
    /// let t = Instant::from_calendar(civil::date(2011, 10, 31), &utc);
    /// assert_eq!(t.add_date(0, 1, 0).date().to_string(), "2011-12-01");
    /// assert_eq!(t.add_date(-1, 0, 1).date().to_string(), "2010-11-01");
    /// ```
    pub fn add_date(&self, years: i64, months: i64, days: i64) -> Instant {
        let date = self.date();
        let clock = self.clock();
        let fields = civil::datetime(
            date.year().wrapping_add(years),
            i64::from(date.month().number()).wrapping_add(months),
            i64::from(date.day()).wrapping_add(days),
            i64::from(clock.hour()),
            i64::from(clock.minute()),
            i64::from(clock.second()),
            i64::from(self.nsec()),
        );
        Instant::from_calendar(fields, &self.location())
    }

    /// Returns this instant rounded down to a multiple of `d` since the zero
    /// instant.
    ///
    /// The monotonic reading is dropped. When `d` is zero or negative, the
    /// instant is otherwise unchanged.
    ///
    /// Rounding works on the absolute time since the zero instant, not on
    /// the calendar fields in the instant's location. So truncating to an
    /// hour gives a whole hour in UTC, which may not be a whole hour in a
    /// location whose offset isn't a whole number of hours.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{Duration, Instant};
    ///
    /// let t = Instant::from_unix(1221681866, 0).utc();
    /// assert_eq!(
    ///     t.truncate(Duration::HOUR).to_string(),
    ///     "2008-09-17 20:00:00 +0000 UTC",
    /// );
    /// ```
    pub fn truncate(&self, d: Duration) -> Instant {
        let t = self.strip_monotonic();
        if d.as_nanos() <= 0 {
            return t;
        }
        let r = t.rem_since_zero(d);
        t.saturating_add(Duration::from_nanos(-r))
    }

    /// Returns this instant rounded to the nearest multiple of `d` since the
    /// zero instant, with halfway values rounded up.
    ///
    /// The monotonic reading is dropped. When `d` is zero or negative, the
    /// instant is otherwise unchanged. See [`Instant::truncate`] for how
    /// rounding relates to the instant's location.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{Duration, Instant};
    ///
    /// let t = Instant::from_unix(1221681866, 0).utc();
    /// assert_eq!(
    ///     t.round(Duration::MINUTE).to_string(),
    ///     "2008-09-17 20:04:00 +0000 UTC",
    /// );
    /// assert_eq!(
    ///     t.round(Duration::HOUR).to_string(),
    ///     "2008-09-17 20:00:00 +0000 UTC",
    /// );
    /// ```
    pub fn round(&self, d: Duration) -> Instant {
        let t = self.strip_monotonic();
        if d.as_nanos() <= 0 {
            return t;
        }
        let r = t.rem_since_zero(d);
        let r2 = r as u64 + r as u64;
        if r2 < d.as_nanos() as u64 {
            t.saturating_add(Duration::from_nanos(-r))
        } else {
            t.saturating_add(Duration::from_nanos(d.as_nanos() - r))
        }
    }

    /// Returns the non-negative remainder of the time since the zero instant
    /// divided by `d`, which must be positive.
    fn rem_since_zero(&self, d: Duration) -> i64 {
        let total = i128::from(self.sec()) * i128::from(NANOS_PER_SECOND)
            + i128::from(self.nsec());
        // The remainder is less than `d`, so it fits.
        total.rem_euclid(i128::from(d.as_nanos())) as i64
    }

    /// Returns this instant as absolute time, shifted by the zone offset of
    /// its location.
    fn absolute(&self) -> Absolute {
        let unix = self.unix();
        let offset = match self.loc {
            None => 0,
            Some(ref loc) => i64::from(loc.lookup(unix).offset()),
        };
        Absolute::from_unix(unix.wrapping_add(offset))
    }

    /// Returns the name and offset of the zone in effect at this instant.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{tz::Location, Instant};
    ///
    /// let t = Instant::from_unix(0, 0);
    /// assert_eq!(t.utc().zone(), ("UTC", 0));
    /// let t = t.in_location(&Location::fixed("CET", 3600));
    /// assert_eq!(t.zone(), ("CET", 3600));
    /// ```
    pub fn zone(&self) -> (&str, i32) {
        match self.loc {
            None => ("UTC", 0),
            Some(ref loc) => {
                let info = loc.lookup(self.unix());
                (info.name(), info.offset())
            }
        }
    }

    /// Returns the first and last instants, in this instant's location, of
    /// the zone in effect at this instant.
    ///
    /// The end is exclusive. Either side is `None` when the zone extends
    /// forever in that direction.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Instant;
    ///
    /// let t = Instant::from_unix(0, 0).utc();
    /// assert_eq!(t.zone_bounds(), (None, None));
    /// ```
    pub fn zone_bounds(&self) -> (Option<Instant>, Option<Instant>) {
        let loc = self.location();
        let info = loc.lookup(self.unix());
        let bound = |unix: i64, open: i64| {
            if unix == open {
                return None;
            }
            Some(Instant::unix_in(unix, 0, Some(loc.clone())).relocated())
        };
        (
            bound(info.valid_from(), BEGINNING_OF_TIME),
            bound(info.valid_to(), END_OF_TIME),
        )
    }

    /// Returns the calendar date of this instant in its location.
    pub fn date(&self) -> Date {
        self.absolute().date()
    }

    /// Returns the year of this instant in its location.
    pub fn year(&self) -> i64 {
        self.absolute().year()
    }

    /// Returns the month of this instant in its location.
    pub fn month(&self) -> Month {
        self.date().month()
    }

    /// Returns the day of the month of this instant in its location.
    pub fn day(&self) -> i8 {
        self.date().day()
    }

    /// Returns the day of the week of this instant in its location.
    pub fn weekday(&self) -> Weekday {
        self.absolute().weekday()
    }

    /// Returns the ISO 8601 year and week of this instant in its location.
    pub fn iso_week(&self) -> IsoWeek {
        self.absolute().iso_week()
    }

    /// Returns the day of the year of this instant in its location, in
    /// `1..=366`.
    pub fn year_day(&self) -> i16 {
        self.absolute().year_day()
    }

    /// Returns the clock reading of this instant in its location.
    pub fn clock(&self) -> Clock {
        self.absolute().clock()
    }

    /// Returns the hour of this instant in its location.
    pub fn hour(&self) -> i8 {
        self.absolute().hour()
    }

    /// Returns the minute of this instant in its location.
    pub fn minute(&self) -> i8 {
        self.absolute().minute()
    }

    /// Returns the second of this instant in its location.
    pub fn second(&self) -> i8 {
        self.absolute().second()
    }

    /// Returns the nanosecond within the second, in `0..1_000_000_000`.
    pub fn nanosecond(&self) -> i32 {
        self.nsec() as i32
    }
}

/// Returns the Local location, or `None` when Local is UTC.
fn local_or_utc() -> Option<Location> {
    let local = Location::local();
    if local.name() == "UTC" {
        None
    } else {
        Some(local)
    }
}

/// Returns the monotonic clock reading in nanoseconds since this process
/// first asked for one, plus one so that it is never zero.
fn monotonic_now() -> i64 {
    static START: OnceLock<std::time::Instant> = OnceLock::new();
    let start = *START.get_or_init(std::time::Instant::now);
    i64::try_from(start.elapsed().as_nanos())
        .map_or(i64::MAX, |n| n.saturating_add(1))
}

impl Default for Instant {
    /// Returns the zero instant, `0001-01-01 00:00:00 UTC`.
    fn default() -> Instant {
        Instant { wall: Wall::WallOnly { sec: 0, nsec: 0 }, loc: None }
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Instant) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Instant) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders instants by wall clock alone.
impl Ord for Instant {
    fn cmp(&self, other: &Instant) -> core::cmp::Ordering {
        (self.sec(), self.nsec()).cmp(&(other.sec(), other.nsec()))
    }
}

impl core::hash::Hash for Instant {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.sec().hash(state);
        self.nsec().hash(state);
    }
}

impl core::ops::Add<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn add(self, rhs: Duration) -> Instant {
        self.saturating_add(rhs)
    }
}

impl core::ops::AddAssign<Duration> for Instant {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = self.saturating_add(rhs);
    }
}

impl core::ops::Sub<Duration> for Instant {
    type Output = Instant;

    #[inline]
    fn sub(self, rhs: Duration) -> Instant {
        self.saturating_sub(rhs)
    }
}

impl core::ops::SubAssign<Duration> for Instant {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = self.saturating_sub(rhs);
    }
}

impl core::ops::Sub for Instant {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Instant) -> Duration {
        self.duration_since(&rhs)
    }
}

/// Writes `2006-01-02 15:04:05.999999999 -0700 MST`, with trailing zeros of
/// the fraction trimmed, followed by ` m=±S.NNNNNNNNN` when the instant has
/// a monotonic reading.
impl core::fmt::Display for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let unix = self.unix();
        let (name, offset) = match self.loc {
            None => ("UTC", 0),
            Some(ref loc) => {
                let info = loc.lookup(unix);
                (info.name(), info.offset())
            }
        };
        let abs = Absolute::from_unix(unix.wrapping_add(i64::from(offset)));

        civil::write_year(f, abs.year())?;
        let date = abs.date();
        write!(
            f,
            "-{:02}-{:02} {}",
            date.month().number(),
            date.day(),
            abs.clock(),
        )?;
        let nsec = self.nsec();
        if nsec != 0 {
            let mut frac = nsec;
            let mut width: usize = 9;
            while frac % 10 == 0 {
                frac /= 10;
                width -= 1;
            }
            write!(f, ".{frac:0width$}")?;
        }
        f.write_str(" ")?;
        tz::write_offset_hhmm(f, offset)?;
        f.write_str(" ")?;
        if name.is_empty() {
            tz::write_offset_hhmm(f, offset)?;
        } else {
            f.write_str(name)?;
        }

        if let Some(mono) = self.monotonic() {
            let sign = if mono < 0 { '-' } else { '+' };
            let m = mono.unsigned_abs();
            let (m1, m2) = (m / 1_000_000_000, m % 1_000_000_000);
            let (m0, m1) = (m1 / 1_000_000_000, m1 % 1_000_000_000);
            write!(f, " m={sign}")?;
            if m0 != 0 {
                write!(f, "{m0}{m1:09}")?;
            } else {
                write!(f, "{m1}")?;
            }
            write!(f, ".{m2:09}")?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for Instant {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Instant {
    fn arbitrary(g: &mut quickcheck::Gen) -> Instant {
        // Stay within a few thousand years of the epoch so that calendar
        // round trips are meaningful.
        let sec = <i64 as quickcheck::Arbitrary>::arbitrary(g)
            % (5_000 * 366 * 86_400);
        let nsec =
            <u32 as quickcheck::Arbitrary>::arbitrary(g) % 1_000_000_000;
        Instant::unix_in(sec, i64::from(nsec), None)
    }
}

#[cfg(test)]
mod tests {
    use crate::{civil::date, tz::testdata};

    use super::*;

    fn utc(sec: i64, nsec: i64) -> Instant {
        Instant::from_unix(sec, nsec).utc()
    }

    fn with_mono(sec: i64, mono: i64) -> Instant {
        let mut t = utc(sec, 0);
        t.set_monotonic(mono);
        t
    }

    #[test]
    fn known_utc_instants() {
        let t = utc(0, 0);
        insta::assert_snapshot!(t, @"1970-01-01 00:00:00 +0000 UTC");
        assert_eq!(t.weekday(), Weekday::Thursday);
        assert_eq!(t.year_day(), 1);

        let t = utc(1221681866, 0);
        insta::assert_snapshot!(t, @"2008-09-17 20:04:26 +0000 UTC");
        assert_eq!(t.weekday(), Weekday::Wednesday);

        let t = utc(-1221681866, 0);
        insta::assert_snapshot!(t, @"1931-04-16 03:55:34 +0000 UTC");
        assert_eq!(t.weekday(), Weekday::Thursday);

        let t = utc(-11644473600, 0);
        insta::assert_snapshot!(t, @"1601-01-01 00:00:00 +0000 UTC");
        assert_eq!(t.weekday(), Weekday::Monday);

        let t = utc(599529660, 0);
        insta::assert_snapshot!(t, @"1988-12-31 00:01:00 +0000 UTC");
        assert_eq!(t.weekday(), Weekday::Saturday);

        let t = utc(978220860, 0);
        insta::assert_snapshot!(t, @"2000-12-31 00:01:00 +0000 UTC");
        assert_eq!(t.weekday(), Weekday::Sunday);
        assert_eq!(t.year_day(), 366);
    }

    #[test]
    fn known_local_instants() {
        let la = testdata::los_angeles();

        let t = utc(0, 0).in_location(&la);
        insta::assert_snapshot!(t, @"1969-12-31 16:00:00 -0800 PST");
        assert_eq!(t.weekday(), Weekday::Wednesday);
        assert_eq!(t.zone(), ("PST", -28800));

        let t = utc(1221681866, 0).in_location(&la);
        insta::assert_snapshot!(t, @"2008-09-17 13:04:26 -0700 PDT");
        assert_eq!(t.zone(), ("PDT", -25200));
        assert_eq!(t.year_day(), 261);

        // Local mean time has an offset that isn't whole minutes.
        let t = utc(-3_000_000_000, 0).in_location(&la);
        insta::assert_snapshot!(t, @"1874-12-07 10:47:02 -0752 LMT");
    }

    #[test]
    fn unix_roundtrip() {
        for sec in [0, 1, -1, 1221681866, -1221681866, i64::MAX, i64::MIN] {
            assert_eq!(Instant::from_unix(sec, 0).unix(), sec);
        }
    }

    #[test]
    fn from_unix_normalizes_nanoseconds() {
        let t = utc(1, 1_500_000_000);
        assert_eq!((t.unix(), t.nanosecond()), (2, 500_000_000));
        let t = utc(1, -1);
        assert_eq!((t.unix(), t.nanosecond()), (0, 999_999_999));
        let t = utc(0, -2_000_000_001);
        assert_eq!((t.unix(), t.nanosecond()), (-3, 999_999_999));
    }

    #[test]
    fn unix_units() {
        let t = Instant::from_unix_milli(-1_500);
        assert_eq!((t.unix(), t.nanosecond()), (-2, 500_000_000));
        assert_eq!(t.unix_milli(), -1_500);
        let t = Instant::from_unix_micro(1_000_001);
        assert_eq!(t.unix_micro(), 1_000_001);
        assert_eq!(t.unix_nano(), 1_000_001_000);
        let t = Instant::from_unix_nano(-1);
        assert_eq!(t.unix_nano(), -1);
        assert_eq!(utc(i64::MAX / 1_000, 0).unix_nano(), i64::MAX);
    }

    #[test]
    fn zero_instant() {
        let zero = Instant::default();
        assert!(zero.is_zero());
        insta::assert_snapshot!(zero, @"0001-01-01 00:00:00 +0000 UTC");
        assert_eq!(zero.weekday(), Weekday::Monday);
        assert!(!utc(0, 0).is_zero());
        let first = Instant::from_calendar(date(1, 1, 1), &Location::utc());
        assert!(first.is_zero());
    }

    #[test]
    fn from_calendar_matches_from_unix() {
        let t = Instant::from_calendar(
            civil::datetime(2008, 9, 17, 20, 4, 26, 7),
            &Location::utc(),
        );
        assert_eq!(t, utc(1221681866, 7));
        assert_eq!(t.location(), Location::utc());

        let la = testdata::los_angeles();
        let t = Instant::from_calendar(
            civil::datetime(2008, 9, 17, 13, 4, 26, 0),
            &la,
        );
        assert_eq!(t.unix(), 1221681866);
        assert_eq!(t.location(), la);
        let t = Instant::from_calendar(
            civil::datetime(1969, 12, 31, 16, 0, 0, 0),
            &la,
        );
        assert_eq!(t.unix(), 0);
    }

    #[test]
    fn from_calendar_normalizes() {
        let utc_loc = Location::utc();
        let t = Instant::from_calendar(date(2023, 13, 1), &utc_loc);
        insta::assert_snapshot!(t, @"2024-01-01 00:00:00 +0000 UTC");
        let t = Instant::from_calendar(date(2024, 1, 32), &utc_loc);
        insta::assert_snapshot!(t, @"2024-02-01 00:00:00 +0000 UTC");
        let t = Instant::from_calendar(date(2000, 2, 29), &utc_loc);
        insta::assert_snapshot!(t, @"2000-02-29 00:00:00 +0000 UTC");
        let t = Instant::from_calendar(date(1900, 2, 29), &utc_loc);
        insta::assert_snapshot!(t, @"1900-03-01 00:00:00 +0000 UTC");
        let t = Instant::from_calendar(
            civil::datetime(2024, 1, 1, -1, 0, 0, 0),
            &utc_loc,
        );
        insta::assert_snapshot!(t, @"2023-12-31 23:00:00 +0000 UTC");
    }

    #[test]
    fn from_calendar_around_transitions() {
        let la = testdata::los_angeles();
        // 02:30 doesn't exist on this day. The guess lands past the
        // transition, so the offset before it is applied and the result
        // reads an hour earlier.
        let t = Instant::from_calendar(
            civil::datetime(2011, 3, 13, 2, 30, 0, 0),
            &la,
        );
        insta::assert_snapshot!(t, @"2011-03-13 01:30:00 -0800 PST");
        // 01:30 happens twice on this day. The first is found.
        let t = Instant::from_calendar(
            civil::datetime(2011, 11, 6, 1, 30, 0, 0),
            &la,
        );
        insta::assert_snapshot!(t, @"2011-11-06 01:30:00 -0700 PDT");
    }

    #[test]
    fn iso_weeks() {
        let utc_loc = Location::utc();
        let week = |y, m, d| {
            let w = Instant::from_calendar(date(y, m, d), &utc_loc).iso_week();
            (w.year(), w.week())
        };
        assert_eq!(week(2000, 1, 1), (1999, 52));
        assert_eq!(week(2004, 12, 31), (2004, 53));
        assert_eq!(week(2008, 12, 29), (2009, 1));
    }

    #[test]
    fn location_attachment() {
        let la = testdata::los_angeles();
        let t = utc(0, 0).in_location(&la);
        assert_eq!(t.location(), la);
        // Attaching UTC collapses to no location at all.
        let back = t.in_location(&Location::utc());
        assert!(back.loc.is_none());
        let named_utc = Location::fixed("UTC", 0);
        assert!(t.in_location(&named_utc).loc.is_none());
        // The instant itself never changes.
        assert_eq!(t, back);
    }

    #[test]
    fn monotonic_is_stripped_by_relocation() {
        let t = with_mono(1221681866, 123);
        assert_eq!(t.monotonic(), Some(123));
        assert_eq!(t.in_location(&testdata::los_angeles()).monotonic(), None);
        assert_eq!(t.utc().monotonic(), None);
        assert_eq!(t.strip_monotonic().monotonic(), None);
        assert_eq!(t.round(Duration::ZERO).monotonic(), None);
        assert_eq!(t.truncate(Duration::SECOND).monotonic(), None);
        assert_eq!(t.strip_monotonic().unix(), 1221681866);
    }

    #[test]
    fn set_monotonic_outside_wall_range_is_ignored() {
        // 1884 is before the packed wall range starts.
        let mut t = Instant::from_calendar(date(1884, 6, 1), &Location::utc());
        t.set_monotonic(5);
        assert_eq!(t.monotonic(), None);
        // 2158 is after it ends.
        let mut t = Instant::from_calendar(date(2158, 1, 1), &Location::utc());
        t.set_monotonic(5);
        assert_eq!(t.monotonic(), None);
        // The first packed second is fine.
        let mut t = Instant::from_calendar(date(1885, 1, 1), &Location::utc());
        t.set_monotonic(5);
        assert_eq!(t.monotonic(), Some(5));
    }

    #[test]
    fn add_keeps_packed_reading_when_it_fits() {
        let t = with_mono(1221681866, 1_000);
        let u = t.saturating_add(Duration::from_millis(1_500));
        assert_eq!(u.monotonic(), Some(1_000 + 1_500_000_000));
        assert_eq!((u.unix(), u.nanosecond()), (1221681867, 500_000_000));

        let u = t.saturating_sub(Duration::from_hours(24 * 365));
        assert_eq!(u.monotonic(), Some(1_000 - 365 * 24 * 3_600_000_000_000));
        assert_eq!(u.unix(), 1221681866 - 365 * 86_400);
    }

    #[test]
    fn add_demotes_when_wall_leaves_packed_range() {
        let t = with_mono(1221681866, 0);
        // About 290 years later, past 2157.
        let u = t.saturating_add(Duration::MAX);
        assert_eq!(u.monotonic(), None);
        assert_eq!(u.duration_since(&t), Duration::MAX);
        // Back in range again, but the reading is gone for good.
        let v = u.saturating_sub(Duration::MAX);
        assert_eq!(v.monotonic(), None);
        assert_eq!(v, t.strip_monotonic());
    }

    #[test]
    fn add_drops_monotonic_on_overflow() {
        let t = with_mono(1221681866, i64::MAX - 10);
        let u = t.saturating_add(Duration::from_nanos(11));
        assert_eq!(u.monotonic(), None);
        assert_eq!(u.unix(), 1221681866);
        assert_eq!(u.nanosecond(), 11);
    }

    #[test]
    fn add_saturates_wall_clock() {
        let mut t = Instant::default();
        t.add_seconds(i64::MAX - 1);
        let far = t.saturating_add(Duration::from_secs(10));
        assert_eq!(far.sec(), i64::MAX);
        // Adding more never wraps around to the past.
        assert!(far.is_after(&t));

        let mut t = Instant::default();
        t.add_seconds(i64::MAX);
        t.add_seconds(i64::MAX);
        assert_eq!(t.sec(), i64::MAX);
        t.add_seconds(i64::MIN);
        t.add_seconds(i64::MIN);
        assert_eq!(t.sec(), -i64::MAX);
    }

    #[test]
    fn compare_prefers_monotonic() {
        // Wall clocks say a < b, but monotonic readings say otherwise.
        let a = with_mono(100, 50);
        let b = with_mono(200, 10);
        assert!(a.is_after(&b));
        assert!(b.is_before(&a));
        assert_eq!(a.duration_since(&b), Duration::from_nanos(40));
        // Without both readings, the wall clocks decide.
        let b = b.strip_monotonic();
        assert!(a.is_before(&b));
        assert_eq!(b.duration_since(&a), Duration::from_secs(100));
        // Equality ignores the location.
        let c = utc(100, 0).in_location(&testdata::los_angeles());
        assert_eq!(a.strip_monotonic(), c);
    }

    #[test]
    fn trait_equality_ignores_monotonic() {
        let a = with_mono(100, 1);
        let b = a.strip_monotonic();
        let c = with_mono(100, 2);
        assert!(a.equal(&b));
        assert!(b.equal(&c));
        assert!(!a.equal(&c));
        // The trait impls stay an equivalence relation.
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, c);

        let mut mixed = vec![
            with_mono(300, 1),
            utc(100, 0),
            with_mono(200, 50),
            utc(300, 0),
            with_mono(100, 99),
        ];
        mixed.sort();
        let secs: Vec<i64> = mixed.iter().map(|t| t.unix()).collect();
        assert_eq!(secs, vec![100, 100, 200, 300, 300]);
        mixed.dedup();
        assert_eq!(mixed.len(), 3);
    }

    #[test]
    fn duration_since_saturates() {
        let min = with_mono(0, i64::MIN);
        let max = with_mono(0, i64::MAX);
        assert_eq!(max.duration_since(&min), Duration::MAX);
        assert_eq!(min.duration_since(&max), Duration::MIN);

        let a = utc(-300 * 365 * 86_400, 0);
        let b = utc(300 * 365 * 86_400, 0);
        assert_eq!(b.duration_since(&a), Duration::MAX);
        assert_eq!(a.duration_since(&b), Duration::MIN);
        assert_eq!(b.clone() - a.clone(), Duration::MAX);
    }

    #[test]
    fn now_has_monotonic_reading() {
        let a = Instant::now();
        let b = Instant::now();
        assert!(a.monotonic().is_some());
        assert!(a.monotonic().unwrap() > 0);
        assert!(!b.is_before(&a));
        assert!(!Instant::since(&a).is_negative());
        assert!(Instant::until(&a) <= Duration::ZERO);
        assert!(a.to_string().contains(" m=+"));
        assert!(a.year() >= 2024);
    }

    #[test]
    fn display_fraction_and_monotonic() {
        insta::assert_snapshot!(utc(0, 500_000_000), @"1970-01-01 00:00:00.5 +0000 UTC");
        insta::assert_snapshot!(utc(0, 1), @"1970-01-01 00:00:00.000000001 +0000 UTC");
        insta::assert_snapshot!(utc(0, 120_000), @"1970-01-01 00:00:00.00012 +0000 UTC");

        insta::assert_snapshot!(
            with_mono(0, 1_500_000_000),
            @"1970-01-01 00:00:00 +0000 UTC m=+1.500000000",
        );
        insta::assert_snapshot!(
            with_mono(0, -3),
            @"1970-01-01 00:00:00 +0000 UTC m=-0.000000003",
        );
        insta::assert_snapshot!(
            with_mono(0, i64::MAX),
            @"1970-01-01 00:00:00 +0000 UTC m=+9223372036.854775807",
        );
        insta::assert_snapshot!(
            with_mono(0, 1_000_000_000 * 1_000_000_000 + 5),
            @"1970-01-01 00:00:00 +0000 UTC m=+1000000000.000000005",
        );
    }

    #[test]
    fn display_years_and_unnamed_zones() {
        let t = Instant::from_calendar(date(-1, 12, 31), &Location::utc());
        insta::assert_snapshot!(t, @"-0001-12-31 00:00:00 +0000 UTC");
        let t = Instant::from_calendar(date(12345, 6, 7), &Location::utc());
        insta::assert_snapshot!(t, @"12345-06-07 00:00:00 +0000 UTC");

        let unnamed = Location::fixed("", -(3 * 3600 + 1800));
        let t = utc(0, 0).in_location(&unnamed);
        insta::assert_snapshot!(t, @"1969-12-31 20:30:00 -0330 -0330");
    }

    #[test]
    fn zone_bounds() {
        let la = testdata::los_angeles();
        let t = utc(1221681866, 0).in_location(&la);
        let (start, end) = t.zone_bounds();
        let (start, end) = (start.unwrap(), end.unwrap());
        insta::assert_snapshot!(start, @"2008-03-09 03:00:00 -0700 PDT");
        insta::assert_snapshot!(end, @"2008-11-02 01:00:00 -0800 PST");
        assert_eq!(start.location(), la);

        // Before the first transition, the start is open.
        let t = utc(-3_000_000_000, 0).in_location(&la);
        let (start, end) = t.zone_bounds();
        assert!(start.is_none());
        assert_eq!(end.unwrap().unix(), -2717640000);

        // After the last transition, the end is open.
        let t = utc(2_000_000_000, 0).in_location(&la);
        let (start, end) = t.zone_bounds();
        assert_eq!(start.unwrap().unix(), 1320570000);
        assert!(end.is_none());

        let fixed = Location::fixed("X", 60);
        assert_eq!(utc(0, 0).in_location(&fixed).zone_bounds(), (None, None));
    }

    #[test]
    fn add_date() {
        let utc_loc = Location::utc();
        let t = Instant::from_calendar(
            civil::datetime(2024, 1, 31, 10, 20, 30, 40),
            &utc_loc,
        );
        insta::assert_snapshot!(t.add_date(0, 1, 0), @"2024-03-02 10:20:30.00000004 +0000 UTC");
        insta::assert_snapshot!(t.add_date(1, 0, 0), @"2025-01-31 10:20:30.00000004 +0000 UTC");
        insta::assert_snapshot!(t.add_date(0, 0, -31), @"2023-12-31 10:20:30.00000004 +0000 UTC");

        // Calendar arithmetic keeps the wall clock across DST changes.
        let la = testdata::los_angeles();
        let t = Instant::from_calendar(
            civil::datetime(2008, 3, 8, 12, 0, 0, 0),
            &la,
        );
        let u = t.add_date(0, 0, 1);
        insta::assert_snapshot!(u, @"2008-03-09 12:00:00 -0700 PDT");
        assert_eq!(u.duration_since(&t), Duration::from_hours(23));
    }

    #[test]
    fn truncate_and_round() {
        let t = utc(1221681866, 600_000_000);
        insta::assert_snapshot!(t.truncate(Duration::SECOND), @"2008-09-17 20:04:26 +0000 UTC");
        insta::assert_snapshot!(t.round(Duration::SECOND), @"2008-09-17 20:04:27 +0000 UTC");
        insta::assert_snapshot!(t.truncate(Duration::HOUR), @"2008-09-17 20:00:00 +0000 UTC");
        insta::assert_snapshot!(t.round(Duration::HOUR), @"2008-09-17 20:00:00 +0000 UTC");
        assert_eq!(t.truncate(Duration::ZERO), t);
        assert_eq!(t.round(-Duration::SECOND), t);

        // Before the zero instant, rounding still moves to the earlier
        // multiple when truncating.
        let zero = Instant::default();
        let t = zero.saturating_sub(Duration::from_millis(1_500));
        let got = t.truncate(Duration::SECOND);
        assert_eq!(got.duration_since(&zero), Duration::from_secs(-2));
        let got = t.round(Duration::SECOND);
        assert_eq!(got.duration_since(&zero), Duration::from_secs(-1));
    }

    quickcheck::quickcheck! {
        fn prop_calendar_roundtrip(t: Instant) -> bool {
            let date = t.date();
            let clock = t.clock();
            let fields = civil::datetime(
                date.year(),
                i64::from(date.month().number()),
                i64::from(date.day()),
                i64::from(clock.hour()),
                i64::from(clock.minute()),
                i64::from(clock.second()),
                i64::from(t.nanosecond()),
            );
            Instant::from_calendar(fields, &Location::utc()) == t
        }

        fn prop_unix_roundtrip(sec: i64) -> bool {
            Instant::from_unix(sec, 0).unix() == sec
                && Instant::from_unix(sec, 0).nanosecond() == 0
        }

        fn prop_add_then_since(t: Instant, secs: i32) -> bool {
            let d = Duration::from_secs(i64::from(secs));
            t.saturating_add(d).duration_since(&t) == d
        }

        fn prop_truncate_not_after(t: Instant, millis: u32) -> bool {
            let d = Duration::from_millis(i64::from(millis));
            let got = t.truncate(d);
            !got.is_after(&t)
                && (d.is_zero() || t.duration_since(&got) < d)
        }
    }
}
