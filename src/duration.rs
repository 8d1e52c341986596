use crate::{
    error::{duration::Error as E, Error},
    util::t::{
        NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_SECOND,
        SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
    },
};

/// A signed span of elapsed time with nanosecond precision.
///
/// A `Duration` is a count of nanoseconds held in a 64-bit signed integer,
/// which limits it to roughly ±292 years. Unlike [`std::time::Duration`], it
/// can be negative.
///
/// All arithmetic on durations saturates at [`Duration::MIN`] and
/// [`Duration::MAX`] instead of panicking or wrapping. Use
/// [`Duration::checked_add`] or [`Duration::checked_sub`] to detect
/// overflow.
///
/// # Text form
///
/// The [`core::fmt::Display`] implementation writes a compact form such as
/// `72h3m0.5s`. Leading zero units are omitted and durations below one
/// second use a smaller unit so that the leading digit is non-zero, as in
/// `1.5ms` or `2µs`. The zero duration is `0s`. The [`core::str::FromStr`]
/// implementation accepts that form and a little more: any sequence of
/// decimal numbers, each with an optional fraction and a unit suffix, with an
/// optional leading sign. Valid units are `ns`, `us` (or `µs`), `ms`, `s`,
/// `m` and `h`.
///
/// # Example
///
/// ```
/// use nanotime::Duration;
///
/// let d: Duration = "1h15m30.918273645s".parse()?;
/// assert_eq!(d.to_string(), "1h15m30.918273645s");
/// assert_eq!(d.truncate(Duration::HOUR).to_string(), "1h0m0s");
/// assert_eq!(d.round(Duration::MINUTE).to_string(), "1h16m0s");
///
/// assert_eq!(Duration::from_millis(1500).to_string(), "1.5s");
/// assert_eq!(Duration::from_micros(-2).to_string(), "-2µs");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    /// The zero duration.
    pub const ZERO: Duration = Duration { nanos: 0 };
    /// The smallest representable duration, about -292 years.
    pub const MIN: Duration = Duration { nanos: i64::MIN };
    /// The largest representable duration, about 292 years.
    pub const MAX: Duration = Duration { nanos: i64::MAX };

    pub const NANOSECOND: Duration = Duration { nanos: 1 };
    pub const MICROSECOND: Duration = Duration { nanos: NANOS_PER_MICRO };
    pub const MILLISECOND: Duration = Duration { nanos: NANOS_PER_MILLI };
    pub const SECOND: Duration = Duration { nanos: NANOS_PER_SECOND };
    pub const MINUTE: Duration =
        Duration { nanos: SECONDS_PER_MINUTE * NANOS_PER_SECOND };
    pub const HOUR: Duration =
        Duration { nanos: SECONDS_PER_HOUR * NANOS_PER_SECOND };

    /// Creates a duration from a count of nanoseconds.
    #[inline]
    pub const fn from_nanos(nanos: i64) -> Duration {
        Duration { nanos }
    }

    /// Creates a duration from a count of microseconds, saturating on
    /// overflow.
    #[inline]
    pub const fn from_micros(micros: i64) -> Duration {
        Duration { nanos: micros.saturating_mul(NANOS_PER_MICRO) }
    }

    /// Creates a duration from a count of milliseconds, saturating on
    /// overflow.
    #[inline]
    pub const fn from_millis(millis: i64) -> Duration {
        Duration { nanos: millis.saturating_mul(NANOS_PER_MILLI) }
    }

    /// Creates a duration from a count of seconds, saturating on overflow.
    #[inline]
    pub const fn from_secs(secs: i64) -> Duration {
        Duration { nanos: secs.saturating_mul(NANOS_PER_SECOND) }
    }

    /// Creates a duration from a count of minutes, saturating on overflow.
    #[inline]
    pub const fn from_mins(mins: i64) -> Duration {
        Duration { nanos: mins.saturating_mul(Duration::MINUTE.nanos) }
    }

    /// Creates a duration from a count of hours, saturating on overflow.
    #[inline]
    pub const fn from_hours(hours: i64) -> Duration {
        Duration { nanos: hours.saturating_mul(Duration::HOUR.nanos) }
    }

    /// Returns this duration as a count of nanoseconds.
    #[inline]
    pub const fn as_nanos(self) -> i64 {
        self.nanos
    }

    /// Returns this duration as a count of whole microseconds, truncating
    /// toward zero.
    #[inline]
    pub const fn as_micros(self) -> i64 {
        self.nanos / NANOS_PER_MICRO
    }

    /// Returns this duration as a count of whole milliseconds, truncating
    /// toward zero.
    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.nanos / NANOS_PER_MILLI
    }

    /// Returns this duration as a floating point number of seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Duration;
    ///
    /// assert_eq!(Duration::from_millis(1500).as_secs_f64(), 1.5);
    /// ```
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.split_float(Duration::SECOND)
    }

    /// Returns this duration as a floating point number of minutes.
    #[inline]
    pub fn as_mins_f64(self) -> f64 {
        self.split_float(Duration::MINUTE)
    }

    /// Returns this duration as a floating point number of hours.
    #[inline]
    pub fn as_hours_f64(self) -> f64 {
        self.split_float(Duration::HOUR)
    }

    /// Converts the whole units and the remainder separately, which keeps
    /// more precision than converting the nanosecond count directly.
    fn split_float(self, unit: Duration) -> f64 {
        let whole = self.nanos / unit.nanos;
        let rem = self.nanos % unit.nanos;
        whole as f64 + rem as f64 / unit.nanos as f64
    }

    /// Returns true if this duration is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.nanos == 0
    }

    /// Returns true if this duration is less than zero.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.nanos < 0
    }

    /// Returns the absolute value of this duration.
    ///
    /// Since [`Duration::MIN`] has no positive counterpart, its absolute
    /// value is [`Duration::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Duration;
    ///
    /// assert_eq!(Duration::from_secs(-5).abs(), Duration::from_secs(5));
    /// assert_eq!(Duration::MIN.abs(), Duration::MAX);
    /// ```
    #[inline]
    pub const fn abs(self) -> Duration {
        Duration { nanos: self.nanos.saturating_abs() }
    }

    /// Adds two durations, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(self, rhs: Duration) -> Option<Duration> {
        match self.nanos.checked_add(rhs.nanos) {
            Some(nanos) => Some(Duration { nanos }),
            None => None,
        }
    }

    /// Subtracts `rhs` from this duration, returning `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        match self.nanos.checked_sub(rhs.nanos) {
            Some(nanos) => Some(Duration { nanos }),
            None => None,
        }
    }

    /// Adds two durations, saturating on overflow.
    #[inline]
    pub const fn saturating_add(self, rhs: Duration) -> Duration {
        Duration { nanos: self.nanos.saturating_add(rhs.nanos) }
    }

    /// Subtracts `rhs` from this duration, saturating on overflow.
    #[inline]
    pub const fn saturating_sub(self, rhs: Duration) -> Duration {
        Duration { nanos: self.nanos.saturating_sub(rhs.nanos) }
    }

    /// Multiplies this duration by an integer, saturating on overflow.
    #[inline]
    pub const fn saturating_mul(self, rhs: i64) -> Duration {
        Duration { nanos: self.nanos.saturating_mul(rhs) }
    }

    /// Rounds this duration toward zero to a multiple of `multiple`.
    ///
    /// When `multiple` is zero or negative, this duration is returned
    /// unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Duration;
    ///
    /// let d = Duration::from_mins(90);
    /// assert_eq!(d.truncate(Duration::HOUR), Duration::HOUR);
    /// assert_eq!((-d).truncate(Duration::HOUR), -Duration::HOUR);
    /// ```
    #[inline]
    pub const fn truncate(self, multiple: Duration) -> Duration {
        if multiple.nanos <= 0 {
            return self;
        }
        Duration { nanos: self.nanos - self.nanos % multiple.nanos }
    }

    /// Rounds this duration to the nearest multiple of `multiple`.
    ///
    /// Halfway values round away from zero. If the result would overflow,
    /// it saturates to [`Duration::MIN`] or [`Duration::MAX`]. When
    /// `multiple` is zero or negative, this duration is returned unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Duration;
    ///
    /// let d = Duration::from_mins(90);
    /// assert_eq!(d.round(Duration::HOUR), Duration::from_hours(2));
    /// assert_eq!((-d).round(Duration::HOUR), Duration::from_hours(-2));
    /// assert_eq!(Duration::MAX.round(Duration::HOUR), Duration::MAX);
    /// ```
    pub const fn round(self, multiple: Duration) -> Duration {
        let (d, m) = (self.nanos, multiple.nanos);
        if m <= 0 {
            return self;
        }
        let r = d % m;
        if d < 0 {
            let r = -r;
            if less_than_half(r, m) {
                return Duration { nanos: d + r };
            }
            // Rounding away from zero can only overflow downwards.
            let d1 = d.wrapping_sub(m).wrapping_add(r);
            if d1 < d {
                return Duration { nanos: d1 };
            }
            return Duration::MIN;
        }
        if less_than_half(r, m) {
            return Duration { nanos: d - r };
        }
        let d1 = d.wrapping_add(m).wrapping_sub(r);
        if d1 > d {
            return Duration { nanos: d1 };
        }
        Duration::MAX
    }
}

/// Reports whether `x + x < y`, treating both as unsigned so that the
/// doubling cannot overflow.
#[inline]
const fn less_than_half(x: i64, y: i64) -> bool {
    (x as u64).wrapping_add(x as u64) < y as u64
}

impl core::ops::Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Duration {
        self.saturating_add(rhs)
    }
}

impl core::ops::AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl core::ops::Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Duration) -> Duration {
        self.saturating_sub(rhs)
    }
}

impl core::ops::SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl core::ops::Mul<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: i64) -> Duration {
        self.saturating_mul(rhs)
    }
}

impl core::ops::Mul<Duration> for i64 {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: Duration) -> Duration {
        rhs.saturating_mul(self)
    }
}

/// Negation saturates, so negating [`Duration::MIN`] gives
/// [`Duration::MAX`].
impl core::ops::Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Duration {
        Duration { nanos: self.nanos.saturating_neg() }
    }
}

impl core::fmt::Display for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut buf = [0u8; 32];
        let start = format_into(self.nanos, &mut buf);
        let s = core::str::from_utf8(&buf[start..])
            .map_err(|_| core::fmt::Error)?;
        f.write_str(s)
    }
}

impl core::fmt::Debug for Duration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

/// Writes the text form of `nanos` right-aligned into `buf` and returns the
/// index of its first byte.
///
/// The longest output, that of [`Duration::MIN`], is 26 bytes.
fn format_into(nanos: i64, buf: &mut [u8; 32]) -> usize {
    let mut w = buf.len();
    let neg = nanos < 0;
    let mut u = nanos.unsigned_abs();

    if u < NANOS_PER_SECOND as u64 {
        // Sub-second durations use a smaller unit so that the leading digit
        // is non-zero.
        w -= 1;
        buf[w] = b's';
        w -= 1;
        let prec = if u == 0 {
            buf[w] = b'0';
            return w;
        } else if u < NANOS_PER_MICRO as u64 {
            buf[w] = b'n';
            0
        } else if u < NANOS_PER_MILLI as u64 {
            // U+00B5 MICRO SIGN needs a second byte.
            w -= 1;
            buf[w..w + 2].copy_from_slice("µ".as_bytes());
            3
        } else {
            buf[w] = b'm';
            6
        };
        let (nw, nu) = format_frac(&mut buf[..w], u, prec);
        w = format_int(&mut buf[..nw], nu);
    } else {
        w -= 1;
        buf[w] = b's';
        let (nw, nu) = format_frac(&mut buf[..w], u, 9);
        u = nu;
        // Seconds are always present, even when zero.
        w = format_int(&mut buf[..nw], u % 60);
        u /= 60;
        if u > 0 {
            w -= 1;
            buf[w] = b'm';
            w = format_int(&mut buf[..w], u % 60);
            u /= 60;
            if u > 0 {
                w -= 1;
                buf[w] = b'h';
                w = format_int(&mut buf[..w], u);
            }
        }
    }
    if neg {
        w -= 1;
        buf[w] = b'-';
    }
    w
}

/// Writes the low `prec` decimal digits of `v` as a fraction at the end of
/// `buf`, omitting trailing zeros, and omitting the decimal point entirely
/// when every digit is zero.
///
/// Returns the index of the first byte written along with `v` with those
/// digits removed.
fn format_frac(buf: &mut [u8], mut v: u64, prec: usize) -> (usize, u64) {
    let mut w = buf.len();
    let mut print = false;
    for _ in 0..prec {
        let digit = (v % 10) as u8;
        print = print || digit != 0;
        if print {
            w -= 1;
            buf[w] = digit + b'0';
        }
        v /= 10;
    }
    if print {
        w -= 1;
        buf[w] = b'.';
    }
    (w, v)
}

/// Writes `v` in decimal at the end of `buf` and returns the index of its
/// first byte.
fn format_int(buf: &mut [u8], mut v: u64) -> usize {
    let mut w = buf.len();
    if v == 0 {
        w -= 1;
        buf[w] = b'0';
        return w;
    }
    while v > 0 {
        w -= 1;
        buf[w] = (v % 10) as u8 + b'0';
        v /= 10;
    }
    w
}

impl core::str::FromStr for Duration {
    type Err = Error;

    fn from_str(input: &str) -> Result<Duration, Error> {
        parse(input).map_err(Error::from)
    }
}

/// The magnitude of [`Duration::MIN`], the largest magnitude a parsed
/// duration may reach before its sign is applied.
const MAX_MAGNITUDE: u64 = 1 << 63;

fn parse(input: &str) -> Result<Duration, E> {
    let mut s = input;
    let mut neg = false;
    if let Some(rest) = s.strip_prefix('-') {
        neg = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }
    // A bare zero is the one value that needs no unit.
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(E::invalid(input));
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        let first = s.as_bytes()[0];
        if !(first == b'.' || first.is_ascii_digit()) {
            return Err(E::invalid(input));
        }

        let before = s.len();
        let (mut value, rest) =
            parse_leading_int(s).ok_or_else(|| E::overflow(input))?;
        s = rest;
        let has_int = before != s.len();

        let mut frac = 0;
        let mut scale = 1.0;
        let mut has_frac = false;
        if let Some(rest) = s.strip_prefix('.') {
            let before = rest.len();
            let (f, sc, rest) = parse_leading_fraction(rest);
            frac = f;
            scale = sc;
            s = rest;
            has_frac = before != s.len();
        }
        if !has_int && !has_frac {
            // Just a lone "." with no digits on either side.
            return Err(E::invalid(input));
        }

        let unit_len = s
            .bytes()
            .position(|b| b == b'.' || b.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(E::missing_unit(input));
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let unit_nanos = unit_to_nanos(unit)
            .ok_or_else(|| E::unknown_unit(unit, input))?;

        if value > MAX_MAGNITUDE / unit_nanos {
            return Err(E::overflow(input));
        }
        value *= unit_nanos;
        if frac > 0 {
            // The float keeps the fraction at full precision relative to
            // the unit. Conversion back to an integer truncates.
            value += (frac as f64 * (unit_nanos as f64 / scale)) as u64;
            if value > MAX_MAGNITUDE {
                return Err(E::overflow(input));
            }
        }
        if value > MAX_MAGNITUDE - total {
            return Err(E::overflow(input));
        }
        total += value;
    }
    if neg {
        // `total` may be exactly 2^63, which wraps to `i64::MIN`.
        return Ok(Duration::from_nanos((total as i64).wrapping_neg()));
    }
    if total > i64::MAX as u64 {
        return Err(E::overflow(input));
    }
    Ok(Duration::from_nanos(total as i64))
}

fn unit_to_nanos(unit: &str) -> Option<u64> {
    let nanos = match unit {
        "ns" => 1,
        // U+00B5 MICRO SIGN and U+03BC GREEK SMALL LETTER MU.
        "us" | "\u{00B5}s" | "\u{03BC}s" => NANOS_PER_MICRO,
        "ms" => NANOS_PER_MILLI,
        "s" => NANOS_PER_SECOND,
        "m" => Duration::MINUTE.nanos,
        "h" => Duration::HOUR.nanos,
        _ => return None,
    };
    Some(nanos as u64)
}

/// Consumes leading ASCII digits of `s` as an integer.
///
/// Returns `None` when the integer exceeds `2^63`.
fn parse_leading_int(s: &str) -> Option<(u64, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut x: u64 = 0;
    for &b in &s.as_bytes()[..digits] {
        if x > MAX_MAGNITUDE / 10 {
            return None;
        }
        x = x * 10 + u64::from(b - b'0');
        if x > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((x, &s[digits..]))
}

/// Consumes leading ASCII digits of `s` as the digits of a fraction.
///
/// Returns the digits as an integer along with the power of ten to divide it
/// by. Digits that would overflow are consumed but ignored, so arbitrarily
/// precise fractions are accepted.
fn parse_leading_fraction(s: &str) -> (u64, f64, &str) {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let mut x: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for &b in &s.as_bytes()[..digits] {
        if overflow {
            continue;
        }
        if x > (i64::MAX as u64) / 10 {
            overflow = true;
            continue;
        }
        let y = x * 10 + u64::from(b - b'0');
        if y > MAX_MAGNITUDE {
            overflow = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[digits..])
}

/// Converts a [`std::time::Duration`] into a `Duration`.
///
/// # Errors
///
/// This fails when the given duration is longer than [`Duration::MAX`].
impl TryFrom<std::time::Duration> for Duration {
    type Error = Error;

    #[inline]
    fn try_from(d: std::time::Duration) -> Result<Duration, Error> {
        let nanos =
            i64::try_from(d.as_nanos()).map_err(|_| E::ConvertTooBig)?;
        Ok(Duration::from_nanos(nanos))
    }
}

/// Converts a `Duration` into a [`std::time::Duration`].
///
/// # Errors
///
/// This fails when the duration is negative, since a
/// [`std::time::Duration`] is unsigned.
impl TryFrom<Duration> for std::time::Duration {
    type Error = Error;

    #[inline]
    fn try_from(d: Duration) -> Result<std::time::Duration, Error> {
        let nanos =
            u64::try_from(d.as_nanos()).map_err(|_| E::ConvertNegative)?;
        Ok(std::time::Duration::from_nanos(nanos))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        use serde::de;

        struct DurationVisitor;

        impl<'de> de::Visitor<'de> for DurationVisitor {
            type Value = Duration;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a duration string such as \"1h30m\"")
            }

            #[inline]
            fn visit_str<E: de::Error>(
                self,
                value: &str,
            ) -> Result<Duration, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Duration {
    fn arbitrary(g: &mut quickcheck::Gen) -> Duration {
        Duration::from_nanos(<i64 as quickcheck::Arbitrary>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Duration>> {
        let nanos = quickcheck::Arbitrary::shrink(&self.nanos);
        Box::new(nanos.map(Duration::from_nanos))
    }
}
