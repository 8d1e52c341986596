use crate::error::Error;

/// A day of the week.
///
/// Weekdays are numbered from `0` (Sunday) to `6` (Saturday). The
/// [`core::fmt::Display`] implementation prints the full English name.
///
/// # Example
///
/// ```
/// use nanotime::{civil::Weekday, Instant};
///
/// let t = Instant::from_unix(0, 0).utc();
/// assert_eq!(t.weekday(), Weekday::Thursday);
/// assert_eq!(t.weekday().to_string(), "Thursday");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(i8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const LONG_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Weekday {
    /// Returns the number of days since Sunday. That is, `0` for Sunday
    /// through `6` for Saturday.
    #[inline]
    pub fn to_sunday_zero_offset(self) -> i8 {
        self as i8
    }

    /// Returns the ISO 8601 number of this weekday. That is, `1` for Monday
    /// through `7` for Sunday.
    #[inline]
    pub fn to_monday_one_offset(self) -> i8 {
        match self {
            Weekday::Sunday => 7,
            day => day as i8,
        }
    }

    /// Returns the full English name of this weekday.
    #[inline]
    pub fn name(self) -> &'static str {
        LONG_NAMES[self as usize]
    }

    /// Returns the day after this one, wrapping from Saturday to Sunday.
    #[inline]
    pub fn next(self) -> Weekday {
        WEEKDAYS[(self as usize + 1) % 7]
    }

    /// Returns the day before this one, wrapping from Sunday to Saturday.
    #[inline]
    pub fn previous(self) -> Weekday {
        WEEKDAYS[(self as usize + 6) % 7]
    }

    /// Returns the weekday `0..=6` days after Sunday.
    #[inline]
    pub(crate) fn from_sunday_zero_offset_unchecked(offset: i64) -> Weekday {
        debug_assert!((0..=6).contains(&offset), "invalid weekday {offset}");
        WEEKDAYS[offset as usize]
    }
}

impl core::fmt::Display for Weekday {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Weekday {
    type Error = Error;

    fn try_from(offset: i64) -> Result<Weekday, Error> {
        if !(0..=6).contains(&offset) {
            return Err(Error::range("weekday", offset, 0, 6));
        }
        Ok(Weekday::from_sunday_zero_offset_unchecked(offset))
    }
}

impl TryFrom<u8> for Weekday {
    type Error = Error;

    fn try_from(offset: u8) -> Result<Weekday, Error> {
        Weekday::try_from(i64::from(offset))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Weekday {
    fn arbitrary(g: &mut quickcheck::Gen) -> Weekday {
        *g.choose(&WEEKDAYS).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Weekday::Sunday.to_string(), "Sunday");
        assert_eq!(Weekday::Saturday.to_string(), "Saturday");
        assert_eq!(Weekday::Wednesday.name(), "Wednesday");
    }

    #[test]
    fn offsets() {
        assert_eq!(Weekday::Sunday.to_sunday_zero_offset(), 0);
        assert_eq!(Weekday::Sunday.to_monday_one_offset(), 7);
        assert_eq!(Weekday::Monday.to_monday_one_offset(), 1);
        assert_eq!(Weekday::Saturday.to_monday_one_offset(), 6);
    }

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(Weekday::Saturday.next(), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.previous(), Weekday::Saturday);
        assert_eq!(Weekday::Monday.next().previous(), Weekday::Monday);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(Weekday::try_from(7u8).is_err());
        assert!(Weekday::try_from(-1i64).is_err());
        assert_eq!(Weekday::try_from(3u8).unwrap(), Weekday::Wednesday);
    }

    quickcheck::quickcheck! {
        fn prop_offset_roundtrip(weekday: Weekday) -> bool {
            let offset = i64::from(weekday.to_sunday_zero_offset());
            Weekday::try_from(offset).unwrap() == weekday
        }
    }
}
