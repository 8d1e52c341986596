use crate::error::Error;

/// A month of the Gregorian calendar.
///
/// Months are numbered from `1` (January) to `12` (December). The
/// [`core::fmt::Display`] implementation prints the full English name.
///
/// # Example
///
/// ```
/// use nanotime::civil::Month;
///
/// assert_eq!(Month::September.to_string(), "September");
/// assert_eq!(Month::try_from(9u8)?, Month::September);
/// assert_eq!(Month::September.number(), 9);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(i8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

const LONG_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    /// Returns the number of this month, from `1` for January to `12` for
    /// December.
    #[inline]
    pub fn number(self) -> i8 {
        self as i8
    }

    /// Returns the full English name of this month.
    #[inline]
    pub fn name(self) -> &'static str {
        LONG_NAMES[self.index()]
    }

    /// Returns the month after this one, wrapping from December to January.
    pub fn next(self) -> Month {
        MONTHS[(self.index() + 1) % 12]
    }

    /// Returns the month before this one, wrapping from January to December.
    pub fn previous(self) -> Month {
        MONTHS[(self.index() + 11) % 12]
    }

    /// Returns the month with the given number.
    ///
    /// Callers must guarantee that `number` is in `1..=12`.
    #[inline]
    pub(crate) fn from_number_unchecked(number: i64) -> Month {
        debug_assert!((1..=12).contains(&number), "invalid month {number}");
        MONTHS[(number - 1) as usize]
    }

    #[inline]
    fn index(self) -> usize {
        usize::from(self as u8) - 1
    }
}

impl core::fmt::Display for Month {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i64> for Month {
    type Error = Error;

    fn try_from(number: i64) -> Result<Month, Error> {
        if !(1..=12).contains(&number) {
            return Err(Error::range("month", number, 1, 12));
        }
        Ok(Month::from_number_unchecked(number))
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

    fn try_from(number: u8) -> Result<Month, Error> {
        Month::try_from(i64::from(number))
    }
}

impl From<Month> for i64 {
    fn from(month: Month) -> i64 {
        i64::from(month.number())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Month {
    fn arbitrary(g: &mut quickcheck::Gen) -> Month {
        *g.choose(&MONTHS).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Month::January.to_string(), "January");
        assert_eq!(Month::December.to_string(), "December");
        for (i, month) in MONTHS.iter().enumerate() {
            assert_eq!(month.name(), LONG_NAMES[i]);
            assert_eq!(i64::from(*month), i as i64 + 1);
        }
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert!(Month::try_from(0u8).is_err());
        assert!(Month::try_from(13i64).is_err());
        assert!(Month::try_from(-1i64).is_err());
        assert_eq!(Month::try_from(12u8).unwrap(), Month::December);
        insta::assert_snapshot!(
            Month::try_from(13u8).unwrap_err(),
            @"parameter 'month' with value 13 is not in the required range of 1..=12",
        );
    }

    #[test]
    fn wrapping_neighbors() {
        assert_eq!(Month::December.next(), Month::January);
        assert_eq!(Month::January.previous(), Month::December);
        assert_eq!(Month::June.next(), Month::July);
    }

    quickcheck::quickcheck! {
        fn prop_number_roundtrip(month: Month) -> bool {
            Month::try_from(i64::from(month)).unwrap() == month
        }

        fn prop_next_previous_inverse(month: Month) -> bool {
            month.next().previous() == month
        }
    }
}
