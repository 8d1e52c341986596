/// The hour, minute and second within a day.
///
/// The nanosecond is not part of a clock reading. Use
/// [`Instant::nanosecond`](crate::Instant::nanosecond) for it.
///
/// # Example
///
/// ```
/// use nanotime::Instant;
///
/// let clock = Instant::from_unix(1221681866, 0).utc().clock();
/// assert_eq!((clock.hour(), clock.minute(), clock.second()), (20, 4, 26));
/// assert_eq!(clock.to_string(), "20:04:26");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Clock {
    hour: i8,
    minute: i8,
    second: i8,
}

impl Clock {
    #[inline]
    pub(crate) fn new_unchecked(hour: i8, minute: i8, second: i8) -> Clock {
        debug_assert!((0..=23).contains(&hour));
        debug_assert!((0..=59).contains(&minute));
        debug_assert!((0..=59).contains(&second));
        Clock { hour, minute, second }
    }

    /// Returns the hour, in `0..=23`.
    #[inline]
    pub fn hour(self) -> i8 {
        self.hour
    }

    /// Returns the minute, in `0..=59`.
    #[inline]
    pub fn minute(self) -> i8 {
        self.minute
    }

    /// Returns the second, in `0..=59`.
    #[inline]
    pub fn second(self) -> i8 {
        self.second
    }
}

impl core::fmt::Display for Clock {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}
