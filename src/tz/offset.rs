/// An enum indicating whether a zone is in DST or not.
///
/// DST stands for "daylight saving time." It is a label applied to some
/// zones of a location as a way to contrast them with "standard time." DST
/// is usually, but not always, one hour ahead of standard time.
///
/// This type has a `From<bool>` trait implementation, where the bool is
/// interpreted as being `true` when DST is active.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dst {
    /// DST is not in effect. In other words, standard time is in effect.
    #[default]
    No,
    /// DST is in effect.
    Yes,
}

impl Dst {
    /// Returns true when this value is equal to `Dst::Yes`.
    pub fn is_dst(self) -> bool {
        matches!(self, Dst::Yes)
    }

    /// Returns true when this value is equal to `Dst::No`.
    ///
    /// `std` in this context refers to "standard time." That is, it is the
    /// offset from UTC used when DST is not in effect.
    pub fn is_std(self) -> bool {
        matches!(self, Dst::No)
    }
}

impl From<bool> for Dst {
    fn from(is_dst: bool) -> Dst {
        if is_dst {
            Dst::Yes
        } else {
            Dst::No
        }
    }
}

/// Writes a UTC offset in seconds as `±hhmm`, dropping any leftover seconds.
///
/// This is how an offset is shown in place of a zone name when the zone has
/// none.
pub(crate) fn write_offset_hhmm(
    f: &mut core::fmt::Formatter,
    offset: i32,
) -> core::fmt::Result {
    let sign = if offset < 0 { '-' } else { '+' };
    let minutes = offset.unsigned_abs() / 60;
    write!(f, "{sign}{:02}{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Hhmm(i32);

    impl core::fmt::Display for Hhmm {
        fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            write_offset_hhmm(f, self.0)
        }
    }

    #[test]
    fn dst_from_bool() {
        assert_eq!(Dst::from(true), Dst::Yes);
        assert!(Dst::from(false).is_std());
        assert!(!Dst::No.is_dst());
    }

    #[test]
    fn offset_hhmm() {
        insta::assert_snapshot!(Hhmm(0), @"+0000");
        insta::assert_snapshot!(Hhmm(-28800), @"-0800");
        insta::assert_snapshot!(Hhmm(19800), @"+0530");
        insta::assert_snapshot!(Hhmm(-12345), @"-0325");
    }
}
