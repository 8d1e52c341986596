use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ConvertNegative,
    ConvertTooBig,
    Invalid { input: Box<str> },
    MissingUnit { input: Box<str> },
    Overflow { input: Box<str> },
    UnknownUnit { unit: Box<str>, input: Box<str> },
}

impl Error {
    pub(crate) fn invalid(input: &str) -> Error {
        Error::Invalid { input: input.into() }
    }

    pub(crate) fn missing_unit(input: &str) -> Error {
        Error::MissingUnit { input: input.into() }
    }

    pub(crate) fn overflow(input: &str) -> Error {
        Error::Overflow { input: input.into() }
    }

    pub(crate) fn unknown_unit(unit: &str, input: &str) -> Error {
        Error::UnknownUnit { unit: unit.into(), input: input.into() }
    }

    pub(crate) fn is_range(&self) -> bool {
        matches!(
            *self,
            Error::ConvertNegative
                | Error::ConvertTooBig
                | Error::Overflow { .. }
        )
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Duration(err).into()
    }
}

impl error::IntoError for Error {
    fn into_error(self) -> error::Error {
        self.into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ConvertNegative => f.write_str(
                "cannot convert negative duration \
                 to unsigned `std::time::Duration`",
            ),
            ConvertTooBig => f.write_str(
                "`std::time::Duration` exceeds the range \
                 of a signed 64-bit nanosecond duration",
            ),
            Invalid { ref input } => {
                write!(f, "invalid duration {input:?}")
            }
            MissingUnit { ref input } => {
                write!(f, "missing unit in duration {input:?}")
            }
            Overflow { ref input } => write!(
                f,
                "duration {input:?} overflows a signed 64-bit \
                 nanosecond count",
            ),
            UnknownUnit { ref unit, ref input } => {
                write!(f, "unknown unit {unit:?} in duration {input:?}")
            }
        }
    }
}
