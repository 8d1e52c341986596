use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    InvalidTable { name: Box<str> },
    LocalAlreadySet,
    TransitionOutOfOrder { index: usize, prev: i64, when: i64 },
    ZoneIndexOutOfRange { transition: usize, zone: usize, zones: usize },
}

impl Error {
    pub(crate) fn is_invalid_parameter(&self) -> bool {
        !matches!(*self, Error::LocalAlreadySet)
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Tz(err).into()
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
            InvalidTable { ref name } => {
                write!(f, "invalid zone table for location {name:?}")
            }
            LocalAlreadySet => f.write_str(
                "the Local location has already been resolved \
                 and cannot be replaced",
            ),
            TransitionOutOfOrder { index, prev, when } => write!(
                f,
                "transition {index} at unix second {when} does not come \
                 after the previous transition at unix second {prev}",
            ),
            ZoneIndexOutOfRange { transition, zone, zones } => write!(
                f,
                "transition {transition} refers to zone {zone}, \
                 but the table only has {zones} zones",
            ),
        }
    }
}
