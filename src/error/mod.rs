use std::sync::Arc;

pub(crate) mod duration;
pub(crate) mod tz;

/// An error that can occur in this crate.
///
/// Most operations in this crate cannot fail: instant and duration
/// arithmetic saturates, and calendar construction normalizes out-of-range
/// fields by carrying them into larger units. Errors only arise at the
/// boundaries:
///
/// * Parsing the text form of a [`Duration`](crate::Duration).
/// * Converting between a [`Duration`](crate::Duration) and
/// [`std::time::Duration`] when the value doesn't fit.
/// * Converting a raw number into a [`Month`](crate::civil::Month) or a
/// [`Weekday`](crate::civil::Weekday).
/// * Building a [`Location`](crate::tz::Location) from a zone table that
/// refers to a missing zone or whose transitions are out of order.
/// * Installing the Local location after it has already been resolved.
///
/// # Introspection is limited
///
/// Other than implementing [`std::error::Error`], [`core::fmt::Debug`] and
/// [`core::fmt::Display`], this error type provides very limited
/// introspection. The `Error::is_*` predicates are not exhaustive.
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheap to clone and one word in
    /// size.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates a new error value from `core::fmt::Arguments`.
    ///
    /// It is expected to use [`format_args!`](format_args) to create a
    /// `core::fmt::Arguments`.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Error;
    ///
    /// let err = Error::from_args(format_args!("something failed"));
    /// assert_eq!(err.to_string(), "something failed");
    /// ```
    pub fn from_args<'a>(message: core::fmt::Arguments<'a>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::from_args(message)))
    }

    /// Returns true when this error originated as a result of a value being
    /// out of the supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{civil::Month, Duration};
    ///
    /// assert!(Month::try_from(13u8).unwrap_err().is_range());
    /// assert!("9999999999h".parse::<Duration>().unwrap_err().is_range());
    /// ```
    pub fn is_range(&self) -> bool {
        use self::ErrorKind::*;

        match *self.root().kind() {
            Range(_) => true,
            Duration(ref err) => err.is_range(),
            _ => false,
        }
    }

    /// Returns true when this error originated as a result of invalid input
    /// given to a constructor, such as a malformed zone table or a duration
    /// string that doesn't follow the duration grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::Duration;
    ///
    /// assert!("1 hour".parse::<Duration>().unwrap_err().is_invalid_parameter());
    /// ```
    pub fn is_invalid_parameter(&self) -> bool {
        use self::ErrorKind::*;

        match *self.root().kind() {
            Duration(ref err) => !err.is_range(),
            Tz(ref err) => err.is_invalid_parameter(),
            _ => false,
        }
    }
}

impl Error {
    /// Creates a new error indicating that a `given` value is out of the
    /// specified `min..=max` range. The given `what` label is used in the
    /// error message as a human readable description of what exactly is out
    /// of range. (e.g., "month")
    #[inline(never)]
    #[cold]
    pub(crate) fn range(
        what: &'static str,
        given: impl Into<i128>,
        min: impl Into<i128>,
        max: impl Into<i128>,
    ) -> Error {
        Error::from(ErrorKind::Range(RangeError {
            what,
            given: given.into(),
            min: min.into(),
            max: max.into(),
        }))
    }

    /// Returns a new error whose kind is `consequent` and whose cause is
    /// `self`.
    ///
    /// The consequent is expected to be freshly built and thus without a
    /// cause of its own. Its kind is copied into a new allocation so that
    /// clones of `consequent` held elsewhere are left untouched.
    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        debug_assert!(
            consequent.inner.cause.is_none(),
            "cause of consequence must be `None`"
        );
        let kind = consequent.inner.kind.clone();
        Error { inner: Arc::new(ErrorInner { kind, cause: Some(self) }) }
    }

    /// Returns the root error in this chain.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(ref cause) = err.inner.cause {
            err = cause;
        }
        err
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut next = Some(self);
        core::iter::from_fn(move || {
            let err = next?;
            next = err.inner.cause.as_ref();
            Some(err)
        })
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

/// The underlying kind of a [`Error`].
#[derive(Clone, Debug)]
pub(crate) enum ErrorKind {
    Adhoc(AdhocError),
    Duration(self::duration::Error),
    Range(RangeError),
    Tz(self::tz::Error),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Adhoc(ref msg) => msg.fmt(f),
            Duration(ref err) => err.fmt(f),
            Range(ref err) => err.fmt(f),
            Tz(ref err) => err.fmt(f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

/// A generic error message.
///
/// This supports the `Error::from_args` public API, which permits callers to
/// manifest their own `Error` values from an arbitrary message.
#[derive(Clone)]
pub(crate) struct AdhocError {
    message: Box<str>,
}

impl AdhocError {
    fn from_args<'a>(message: core::fmt::Arguments<'a>) -> AdhocError {
        AdhocError { message: message.to_string().into_boxed_str() }
    }
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.message, f)
    }
}

impl core::fmt::Debug for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Debug::fmt(&self.message, f)
    }
}

/// An error that occurs when an input value is out of bounds.
///
/// The error message produced by this type will include a name describing
/// which input was out of bounds, the value given and its minimum and maximum
/// allowed values.
#[derive(Clone, Debug)]
pub(crate) struct RangeError {
    what: &'static str,
    given: i128,
    min: i128,
    max: i128,
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let RangeError { what, given, min, max } = *self;
        write!(
            f,
            "parameter '{what}' with value {given} \
             is not in the required range of {min}..={max}",
        )
    }
}

/// A simple trait to encapsulate automatic conversion to `Error`.
///
/// This trait basically exists to make `ErrorContext` work without needing
/// to rely on public `From` impls.
pub(crate) trait IntoError {
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

/// A trait for contextualizing error values.
///
/// This makes it easy to contextualize either `Error` or `Result<T, Error>`.
/// Specifically, in the latter case, it absolves one of the need to call
/// `map_err` everywhere one wants to add context to an error.
pub(crate) trait ErrorContext<T> {
    /// Like `context`, but hides error construction within a closure.
    ///
    /// The closure avoids paying the cost of contextual error creation in the
    /// happy path.
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: IntoError,
{
    fn with_context<C: IntoError>(
        self,
        consequent: impl FnOnce() -> C,
    ) -> Result<T, Error> {
        self.map_err(|err| {
            err.into_error().context_impl(consequent().into_error())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // We test that our 'Error' type is the size we expect. This isn't an API
    // guarantee, but if the size increases, we really want to make sure we
    // decide to do that intentionally.
    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn range_message() {
        let err = Error::range("month", 13, 1, 12);
        insta::assert_snapshot!(
            err,
            @"parameter 'month' with value 13 is not in the required range of 1..=12",
        );
        assert!(err.is_range());
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn context_chain_displays_outermost_first() {
        let root: Result<(), Error> = Err(Error::range("zone index", 5, 0, 1));
        let err = root
            .with_context(|| Error::from_args(format_args!("building table")))
            .unwrap_err();
        insta::assert_snapshot!(
            err,
            @"building table: parameter 'zone index' with value 5 is not in the required range of 0..=1",
        );
        // Predicates look at the root cause.
        assert!(err.is_range());
    }

    #[test]
    fn context_on_shared_error_does_not_mutate_clone() {
        let consequent = Error::from_args(format_args!("outer"));
        let keep = consequent.clone();
        let root: Result<(), Error> = Err(Error::range("x", 1, 2, 3));
        let err = root.with_context(|| consequent).unwrap_err();
        assert_eq!(keep.to_string(), "outer");
        assert!(err.to_string().starts_with("outer: "));
    }
}
