use std::sync::OnceLock;

use crate::{
    error::{tz::Error as E, Error},
    tz::Location,
};

static LOCAL: OnceLock<Location> = OnceLock::new();

/// Installs the location used as Local for the rest of the process.
///
/// This must be called before anything resolves Local, which includes
/// [`Instant::now`](crate::Instant::now),
/// [`Instant::from_unix`](crate::Instant::from_unix) and
/// [`Location::local`]. When it isn't called, Local is resolved from the
/// `TZ` environment variable on first use. Since no zone database is built
/// in, only an unset or empty `TZ`, `UTC` and `:UTC` are understood. They
/// all give a Local that behaves exactly like UTC. Any other value logs a
/// warning and also falls back to UTC.
///
/// # Errors
///
/// This returns an error if Local has already been resolved or installed.
///
/// # Example
///
/// ```no_run
/// use nanotime::{tz::{self, Location}, Instant};
///
/// tz::set_local(Location::fixed("JST", 9 * 3600))?;
/// let t = Instant::from_unix(0, 0);
/// assert_eq!(t.to_string(), "1970-01-01 09:00:00 +0900 JST");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn set_local(location: Location) -> Result<(), Error> {
    if LOCAL.set(location).is_err() {
        return Err(Error::from(E::LocalAlreadySet));
    }
    debug!("installed {:?} as the Local location", get().name());
    Ok(())
}

/// Returns the Local location, resolving it on first use.
pub(crate) fn get() -> &'static Location {
    LOCAL.get_or_init(|| from_tz_env(std::env::var("TZ").ok().as_deref()))
}

/// Resolves Local from the value of the `TZ` environment variable.
fn from_tz_env(tz: Option<&str>) -> Location {
    match tz {
        None => {
            debug!("TZ is unset, using UTC as the Local location");
        }
        Some("") | Some("UTC") | Some(":UTC") => {
            debug!("TZ={tz:?} names UTC, using it as the Local location");
        }
        Some(_) => {
            warn!(
                "TZ={tz:?} cannot be resolved without a zone database, \
                 using UTC as the Local location",
            );
        }
    }
    Location::utc()
}
