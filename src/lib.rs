/*!
Nanosecond instants, signed durations and zone-aware calendar views.

This crate provides three main types:

* [`Instant`] is a point in time with nanosecond precision. Instants from
[`Instant::now`] also carry a monotonic clock reading, which makes measuring
elapsed time immune to changes of the system clock.
* [`Duration`] is a signed count of nanoseconds, spanning roughly ±292 years.
It has a compact text form like `1h2m3.5s`, which it can also parse.
* [`tz::Location`] maps instants to zones, such as `PST` or `PDT`, through a
table of zones and transitions.

Calendar values live in the [`civil`] module. An instant is viewed through
its location to produce a year, month, day, weekday and so on.

# Example

```
use nanotime::{civil, tz::Location, Duration, Instant};

let ist = Location::fixed("IST", 5 * 3600 + 1800);
let t = Instant::from_unix(0, 0).in_location(&ist);
assert_eq!(t.to_string(), "1970-01-01 05:30:00 +0530 IST");

let d: Duration = "1h30m".parse()?;
let later = t.saturating_add(d);
assert_eq!(later.clock().to_string(), "07:00:00");

let t = Instant::from_calendar(civil::date(2000, 1, 1), &Location::utc());
assert_eq!(t.iso_week().to_string(), "1999-W52");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **logging** - When enabled, the `log` crate is used to emit messages about
location construction, zone lookups and the Local location. This is useful
when debugging why a wall clock time resolved the way it did.
* **serde** - When enabled, [`Duration`] implements `Serialize` and
`Deserialize` through its text form, and the zone table types in [`tz`]
implement them as plain structures.
*/

#![deny(rustdoc::broken_intra_doc_links)]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

pub use crate::{duration::Duration, error::Error, instant::Instant};

#[macro_use]
mod logging;

pub mod civil;
mod duration;
mod error;
mod instant;
pub mod tz;
mod util;

#[cfg(test)]
mod tests {
    use crate::tz::Location;

    use super::*;

    #[test]
    fn public_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Instant>();
        assert_send_sync::<Duration>();
        assert_send_sync::<Error>();
        assert_send_sync::<tz::Location>();
    }

    #[test]
    fn duration_between_calendar_instants() {
        let utc = Location::utc();
        let a = Instant::from_calendar(civil::date(2024, 2, 28), &utc);
        let b = Instant::from_calendar(civil::date(2024, 3, 1), &utc);
        let d = b.duration_since(&a);
        insta::assert_snapshot!(d, @"48h0m0s");
    }
}
