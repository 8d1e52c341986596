/*!
Locations and the resolution of zone offsets.

A [`Location`] maps any Unix second to the [`Zone`] in effect at that second.
Locations are built from an in-memory [`ZoneTable`]. Loading tables from a
zone database on disk is left to callers.

Two locations are process-wide singletons: [`Location::utc`] and
[`Location::local`]. Local is fixed the first time it is needed, either by an
earlier call to [`set_local`] or from the `TZ` environment variable.
*/

pub use self::{
    local::set_local,
    location::{Location, Transition, Zone, ZoneInfo, ZoneTable},
    offset::Dst,
};

pub(crate) use self::offset::write_offset_hhmm;

mod cache;
mod local;
mod location;
mod offset;
#[cfg(test)]
pub(crate) mod testdata;

/// The Unix second used as the start of a zone range that has no start.
pub const BEGINNING_OF_TIME: i64 = i64::MIN;

/// The Unix second used as the end of a zone range that has no end.
pub const END_OF_TIME: i64 = i64::MAX;
