use std::sync::{Arc, OnceLock};

use crate::{
    error::{tz::Error as E, Error, ErrorContext},
    tz::{
        cache::{CachedZone, ZoneCache},
        Dst, BEGINNING_OF_TIME, END_OF_TIME,
    },
};

/// A named set of zone offsets and the instants at which they change.
///
/// A location answers one question: given a Unix second, which zone (name,
/// UTC offset and DST flag) is in effect, and over what range of Unix
/// seconds does that answer hold? See [`Location::lookup`].
///
/// Locations are built from a [`ZoneTable`], which some external loader
/// produces. This crate does not read a zone database from disk. It does
/// provide the [`Location::utc`] and [`Location::local`] singletons and
/// fixed-offset locations via [`Location::fixed`].
///
/// A `Location` is a cheap handle. Cloning it does not copy the table, and
/// two handles compare equal only when they refer to the same table.
///
/// # Example
///
/// ```
/// use nanotime::tz::{Dst, Location, Transition, Zone, ZoneTable};
///
/// let table = ZoneTable {
///     zones: vec![
///         Zone { name: "PST".into(), offset: -8 * 3600, dst: Dst::No },
///         Zone { name: "PDT".into(), offset: -7 * 3600, dst: Dst::Yes },
///     ],
///     transitions: vec![
///         Transition { when: 1205056800, zone: 1 },
///         Transition { when: 1225616400, zone: 0 },
///     ],
///     extend: None,
/// };
/// let loc = Location::new("America/Los_Angeles", table)?;
///
/// let info = loc.lookup(1221681866);
/// assert_eq!(info.name(), "PDT");
/// assert_eq!(info.offset(), -7 * 3600);
/// assert!(info.dst().is_dst());
/// assert_eq!(info.valid_from(), 1205056800);
/// assert_eq!(info.valid_to(), 1225616400);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone)]
pub struct Location {
    inner: Arc<LocationInner>,
}

struct LocationInner {
    name: Box<str>,
    zones: Vec<Zone>,
    transitions: Vec<Transition>,
    extend: Option<Box<str>>,
    cache: ZoneCache,
}

/// A zone of a location: a name, an offset from UTC and a DST flag.
///
/// The name is usually an abbreviation such as `PST`. It may be empty, in
/// which case instants in this zone display their offset instead.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub name: String,
    /// Seconds east of UTC.
    pub offset: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub dst: Dst,
}

/// The instant, in Unix seconds, at which a location switches to a zone.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub when: i64,
    /// An index into [`ZoneTable::zones`].
    pub zone: usize,
}

/// The raw material of a [`Location`].
///
/// Transitions must be sorted in strictly increasing order of `when`, and
/// every transition must refer to one of `zones`. [`Location::new`] checks
/// both.
///
/// `extend` is a POSIX TZ rule string (such as `PST8PDT,M3.2.0,M11.1.0`)
/// describing zones after the last transition. It is retained on the
/// location but never evaluated: instants after the last transition stay in
/// that transition's zone.
///
/// With the `serde` feature enabled, this type can be deserialized. Only
/// `zones` is required:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use nanotime::tz::{Location, ZoneTable};
///
/// let table: ZoneTable = serde_json::from_str(r#"{
///     "zones": [{"name": "CET", "offset": 3600}],
///     "extend": "CET-1"
/// }"#)?;
/// let loc = Location::new("Europe/Somewhere", table)?;
/// assert_eq!(loc.lookup(0).offset(), 3600);
/// assert_eq!(loc.extend(), Some("CET-1"));
/// # }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneTable {
    pub zones: Vec<Zone>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub transitions: Vec<Transition>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub extend: Option<String>,
}

/// The answer to a [`Location::lookup`].
///
/// The zone described holds for Unix seconds in `valid_from..valid_to`. An
/// open-ended range uses [`BEGINNING_OF_TIME`] or [`END_OF_TIME`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ZoneInfo<'a> {
    name: &'a str,
    offset: i32,
    valid_from: i64,
    valid_to: i64,
    dst: Dst,
}

impl<'a> ZoneInfo<'a> {
    /// Returns the zone name, such as `PDT`.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the zone's offset from UTC in seconds.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Returns whether the zone is a DST zone.
    pub fn dst(&self) -> Dst {
        self.dst
    }

    /// Returns the first Unix second at which this zone is in effect.
    pub fn valid_from(&self) -> i64 {
        self.valid_from
    }

    /// Returns the first Unix second after `valid_from` at which this zone
    /// is no longer in effect.
    pub fn valid_to(&self) -> i64 {
        self.valid_to
    }
}

impl Location {
    /// Builds a location from a zone table.
    ///
    /// # Errors
    ///
    /// This returns an error when a transition refers to a zone that doesn't
    /// exist, or when transitions are not in strictly increasing order.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::tz::{Location, Transition, Zone, ZoneTable};
    ///
    /// let table = ZoneTable {
    ///     zones: vec![Zone { name: "X".into(), ..Zone::default() }],
    ///     transitions: vec![Transition { when: 0, zone: 1 }],
    ///     extend: None,
    /// };
    /// let err = Location::new("Bad", table).unwrap_err();
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid zone table for location \"Bad\": \
    ///      transition 0 refers to zone 1, but the table only has 1 zones",
    /// );
    /// ```
    pub fn new(
        name: impl Into<String>,
        table: ZoneTable,
    ) -> Result<Location, Error> {
        let name = name.into();
        validate(&table).with_context(|| E::InvalidTable {
            name: name.as_str().into(),
        })?;
        trace!(
            "built location {name:?} with {zones} zones, \
             {transitions} transitions and extension rule {extend:?}",
            zones = table.zones.len(),
            transitions = table.transitions.len(),
            extend = table.extend,
        );
        Ok(Location::from_parts(
            name,
            table.zones,
            table.transitions,
            table.extend,
        ))
    }

    /// Returns a location that always uses the given zone name and offset
    /// from UTC, in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use nanotime::{tz::Location, Instant};
    ///
    /// let ist = Location::fixed("IST", 5 * 3600 + 1800);
    /// let t = Instant::from_unix(0, 0).in_location(&ist);
    /// assert_eq!(t.to_string(), "1970-01-01 05:30:00 +0530 IST");
    /// ```
    pub fn fixed(name: impl Into<String>, offset: i32) -> Location {
        let name = name.into();
        let zone = Zone { name: name.clone(), offset, dst: Dst::No };
        // A transition at the beginning of time makes every lookup a binary
        // search hit with open bounds on both sides.
        let transition = Transition { when: BEGINNING_OF_TIME, zone: 0 };
        Location::from_parts(name, vec![zone], vec![transition], None)
    }

    /// Returns the UTC location.
    ///
    /// It has no zones. Every lookup reports the zone `UTC` with a zero
    /// offset.
    pub fn utc() -> Location {
        static UTC: OnceLock<Location> = OnceLock::new();
        UTC.get_or_init(|| {
            Location::from_parts("UTC".to_string(), vec![], vec![], None)
        })
        .clone()
    }

    /// Returns the Local location.
    ///
    /// Local is resolved once per process. See [`set_local`] for how.
    ///
    /// [`set_local`]: crate::tz::set_local
    pub fn local() -> Location {
        crate::tz::local::get().clone()
    }

    fn from_parts(
        name: String,
        zones: Vec<Zone>,
        transitions: Vec<Transition>,
        extend: Option<String>,
    ) -> Location {
        let inner = LocationInner {
            name: name.into_boxed_str(),
            zones,
            transitions,
            extend: extend.map(String::into_boxed_str),
            cache: ZoneCache::new(),
        };
        Location { inner: Arc::new(inner) }
    }

    /// Returns the name of this location, such as `America/New_York`.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the extension rule of this location, if it has one.
    pub fn extend(&self) -> Option<&str> {
        self.inner.extend.as_deref()
    }

    /// Returns the zones of this location.
    pub fn zones(&self) -> &[Zone] {
        &self.inner.zones
    }

    /// Returns the transitions of this location in chronological order.
    pub fn transitions(&self) -> &[Transition] {
        &self.inner.transitions
    }

    /// Returns the zone in effect at the given Unix second, along with the
    /// range of Unix seconds over which it is in effect.
    ///
    /// Before the first transition, the zone is chosen as follows:
    ///
    /// 1. The first zone, if no transition refers to it.
    /// 2. Otherwise, if the first transition is to a DST zone, the nearest
    /// standard zone listed before that zone.
    /// 3. Otherwise, the first standard zone.
    /// 4. Otherwise, the first zone.
    ///
    /// After the last transition, the last transition's zone stays in effect
    /// forever. Any extension rule is not consulted.
    pub fn lookup(&self, unix_seconds: i64) -> ZoneInfo<'_> {
        let inner = &*self.inner;
        if inner.zones.is_empty() {
            return ZoneInfo {
                name: "UTC",
                offset: 0,
                valid_from: BEGINNING_OF_TIME,
                valid_to: END_OF_TIME,
                dst: Dst::No,
            };
        }
        if let Some(cached) = inner.cache.get(unix_seconds) {
            return self.zone_info(cached);
        }
        let found = self.find(unix_seconds);
        inner.cache.set(found);
        self.zone_info(found)
    }

    fn find(&self, unix_seconds: i64) -> CachedZone {
        let inner = &*self.inner;
        let transitions = &inner.transitions;
        match transitions.first() {
            Some(first) if unix_seconds >= first.when => {}
            first => {
                return CachedZone {
                    zone: self.first_zone(),
                    start: BEGINNING_OF_TIME,
                    end: first.map_or(END_OF_TIME, |t| t.when),
                };
            }
        }
        // The number of transitions at or before `unix_seconds`. It is at
        // least one because of the check above.
        let i = transitions.partition_point(|t| t.when <= unix_seconds);
        let found = transitions[i - 1];
        let end = transitions.get(i).map_or(END_OF_TIME, |t| t.when);
        if i == transitions.len() && inner.extend.is_some() {
            debug!(
                "location {name:?}: unix second {unix_seconds} is past \
                 the last transition and extension rule {extend:?} is \
                 not evaluated, staying in zone {zone:?}",
                name = inner.name,
                extend = inner.extend,
                zone = inner.zones[found.zone].name,
            );
        }
        CachedZone { zone: found.zone, start: found.when, end }
    }

    /// Picks the zone in effect before the first transition.
    fn first_zone(&self) -> usize {
        let inner = &*self.inner;
        let zones = &inner.zones;
        if !inner.transitions.iter().any(|t| t.zone == 0) {
            return 0;
        }
        if let Some(first) = inner.transitions.first() {
            if zones[first.zone].dst.is_dst() {
                let before = zones[..first.zone].iter().rposition(is_std);
                if let Some(i) = before {
                    return i;
                }
            }
        }
        zones.iter().position(is_std).unwrap_or(0)
    }

    fn zone_info(&self, cached: CachedZone) -> ZoneInfo<'_> {
        let zone = &self.inner.zones[cached.zone];
        ZoneInfo {
            name: &zone.name,
            offset: zone.offset,
            valid_from: cached.start,
            valid_to: cached.end,
            dst: zone.dst,
        }
    }
}

fn is_std(zone: &Zone) -> bool {
    zone.dst.is_std()
}

fn validate(table: &ZoneTable) -> Result<(), E> {
    let zones = table.zones.len();
    let mut prev: Option<i64> = None;
    for (index, t) in table.transitions.iter().enumerate() {
        if t.zone >= zones {
            return Err(E::ZoneIndexOutOfRange {
                transition: index,
                zone: t.zone,
                zones,
            });
        }
        if let Some(prev) = prev {
            if t.when <= prev {
                return Err(E::TransitionOutOfOrder {
                    index,
                    prev,
                    when: t.when,
                });
            }
        }
        prev = Some(t.when);
    }
    Ok(())
}

impl PartialEq for Location {
    fn eq(&self, other: &Location) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Location {}

impl core::fmt::Debug for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Location")
            .field("name", &self.inner.name)
            .field("zones", &self.inner.zones.len())
            .field("transitions", &self.inner.transitions.len())
            .field("extend", &self.inner.extend)
            .finish()
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
