// Not every level is used by every module, and none of them are used when
// the `logging` feature is disabled. Squash the warnings.
#![allow(unused_macros)]

// Each macro forwards to the `log` crate when the `logging` feature is
// enabled and expands to nothing otherwise. Arguments are not evaluated when
// logging is disabled, so callers must not rely on side effects in them.
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

macro_rules! error {
    ($($tt:tt)*) => { log!(log::error!(target: "nanotime", $($tt)*)) }
}

macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!(target: "nanotime", $($tt)*)) }
}

macro_rules! info {
    ($($tt:tt)*) => { log!(log::info!(target: "nanotime", $($tt)*)) }
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "nanotime", $($tt)*)) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "nanotime", $($tt)*)) }
}
