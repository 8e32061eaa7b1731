//! Macros for generating log messages.
//!
//! A bare message literal is logged at threshold 0. Anything with format arguments takes an explicit leading
//! threshold: `info!(2, "built {}", kind)`.
//!
//! Every public macro forwards to `__log_event!`, which makes sure the subscriber is installed and attaches the
//! `threshold` field that `ThresholdFilterLayer` filters on.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($level:expr, [$($extra:tt)*], $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::log::tracing::event!(
                $level,
                $($extra)*
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! critical {
    ($message:literal) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, [critical = true,], 0, $message)
    };
    ($threshold:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, [critical = true,], $threshold, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($message:literal) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, [], 0, $message)
    };
    ($threshold:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::ERROR, [], $threshold, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($message:literal) => {
        $crate::__log_event!($crate::log::tracing::Level::WARN, [], 0, $message)
    };
    ($threshold:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::WARN, [], $threshold, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($message:literal) => {
        $crate::__log_event!($crate::log::tracing::Level::INFO, [], 0, $message)
    };
    ($threshold:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::INFO, [], $threshold, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($message:literal) => {
        $crate::__log_event!($crate::log::tracing::Level::DEBUG, [], 0, $message)
    };
    ($threshold:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::DEBUG, [], $threshold, $($arg)+)
    };
}

#[macro_export]
macro_rules! trace {
    ($message:literal) => {
        $crate::__log_event!($crate::log::tracing::Level::TRACE, [], 0, $message)
    };
    ($threshold:expr, $($arg:tt)+) => {
        $crate::__log_event!($crate::log::tracing::Level::TRACE, [], $threshold, $($arg)+)
    };
}


// The following makes the macros importable directly from the `log` module.
pub use crate::{critical, error, warning, info, debug, trace};
