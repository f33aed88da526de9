//! Logging facilities.
//!
//! The macros below wrap the [`log`](https://crates.io/crates/log) facade and prefix every record with the state of
//! the car which produced it, i.e. its odometer reading and brand. The context argument can be any value providing
//! `distance_traveled()` and `brand()` methods, normally a [`Car`](crate::car::Car).

use colored::{Color, ColoredString, Colorize};

/// Returns the string painted with the given color.
pub fn get_colored(s: &str, color: Color) -> ColoredString {
    s.color(color)
}

/// Logs a message at the trace level.
#[macro_export]
macro_rules! log_trace {
    ($ctx:expr, $msg:expr) => (
        ::log::trace!(
            "[{:>5} km {} {}] {}",
            $ctx.distance_traveled(), $crate::log::get_colored("TRACE", $crate::colored::Color::Cyan), $ctx.brand(), $msg
        )
    );
    ($ctx:expr, $format:expr, $($arg:tt)+) => (
        ::log::trace!(
            concat!("[{:>5} km {} {}] ", $format),
            $ctx.distance_traveled(), $crate::log::get_colored("TRACE", $crate::colored::Color::Cyan), $ctx.brand(), $($arg)+
        )
    );
}

/// Logs a message at the debug level.
#[macro_export]
macro_rules! log_debug {
    ($ctx:expr, $msg:expr) => (
        ::log::debug!(
            "[{:>5} km {} {}] {}",
            $ctx.distance_traveled(), $crate::log::get_colored("DEBUG", $crate::colored::Color::Blue), $ctx.brand(), $msg
        )
    );
    ($ctx:expr, $format:expr, $($arg:tt)+) => (
        ::log::debug!(
            concat!("[{:>5} km {} {}] ", $format),
            $ctx.distance_traveled(), $crate::log::get_colored("DEBUG", $crate::colored::Color::Blue), $ctx.brand(), $($arg)+
        )
    );
}

/// Logs a message at the info level.
#[macro_export]
macro_rules! log_info {
    ($ctx:expr, $msg:expr) => (
        ::log::info!(
            "[{:>5} km {} {}] {}",
            $ctx.distance_traveled(), $crate::log::get_colored("INFO ", $crate::colored::Color::Green), $ctx.brand(), $msg
        )
    );
    ($ctx:expr, $format:expr, $($arg:tt)+) => (
        ::log::info!(
            concat!("[{:>5} km {} {}] ", $format),
            $ctx.distance_traveled(), $crate::log::get_colored("INFO ", $crate::colored::Color::Green), $ctx.brand(), $($arg)+
        )
    );
}

/// Logs a message at the warn level.
#[macro_export]
macro_rules! log_warn {
    ($ctx:expr, $msg:expr) => (
        ::log::warn!(
            "[{:>5} km {} {}] {}",
            $ctx.distance_traveled(), $crate::log::get_colored("WARN ", $crate::colored::Color::Yellow), $ctx.brand(), $msg
        )
    );
    ($ctx:expr, $format:expr, $($arg:tt)+) => (
        ::log::warn!(
            concat!("[{:>5} km {} {}] ", $format),
            $ctx.distance_traveled(), $crate::log::get_colored("WARN ", $crate::colored::Color::Yellow), $ctx.brand(), $($arg)+
        )
    );
}
