//! Log records for game and relay events.
//!
//! Records go through the `log` facade when the `logging` feature is on and
//! compile away otherwise.

#[cfg(feature = "logging")]
macro_rules! relay_log {
    ($level:ident, $($arg:tt)+) => {
        ::log::$level!(target: "chess_relay", $($arg)+)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! relay_log {
    ($level:ident, $($arg:tt)+) => {{
        if false {
            let _ = ::std::format!($($arg)+);
        }
    }};
}

pub(crate) use relay_log;
