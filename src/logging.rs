//! Logging shims over the `log` facade.
//!
//! With the `logging` feature off these expand to nothing, so the crate has no
//! runtime dependency on a logger.

macro_rules! log_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::debug!($($arg)+);
    };
}

macro_rules! log_info {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::info!($($arg)+);
    };
}

macro_rules! log_warn {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::warn!($($arg)+);
    };
}
