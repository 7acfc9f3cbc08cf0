// Log points forward to `tracing` under the "scrollfeed" target. Without the `tracing` feature
// every call site expands to nothing, arguments included.

#[cfg(feature = "tracing")]
macro_rules! flog {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!(target: "scrollfeed", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! flog {
    ($level:ident, $($arg:tt)+) => {};
}

macro_rules! ftrace {
    ($($arg:tt)+) => { flog!(trace, $($arg)+) };
}

macro_rules! fdebug {
    ($($arg:tt)+) => { flog!(debug, $($arg)+) };
}

macro_rules! fwarn {
    ($($arg:tt)+) => { flog!(warn, $($arg)+) };
}
