// Same shape as the core crate's log points, under the "scrollfeed::adapter" target.

#[cfg(feature = "tracing")]
macro_rules! alog {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!(target: "scrollfeed::adapter", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! alog {
    ($level:ident, $($arg:tt)+) => {};
}

macro_rules! atrace {
    ($($arg:tt)+) => { alog!(trace, $($arg)+) };
}

macro_rules! adebug {
    ($($arg:tt)+) => { alog!(debug, $($arg)+) };
}
