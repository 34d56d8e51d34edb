// Logging helpers. All of them compile to nothing unless the `log` feature is enabled.

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        log::trace!($($arg)+);
    }};
}

macro_rules! debug {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        log::debug!($($arg)+);
    }};
}

/// Evaluates `$body` and reports how long it took.
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        let result = $body;

        #[cfg(feature = "log")]
        log::trace!("{} took {:?}", $name, timer.elapsed());

        result
    }};
}

/// Returns the two neighbors of `position` in expansion order (`-delta`, then `+delta`).
///
/// A neighbor that would leave the range of [`Position`](crate::Position) is `None`.
pub(crate) fn line_neighbors(
    position: crate::Position,
    delta: crate::Position,
) -> [Option<crate::Position>; 2] {
    [position.checked_sub(delta), position.checked_add(delta)]
}

pub(crate) fn assert_valid_delta(delta: crate::Position) {
    assert!(delta > 0, "delta has to be positive, got {}", delta);
}
