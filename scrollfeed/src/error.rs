use alloc::string::String;

/// Invalid list or pagination configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("page limit must be greater than zero")]
    ZeroLimit,
}

/// A placement hook could not decide where an added row goes.
///
/// The reconciler recovers by using its configured default placement.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("placement undecided: {0}")]
    Undecided(String),
}
