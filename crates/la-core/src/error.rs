use thiserror::Error;

/// Errors surfaced by the conversion engine.
///
/// Every failure is a distinct, typed outcome; the engine never logs or
/// swallows an error. The command layer decides whether a failure aborts
/// one conversion attempt or the whole session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Zero width or height at padding time, or inconsistent raw pixel data.
    /// Fatal to the conversion attempt, not to the session.
    #[error("invalid image dimensions: {width}×{height}")]
    InvalidImage {
        /// Width that was rejected.
        width: u32,
        /// Height that was rejected.
        height: u32,
    },

    /// Resolution does not evenly divide the padded dimensions.
    /// Defensive check: unreachable when the command surface enforces
    /// the resolution bounds.
    #[error("resolution {resolution} does not divide padded dimensions {width}×{height}")]
    Partition {
        /// The offending resolution.
        resolution: u32,
        /// Padded image width.
        width: u32,
        /// Padded image height.
        height: u32,
    },

    /// Lookup attempted against a palette with zero characters.
    /// Recoverable: the caller should prompt for palette reconfiguration.
    #[error("character palette is empty")]
    EmptyPalette,

    /// Resolution change rejected by the session bounds.
    #[error("resolution {requested} outside bounds [{min}, {max}]")]
    Resolution {
        /// Resolution that was requested.
        requested: u32,
        /// Lower inclusive bound.
        min: u32,
        /// Upper inclusive bound.
        max: u32,
    },

    /// Invalid configuration value or structure.
    #[error("invalid configuration: {0}")]
    Config(String),
}
