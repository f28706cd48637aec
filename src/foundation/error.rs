use std::path::PathBuf;

/// Convenience result type used across wireplot.
pub type PlotResult<T> = Result<T, PlotError>;

/// Fatal errors. Recoverable conditions (bad wire lines, missing fonts) never surface here.
#[derive(thiserror::Error, Debug)]
pub enum PlotError {
    /// Reading or writing a file failed.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// File or directory the operation targeted.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The input had fewer than two non-blank lines.
    #[error("input error: expected at least 2 non-blank lines, found {found}")]
    TooFewLines {
        /// Number of non-blank lines present.
        found: usize,
    },

    /// The first line could not be read as `<width> <height>`.
    #[error("dimension error: {0}")]
    Dimensions(String),

    /// Invalid caller-supplied parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A font strategy could not produce a usable font.
    #[error("font error: {0}")]
    Font(String),

    /// The canvas does not fit the raster backend.
    #[error("canvas {width}x{height} exceeds the maximum of 65535 pixels per axis")]
    CanvasTooLarge {
        /// Requested canvas width in pixels.
        width: u64,
        /// Requested canvas height in pixels.
        height: u64,
    },

    /// Image encoding failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotError {
    /// Build a [`PlotError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`PlotError::Dimensions`] value.
    pub fn dimensions(msg: impl Into<String>) -> Self {
        Self::Dimensions(msg.into())
    }

    /// Build a [`PlotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PlotError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
