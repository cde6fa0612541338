use thiserror::Error;

/// Why a color string could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex body (after stripping `#`) is not exactly six characters long.
    #[error("hex color must have 6 digits, found {len}")]
    WrongLength { len: usize },

    #[error("invalid hex digit {ch:?}")]
    InvalidDigit { ch: char },

    /// Hex entry is missing its leading `#`.
    #[error("hex entry must start with '#'")]
    MissingHash,

    #[error("expected 3 comma-separated components, found {found}")]
    ComponentCount { found: usize },

    #[error("component {value:?} is not an integer")]
    NotAnInteger { value: String },

    #[error("component {value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Entry notation other than `hex`, `rgb` or `hsl`.
    #[error("unknown color format {name:?}")]
    UnknownFormat { name: String },
}

/// Failure while turning encoded image bytes into a pixel buffer.
#[derive(Debug, Error)]
pub enum ImageSourceError {
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("image has no pixels")]
    Empty,
}
