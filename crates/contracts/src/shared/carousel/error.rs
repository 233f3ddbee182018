use thiserror::Error;

/// Errors raised while setting a carousel up.
///
/// Navigation itself never fails: any index is accepted and wrapped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    EmptySlides,

    #[error("required element not found: {0}")]
    MissingElement(String),

    #[error("indicator count ({indicators}) does not match slide count ({slides})")]
    IndicatorMismatch { slides: usize, indicators: usize },

    #[error("invalid carousel config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for CarouselError {
    fn from(err: serde_json::Error) -> Self {
        CarouselError::InvalidConfig(err.to_string())
    }
}
