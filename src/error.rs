use alloc::string::String;
use enough::StopReason;

/// Errors from Y4M / P010 serialization.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Y4mError {
    /// The upstream decoder reports negative dimensions as an error
    /// sentinel; the plane is unusable.
    #[error("plane reported negative dimensions: {width}x{height}")]
    NegativeDimensions { width: i32, height: i32 },

    #[error("stride {stride} is smaller than row payload {row_bytes} bytes")]
    StrideTooSmall { stride: usize, row_bytes: usize },

    #[error("plane buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error(
        "chroma planes disagree: Cb {cb_width}x{cb_height}, Cr {cr_width}x{cr_height}"
    )]
    ChromaMismatch {
        cb_width: usize,
        cb_height: usize,
        cr_width: usize,
        cr_height: usize,
    },

    #[error("{plane} plane sample size does not match {bit_depth}-bit depth")]
    SampleSizeMismatch { plane: &'static str, bit_depth: u8 },

    #[error("unsupported luma bit depth: {0} (supported: 8, 10)")]
    UnsupportedBitDepth(u8),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for Y4mError {
    fn from(r: StopReason) -> Self {
        Y4mError::Cancelled(r)
    }
}
