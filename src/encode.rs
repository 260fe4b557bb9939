use alloc::vec::Vec;
use enough::Stop;

use crate::error::Y4mError;
use crate::limits::Limits;
use crate::plane::YuvImage;
use crate::{c420, p010};

/// Builder for one serialization call.
///
/// Carries the optional [`Limits`] and the Y4M frame-rate field (default
/// `30:1`). The output layout itself is selected by the image's luma bit
/// depth, not by the request.
#[derive(Clone, Debug)]
pub struct EncodeRequest {
    limits: Option<Limits>,
    frame_rate: (u32, u32),
}

impl EncodeRequest {
    /// Request with the default `F30:1` frame rate and no limits.
    pub fn y4m() -> Self {
        Self {
            limits: None,
            frame_rate: (30, 1),
        }
    }

    /// Apply resource limits, checked before any output allocation.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Override the header's `F<num>:<den>` frame-rate field.
    ///
    /// Only the 8-bit path emits a header; the packed 10-bit layout
    /// ignores this.
    pub fn with_frame_rate(mut self, num: u32, den: u32) -> Self {
        self.frame_rate = (num, den);
        self
    }

    /// Serialize `image` into a byte vector.
    ///
    /// Dispatches on the luma bit depth: 8 produces a `YUV4MPEG2` C420
    /// stream, 10 produces a headerless packed P010 dump. Any other depth
    /// is rejected with [`Y4mError::UnsupportedBitDepth`].
    pub fn encode(&self, image: &YuvImage<'_>, stop: impl Stop) -> Result<Vec<u8>, Y4mError> {
        self.encode_inner(image, &stop)
    }

    fn encode_inner(&self, image: &YuvImage<'_>, stop: &dyn Stop) -> Result<Vec<u8>, Y4mError> {
        log::debug!("input luma bit depth: {}", image.bit_depth());

        match image.bit_depth() {
            8 => c420::encode(image, self.frame_rate, self.limits.as_ref(), stop),
            10 => {
                log::debug!("output in packed P010 layout (no YUV4MPEG2 header)");
                p010::encode(image, self.limits.as_ref(), stop)
            }
            other => Err(Y4mError::UnsupportedBitDepth(other)),
        }
    }
}

#[cfg(feature = "std")]
impl EncodeRequest {
    /// Serialize `image` into an arbitrary writer.
    pub fn encode_into<W: std::io::Write>(
        &self,
        image: &YuvImage<'_>,
        writer: &mut W,
        stop: impl Stop,
    ) -> Result<(), Y4mError> {
        let bytes = self.encode_inner(image, &stop)?;
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Create (or truncate) `path` and serialize `image` into it.
    ///
    /// The file is opened before the image is encoded, so an encode-time
    /// failure (unsupported bit depth, limit exceeded) leaves an empty file
    /// on disk. Writes are checked; failures surface as [`Y4mError::Io`].
    /// The handle is flushed and closed on every exit path.
    pub fn encode_to_path<P: AsRef<std::path::Path>>(
        &self,
        image: &YuvImage<'_>,
        path: P,
        stop: impl Stop,
    ) -> Result<(), Y4mError> {
        use std::io::Write as _;

        let mut file = std::fs::File::create(path)?;
        let bytes = self.encode_inner(image, &stop)?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(())
    }
}
