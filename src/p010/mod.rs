//! 10-bit output: headerless packed P010 stream.
//!
//! Samples are little-endian 16-bit words carrying a 0..=1023 value; each
//! output word is the value shifted left by 6, placing the significant bits
//! at the top of the word per the P010 convention. The luma plane is
//! followed by a single interleaved chroma plane (Cb word, then Cr word,
//! per column).
//!
//! No `YUV4MPEG2` header is emitted in this mode. The headerless dump is
//! the de facto contract for 10-bit output from this serializer; consumers
//! must know the dimensions out of band. Rows are addressed through the
//! plane's stride, so padded 10-bit planes serialize their payload only.

mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::Y4mError;
use crate::limits::Limits;
use crate::plane::YuvImage;

/// Encode a 10-bit image as a packed P010 dump.
pub(crate) fn encode(
    image: &YuvImage<'_>,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, Y4mError> {
    let y = image.y();
    let cb = image.cb();

    if let Some(limits) = limits {
        limits.check(y.width(), y.height())?;
    }

    // 2 bytes per luma sample, 4 bytes per chroma column (Cb + Cr words).
    let total = y
        .width()
        .checked_mul(y.height())
        .and_then(|n| n.checked_mul(2))
        .and_then(|n| {
            let chroma = cb.width().checked_mul(cb.height())?.checked_mul(4)?;
            n.checked_add(chroma)
        })
        .ok_or(Y4mError::DimensionsTooLarge {
            width: y.width(),
            height: y.height(),
        })?;
    if let Some(limits) = limits {
        limits.check_memory(total)?;
    }

    stop.check()?;
    encode::encode_p010(image, total, stop)
}
