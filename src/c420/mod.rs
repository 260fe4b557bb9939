//! 8-bit Y4M output: `YUV4MPEG2` header plus planar C420 frame data.
//!
//! The frame rate field defaults to `F30:1`; the chroma tag is fixed at
//! `C420`. Plane order is Y, then Cb, then Cr — part of the Y4M contract.

mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::Y4mError;
use crate::limits::Limits;
use crate::plane::YuvImage;

/// Encode an 8-bit image as a single-frame Y4M stream.
pub(crate) fn encode(
    image: &YuvImage<'_>,
    frame_rate: (u32, u32),
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, Y4mError> {
    let y = image.y();
    let cb = image.cb();

    if let Some(limits) = limits {
        limits.check(y.width(), y.height())?;
    }

    // Payload: yw*yh luma bytes plus two chroma planes of cw*ch each.
    let payload = y
        .width()
        .checked_mul(y.height())
        .and_then(|n| {
            let chroma = cb.width().checked_mul(cb.height())?;
            n.checked_add(chroma.checked_mul(2)?)
        })
        .ok_or(Y4mError::DimensionsTooLarge {
            width: y.width(),
            height: y.height(),
        })?;
    if let Some(limits) = limits {
        limits.check_memory(payload)?;
    }

    stop.check()?;
    encode::encode_c420(image, frame_rate, payload, stop)
}
