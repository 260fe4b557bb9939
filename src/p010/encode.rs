//! Packed P010 frame writer.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::Y4mError;
use crate::plane::YuvImage;

/// P010 carries the 10 significant bits at the top of each 16-bit word.
const P010_SHIFT: u32 = 6;

/// Serialize the luma plane, then the interleaved Cb/Cr plane.
///
/// `total` is the pre-validated output byte count.
pub(crate) fn encode_p010(
    image: &YuvImage<'_>,
    total: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, Y4mError> {
    let mut out = Vec::with_capacity(total);

    for (row_idx, row) in image.y().rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for pair in row.chunks_exact(2) {
            let word = u16::from_le_bytes([pair[0], pair[1]]) << P010_SHIFT;
            out.extend_from_slice(&word.to_le_bytes());
        }
    }

    // U == Cb and V == Cr, interleaved per column into one plane.
    for (row_idx, (cb_row, cr_row)) in image.cb().rows().zip(image.cr().rows()).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for (cb_pair, cr_pair) in cb_row.chunks_exact(2).zip(cr_row.chunks_exact(2)) {
            let u = u16::from_le_bytes([cb_pair[0], cb_pair[1]]) << P010_SHIFT;
            out.extend_from_slice(&u.to_le_bytes());
            let v = u16::from_le_bytes([cr_pair[0], cr_pair[1]]) << P010_SHIFT;
            out.extend_from_slice(&v.to_le_bytes());
        }
    }

    Ok(out)
}
