//! C420 frame writer.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use crate::error::Y4mError;
use crate::plane::{PlaneRef, YuvImage};

/// Serialize the header line, `FRAME` marker, and the three planes.
///
/// `payload` is the pre-validated plane byte total, used to size the output
/// in one allocation.
pub(crate) fn encode_c420(
    image: &YuvImage<'_>,
    frame_rate: (u32, u32),
    payload: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, Y4mError> {
    let y = image.y();
    let (num, den) = frame_rate;
    let header = format!(
        "YUV4MPEG2 W{} H{} F{}:{} C420\nFRAME\n",
        y.width(),
        y.height(),
        num,
        den,
    );

    let mut out = Vec::with_capacity(header.len() + payload);
    out.extend_from_slice(header.as_bytes());

    write_plane(&mut out, y, stop)?;
    write_plane(&mut out, image.cb(), stop)?;
    write_plane(&mut out, image.cr(), stop)?;

    Ok(out)
}

/// Append a plane's rows, skipping any stride padding.
fn write_plane(out: &mut Vec<u8>, plane: PlaneRef<'_>, stop: &dyn Stop) -> Result<(), Y4mError> {
    for (row_idx, row) in plane.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
    }
    Ok(())
}
