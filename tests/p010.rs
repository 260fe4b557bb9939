//! Packed layout tests for the 10-bit P010 path.

use zeny4m::*;

/// Store 10-bit sample values as little-endian u16 words.
fn words(samples: &[u16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

fn plane16(data: &[u8], w: i32, h: i32, stride: usize) -> PlaneRef<'_> {
    PlaneRef::new(data, w, h, stride, SampleSize::U16).unwrap()
}

#[test]
fn p010_luma_word_is_value_shifted_left_six() {
    let y_data = words(&[1023]);
    let c_data = words(&[0]);

    let image = YuvImage::new(
        plane16(&y_data, 1, 1, 2),
        plane16(&c_data, 1, 1, 2),
        plane16(&c_data, 1, 1, 2),
        10,
    )
    .unwrap();

    let out = EncodeRequest::y4m().encode(&image, Unstoppable).unwrap();

    // 1023 << 6 == 0xFFC0, low byte first.
    assert_eq!(&out[..2], &[0xC0, 0xFF]);
    assert_eq!(out.len(), 2 + 4);
}

#[test]
fn p010_has_no_header() {
    let y_data = words(&[0x59, 0x55]); // would spell "YU" if shifted bytes leaked through
    let c_data = words(&[0]);

    let image = YuvImage::new(
        plane16(&y_data, 2, 1, 4),
        plane16(&c_data, 1, 1, 2),
        plane16(&c_data, 1, 1, 2),
        10,
    )
    .unwrap();

    let out = EncodeRequest::y4m().encode(&image, Unstoppable).unwrap();
    assert!(!out.starts_with(b"YUV4MPEG2"));
    assert_eq!(&out[..2], &(0x59u16 << 6).to_le_bytes());
}

#[test]
fn p010_chroma_interleaves_cb_then_cr() {
    let y_data = words(&[0, 0, 0, 0]);
    let cb_data = words(&[10, 11]);
    let cr_data = words(&[20, 21]);

    let image = YuvImage::new(
        plane16(&y_data, 2, 2, 4),
        plane16(&cb_data, 2, 1, 4),
        plane16(&cr_data, 2, 1, 4),
        10,
    )
    .unwrap();

    let out = EncodeRequest::y4m().encode(&image, Unstoppable).unwrap();
    let luma_bytes = 2 * 2 * 2;
    let expected = words(&[10 << 6, 20 << 6, 11 << 6, 21 << 6]);
    assert_eq!(&out[luma_bytes..], &expected[..]);
    // Interleaved chroma plane: 2 bytes per word, Cb and Cr per column.
    assert_eq!(out.len() - luma_bytes, 4 * 2 * 1);
}

#[test]
fn p010_respects_row_stride() {
    // Two luma rows with 4 padding bytes between them.
    let row_bytes = 2 * 2;
    let stride = row_bytes + 4;
    let mut y_data = vec![0xEEu8; stride + row_bytes];
    y_data[..row_bytes].copy_from_slice(&words(&[1, 2]));
    y_data[stride..stride + row_bytes].copy_from_slice(&words(&[3, 4]));

    let c_data = words(&[5]);

    let image = YuvImage::new(
        plane16(&y_data, 2, 2, stride),
        plane16(&c_data, 1, 1, 2),
        plane16(&c_data, 1, 1, 2),
        10,
    )
    .unwrap();

    let out = EncodeRequest::y4m().encode(&image, Unstoppable).unwrap();
    let expected_luma = words(&[1 << 6, 2 << 6, 3 << 6, 4 << 6]);
    assert_eq!(&out[..8], &expected_luma[..]);
    assert_eq!(&out[8..], &words(&[5 << 6, 5 << 6])[..]);
}

#[test]
fn p010_total_length() {
    let y_data = words(&[0; 4 * 2]);
    let c_data = words(&[0; 2]);

    let image = YuvImage::new(
        plane16(&y_data, 4, 2, 8),
        plane16(&c_data, 2, 1, 4),
        plane16(&c_data, 2, 1, 4),
        10,
    )
    .unwrap();

    let out = EncodeRequest::y4m().encode(&image, Unstoppable).unwrap();
    assert_eq!(out.len(), 2 * 4 * 2 + 4 * 2 * 1);
}
