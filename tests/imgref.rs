#![cfg(feature = "imgref")]

//! PlaneRef construction from imgref buffers.

use zeny4m::*;

#[test]
fn plane_from_imgref_honors_stride() {
    let w = 3;
    let h = 2;
    let stride = 5;
    let mut buf = vec![0xAAu8; stride * h];
    for y in 0..h {
        for x in 0..w {
            buf[y * stride + x] = (y * w + x) as u8;
        }
    }

    let img = imgref::Img::new_stride(buf, w, h, stride);
    let plane = PlaneRef::from_imgref(img.as_ref()).unwrap();

    assert_eq!(plane.width(), 3);
    assert_eq!(plane.height(), 2);
    assert_eq!(plane.stride(), 5);
    assert_eq!(plane.row(0), &[0, 1, 2]);
    assert_eq!(plane.row(1), &[3, 4, 5]);
}

#[test]
fn imgref_plane_encodes_like_a_raw_plane() {
    let y_buf = vec![9u8; 4 * 4];
    let c_buf = vec![4u8; 2 * 2];

    let y_img = imgref::Img::new_stride(y_buf.clone(), 4, 4, 4);
    let c_img = imgref::Img::new_stride(c_buf.clone(), 2, 2, 2);

    let image = YuvImage::new(
        PlaneRef::from_imgref(y_img.as_ref()).unwrap(),
        PlaneRef::from_imgref(c_img.as_ref()).unwrap(),
        PlaneRef::from_imgref(c_img.as_ref()).unwrap(),
        8,
    )
    .unwrap();
    let from_imgref = EncodeRequest::y4m().encode(&image, Unstoppable).unwrap();

    let image = YuvImage::new(
        PlaneRef::new(&y_buf, 4, 4, 4, SampleSize::U8).unwrap(),
        PlaneRef::new(&c_buf, 2, 2, 2, SampleSize::U8).unwrap(),
        PlaneRef::new(&c_buf, 2, 2, 2, SampleSize::U8).unwrap(),
        8,
    )
    .unwrap();
    let from_raw = EncodeRequest::y4m().encode(&image, Unstoppable).unwrap();

    assert_eq!(from_imgref, from_raw);
}
