//! # zeny4m
//!
//! Y4M (YUV4MPEG2) and packed P010 serializer for planar YUV images.
//!
//! Takes one decoded image as three read-only plane views (Y, Cb, Cr) with
//! independent widths, heights, and row strides, and serializes the frame
//! in one of two byte layouts selected by the luma bit depth:
//!
//! - **8-bit** — an ASCII `YUV4MPEG2 W<w> H<h> F30:1 C420` header and a
//!   `FRAME` marker, then raw planar Y, Cb, Cr rows. Row padding
//!   (stride > width) is never written.
//! - **10-bit** — a headerless packed P010 stream: little-endian 16-bit
//!   words with the 10 significant bits shifted to the top (`value << 6`),
//!   luma plane first, then a single interleaved Cb/Cr plane.
//!
//! The plane views are bounds-checked at construction, so inconsistent
//! width/height/stride combinations are rejected before any byte is
//! produced. One call serializes one frame; the crate holds no state
//! across calls.
//!
//! ## Non-Goals
//!
//! - Parsing or decoding Y4M
//! - Multi-frame streams and timing
//! - Color conversion or subsampling (planes are serialized as given)
//!
//! ## Usage
//!
//! ```no_run
//! use zeny4m::{EncodeRequest, PlaneRef, SampleSize, Unstoppable, YuvImage};
//!
//! # fn main() -> Result<(), zeny4m::Y4mError> {
//! let y_data = vec![0u8; 64 * 48];
//! let c_data = vec![128u8; 32 * 24];
//!
//! let y = PlaneRef::new(&y_data, 64, 48, 64, SampleSize::U8)?;
//! let cb = PlaneRef::new(&c_data, 32, 24, 32, SampleSize::U8)?;
//! let cr = PlaneRef::new(&c_data, 32, 24, 32, SampleSize::U8)?;
//! let image = YuvImage::new(y, cb, cr, 8)?;
//!
//! // In-memory
//! let bytes = EncodeRequest::y4m().encode(&image, Unstoppable)?;
//!
//! // Straight to disk
//! EncodeRequest::y4m().encode_to_path(&image, "out.y4m", Unstoppable)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod c420;
mod encode;
mod error;
mod limits;
mod p010;
mod plane;

// Re-exports
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::Y4mError;
pub use limits::Limits;
pub use plane::{PlaneRef, SampleSize, YuvImage};
