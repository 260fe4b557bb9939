use crate::error::Y4mError;

/// Bytes per stored sample.
///
/// 8-bit planes store one byte per sample; 10-bit planes store one
/// little-endian 16-bit word per sample with the value in the low 10 bits.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleSize {
    U8,
    U16,
}

impl SampleSize {
    /// Bytes per sample for this size.
    pub fn bytes(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
        }
    }
}

/// Read-only, bounds-checked view of one pixel plane.
///
/// Borrows memory owned by the caller (the decoded image). `width` counts
/// samples per row, `stride` counts bytes per row and may exceed the row
/// payload (padded rows); [`PlaneRef::row`] never exposes the padding.
#[derive(Clone, Copy, Debug)]
pub struct PlaneRef<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
    sample_size: SampleSize,
}

impl<'a> PlaneRef<'a> {
    /// Build a plane view over `data`.
    ///
    /// `width` and `height` are taken as `i32` because decoder plane
    /// accessors report negative values as an error sentinel; negatives
    /// return [`Y4mError::NegativeDimensions`]. The buffer must hold
    /// `(height - 1) * stride + width * sample` bytes.
    ///
    /// # Panics
    ///
    /// If `stride` is zero. A zero stride is a contract violation in the
    /// caller, not a data-driven failure.
    pub fn new(
        data: &'a [u8],
        width: i32,
        height: i32,
        stride: usize,
        sample_size: SampleSize,
    ) -> Result<Self, Y4mError> {
        if width < 0 || height < 0 {
            return Err(Y4mError::NegativeDimensions { width, height });
        }
        assert!(stride > 0, "plane stride must be positive");

        let w = width as usize;
        let h = height as usize;
        let row_bytes = w
            .checked_mul(sample_size.bytes())
            .ok_or(Y4mError::DimensionsTooLarge {
                width: w,
                height: h,
            })?;
        if stride < row_bytes {
            return Err(Y4mError::StrideTooSmall { stride, row_bytes });
        }
        let needed = if h == 0 {
            0
        } else {
            (h - 1)
                .checked_mul(stride)
                .and_then(|n| n.checked_add(row_bytes))
                .ok_or(Y4mError::DimensionsTooLarge {
                    width: w,
                    height: h,
                })?
        };
        if data.len() < needed {
            return Err(Y4mError::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width: w,
            height: h,
            stride,
            sample_size,
        })
    }

    /// View an 8-bit plane stored in an [`imgref::ImgRef`] buffer.
    ///
    /// `imgref` strides are in elements, which for `u8` planes equals bytes.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'a, u8>) -> Result<Self, Y4mError> {
        let width = i32::try_from(img.width()).map_err(|_| Y4mError::DimensionsTooLarge {
            width: img.width(),
            height: img.height(),
        })?;
        let height = i32::try_from(img.height()).map_err(|_| Y4mError::DimensionsTooLarge {
            width: img.width(),
            height: img.height(),
        })?;
        let stride = img.stride();
        Self::new(img.into_buf(), width, height, stride, SampleSize::U8)
    }

    /// Samples per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row in the backing buffer (may exceed the row payload).
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn sample_size(&self) -> SampleSize {
        self.sample_size
    }

    /// Bytes of payload per row (`width * sample_size`).
    pub fn row_bytes(&self) -> usize {
        self.width * self.sample_size.bytes()
    }

    /// Row `y` of the plane, exactly `row_bytes()` long. Padding bytes
    /// between rows never escape the view.
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.row_bytes()]
    }

    /// Iterate the payload bytes of every row, top to bottom.
    pub fn rows(self) -> impl Iterator<Item = &'a [u8]> {
        (0..self.height).map(move |y| self.row(y))
    }
}

/// One decoded image: Y, Cb, Cr planes plus the luma bit depth.
///
/// The bit depth selects the output layout: 8 produces planar C420 with a
/// `YUV4MPEG2` header, 10 produces the headerless packed P010 stream.
#[derive(Clone, Copy, Debug)]
pub struct YuvImage<'a> {
    y: PlaneRef<'a>,
    cb: PlaneRef<'a>,
    cr: PlaneRef<'a>,
    bit_depth: u8,
}

impl<'a> YuvImage<'a> {
    /// Assemble an image descriptor from three plane views.
    ///
    /// Every plane's sample size must match the bit depth (1 byte for 8-bit,
    /// 2 bytes otherwise), and the chroma planes must agree on width and
    /// height (4:2:0 subsampling stores Cb and Cr at the same geometry;
    /// strides may differ).
    pub fn new(
        y: PlaneRef<'a>,
        cb: PlaneRef<'a>,
        cr: PlaneRef<'a>,
        bit_depth: u8,
    ) -> Result<Self, Y4mError> {
        let expected = if bit_depth <= 8 {
            SampleSize::U8
        } else {
            SampleSize::U16
        };
        for (name, plane) in [("Y", &y), ("Cb", &cb), ("Cr", &cr)] {
            if plane.sample_size() != expected {
                return Err(Y4mError::SampleSizeMismatch {
                    plane: name,
                    bit_depth,
                });
            }
        }
        if cb.width() != cr.width() || cb.height() != cr.height() {
            return Err(Y4mError::ChromaMismatch {
                cb_width: cb.width(),
                cb_height: cb.height(),
                cr_width: cr.width(),
                cr_height: cr.height(),
            });
        }

        Ok(Self { y, cb, cr, bit_depth })
    }

    pub fn y(&self) -> PlaneRef<'a> {
        self.y
    }

    pub fn cb(&self) -> PlaneRef<'a> {
        self.cb
    }

    pub fn cr(&self) -> PlaneRef<'a> {
        self.cr
    }

    pub fn bit_depth(&self) -> u8 {
        self.bit_depth
    }
}
