//! Packed framebuffer
//!
//! Addressing: the byte for column `x` of the page containing row `y` lives
//! at `x + (y / 8) * bytes_per_line`.

/// Pixel rows packed into one byte
pub const PAGE_HEIGHT: usize = 8;

/// Errors when wrapping a buffer as a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SurfaceError {
    /// Buffer shorter than `bytes_per_line * pages`
    BufferTooSmall { required: usize, actual: usize },
    /// Width exceeds the line stride
    WidthExceedsStride,
}

/// 1-bit-per-pixel surface organised in 8-row pages
///
/// The storage can be owned (`[u8; N]`) or borrowed (`&mut [u8]`).
pub struct Framebuffer<B> {
    buffer: B,
    bytes_per_line: usize,
    width: usize,
    height: usize,
}

/// Number of pages needed for `height` rows
pub(crate) const fn pages_for(height: usize) -> usize {
    height.div_ceil(PAGE_HEIGHT)
}

const fn check_shape(
    actual: usize,
    bytes_per_line: usize,
    width: usize,
    height: usize,
) -> Result<(), SurfaceError> {
    if width > bytes_per_line {
        return Err(SurfaceError::WidthExceedsStride);
    }
    let required = bytes_per_line * pages_for(height);
    if actual < required {
        return Err(SurfaceError::BufferTooSmall { required, actual });
    }
    Ok(())
}

impl<const N: usize> Framebuffer<[u8; N]> {
    /// Wrap an owned array, usable in `const` items
    ///
    /// Same checks as [`Framebuffer::new`]. Matching on the result in a
    /// `const` turns a shape error into a compile error.
    pub const fn from_array(
        buffer: [u8; N],
        bytes_per_line: usize,
        width: usize,
        height: usize,
    ) -> Result<Self, SurfaceError> {
        if let Err(error) = check_shape(N, bytes_per_line, width, height) {
            return Err(error);
        }
        Ok(Self {
            buffer,
            bytes_per_line,
            width,
            height,
        })
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Framebuffer<B> {
    /// Wrap `buffer` as a `width` x `height` surface
    ///
    /// Fails if the buffer cannot hold every page or if a line is wider than
    /// its stride, so no later operation can index past the buffer.
    pub fn new(
        buffer: B,
        bytes_per_line: usize,
        width: usize,
        height: usize,
    ) -> Result<Self, SurfaceError> {
        check_shape(buffer.as_ref().len(), bytes_per_line, width, height)?;
        Ok(Self {
            buffer,
            bytes_per_line,
            width,
            height,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Line stride in bytes
    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> usize {
        pages_for(self.height)
    }

    /// Offset of the byte holding pixel (`x`, `y`)
    ///
    /// Callers must keep `x < width` and `y < height`.
    #[inline]
    pub fn byte_offset(&self, x: usize, y: usize) -> usize {
        x + (y / PAGE_HEIGHT) * self.bytes_per_line
    }

    /// Raw packed bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Raw packed bytes, mutable
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }

    /// Set every byte of the surface to `value`
    pub fn fill(&mut self, value: u8) {
        self.buffer.as_mut().fill(value);
    }

    /// Read one pixel, `None` if off-surface
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let byte = self.buffer.as_ref()[self.byte_offset(x, y)];
        Some(byte & (1 << (y % PAGE_HEIGHT)) != 0)
    }

    /// Write one pixel; off-surface coordinates are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = self.byte_offset(x, y);
        let bit = 1 << (y % PAGE_HEIGHT);
        let byte = &mut self.buffer.as_mut()[offset];
        if on {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Consume the surface, returning its storage
    pub fn into_inner(self) -> B {
        self.buffer
    }

    /// Clip a rectangle to the surface
    ///
    /// Returns `None` when nothing of it is on-surface.
    pub(crate) fn clip(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let width = width.min(self.width - x);
        let height = height.min(self.height - y);
        if width == 0 || height == 0 {
            return None;
        }
        Some((width, height))
    }
}
