//! Owned RGBA pixel buffer.
//!
//! Row-major, top-left origin, four bytes per pixel in [`OrderRgba`] order.
//! The buffer owns its memory so a finished field can be moved to whoever
//! displays it without the renderer keeping a reference.

use crate::color::{OrderRgba, Rgba8};

// ============================================================================
// PixelBuffer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// A fully transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; width as usize * height as usize * OrderRgba::N],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * OrderRgba::N
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.stride() + x as usize * OrderRgba::N
    }

    /// Color at `(x, y)`, `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let o = self.offset(x, y);
        Some(Rgba8::new(
            self.data[o + OrderRgba::R],
            self.data[o + OrderRgba::G],
            self.data[o + OrderRgba::B],
            self.data[o + OrderRgba::A],
        ))
    }

    /// Write `c` at `(x, y)`. Writes outside the buffer are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, c: Rgba8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let o = self.offset(x, y);
        self.data[o..o + OrderRgba::N].copy_from_slice(&c.to_array());
    }

    /// Bytes of row `y`.
    pub fn row_slice(&self, y: u32) -> &[u8] {
        assert!(
            y < self.height,
            "row {} out of bounds (height={})",
            y,
            self.height
        );
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

// ============================================================================
// Tests
// ============================================================================
