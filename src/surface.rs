//! Pixel surface contract.
//!
//! The rasterizers never own pixels. They borrow something implementing
//! [`Surface`] for the duration of one call, write through [`Surface::plot`]
//! and, for the fill algorithms, read back through [`Surface::read`]. Reads
//! must observe every earlier write of the same call.

use crate::color::Rgba;

/// A mutable 2D grid of colors addressable in `[0, width) x [0, height)`.
pub trait Surface {
    /// Dimensions as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Color at `(x, y)`, or `None` when out of bounds.
    fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba>;

    /// Overwrite the color at `(x, y)`. Out-of-bounds writes are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba);

    /// Whether the signed coordinate is addressable.
    #[inline]
    fn contains(&self, x: i32, y: i32) -> bool {
        let (w, h) = self.size();
        x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h
    }

    /// Bounds-checked read for signed coordinates.
    #[inline]
    fn read(&self, x: i32, y: i32) -> Option<Rgba> {
        if self.contains(x, y) {
            self.get_pixel(x as u32, y as u32)
        } else {
            None
        }
    }

    /// Bounds-checked write for signed coordinates; clipped silently.
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        if self.contains(x, y) {
            self.set_pixel(x as u32, y as u32, color);
        }
    }
}

/// Surface adapter that counts pixel writes reaching the inner surface.
///
/// Clipped writes never reach [`Surface::set_pixel`] and are not counted.
#[derive(Debug, Clone)]
pub struct WriteCounter<S> {
    inner: S,
    writes: usize,
}

impl<S: Surface> WriteCounter<S> {
    /// Wrap a surface with a zeroed counter.
    pub fn new(inner: S) -> Self {
        Self { inner, writes: 0 }
    }

    /// Number of `set_pixel` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Zero the counter.
    pub fn reset(&mut self) {
        self.writes = 0;
    }

    /// Borrow the wrapped surface.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the surface.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Surface> Surface for WriteCounter<S> {
    fn size(&self) -> (u32, u32) {
        self.inner.size()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.inner.get_pixel(x, y)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        self.writes += 1;
        self.inner.set_pixel(x, y, color);
    }
}
