//! RGBA pixel buffer.
//!
//! `Raster` is the drawing surface for both extraction (crop into a scratch
//! surface) and export (fill, then draw glyphs at offsets).

use thiserror::Error;

use crate::color::Rgba;

/// Errors from raster construction and cropping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Width or height is zero.
    #[error("Raster dimensions must be non-zero, got {0}x{1}")]
    EmptyDimensions(u32, u32),

    /// Byte buffer does not match the declared dimensions.
    #[error("Expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Crop rectangle reaches outside the raster.
    #[error("Region {w}x{h} at ({x}, {y}) is outside the {width}x{height} raster")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        width: u32,
        height: u32,
    },
}

/// A 2D RGBA raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (row-major).
    pub data: Vec<Rgba>,
}

impl Raster {
    /// Create a raster filled with a color.
    pub fn new(width: u32, height: u32, fill: Rgba) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a cleared (fully transparent) raster.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Rgba::TRANSPARENT)
    }

    /// Build a raster from packed RGBA bytes.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions(width, height));
        }
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }

        let data = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a rectangle into a new raster of exactly that size.
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Raster, RasterError> {
        let out_of_bounds = RasterError::RegionOutOfBounds {
            x,
            y,
            w,
            h,
            width: self.width,
            height: self.height,
        };
        if w == 0 || h == 0 {
            return Err(out_of_bounds);
        }
        let fits_x = x.checked_add(w).is_some_and(|end| end <= self.width);
        let fits_y = y.checked_add(h).is_some_and(|end| end <= self.height);
        if !fits_x || !fits_y {
            return Err(out_of_bounds);
        }

        let mut out = Raster::transparent(w, h);
        for row in 0..h {
            let src_start = self.index(x, y + row);
            let dst_start = out.index(0, row);
            out.data[dst_start..dst_start + w as usize]
                .copy_from_slice(&self.data[src_start..src_start + w as usize]);
        }
        Ok(out)
    }

    /// Composite `src` onto this raster with its top-left corner at
    /// (`dx`, `dy`). Pixels falling outside this raster are clipped.
    pub fn draw(&mut self, src: &Raster, dx: i64, dy: i64) {
        for sy in 0..src.height {
            let ty = dy + sy as i64;
            if ty < 0 || ty >= self.height as i64 {
                continue;
            }
            for sx in 0..src.width {
                let tx = dx + sx as i64;
                if tx < 0 || tx >= self.width as i64 {
                    continue;
                }
                let (tx, ty) = (tx as u32, ty as u32);
                let blended = src.get(sx, sy).over(self.get(tx, ty));
                self.set(tx, ty, blended);
            }
        }
    }

    /// Resize with nearest-neighbour sampling (crisp edges).
    pub fn scale_nearest(&self, width: u32, height: u32) -> Raster {
        if width == self.width && height == self.height {
            return self.clone();
        }

        let mut out = Raster::transparent(width, height);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height {
            let sy = (y as u64 * self.height as u64 / height as u64) as u32;
            for x in 0..width {
                let sx = (x as u64 * self.width as u64 / width as u64) as u32;
                out.set(x, y, self.get(sx, sy));
            }
        }
        out
    }

    /// Convert to packed 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Raster {
        let mut raster = Raster::transparent(width, height);
        for y in 0..height {
            for x in 0..width {
                raster.set(x, y, Rgba::rgb(x as u8, y as u8, 7));
            }
        }
        raster
    }

    #[test]
    fn test_crop_copies_region() {
        let source = gradient(20, 10);
        let crop = source.crop(5, 2, 4, 3).unwrap();
        assert_eq!((crop.width, crop.height), (4, 3));
        assert_eq!(crop.get(0, 0), Rgba::rgb(5, 2, 7));
        assert_eq!(crop.get(3, 2), Rgba::rgb(8, 4, 7));
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let source = gradient(20, 10);
        assert!(matches!(
            source.crop(18, 0, 4, 10),
            Err(RasterError::RegionOutOfBounds { .. })
        ));
        assert!(source.crop(0, 0, 0, 10).is_err());
        assert!(source.crop(u32::MAX, 0, 2, 1).is_err());
    }

    #[test]
    fn test_draw_clips_at_edges() {
        let mut canvas = Raster::new(4, 4, Rgba::rgb(0, 0, 0));
        let stamp = Raster::new(3, 3, Rgba::rgb(255, 255, 255));
        canvas.draw(&stamp, -1, 2);

        let white = Rgba::rgb(255, 255, 255);
        assert_eq!(canvas.get(0, 2), white);
        assert_eq!(canvas.get(1, 3), white);
        assert_eq!(canvas.get(2, 2), Rgba::rgb(0, 0, 0));
        assert_eq!(canvas.get(0, 1), Rgba::rgb(0, 0, 0));
    }

    #[test]
    fn test_draw_transparent_pixels_keep_background() {
        let background = Rgba::rgb(22, 163, 74);
        let mut canvas = Raster::new(2, 1, background);
        let mut stamp = Raster::transparent(2, 1);
        stamp.set(1, 0, Rgba::rgb(255, 255, 255));
        canvas.draw(&stamp, 0, 0);

        assert_eq!(canvas.get(0, 0), background);
        assert_eq!(canvas.get(1, 0), Rgba::rgb(255, 255, 255));
    }

    #[test]
    fn test_scale_nearest_doubles_pixels() {
        let source = gradient(2, 2);
        let scaled = source.scale_nearest(4, 4);
        assert_eq!(scaled.get(0, 0), source.get(0, 0));
        assert_eq!(scaled.get(1, 1), source.get(0, 0));
        assert_eq!(scaled.get(3, 3), source.get(1, 1));
    }

    #[test]
    fn test_from_rgba8_validates_length() {
        assert!(Raster::from_rgba8(2, 2, &[0; 16]).is_ok());
        assert!(matches!(
            Raster::from_rgba8(2, 2, &[0; 15]),
            Err(RasterError::SizeMismatch { .. })
        ));
        assert!(matches!(
            Raster::from_rgba8(0, 2, &[]),
            Err(RasterError::EmptyDimensions(0, 2))
        ));
    }
}
