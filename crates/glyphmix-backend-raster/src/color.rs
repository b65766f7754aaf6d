//! 8-bit RGBA color and source-over compositing.

/// RGBA color with 8-bit straight (non-premultiplied) components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the state of a freshly cleared surface.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a color with alpha.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create an opaque color from an RGB triple.
    pub const fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Convert to an RGBA quadruple.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Composite `self` over `dst` (Porter-Duff source-over).
    pub fn over(self, dst: Rgba) -> Rgba {
        match (self.a, dst.a) {
            (255, _) => self,
            (0, _) => dst,
            (_, 0) => self,
            _ => {
                let sa = self.a as u32;
                let da = dst.a as u32;
                // Output alpha scaled by 255: sa*255 + da*(255-sa)
                let out_a = sa * 255 + da * (255 - sa);
                let blend = |s: u8, d: u8| -> u8 {
                    let num = s as u32 * sa * 255 + d as u32 * da * (255 - sa);
                    ((num + out_a / 2) / out_a) as u8
                };
                Rgba {
                    r: blend(self.r, dst.r),
                    g: blend(self.g, dst.g),
                    b: blend(self.b, dst.b),
                    a: ((out_a + 127) / 255) as u8,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_source_replaces() {
        let src = Rgba::rgb(10, 20, 30);
        assert_eq!(src.over(Rgba::rgb(200, 200, 200)), src);
    }

    #[test]
    fn test_transparent_source_keeps_destination() {
        let dst = Rgba::rgb(1, 2, 3);
        assert_eq!(Rgba::TRANSPARENT.over(dst), dst);
    }

    #[test]
    fn test_half_alpha_over_opaque() {
        let src = Rgba::new(255, 0, 0, 128);
        let out = src.over(Rgba::rgb(0, 0, 255));
        assert_eq!(out.a, 255);
        assert!((out.r as i32 - 128).abs() <= 1);
        assert!((out.b as i32 - 127).abs() <= 1);
        assert_eq!(out.g, 0);
    }

    #[test]
    fn test_over_transparent_destination_keeps_source() {
        let src = Rgba::new(40, 50, 60, 70);
        assert_eq!(src.over(Rgba::TRANSPARENT), src);
    }
}
