use shaderwonder_core::{PixelRect, Rgba};

/// Raster target painted by the progressive renderer.
pub trait Surface {
    /// Size in pixels as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Fill `rect` with a solid colour. `rect` is already clipped to the surface.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);
}

/// In-memory RGBA surface (row-major, 4 bytes per pixel).
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let idx = self.index(x, y);
        Rgba {
            r: self.data[idx],
            g: self.data[idx + 1],
            b: self.data[idx + 2],
            a: self.data[idx + 3],
        }
    }

    /// Raw RGBA bytes, ready for `ImageData`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl Surface for PixelBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        let bytes = color.to_bytes();
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        if rect.x >= right || rect.y >= bottom {
            return;
        }
        for y in rect.y..bottom {
            let start = self.index(rect.x, y);
            let end = self.index(right, y);
            for px in self.data[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&bytes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_transparent() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.as_bytes().len(), 24);
        assert_eq!(buf.pixel(2, 1), Rgba::default());
    }

    #[test]
    fn fill_rect_touches_only_rect() {
        let mut buf = PixelBuffer::new(4, 4);
        let red = Rgba::rgb(255, 0, 0);
        buf.fill_rect(PixelRect::new(1, 1, 2, 2), red);

        assert_eq!(buf.pixel(1, 1), red);
        assert_eq!(buf.pixel(2, 2), red);
        assert_eq!(buf.pixel(0, 0), Rgba::default());
        assert_eq!(buf.pixel(3, 1), Rgba::default());
        assert_eq!(buf.pixel(1, 3), Rgba::default());
    }

    #[test]
    fn fill_rect_clips_overhang() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.fill_rect(PixelRect::new(1, 1, 8, 8), Rgba::rgb(0, 9, 0));
        assert_eq!(buf.pixel(1, 1), Rgba::rgb(0, 9, 0));
        assert_eq!(buf.pixel(0, 1), Rgba::default());
    }
}
