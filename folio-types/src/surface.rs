//! Drawing surfaces for rendering and image conversion

use crate::error::{BackendFailure, PageError, Result};
use std::path::Path;

/// Pixel format of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// BGRA format (4 bytes per pixel)
    #[default]
    Bgra,
    /// BGR format (3 bytes per pixel)
    Bgr,
    /// Grayscale format (1 byte per pixel)
    Gray,
}

impl PixelFormat {
    /// Get the number of bytes per pixel for this format.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgra => 4,
            PixelFormat::Bgr => 3,
            PixelFormat::Gray => 1,
        }
    }
}

/// Owned pixel buffer a backend draws into.
///
/// Rows are `stride` bytes apart; the stride is the row width rounded up to a
/// multiple of four bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    data: Vec<u8>,
}

impl Surface {
    /// Create a zero-filled surface.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        let row = width as usize * format.bytes_per_pixel();
        let stride = (row + 3) & !3;
        Self {
            width,
            height,
            stride,
            format,
            data: vec![0; stride * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Pixel format.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw pixel data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw pixel data.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Fill every pixel with the same value, given in the surface's byte order.
    pub fn fill(&mut self, pixel: &[u8]) -> Result<()> {
        let bpp = self.format.bytes_per_pixel();
        if pixel.len() != bpp {
            return Err(PageError::invalid_arguments(format!(
                "pixel has {} bytes, format needs {}",
                pixel.len(),
                bpp
            )));
        }
        if self.stride == 0 {
            return Ok(());
        }
        for row in self.data.chunks_exact_mut(self.stride) {
            for px in row[..self.width as usize * bpp].chunks_exact_mut(bpp) {
                px.copy_from_slice(pixel);
            }
        }
        Ok(())
    }

    /// Bytes of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let offset = y as usize * self.stride + x as usize * bpp;
        self.data.get(offset..offset + bpp)
    }

    /// Save the surface as a PNG file.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        use png::{BitDepth, ColorType, Encoder};
        use std::fs::File;
        use std::io::BufWriter;

        if self.width == 0 || self.height == 0 {
            return Err(PageError::invalid_arguments("cannot encode an empty surface"));
        }

        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let bpp = self.format.bytes_per_pixel();
        let mut packed = Vec::with_capacity(self.width as usize * self.height as usize * bpp);
        for row in self.data.chunks_exact(self.stride) {
            for px in row[..self.width as usize * bpp].chunks_exact(bpp) {
                match self.format {
                    // BGR(A) to RGB(A)
                    PixelFormat::Bgra => packed.extend_from_slice(&[px[2], px[1], px[0], px[3]]),
                    PixelFormat::Bgr => packed.extend_from_slice(&[px[2], px[1], px[0]]),
                    PixelFormat::Gray => packed.push(px[0]),
                }
            }
        }
        let color_type = match self.format {
            PixelFormat::Bgra => ColorType::Rgba,
            PixelFormat::Bgr => ColorType::Rgb,
            PixelFormat::Gray => ColorType::Grayscale,
        };

        let mut encoder = Encoder::new(writer, self.width, self.height);
        encoder.set_color(color_type);
        encoder.set_depth(BitDepth::Eight);

        let mut png_writer = encoder
            .write_header()
            .map_err(|e| PageError::Backend(BackendFailure::failed(format!("PNG encoding: {e}"))))?;

        png_writer
            .write_image_data(&packed)
            .map_err(|e| PageError::Backend(BackendFailure::failed(format!("PNG encoding: {e}"))))?;
        png_writer
            .finish()
            .map_err(|e| PageError::Backend(BackendFailure::failed(format!("PNG encoding: {e}"))))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stride_is_four_byte_aligned() {
        let surface = Surface::new(5, 2, PixelFormat::Bgr);
        assert_eq!(surface.stride(), 16);
        assert_eq!(surface.data().len(), 32);

        let gray = Surface::new(4, 3, PixelFormat::Gray);
        assert_eq!(gray.stride(), 4);
    }

    #[test]
    fn test_fill_and_pixel() {
        let mut surface = Surface::new(3, 2, PixelFormat::Bgra);
        surface.fill(&[1, 2, 3, 255]).unwrap();
        assert_eq!(surface.pixel(2, 1), Some(&[1u8, 2, 3, 255][..]));
        assert_eq!(surface.pixel(3, 0), None);
        assert!(surface.fill(&[0, 0, 0]).is_err());
    }

    #[test]
    fn test_write_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");

        let mut surface = Surface::new(7, 3, PixelFormat::Bgr);
        surface.fill(&[0, 0, 255]).unwrap();
        surface.write_png(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
