use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};

use crate::raytracer::{Color, RenderResult};

#[derive(Debug)]
pub struct Image {
    extent: (usize, usize),
    data: Box<[f64]>,
}

// Number of samples the color has
const NUM_PIXEL_SAMPLES: usize = 3;

/// Map an intensity to its 8-bit channel value, floor(255 * c) after clamping
/// into [0, 1].
pub fn to_channel(intensity: f64) -> u8 {
    (255.0 * intensity.clamp(0.0, 1.0)) as u8
}

impl Image {
    pub fn new(extent: (usize, usize)) -> Self {
        assert!(extent.0 > 0 && extent.1 > 0, "Invalid image size");
        Self {
            extent,
            data: vec![0.0; extent.0 * extent.1 * NUM_PIXEL_SAMPLES].into_boxed_slice(),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        self.extent
    }

    pub fn width(&self) -> usize {
        self.extent.0
    }

    pub fn height(&self) -> usize {
        self.extent.1
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.extent.0 && y < self.extent.1,
            "Invalid pixel coordinates ({}, {})",
            x,
            y
        );
        (y * self.extent.0 + x) * NUM_PIXEL_SAMPLES
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        let i = self.offset(x, y);
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    pub fn set(&mut self, x: usize, y: usize, value: Color) {
        let i = self.offset(x, y);
        self.data[i] = value.x.clamp(0.0, 1.0);
        self.data[i + 1] = value.y.clamp(0.0, 1.0);
        self.data[i + 2] = value.z.clamp(0.0, 1.0);
    }

    /// 8-bit copy of the image, same mapping as the PPM writer.
    pub fn to_rgb_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            let color = self.get(x as usize, y as usize);
            Rgb([to_channel(color.x), to_channel(color.y), to_channel(color.z)])
        })
    }

    /// Row-major 8-bit RGB bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_rgb_image().into_raw()
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        self.to_rgb_image().save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}
