use std::{io::Write, time::Instant};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::raytracer::{Camera, Color, Image, PpmWriter, Ray, Scene};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Image(#[from] image::ImageError),
}

pub type RenderResult<T> = Result<T, RenderError>;

pub struct Renderer {
    scene: Scene,
    camera: Camera,
}

impl Renderer {
    pub fn new(scene: Scene, camera: Camera) -> Self {
        Self { scene, camera }
    }

    /// Flat color seen along a ray. No bounces, no shading.
    pub fn trace(&self, ray: &Ray) -> Color {
        self.scene.color(ray)
    }

    /// Color of pixel (i, j), j counted from the top row.
    pub fn pixel_color(&self, i: usize, j: usize) -> Color {
        self.trace(&self.camera.create_pixel_ray(i, j))
    }

    /// Stream the image as P3 PPM, row by row from the top-left pixel. Each
    /// pixel is written as soon as it is traced.
    pub fn render<W: Write>(&self, out: W) -> RenderResult<W> {
        let (width, height) = self.camera.image_size();
        info!("Rendering {}x{} PPM", width, height);
        let start = Instant::now();

        let mut ppm = PpmWriter::new(out, width, height)?;
        for j in 0..height {
            trace!("Row {}/{}", j + 1, height);
            for i in 0..width {
                ppm.write_color(self.pixel_color(i, j))?;
            }
        }
        let out = ppm.finish()?;

        debug!("Rendered in {:?}", start.elapsed());
        Ok(out)
    }

    /// Render the whole image into memory.
    pub fn render_image(&self) -> Image {
        let (width, height) = self.camera.image_size();
        info!("Rendering {}x{} image", width, height);
        let start = Instant::now();

        let mut image = Image::new((width, height));
        for j in 0..height {
            for i in 0..width {
                image.set(i, j, self.pixel_color(i, j));
            }
        }

        debug!("Rendered in {:?}", start.elapsed());
        image
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Scene::default(), Camera::default())
    }
}
