use glam::DVec3;

use crate::raytracer::{Point3, Ray};

/// Pinhole camera looking down -z with a flat viewport at `focal_length`.
///
/// The viewport is never stretched to the image aspect ratio: every image
/// size maps onto the same `viewport_width` x `viewport_height` rectangle.
#[derive(Debug, Clone)]
pub struct Camera {
    center: Point3,
    image_size: (usize, usize),
    viewport_size: (f64, f64),
    pixel00: Point3,
    pixel_delta_u: DVec3,
    pixel_delta_v: DVec3,
}

impl Camera {
    pub fn new(
        center: Point3,
        focal_length: f64,
        viewport_size: (f64, f64),
        image_size: (usize, usize),
    ) -> Self {
        assert!(
            image_size.0 > 0 && image_size.1 > 0,
            "Invalid image size ({}, {})",
            image_size.0,
            image_size.1
        );

        let viewport_u = DVec3::new(viewport_size.0, 0.0, 0.0);
        // Negated so rows grow downwards while world y grows upwards.
        let viewport_v = DVec3::new(0.0, -viewport_size.1, 0.0);

        let pixel_delta_u = viewport_u / image_size.0 as f64;
        let pixel_delta_v = viewport_v / image_size.1 as f64;

        let viewport_upper_left =
            center - DVec3::new(0.0, 0.0, focal_length) - 0.5 * viewport_u - 0.5 * viewport_v;
        let pixel00 = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Self {
            center,
            image_size,
            viewport_size,
            pixel00,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    /// Camera position.
    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn image_size(&self) -> (usize, usize) {
        self.image_size
    }

    pub fn image_aspect_ratio(&self) -> f64 {
        self.image_size.0 as f64 / self.image_size.1 as f64
    }

    pub fn viewport_aspect_ratio(&self) -> f64 {
        self.viewport_size.0 / self.viewport_size.1
    }

    /// True when pixels would come out stretched, i.e. the image and the
    /// viewport disagree on aspect ratio.
    pub fn is_distorted(&self) -> bool {
        (self.image_aspect_ratio() - self.viewport_aspect_ratio()).abs() > 1e-9
    }

    /// World position of the center of pixel (i, j), j counted from the top.
    pub fn pixel_center(&self, i: usize, j: usize) -> Point3 {
        self.pixel00 + (i as f64) * self.pixel_delta_u + (j as f64) * self.pixel_delta_v
    }

    /// Create the ray going through the center of pixel (i, j). The direction
    /// is left unnormalized.
    pub fn create_pixel_ray(&self, i: usize, j: usize) -> Ray {
        Ray::new(self.center, self.pixel_center(i, j) - self.center)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point3::ZERO, 1.0, (1.0, 1.0), (400, 400))
    }
}
