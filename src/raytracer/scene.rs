use crate::raytracer::{Color, Point3, Ray};

pub struct Hit<'a> {
    pub distance: f64,
    pub sphere: &'a Sphere,
}

pub trait Hittable {
    fn hit(&self, ray: &Ray) -> Option<Hit<'_>>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub radius: f64,
    pub color: Color,
    pub center: Point3,
}

impl Sphere {
    pub const fn new(radius: f64, color: Color, center: Point3) -> Self {
        Self {
            radius,
            color,
            center,
        }
    }

    /// Both roots of the ray-sphere quadratic, unordered, or None when the
    /// discriminant is negative.
    ///
    /// `oc` is taken as center minus origin, so the roots come out with the
    /// opposite sign of the geometric hit distance. The default scene is laid
    /// out against this convention.
    pub fn intersect(&self, ray: &Ray) -> Option<(f64, f64)> {
        let oc = self.center - ray.origin();
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        Some((
            (-b + sqrt_discriminant) / (2.0 * a),
            (-b - sqrt_discriminant) / (2.0 * a),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Vec<Sphere>,
}

impl Scene {
    pub const BACKGROUND: Color = Color::ONE;

    pub fn new(objects: Vec<Sphere>) -> Self {
        Self { objects }
    }

    pub fn background(&self) -> Color {
        Self::BACKGROUND
    }

    /// Flat color seen along the ray: the nearest sphere's color, or the
    /// background when nothing is hit.
    pub fn color(&self, ray: &Ray) -> Color {
        match self.hit(ray) {
            Some(hit) => hit.sphere.color,
            None => self.background(),
        }
    }
}

impl Default for Scene {
    /// Red sphere in the middle, green and blue further back on each side.
    fn default() -> Self {
        Self::new(vec![
            Sphere::new(1.0, Color::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 3.0)),
            Sphere::new(1.0, Color::new(0.0, 1.0, 0.0), Point3::new(-2.0, 0.0, 4.0)),
            Sphere::new(1.0, Color::new(0.0, 0.0, 1.0), Point3::new(2.0, 0.0, 4.0)),
        ])
    }
}

impl Hittable for Scene {
    fn hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest_hit = None;
        // Every accepted root pulls tmax in, so later roots must be strictly
        // closer. Ties keep whichever was found first.
        let mut ray = ray.clone();

        for sphere in self.objects.iter() {
            let Some((t1, t2)) = sphere.intersect(&ray) else {
                continue;
            };

            for distance in [t1, t2] {
                if ray.contains(distance) {
                    closest_hit = Some(Hit { distance, sphere });
                    ray = ray.with_tmax(distance);
                }
            }
        }

        closest_hit
    }
}
