use glam::DVec3;

use crate::raytracer::Point3;

#[derive(Debug, Clone)]
pub struct Ray {
    origin: Point3,
    direction: DVec3,
    tmin: f64,
    tmax: f64,
}

impl Ray {
    pub const MIN_RAY_DISTANCE: f64 = 0.001;
    pub const MAX_RAY_DISTANCE: f64 = f64::INFINITY;

    /// Direction is taken as is, it doesn't need to be normalized.
    pub fn new(origin: Point3, direction: DVec3) -> Self {
        Self {
            origin,
            direction,
            tmin: Self::MIN_RAY_DISTANCE,
            tmax: Self::MAX_RAY_DISTANCE,
        }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    pub fn tmin(&self) -> f64 {
        self.tmin
    }

    pub fn tmax(&self) -> f64 {
        self.tmax
    }

    /// Compute ray position at a certain t.
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// Whether t lies strictly inside the ray's valid interval.
    pub fn contains(&self, t: f64) -> bool {
        t > self.tmin && t < self.tmax
    }

    /// Creates a new ray with updated tmax. The interval only ever shrinks, a
    /// larger tmax leaves the current one in place.
    pub fn with_tmax(&self, new_tmax: f64) -> Ray {
        let mut ray = self.clone();
        ray.tmax = new_tmax.min(self.tmax);
        ray
    }
}
