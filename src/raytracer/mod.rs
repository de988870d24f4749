pub mod camera;
pub mod image;
pub mod ppm;
pub mod ray;
pub mod renderer;
pub mod scene;

pub use camera::*;
pub use self::image::*;
pub use ppm::*;
pub use ray::*;
pub use renderer::*;
pub use scene::*;

/// Points and free vectors share the same representation.
pub type Point3 = glam::DVec3;
/// RGB intensities, nominally within [0, 1].
pub type Color = glam::DVec3;
