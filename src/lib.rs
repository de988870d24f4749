pub mod config;
pub mod raytracer;
