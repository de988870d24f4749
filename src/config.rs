use std::{path::Path, path::PathBuf};

use glam::DVec3;
use serde::Deserialize;
use thiserror::Error;

use crate::raytracer::Camera;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Ppm,
    Png,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub center: DVec3,
    pub focal_length: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            center: DVec3::ZERO,
            focal_length: 1.0,
            viewport_width: 1.0,
            viewport_height: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output file, stdout when unset.
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub image: ImageConfig,
    pub camera: CameraConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid image size {0}x{1}, both sides must be positive")]
    InvalidImageSize(usize, usize),
    #[error("Invalid camera '{0}', must be positive and finite")]
    InvalidCamera(&'static str),
    #[error("PNG output needs an output file")]
    MissingOutput,
}

type ConfigResult<T> = Result<T, ConfigError>;

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and range-check a config. Output settings are checked later by
    /// `validate`, once command line overrides are in.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate_geometry()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.validate_geometry()?;

        if self.format == OutputFormat::Png && self.output.is_none() {
            return Err(ConfigError::MissingOutput);
        }

        Ok(())
    }

    fn validate_geometry(&self) -> ConfigResult<()> {
        if self.image.width == 0 || self.image.height == 0 {
            return Err(ConfigError::InvalidImageSize(
                self.image.width,
                self.image.height,
            ));
        }

        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.camera.focal_length) {
            return Err(ConfigError::InvalidCamera("focal_length"));
        }
        if !positive(self.camera.viewport_width) {
            return Err(ConfigError::InvalidCamera("viewport_width"));
        }
        if !positive(self.camera.viewport_height) {
            return Err(ConfigError::InvalidCamera("viewport_height"));
        }
        if !self.camera.center.is_finite() {
            return Err(ConfigError::InvalidCamera("center"));
        }

        Ok(())
    }

    pub fn camera(&self) -> Camera {
        Camera::new(
            self.camera.center,
            self.camera.focal_length,
            (self.camera.viewport_width, self.camera.viewport_height),
            (self.image.width, self.image.height),
        )
    }
}
