//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;
use std::time::Duration;
use hyperview_core::{
    CustomShapeParams, ProjectionMode, SceneParameters, ShapeKind, QUALITY_LIMIT,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Drawing surface configuration
    #[serde(default)]
    pub canvas: CanvasConfig,
    /// Initial shape and projection settings
    #[serde(default)]
    pub scene: SceneConfig,
    /// Auto-rotation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Pointer and regeneration configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Where the headless renderer writes frames
    #[serde(default)]
    pub output: OutputConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HV_SCENE__SHAPE=simplex -> scene.shape = "simplex"
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Drawing surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Background fill (any SVG color)
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: "#0a0a1a".to_string(),
        }
    }
}

/// Initial scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Shape shown at startup
    pub shape: ShapeKind,
    pub projection: ProjectionMode,
    /// Viewer distance for perspective projection
    pub distance: f32,
    /// Pixels per unit
    pub scale: f32,
    /// Sampling density for the hypersphere and duocylinder
    pub quality: usize,
    /// Upper bound the viewer applies to quality (never above 50)
    pub max_quality: usize,
    /// Grid size of the custom shape
    pub custom_points: usize,
    /// Base radius of the custom shape
    pub custom_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Tesseract,
            projection: ProjectionMode::Orthogonal,
            distance: 5.0,
            scale: 100.0,
            quality: 20,
            max_quality: 30,
            custom_points: 12,
            custom_radius: 1.0,
        }
    }
}

impl SceneConfig {
    /// The quality cap, limited to what the generators can afford
    pub fn quality_cap(&self) -> usize {
        self.max_quality.clamp(1, QUALITY_LIMIT)
    }

    /// Convert to clamped scene parameters
    pub fn to_scene_parameters(&self) -> SceneParameters {
        let params = SceneParameters {
            projection: self.projection,
            distance: self.distance,
            scale: self.scale,
            quality: self.quality.min(self.quality_cap()),
            custom: CustomShapeParams {
                points: self.custom_points,
                radius: self.custom_radius,
            },
        };
        params.sanitized()
    }
}

/// Auto-rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Start with auto-rotation running
    pub enabled: bool,
    /// XY degrees per reference frame
    pub xy_step: f32,
    /// XW degrees per reference frame
    pub xw_step: f32,
    /// ZW degrees per reference frame
    pub zw_step: f32,
    /// Reference frames per second the steps are tuned for
    pub frame_rate: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            xy_step: 0.8,
            xw_step: 0.6,
            zw_step: 0.4,
            frame_rate: 60.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Degrees per pixel of drag
    pub drag_sensitivity: f32,
    /// Degrees per wheel event
    pub wheel_step: f32,
    /// Minimum time between regenerations triggered by parameter changes
    pub regenerate_debounce_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: 0.5,
            wheel_step: 2.0,
            regenerate_debounce_ms: 300,
        }
    }
}

impl InputConfig {
    pub fn regenerate_debounce(&self) -> Duration {
        Duration::from_millis(self.regenerate_debounce_ms)
    }
}

/// Output configuration for the headless renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory SVG frames are written to
    pub directory: String,
    /// Number of frames to render
    pub frames: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "frames".to_string(),
            frames: 1,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.scene.shape, ShapeKind::Tesseract);
        assert_eq!(config.animation.xy_step, 0.8);
        assert_eq!(config.input.regenerate_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("shape = \"tesseract\""));
        assert!(toml.contains("projection = \"orthogonal\""));
        assert!(toml.contains("drag_sensitivity"));
    }

    #[test]
    fn test_partial_section() {
        let config: AppConfig = toml::from_str("[scene]\nshape = \"simplex\"\n").unwrap();
        assert_eq!(config.scene.shape, ShapeKind::Simplex);
        assert_eq!(config.scene.quality, 20);
        assert_eq!(config.canvas.height, 600);
    }

    #[test]
    fn test_scene_parameters_clamped() {
        let scene = SceneConfig {
            distance: 0.0,
            quality: 45,
            max_quality: 1000,
            ..Default::default()
        };
        let params = scene.to_scene_parameters();
        assert_eq!(params.distance, hyperview_core::MIN_DISTANCE);
        assert_eq!(params.quality, 45);
        assert_eq!(scene.quality_cap(), QUALITY_LIMIT);

        let scene = SceneConfig { quality: 45, ..Default::default() };
        assert_eq!(scene.to_scene_parameters().quality, 30);
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[scene]\nshape = \"klein\"\n");
        assert!(result.is_err());
    }
}
