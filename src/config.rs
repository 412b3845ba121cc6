//! Scene configuration.
//!
//! Handles loading and saving scene descriptions from JSON files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::circle::{Circle, FALLBACK_RADIUS};
use crate::core::color::Color;
use crate::core::scene::Scene;
use crate::utils::error::{AppError, Result};

/// One circle entry of a scene file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircleConfig {
    /// Empty labels are replaced with `Circle N` when the scene is built.
    #[serde(default)]
    pub label: String,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// Scene file contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: Color,
    #[serde(default)]
    pub circles: Vec<CircleConfig>,
}

fn default_radius() -> f64 {
    FALLBACK_RADIUS
}

fn default_title() -> String {
    "Circle Drawing Demo".to_string()
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> Color {
    Color::WHITE
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            background: default_background(),
            circles: Vec::new(),
        }
    }
}

impl SceneConfig {
    /// Build the scene. Radii pass through [`Circle::new`], so invalid values
    /// come out as the fallback radius.
    pub fn to_scene(&self) -> Scene {
        let mut scene = Scene::new(self.title.clone(), self.width, self.height, self.background);
        for (index, entry) in self.circles.iter().enumerate() {
            let label = if entry.label.is_empty() {
                format!("Circle {}", index + 1)
            } else {
                entry.label.clone()
            };
            scene.push(label, Circle::new(entry.radius, entry.color), entry.x, entry.y);
        }
        scene
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AppError::Config {
                message: format!("canvas size must be non-zero, got {}x{}", self.width, self.height),
            });
        }
        Ok(())
    }
}

impl From<&Scene> for SceneConfig {
    fn from(scene: &Scene) -> Self {
        Self {
            title: scene.title.clone(),
            width: scene.width,
            height: scene.height,
            background: scene.background,
            circles: scene
                .circles()
                .iter()
                .map(|placed| CircleConfig {
                    label: placed.label.clone(),
                    radius: placed.circle.radius(),
                    color: placed.circle.color(),
                    x: placed.x,
                    y: placed.y,
                })
                .collect(),
        }
    }
}

/// Loads and saves a scene file at a fixed path.
pub struct SceneStore {
    path: PathBuf,
}

impl SceneStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the scene file.
    pub fn load(&self) -> Result<SceneConfig> {
        if !self.path.exists() {
            return Err(AppError::Config {
                message: format!("scene file not found: {}", self.path.display()),
            });
        }

        let content = fs::read_to_string(&self.path)?;
        let config: SceneConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::debug!(
            path = %self.path.display(),
            circles = config.circles.len(),
            "Loaded scene file"
        );
        Ok(config)
    }

    /// Write the scene as pretty JSON, creating parent directories.
    pub fn save(&self, config: &SceneConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "Saved scene file");
        Ok(())
    }
}
