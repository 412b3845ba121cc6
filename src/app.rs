use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

use crate::config::{SceneConfig, SceneStore};
use crate::core::report;
use crate::core::scene::Scene;
use crate::render::SvgSurface;

/// Command-line application state.
pub struct App {
    scene_path: Option<PathBuf>,
}

impl App {
    /// `scene_path` of `None` means the built-in demo scene.
    pub fn new(scene_path: Option<PathBuf>) -> Self {
        Self { scene_path }
    }

    pub fn load_scene(&self) -> anyhow::Result<Scene> {
        match &self.scene_path {
            Some(path) => {
                let config = SceneStore::new(path)
                    .load()
                    .with_context(|| format!("Failed to load scene from {}", path.display()))?;
                let scene = config.to_scene();
                tracing::info!(
                    path = %path.display(),
                    circles = scene.len(),
                    "Loaded scene \"{}\"",
                    scene.title
                );
                Ok(scene)
            }
            None => {
                tracing::debug!("No scene file given, using demo scene");
                Ok(Scene::demo())
            }
        }
    }

    /// Measurement report of every circle in the scene.
    pub fn report(&self) -> anyhow::Result<String> {
        let scene = self.load_scene()?;
        Ok(report::format_report(&scene.title, &scene.measurements()))
    }

    pub fn render_svg(&self) -> anyhow::Result<String> {
        let scene = self.load_scene()?;
        let mut surface = SvgSurface::new(scene.width, scene.height).with_background(scene.background);
        scene.draw(&mut surface);
        Ok(surface.finish())
    }

    /// Render the scene and write the SVG document to `output`.
    pub fn render_to_file(&self, output: &Path) -> anyhow::Result<()> {
        let svg = self.render_svg()?;
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        fs::write(output, svg).with_context(|| format!("Failed to write {}", output.display()))?;
        tracing::info!(path = %output.display(), "Wrote SVG");
        Ok(())
    }

    /// Write the demo scene as a JSON scene file.
    pub fn init_scene(output: &Path, force: bool) -> anyhow::Result<()> {
        if output.exists() && !force {
            bail!("{} already exists (use --force to overwrite)", output.display());
        }
        let config = SceneConfig::from(&Scene::demo());
        SceneStore::new(output)
            .save(&config)
            .with_context(|| format!("Failed to save scene to {}", output.display()))?;
        tracing::info!(path = %output.display(), "Wrote demo scene");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report() {
        let report = App::new(None).report().unwrap();
        assert!(report.starts_with("=== Circle Drawing Demo ===\n"));
        assert!(report.contains("Red - Radius: 80.00, Area: 20106.19, Circumference: 502.65"));
        assert_eq!(report.lines().count(), 10);
    }

    #[test]
    fn test_init_then_render() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = dir.path().join("scene.json");
        App::init_scene(&scene_path, false).unwrap();

        let app = App::new(Some(scene_path.clone()));
        let out = dir.path().join("out").join("scene.svg");
        app.render_to_file(&out).unwrap();

        let svg = fs::read_to_string(&out).unwrap();
        assert_eq!(svg.matches("<ellipse").count(), 9);
        assert!(svg.contains("fill=\"#008000\""));
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = dir.path().join("scene.json");
        fs::write(&scene_path, "{}").unwrap();

        assert!(App::init_scene(&scene_path, false).is_err());
        App::init_scene(&scene_path, true).unwrap();
        assert_eq!(App::new(Some(scene_path)).load_scene().unwrap(), Scene::demo());
    }

    #[test]
    fn test_render_huge_radius_at_negative_center() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = dir.path().join("huge.json");
        fs::write(&scene_path, r#"{"circles": [{"radius": 1e300, "x": -2}]}"#).unwrap();

        let svg = App::new(Some(scene_path)).render_svg().unwrap();
        assert_eq!(svg.matches("<ellipse").count(), 1);
    }

    #[test]
    fn test_missing_scene_file() {
        let app = App::new(Some(PathBuf::from("/definitely/not/here.json")));
        let err = app.report().unwrap_err();
        assert!(err.to_string().contains("Failed to load scene"));
    }
}
