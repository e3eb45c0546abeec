use std::path::Path;

use anyhow::Context as _;

use crate::animation::scheduler::StepSizes;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{LintransError, LintransResult};
use crate::interaction::manipulator::ManipulatorTolerances;

/// Colours of the scene.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Canvas background.
    pub space: Rgba8,
    /// Lines of the transformed grid.
    pub grid: Rgba8,
    /// Lines of the fixed identity grid underneath.
    pub reference_grid: Rgba8,
    /// First basis arrow and its handle.
    pub axis0: Rgba8,
    /// Second basis arrow and its handle.
    pub axis1: Rgba8,
    /// Handle fill while hovered.
    pub handle_hot: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            space: Rgba8::rgb(63, 63, 70),
            grid: Rgba8::rgb(113, 113, 122),
            reference_grid: Rgba8::rgb(82, 82, 91),
            axis0: Rgba8::rgb(239, 68, 68),
            axis1: Rgba8::rgb(34, 197, 94),
            handle_hot: Rgba8::rgb(250, 250, 250),
        }
    }
}

/// Stroke widths and marker sizes, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    /// Regular transformed grid line width.
    pub grid: f64,
    /// Width of the transformed lines through the origin.
    pub grid_axis: f64,
    /// Reference grid line width.
    pub reference_grid: f64,
    /// Basis arrow shaft width.
    pub arrow: f64,
    /// Length of the arrow head sides.
    pub arrow_head: f64,
    /// Radius of the drag handles.
    pub handle_radius: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            grid: 1.0,
            grid_axis: 2.0,
            reference_grid: 1.0,
            arrow: 3.0,
            arrow_head: 8.0,
            handle_radius: 5.0,
        }
    }
}

impl StrokeStyle {
    /// Every size must be finite and non-negative.
    pub fn validate(&self) -> LintransResult<()> {
        let sizes = [
            ("grid", self.grid),
            ("grid_axis", self.grid_axis),
            ("reference_grid", self.reference_grid),
            ("arrow", self.arrow),
            ("arrow_head", self.arrow_head),
            ("handle_radius", self.handle_radius),
        ];
        for (name, v) in sizes {
            if !(v.is_finite() && v >= 0.0) {
                return Err(LintransError::validation(format!(
                    "style.{name} must be a finite size >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// All tunables of a visualizer session. Missing JSON fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Animation increments per frame.
    pub steps: StepSizes,
    /// Handle hit box and drag snapping.
    pub tolerances: ManipulatorTolerances,
    /// Display pixels per world unit.
    pub pixels_per_unit: f64,
    /// Extra canvas pixels beyond the window on each dimension.
    pub canvas_padding: u32,
    /// Stroke widths and marker sizes.
    pub style: StrokeStyle,
    /// Scene colours.
    pub palette: Palette,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            steps: StepSizes::default(),
            tolerances: ManipulatorTolerances::default(),
            pixels_per_unit: 50.0,
            canvas_padding: 200,
            style: StrokeStyle::default(),
            palette: Palette::default(),
        }
    }
}

impl VisualizerConfig {
    /// Validate every section.
    pub fn validate(&self) -> LintransResult<()> {
        self.steps.validate()?;
        self.tolerances.validate()?;
        self.style.validate()?;
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(LintransError::validation("pixels_per_unit must be > 0"));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> LintransResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| LintransError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON file.
    pub fn from_path(path: &Path) -> LintransResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
