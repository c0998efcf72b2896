/// Host configuration: the render constants plus terminal-only settings
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wire3d_core::RenderConfig;

/// Top-level configuration file for the terminal renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub render: RenderConfig,
    /// Size the grid from the terminal instead of `render.width`/`render.height`.
    pub fit_terminal: bool,
    /// Grid columns per terminal column when fitting; character cells are
    /// roughly twice as tall as they are wide.
    pub aspect_ratio: f64,
    /// How long the instructions screen stays up before rendering starts.
    pub splash_ms: u64,
    /// Draw the zoom status line over the last grid row.
    pub show_status: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            fit_terminal: true,
            aspect_ratio: 0.5,
            splash_ms: 3000,
            show_status: true,
        }
    }
}

impl AppConfig {
    /// Read a JSON configuration file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Resolve the render configuration for a terminal of `size` (columns, rows).
    pub fn render_for(&self, size: Option<(u16, u16)>) -> anyhow::Result<RenderConfig> {
        ensure!(
            self.aspect_ratio > 0.0 && self.aspect_ratio <= 1.0,
            "aspect_ratio must be in (0, 1], got {}",
            self.aspect_ratio
        );

        let render = match (self.fit_terminal, size) {
            (true, Some((cols, rows))) => {
                let width = (f64::from(cols) * self.aspect_ratio) as usize;
                self.render.with_size(width.max(1), usize::from(rows).max(1))
            }
            _ => self.render.clone(),
        };
        render.validate()?;
        Ok(render)
    }
}
