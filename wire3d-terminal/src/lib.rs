/// Terminal host for the wireframe renderer
use anyhow::Context;
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{info, warn};
use std::io::{self, stdout, Write};
use std::time::Duration;
use wire3d_core::{FrameLoop, FrameStats, RenderConfig, SystemClock};

pub mod config;
pub mod input;
pub mod renderer;

pub use config::AppConfig;
pub use input::KeyboardInput;
pub use renderer::TerminalSink;

/// Lines of the instructions screen shown before rendering starts.
pub fn instructions(splash: Duration) -> Vec<String> {
    vec![
        "3D Console Renderer - Zoom Controls".to_string(),
        "-----------------------------------".to_string(),
        "Press '+' to Zoom In".to_string(),
        "Press '-' to Zoom Out".to_string(),
        "Press 'Esc' to Exit".to_string(),
        format!("Rendering will start in {} seconds...", splash.as_secs()),
    ]
}

/// Viewport used when the terminal size is unknown: the grid itself,
/// saturated to what a terminal can address.
pub fn fallback_viewport(render: &RenderConfig) -> (u16, u16) {
    (
        u16::try_from(render.width).unwrap_or(u16::MAX),
        u16::try_from(render.height).unwrap_or(u16::MAX),
    )
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    config: AppConfig,
}

impl TerminalApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Take over the terminal, render until quit, then restore it.
    pub fn run(&mut self) -> anyhow::Result<FrameStats> {
        let size = match terminal::size() {
            Ok(size) => Some(size),
            Err(err) => {
                warn!("could not read terminal size, using configured grid: {err}");
                None
            }
        };
        let render = self.config.render_for(size)?;
        info!(
            "rendering {}x{} grid at {} fps",
            render.width, render.height, render.target_fps
        );

        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;

        let viewport = size.unwrap_or_else(|| fallback_viewport(&render));
        let result = self
            .show_instructions()
            .context("Failed to draw instructions")
            .and_then(|()| self.main_loop(&render, viewport));

        // Cleanup
        let restored = terminal::disable_raw_mode()
            .and_then(|()| execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show));
        if let Err(err) = &restored {
            warn!("failed to restore terminal: {err}");
        }

        let stats = result?;
        restored.context("Failed to restore terminal")?;
        Ok(stats)
    }

    fn show_instructions(&self) -> io::Result<()> {
        let splash = Duration::from_millis(self.config.splash_ms);
        if splash.is_zero() {
            return Ok(());
        }

        let mut stdout = stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        let lines = instructions(splash);
        let notice = lines.len() - 1;
        for (y, line) in lines.iter().enumerate() {
            if y == notice {
                queue!(stdout, ResetColor)?;
            } else {
                queue!(stdout, SetForegroundColor(Color::Yellow))?;
            }
            queue!(stdout, cursor::MoveTo(0, y as u16), Print(line))?;
        }
        stdout.flush()?;

        std::thread::sleep(splash);
        execute!(stdout, terminal::Clear(ClearType::All))
    }

    fn main_loop(&self, render: &RenderConfig, viewport: (u16, u16)) -> anyhow::Result<FrameStats> {
        let sink = TerminalSink::new(stdout(), viewport, self.config.show_status);
        let mut frame_loop = FrameLoop::new(render, KeyboardInput, sink, SystemClock::new())?;
        frame_loop.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_mention_controls() {
        let lines = instructions(Duration::from_millis(3000));
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().any(|l| l.contains("'+'")));
        assert!(lines.iter().any(|l| l.contains("'-'")));
        assert!(lines.iter().any(|l| l.contains("'Esc'")));
        assert_eq!(lines[5], "Rendering will start in 3 seconds...");
    }

    #[test]
    fn test_fallback_viewport_saturates() {
        let render = RenderConfig::default();
        assert_eq!(fallback_viewport(&render), (140, 70));

        let wide = render.with_size(70_000, 300);
        assert_eq!(fallback_viewport(&wide), (u16::MAX, 300));
    }
}
