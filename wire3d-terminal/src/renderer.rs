/// Terminal output for finished frames
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{FrameSink, Grid, RenderState};

/// Zoom readout shown on the last grid row, cut or padded to `width`.
pub fn status_line(viewer_distance: f64, width: usize) -> String {
    let text = format!("Zoom Level (Viewer Distance): {viewer_distance:.1}");
    format!("{:<width$.width$}", text, width = width)
}

/// Writes each frame over the previous one, starting at the top-left cell.
pub struct TerminalSink<W: Write> {
    writer: W,
    /// Visible terminal (columns, rows); output past it is cut off.
    viewport: (u16, u16),
    show_status: bool,
    line: String,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(writer: W, viewport: (u16, u16), show_status: bool) -> Self {
        Self {
            writer,
            viewport,
            show_status,
            line: String::new(),
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn draw(&mut self, grid: &Grid, viewer_distance: f64) -> std::io::Result<()> {
        let cols = grid.width().min(usize::from(self.viewport.0));
        let rows = grid.height().min(usize::from(self.viewport.1));

        for (y, row) in grid.rows().take(rows).enumerate() {
            self.line.clear();
            self.line.extend(&row[..cols]);
            self.writer.queue(cursor::MoveTo(0, y as u16))?;
            self.writer.queue(Print(&self.line))?;
        }

        if self.show_status && rows > 0 {
            self.writer.queue(cursor::MoveTo(0, (rows - 1) as u16))?;
            self.writer.queue(SetForegroundColor(Color::Green))?;
            self.writer.queue(Print(status_line(viewer_distance, cols)))?;
            self.writer.queue(ResetColor)?;
        }

        self.writer.flush()
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, grid: Grid, state: &RenderState) -> anyhow::Result<()> {
        self.draw(&grid, state.viewer_distance())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire3d_core::ScreenPoint;

    fn printed(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_status_line_format() {
        assert_eq!(
            status_line(35.0, 40),
            "Zoom Level (Viewer Distance): 35.0      "
        );
        assert_eq!(status_line(1.25, 10), "Zoom Level");
        assert_eq!(status_line(100.0, 0), "");
    }

    #[test]
    fn test_draws_rows_and_status() {
        let mut grid = Grid::new(40, 3, ' ');
        wire3d_core::draw_line(&mut grid, ScreenPoint::new(0, 0), ScreenPoint::new(5, 0), '*');

        let mut sink = TerminalSink::new(Vec::new(), (80, 24), true);
        sink.present(grid, &RenderState::default()).unwrap();
        let out = printed(sink.writer());

        assert!(out.contains("******"));
        assert!(out.contains("Zoom Level (Viewer Distance): 35.0"));
        // Cursor is positioned for each row (1-based in ANSI).
        assert!(out.contains("\x1b[1;1H"));
        assert!(out.contains("\x1b[3;1H"));
    }

    #[test]
    fn test_clips_to_viewport() {
        let grid = Grid::new(10, 10, '.');
        let mut sink = TerminalSink::new(Vec::new(), (4, 2), false);
        sink.draw(&grid, 35.0).unwrap();
        let out = printed(sink.writer());

        assert!(out.contains("...."));
        assert!(!out.contains("....."));
        assert!(!out.contains("\x1b[3;1H"));
    }

    #[test]
    fn test_status_can_be_hidden() {
        let grid = Grid::new(40, 3, ' ');
        let mut sink = TerminalSink::new(Vec::new(), (80, 24), false);
        sink.draw(&grid, 35.0).unwrap();
        assert!(!printed(sink.writer()).contains("Zoom Level"));
    }
}
