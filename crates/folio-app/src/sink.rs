//! Rendering sink for the crossterm surface.
//!
//! [`TuiSink`] is the engine's view of the screen: it owns the rain surface,
//! the scroll position, and a dirty flag the frame loop uses to skip redraws
//! when nothing changed. The bottom row is reserved for the prompt; the rain
//! grid and the output viewport share the rows above it.

use folio_rain::{RainEffect, RainSurface};
use folio_terminal::OutputSink;
use folio_types::OutputLine;

pub struct TuiSink {
    rain: RainSurface,
    cols: u16,
    rows: u16,
    dirty: bool,
    /// Lines scrolled up from the bottom of the output log.
    scroll: usize,
}

impl TuiSink {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            rain: RainSurface::new(),
            cols,
            rows,
            dirty: true,
            scroll: 0,
        }
    }

    /// Full terminal size, columns then rows.
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Rows available to the output log; the last row holds the prompt.
    pub fn viewport_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.rain.resize(cols, self.viewport_rows());
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn rain_attached(&self) -> bool {
        self.rain.is_attached()
    }

    pub fn tick_rain(&mut self) {
        self.rain.tick();
    }

    pub fn rain_mut(&mut self) -> Option<&mut RainEffect> {
        self.rain.effect_mut()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll up (positive) or down (negative), clamped to the log.
    pub fn scroll_by(&mut self, delta: i32, output_len: usize) {
        let max = output_len.saturating_sub(self.viewport_rows() as usize);
        let next = self.scroll as i64 + i64::from(delta);
        self.scroll = next.clamp(0, max as i64) as usize;
        self.dirty = true;
    }
}

impl OutputSink for TuiSink {
    fn line_appended(&mut self, _line: &OutputLine) {
        // New output snaps the view back to the bottom.
        self.scroll = 0;
        self.dirty = true;
    }

    fn cleared(&mut self) {
        self.scroll = 0;
        self.dirty = true;
    }

    fn toggle_rain(&mut self) -> bool {
        self.dirty = true;
        self.rain.toggle(self.cols, self.viewport_rows())
    }

    fn download(&mut self, path: &str) {
        // No browser tab to open here; record the request instead.
        log::info!("resume download requested: {path}");
    }
}
