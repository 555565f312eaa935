//! Full-frame drawing.
//!
//! Each frame is a full repaint: rain glyphs first so the output log and
//! prompt overprint them, then the visible window of the log, then the
//! prompt line with a block cursor. Styled lines map onto the classic
//! green-on-black palette; command links are underlined so they read as
//! clickable.

use std::io::Write;

use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor::MoveTo, queue};
use folio_terminal::Session;
use folio_types::{Result, Style};

use crate::sink::TuiSink;

/// Window of the output log shown in a viewport, as a half-open range.
///
/// `scroll` counts lines up from the bottom; the newest visible line is
/// `len - scroll`.
pub fn visible_range(len: usize, viewport: u16, scroll: usize) -> (usize, usize) {
    let end = len.saturating_sub(scroll);
    let start = end.saturating_sub(viewport as usize);
    (start, end)
}

fn style_color(style: Style) -> Color {
    match style {
        Style::Plain => Color::Green,
        Style::Success => Color::Cyan,
        Style::Error => Color::Red,
        Style::History => Color::DarkGrey,
        Style::Heading => Color::Yellow,
    }
}

pub fn draw(out: &mut impl Write, session: &mut Session<TuiSink>) -> Result<()> {
    let (cols, rows) = session.sink().size();
    let viewport = session.sink().viewport_rows();
    let scroll = session.sink().scroll();

    // Sample the rain cells up front; the effect's RNG needs &mut while the
    // output log below borrows the session immutably.
    let rain_cells: Vec<(u16, u16, char)> = match session.sink_mut().rain_mut() {
        Some(effect) => {
            let grid_rows = effect.rows();
            let heads: Vec<u32> = effect.columns().to_vec();
            heads
                .iter()
                .enumerate()
                .filter(|(_, head)| **head >= 1 && **head <= grid_rows)
                .map(|(x, head)| (x as u16, (*head - 1) as u16, effect.glyph()))
                .collect()
        },
        None => Vec::new(),
    };

    queue!(out, Clear(ClearType::All))?;

    queue!(out, SetForegroundColor(Color::DarkGreen))?;
    for (x, y, glyph) in rain_cells {
        queue!(out, MoveTo(x, y), Print(glyph))?;
    }

    let output = session.output();
    let (start, end) = visible_range(output.len(), viewport, scroll);
    for (row, line) in output[start..end].iter().enumerate() {
        queue!(
            out,
            MoveTo(0, row as u16),
            SetForegroundColor(style_color(line.style))
        )?;
        if line.command_link().is_some() {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        let shown: String = line.text.chars().take(cols as usize).collect();
        queue!(out, Print(shown), SetAttribute(Attribute::Reset))?;
    }

    let prompt = format!("{}:~$ {}_", session.prompt_user(), session.input());
    let shown: String = prompt.chars().take(cols as usize).collect();
    queue!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        SetForegroundColor(Color::Green),
        Print(shown)
    )?;

    out.flush()?;
    Ok(())
}
