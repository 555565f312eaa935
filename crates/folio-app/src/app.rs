//! Frame loop and input dispatch.
//!
//! The loop polls for one event per frame (roughly 30 fps), advances the
//! rain effect once per frame while it is attached, and repaints only when
//! the sink is dirty. Keyboard input maps onto engine operations; a left
//! click on a visible command link dispatches that command.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio_terminal::Session;
use folio_types::Result;

use crate::render::{self, visible_range};
use crate::sink::TuiSink;

const FRAME: Duration = Duration::from_millis(33);

/// Run the session against the terminal until the user quits.
pub fn run(session: &mut Session<TuiSink>) -> Result<()> {
    let mut stdout = io::stdout();
    loop {
        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if handle_key(session, key) {
                        return Ok(());
                    }
                },
                Event::Mouse(mouse) => handle_mouse(session, mouse),
                Event::Resize(cols, rows) => session.sink_mut().resize(cols, rows),
                _ => {},
            }
        }

        if session.sink().rain_attached() {
            session.sink_mut().tick_rain();
            session.sink_mut().mark_dirty();
        }
        if session.sink().is_dirty() {
            render::draw(&mut stdout, session)?;
            session.sink_mut().clear_dirty();
        }
    }
}

/// Apply one key event. Returns `true` when the user asked to quit.
fn handle_key(session: &mut Session<TuiSink>, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'));
    }

    let page = i32::from(session.sink().viewport_rows().saturating_sub(1).max(1));
    let len = session.output().len();
    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Enter => session.submit(),
        KeyCode::Up => session.history_up(),
        KeyCode::Down => session.history_down(),
        KeyCode::Tab => session.autocomplete(),
        KeyCode::Backspace => session.backspace(),
        KeyCode::PageUp => session.sink_mut().scroll_by(page, len),
        KeyCode::PageDown => session.sink_mut().scroll_by(-page, len),
        KeyCode::Char(c) => session.insert_char(c),
        _ => return false,
    }
    session.sink_mut().mark_dirty();
    false
}

fn handle_mouse(session: &mut Session<TuiSink>, mouse: MouseEvent) {
    let len = session.output().len();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let viewport = session.sink().viewport_rows();
            if mouse.row >= viewport {
                return;
            }
            let (start, end) = visible_range(len, viewport, session.sink().scroll());
            let index = start + mouse.row as usize;
            if index < end {
                session.activate_line(index);
            }
        },
        MouseEventKind::ScrollUp => session.sink_mut().scroll_by(1, len),
        MouseEventKind::ScrollDown => session.sink_mut().scroll_by(-1, len),
        _ => {},
    }
}
