//! Terminal portfolio entry point.
//!
//! Loads the content payload (embedded by default, `--content` to override),
//! builds the command registry and session, and runs the crossterm frame
//! loop on the alternate screen with raw mode and mouse capture. Ctrl-C,
//! Ctrl-D, or Escape quits; the screen is restored on the way out even when
//! the loop fails.

mod app;
mod cli_args;
mod clock;
mod render;
mod sink;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use folio_terminal::{CommandRegistry, Session, register_builtins};
use folio_types::{Content, Result};

use crate::cli_args::Args;
use crate::clock::SystemClock;
use crate::sink::TuiSink;

const DEFAULT_CONTENT: &str = include_str!("../content/default.toml");

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("folio: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let content = load_content(args)?;
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);

    let (cols, rows) = terminal::size()?;
    let mut session = Session::new(
        registry,
        content,
        Some(Box::new(SystemClock)),
        TuiSink::new(cols, rows),
    );

    enter_terminal()?;
    let result = app::run(&mut session);
    // Restore the screen before surfacing any loop error.
    let restored = leave_terminal();
    result.and(restored)
}

fn load_content(args: &Args) -> Result<Content> {
    match &args.content {
        Some(path) => {
            log::info!("loading content payload from {}", path.display());
            let raw = std::fs::read_to_string(path)?;
            Content::from_toml(&raw)
        },
        None => Content::from_toml(DEFAULT_CONTENT),
    }
}

fn enter_terminal() -> Result<()> {
    terminal::enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )?;
    Ok(())
}

fn leave_terminal() -> Result<()> {
    execute!(
        io::stdout(),
        cursor::Show,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = Content::from_toml(DEFAULT_CONTENT).unwrap();
        assert!(!content.profile.user.is_empty());
        assert!(!content.banner.art.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.cv.experience.is_empty());
    }

    #[test]
    fn embedded_detail_projects_resolve_by_exact_name() {
        let content = Content::from_toml(DEFAULT_CONTENT).unwrap();
        let with_detail: Vec<_> = content
            .projects
            .iter()
            .filter(|p| p.detail.is_some())
            .collect();
        assert!(!with_detail.is_empty());
        for project in with_detail {
            assert!(content.project(&project.name).is_some());
        }
    }
}
