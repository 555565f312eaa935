//! Command terminal engine for FOLIO.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name; a `Session` owns the input
//! buffer, command history, and output log, and resolves keystroke-level
//! actions (submit, history navigation, tab completion) against the
//! registry. Rendering is behind the `OutputSink` trait so the engine runs
//! headless under test.

mod content_commands;
mod interpreter;
mod session;
mod system_commands;

pub use content_commands::{
    AboutCmd, AchievementsCmd, CertificationsCmd, ContactCmd, CvCmd, EducationCmd, ExperienceCmd,
    LanguagesCmd, ProjectsCmd, SkillsCmd, SocialCmd, ViewCmd,
};
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (lines or a surface signal).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only environment passed to every command.
pub use interpreter::Context;
/// Wall-clock source for the `date` command.
pub use interpreter::Clock;
/// Split a raw input line into a command name and arguments.
pub use interpreter::split_line;
/// Rendering-surface callbacks (scroll, rain toggle, download).
pub use session::OutputSink;
/// The command terminal engine state machine.
pub use session::Session;
/// Register the full built-in command set into a registry.
pub use system_commands::register_builtins;
pub use system_commands::{ClearCmd, DateCmd, MatrixCmd, ResumeCmd, WhoamiCmd};
