//! Command trait, registry, and dispatch logic.
//!
//! Commands are registered by name once at construction and are immutable
//! afterwards. Dispatch is an exact, case-sensitive match on the first
//! whitespace-delimited token of the input line; there is no quoting,
//! aliasing, or fuzzy matching.

use std::collections::HashMap;

use folio_types::error::{FolioError, Result};
use folio_types::{Content, OutputLine};

/// Output produced by a command.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Styled lines to append to the output log.
    Lines(Vec<OutputLine>),
    /// Signal to empty the output log and replay the banner.
    Clear,
    /// Signal to the rendering surface to toggle the rain effect.
    RainToggle,
    /// Signal to the rendering surface to fetch the resume asset.
    Download {
        /// Path or URL of the asset.
        path: String,
    },
}

/// Wall-clock source for the `date` command.
///
/// Kept behind a trait so the engine stays deterministic under test.
pub trait Clock {
    /// The current local date and time, already formatted for display.
    fn now(&self) -> String;
}

/// Read-only environment passed to every command.
pub struct Context<'a> {
    /// The resume content payload.
    pub content: &'a Content,
    /// Wall clock, if the host provides one.
    pub clock: Option<&'a dyn Clock>,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. `view <project name>`).
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and context.
    fn execute(&self, args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput>;
}

/// Commands resolved inside the registry itself because they need access
/// to the full command table: (name, description).
const INTERCEPTED: [(&str, &str); 2] = [
    ("help", "Show this help message"),
    ("ls", "List all available commands"),
];

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Dispatch a parsed command.
    ///
    /// `name` must be the first whitespace-delimited token of the input
    /// line. Unknown names produce [`FolioError::UnknownCommand`]; the
    /// caller renders that as a single error line.
    pub fn execute(&self, name: &str, args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        match name {
            "help" => return Ok(self.execute_help()),
            "ls" => return Ok(self.execute_ls()),
            _ => {},
        }

        match self.commands.get(name) {
            Some(cmd) => {
                log::debug!("dispatch: {name} ({} args)", args.len());
                cmd.execute(args, ctx)
            },
            None => Err(FolioError::UnknownCommand(name.to_string())),
        }
    }

    /// All command names, sorted, including the intercepted built-ins.
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.extend(INTERCEPTED.iter().map(|(n, _)| (*n).to_string()));
        names.sort();
        names
    }

    /// Sorted `(name, description)` pairs, including intercepted built-ins.
    pub fn list_commands(&self) -> Vec<(String, String)> {
        let mut cmds: Vec<(String, String)> = self
            .commands
            .values()
            .map(|c| (c.name().to_string(), c.description().to_string()))
            .collect();
        cmds.extend(
            INTERCEPTED
                .iter()
                .map(|(n, d)| ((*n).to_string(), (*d).to_string())),
        );
        cmds.sort_by(|a, b| a.0.cmp(&b.0));
        cmds
    }

    /// Command names starting with `prefix`, sorted for stable display.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.command_names()
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .collect()
    }

    /// Built-in `help`: one clickable link line per command, plus tips.
    fn execute_help(&self) -> CommandOutput {
        let mut lines = vec![OutputLine::success("Available commands:")];
        for (name, desc) in self.list_commands() {
            lines.push(OutputLine::link(&name, &desc));
        }
        lines.push(OutputLine::plain(""));
        lines.push(OutputLine::success("Pro tips:"));
        lines.push(OutputLine::plain("- Click on any command to execute it"));
        lines.push(OutputLine::plain("- Use Tab for command autocompletion"));
        lines.push(OutputLine::plain(
            "- Use Up/Down arrows to navigate command history",
        ));
        CommandOutput::Lines(lines)
    }

    /// Built-in `ls`: bare sorted command names.
    fn execute_ls(&self) -> CommandOutput {
        let mut lines = vec![OutputLine::success("Available commands:")];
        for name in self.command_names() {
            lines.push(OutputLine::plain(name));
        }
        CommandOutput::Lines(lines)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a raw input line into `(command name, arguments)`.
///
/// Splitting is on whitespace; the name is the first token, or the empty
/// string for blank input (in which case dispatch must be skipped).
pub fn split_line(input: &str) -> (&str, Vec<&str>) {
    let mut tokens = input.split_whitespace();
    let name = tokens.next().unwrap_or("");
    (name, tokens.collect())
}
