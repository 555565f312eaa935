//! Interactive terminal session.
//!
//! [`Session`] owns the four pieces of engine state: the input buffer, the
//! append-only command history with its navigation cursor, the command
//! registry, and the append-only output log. Rendering-surface side effects
//! (auto-scroll, the rain effect, the resume download) go through the
//! [`OutputSink`] trait so the engine is unit-testable without a screen.

use folio_types::error::FolioError;
use folio_types::{Content, OutputLine};

use crate::interpreter::{Clock, CommandOutput, CommandRegistry, Context, split_line};

/// Rendering-surface callbacks.
///
/// The sink owns the effect-toggle state; the session never tracks whether
/// the rain effect is attached.
pub trait OutputSink {
    /// A line was appended to the output log. The surface should scroll
    /// to the bottom so the newest line is visible.
    fn line_appended(&mut self, line: &OutputLine);

    /// The output log was emptied (the banner replay follows as appends).
    fn cleared(&mut self);

    /// Toggle the rain effect. Returns `true` if it is now attached.
    fn toggle_rain(&mut self) -> bool;

    /// Fetch the resume asset (the original opened it in a browser tab).
    fn download(&mut self, path: &str);
}

/// Banner welcome line replayed by `clear`.
const CLEARED_WELCOME: &str = "Terminal cleared. Type 'help' to see available commands.";

/// The command terminal engine.
pub struct Session<S: OutputSink> {
    registry: CommandRegistry,
    content: Content,
    clock: Option<Box<dyn Clock>>,
    sink: S,
    input: String,
    history: Vec<String>,
    /// Offset into `history` from the most recent entry; -1 = fresh line.
    cursor: i32,
    output: Vec<OutputLine>,
}

impl<S: OutputSink> Session<S> {
    /// Create a session and print the startup banner.
    pub fn new(
        registry: CommandRegistry,
        content: Content,
        clock: Option<Box<dyn Clock>>,
        sink: S,
    ) -> Self {
        let mut session = Self {
            registry,
            content,
            clock,
            sink,
            input: String::new(),
            history: Vec::new(),
            cursor: -1,
            output: Vec::new(),
        };
        let welcome = session.content.banner.welcome.clone();
        session.push_banner(&welcome);
        session
    }

    // -- Input buffer --

    /// The current input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Append a typed character to the input buffer.
    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last character of the input buffer.
    pub fn backspace(&mut self) {
        self.input.pop();
    }

    // -- Submission --

    /// Submit the input buffer.
    ///
    /// Blank or whitespace-only input is ignored entirely: no history
    /// entry, no output. Otherwise the raw line is recorded in history,
    /// echoed to the output log, and dispatched; the buffer is cleared
    /// unconditionally, even when the command is unknown.
    pub fn submit(&mut self) {
        let raw = self.input.trim().to_string();
        if raw.is_empty() {
            return;
        }

        self.history.push(raw.clone());
        self.cursor = -1;
        self.input.clear();

        self.push_line(OutputLine::history(format!(
            "{}:~$ {raw}",
            self.content.profile.user
        )));

        let (name, args) = split_line(&raw);
        let result = {
            let ctx = Context {
                content: &self.content,
                clock: self.clock.as_deref(),
            };
            self.registry.execute(name, &args, &ctx)
        };

        match result {
            Ok(CommandOutput::Lines(lines)) => {
                for line in lines {
                    self.push_line(line);
                }
            },
            Ok(CommandOutput::Clear) => {
                self.output.clear();
                self.sink.cleared();
                self.push_banner(CLEARED_WELCOME);
            },
            Ok(CommandOutput::RainToggle) => {
                let attached = self.sink.toggle_rain();
                let msg = if attached {
                    "Matrix effect enabled"
                } else {
                    "Matrix effect disabled"
                };
                self.push_line(OutputLine::success(msg));
            },
            Ok(CommandOutput::Download { path }) => {
                self.push_line(OutputLine::plain("Initiating resume download..."));
                self.sink.download(&path);
                self.push_line(OutputLine::success("Resume download started!"));
            },
            Err(FolioError::UnknownCommand(name)) => {
                self.push_line(OutputLine::error(format!(
                    "Command not found: {name}. Type 'help' for available commands."
                )));
            },
            Err(e) => {
                self.push_line(OutputLine::error(e.to_string()));
            },
        }
    }

    // -- History navigation --

    /// Move one step toward older history and load it into the buffer.
    pub fn history_up(&mut self) {
        if self.cursor < self.history.len() as i32 - 1 {
            self.cursor += 1;
            self.load_history_entry();
        }
    }

    /// Move one step toward newer history; at the newest end, clear the
    /// buffer instead of indexing.
    pub fn history_down(&mut self) {
        if self.cursor >= 0 {
            self.cursor -= 1;
            if self.cursor == -1 {
                self.input.clear();
            } else {
                self.load_history_entry();
            }
        }
    }

    fn load_history_entry(&mut self) {
        let idx = self.history.len() - 1 - self.cursor as usize;
        self.input = self.history[idx].clone();
    }

    // -- Autocomplete --

    /// Complete the input buffer against registered command names.
    ///
    /// The entire buffer is the prefix. A unique match replaces the buffer;
    /// several matches are printed without touching the buffer; no match is
    /// a no-op. Re-triggering on a completed buffer is idempotent.
    pub fn autocomplete(&mut self) {
        let prefix = self.input.trim();
        if prefix.is_empty() {
            return;
        }

        let matches = self.registry.completions(prefix);
        match matches.as_slice() {
            [] => {},
            [only] => self.input = only.clone(),
            _ => {
                self.push_line(OutputLine::plain(""));
                self.push_line(OutputLine::plain("Available commands:"));
                for name in &matches {
                    self.push_line(OutputLine::plain(name.clone()));
                }
                self.push_line(OutputLine::plain(""));
            },
        }
    }

    // -- Output log --

    /// The output log, oldest first.
    pub fn output(&self) -> &[OutputLine] {
        &self.output
    }

    /// The submitted-line history, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Current history cursor (-1 = not browsing).
    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    /// The prompt identity, the `user@host` part of the prompt line.
    pub fn prompt_user(&self) -> &str {
        &self.content.profile.user
    }

    /// The rendering sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the rendering sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Activate an output line by index.
    ///
    /// If the line is a command link (`"  name - description"`), its name
    /// is loaded into the input buffer and dispatched immediately; any
    /// other line is inert.
    pub fn activate_line(&mut self, index: usize) {
        let Some(name) = self
            .output
            .get(index)
            .and_then(|line| line.command_link())
            .map(str::to_string)
        else {
            return;
        };
        self.input = name;
        self.submit();
    }

    fn push_line(&mut self, line: OutputLine) {
        self.sink.line_appended(&line);
        self.output.push(line);
    }

    fn push_banner(&mut self, welcome: &str) {
        for art in self.content.banner.art.clone() {
            self.push_line(OutputLine::heading(art));
        }
        self.push_line(OutputLine::success(welcome.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Style;

    use crate::system_commands::register_builtins;

    #[derive(Default)]
    struct RecordingSink {
        appended: usize,
        cleared: usize,
        rain_on: bool,
        rain_toggles: usize,
        downloads: Vec<String>,
    }

    impl OutputSink for RecordingSink {
        fn line_appended(&mut self, _line: &OutputLine) {
            self.appended += 1;
        }
        fn cleared(&mut self) {
            self.cleared += 1;
        }
        fn toggle_rain(&mut self) -> bool {
            self.rain_toggles += 1;
            self.rain_on = !self.rain_on;
            self.rain_on
        }
        fn download(&mut self, path: &str) {
            self.downloads.push(path.to_string());
        }
    }

    struct FixedClock;
    impl Clock for FixedClock {
        fn now(&self) -> String {
            "2024-01-01 00:00:00".to_string()
        }
    }

    fn test_content() -> Content {
        Content::from_toml(
            r#"
[profile]
name = "Jane Doe"
title = "Systems Engineer"
user = "visitor@folio"
about = ["Systems Engineer", "", "I build terminals."]
contact = ["Email: jane@example.com"]
resume_path = "/resume.pdf"

[banner]
art = ["FOLIO"]
welcome = "Type 'help' to see available commands."

[[skills]]
name = "Backend"
items = ["Rust"]

[[projects]]
name = "North Trip Cycle"
tech = "Rust, SQLite"
description = "Travel platform."
features = ["Bookings"]

[projects.detail]
technologies = ["Rust 1.80"]
architecture = ["Monolith"]
github = "https://github.com/janedoe/ntc"
demo = "https://ntc.example.com"
"#,
        )
        .unwrap()
    }

    fn session() -> Session<RecordingSink> {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg);
        Session::new(
            reg,
            test_content(),
            Some(Box::new(FixedClock)),
            RecordingSink::default(),
        )
    }

    fn type_and_submit(s: &mut Session<RecordingSink>, line: &str) {
        for c in line.chars() {
            s.insert_char(c);
        }
        s.submit();
    }

    #[test]
    fn startup_prints_banner() {
        let s = session();
        assert_eq!(s.output().len(), 2);
        assert_eq!(s.output()[0].text, "FOLIO");
        assert_eq!(s.output()[0].style, Style::Heading);
        assert_eq!(s.output()[1].text, "Type 'help' to see available commands.");
    }

    #[test]
    fn submit_appends_echo_then_handler_lines_and_one_history_entry() {
        let mut s = session();
        let base = s.output().len();
        type_and_submit(&mut s, "whoami");

        assert_eq!(s.history(), &["whoami".to_string()]);
        let echo = &s.output()[base];
        assert_eq!(echo.style, Style::History);
        assert_eq!(echo.text, "visitor@folio:~$ whoami");
        // whoami prints three lines.
        assert_eq!(s.output().len(), base + 4);
    }

    #[test]
    fn blank_submission_is_ignored_entirely() {
        let mut s = session();
        let base = s.output().len();
        s.submit();
        type_and_submit(&mut s, "   \t ");
        assert!(s.history().is_empty());
        assert_eq!(s.output().len(), base);
    }

    #[test]
    fn buffer_clears_even_on_unknown_command() {
        let mut s = session();
        type_and_submit(&mut s, "xyz123");
        assert_eq!(s.input(), "");
        assert_eq!(s.history(), &["xyz123".to_string()]);
    }

    #[test]
    fn unknown_command_emits_exactly_one_error_line_naming_the_token() {
        let mut s = session();
        let base = s.output().len();
        type_and_submit(&mut s, "xyz123");
        let new: Vec<_> = s.output()[base..].iter().collect();
        // Echo line plus one error line.
        assert_eq!(new.len(), 2);
        assert_eq!(new[1].style, Style::Error);
        assert!(new[1].text.contains("xyz123"));
        assert!(new[1].text.contains("help"));
    }

    #[test]
    fn history_navigation_round_trip_restores_empty_buffer() {
        let mut s = session();
        type_and_submit(&mut s, "whoami");
        type_and_submit(&mut s, "ls");
        type_and_submit(&mut s, "date");
        let snapshot: Vec<String> = s.history().to_vec();

        for _ in 0..3 {
            s.history_up();
        }
        for _ in 0..3 {
            s.history_down();
        }
        assert_eq!(s.input(), "");
        assert_eq!(s.cursor(), -1);
        assert_eq!(s.history(), snapshot.as_slice());
    }

    #[test]
    fn history_up_walks_from_newest_to_oldest() {
        let mut s = session();
        type_and_submit(&mut s, "whoami");
        type_and_submit(&mut s, "ls");
        s.history_up();
        assert_eq!(s.input(), "ls");
        s.history_up();
        assert_eq!(s.input(), "whoami");
    }

    #[test]
    fn history_up_clamps_at_oldest_entry() {
        let mut s = session();
        type_and_submit(&mut s, "whoami");
        for _ in 0..10 {
            s.history_up();
        }
        assert_eq!(s.cursor(), 0);
        assert_eq!(s.input(), "whoami");
    }

    #[test]
    fn history_down_on_fresh_line_is_a_no_op() {
        let mut s = session();
        type_and_submit(&mut s, "whoami");
        s.history_down();
        assert_eq!(s.cursor(), -1);
        assert_eq!(s.input(), "");
    }

    #[test]
    fn history_keeps_duplicate_submissions() {
        let mut s = session();
        type_and_submit(&mut s, "ls");
        type_and_submit(&mut s, "ls");
        assert_eq!(s.history(), &["ls".to_string(), "ls".to_string()]);
    }

    #[test]
    fn autocomplete_unique_match_replaces_buffer_idempotently() {
        let mut s = session();
        for c in "pro".chars() {
            s.insert_char(c);
        }
        s.autocomplete();
        assert_eq!(s.input(), "projects");
        let out_len = s.output().len();
        s.autocomplete();
        assert_eq!(s.input(), "projects");
        assert_eq!(s.output().len(), out_len);
    }

    #[test]
    fn autocomplete_multiple_matches_prints_candidates_and_keeps_buffer() {
        let mut s = session();
        s.insert_char('s');
        let base = s.output().len();
        s.autocomplete();
        assert_eq!(s.input(), "s");
        let texts: Vec<&str> = s.output()[base..].iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["", "Available commands:", "skills", "social", ""]);
    }

    #[test]
    fn autocomplete_no_match_is_invisible() {
        let mut s = session();
        s.insert_char('q');
        let base = s.output().len();
        s.autocomplete();
        assert_eq!(s.input(), "q");
        assert_eq!(s.output().len(), base);
    }

    #[test]
    fn autocomplete_empty_buffer_is_a_no_op() {
        let mut s = session();
        let base = s.output().len();
        s.autocomplete();
        assert_eq!(s.output().len(), base);
    }

    #[test]
    fn help_emits_a_link_line_per_command_in_sorted_order() {
        let mut s = session();
        type_and_submit(&mut s, "help");
        let links: Vec<&str> = s.output().iter().filter_map(|l| l.command_link()).collect();
        let mut sorted = links.clone();
        sorted.sort();
        assert_eq!(links, sorted);
        assert!(links.contains(&"about"));
        assert!(links.contains(&"help"));
        assert!(links.contains(&"matrix"));
        // One link per registered command, none repeated.
        assert_eq!(links.len(), 19);
    }

    #[test]
    fn clear_empties_log_and_replays_banner() {
        let mut s = session();
        type_and_submit(&mut s, "whoami");
        type_and_submit(&mut s, "clear");
        assert_eq!(s.sink().cleared, 1);
        assert_eq!(s.output().len(), 2);
        assert_eq!(s.output()[0].text, "FOLIO");
        assert!(s.output()[1].text.contains("Terminal cleared"));
        // History survives a clear.
        assert_eq!(s.history().len(), 2);
    }

    #[test]
    fn rain_toggle_reports_enabled_then_disabled() {
        let mut s = session();
        type_and_submit(&mut s, "matrix");
        assert!(s.output().last().unwrap().text.contains("enabled"));
        type_and_submit(&mut s, "matrix");
        assert!(s.output().last().unwrap().text.contains("disabled"));
        assert_eq!(s.sink().rain_toggles, 2);
        assert!(!s.sink().rain_on);
    }

    #[test]
    fn resume_download_goes_through_the_sink() {
        let mut s = session();
        type_and_submit(&mut s, "resume");
        assert_eq!(s.sink().downloads, vec!["/resume.pdf".to_string()]);
        assert!(s.output().last().unwrap().text.contains("started"));
    }

    #[test]
    fn date_prints_the_clock() {
        let mut s = session();
        type_and_submit(&mut s, "date");
        assert_eq!(s.output().last().unwrap().text, "2024-01-01 00:00:00");
    }

    #[test]
    fn activate_line_dispatches_command_links() {
        let mut s = session();
        type_and_submit(&mut s, "help");
        let idx = s
            .output()
            .iter()
            .position(|l| l.command_link() == Some("whoami"))
            .unwrap();
        s.activate_line(idx);
        assert_eq!(s.history().last().map(String::as_str), Some("whoami"));
        assert!(
            s.output()
                .iter()
                .any(|l| l.text == "visitor@folio:~$ whoami")
        );
    }

    #[test]
    fn activate_line_on_plain_text_is_inert() {
        let mut s = session();
        let history_len = s.history().len();
        s.activate_line(0);
        s.activate_line(999);
        assert_eq!(s.history().len(), history_len);
    }

    #[test]
    fn sink_sees_every_appended_line() {
        let mut s = session();
        let before = s.sink().appended;
        type_and_submit(&mut s, "whoami");
        assert_eq!(s.sink().appended - before, 4);
    }

    #[test]
    fn input_echo_uses_raw_submitted_line() {
        let mut s = session();
        type_and_submit(&mut s, "  view   North  ");
        assert!(
            s.output()
                .iter()
                .any(|l| l.text == "visitor@folio:~$ view   North")
        );
    }
}
