//! System commands: identity, clock, clear, resume download, rain toggle.
//!
//! The signal commands (`clear`, `matrix`, `resume`) do no work themselves;
//! they return a [`CommandOutput`] variant the session resolves against its
//! output log and sink.

use folio_types::OutputLine;
use folio_types::error::{FolioError, Result};

use crate::content_commands::{
    AboutCmd, AchievementsCmd, CertificationsCmd, ContactCmd, CvCmd, EducationCmd, ExperienceCmd,
    LanguagesCmd, ProjectsCmd, SkillsCmd, SocialCmd, ViewCmd,
};
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Context};

/// `whoami` -- prompt identity and a pointer at `help`.
pub struct WhoamiCmd;

impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Display current user information"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Lines(vec![
            OutputLine::plain(&ctx.content.profile.user),
            OutputLine::plain("Welcome to my interactive portfolio!"),
            OutputLine::plain("Type \"help\" to see available commands."),
        ]))
    }
}

/// `date` -- current date and time from the host clock.
pub struct DateCmd;

impl Command for DateCmd {
    fn name(&self) -> &str {
        "date"
    }
    fn description(&self) -> &str {
        "Show current date and time"
    }
    fn usage(&self) -> &str {
        "date"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        match ctx.clock {
            Some(clock) => Ok(CommandOutput::Lines(vec![OutputLine::plain(clock.now())])),
            None => Err(FolioError::Command("no clock available".to_string())),
        }
    }
}

/// `clear` -- signal to empty the output log and replay the banner.
pub struct ClearCmd;

impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _ctx: &Context<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

/// `matrix` -- signal to toggle the rain effect on the rendering surface.
pub struct MatrixCmd;

impl Command for MatrixCmd {
    fn name(&self) -> &str {
        "matrix"
    }
    fn description(&self) -> &str {
        "Toggle matrix rain effect"
    }
    fn usage(&self) -> &str {
        "matrix"
    }
    fn execute(&self, _args: &[&str], _ctx: &Context<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::RainToggle)
    }
}

/// `resume` -- signal to fetch the resume asset.
pub struct ResumeCmd;

impl Command for ResumeCmd {
    fn name(&self) -> &str {
        "resume"
    }
    fn description(&self) -> &str {
        "Download my resume"
    }
    fn usage(&self) -> &str {
        "resume"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Download {
            path: ctx.content.profile.resume_path.clone(),
        })
    }
}

/// Register the full built-in command set into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    // Content commands.
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(SkillsCmd));
    reg.register(Box::new(ExperienceCmd));
    reg.register(Box::new(EducationCmd));
    reg.register(Box::new(ProjectsCmd));
    reg.register(Box::new(ViewCmd));
    reg.register(Box::new(ContactCmd));
    reg.register(Box::new(AchievementsCmd));
    reg.register(Box::new(CertificationsCmd));
    reg.register(Box::new(LanguagesCmd));
    reg.register(Box::new(SocialCmd));
    reg.register(Box::new(CvCmd));
    // System commands.
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(MatrixCmd));
    reg.register(Box::new(ResumeCmd));
}
