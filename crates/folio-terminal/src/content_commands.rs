//! Commands that print sections of the resume content payload.
//!
//! Every command here is a pure read over [`folio_types::Content`]: it
//! formats lines and never mutates anything. Section headers are tagged
//! `Success`, body text `Plain`.

use folio_types::OutputLine;
use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, Context};

/// `about` -- free-text introduction paragraphs.
pub struct AboutCmd;

impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Learn about me"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let lines = ctx
            .content
            .profile
            .about
            .iter()
            .map(OutputLine::plain)
            .collect();
        Ok(CommandOutput::Lines(lines))
    }
}

/// `skills` -- skill groups with comma-joined items.
pub struct SkillsCmd;

impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Show my technical skills"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = Vec::new();
        for group in &ctx.content.skills {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::success(format!("{}:", group.name)));
            lines.push(OutputLine::plain(group.items.join(", ")));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `experience` -- one block per job.
pub struct ExperienceCmd;

impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Show my work experience"
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = Vec::new();
        for job in &ctx.content.experience {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::success(format!(
                "{} at {}",
                job.role, job.company
            )));
            lines.push(OutputLine::plain(format!("Location: {}", job.location)));
            lines.push(OutputLine::plain(format!("Period: {}", job.period)));
            lines.push(OutputLine::plain("Key Responsibilities:"));
            for resp in &job.responsibilities {
                lines.push(OutputLine::plain(format!("- {resp}")));
            }
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `education` -- one block per degree.
pub struct EducationCmd;

impl Command for EducationCmd {
    fn name(&self) -> &str {
        "education"
    }
    fn description(&self) -> &str {
        "View my educational background"
    }
    fn usage(&self) -> &str {
        "education"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = Vec::new();
        for school in &ctx.content.education {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::success(&school.degree));
            lines.push(OutputLine::plain(format!(
                "Institution: {}, {}",
                school.institution, school.location
            )));
            lines.push(OutputLine::plain(format!("Period: {}", school.period)));
            lines.push(OutputLine::plain("Achievements:"));
            for item in &school.achievements {
                lines.push(OutputLine::plain(format!("- {item}")));
            }
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `projects` -- the featured project list.
pub struct ProjectsCmd;

impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "List my projects"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = vec![OutputLine::success("Featured Projects:")];
        for project in &ctx.content.projects {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::success(&project.name));
            lines.push(OutputLine::plain(format!(
                "Technologies: {}",
                project.tech
            )));
            lines.push(OutputLine::plain(format!(
                "Description: {}",
                project.description
            )));
            lines.push(OutputLine::plain("Features:"));
            for feature in &project.features {
                lines.push(OutputLine::plain(format!("- {feature}")));
            }
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `view <name>` -- deep dive into a single project.
///
/// The argument is free text: tokens are re-joined with single spaces and
/// matched exactly against project names. Missing or unknown names are
/// recovered locally with a guidance line, never an error return.
pub struct ViewCmd;

impl Command for ViewCmd {
    fn name(&self) -> &str {
        "view"
    }
    fn description(&self) -> &str {
        "View details of a project"
    }
    fn usage(&self) -> &str {
        "view <project name>"
    }
    fn execute(&self, args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        if args.is_empty() {
            return Ok(CommandOutput::Lines(vec![OutputLine::error(
                "Please specify a project name. Usage: view <project name>",
            )]));
        }

        let name = args.join(" ");
        let Some(project) = ctx.content.project(&name) else {
            return Ok(CommandOutput::Lines(vec![
                OutputLine::error(format!("Project not found: {name}")),
                OutputLine::plain("Use \"projects\" command to see available projects."),
            ]));
        };

        let mut lines = vec![
            OutputLine::plain(""),
            OutputLine::success(format!("Project: {}", project.name)),
            OutputLine::plain(""),
            OutputLine::plain("Description:"),
            OutputLine::plain(&project.description),
            OutputLine::plain(""),
            OutputLine::plain("Features:"),
        ];
        for feature in &project.features {
            lines.push(OutputLine::plain(format!("- {feature}")));
        }

        if let Some(detail) = &project.detail {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::plain("Technologies:"));
            for tech in &detail.technologies {
                lines.push(OutputLine::plain(format!("- {tech}")));
            }
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::plain("Architecture:"));
            for item in &detail.architecture {
                lines.push(OutputLine::plain(format!("- {item}")));
            }
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::plain("Links:"));
            lines.push(OutputLine::plain(format!("GitHub: {}", detail.github)));
            lines.push(OutputLine::plain(format!("Demo: {}", detail.demo)));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `contact` -- contact lines from the profile.
pub struct ContactCmd;

impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Get my contact information"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = vec![OutputLine::success("Contact Information:")];
        for entry in &ctx.content.profile.contact {
            lines.push(OutputLine::plain(entry));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `achievements` -- flat award list.
pub struct AchievementsCmd;

impl Command for AchievementsCmd {
    fn name(&self) -> &str {
        "achievements"
    }
    fn description(&self) -> &str {
        "View my achievements and awards"
    }
    fn usage(&self) -> &str {
        "achievements"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = vec![OutputLine::success("Achievements & Awards:")];
        for item in &ctx.content.achievements {
            lines.push(OutputLine::plain(format!("- {item}")));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `certifications` -- name/issuer pairs.
pub struct CertificationsCmd;

impl Command for CertificationsCmd {
    fn name(&self) -> &str {
        "certifications"
    }
    fn description(&self) -> &str {
        "List my professional certifications"
    }
    fn usage(&self) -> &str {
        "certifications"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = vec![OutputLine::success("Professional Certifications:")];
        for cert in &ctx.content.certifications {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::plain(&cert.name));
            lines.push(OutputLine::plain(format!("Issuer: {}", cert.issuer)));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `languages` -- programming languages grouped by proficiency.
pub struct LanguagesCmd;

impl Command for LanguagesCmd {
    fn name(&self) -> &str {
        "languages"
    }
    fn description(&self) -> &str {
        "List programming languages I know"
    }
    fn usage(&self) -> &str {
        "languages"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = vec![OutputLine::success("Programming Languages:")];
        for tier in &ctx.content.languages {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::plain(format!("{}:", tier.level)));
            lines.push(OutputLine::plain(tier.items.join(", ")));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `social` -- platform / URL / blurb triples.
pub struct SocialCmd;

impl Command for SocialCmd {
    fn name(&self) -> &str {
        "social"
    }
    fn description(&self) -> &str {
        "Display my social media links"
    }
    fn usage(&self) -> &str {
        "social"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let mut lines = vec![OutputLine::success("Social Media Links:")];
        for link in &ctx.content.social {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::plain(format!("{}:", link.platform)));
            lines.push(OutputLine::plain(format!("URL: {}", link.url)));
            lines.push(OutputLine::plain(format!(
                "Description: {}",
                link.description
            )));
        }
        Ok(CommandOutput::Lines(lines))
    }
}

/// `cv` -- the condensed full CV.
pub struct CvCmd;

impl Command for CvCmd {
    fn name(&self) -> &str {
        "cv"
    }
    fn description(&self) -> &str {
        "Display my full CV"
    }
    fn usage(&self) -> &str {
        "cv"
    }
    fn execute(&self, _args: &[&str], ctx: &Context<'_>) -> Result<CommandOutput> {
        let cv = &ctx.content.cv;
        let mut lines = vec![
            OutputLine::heading("CURRICULUM VITAE"),
            OutputLine::plain(""),
            OutputLine::success("Professional Summary"),
        ];
        for item in &cv.summary {
            lines.push(OutputLine::plain(format!("- {item}")));
        }

        lines.push(OutputLine::plain(""));
        lines.push(OutputLine::success("Technical Skills"));
        for group in &cv.skills {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::plain(format!("{}:", group.name)));
            lines.push(OutputLine::plain(group.items.join(", ")));
        }

        lines.push(OutputLine::plain(""));
        lines.push(OutputLine::success("Professional Experience"));
        for job in &cv.experience {
            lines.push(OutputLine::plain(""));
            lines.push(OutputLine::plain(&job.role));
            lines.push(OutputLine::plain(format!(
                "{} ({})",
                job.company, job.period
            )));
            for highlight in &job.highlights {
                lines.push(OutputLine::plain(format!("- {highlight}")));
            }
        }

        lines.push(OutputLine::plain(""));
        lines.push(OutputLine::success("Certifications"));
        for cert in &cv.certifications {
            lines.push(OutputLine::plain(format!("- {cert}")));
        }
        Ok(CommandOutput::Lines(lines))
    }
}
