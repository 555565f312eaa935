//! The resume content payload.
//!
//! Everything the content commands print lives here as plain data,
//! deserialized once from TOML at startup. The terminal engine treats the
//! payload as read-only; no command mutates it.

use serde::Deserialize;

use crate::error::Result;

/// Identity block shown by `about`, `whoami`, and `contact`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Job title / headline.
    pub title: String,
    /// Prompt user string, e.g. `visitor@folio`.
    pub user: String,
    /// Free-text paragraphs for `about`.
    #[serde(default)]
    pub about: Vec<String>,
    /// Contact lines (email, phone, links).
    #[serde(default)]
    pub contact: Vec<String>,
    /// Target of the `resume` download signal.
    pub resume_path: String,
}

/// Banner replayed on startup and after `clear`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Banner {
    /// ASCII-art lines drawn above the welcome text.
    #[serde(default)]
    pub art: Vec<String>,
    /// Welcome line shown on startup.
    pub welcome: String,
}

/// A named group of skills, e.g. "Backend Development".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One job for `experience`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Job {
    pub role: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// One degree for `education`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct School {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Extra detail shown by `view <name>`; absent for list-only projects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDetail {
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub architecture: Vec<String>,
    pub github: String,
    pub demo: String,
}

/// One project for `projects` and `view`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    pub name: String,
    pub tech: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Deep-dive payload for `view`; lookup is by exact project name.
    #[serde(default)]
    pub detail: Option<ProjectDetail>,
}

/// One certification entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

/// Programming languages grouped by proficiency.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageTier {
    pub level: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// One social media entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub description: String,
}

/// A condensed work entry for the `cv` command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CvJob {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// The full-CV payload printed by `cv`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cv {
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<CvJob>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// The complete read-only content payload fed to the command handlers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    pub profile: Profile,
    pub banner: Banner,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub education: Vec<School>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub languages: Vec<LanguageTier>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub cv: Cv,
}

impl Content {
    /// Parse a content payload from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let content: Content = toml::from_str(text)?;
        log::debug!(
            "loaded content payload: {} projects, {} jobs",
            content.projects.len(),
            content.experience.len()
        );
        Ok(content)
    }

    /// Look up a project by exact name (used by `view`).
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }
}
