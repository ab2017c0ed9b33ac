//! Static portfolio content.
//!
//! The page text is configuration data: a TOML document compiled into the
//! binary (`resources/portfolio.toml`) that can be replaced at startup with
//! `--content PATH`. Nothing here changes at runtime.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::settings::project_config_dir;
use crate::errors::{AppError, Result};

const DEFAULT_CONTENT: &str = include_str!("../../resources/portfolio.toml");

/// Invariant violations found while loading content.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("project `{0}` has no technology tags")]
    EmptyTags(String),
    #[error("skill category `{0}` lists no skills")]
    EmptySkillCategory(String),
    #[error("profile name must not be empty")]
    MissingName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub opportunities: Opportunities,
    #[serde(default)]
    pub contact: Vec<ContactLink>,
    #[serde(default)]
    pub socials: Socials,
    /// Directory relative resource paths (the resume) resolve against: the
    /// content file's directory, or the config dir for built-in content.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub about: String,
    /// URL or file path of the downloadable resume. Relative paths resolve
    /// against [`Portfolio::base_dir`].
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organisation: String,
    #[serde(default)]
    pub kind: Option<String>,
    pub period: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Opportunities {
    #[serde(default)]
    pub open_to: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// A line of the "Get In Touch" block. Entries without `href` are plain text.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Socials {
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Portfolio {
    /// Parse and validate a TOML content document.
    pub fn from_toml(s: &str, origin: &Path) -> Result<Self> {
        let p: Portfolio = toml::from_str(s).map_err(|source| AppError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        p.validate()?;
        Ok(p)
    }

    /// The built-in content shipped with the binary.
    pub fn builtin() -> Result<Self> {
        let mut p = Self::from_toml(DEFAULT_CONTENT, Path::new("<builtin>"))?;
        p.base_dir = project_config_dir();
        Ok(p)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path)?;
        let mut p = Self::from_toml(&body, path)?;
        p.base_dir = Some(match path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d.to_path_buf(),
            _ => PathBuf::from("."),
        });
        Ok(p)
    }

    pub fn validate(&self) -> std::result::Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::MissingName);
        }
        if let Some(p) = self.projects.iter().find(|p| p.tags.is_empty()) {
            return Err(ContentError::EmptyTags(p.title.trim().to_string()));
        }
        if let Some(c) = self.skills.iter().find(|c| c.skills.is_empty()) {
            return Err(ContentError::EmptySkillCategory(c.title.clone()));
        }
        Ok(())
    }

    /// Initials for the logo badge, derived from the name when not given.
    pub fn initials(&self) -> String {
        if !self.profile.initials.is_empty() {
            return self.profile.initials.clone();
        }
        self.profile
            .name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let p = Portfolio::builtin().unwrap();
        assert!(!p.profile.name.is_empty());
        assert!(!p.projects.is_empty());
        assert!(p.projects.iter().all(|p| !p.tags.is_empty()));
        assert!(p.projects.iter().any(|p| p.featured));
    }

    #[test]
    fn project_without_tags_is_rejected() {
        let doc = r#"
            [profile]
            name = "Ada"

            [[projects]]
            title = "engine"
            description = "difference engine"
            tags = []
        "#;
        let err = Portfolio::from_toml(doc, Path::new("test.toml")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Content(ContentError::EmptyTags(ref t)) if t == "engine"
        ));
    }

    #[test]
    fn initials_fall_back_to_name() {
        let doc = "[profile]\nname = \"ada king lovelace\"\n";
        let p = Portfolio::from_toml(doc, Path::new("t.toml")).unwrap();
        assert_eq!(p.initials(), "AKL");
    }

    #[test]
    fn empty_name_is_rejected() {
        let doc = "[profile]\nname = \"  \"\n";
        assert!(Portfolio::from_toml(doc, Path::new("t.toml")).is_err());
    }

    #[test]
    fn base_dir_follows_content_origin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.toml");
        fs::write(&path, "[profile]\nname = \"Ada\"\nresume = \"cv.pdf\"\n").unwrap();
        let p = Portfolio::load(&path).unwrap();
        assert_eq!(p.base_dir.as_deref(), Some(dir.path()));

        assert_eq!(Portfolio::builtin().unwrap().base_dir, project_config_dir());
    }
}
