//! Portfolio content: projects and skills.
//!
//! Content is supplied by the caller at construction time (typically loaded
//! from JSON) and keeps the order it was given in.

use crate::{carousel::CarouselConfig, error::Result, showcase::Showcase, Error};
use serde::{Deserialize, Serialize};

/// Highest allowed skill level.
pub const MAX_SKILL_LEVEL: u8 = 100;

/// A project shown in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Image or GIF URL
    pub image: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: String,
}

/// A single skill with a proficiency percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Proficiency, `0..=100`
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// A named group of skills, e.g. "frontend".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    pub fn new(name: impl Into<String>, skills: Vec<Skill>) -> Self {
        Self {
            name: name.into(),
            skills,
        }
    }
}

/// Everything the portfolio page displays.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

impl Portfolio {
    pub fn new(projects: Vec<Project>, skills: Vec<SkillCategory>) -> Self {
        Self { projects, skills }
    }

    /// Check the content can back a carousel.
    pub fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(Error::InvalidArgument(
                "portfolio must contain at least one project".to_string(),
            ));
        }

        for category in &self.skills {
            for skill in &category.skills {
                if skill.level > MAX_SKILL_LEVEL {
                    return Err(Error::InvalidArgument(format!(
                        "skill '{}' in '{}' has level {}, maximum is {}",
                        skill.name, category.name, skill.level, MAX_SKILL_LEVEL
                    )));
                }
            }
        }

        Ok(())
    }

    /// Find a project by its id.
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Build a carousel showcase over the projects, in order.
    pub fn showcase(&self, config: CarouselConfig) -> Result<Showcase<&Project>> {
        Showcase::new(self.projects.iter().collect(), config)
    }
}
