use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Color scheme preference, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(anyhow::anyhow!(
                "unknown theme '{other}' (expected dark|light)"
            )),
        }
    }
}

/// One step of a workflow: what happens there and with which tools.
#[derive(Debug, Clone)]
pub struct StageDetail {
    pub description: &'static str,
    pub tools: Vec<&'static str>,
}

/// A named, ordered sequence of stages representing a security process blueprint.
///
/// Stage names are unique within a workflow. `details` may lack an entry for a
/// stage; the detail panel is simply omitted in that case.
#[derive(Debug, Clone)]
pub struct Workflow {
    pub name: &'static str,
    pub stages: Vec<&'static str>,
    pub details: HashMap<&'static str, StageDetail>,
}

impl Workflow {
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn detail(&self, stage: &str) -> Option<&StageDetail> {
        self.details.get(stage)
    }
}

#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: &'static str,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub title: &'static str,
    pub tenure: &'static str,
    pub highlights: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone)]
pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
}

/// The profile dossier: the tabbed Skills/Experience/Projects section plus the
/// surrounding hero and contact content.
#[derive(Debug, Clone)]
pub struct Dossier {
    pub name: &'static str,
    pub title: &'static str,
    pub specializations: Vec<&'static str>,
    pub about: &'static str,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Job>,
    pub projects: Vec<Project>,
    pub contact: Contact,
}

/// Names of the dossier tabs, in display order.
pub const DOSSIER_TABS: [&str; 3] = ["Skills", "Experience", "Projects"];
