//! # Content Model
//!
//! The data a portfolio page is made of: the owner's profile, the skill
//! list, the project cards, and the fixed section order. All of it is
//! deserialized from the config file; none of it is hard-coded to a person.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The five page sections, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    /// All sections in page order. Rendering, navigation, and the menu
    /// overlay all iterate this array so the order is defined once.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Nav label as shown in the header and the menu overlay.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in page order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section, wrapping past the last back to the first.
    pub fn next(self) -> SectionId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section, wrapping before the first to the last.
    pub fn prev(self) -> SectionId {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Map the number row (`1`..`5`) to a section, mirroring the nav links.
    pub fn from_digit(c: char) -> Option<SectionId> {
        let idx = c.to_digit(10)? as usize;
        (1..=Self::ALL.len()).contains(&idx).then(|| Self::ALL[idx - 1])
    }
}

/// The page owner's identity block, rendered in the hero and contact
/// sections.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub github: String,
    pub location: Option<String>,
    /// About-section body, markdown.
    pub bio: String,
}

/// One skill bar: a label and a fill level in percent.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    /// 0..=100. Values above 100 are clamped at config resolution.
    pub level: u8,
}

/// One project card with its two action links.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
}

/// Which of a project card's two buttons was activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectLink {
    Demo,
    Repo,
}

impl ProjectLink {
    pub fn button_label(self) -> &'static str {
        match self {
            ProjectLink::Demo => "Demo",
            ProjectLink::Repo => "GitHub",
        }
    }
}
