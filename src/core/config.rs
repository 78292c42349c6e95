//! # Configuration
//!
//! Centralizes all settings and page content with a clear override
//! hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The built-in defaults render a complete placeholder portfolio, so the
//! binary works before any config exists.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::content::{Profile, Project, SectionId, Skill};
use crate::core::typewriter::TypewriterTiming;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    pub profile: Option<Profile>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_section: Option<SectionId>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TypewriterConfig {
    pub phrases: Option<Vec<String>>,
    pub typing_interval_ms: Option<u64>,
    pub deleting_interval_ms: Option<u64>,
    pub hold_ms: Option<u64>,
    pub start_delay_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

/// The rotating hero phrases used until the config provides its own.
pub const DEFAULT_PHRASES: [&str; 6] = [
    "CSE Student & Developer",
    "Full Stack Developer",
    "Problem Solver",
    "Tech Enthusiast",
    "Code Enthusiast",
    "Future Software Engineer",
];

const DEFAULT_BIO: &str = "\
I'm a developer who enjoys building things end to end: clean interfaces, \
solid backends, and the tooling in between.\n\n\
Currently studying computer science and looking for opportunities to work \
on products people actually use. When I'm not coding I'm probably reading \
about systems design or tinkering with my terminal setup.";

fn default_profile() -> Profile {
    Profile {
        name: "Your Name".to_string(),
        headline: "Personal Portfolio".to_string(),
        email: "your.email@example.com".to_string(),
        github: "github.com/yourusername".to_string(),
        location: None,
        bio: DEFAULT_BIO.to_string(),
    }
}

fn default_skills() -> Vec<Skill> {
    [
        ("HTML & CSS", 90),
        ("JavaScript", 85),
        ("Rust", 80),
        ("Python", 75),
        ("SQL", 70),
        ("Git", 85),
    ]
    .into_iter()
    .map(|(name, level)| Skill {
        name: name.to_string(),
        level,
    })
    .collect()
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            name: "Weather Dashboard".to_string(),
            description: "Live weather dashboard with location search and a **7-day forecast**."
                .to_string(),
            tech: vec!["TypeScript".to_string(), "React".to_string()],
            demo_url: Some("https://example.com/weather".to_string()),
            repo_url: Some("https://github.com/yourusername/weather".to_string()),
        },
        Project {
            name: "Task Tracker".to_string(),
            description: "Minimal task tracker with offline sync and keyboard-first UX."
                .to_string(),
            tech: vec!["Rust".to_string(), "SQLite".to_string()],
            demo_url: None,
            repo_url: Some("https://github.com/yourusername/tasks".to_string()),
        },
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub phrases: Vec<String>,
    pub timing: TypewriterTiming,
    pub start_section: SectionId,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config, preferring an explicit `--config` path.
///
/// With an explicit path, the file must exist and parse. With the default
/// path, a missing file generates a commented-out template and falls back
/// to built-in content; a malformed file is still an error.
pub fn load_config(explicit: Option<&Path>) -> Result<FolioConfig, ConfigError> {
    if let Some(path) = explicit {
        let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        info!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default content");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Folio Configuration
# All settings are optional — built-in placeholder content is used for
# anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_section = "home"             # home, about, skills, projects, contact

# [typewriter]
# phrases = ["Full Stack Developer", "Problem Solver"]
# typing_interval_ms = 100
# deleting_interval_ms = 50
# hold_ms = 2000                     # pause on the completed phrase
# start_delay_ms = 1000              # delay before the first tick

# [profile]
# name = "Your Name"
# headline = "Personal Portfolio"
# email = "your.email@example.com"
# github = "github.com/yourusername"
# location = "Somewhere, Earth"
# bio = """
# Markdown works here: **bold**, *italic*, `code`, lists, and links.
# """

# [[skills]]
# name = "Rust"
# level = 80                         # bar fill, 0..=100

# [[projects]]
# name = "Weather Dashboard"
# description = "Live weather dashboard with a **7-day forecast**."
# tech = ["TypeScript", "React"]
# demo_url = "https://example.com/weather"
# repo_url = "https://github.com/yourusername/weather"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI.
///
/// `cli_section` is the `--section` flag (None = not specified).
pub fn resolve(config: &FolioConfig, cli_section: Option<SectionId>) -> ResolvedConfig {
    // Start section: CLI → env → config → default
    let start_section = cli_section
        .or_else(|| {
            std::env::var("FOLIO_SECTION")
                .ok()
                .and_then(|s| parse_section(&s))
        })
        .or(config.general.start_section)
        .unwrap_or(SectionId::Home);

    let profile = config.profile.clone().unwrap_or_else(default_profile);

    let mut skills = if config.skills.is_empty() {
        default_skills()
    } else {
        config.skills.clone()
    };
    for skill in &mut skills {
        if skill.level > 100 {
            warn!("Skill '{}' level {} clamped to 100", skill.name, skill.level);
            skill.level = 100;
        }
    }

    let projects = if config.projects.is_empty() {
        default_projects()
    } else {
        config.projects.clone()
    };

    let phrases = match &config.typewriter.phrases {
        Some(list) if !list.is_empty() => list.clone(),
        _ => DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
    };

    let defaults = TypewriterTiming::default();
    let ms = Duration::from_millis;
    let timing = TypewriterTiming {
        typing_interval: config
            .typewriter
            .typing_interval_ms
            .map_or(defaults.typing_interval, ms),
        deleting_interval: config
            .typewriter
            .deleting_interval_ms
            .map_or(defaults.deleting_interval, ms),
        hold: config.typewriter.hold_ms.map_or(defaults.hold, ms),
        start_delay: config
            .typewriter
            .start_delay_ms
            .map_or(defaults.start_delay, ms),
    };

    ResolvedConfig {
        profile,
        skills,
        projects,
        phrases,
        timing,
        start_section,
    }
}

fn parse_section(s: &str) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .find(|sec| sec.label().eq_ignore_ascii_case(s.trim()))
}
