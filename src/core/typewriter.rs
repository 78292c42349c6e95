//! # Typewriter
//!
//! The hero section's typing animation: cycles through a fixed list of
//! phrases, revealing one character per tick, pausing on the completed
//! phrase, then erasing it and moving to the next. Loops forever.
//!
//! ## Design
//!
//! The state machine is pure: [`Typewriter::tick`] advances one step and
//! returns a [`TypewriterFrame`] holding the text to display and the delay
//! until the next tick. Actual scheduling lives in the TUI layer
//! (`tui::spawn_typewriter`), which runs the machine on a tokio task and is
//! stopped through its handle on shutdown. Keeping time out of the machine
//! makes every property testable without sleeping.
//!
//! ## Hold handling
//!
//! The pause on a completed phrase is not a second timer racing the tick
//! chain. The tick that reveals the last character flips the machine into
//! `Deleting` and returns the hold as its delay, so exactly one timer is
//! ever pending and the cursor never runs past the phrase length.

use std::fmt;
use std::time::Duration;

/// Fixed tick intervals, in the order the animation uses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between reveal ticks.
    pub typing_interval: Duration,
    /// Delay between erase ticks (faster than typing).
    pub deleting_interval: Duration,
    /// Pause on the fully revealed phrase before erasing begins.
    pub hold: Duration,
    /// Delay before the very first tick after startup.
    pub start_delay: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing_interval: Duration::from_millis(100),
            deleting_interval: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
            start_delay: Duration::from_millis(1000),
        }
    }
}

/// One animation step: the text to display and how long to wait before the
/// next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterFrame {
    pub text: String,
    pub delay: Duration,
}

/// Rejected at construction; no tick is ever scheduled for a bad phrase
/// list.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    EmptyPhraseList,
    /// A phrase at this index is empty or whitespace-only.
    BlankPhrase(usize),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::EmptyPhraseList => {
                write!(f, "typewriter needs at least one phrase")
            }
            ConfigurationError::BlankPhrase(i) => {
                write!(f, "typewriter phrase {} is blank", i + 1)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

/// The typing animation state machine.
///
/// State is `(phrase_index, cursor, phase)` where `cursor` counts displayed
/// characters of the current phrase. Only [`tick`](Self::tick) mutates it.
#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: TypewriterTiming,
    phrase_index: usize,
    cursor: usize,
    phase: Phase,
}

impl Typewriter {
    /// Build a machine over a non-empty list of non-blank phrases.
    pub fn new(
        phrases: Vec<String>,
        timing: TypewriterTiming,
    ) -> Result<Self, ConfigurationError> {
        if phrases.is_empty() {
            return Err(ConfigurationError::EmptyPhraseList);
        }
        if let Some(i) = phrases.iter().position(|p| p.trim().is_empty()) {
            return Err(ConfigurationError::BlankPhrase(i));
        }
        Ok(Self {
            phrases,
            timing,
            phrase_index: 0,
            cursor: 0,
            phase: Phase::Typing,
        })
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    /// Index of the phrase currently being typed or erased.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    /// Advance one step.
    ///
    /// Typing reveals one more character; reaching the full phrase flips to
    /// erasing and the returned delay is the hold. Erasing removes one
    /// character; reaching empty flips back to typing and advances to the
    /// next phrase (wrapping after the last).
    pub fn tick(&mut self) -> TypewriterFrame {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();

        let delay = match self.phase {
            Phase::Typing => {
                self.cursor += 1;
                if self.cursor >= len {
                    self.cursor = len;
                    self.phase = Phase::Deleting;
                    self.timing.hold
                } else {
                    self.timing.typing_interval
                }
            }
            Phase::Deleting => {
                self.cursor -= 1;
                if self.cursor == 0 {
                    self.phase = Phase::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.timing.typing_interval
                } else {
                    self.timing.deleting_interval
                }
            }
        };

        let text = phrase.chars().take(self.cursor).collect();
        TypewriterFrame { text, delay }
    }
}
