//! Entrance animations
//!
//! Elements fade and slide in the first time they enter the viewport. Each
//! mount gets a fresh [`RevealTracker`], so the animation replays once per
//! mount and never again while the page stays mounted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Delay between consecutive items of a list, in milliseconds
pub const STAGGER_MS: u32 = 100;

/// Direction an element slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    Up,
    Left,
    Right,
}

impl RevealDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            RevealDirection::Up => "up",
            RevealDirection::Left => "left",
            RevealDirection::Right => "right",
        }
    }

    /// Even items slide in from the left, odd ones from the right
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            RevealDirection::Left
        } else {
            RevealDirection::Right
        }
    }
}

/// Animation parameters attached to a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub direction: RevealDirection,
    pub delay_ms: u32,
}

impl Reveal {
    pub fn new(direction: RevealDirection) -> Self {
        Self {
            direction,
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Staggered reveal for the `index`th item of a list
    pub fn staggered(direction: RevealDirection, index: usize) -> Self {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        Self::new(direction).with_delay(steps.saturating_mul(STAGGER_MS))
    }
}

/// Remembers which elements already played their entrance animation
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` became visible. Returns `true` only the first time.
    pub fn mark_visible(&mut self, key: &str) -> bool {
        self.revealed.insert(key.to_string())
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
