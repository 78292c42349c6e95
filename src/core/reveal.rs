//! # Scroll Reveal
//!
//! Tracks which page sections have scrolled into view and drives the
//! animations that trigger on first visibility: the section fade-in and the
//! staggered skill-bar fill.
//!
//! The web page does this with IntersectionObservers; here the render pass
//! reports each section's visible fraction every frame and the tracker
//! latches the first crossing of the threshold. All progress queries take
//! `now` explicitly so tests never sleep.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::core::content::SectionId;

/// A section reveals once this much of it is on screen.
pub const SECTION_THRESHOLD: f32 = 0.1;
/// Skill bars arm only once half the skills section is on screen.
pub const SKILLS_THRESHOLD: f32 = 0.5;
/// Fade from dimmed to normal after a section reveals.
pub const SECTION_FADE: Duration = Duration::from_millis(600);
/// Delay between one skill bar starting to fill and the next.
pub const BAR_STAGGER: Duration = Duration::from_millis(200);
/// Time for a single bar to fill from empty to its level.
pub const BAR_FILL: Duration = Duration::from_millis(800);

/// Fraction of a content strip that lies inside the viewport, in `[0, 1]`.
pub fn visible_fraction(top: u16, height: u16, viewport_top: u16, viewport_height: u16) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let bottom = top.saturating_add(height);
    let viewport_bottom = viewport_top.saturating_add(viewport_height);
    let overlap_top = top.max(viewport_top);
    let overlap_bottom = bottom.min(viewport_bottom);
    overlap_bottom.saturating_sub(overlap_top) as f32 / height as f32
}

/// Smoothstep ease-in-out, clamped to `[0, 1]`.
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Latching visibility tracker for every section plus the skill bars.
pub struct RevealTracker {
    revealed: HashMap<SectionId, Instant>,
    bars_armed: Option<Instant>,
    bar_count: usize,
}

impl RevealTracker {
    pub fn new(bar_count: usize) -> Self {
        Self {
            revealed: HashMap::new(),
            bars_armed: None,
            bar_count,
        }
    }

    /// Record a section's visible fraction for this frame. Reveals latch:
    /// once a section has crossed the threshold it stays revealed even if
    /// scrolled back out of view.
    pub fn observe(&mut self, section: SectionId, fraction: f32, now: Instant) {
        if fraction >= SECTION_THRESHOLD {
            self.revealed.entry(section).or_insert(now);
        }
        if section == SectionId::Skills && fraction >= SKILLS_THRESHOLD && self.bars_armed.is_none()
        {
            self.bars_armed = Some(now);
        }
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains_key(&section)
    }

    /// Fade progress for a section: `0.0` before reveal, easing to `1.0`
    /// over [`SECTION_FADE`].
    pub fn fade_progress(&self, section: SectionId, now: Instant) -> f32 {
        match self.revealed.get(&section) {
            None => 0.0,
            Some(&at) => ease(elapsed_ratio(at, now, SECTION_FADE)),
        }
    }

    /// Fill progress for skill bar `index`: `0.0` until armed, then eased
    /// over [`BAR_FILL`] starting at `index * BAR_STAGGER` after arming.
    pub fn bar_progress(&self, index: usize, now: Instant) -> f32 {
        match self.bars_armed {
            None => 0.0,
            Some(at) => {
                let start = at + BAR_STAGGER * index as u32;
                if now < start {
                    0.0
                } else {
                    ease(elapsed_ratio(start, now, BAR_FILL))
                }
            }
        }
    }

    /// True while any fade or bar fill is still in flight. The run loop
    /// polls faster while this holds.
    pub fn animating(&self, now: Instant) -> bool {
        let fading = self
            .revealed
            .values()
            .any(|&at| now.duration_since(at) < SECTION_FADE);
        let filling = self.bars_armed.is_some_and(|at| {
            let total = BAR_STAGGER * self.bar_count.saturating_sub(1) as u32 + BAR_FILL;
            now.duration_since(at) < total
        });
        fading || filling
    }
}

fn elapsed_ratio(start: Instant, now: Instant, span: Duration) -> f32 {
    if span.is_zero() {
        return 1.0;
    }
    (now.saturating_duration_since(start).as_secs_f32() / span.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_fraction_full_and_none() {
        // Section rows 10..20, viewport rows 0..30: fully visible
        assert_eq!(visible_fraction(10, 10, 0, 30), 1.0);
        // Viewport rows 30..40: not visible at all
        assert_eq!(visible_fraction(10, 10, 30, 10), 0.0);
    }

    #[test]
    fn test_visible_fraction_partial() {
        // Section rows 0..10, viewport starts at row 5: half visible
        let f = visible_fraction(0, 10, 5, 30);
        assert!((f - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_ease_endpoints_and_midpoint() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert!((ease(0.5) - 0.5).abs() < 1e-6);
        // Clamped outside [0, 1]
        assert_eq!(ease(-1.0), 0.0);
        assert_eq!(ease(2.0), 1.0);
    }

    #[test]
    fn test_reveal_latches() {
        let t0 = Instant::now();
        let mut tracker = RevealTracker::new(0);
        tracker.observe(SectionId::About, 0.05, t0);
        assert!(!tracker.is_revealed(SectionId::About));

        tracker.observe(SectionId::About, 0.2, t0);
        assert!(tracker.is_revealed(SectionId::About));

        // Scrolling away doesn't un-reveal
        tracker.observe(SectionId::About, 0.0, t0 + Duration::from_secs(1));
        assert!(tracker.is_revealed(SectionId::About));
    }

    #[test]
    fn test_fade_progress_over_time() {
        let t0 = Instant::now();
        let mut tracker = RevealTracker::new(0);
        tracker.observe(SectionId::Projects, 1.0, t0);

        assert_eq!(tracker.fade_progress(SectionId::Projects, t0), 0.0);
        let mid = tracker.fade_progress(SectionId::Projects, t0 + SECTION_FADE / 2);
        assert!(mid > 0.3 && mid < 0.7);
        assert_eq!(tracker.fade_progress(SectionId::Projects, t0 + SECTION_FADE), 1.0);
    }

    #[test]
    fn test_bars_need_half_visibility() {
        let t0 = Instant::now();
        let mut tracker = RevealTracker::new(3);
        tracker.observe(SectionId::Skills, 0.3, t0);
        // Section itself reveals, but bars stay unarmed
        assert!(tracker.is_revealed(SectionId::Skills));
        assert_eq!(tracker.bar_progress(0, t0 + Duration::from_secs(5)), 0.0);

        tracker.observe(SectionId::Skills, 0.6, t0);
        assert!(tracker.bar_progress(0, t0 + Duration::from_secs(5)) > 0.0);
    }

    #[test]
    fn test_bar_stagger_offsets() {
        let t0 = Instant::now();
        let mut tracker = RevealTracker::new(3);
        tracker.observe(SectionId::Skills, 1.0, t0);

        // At the moment bar 1 starts, bar 0 is already partly filled
        let at = t0 + BAR_STAGGER;
        assert!(tracker.bar_progress(0, at) > 0.0);
        assert_eq!(tracker.bar_progress(1, at), 0.0);

        // Long after arming, every bar is full
        let late = t0 + Duration::from_secs(10);
        for i in 0..3 {
            assert_eq!(tracker.bar_progress(i, late), 1.0);
        }
    }

    #[test]
    fn test_animating_window() {
        let t0 = Instant::now();
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.animating(t0));

        tracker.observe(SectionId::Skills, 1.0, t0);
        assert!(tracker.animating(t0 + Duration::from_millis(100)));

        // After the last bar finishes, nothing is animating
        let done = t0 + BAR_STAGGER + BAR_FILL + SECTION_FADE + Duration::from_millis(1);
        assert!(!tracker.animating(done));
    }
}
