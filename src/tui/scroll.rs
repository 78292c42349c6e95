//! Smooth scrolling for section navigation.
//!
//! Jumping straight to a nav target is jarring, so the viewport offset
//! eases from its current position to the target over a short window.
//! The run loop ticks the animation once per frame; manual scrolling
//! interrupts it immediately.

use std::time::{Duration, Instant};

use crate::core::reveal::ease;

/// Time to glide from the current offset to the nav target.
pub const SCROLL_ANIMATION: Duration = Duration::from_millis(400);

struct ScrollAnimation {
    from: u16,
    to: u16,
    started: Instant,
}

/// Eased viewport-offset animation toward a scroll target.
#[derive(Default)]
pub struct SmoothScroll {
    animation: Option<ScrollAnimation>,
}

impl SmoothScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin gliding from `from` to `to`. Starting at the target is a no-op.
    pub fn start(&mut self, from: u16, to: u16, now: Instant) {
        if from == to {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from,
            to,
            started: now,
        });
    }

    /// Manual scrolling cancels the glide so the user wins immediately.
    pub fn interrupt(&mut self) {
        self.animation = None;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance the animation, returning the offset to apply this frame.
    /// Returns `None` when idle. The final frame lands exactly on the
    /// target and clears the animation.
    pub fn tick(&mut self, now: Instant) -> Option<u16> {
        let anim = self.animation.as_ref()?;

        let t = now.saturating_duration_since(anim.started).as_secs_f32()
            / SCROLL_ANIMATION.as_secs_f32();
        if t >= 1.0 {
            let to = anim.to;
            self.animation = None;
            return Some(to);
        }

        let from = anim.from as f32;
        let to = anim.to as f32;
        let offset = from + (to - from) * ease(t);
        Some(offset.round() as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        let mut scroll = SmoothScroll::new();
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(Instant::now()), None);
    }

    #[test]
    fn test_start_at_target_is_noop() {
        let mut scroll = SmoothScroll::new();
        scroll.start(7, 7, Instant::now());
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_lands_exactly_on_target() {
        let t0 = Instant::now();
        let mut scroll = SmoothScroll::new();
        scroll.start(0, 40, t0);

        let final_offset = scroll.tick(t0 + SCROLL_ANIMATION).unwrap();
        assert_eq!(final_offset, 40);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_monotonic_without_overshoot() {
        let t0 = Instant::now();
        let mut scroll = SmoothScroll::new();
        scroll.start(10, 50, t0);

        let mut last = 10;
        for step in 1..=8 {
            let now = t0 + SCROLL_ANIMATION * step / 10;
            let offset = scroll.tick(now).unwrap();
            assert!(offset >= last, "offset went backwards: {offset} < {last}");
            assert!(offset <= 50);
            last = offset;
        }
    }

    #[test]
    fn test_scrolling_up_works_too() {
        let t0 = Instant::now();
        let mut scroll = SmoothScroll::new();
        scroll.start(50, 10, t0);

        let mid = scroll.tick(t0 + SCROLL_ANIMATION / 2).unwrap();
        assert!(mid < 50 && mid > 10);
        assert_eq!(scroll.tick(t0 + SCROLL_ANIMATION).unwrap(), 10);
    }

    #[test]
    fn test_interrupt_stops_animation() {
        let t0 = Instant::now();
        let mut scroll = SmoothScroll::new();
        scroll.start(0, 100, t0);
        assert!(scroll.is_animating());

        scroll.interrupt();
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(t0 + SCROLL_ANIMATION / 2), None);
    }
}
