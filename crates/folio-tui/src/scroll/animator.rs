use std::time::{Duration, Instant};

use folio_core::{EasingType, ScrollConfig};

use super::easing::EasingExt;

#[derive(Debug, Clone)]
struct Animation {
    started: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl Animation {
    fn position_at(&self, now: Instant) -> u16 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        let from = self.from as f64;
        (from + (self.to as f64 - from) * eased).round() as u16
    }

    fn done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// Drives the scroll position toward a target with the configured easing.
///
/// `update` advances the position each tick; manual and anchor scrolls both
/// go through `animate_to`, which degrades to a jump when smooth scrolling
/// is disabled.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    current: u16,
    animation: Option<Animation>,
    smooth: bool,
    duration: Duration,
    easing: EasingType,
}

impl ScrollAnimator {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            current: 0,
            animation: None,
            smooth: config.smooth_enabled && config.animation_duration_ms > 0,
            duration: Duration::from_millis(config.animation_duration_ms),
            easing: config.easing,
        }
    }

    pub fn current(&self) -> u16 {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the position will settle once any animation finishes
    pub fn target(&self) -> u16 {
        self.animation.as_ref().map_or(self.current, |a| a.to)
    }

    /// Move immediately, cancelling any animation
    pub fn jump_to(&mut self, pos: u16, max: u16) {
        self.animation = None;
        self.current = pos.min(max);
    }

    /// Animate from the current position to `pos`
    pub fn animate_to(&mut self, pos: u16, max: u16) {
        let to = pos.min(max);
        if !self.smooth {
            self.jump_to(to, max);
            return;
        }
        if to == self.current && self.animation.is_none() {
            return;
        }
        self.animation = Some(Animation {
            started: Instant::now(),
            from: self.current,
            to,
            duration: self.duration,
            easing: self.easing,
        });
    }

    /// Scroll relative to the pending target so repeated key presses stack
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let base = self.target() as i32;
        let to = (base + delta).clamp(0, max as i32) as u16;
        self.animate_to(to, max);
    }

    /// Advance the animation; returns true when the position changed
    pub fn update(&mut self, now: Instant, max: u16) -> bool {
        let before = self.current;
        if let Some(anim) = &self.animation {
            self.current = anim.position_at(now).min(max);
            if anim.done(now) {
                self.animation = None;
            }
        } else if self.current > max {
            // viewport grew; keep the position in range
            self.current = max;
        }
        self.current != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(duration_ms: u64) -> ScrollAnimator {
        ScrollAnimator::new(&ScrollConfig {
            animation_duration_ms: duration_ms,
            ..ScrollConfig::default()
        })
    }

    #[test]
    fn test_jump_is_immediate_and_clamped() {
        let mut a = animator(150);
        a.jump_to(500, 300);
        assert_eq!(a.current(), 300);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut a = animator(50);
        a.animate_to(40, 100);
        assert!(a.is_animating());
        let end = Instant::now() + Duration::from_millis(60);
        assert!(a.update(end, 100));
        assert_eq!(a.current(), 40);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_midway_position_between_endpoints() {
        let mut a = animator(100);
        a.animate_to(100, 200);
        let mid = Instant::now() + Duration::from_millis(50);
        a.update(mid, 200);
        assert!(a.current() > 0);
        assert!(a.current() <= 100);
    }

    #[test]
    fn test_disabled_smooth_degrades_to_jump() {
        let mut a = ScrollAnimator::new(&ScrollConfig {
            smooth_enabled: false,
            ..ScrollConfig::default()
        });
        a.animate_to(40, 100);
        assert_eq!(a.current(), 40);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_scroll_by_stacks_on_target() {
        let mut a = animator(150);
        a.scroll_by(10, 100);
        a.scroll_by(10, 100);
        assert_eq!(a.target(), 20);
    }

    #[test]
    fn test_scroll_by_clamps_at_zero() {
        let mut a = animator(150);
        a.scroll_by(-10, 100);
        assert_eq!(a.target(), 0);
    }

    #[test]
    fn test_update_clamps_after_viewport_growth() {
        let mut a = animator(150);
        a.jump_to(80, 100);
        assert!(a.update(Instant::now(), 50));
        assert_eq!(a.current(), 50);
    }
}
