//! Smooth scrolling for anchor navigation and manual scrolling.
//!
//! Pure easing math lives in [`easing`]; [`animator`] drives the current
//! position toward a target over the configured duration, one step per tick.

pub mod animator;
pub mod easing;

pub use animator::ScrollAnimator;
pub use easing::EasingExt;
