//! Scroll-derived UI state.
//!
//! Four independent values are recomputed from the scroll position and page
//! geometry, at most once per rendered frame (see [`FrameGate`]).

use crate::config::ScrollConfig;

/// Scroll position and page geometry, all in rows
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollMetrics {
    pub scroll_top: u16,
    pub viewport_height: u16,
    pub content_height: u16,
}

/// UI state derived from a scroll position
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollState {
    /// Read progress, 0..=100
    pub progress_pct: f64,
    /// Header renders in its compact style
    pub header_scrolled: bool,
    /// Back-to-top hint is shown
    pub back_to_top_visible: bool,
    /// Index of the section considered in view, for nav highlighting
    pub active_section: Option<usize>,
}

impl ScrollState {
    /// Derive the full state for one frame.
    ///
    /// `section_tops` are row offsets in document order. The active section is
    /// the last one whose top, less the lookahead, has been scrolled past;
    /// on equal tops the later section wins.
    pub fn derive(metrics: ScrollMetrics, section_tops: &[u16], config: &ScrollConfig) -> Self {
        let mut active_section = None;
        for (idx, &top) in section_tops.iter().enumerate() {
            if metrics.scroll_top >= top.saturating_sub(config.section_lookahead) {
                active_section = Some(idx);
            }
        }

        Self {
            progress_pct: progress_pct(metrics),
            header_scrolled: metrics.scroll_top > config.header_threshold,
            back_to_top_visible: metrics.scroll_top > config.back_to_top_threshold,
            active_section,
        }
    }
}

/// Read progress as a percentage, 0 when the page fits the viewport
fn progress_pct(metrics: ScrollMetrics) -> f64 {
    if metrics.content_height <= metrics.viewport_height {
        return 0.0;
    }
    let scrollable = (metrics.content_height - metrics.viewport_height) as f64;
    (metrics.scroll_top as f64 / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Coalesce scroll work to one recomputation per rendered frame.
///
/// Scroll events call [`request`](Self::request); the frame loop calls
/// [`take`](Self::take) and recomputes only when it returns true. Events that
/// arrive while a recomputation is already pending are dropped.
#[derive(Debug, Default)]
pub struct FrameGate {
    armed: bool,
}

impl FrameGate {
    /// Request a recomputation; returns false when one is already pending
    pub fn request(&mut self) -> bool {
        if self.armed {
            false
        } else {
            self.armed = true;
            true
        }
    }

    /// Consume the pending request, if any
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}
