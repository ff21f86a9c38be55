//! One-shot staggered reveal of content blocks.
//!
//! Each watched element moves Observed -> Scheduled -> Revealed exactly once.
//! Elements that cross the visibility threshold in the same frame form a
//! batch; the nth element of a batch reveals n stagger intervals later.
//! Leaving the viewport after scheduling never undoes anything.

use std::time::{Duration, Instant};

use crate::config::RevealConfig;

/// Row extent of a watched element within the document
#[derive(Debug, Clone, Copy)]
pub struct Extent {
    pub top: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Pre-reveal visual state, still watched
    Observed,
    /// Crossed the threshold; reveal fires at `due`
    Scheduled { due: Instant },
    /// Final visible state, never revisited
    Revealed,
}

pub struct RevealObserver {
    phases: Vec<RevealPhase>,
    stagger: Duration,
    visible_fraction: f64,
    bottom_margin: u16,
}

impl RevealObserver {
    pub fn new(element_count: usize, config: &RevealConfig) -> Self {
        Self {
            phases: vec![RevealPhase::Observed; element_count],
            stagger: Duration::from_millis(config.stagger_ms),
            visible_fraction: config.visible_fraction,
            bottom_margin: config.bottom_margin_rows,
        }
    }

    pub fn phase(&self, idx: usize) -> Option<RevealPhase> {
        self.phases.get(idx).copied()
    }

    /// The element has reached its final visible state
    pub fn is_revealed(&self, idx: usize) -> bool {
        matches!(self.phases.get(idx), Some(RevealPhase::Revealed))
    }

    pub fn all_revealed(&self) -> bool {
        self.phases.iter().all(|p| *p == RevealPhase::Revealed)
    }

    /// Some reveal timers are still outstanding
    pub fn any_scheduled(&self) -> bool {
        self.phases
            .iter()
            .any(|p| matches!(p, RevealPhase::Scheduled { .. }))
    }

    /// Evaluate one frame of visibility.
    ///
    /// Still-observed elements that now intersect the (bottom-trimmed)
    /// viewport are scheduled at `now + batch_index * stagger` and dropped
    /// from further evaluation.
    pub fn process_frame(
        &mut self,
        now: Instant,
        extents: &[Extent],
        viewport_top: u16,
        viewport_height: u16,
    ) {
        let visible_fraction = self.visible_fraction;
        let bottom_margin = self.bottom_margin;

        let mut batch_index: u32 = 0;
        for (idx, phase) in self.phases.iter_mut().enumerate() {
            if *phase != RevealPhase::Observed {
                continue;
            }
            let Some(extent) = extents.get(idx) else {
                continue;
            };
            if intersects(*extent, viewport_top, viewport_height, visible_fraction, bottom_margin) {
                let due = now + self.stagger * batch_index;
                *phase = RevealPhase::Scheduled { due };
                batch_index += 1;
            }
        }
    }

    /// Promote scheduled elements whose delay has elapsed
    pub fn tick(&mut self, now: Instant) {
        for phase in &mut self.phases {
            if let RevealPhase::Scheduled { due } = *phase {
                if now >= due {
                    *phase = RevealPhase::Revealed;
                }
            }
        }
    }

}

/// At least `visible_fraction` of the element sits inside the viewport,
/// with the trigger zone shrunk at the bottom by `bottom_margin` rows
fn intersects(
    extent: Extent,
    viewport_top: u16,
    viewport_height: u16,
    visible_fraction: f64,
    bottom_margin: u16,
) -> bool {
    if extent.height == 0 {
        return false;
    }
    let zone_bottom = (viewport_top + viewport_height).saturating_sub(bottom_margin);
    let elem_bottom = extent.top.saturating_add(extent.height);

    let overlap_top = extent.top.max(viewport_top);
    let overlap_bottom = elem_bottom.min(zone_bottom);
    if overlap_bottom <= overlap_top {
        return false;
    }
    let visible = (overlap_bottom - overlap_top) as f64;
    visible >= extent.height as f64 * visible_fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RevealConfig {
        RevealConfig::default()
    }

    fn extent(top: u16, height: u16) -> Extent {
        Extent { top, height }
    }

    #[test]
    fn test_batch_staggers_in_order() {
        let mut obs = RevealObserver::new(3, &config());
        let extents = [extent(0, 4), extent(5, 4), extent(10, 4)];
        let t0 = Instant::now();

        obs.process_frame(t0, &extents, 0, 40);

        assert_eq!(obs.phase(0), Some(RevealPhase::Scheduled { due: t0 }));
        assert_eq!(
            obs.phase(1),
            Some(RevealPhase::Scheduled {
                due: t0 + Duration::from_millis(60)
            })
        );
        assert_eq!(
            obs.phase(2),
            Some(RevealPhase::Scheduled {
                due: t0 + Duration::from_millis(120)
            })
        );
    }

    #[test]
    fn test_tick_promotes_due_elements_only() {
        let mut obs = RevealObserver::new(3, &config());
        let extents = [extent(0, 4), extent(5, 4), extent(10, 4)];
        let t0 = Instant::now();
        obs.process_frame(t0, &extents, 0, 40);

        obs.tick(t0);
        assert!(obs.is_revealed(0));
        assert!(!obs.is_revealed(1));
        assert!(!obs.is_revealed(2));

        obs.tick(t0 + Duration::from_millis(60));
        assert!(obs.is_revealed(1));
        assert!(!obs.is_revealed(2));

        obs.tick(t0 + Duration::from_millis(120));
        assert!(obs.all_revealed());
    }

    #[test]
    fn test_revealed_never_retriggers() {
        let mut obs = RevealObserver::new(1, &config());
        let extents = [extent(0, 4)];
        let t0 = Instant::now();

        obs.process_frame(t0, &extents, 0, 40);
        obs.tick(t0);
        assert!(obs.is_revealed(0));

        // scroll away and back
        obs.process_frame(t0 + Duration::from_millis(500), &extents, 200, 40);
        obs.process_frame(t0 + Duration::from_millis(600), &extents, 0, 40);
        assert_eq!(obs.phase(0), Some(RevealPhase::Revealed));
    }

    #[test]
    fn test_offscreen_element_stays_observed() {
        let mut obs = RevealObserver::new(1, &config());
        let extents = [extent(100, 4)];
        obs.process_frame(Instant::now(), &extents, 0, 40);
        assert_eq!(obs.phase(0), Some(RevealPhase::Observed));
    }

    #[test]
    fn test_bottom_margin_shrinks_trigger_zone() {
        let cfg = RevealConfig {
            bottom_margin_rows: 5,
            visible_fraction: 0.5,
            ..RevealConfig::default()
        };
        let mut obs = RevealObserver::new(1, &cfg);
        // viewport rows 0..40, zone 0..35; element 33..37 has 2 of 4 rows
        // in the zone, exactly the 50% threshold
        obs.process_frame(Instant::now(), &[extent(33, 4)], 0, 40);
        assert!(matches!(obs.phase(0), Some(RevealPhase::Scheduled { .. })));

        // element 34..38 has only 1 of 4 rows in the zone
        let mut obs = RevealObserver::new(1, &cfg);
        obs.process_frame(Instant::now(), &[extent(34, 4)], 0, 40);
        assert_eq!(obs.phase(0), Some(RevealPhase::Observed));
    }

    #[test]
    fn test_later_batches_restart_stagger() {
        let mut obs = RevealObserver::new(2, &config());
        let extents = [extent(0, 4), extent(100, 4)];
        let t0 = Instant::now();

        obs.process_frame(t0, &extents, 0, 40);
        let t1 = t0 + Duration::from_millis(300);
        obs.process_frame(t1, &extents, 90, 40);

        // second element heads its own batch: no stagger offset
        assert_eq!(obs.phase(1), Some(RevealPhase::Scheduled { due: t1 }));
    }
}
