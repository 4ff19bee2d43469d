//! Vertical drag-to-minimize gesture on the full player.

use std::time::{Duration, Instant};

/// Outcome of lifting the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// No drag was in progress.
    Ignored,
    /// Dragged past the threshold: switch to the mini player.
    Minimize,
    /// Not far enough: animate back to rest.
    SnapBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SnapBack {
    from: f32,
    started: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    threshold: f32,
    max_offset: f32,
    snap_duration: Duration,
    cursor_y: Option<f32>,
    start_y: Option<f32>,
    offset: f32,
    snap: Option<SnapBack>,
}

impl DragGesture {
    pub fn new(threshold: f32, max_offset: f32, snap_duration: Duration) -> Self {
        Self {
            threshold,
            max_offset,
            snap_duration,
            cursor_y: None,
            start_y: None,
            offset: 0.0,
            snap: None,
        }
    }

    /// Current visual offset, `0..=max_offset`.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.start_y.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    /// Track the pointer; while pressed, downward movement drags.
    pub fn cursor_moved(&mut self, y: f32) {
        self.cursor_y = Some(y);
        if let Some(start) = self.start_y {
            let dy = y - start;
            if dy > 0.0 {
                self.offset = dy.min(self.max_offset);
            }
        }
    }

    pub fn press(&mut self) {
        let Some(y) = self.cursor_y else {
            return;
        };
        self.start_y = Some(y);
        self.snap = None;
        self.offset = 0.0;
    }

    pub fn release(&mut self, now: Instant) -> DragRelease {
        if self.start_y.take().is_none() {
            return DragRelease::Ignored;
        }

        if self.offset > self.threshold {
            log::debug!("[Player] drag {:.0}px commits minimize", self.offset);
            self.offset = 0.0;
            DragRelease::Minimize
        } else if self.offset > 0.0 {
            self.snap = Some(SnapBack {
                from: self.offset,
                started: now,
            });
            DragRelease::SnapBack
        } else {
            DragRelease::Ignored
        }
    }

    /// Advance the snap-back animation. Returns whether it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(snap) = self.snap else {
            return false;
        };

        let elapsed = now.saturating_duration_since(snap.started);
        let progress = if self.snap_duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.snap_duration.as_secs_f32()).min(1.0)
        };

        if progress >= 1.0 {
            self.offset = 0.0;
            self.snap = None;
            return false;
        }

        // ease-out cubic
        let eased = 1.0 - (1.0 - progress).powi(3);
        self.offset = snap.from * (1.0 - eased);
        true
    }

    /// Drop any drag or animation, e.g. when the full player goes away.
    pub fn reset(&mut self) {
        self.cursor_y = None;
        self.start_y = None;
        self.offset = 0.0;
        self.snap = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture() -> DragGesture {
        DragGesture::new(120.0, 300.0, Duration::from_millis(200))
    }

    fn drag(gesture: &mut DragGesture, from: f32, to: f32) {
        gesture.cursor_moved(from);
        gesture.press();
        gesture.cursor_moved(to);
    }

    #[test]
    fn drag_past_threshold_minimizes() {
        let mut gesture = gesture();
        drag(&mut gesture, 100.0, 250.0);
        assert_eq!(gesture.offset(), 150.0);
        assert_eq!(gesture.release(Instant::now()), DragRelease::Minimize);
        assert_eq!(gesture.offset(), 0.0);
        assert!(!gesture.is_animating());
    }

    #[test]
    fn exactly_threshold_snaps_back() {
        let mut gesture = gesture();
        drag(&mut gesture, 0.0, 120.0);
        assert_eq!(gesture.release(Instant::now()), DragRelease::SnapBack);
        assert!(gesture.is_animating());
    }

    #[test]
    fn offset_is_capped() {
        let mut gesture = gesture();
        drag(&mut gesture, 0.0, 900.0);
        assert_eq!(gesture.offset(), 300.0);
    }

    #[test]
    fn upward_movement_does_not_drag() {
        let mut gesture = gesture();
        drag(&mut gesture, 300.0, 100.0);
        assert_eq!(gesture.offset(), 0.0);
        assert_eq!(gesture.release(Instant::now()), DragRelease::Ignored);
    }

    #[test]
    fn movement_without_press_is_ignored() {
        let mut gesture = gesture();
        gesture.cursor_moved(10.0);
        gesture.cursor_moved(400.0);
        assert_eq!(gesture.offset(), 0.0);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn snap_back_returns_to_rest() {
        let mut gesture = gesture();
        drag(&mut gesture, 0.0, 80.0);
        let start = Instant::now();
        assert_eq!(gesture.release(start), DragRelease::SnapBack);

        assert!(gesture.tick(start + Duration::from_millis(100)));
        let midway = gesture.offset();
        assert!(midway > 0.0 && midway < 80.0);

        assert!(!gesture.tick(start + Duration::from_millis(250)));
        assert_eq!(gesture.offset(), 0.0);
        assert!(!gesture.is_animating());
    }

    #[test]
    fn press_during_snap_back_starts_from_rest() {
        let mut gesture = gesture();
        drag(&mut gesture, 0.0, 100.0);
        let start = Instant::now();
        gesture.release(start);
        gesture.tick(start + Duration::from_millis(50));
        assert!(gesture.offset() > 0.0);

        gesture.press();
        assert!(!gesture.is_animating());
        assert_eq!(gesture.offset(), 0.0);

        // No movement yet: releasing does nothing.
        assert_eq!(gesture.release(start), DragRelease::Ignored);
    }

    #[test]
    fn reset_forgets_the_cursor() {
        let mut gesture = gesture();
        gesture.cursor_moved(500.0);
        gesture.reset();

        gesture.press();
        assert!(!gesture.is_dragging());

        gesture.cursor_moved(40.0);
        gesture.press();
        gesture.cursor_moved(100.0);
        assert_eq!(gesture.offset(), 60.0);
    }
}
