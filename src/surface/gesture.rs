use super::Surface;
use crate::input::events::PointerEvent;
use crate::input::smooth::Smoother;
use log::warn;

/// Lifecycle of one pointer gesture.
///
/// At most one gesture is ever active: motion and release handling is only
/// reachable while the state holds a live smoother, which plays the role of
/// the session created at press time and discarded at release.
#[derive(Debug)]
pub(super) enum GestureState {
    /// Not capturing - waiting for a press.
    Idle,
    /// Capturing: the smoother carries the session's sample bookkeeping.
    Active(Smoother),
}

impl Surface {
    /// Processes a pointer press.
    ///
    /// # Behavior
    /// Starts a gesture: records the start marker and the anchor coordinate,
    /// and begins a raster path at the anchor. Ignored while locked. A press
    /// while a gesture is already active is a defensive no-op; hosts are
    /// expected to suppress the start source for the duration of a gesture.
    pub fn on_pointer_press(&mut self, event: &PointerEvent) {
        if self.locked {
            return;
        }
        if matches!(self.gesture, GestureState::Active(_)) {
            warn!("Pointer press ignored: a gesture is already active");
            return;
        }

        let anchor = event.surface_local(self.origin);
        self.has_drawn = false;
        self.strokes.emit_start(anchor);
        self.canvas.begin_path(anchor);
        self.gesture = GestureState::Active(Smoother::new(anchor));
    }

    /// Processes pointer motion during a gesture.
    ///
    /// # Behavior
    /// Smooths the raw sample into one rendered curve segment and, once the
    /// smoother is primed, one recorded coordinate. Ignored while locked or
    /// when no gesture is active. Note that locking mid-gesture does not end
    /// the gesture; its events are suppressed until unlocked.
    pub fn on_pointer_motion(&mut self, event: &PointerEvent) {
        if self.locked {
            return;
        }
        let GestureState::Active(smoother) = &mut self.gesture else {
            return;
        };

        self.has_drawn = true;
        let raw = event.surface_local(self.origin);
        let sample = smoother.advance(raw);

        if let Some(recorded) = sample.recorded {
            self.strokes.emit_point(recorded);
        }
        self.canvas.quad_segment_to(sample.control, sample.end);
    }

    /// Processes a pointer release, ending the gesture.
    ///
    /// # Behavior
    /// A gesture that never moved leaves a single-point mark at its last
    /// known point instead of a curve. In all cases the pending path is
    /// committed, the end marker is recorded, saving becomes possible, and
    /// the surface reports itself modified. Ignored while locked, which
    /// leaves the gesture active until unlocked (a press without a matching
    /// release behaves the same way: the session lingers by design and is
    /// not silently discarded).
    pub fn on_pointer_release(&mut self, _event: &PointerEvent) {
        if self.locked {
            return;
        }
        let GestureState::Active(smoother) = &self.gesture else {
            return;
        };
        let last_point = smoother.last_raw();

        if !self.has_drawn {
            self.canvas.mark_dot(last_point);
        }
        self.canvas.finish_path();
        self.strokes.emit_end();
        self.save_disabled = false;
        self.has_drawn = false;
        self.gesture = GestureState::Idle;
        self.report_modified(true);
    }
}
