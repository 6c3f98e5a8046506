//! Drawing surface controller.
//!
//! [`Surface`] owns the raster target, the stroke history, and the
//! lock/modified bookkeeping, and brackets every operation with the lock
//! check. Construction goes through [`Surface::create`], which degrades to a
//! capture-disabled variant instead of failing hard when the raster context
//! cannot be acquired.

mod collab;
mod gesture;
mod loader;

pub use collab::{CompanionField, IndicatorSink, NullCompanion, NullIndicators};
pub use loader::centered_offset;

use crate::config::Config;
use crate::draw::Canvas;
use crate::payload;
use crate::stroke::StrokeLog;
use crate::util::Point;
use gesture::GestureState;
use log::{debug, warn};
use thiserror::Error;

/// Errors from raster snapshot operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to encode raster snapshot: {0}")]
    Snapshot(#[from] cairo::IoError),
}

/// Result of surface construction.
pub enum SurfaceInit {
    /// Fully capable surface.
    Ready(Surface),
    /// The raster context could not be acquired; capture is disabled.
    Degraded(DegradedSurface),
}

impl SurfaceInit {
    /// Unwraps the capable variant, for hosts that treat degradation as fatal.
    pub fn ready(self) -> Option<Surface> {
        match self {
            SurfaceInit::Ready(surface) => Some(surface),
            SurfaceInit::Degraded(_) => None,
        }
    }
}

/// An interactive freehand drawing surface.
///
/// Holds the raster, the append-only stroke history, and the gesture state.
/// Pointer handling lives in the gesture module; image loading in the loader
/// module.
pub struct Surface {
    canvas: Canvas,
    strokes: StrokeLog,
    gesture: GestureState,
    /// Page-space position of the top-left corner, for normalizing
    /// page-coordinate pointer events.
    origin: Point,
    locked: bool,
    modified: bool,
    /// Cleared by the first completed gesture; until then there is nothing
    /// worth saving.
    save_disabled: bool,
    /// Whether the active gesture has seen a motion sample. Only meaningful
    /// while a gesture is active.
    has_drawn: bool,
    companion: Box<dyn CompanionField>,
    indicators: Box<dyn IndicatorSink>,
}

impl Surface {
    /// Builds a surface from the configuration and collaborator handles.
    ///
    /// When the raster context cannot be acquired the failure is reported as
    /// a non-fatal diagnostic and a [`DegradedSurface`] is returned instead:
    /// no pointer handling is available, so capture fails closed.
    pub fn create(
        config: &Config,
        companion: Box<dyn CompanionField>,
        indicators: Box<dyn IndicatorSink>,
    ) -> SurfaceInit {
        let width = config.surface.width as i32;
        let height = config.surface.height as i32;

        match Canvas::new(width, height, config.pen_color(), config.pen.thickness) {
            Ok(canvas) => {
                debug!("Surface ready ({width}x{height})");
                SurfaceInit::Ready(Self {
                    canvas,
                    strokes: StrokeLog::new(),
                    gesture: GestureState::Idle,
                    origin: Point::new(config.surface.origin_x, config.surface.origin_y),
                    locked: false,
                    modified: false,
                    save_disabled: true,
                    has_drawn: false,
                    companion,
                    indicators,
                })
            }
            Err(err) => {
                log::error!("Raster context unavailable, pointer capture disabled: {err}");
                SurfaceInit::Degraded(DegradedSurface {
                    locked: false,
                    diagnostic: err.to_string(),
                    indicators,
                })
            }
        }
    }

    /// Locks or unlocks the surface.
    ///
    /// While locked, gestures and [`Surface::clear`] are ignored and the
    /// external "disabled" indicator is set. Locking does not interrupt an
    /// active gesture; it suppresses its remaining events until unlocked.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        self.indicators.set_disabled(locked);
        debug!("Surface {}", if locked { "locked" } else { "unlocked" });
    }

    /// Whether the surface currently ignores input.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the surface holds drawing not yet cleared.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// True once a gesture has completed; a blank surface has nothing to save.
    pub fn can_save(&self) -> bool {
        !self.save_disabled
    }

    /// Whether a gesture is currently active.
    pub fn gesture_active(&self) -> bool {
        matches!(self.gesture, GestureState::Active(_))
    }

    /// The recorded stroke history.
    pub fn strokes(&self) -> &StrokeLog {
        &self.strokes
    }

    /// Raster width in pixels.
    pub fn width(&self) -> i32 {
        self.canvas.width()
    }

    /// Raster height in pixels.
    pub fn height(&self) -> i32 {
        self.canvas.height()
    }

    /// Erases the rendered raster and empties the companion field.
    ///
    /// No-op while locked. The stroke history is untouched: the recorded
    /// token stream spans every gesture since the surface was created,
    /// including strokes whose pixels were cleared away.
    pub fn clear(&mut self) {
        if self.locked {
            return;
        }
        self.canvas.erase();
        self.report_modified(false);
    }

    /// Synchronizes the companion field and the "modified" indicator.
    ///
    /// With `true`, fills the companion field with the current snapshot
    /// payload; with `false`, empties it. Called with `true` at the end of
    /// every completed gesture and with `false` on every clear.
    pub fn report_modified(&mut self, modified: bool) {
        self.modified = modified;
        if modified {
            match self.snapshot_payload() {
                Ok(snapshot) => self.companion.fill(&snapshot),
                Err(err) => {
                    warn!("Snapshot encoding failed, companion field left unchanged: {err}");
                }
            }
            self.indicators.set_modified(true);
        } else {
            self.companion.clear();
            self.indicators.set_modified(false);
        }
    }

    /// Encodes the current raster as a prefixed base64 PNG payload.
    pub fn snapshot_payload(&self) -> Result<String, SurfaceError> {
        Ok(payload::encode(&self.canvas.to_png()?))
    }

    /// Encodes the current raster as raw PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, SurfaceError> {
        Ok(self.canvas.to_png()?)
    }
}

/// A surface whose raster target could not be acquired.
///
/// Exposes only lock toggling and the initialization diagnostic; no input
/// handling exists, so nothing can ever be drawn or recorded.
pub struct DegradedSurface {
    locked: bool,
    diagnostic: String,
    indicators: Box<dyn IndicatorSink>,
}

impl DegradedSurface {
    /// Locks or unlocks the (inert) surface, keeping indicators in sync.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        self.indicators.set_disabled(locked);
    }

    /// Whether the surface is flagged as locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Human-readable reason the raster context was unavailable.
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    #[cfg(test)]
    pub(crate) fn with_diagnostic(diagnostic: String, indicators: Box<dyn IndicatorSink>) -> Self {
        Self {
            locked: false,
            diagnostic,
            indicators,
        }
    }
}
