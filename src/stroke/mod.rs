//! Append-only stroke token stream.
//!
//! Every gesture on a surface is recorded as a bracketed run of tokens:
//! a start marker, the anchor coordinate, the smoothed coordinates, and an
//! end marker. The stream is the full drawing history: it grows for the
//! life of the surface and is never rewritten, not even when the raster is
//! cleared.

use crate::draw::Canvas;
use crate::util::Point;
use serde::{Deserialize, Serialize};

/// One entry in the recorded drawing history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrokeToken {
    /// Marks the beginning of a gesture.
    Start,
    /// A recorded coordinate: the gesture's anchor, or a smoothed average.
    Point { x: f64, y: f64 },
    /// Marks the end of a gesture.
    End,
}

/// Append-only history of every gesture drawn on a surface.
///
/// Callers are responsible for sequencing: the log itself performs no
/// validation beyond appending in order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeLog {
    tokens: Vec<StrokeToken>,
}

impl StrokeLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a gesture: appends the start marker followed by the anchor
    /// coordinate.
    pub fn emit_start(&mut self, anchor: Point) {
        self.tokens.push(StrokeToken::Start);
        self.tokens.push(StrokeToken::Point {
            x: anchor.x,
            y: anchor.y,
        });
    }

    /// Appends one smoothed coordinate to the open gesture.
    pub fn emit_point(&mut self, p: Point) {
        self.tokens.push(StrokeToken::Point { x: p.x, y: p.y });
    }

    /// Closes the open gesture.
    pub fn emit_end(&mut self) {
        self.tokens.push(StrokeToken::End);
    }

    /// All recorded tokens in append order.
    pub fn tokens(&self) -> &[StrokeToken] {
        &self.tokens
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of completed gestures in the history.
    pub fn gesture_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| matches!(token, StrokeToken::End))
            .count()
    }
}

/// Re-renders a recorded history onto a canvas.
///
/// Each gesture's recorded coordinates are drawn as a polyline from its
/// anchor; a gesture that recorded only its anchor is drawn as a dot. The
/// reconstruction is coarser than the original rendering (smoothed averages
/// instead of midpoint curves) but deterministic for a given log.
pub fn replay(log: &StrokeLog, canvas: &mut Canvas) {
    let mut gesture: Vec<Point> = Vec::new();
    let mut active = false;

    for token in log.tokens() {
        match *token {
            StrokeToken::Start => {
                gesture.clear();
                active = true;
            }
            StrokeToken::Point { x, y } if active => gesture.push(Point::new(x, y)),
            StrokeToken::Point { .. } => {}
            StrokeToken::End => {
                if active {
                    render_gesture(canvas, &gesture);
                }
                active = false;
            }
        }
    }
}

fn render_gesture(canvas: &mut Canvas, points: &[Point]) {
    let Some(&anchor) = points.first() else { return };

    canvas.begin_path(anchor);
    if points.len() == 1 {
        canvas.mark_dot(anchor);
    } else {
        for &p in &points[1..] {
            canvas.line_segment_to(p);
        }
    }
    canvas.finish_path();
}
