//! Three-point running-average smoothing for raw pointer paths.
//!
//! Converts a noisy pointer path into a smooth curve one sample at a time,
//! without buffering the gesture: O(1) state per step.

use crate::util::{Point, average3};

/// Output of one smoothing step.
///
/// `control` and `end` describe the quadratic segment to render from the
/// previous render cursor. `recorded` is the coordinate to append to the
/// stroke log; it is absent for the first motion sample of a gesture, which
/// only primes the smoother.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedSample {
    pub control: Point,
    pub end: Point,
    pub recorded: Option<Point>,
}

/// Incremental smoother state for one gesture.
///
/// Rendered geometry and recorded coordinates are deliberately different:
/// segments end at the two-point midpoint of consecutive raw samples (with
/// the raw sample as control point), while the recorded coordinate is the
/// three-point average of the previous midpoint, the previous raw sample,
/// and the new midpoint. The smoother is primed once the first midpoint
/// exists.
#[derive(Debug, Clone, Copy)]
pub struct Smoother {
    last_raw: Point,
    last_midpoint: Option<Point>,
}

impl Smoother {
    /// Creates a smoother anchored at the gesture's start point.
    pub fn new(anchor: Point) -> Self {
        Self {
            last_raw: anchor,
            last_midpoint: None,
        }
    }

    /// The most recent raw sample (the anchor until the first motion).
    pub fn last_raw(&self) -> Point {
        self.last_raw
    }

    /// Consumes the next raw sample and returns the segment to render plus
    /// the coordinate to record, if any.
    pub fn advance(&mut self, raw: Point) -> SmoothedSample {
        let midpoint = self.last_raw.midpoint(raw);
        let recorded = self
            .last_midpoint
            .map(|previous| average3(previous, self.last_raw, midpoint));

        let sample = SmoothedSample {
            control: self.last_raw,
            end: midpoint,
            recorded,
        };

        self.last_midpoint = Some(midpoint);
        self.last_raw = raw;
        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < 1e-9, "x: {} != {}", p.x, x);
        assert!((p.y - y).abs() < 1e-9, "y: {} != {}", p.y, y);
    }

    #[test]
    fn first_motion_primes_without_recording() {
        let mut smoother = Smoother::new(Point::new(0.0, 0.0));
        let sample = smoother.advance(Point::new(10.0, 0.0));

        assert_eq!(sample.control, Point::new(0.0, 0.0));
        assert_eq!(sample.end, Point::new(5.0, 0.0));
        assert!(sample.recorded.is_none());
    }

    #[test]
    fn second_motion_records_three_point_average() {
        let mut smoother = Smoother::new(Point::new(0.0, 0.0));
        smoother.advance(Point::new(10.0, 0.0));
        let sample = smoother.advance(Point::new(10.0, 10.0));

        // midpoint of (10,0)-(10,10) is (10,5); average of (5,0), (10,0)
        // and (10,5) is (25/3, 5/3).
        assert_eq!(sample.end, Point::new(10.0, 5.0));
        assert_eq!(sample.control, Point::new(10.0, 0.0));
        assert_close(sample.recorded.unwrap(), 25.0 / 3.0, 5.0 / 3.0);
    }

    #[test]
    fn every_motion_after_priming_records_one_coordinate() {
        let mut smoother = Smoother::new(Point::new(0.0, 0.0));
        let samples = [
            Point::new(4.0, 0.0),
            Point::new(8.0, 2.0),
            Point::new(12.0, 6.0),
            Point::new(14.0, 10.0),
        ];

        let recorded: Vec<_> = samples
            .iter()
            .filter_map(|&raw| smoother.advance(raw).recorded)
            .collect();
        assert_eq!(recorded.len(), samples.len() - 1);
    }

    #[test]
    fn segments_are_continuous() {
        // Each segment ends at the midpoint the next segment starts from, so
        // consecutive samples share their end/start via the render cursor.
        let mut smoother = Smoother::new(Point::new(0.0, 0.0));
        let first = smoother.advance(Point::new(6.0, 2.0));
        let second = smoother.advance(Point::new(10.0, 8.0));

        assert_eq!(first.end, Point::new(3.0, 1.0));
        // The next control point is the raw sample between the two midpoints.
        assert_eq!(second.control, Point::new(6.0, 2.0));
        assert_eq!(second.end, Point::new(8.0, 5.0));
    }

    #[test]
    fn stationary_samples_average_to_the_same_point() {
        let mut smoother = Smoother::new(Point::new(7.0, 7.0));
        smoother.advance(Point::new(7.0, 7.0));
        let sample = smoother.advance(Point::new(7.0, 7.0));
        assert_eq!(sample.recorded.unwrap(), Point::new(7.0, 7.0));
    }
}
