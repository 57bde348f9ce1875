use crate::math::{Point2, Vector2};

/// A bounded line segment in 2D.
///
/// The parametric form is: `P(k) = start + k * (end - start)`, `k ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Point at `k = 0`.
    pub start: Point2,
    /// Point at `k = 1`.
    pub end: Point2,
}

impl LineSegment {
    /// Creates a new segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the (non-normalized) direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// Evaluates the segment at parameter `k`. Values outside `[0, 1]`
    /// extrapolate along the supporting line.
    #[must_use]
    pub fn point_at(&self, k: f64) -> Point2 {
        self.start + self.direction() * k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn length_3_4_5() {
        let seg = LineSegment::new(Point2::new(1.0, 1.0), Point2::new(4.0, 5.0));
        assert_abs_diff_eq!(seg.length(), 5.0);
    }

    #[test]
    fn point_at_midpoint() {
        let seg = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(2.0, 4.0));
        assert_abs_diff_eq!(seg.point_at(0.5), Point2::new(1.0, 2.0));
        assert_abs_diff_eq!(seg.point_at(0.0), seg.start);
        assert_abs_diff_eq!(seg.point_at(1.0), seg.end);
    }
}
