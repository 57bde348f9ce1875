use crate::error::{GeometryError, Result};
use crate::math::angle::unit_vector;
use crate::math::intersect_2d::circle_segment_intersect_2d;
use crate::math::{Point2, TOLERANCE};

use super::LineSegment;

/// A point where a curve crosses a [`LineSegment`], together with the
/// segment parameter `k` at which it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineIntersection {
    /// The intersection point.
    pub point: Point2,
    /// Parameter along the segment, in `[0, 1]`.
    pub k: f64,
}

/// A full circle in 2D, defined by a radius and a center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
    center: Point2,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive or any
    /// input is non-finite.
    pub fn new(radius: f64, center: Point2) -> Result<Self> {
        validate_radius(radius)?;
        validate_point("center", &center)?;
        Ok(Self { radius, center })
    }

    /// Builds a circle from parts that were validated elsewhere.
    pub(crate) fn from_parts(radius: f64, center: Point2) -> Self {
        Self { radius, center }
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the point on the circle at polar angle `angle`.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        self.center + unit_vector(angle) * self.radius
    }

    /// Returns whether `point` lies on the circumference within [`TOLERANCE`].
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        ((point - self.center).norm() - self.radius).abs() < TOLERANCE
    }

    /// Intersects the circle with a bounded segment.
    ///
    /// Results are ordered by increasing segment parameter; the list is
    /// empty when the segment misses the circle.
    #[must_use]
    pub fn intersect(&self, segment: &LineSegment) -> Vec<LineIntersection> {
        circle_segment_intersect_2d(&self.center, self.radius, &segment.start, &segment.end)
            .into_iter()
            .map(|(point, k)| LineIntersection { point, k })
            .collect()
    }
}

pub(crate) fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() {
        return Err(GeometryError::NonFinite { parameter: "radius" }.into());
    }
    if radius <= 0.0 {
        return Err(GeometryError::InvalidRadius { radius }.into());
    }
    Ok(())
}

pub(crate) fn validate_point(parameter: &'static str, point: &Point2) -> Result<()> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { parameter }.into())
    }
}
