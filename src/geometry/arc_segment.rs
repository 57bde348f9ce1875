use std::f64::consts::PI;
use std::hash::{Hash, Hasher};

use crate::error::{GeometryError, Result, TransformError};
use crate::log::{debug, warn};
use crate::math::angle::{polar_angle, symmetric_remainder, unit_vector, unwind};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::transform::PointTransform;

use super::circle::{validate_point, validate_radius};
use super::{Circle, LineIntersection, LineSegment};

/// A directed arc of a circle.
///
/// The arc starts at `start_angle` and travels counter-clockwise (`ccw`)
/// or clockwise to `end_angle`. Every constructor establishes:
/// - `start_angle ∈ (-π, π]`
/// - `end_angle >= start_angle` when `ccw`, `end_angle <= start_angle` otherwise
///
/// so `|end_angle - start_angle|` is the swept angle. Sweeps of more than one
/// turn are representable but the angle-domain queries assume at most one.
///
/// Equality and hashing compare the five fields exactly. Use
/// [`CircleSegment::same_geometry`] to compare arcs as point sets.
#[derive(Debug, Clone, Copy)]
pub struct CircleSegment {
    radius: f64,
    center: Point2,
    start_angle: f64,
    end_angle: f64,
    ccw: bool,
}

impl CircleSegment {
    /// Creates an arc on `circle` between two polar angles.
    ///
    /// `start_angle` is reduced into `(-π, π]`, then `end_angle` is moved by
    /// whole turns onto the travel side of it.
    ///
    /// # Errors
    ///
    /// Returns an error if either angle is non-finite.
    pub fn from_angles(circle: &Circle, start_angle: f64, end_angle: f64, ccw: bool) -> Result<Self> {
        if !start_angle.is_finite() {
            return Err(GeometryError::NonFinite { parameter: "start_angle" }.into());
        }
        if !end_angle.is_finite() {
            return Err(GeometryError::NonFinite { parameter: "end_angle" }.into());
        }

        let start_angle = symmetric_remainder(start_angle);
        let end_angle = unwind(end_angle, start_angle, ccw);
        debug!(start_angle, end_angle, ccw, "arc segment from angles");

        Ok(Self {
            radius: circle.radius(),
            center: *circle.center(),
            start_angle,
            end_angle,
            ccw,
        })
    }

    /// Creates an arc on `circle` that starts at the polar angle of
    /// `start_point` and runs `distance` along the circumference.
    ///
    /// `start_point` need not lie on the circle; only its direction from the
    /// center is used.
    ///
    /// # Errors
    ///
    /// Returns an error if `distance` is negative or any input is non-finite.
    pub fn from_arc_length(
        circle: &Circle,
        start_point: &Point2,
        distance: f64,
        ccw: bool,
    ) -> Result<Self> {
        validate_point("start_point", start_point)?;
        if !distance.is_finite() {
            return Err(GeometryError::NonFinite { parameter: "distance" }.into());
        }
        if distance < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "distance",
                value: distance,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }

        let radius = circle.radius();
        let center = *circle.center();
        let start_angle = symmetric_remainder(polar_angle(&center, start_point));
        // s = r·θ
        let sweep = distance / radius;
        let end_angle = if ccw {
            start_angle + sweep
        } else {
            start_angle - sweep
        };
        debug!(radius, distance, start_angle, end_angle, ccw, "arc segment from arc length");

        Ok(Self {
            radius,
            center,
            start_angle,
            end_angle,
            ccw,
        })
    }

    /// Creates an arc of the given radius and center that starts at
    /// `start_point` and runs `distance` along the circumference.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive, `distance`
    /// is negative, or any input is non-finite.
    pub fn new(
        radius: f64,
        center: Point2,
        start_point: &Point2,
        distance: f64,
        ccw: bool,
    ) -> Result<Self> {
        let circle = Circle::new(radius, center)?;
        Self::from_arc_length(&circle, start_point, distance, ccw)
    }

    /// Creates an arc between the polar angles of two points.
    ///
    /// Identical start and end directions produce a zero-length arc, never a
    /// full turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not strictly positive or any input
    /// is non-finite.
    pub fn from_points(
        radius: f64,
        center: Point2,
        start_point: &Point2,
        end_point: &Point2,
        ccw: bool,
    ) -> Result<Self> {
        validate_radius(radius)?;
        validate_point("center", &center)?;
        validate_point("start_point", start_point)?;
        validate_point("end_point", end_point)?;

        // Both ends share the (-π, π] range so equal directions stay equal
        // when a `-0.0` offset puts atan2 at -π.
        let start_angle = symmetric_remainder(polar_angle(&center, start_point));
        let end_angle = symmetric_remainder(polar_angle(&center, end_point));
        let end_angle = unwind(end_angle, start_angle, ccw);
        debug!(radius, start_angle, end_angle, ccw, "arc segment from points");

        Ok(Self {
            radius,
            center,
            start_angle,
            end_angle,
            ccw,
        })
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the start angle, in `(-π, π]`.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the end angle, unwound onto the travel side of the start angle.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Returns whether the arc travels counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.ccw
    }

    /// Returns the full circle the arc lies on.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::from_parts(self.radius, self.center)
    }

    /// Returns the swept angle, `|end_angle - start_angle|`.
    #[must_use]
    pub fn angular_length(&self) -> f64 {
        (self.end_angle - self.start_angle).abs()
    }

    /// Returns the arc length, `radius * angular_length`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.angular_length()
    }

    /// Returns whether the arc sweeps no angle at all.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.start_angle == self.end_angle
    }

    /// Returns the point on the underlying circle at polar angle `angle`.
    #[must_use]
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        self.center + unit_vector(angle) * self.radius
    }

    /// Returns the first point of the arc.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.point_at_angle(self.start_angle)
    }

    /// Returns the last point of the arc.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.point_at_angle(self.end_angle)
    }

    /// Returns whether `angle` falls inside the closed angular domain of the
    /// arc, in travel order.
    #[must_use]
    pub fn contains_angle(&self, angle: f64) -> bool {
        let angle = unwind(angle, self.start_angle, self.ccw);
        if self.ccw {
            angle <= self.end_angle
        } else {
            angle >= self.end_angle
        }
    }

    /// Polar angle of `point`, unwound onto the travel side of the start.
    fn travel_angle(&self, point: &Point2) -> f64 {
        unwind(polar_angle(&self.center, point), self.start_angle, self.ccw)
    }

    /// Intersects the arc with a bounded segment.
    ///
    /// Keeps the crossings of the full circle whose angle lies in
    /// `[start_angle, end_angle)` in travel order, preserving their order
    /// along the segment.
    #[must_use]
    pub fn intersect(&self, segment: &LineSegment) -> Vec<LineIntersection> {
        self.circle()
            .intersect(segment)
            .into_iter()
            .filter(|hit| {
                let theta = self.travel_angle(&hit.point);
                if self.ccw {
                    theta < self.end_angle
                } else {
                    theta > self.end_angle
                }
            })
            .collect()
    }

    /// Returns whether the segment crosses the arc.
    #[must_use]
    pub fn intersects(&self, segment: &LineSegment) -> bool {
        !self.intersect(segment).is_empty()
    }

    /// Returns only the points of [`CircleSegment::intersect`].
    #[must_use]
    pub fn intersection_points(&self, segment: &LineSegment) -> Vec<Point2> {
        self.intersect(segment).into_iter().map(|hit| hit.point).collect()
    }

    /// Returns the angle of the point on the arc closest to `point`.
    ///
    /// Inside the arc's span this is the polar angle of `point` itself.
    /// Outside it, the result snaps to whichever end is nearer; the switch
    /// happens at the middle of the excluded part of the circle, with ties
    /// going to the end angle.
    #[must_use]
    pub fn closest_angle(&self, point: &Point2) -> f64 {
        let angle = self.travel_angle(point);
        let mid = (self.start_angle + self.end_angle) / 2.0;

        let snap_to_start = if self.ccw {
            if angle <= self.end_angle {
                return angle;
            }
            angle > mid + PI
        } else {
            if angle >= self.end_angle {
                return angle;
            }
            angle < mid - PI
        };

        debug!(angle, snap_to_start, "closest angle outside arc span");
        if snap_to_start {
            self.start_angle
        } else {
            self.end_angle
        }
    }

    /// Returns the point on the arc closest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: &Point2) -> Point2 {
        self.point_at_angle(self.closest_angle(point))
    }

    /// Signed distance along the travel direction from the start of the arc
    /// to the radial projection of `point`.
    ///
    /// Not clamped to the arc: a point past the end measures more than
    /// [`CircleSegment::length`].
    #[must_use]
    pub fn dist_from_start(&self, point: &Point2) -> f64 {
        let angle = self.travel_angle(point);
        if self.ccw {
            (angle - self.start_angle) * self.radius
        } else {
            (self.start_angle - angle) * self.radius
        }
    }

    /// Samples `count` points evenly spaced in angle, both ends included.
    ///
    /// # Errors
    ///
    /// Returns an error if `count < 2`.
    pub fn to_points(&self, count: usize) -> Result<Vec<Point2>> {
        if count < 2 {
            return Err(GeometryError::InvalidSampleCount { count }.into());
        }

        #[allow(clippy::cast_precision_loss)]
        let delta = (self.end_angle - self.start_angle) / (count - 1) as f64;

        #[allow(clippy::cast_precision_loss)]
        let points = (0..count)
            .map(|i| self.point_at_angle(self.start_angle + delta * i as f64))
            .collect();
        Ok(points)
    }

    /// Maps the arc through `transform`.
    ///
    /// The center and both end points are transformed and the arc is refitted
    /// with the same radius. The travel direction is kept for
    /// orientation-preserving transforms and flipped for reflections, so a
    /// mirrored arc covers the mirrored points rather than the complementary
    /// part of the circle.
    ///
    /// The radius is not re-derived, so the result is only consistent for
    /// distance-preserving transforms (rotations, translations, reflections);
    /// [`CircleSegment::try_transform`] rejects anything else.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform produces non-finite points.
    pub fn transform<T: PointTransform + ?Sized>(&self, transform: &T) -> Result<Self> {
        let (center, start, end) = self.transformed_frame(transform);
        let ccw = self.transformed_direction(transform);
        Self::from_points(self.radius, center, &start, &end, ccw)
    }

    /// Like [`CircleSegment::transform`], but fails if the transformed end
    /// points no longer lie on a circle of the original radius around the
    /// transformed center.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonRigid`] for a non-rigid transform, or a
    /// geometry error if the transform produces non-finite points.
    pub fn try_transform<T: PointTransform + ?Sized>(&self, transform: &T) -> Result<Self> {
        let (center, start, end) = self.transformed_frame(transform);
        let deviation = ((start - center).norm() - self.radius)
            .abs()
            .max(((end - center).norm() - self.radius).abs());
        if deviation.is_nan() || deviation > TOLERANCE * self.radius.max(1.0) {
            warn!(deviation, radius = self.radius, "rejected non-rigid arc transform");
            return Err(TransformError::NonRigid { deviation }.into());
        }
        let ccw = self.transformed_direction(transform);
        Self::from_points(self.radius, center, &start, &end, ccw)
    }

    /// Travel direction of the image arc: the sign of
    /// `cross(T(c + r·x̂) - T(c), T(c + r·ŷ) - T(c))` tells whether `transform`
    /// keeps or reverses orientation around the center.
    fn transformed_direction<T: PointTransform + ?Sized>(&self, transform: &T) -> bool {
        let origin = transform.transform_point(&self.center);
        let ex = transform.transform_point(&(self.center + Vector2::x() * self.radius)) - origin;
        let ey = transform.transform_point(&(self.center + Vector2::y() * self.radius)) - origin;
        let orientation = ex.perp(&ey);
        if orientation < 0.0 {
            debug!(orientation, "reflecting transform flips arc direction");
            !self.ccw
        } else {
            self.ccw
        }
    }

    fn transformed_frame<T: PointTransform + ?Sized>(&self, transform: &T) -> (Point2, Point2, Point2) {
        (
            transform.transform_point(&self.center),
            transform.transform_point(&self.start_point()),
            transform.transform_point(&self.end_point()),
        )
    }

    /// Returns the same arc travelled from its end back to its start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let sweep = self.end_angle - self.start_angle;
        let start_angle = symmetric_remainder(self.end_angle);
        Self {
            radius: self.radius,
            center: self.center,
            start_angle,
            end_angle: start_angle - sweep,
            ccw: !self.ccw,
        }
    }

    /// Compares two arcs as directed point sets, within [`TOLERANCE`].
    ///
    /// Unlike `==`, start angles are compared modulo a full turn.
    #[must_use]
    pub fn same_geometry(&self, other: &Self) -> bool {
        self.ccw == other.ccw
            && (self.radius - other.radius).abs() < TOLERANCE
            && (self.center - other.center).norm() < TOLERANCE
            && (self.angular_length() - other.angular_length()).abs() < TOLERANCE
            && symmetric_remainder(self.start_angle - other.start_angle).abs() < TOLERANCE
    }
}

impl PartialEq for CircleSegment {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.radius == other.radius
            && self.center == other.center
            && self.start_angle == other.start_angle
            && self.end_angle == other.end_angle
            && self.ccw == other.ccw
    }
}

// Constructors reject NaN, so field-wise float equality is reflexive.
impl Eq for CircleSegment {}

impl Hash for CircleSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let center = float_bits(self.center.x) ^ float_bits(self.center.y).rotate_left(32);
        state.write_u64(
            float_bits(self.radius)
                ^ center
                ^ float_bits(self.start_angle)
                ^ float_bits(self.end_angle)
                ^ u64::from(self.ccw),
        );
    }
}

/// Bit pattern of `x` with both zeros folded together, matching `==`.
fn float_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}
