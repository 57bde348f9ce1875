//! Point transform providers.
//!
//! An arc segment is mapped by transforming three points (center, start,
//! end) and refitting, so any type that maps points can drive it. The
//! radius is carried over unchanged: only rigid motions keep the result
//! consistent. [`CircleSegment::try_transform`](crate::CircleSegment::try_transform)
//! checks this.
use nalgebra::{Affine2, Isometry2, Rotation2, Similarity2, Translation2};

use crate::math::Point2;

/// Maps points of the plane to points of the plane.
pub trait PointTransform {
    /// Returns the image of `point`.
    fn transform_point(&self, point: &Point2) -> Point2;
}

impl PointTransform for Isometry2<f64> {
    fn transform_point(&self, point: &Point2) -> Point2 {
        Isometry2::transform_point(self, point)
    }
}

impl PointTransform for Similarity2<f64> {
    fn transform_point(&self, point: &Point2) -> Point2 {
        Similarity2::transform_point(self, point)
    }
}

impl PointTransform for Rotation2<f64> {
    fn transform_point(&self, point: &Point2) -> Point2 {
        Rotation2::transform_point(self, point)
    }
}

impl PointTransform for Translation2<f64> {
    fn transform_point(&self, point: &Point2) -> Point2 {
        Translation2::transform_point(self, point)
    }
}

impl PointTransform for Affine2<f64> {
    fn transform_point(&self, point: &Point2) -> Point2 {
        Affine2::transform_point(self, point)
    }
}

/// Adapts a closure into a [`PointTransform`].
#[derive(Debug, Clone, Copy)]
pub struct FnTransform<F>(pub F);

impl<F> PointTransform for FnTransform<F>
where
    F: Fn(&Point2) -> Point2,
{
    fn transform_point(&self, point: &Point2) -> Point2 {
        (self.0)(point)
    }
}
