//! Directed circular-arc segments.
//!
//! A [`CircleSegment`] is a bounded, directed piece of a circle. Its queries
//! (segment intersection, closest point, distance along the arc) are
//! restricted to the arc's angular domain rather than the full circle.
//!
//! ```
//! use std::f64::consts::FRAC_PI_2;
//! use arcseg::{Circle, CircleSegment, Point2};
//!
//! let circle = Circle::new(1.0, Point2::origin())?;
//! let arc = CircleSegment::from_angles(&circle, 0.0, FRAC_PI_2, true)?;
//! assert!((arc.length() - FRAC_PI_2).abs() < 1e-12);
//!
//! let closest = arc.closest_point(&Point2::new(0.0, -1.0));
//! assert!((closest - Point2::new(1.0, 0.0)).norm() < 1e-12);
//! # Ok::<(), arcseg::ArcsegError>(())
//! ```
pub mod error;
pub mod geometry;
mod log;
pub mod math;
pub mod transform;

pub use error::{ArcsegError, GeometryError, Result, TransformError};
pub use geometry::{Circle, CircleSegment, LineIntersection, LineSegment};
pub use math::{Point2, Vector2};
pub use transform::{FnTransform, PointTransform};
