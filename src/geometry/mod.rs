mod arc_segment;
mod circle;
mod line_segment;

pub use arc_segment::CircleSegment;
pub use circle::{Circle, LineIntersection};
pub use line_segment::LineSegment;
