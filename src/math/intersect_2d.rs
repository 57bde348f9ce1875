use super::{Point2, TOLERANCE};

/// Intersection of a bounded line segment with a full circle in 2D.
///
/// The segment runs from `a` to `b`; the circle has `center` and `radius`.
///
/// Returns `(point, k)` pairs ordered by increasing `k`, where `k` is the
/// segment parameter in `[0, 1]`. A tangent contact yields a single pair, a
/// zero-length segment yields none.
#[must_use]
pub fn circle_segment_intersect_2d(
    center: &Point2,
    radius: f64,
    a: &Point2,
    b: &Point2,
) -> Vec<(Point2, f64)> {
    let mut results = Vec::new();

    let d = b - a;
    let seg_len_sq = d.norm_squared();
    if seg_len_sq < TOLERANCE * TOLERANCE {
        return results;
    }

    // Substitute the parametric segment into the circle equation:
    // |a + k*d - center|² = r²
    let f = a - center;
    let qa = seg_len_sq;
    let qb = 2.0 * f.dot(&d);
    let qc = f.norm_squared() - radius * radius;
    let discriminant = qb * qb - 4.0 * qa * qc;

    if discriminant < -TOLERANCE {
        return results;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let roots = if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent case: single root.
        vec![-qb / (2.0 * qa)]
    } else {
        vec![(-qb - disc_sqrt) / (2.0 * qa), (-qb + disc_sqrt) / (2.0 * qa)]
    };

    for k in roots {
        if k < -TOLERANCE || k > 1.0 + TOLERANCE {
            continue;
        }
        let k = k.clamp(0.0, 1.0);
        results.push((a + d * k, k));
    }

    results
}
