use crate::geometry::{ARC_RADIUS, CENTER, Point};
use crate::params::Pattern;
use std::f64::consts::PI;

/// Arc length (view box units) reserved for each marker.
pub const MARKER_SPACING: f64 = 8.0;
pub const MARKER_OPACITY: f64 = 0.6;
pub const DOT_RADIUS: f64 = 1.0;
pub const ZIGZAG_STROKE_WIDTH: f64 = 1.0;
pub const SCALE_BASE_ROTATION: f64 = 45.0;

const CIRCUMFERENCE: f64 = 2.0 * PI * ARC_RADIUS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// Diamond `l -2 2 l 2 2 l 2 -2 z` anchored at `at`, rotated `rotation` degrees about it.
    Scale { at: Point, rotation: f64 },
    /// Filled circle.
    Dot { at: Point, radius: f64 },
    /// Short diagonal stroke.
    Segment { from: Point, to: Point },
}

/// Number of marker slots for a sweep in degrees. Zero for an empty or inverted sweep.
pub fn marker_count(sweep: f64) -> usize {
    if sweep <= 0.0 {
        return 0;
    }
    ((sweep / 360.0) * CIRCUMFERENCE / MARKER_SPACING).floor() as usize
}

/// Places markers evenly along the arc from `start` to `end` (degrees).
///
/// Zigzag only fills every other slot, so it yields roughly half as many
/// markers as the other patterns for the same sweep.
pub fn place(pattern: Pattern, start: f64, end: f64) -> Vec<Marker> {
    let sweep = end - start;
    let count = marker_count(sweep);

    (0..count)
        .filter_map(|i| {
            let progress = i as f64 / count as f64;
            let at = Point::on_circle(CENTER, ARC_RADIUS, start + progress * sweep);

            match pattern {
                Pattern::Scales => Some(Marker::Scale {
                    at,
                    rotation: SCALE_BASE_ROTATION + progress * sweep,
                }),
                Pattern::Dots => Some(Marker::Dot {
                    at,
                    radius: DOT_RADIUS,
                }),
                Pattern::Zigzag => (i % 2 == 0).then(|| Marker::Segment {
                    from: at,
                    to: at.offset(2.0, 2.0),
                }),
            }
        })
        .collect()
}
