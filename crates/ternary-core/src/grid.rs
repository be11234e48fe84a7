// File: crates/ternary-core/src/grid.rs
// Summary: Outer triangle, fixed 0.2-step gridlines, and tick layout helpers.

use crate::geometry::Segment;

/// Apex height used for the outer triangle (sqrt(3)/2 rounded to 7 places).
pub const APEX_Y: f64 = 0.8660254;

/// Gridline fractions paired with their complements, in drawing order.
const STEPS: [(f64, f64); 4] = [
    (4.0 / 5.0, 1.0 / 5.0),
    (3.0 / 5.0, 2.0 / 5.0),
    (2.0 / 5.0, 3.0 / 5.0),
    (1.0 / 5.0, 4.0 / 5.0),
];

/// Outer triangle: base, left edge, right edge.
pub fn boundary() -> [Segment; 3] {
    [
        Segment::new((0.0, 0.0), (1.0, 0.0)),
        Segment::new((0.0, 0.0), (0.5, APEX_Y)),
        Segment::new((0.5, APEX_Y), (1.0, 0.0)),
    ]
}

/// Internal gridlines every 0.2 along each of the three directions.
///
/// Order: constant upper (parallel to the base), constant left (parallel to
/// the right edge), constant right (parallel to the left edge); each group
/// runs 4/5, 3/5, 2/5, 1/5.
pub fn gridlines() -> Vec<Segment> {
    let mut out = Vec::with_capacity(3 * STEPS.len());
    out.extend(STEPS.iter().map(|&(k, rest)| Segment::from_ternary((k, 0.0, rest), (k, rest, 0.0))));
    out.extend(STEPS.iter().map(|&(k, rest)| Segment::from_ternary((0.0, rest, k), (rest, 0.0, k))));
    out.extend(STEPS.iter().map(|&(k, rest)| Segment::from_ternary((0.0, k, rest), (rest, k, 0.0))));
    out
}

/// `steps` evenly spaced values from `start` to `end` inclusive; frame ticks
/// are placed with it. Fewer than two steps yields just the two endpoints.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}
