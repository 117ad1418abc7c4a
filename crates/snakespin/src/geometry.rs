/// Side length of the square coordinate space everything is drawn in.
pub const VIEWBOX_SIZE: f64 = 50.0;
pub const CENTER: Point = Point { x: 25.0, y: 25.0 };
pub const ARC_RADIUS: f64 = 20.0;
/// 90% of a full turn.
pub const MAX_END_ANGLE: f64 = 324.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on the circle of `radius` around `center` at `degrees`,
    /// measured clockwise from the positive x axis (y grows downwards).
    pub fn on_circle(center: Point, radius: f64, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        Self::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// End angle of the body for a given arc fraction, capped at [`MAX_END_ANGLE`].
pub fn end_angle(current_length: f64) -> f64 {
    (current_length * 360.0).min(MAX_END_ANGLE)
}

/// A circular arc around [`CENTER`], swept clockwise from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub radius: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

impl Arc {
    pub fn new(radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            radius,
            start: Point::on_circle(CENTER, radius, start_angle),
            end: Point::on_circle(CENTER, radius, end_angle),
            large_arc: end_angle - start_angle > 180.0,
        }
    }

    /// SVG path data (`M … A …`) for this arc.
    pub fn path(&self) -> String {
        format!(
            "M {} {} A {} {} 0 {} 1 {} {}",
            self.start.x,
            self.start.y,
            self.radius,
            self.radius,
            u8::from(self.large_arc),
            self.end.x,
            self.end.y
        )
    }
}
