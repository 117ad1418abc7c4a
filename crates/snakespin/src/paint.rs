use crate::frame::Frame;
use crate::geometry::{CENTER, Point};
use crate::params::{Color, IndicatorKind, Params};
use crate::pattern::{MARKER_OPACITY, Marker, ZIGZAG_STROKE_WIDTH};
use cairo::{Context, LineCap, LinearGradient};
use std::f64::consts::PI;

const BODY_STROKE_WIDTH: f64 = 4.0;
const TAIL_RADIUS: f64 = 2.0;
const HEAD_RADIUS: f64 = 3.0;
const EYE_RADIUS: f64 = 0.8;
const GRADIENT_STOPS: [(f64, f64); 3] = [(0.0, 1.0), (0.5, 0.8), (1.0, 0.6)];

/// Draws a frame in view box coordinates (0..50 on both axes).
///
/// Callers scale the context to the target size first.
pub fn paint(cr: &Context, frame: &Frame, params: &Params) -> Result<(), cairo::Error> {
    match params.kind {
        IndicatorKind::Spinner => SpinnerPainter::new(cr, frame, params.color).paint(),
    }
}

struct SpinnerPainter<'a> {
    cr: &'a Context,
    frame: &'a Frame,
    color: Color,
}

impl<'a> SpinnerPainter<'a> {
    fn new(cr: &'a Context, frame: &'a Frame, color: Color) -> Self {
        Self { cr, frame, color }
    }

    fn paint(&self) -> Result<(), cairo::Error> {
        self.cr.save()?;
        rotate_about(self.cr, CENTER, self.frame.rotation);

        self.draw_body()?;
        for marker in &self.frame.markers {
            self.draw_marker(marker)?;
        }
        self.draw_tail()?;
        self.draw_head()?;

        self.cr.restore()
    }

    fn set_color(&self, alpha: f64) {
        let (r, g, b) = self.color.components();
        self.cr.set_source_rgba(r, g, b, alpha);
    }

    fn draw_body(&self) -> Result<(), cairo::Error> {
        // cairo would wrap an inverted arc around the full circle
        if self.frame.sweep() <= 0.0 {
            return Ok(());
        }

        let cr = self.cr;
        cr.new_path();
        cr.arc(
            CENTER.x,
            CENTER.y,
            self.frame.arc.radius,
            self.frame.start_angle.to_radians(),
            self.frame.end_angle.to_radians(),
        );

        // horizontal gradient across the body's bounding box
        let (x1, _, x2, _) = cr.path_extents()?;
        let gradient = LinearGradient::new(x1, 0.0, x2, 0.0);
        let (r, g, b) = self.color.components();
        for (offset, alpha) in GRADIENT_STOPS {
            gradient.add_color_stop_rgba(offset, r, g, b, alpha);
        }

        cr.set_source(&gradient)?;
        cr.set_line_width(BODY_STROKE_WIDTH);
        cr.set_line_cap(LineCap::Round);
        cr.stroke()
    }

    fn draw_marker(&self, marker: &Marker) -> Result<(), cairo::Error> {
        let cr = self.cr;
        self.set_color(MARKER_OPACITY);

        match *marker {
            Marker::Scale { at, rotation } => {
                cr.save()?;
                rotate_about(cr, at, rotation);
                cr.move_to(at.x, at.y);
                cr.rel_line_to(-2.0, 2.0);
                cr.rel_line_to(2.0, 2.0);
                cr.rel_line_to(2.0, -2.0);
                cr.close_path();
                cr.fill()?;
                cr.restore()
            }
            Marker::Dot { at, radius } => {
                cr.new_sub_path();
                cr.arc(at.x, at.y, radius, 0.0, 2.0 * PI);
                cr.fill()
            }
            Marker::Segment { from, to } => {
                cr.move_to(from.x, from.y);
                cr.line_to(to.x, to.y);
                cr.set_line_width(ZIGZAG_STROKE_WIDTH);
                cr.set_line_cap(LineCap::Butt);
                cr.stroke()
            }
        }
    }

    fn draw_tail(&self) -> Result<(), cairo::Error> {
        self.set_color(MARKER_OPACITY);
        fill_circle(self.cr, self.frame.arc.start, TAIL_RADIUS)
    }

    fn draw_head(&self) -> Result<(), cairo::Error> {
        let cr = self.cr;
        let head = self.frame.arc.end;

        cr.save()?;
        rotate_about(cr, head, self.frame.sweep());

        self.set_color(1.0);
        fill_circle(cr, head, HEAD_RADIUS)?;

        cr.set_source_rgb(1.0, 1.0, 1.0);
        fill_circle(cr, head.offset(-1.0, -1.0), EYE_RADIUS)?;
        fill_circle(cr, head.offset(1.0, -1.0), EYE_RADIUS)?;

        cr.restore()
    }
}

fn rotate_about(cr: &Context, pivot: Point, degrees: f64) {
    cr.translate(pivot.x, pivot.y);
    cr.rotate(degrees.to_radians());
    cr.translate(-pivot.x, -pivot.y);
}

fn fill_circle(cr: &Context, center: Point, radius: f64) -> Result<(), cairo::Error> {
    cr.new_sub_path();
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    cr.fill()
}
