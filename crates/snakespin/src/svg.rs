use crate::frame::Frame;
use crate::geometry::VIEWBOX_SIZE;
use crate::params::{Color, IndicatorKind, Params};
use crate::pattern::{MARKER_OPACITY, Marker, ZIGZAG_STROKE_WIDTH};
use std::fmt;

const GRADIENT_ID: &str = "spinnerGradient";
const BODY_STROKE_WIDTH: f64 = 4.0;
const TAIL_RADIUS: f64 = 2.0;
const HEAD_RADIUS: f64 = 3.0;
const EYE_RADIUS: f64 = 0.8;

/// Serializes a frame to a standalone SVG document.
pub fn render(frame: &Frame, params: &Params) -> String {
    Svg { frame, params }.to_string()
}

struct Svg<'a> {
    frame: &'a Frame,
    params: &'a Params,
}

impl fmt::Display for Svg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.params.kind {
            IndicatorKind::Spinner => self.spinner(f),
        }
    }
}

impl Svg<'_> {
    fn spinner(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Frame { rotation, arc, .. } = self.frame;
        let color = self.params.color;
        let size = self.params.size;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {VIEWBOX_SIZE} {VIEWBOX_SIZE}" style="transform: rotate({rotation}deg)">"#
        )?;
        writeln!(f, "  <defs>")?;
        writeln!(
            f,
            r#"    <linearGradient id="{GRADIENT_ID}" gradientTransform="rotate(0)">"#
        )?;
        for (offset, opacity) in [(0, 1.0), (50, 0.8), (100, 0.6)] {
            writeln!(
                f,
                r#"      <stop offset="{offset}%" stop-color="{color}" stop-opacity="{opacity}"/>"#
            )?;
        }
        writeln!(f, "    </linearGradient>")?;
        writeln!(f, "  </defs>")?;

        writeln!(
            f,
            r#"  <path d="{}" fill="none" stroke-width="{BODY_STROKE_WIDTH}" stroke="url(#{GRADIENT_ID})" stroke-linecap="round"/>"#,
            arc.path()
        )?;

        for marker in &self.frame.markers {
            write_marker(f, marker, color)?;
        }

        writeln!(
            f,
            r#"  <circle cx="{}" cy="{}" r="{TAIL_RADIUS}" fill="{color}" opacity="{MARKER_OPACITY}"/>"#,
            arc.start.x, arc.start.y
        )?;

        let head = arc.end;
        writeln!(
            f,
            r#"  <g transform="rotate({}, {}, {})">"#,
            self.frame.sweep(),
            head.x,
            head.y
        )?;
        writeln!(
            f,
            r#"    <circle cx="{}" cy="{}" r="{HEAD_RADIUS}" fill="{color}"/>"#,
            head.x, head.y
        )?;
        for dx in [-1.0, 1.0] {
            writeln!(
                f,
                r#"    <circle cx="{}" cy="{}" r="{EYE_RADIUS}" fill="white"/>"#,
                head.x + dx,
                head.y - 1.0
            )?;
        }
        writeln!(f, "  </g>")?;
        writeln!(f, "</svg>")
    }
}

fn write_marker(f: &mut fmt::Formatter<'_>, marker: &Marker, color: Color) -> fmt::Result {
    match marker {
        Marker::Scale { at, rotation } => writeln!(
            f,
            r#"  <path d="M {x} {y} l -2 2 l 2 2 l 2 -2 z" fill="{color}" opacity="{MARKER_OPACITY}" transform="rotate({rotation}, {x}, {y})"/>"#,
            x = at.x,
            y = at.y
        ),
        Marker::Dot { at, radius } => writeln!(
            f,
            r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{color}" opacity="{MARKER_OPACITY}"/>"#,
            at.x, at.y
        ),
        Marker::Segment { from, to } => writeln!(
            f,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{ZIGZAG_STROKE_WIDTH}" opacity="{MARKER_OPACITY}"/>"#,
            from.x, from.y, to.x, to.y
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::Indicator;
    use crate::params::Pattern;

    fn svg_for(pattern: Pattern) -> String {
        Indicator::new(Params {
            pattern,
            ..Params::default()
        })
        .to_svg()
    }

    #[test]
    fn test_document_shape() {
        let svg = svg_for(Pattern::Scales);
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"width="60" height="60""#));
        assert!(svg.contains(r#"viewBox="0 0 50 50""#));
        assert!(svg.contains("rotate(0deg)"));
        assert!(svg.contains(r##"stop-color="#10b981""##));
        assert!(svg.contains(r#"stroke="url(#spinnerGradient)""#));
        // body arc starts at angle zero and sweeps past 180 degrees
        assert!(svg.contains(r#"d="M 45 25 A 20 20 0 1 1 "#));
    }

    #[test]
    fn test_dots_render_as_faded_unit_circles() {
        let svg = svg_for(Pattern::Dots);
        let dots = svg
            .lines()
            .filter(|l| l.contains(r#"r="1""#))
            .collect::<Vec<_>>();
        assert_eq!(dots.len(), 12);
        for dot in dots {
            assert!(dot.trim_start().starts_with("<circle"));
            assert!(dot.contains(r#"opacity="0.6""#));
        }
    }

    #[test]
    fn test_zigzag_renders_lines() {
        let svg = svg_for(Pattern::Zigzag);
        assert_eq!(svg.matches("<line ").count(), 6);
        assert!(!svg.contains("l -2 2"));
    }

    #[test]
    fn test_head_has_two_eyes() {
        let svg = svg_for(Pattern::Scales);
        assert_eq!(svg.matches(r#"fill="white""#).count(), 2);
        assert!(svg.contains(r#"r="3""#));
        assert!(svg.contains(r#"r="2""#));
    }
}
