use crate::animation::AnimationState;
use crate::geometry::{ARC_RADIUS, Arc, end_angle};
use crate::params::Params;
use crate::pattern::{self, Marker};

/// Geometry of one rendered frame, derived from the animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Rotation of the whole picture about the view box centre, in degrees.
    pub rotation: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub arc: Arc,
    pub markers: Vec<Marker>,
}

impl Frame {
    pub fn compute(state: &AnimationState, params: &Params) -> Self {
        let start_angle = state.start_offset;
        let end_angle = end_angle(state.current_length);

        Self {
            rotation: state.rotation,
            start_angle,
            end_angle,
            arc: Arc::new(ARC_RADIUS, start_angle, end_angle),
            markers: pattern::place(params.pattern, start_angle, end_angle),
        }
    }

    /// Angular extent of the body in degrees.
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::MAX_END_ANGLE;
    use crate::params::Pattern;

    #[test]
    fn test_static_frame_for_long_arc() {
        let params = Params::default();
        let state = AnimationState::new(params.length);
        let frame = Frame::compute(&state, &params);

        assert_eq!(frame.start_angle, 0.0);
        assert!((frame.sweep() - 288.0).abs() < 1e-9);
        assert!(frame.arc.large_arc);
        assert_eq!(frame.markers.len(), 12);
    }

    #[test]
    fn test_sweep_never_exceeds_cap() {
        for length in [0.0, 0.3, 0.7, 0.85, 0.9, 1.2, 4.0] {
            let params = Params {
                length,
                ..Params::default()
            };
            let mut state = AnimationState::new(length);
            for _ in 0..200 {
                state.tick(&params);
                let frame = Frame::compute(&state, &params);
                assert!(frame.sweep() <= MAX_END_ANGLE);
            }
        }
    }

    #[test]
    fn test_retracting_frame_keeps_head() {
        let params = Params {
            length: 0.5,
            pattern: Pattern::Dots,
            ..Params::default()
        };
        let mut state = AnimationState::new(0.5);
        while state.start_offset == 0.0 {
            state.tick(&params);
        }
        let first = Frame::compute(&state, &params);
        state.tick(&params);
        let second = Frame::compute(&state, &params);

        assert_eq!(first.end_angle, second.end_angle);
        assert!(second.start_angle > first.start_angle);
        assert!(second.sweep() < first.sweep());
    }
}
