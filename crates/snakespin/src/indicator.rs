use crate::animation::AnimationState;
use crate::frame::Frame;
use crate::params::Params;
use crate::svg;

/// The loading indicator: its parameters plus the animation they drive.
///
/// Hosts call [`Indicator::tick`] every [`TICK_INTERVAL`](crate::animation::TICK_INTERVAL)
/// and [`Indicator::set_params`] whenever the user changes a setting.
#[derive(Debug, Clone)]
pub struct Indicator {
    params: Params,
    state: AnimationState,
}

impl Indicator {
    pub fn new(params: Params) -> Self {
        let state = AnimationState::new(params.length);
        Self { params, state }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Replaces the parameters. A different target length restarts the
    /// extend/retract cycle; returns whether that happened.
    pub fn set_params(&mut self, params: Params) -> bool {
        let length_changed = params.length != self.params.length;
        if length_changed {
            log::debug!(
                "target length {} -> {}, resetting animation",
                self.params.length,
                params.length
            );
            self.state.reset(params.length);
        }
        self.params = params;
        length_changed
    }

    pub fn tick(&mut self) {
        self.state.tick(&self.params);
    }

    pub fn frame(&self) -> Frame {
        Frame::compute(&self.state, &self.params)
    }

    pub fn to_svg(&self) -> String {
        svg::render(&self.frame(), &self.params)
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{MAX_OSCILLATION_LENGTH, Phase};
    use crate::params::{Color, Pattern};

    fn with_length(length: f64) -> Params {
        Params {
            length,
            ..Params::default()
        }
    }

    #[test]
    fn test_length_change_resets_state() {
        let mut indicator = Indicator::new(with_length(0.5));
        while indicator.state().phase == Phase::Extending {
            indicator.tick();
        }
        assert_eq!(indicator.state().current_length, MAX_OSCILLATION_LENGTH);

        assert!(indicator.set_params(with_length(0.3)));
        let state = indicator.state();
        assert_eq!(state.current_length, 0.3);
        assert_eq!(state.start_offset, 0.0);
        assert_eq!(state.phase, Phase::Extending);
    }

    #[test]
    fn test_other_changes_keep_state() {
        let mut indicator = Indicator::new(with_length(0.5));
        for _ in 0..10 {
            indicator.tick();
        }
        let before = *indicator.state();

        let params = Params {
            speed: 3.0,
            pattern: Pattern::Zigzag,
            color: Color::new(0, 0, 0),
            size: 240.0,
            ..with_length(0.5)
        };
        assert!(!indicator.set_params(params));
        assert_eq!(*indicator.state(), before);
    }

    #[test]
    fn test_scenario_static_long_arc() {
        let mut indicator = Indicator::new(with_length(0.8));
        for _ in 0..300 {
            indicator.tick();
            let frame = indicator.frame();
            assert!((frame.sweep() - 288.0).abs() < 1e-9);
            assert_eq!(indicator.state().phase, Phase::Extending);
        }
    }

    #[test]
    fn test_scenario_oscillating_short_arc() {
        let mut indicator = Indicator::new(with_length(0.5));
        let mut phase_changes = 0;
        let mut last_phase = indicator.state().phase;
        let mut last_rotation = indicator.state().rotation;

        for _ in 0..400 {
            indicator.tick();
            let state = indicator.state();
            assert_eq!((state.rotation - last_rotation).rem_euclid(360.0), 2.0);
            assert!(state.current_length >= 0.5 && state.current_length <= 0.7);
            if state.phase != last_phase {
                phase_changes += 1;
            }
            last_phase = state.phase;
            last_rotation = state.rotation;
        }
        // one extend + retract cycle is roughly 70 ticks
        assert!(phase_changes >= 8, "only {phase_changes} phase changes");
    }
}
