use crate::params::Params;
use std::time::Duration;
use strum::Display as StrumDisplay;

/// Interval between two [`AnimationState::tick`] calls.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);
/// Above this target length the arc is static; at or below it the arc oscillates.
pub const MAX_OSCILLATION_LENGTH: f64 = 0.7;
/// Arc fraction added per tick while extending.
pub const EXTEND_STEP: f64 = 0.01;
/// The tail covers the retraction distance in this many ticks.
pub const RETRACT_STEPS: f64 = 50.0;
/// Degrees of rotation per tick at speed 1.
pub const ROTATION_STEP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// The head moves forward, the arc grows towards the maximum.
    #[default]
    Extending,
    /// The head holds still while the tail catches up.
    Retracting,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Degrees, always in `[0, 360)`.
    pub rotation: f64,
    /// Arc fraction currently drawn, before the tail offset is applied.
    pub current_length: f64,
    /// Degrees the tail has advanced from angle zero.
    pub start_offset: f64,
    pub phase: Phase,
}

impl AnimationState {
    pub fn new(length: f64) -> Self {
        let mut state = Self {
            rotation: 0.0,
            current_length: 0.0,
            start_offset: 0.0,
            phase: Phase::Extending,
        };
        state.reset(length);
        state
    }

    /// Whether a target length produces a static arc.
    pub fn is_pinned(length: f64) -> bool {
        length > MAX_OSCILLATION_LENGTH
    }

    /// Tail distance, in degrees, covered by one retraction.
    pub fn retract_distance(length: f64) -> f64 {
        (MAX_OSCILLATION_LENGTH - length) * 360.0
    }

    /// Restarts the cycle for a new target length. Rotation carries over.
    pub fn reset(&mut self, length: f64) {
        self.current_length = if Self::is_pinned(length) {
            length
        } else {
            length.min(MAX_OSCILLATION_LENGTH)
        };
        self.start_offset = 0.0;
        self.phase = Phase::Extending;
    }

    /// Advances the animation by one tick.
    pub fn tick(&mut self, params: &Params) {
        self.rotation = (self.rotation + ROTATION_STEP * params.speed).rem_euclid(360.0);

        if Self::is_pinned(params.length) {
            self.current_length = params.length;
            self.start_offset = 0.0;
            return;
        }

        match self.phase {
            Phase::Extending => {
                let next = self.current_length + EXTEND_STEP;
                if next >= MAX_OSCILLATION_LENGTH {
                    self.current_length = MAX_OSCILLATION_LENGTH;
                    self.enter(Phase::Retracting);
                } else {
                    self.current_length = next;
                }
            }
            Phase::Retracting => {
                let distance = Self::retract_distance(params.length);
                let next = self.start_offset + distance / RETRACT_STEPS;
                if next >= distance {
                    self.start_offset = 0.0;
                    self.current_length = params.length;
                    self.enter(Phase::Extending);
                } else {
                    self.start_offset = next;
                }
            }
        }
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("animation phase {} -> {}", self.phase, phase);
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_length(length: f64, speed: f64) -> Params {
        Params {
            length,
            speed,
            ..Params::default()
        }
    }

    /// Ticks until the phase changes, returning how many ticks it took.
    fn ticks_until_phase_change(state: &mut AnimationState, params: &Params) -> usize {
        let phase = state.phase;
        let mut ticks = 0;
        while state.phase == phase {
            state.tick(params);
            ticks += 1;
            assert!(ticks < 1000, "phase never changed");
        }
        ticks
    }

    #[test]
    fn test_pinned_length_never_oscillates() {
        for length in [0.71, 0.8, 0.9] {
            let params = with_length(length, 1.0);
            let mut state = AnimationState::new(length);
            for _ in 0..500 {
                state.tick(&params);
                assert_eq!(state.current_length, length);
                assert_eq!(state.start_offset, 0.0);
                assert_eq!(state.phase, Phase::Extending);
            }
        }
    }

    #[test]
    fn test_oscillation_between_target_and_max() {
        let params = with_length(0.5, 1.0);
        let mut state = AnimationState::new(0.5);
        assert_eq!(state.current_length, 0.5);

        for _ in 0..3 {
            // extending: length grows monotonically up to the max
            let mut previous = state.current_length;
            while state.phase == Phase::Extending {
                state.tick(&params);
                assert!(state.current_length >= previous);
                assert!(state.current_length <= MAX_OSCILLATION_LENGTH);
                assert_eq!(state.start_offset, 0.0);
                previous = state.current_length;
            }
            assert_eq!(state.current_length, MAX_OSCILLATION_LENGTH);

            // retracting: tail advances monotonically, head stays put
            let mut previous = state.start_offset;
            while state.phase == Phase::Retracting {
                state.tick(&params);
                if state.phase == Phase::Retracting {
                    assert!(state.start_offset > previous);
                    assert!(state.start_offset < AnimationState::retract_distance(0.5));
                    assert_eq!(state.current_length, MAX_OSCILLATION_LENGTH);
                    previous = state.start_offset;
                }
            }
            assert_eq!(state.start_offset, 0.0);
            assert_eq!(state.current_length, 0.5);
        }
    }

    #[test]
    fn test_phase_durations() {
        let params = with_length(0.5, 1.0);
        let mut state = AnimationState::new(0.5);

        let extend = ticks_until_phase_change(&mut state, &params);
        assert!((20..=21).contains(&extend), "extend took {extend}");

        let retract = ticks_until_phase_change(&mut state, &params);
        assert!((50..=51).contains(&retract), "retract took {retract}");
    }

    #[test]
    fn test_max_length_target_flips_immediately() {
        let params = with_length(MAX_OSCILLATION_LENGTH, 1.0);
        let mut state = AnimationState::new(MAX_OSCILLATION_LENGTH);

        state.tick(&params);
        assert_eq!(state.phase, Phase::Retracting);
        state.tick(&params);
        assert_eq!(state.phase, Phase::Extending);
        assert_eq!(state.current_length, MAX_OSCILLATION_LENGTH);
        assert_eq!(state.start_offset, 0.0);
    }

    #[test]
    fn test_rotation_step_and_wrap() {
        let params = with_length(0.8, 1.0);
        let mut state = AnimationState::new(0.8);
        for i in 1..=179 {
            state.tick(&params);
            assert_eq!(state.rotation, 2.0 * i as f64);
        }
        state.tick(&params);
        assert_eq!(state.rotation, 0.0);
    }

    #[test]
    fn test_rotation_scales_with_speed() {
        let params = with_length(0.8, 1.5);
        let mut state = AnimationState::new(0.8);
        state.tick(&params);
        assert_eq!(state.rotation, 3.0);

        let params = with_length(0.8, -1.0);
        let mut state = AnimationState::new(0.8);
        state.tick(&params);
        assert_eq!(state.rotation, 358.0);
    }

    #[test]
    fn test_reset_keeps_rotation() {
        let params = with_length(0.3, 1.0);
        let mut state = AnimationState::new(0.3);
        for _ in 0..30 {
            state.tick(&params);
        }
        let rotation = state.rotation;

        state.reset(0.4);
        assert_eq!(state.rotation, rotation);
        assert_eq!(state.current_length, 0.4);
        assert_eq!(state.start_offset, 0.0);
        assert_eq!(state.phase, Phase::Extending);
    }
}
