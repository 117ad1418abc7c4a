//! A snake-shaped loading spinner: an arc that extends and retracts while it
//! rotates, decorated with scales, dots or a zigzag.
//!
//! The animation is a plain state machine ([`AnimationState`]) advanced once per
//! [`TICK_INTERVAL`]. Each tick yields a [`Frame`] that can be serialized to SVG
//! ([`svg::render`]) or drawn through cairo ([`paint::paint`]).

pub mod animation;
pub mod frame;
pub mod geometry;
pub mod indicator;
pub mod paint;
pub mod params;
pub mod pattern;
pub mod svg;

pub use animation::{AnimationState, Phase, TICK_INTERVAL};
pub use frame::Frame;
pub use indicator::Indicator;
pub use params::{Color, IndicatorKind, Params, ParamsError, Pattern};
