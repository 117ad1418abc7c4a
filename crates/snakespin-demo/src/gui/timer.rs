use glib::{ControlFlow, SourceId};
use std::time::Duration;

/// A recurring main-loop timeout that is removed when the guard drops.
pub struct TickTimer {
    source: Option<SourceId>,
}

impl TickTimer {
    pub fn start<F>(interval: Duration, on_tick: F) -> Self
    where
        F: Fn() + 'static,
    {
        let source = glib::timeout_add_local(interval, move || {
            on_tick();
            ControlFlow::Continue
        });
        Self {
            source: Some(source),
        }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        if let Some(source) = self.source.take() {
            source.remove();
        }
    }
}
