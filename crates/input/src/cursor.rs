/// Tracks absolute cursor positions and yields per-sample deltas.
///
/// The first sample after construction (or after `reset`) produces a zero
/// delta: without that, the jump from the window center to wherever the
/// cursor happens to be would snap the view on the first frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct CursorTracker {
    last: Option<(f32, f32)>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an absolute cursor position; returns `(dx, dy)` relative to the
    /// previous sample. The vertical delta is sign-inverted so screen-down
    /// cursor motion increases pitch.
    pub fn sample(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = match self.last {
            Some((lx, ly)) => (x - lx, ly - y),
            None => (0.0, 0.0),
        };
        self.last = Some((x, y));
        delta
    }

    /// Forget the last position, so the next sample produces a zero delta.
    /// Called when the cursor is recaptured.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
