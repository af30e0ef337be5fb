/// Upper bound for the smoothed estimate, in px/ms.
pub const MAX_VELOCITY: f64 = 2.2;

const SMOOTHING: f64 = 0.25;

/// Exponential moving average of scroll speed in pixels per millisecond.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollVelocity {
    last: Option<(f64, f64)>,
    smoothed: f64,
}

impl ScrollVelocity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll position sampled at `at_ms`.
    pub fn sample(&mut self, position: f64, at_ms: f64) {
        if !position.is_finite() || !at_ms.is_finite() {
            return;
        }
        if let Some((last_pos, last_at)) = self.last {
            let dt = at_ms - last_at;
            if dt <= 0.0 {
                return;
            }
            let instant = ((position - last_pos).abs() / dt).min(MAX_VELOCITY);
            self.smoothed = (SMOOTHING * instant + (1.0 - SMOOTHING) * self.smoothed)
                .clamp(0.0, MAX_VELOCITY);
        }
        self.last = Some((position, at_ms));
    }

    pub fn current(&self) -> f64 {
        self.smoothed
    }

    /// Velocity as a fraction of the clamp ceiling, in [0, 1].
    pub fn intensity(&self) -> f64 {
        self.current() / MAX_VELOCITY
    }
}
