//! Frame clock
//!
//! Turns animation-frame timestamps (milliseconds) into per-tick `dt`
//! seconds. The first frame has no previous timestamp and yields 0.

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame (0 on the first)
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt
    }

    /// Forget the previous timestamp so the next frame starts from 0 again
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
