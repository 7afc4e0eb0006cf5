use std::time::Instant;

// Weight for the exponential FPS average; heavy enough that a single long
// frame doesn't make the readout jump.
const FPS_SMOOTHING: f32 = 0.9;

/// Per-frame timing: delta and accumulated time in milliseconds, plus a
/// smoothed FPS estimate. Advanced once per frame by
/// [`crate::View::begin_frame`]; the first tick yields a zero delta.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    delta_ms: f32,
    global_ms: f32,
    smoothed_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance the clock to `now`. Split out from [`Self::tick`] so tests
    /// can drive the clock without sleeping.
    pub fn tick_at(&mut self, now: Instant) {
        let Some(last) = self.last_tick.replace(now) else {
            return;
        };
        self.delta_ms = now.duration_since(last).as_secs_f32() * 1000.0;
        self.global_ms += self.delta_ms;

        if self.delta_ms > 0.0 {
            let instant_fps = 1000.0 / self.delta_ms;
            self.smoothed_fps = if self.smoothed_fps == 0.0 {
                instant_fps
            } else {
                self.smoothed_fps * FPS_SMOOTHING + instant_fps * (1.0 - FPS_SMOOTHING)
            };
        }
    }

    /// Milliseconds between the two most recent ticks.
    pub fn delta_time(&self) -> f32 {
        self.delta_ms
    }

    /// Milliseconds accumulated since the first tick.
    pub fn global_time(&self) -> f32 {
        self.global_ms
    }

    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::FrameClock;

    #[test]
    fn first_tick_has_zero_delta() {
        let mut clock = FrameClock::new();
        clock.tick_at(Instant::now());
        assert_eq!(clock.delta_time(), 0.0);
        assert_eq!(clock.global_time(), 0.0);
    }

    #[test]
    fn deltas_accumulate_into_global_time() {
        let start = Instant::now();
        let mut clock = FrameClock::new();
        clock.tick_at(start);
        clock.tick_at(start + Duration::from_millis(16));
        assert!((clock.delta_time() - 16.0).abs() < 0.1);
        clock.tick_at(start + Duration::from_millis(48));
        assert!((clock.delta_time() - 32.0).abs() < 0.1);
        assert!((clock.global_time() - 48.0).abs() < 0.2);
    }

    #[test]
    fn fps_tracks_a_steady_frame_rate() {
        let start = Instant::now();
        let mut clock = FrameClock::new();
        clock.tick_at(start);
        for frame in 1..=100 {
            clock.tick_at(start + Duration::from_millis(10 * frame));
        }
        assert!((clock.fps() - 100.0).abs() < 1.0, "fps = {}", clock.fps());
    }
}
