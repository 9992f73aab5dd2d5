use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps consecutive generations of a run at least `delay` apart.
pub struct Pacer {
    delay: Duration,
    timer: Instant,
    period_smoothed: f64,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timer: Instant::now(),
            period_smoothed: 0.,
        }
    }

    /// Generations per second, smoothed over the recent periods.
    ///
    /// Zero until `wait` has been called.
    pub fn rate(&self) -> f64 {
        if self.period_smoothed == 0. {
            return 0.;
        }
        1. / self.period_smoothed
    }

    /// Sleeps for what is left of the delay since the previous call.
    pub fn wait(&mut self) {
        let elapsed = self.timer.elapsed();
        if self.delay > elapsed {
            sleep(self.delay - elapsed);
        }

        let period = self.timer.elapsed().as_secs_f64();
        self.period_smoothed += (period - self.period_smoothed) * 0.1;

        self.timer = Instant::now();
    }
}
