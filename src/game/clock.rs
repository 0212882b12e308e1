/// Restartable stopwatch over host-supplied wall-clock seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stopwatch {
    started_at: f64,
}

impl Stopwatch {
    pub fn started_at(now: f64) -> Self {
        Self { started_at: now }
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        now - self.started_at
    }

    pub fn restart(&mut self, now: f64) {
        self.started_at = now;
    }
}
