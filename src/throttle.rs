use instant::Instant;
use std::time::Duration;

/// Leading-edge throttle: the first call passes, later calls within
/// `interval` of the last accepted one are dropped.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready_at(&mut self, now: Instant) -> bool {
        match self.last {
            Some(prev) if now < prev || now.duration_since(prev) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    pub fn ready(&mut self) -> bool {
        self.ready_at(Instant::now())
    }
}
