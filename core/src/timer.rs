use core::time::Duration;
use web_time::Instant;

/// Elapsed-time counter owned by a game.
///
/// Counts whole seconds between [`start`](Self::start) and
/// [`stop`](Self::stop). Starting a running stopwatch keeps the original start
/// so a game never has two counters going, and stopping is idempotent. The
/// host only needs to poll [`elapsed_secs`](Self::elapsed_secs) from its own
/// interval while [`is_running`](Self::is_running).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    stopped_at: Option<Instant>,
}

impl Stopwatch {
    pub const fn new() -> Self {
        Self {
            started_at: None,
            stopped_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        if self.started_at.is_none() {
            log::debug!("stopwatch started");
            self.started_at = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    /// Freezes the counter, does nothing if it never started or already stopped.
    pub fn stop_at(&mut self, now: Instant) {
        if self.is_running() {
            self.stopped_at = Some(now);
            log::debug!("stopwatch stopped after {}s", self.elapsed_secs_at(now));
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// How many seconds have passed since start, 0 if it hasn't started
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs_at(Instant::now())
    }

    pub fn elapsed_secs_at(&self, now: Instant) -> u32 {
        let Some(started_at) = self.started_at else {
            return 0;
        };
        let end = self.stopped_at.unwrap_or(now);
        let elapsed = end.checked_duration_since(started_at).unwrap_or(Duration::ZERO);
        u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn zero_before_start() {
        let watch = Stopwatch::new();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed_secs(), 0);
    }

    #[test]
    fn counts_whole_seconds_while_running() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start_at(t0);

        assert!(watch.is_running());
        assert_eq!(watch.elapsed_secs_at(t0 + Duration::from_millis(999)), 0);
        assert_eq!(watch.elapsed_secs_at(t0 + secs(3)), 3);
    }

    #[test]
    fn restart_while_running_keeps_first_start() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start_at(t0);
        watch.start_at(t0 + secs(5));

        assert_eq!(watch.elapsed_secs_at(t0 + secs(7)), 7);
    }

    #[test]
    fn stop_freezes_and_is_idempotent() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start_at(t0);
        watch.stop_at(t0 + secs(4));
        watch.stop_at(t0 + secs(9));

        assert!(!watch.is_running());
        assert_eq!(watch.elapsed_secs_at(t0 + secs(60)), 4);

        watch.start_at(t0 + secs(10));
        assert!(!watch.is_running());
    }

    #[test]
    fn stopping_unstarted_does_nothing() {
        let mut watch = Stopwatch::new();
        watch.stop();
        assert_eq!(watch, Stopwatch::new());
    }

    #[test]
    fn reset_clears_everything() {
        let t0 = Instant::now();
        let mut watch = Stopwatch::new();
        watch.start_at(t0);
        watch.stop_at(t0 + secs(2));
        watch.reset();

        assert_eq!(watch.elapsed_secs(), 0);
        watch.start_at(t0 + secs(3));
        assert!(watch.is_running());
    }
}
