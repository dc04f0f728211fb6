use std::time::{Duration, Instant};

/// Fixed-rate frame deadlines. Input arriving early does not start a new frame.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    tick: Duration,
    deadline: Instant,
}

impl FramePacer {
    pub fn new(tick: Duration, now: Instant) -> Self {
        Self {
            tick,
            deadline: now + tick,
        }
    }

    /// Time left in the current frame, `None` once its deadline has passed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let left = self.deadline.saturating_duration_since(now);
        if left.is_zero() {
            None
        } else {
            Some(left)
        }
    }

    /// Moves to the next frame. A frame that overran (a blocking art fetch)
    /// restarts the schedule from `now` instead of bursting to catch up.
    pub fn advance(&mut self, now: Instant) {
        self.deadline += self.tick;
        if self.deadline <= now {
            self.deadline = now + self.tick;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(16);

    #[test]
    fn early_input_only_shortens_the_wait() {
        let start = Instant::now();
        let pacer = FramePacer::new(TICK, start);
        // mouse motion 3ms in: the frame still runs until its deadline
        let after_event = start + Duration::from_millis(3);
        assert_eq!(pacer.remaining(after_event), Some(Duration::from_millis(13)));
        assert_eq!(pacer.remaining(start + TICK), None);
    }

    #[test]
    fn frames_advance_by_whole_ticks() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(TICK, start);
        pacer.advance(start + Duration::from_millis(17));
        assert_eq!(
            pacer.remaining(start + Duration::from_millis(20)),
            Some(Duration::from_millis(12))
        );
    }

    #[test]
    fn overrun_restarts_schedule() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(TICK, start);
        let late = start + Duration::from_millis(500);
        pacer.advance(late);
        assert_eq!(pacer.remaining(late), Some(TICK));
    }
}
