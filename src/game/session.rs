use std::time::Instant;

use crate::error::{Error, Result};
use crate::game::score::{score, RoundResult};

/// One in-flight round: the target to hit and the monotonic start instant.
///
/// Beginning a round while another is held replaces it (the old round is
/// abandoned and never scored); finishing consumes the session, so a round
/// cannot be stopped twice. The session never blocks — the caller's event
/// loop owns the wait between start and stop.
#[derive(Clone, Copy, Debug)]
pub struct RoundSession {
    target: f64,
    started: Instant,
}

impl RoundSession {
    pub fn begin(target: f64) -> RoundSession {
        RoundSession {
            target,
            started: Instant::now(),
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Elapsed seconds so far, for live display while running
    pub fn elapsed(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Stop the round now and score it
    pub fn finish(self) -> Result<RoundResult> {
        self.stop_at(Instant::now())
    }

    /// Stop the round at an explicit instant.
    ///
    /// A stop instant before the start instant signals a clock anomaly;
    /// the round is discarded and the caller may retry with a new one.
    pub fn stop_at(self, now: Instant) -> Result<RoundResult> {
        let elapsed = now
            .checked_duration_since(self.started)
            .ok_or_else(|| Error::Clock("stop instant precedes start instant".to_string()))?
            .as_secs_f64();
        Ok(score(elapsed, self.target))
    }
}
