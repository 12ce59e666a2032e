use rand::Rng;

use crate::game::difficulty::TimeRange;

/// Draw a fresh target time uniformly from the range.
///
/// Called once per round; the draw is never reused across rounds.
pub fn generate_target(range: TimeRange) -> f64 {
    let mut rng = rand::thread_rng();
    rng.gen_range(range.min..=range.max)
}
